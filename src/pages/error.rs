use std::backtrace::{Backtrace, BacktraceStatus};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dashboard_ui::{AnsiBlock, MdBox, Palette, Typography, TypographyVariant};
use dioxus::prelude::*;

use crate::router::middleware::{catch_panic::CaughtPanic, RequestMetadata};

use super::Page;

pub fn not_found(path: &str) -> Response {
    self::error(
        StatusCode::NOT_FOUND,
        rsx! {
            div {
                code { path }
                " not found"
            }
        },
    )
    .into_response()
}

pub fn panic_error(request: RequestMetadata, panic_info: CaughtPanic) -> Response {
    let request_id = request.request_id;

    self::error(
        StatusCode::INTERNAL_SERVER_ERROR,
        if cfg!(debug_assertions) {
            rsx! {
                div { "The application panicked while handling request {request_id}." }
                div {
                    if let Some(message) = panic_info.payload_str() {
                        rsx! { "Message: {message}" }
                    } else {
                        rsx! { "Unknown panic message" }
                    }
                }
                div {
                    if let Some(location) = panic_info.location() {
                        rsx! { "Location: {location}" }
                    }
                }

                h2 { "Span Trace" }
                AnsiBlock {
                    ansi_text: color_spantrace::colorize(panic_info.span_trace()).to_string()
                }

                h2 { "Backtrace" }
                backtrace(panic_info.backtrace())
            }
        } else {
            rsx! {
                div { "Something went wrong while handling request {request_id}." }
            }
        },
    )
    .into_response()
}

fn backtrace<'a, 'b>(backtrace: &'b Backtrace) -> LazyNodes<'a, 'b> {
    rsx! {
        pre {
            code {
                match backtrace.status() {
                    BacktraceStatus::Captured => rsx!{
                        "{backtrace}"
                    },
                    BacktraceStatus::Unsupported => rsx! {
                        "capturing backtraces is unsupported"
                    },
                    BacktraceStatus::Disabled => rsx! {
                        "capturing of backtraces is disabled, enable with RUST_BACKTRACE=1"
                    },
                    _ => rsx! {
                        "backtrace is in an unknown state: {backtrace.status():?}"
                    }
                }
            }
        }
    }
}

fn error<'a>(status: StatusCode, body: LazyNodes<'a, 'a>) -> (StatusCode, Page<'a>) {
    let status_code = status.as_u16();
    let status_reason = status.canonical_reason().unwrap_or("Unknown Error");

    (
        status,
        Page {
            title: rsx! { "{status_code} ({status_reason})" },
            head: None,
            content: rsx! {
                MdBox {
                    p: 3,
                    header {
                        class: "error_message",
                        Typography {
                            variant: TypographyVariant::H4,
                            color: Palette::Error,
                            "{status_code} | {status_reason}"
                        }
                    }
                    main {
                        body
                    },
                    nav {
                        a { href: "/", "return home" }
                    },
                }
            },
        },
    )
}
