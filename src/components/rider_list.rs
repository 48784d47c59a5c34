#![allow(non_snake_case)]

use dashboard_ui::{BorderRadius, FontWeight, MdBox, Palette, Typography, TypographyVariant};
use dioxus::prelude::*;

use crate::riders::{RiderFeed, RiderStatus};

const COLUMNS: [&str; 5] = ["Rider", "Phone", "Area", "Status", "Joined"];

const HEAD_CELL: &str = "padding: 12px 24px; text-align: left; border-bottom: 1px solid #f0f2f5; \
                         color: #7b809a; font-size: 0.65rem; text-transform: uppercase; opacity: 0.7;";
const BODY_CELL: &str = "padding: 12px 24px; text-align: left; border-bottom: 1px solid #f0f2f5;";

#[derive(Props)]
pub struct RiderFeedProviderProps<'a> {
    feed: RiderFeed,
    children: Element<'a>,
}

/// Makes `feed` available to every [`RiderListWidget`] rendered below it.
pub fn RiderFeedProvider<'a>(cx: Scope<'a, RiderFeedProviderProps<'a>>) -> Element<'a> {
    cx.provide_context(cx.props.feed.clone());

    cx.render(rsx! { &cx.props.children })
}

/// Table of riders. Renders whatever state the surrounding feed is in and
/// shows a loading state when there is no feed at all.
pub fn RiderListWidget(cx: Scope) -> Element {
    let feed = cx.consume_context::<RiderFeed>().unwrap_or_default();

    let body = match &feed {
        RiderFeed::Loading => rsx! {
            ListingMessage { "Loading riders..." }
        },
        RiderFeed::Failed(message) => rsx! {
            MdBox {
                p: 3,
                Typography {
                    variant: TypographyVariant::Body2,
                    color: Palette::Error,
                    "Unable to load riders: {message}"
                }
            }
        },
        RiderFeed::Loaded(riders) if riders.is_empty() => rsx! {
            ListingMessage { "No riders found" }
        },
        RiderFeed::Loaded(riders) => {
            let head = COLUMNS.iter().map(|column| {
                rsx! {
                    th { style: "{HEAD_CELL}", "{column}" }
                }
            });

            let rows = riders.iter().map(|rider| {
                let joined = rider.joined.date();

                rsx! {
                    tr {
                        key: "{rider.id}",
                        td {
                            style: "{BODY_CELL}",
                            MdBox {
                                Typography {
                                    variant: TypographyVariant::Body2,
                                    font_weight: FontWeight::Medium,
                                    "{rider.name}"
                                }
                            }
                            Typography { variant: TypographyVariant::Caption, color: Palette::Secondary, "{rider.email}" }
                        }
                        td {
                            style: "{BODY_CELL}",
                            Typography { variant: TypographyVariant::Caption, "{rider.phone}" }
                        }
                        td {
                            style: "{BODY_CELL}",
                            Typography { variant: TypographyVariant::Caption, "{rider.area}" }
                        }
                        td {
                            style: "{BODY_CELL}",
                            StatusBadge { status: rider.status }
                        }
                        td {
                            style: "{BODY_CELL}",
                            Typography { variant: TypographyVariant::Caption, "{joined}" }
                        }
                    }
                }
            });

            rsx! {
                MdBox {
                    pt: 3,
                    table {
                        style: "width: 100%; border-collapse: collapse;",
                        thead { tr { head } }
                        tbody { rows }
                    }
                }
            }
        }
    };

    cx.render(rsx! {
        div {
            "data-region": "listing",
            body
        }
    })
}

#[derive(Props)]
struct ListingMessageProps<'a> {
    children: Element<'a>,
}

fn ListingMessage<'a>(cx: Scope<'a, ListingMessageProps<'a>>) -> Element<'a> {
    cx.render(rsx! {
        MdBox {
            p: 3,
            Typography {
                variant: TypographyVariant::Body2,
                color: Palette::Secondary,
                &cx.props.children
            }
        }
    })
}

#[inline_props]
fn StatusBadge(cx: Scope, status: RiderStatus) -> Element {
    let color = match status {
        RiderStatus::Active => Palette::Success,
        RiderStatus::Inactive => Palette::Secondary,
        RiderStatus::Suspended => Palette::Error,
    };

    cx.render(rsx! {
        MdBox {
            px: 1,
            bg_color: color,
            color: Palette::White,
            border_radius: BorderRadius::Md,
            Typography {
                variant: TypographyVariant::Button,
                font_weight: FontWeight::Bold,
                color: Palette::White,
                "{status.label()}"
            }
        }
    })
}
