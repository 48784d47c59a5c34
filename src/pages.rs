use axum::{
    http,
    response::{IntoResponse, Response},
};
use dioxus::prelude::*;

mod error;
mod riders;

pub use {
    error::{not_found, panic_error},
    riders::{PageConfig, RidersPage, TitledCard, RIDERS_PAGE},
};

pub struct Page<'e> {
    pub title: LazyNodes<'e, 'e>,
    pub head: Option<LazyNodes<'e, 'e>>,
    pub content: LazyNodes<'e, 'e>,
}

impl<'e> Page<'e> {
    fn wrap(self) -> LazyNodes<'e, 'e> {
        rsx! {
            head {
                meta { charset: "utf-8"}
                meta {
                    http_equiv: "X-UA-Compatible",
                    content: "IE=edge"
                }
                meta {
                    name: "viewport",
                    content: "width=device-width, initial-scale=1.0"
                }

                link {
                    rel: "stylesheet",
                    href: "https://fonts.googleapis.com/css?family=Roboto:300,400,500,700,900&display=swap",
                }

                title { self.title, " - Saaf Dashboard" }

                self.head
            }
            body {
                style: "margin: 0; font-family: Roboto, Helvetica, Arial, sans-serif;",
                self.content
            }
        }
    }

    /// Renders the full html document.
    pub fn render(self) -> String {
        let page = dioxus_ssr::render_lazy(self.wrap());

        format!("<!DOCTYPE html><html lang=\"en\">{page}</html>")
    }
}

impl<'e> IntoResponse for Page<'e> {
    fn into_response(self) -> Response {
        let headers = [(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("text/html; charset=UTF-8"),
        )];

        (headers, self.render()).into_response()
    }
}
