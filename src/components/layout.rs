#![allow(non_snake_case)]

use dashboard_ui::{BorderRadius, BoxVariant, MdBox, Palette, Style, Typography, TypographyVariant};
use dioxus::prelude::*;

const SIDENAV_ROUTES: &[(&str, &str)] = &[("Dashboard", "/"), ("Riders", "/riders")];

#[derive(Props)]
pub struct DashboardLayoutProps<'a> {
    children: Element<'a>,
}

/// Page frame: the side navigation plus the main content column.
pub fn DashboardLayout<'a>(cx: Scope<'a, DashboardLayoutProps<'a>>) -> Element<'a> {
    let frame = Style::new()
        .set("display", "flex")
        .set("min-height", "100vh")
        .set("background-color", Palette::Light.main());

    let content = Style::new()
        .set("flex", "1")
        .set("min-width", "0")
        .set("padding", "24px");

    cx.render(rsx! {
        div {
            "data-region": "frame",
            style: "{frame}",
            Sidenav {}
            main {
                style: "{content}",
                &cx.props.children
            }
        }
    })
}

fn Sidenav(cx: Scope) -> Element {
    let aside = Style::new()
        .set("width", "250px")
        .set("margin", "16px")
        .set("flex-shrink", "0");

    let links = SIDENAV_ROUTES.iter().map(|&(label, href)| {
        rsx! {
            li {
                style: "list-style: none; margin: 4px 0;",
                a {
                    href: "{href}",
                    style: "display: block; padding: 10px 16px; color: #ffffff; text-decoration: none;",
                    "{label}"
                }
            }
        }
    });

    cx.render(rsx! {
        aside {
            style: "{aside}",
            MdBox {
                variant: BoxVariant::Gradient,
                bg_color: Palette::Dark,
                border_radius: BorderRadius::Xl,
                py: 3,
                px: 2,
                Typography {
                    variant: TypographyVariant::H6,
                    color: Palette::White,
                    "Saaf Pakistan"
                }
                ul {
                    style: "padding: 0; margin: 16px 0 0 0;",
                    links
                }
            }
        }
    })
}
