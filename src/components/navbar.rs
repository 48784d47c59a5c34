#![allow(non_snake_case)]

use dashboard_ui::{FontWeight, MdBox, Palette, Typography, TypographyVariant};
use dioxus::prelude::*;

/// Top bar above the page content.
pub fn DashboardNavbar(cx: Scope) -> Element {
    cx.render(rsx! {
        header {
            "data-region": "navbar",
            style: "position: sticky; top: 0; margin-bottom: 8px;",
            MdBox {
                py: 1,
                display_flex: true,
                justify_content: "space-between",
                align_items: "center",
                nav {
                    "aria-label": "breadcrumb",
                    a {
                        href: "/",
                        style: "color: #7b809a; text-decoration: none;",
                        Typography { variant: TypographyVariant::Button, color: Palette::Secondary, "Home" }
                    }
                }
                Typography {
                    variant: TypographyVariant::H6,
                    font_weight: FontWeight::Bold,
                    "Saaf Dashboard"
                }
            }
        }
    })
}
