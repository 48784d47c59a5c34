#![allow(non_snake_case)]

use dashboard_ui::{
    BorderRadius, BoxVariant, Card, FontWeight, Grid, MdBox, Palette, Typography,
    TypographyVariant,
};
use dioxus::prelude::*;

use crate::components::{DashboardLayout, DashboardNavbar, RiderListWidget};

/// Static configuration of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageConfig {
    pub title: &'static str,
}

pub const RIDERS_PAGE: PageConfig = PageConfig {
    title: "All Riders",
};

#[derive(Props)]
pub struct TitledCardProps<'a> {
    title: &'a str,
    children: Element<'a>,
}

/// A card with a floating gradient header holding `title`, followed by the
/// card body.
pub fn TitledCard<'a>(cx: Scope<'a, TitledCardProps<'a>>) -> Element<'a> {
    cx.render(rsx! {
        Card {
            MdBox {
                mx: 2,
                mt: -3,
                py: 3,
                px: 2,
                variant: BoxVariant::Gradient,
                bg_color: Palette::Info,
                border_radius: BorderRadius::Lg,
                colored_shadow: Palette::Info,
                MdBox {
                    pt: 2,
                    pb: 2,
                    px: 2,
                    display_flex: true,
                    justify_content: "space-between",
                    align_items: "center",
                    Typography {
                        variant: TypographyVariant::H6,
                        font_weight: FontWeight::Medium,
                        color: Palette::White,
                        "{cx.props.title}"
                    }
                }
            }
            div { &cx.props.children }
        }
    })
}

/// The riders overview. Takes no input: rider data is the listing widget's
/// concern.
pub fn RidersPage(cx: Scope) -> Element {
    cx.render(rsx! {
        DashboardLayout {
            DashboardNavbar {}
            MdBox {
                py: 3,
                MdBox {
                    Grid {
                        container: true,
                        spacing: 3,
                        Grid {
                            item: true,
                            xs: 12,
                            TitledCard {
                                title: RIDERS_PAGE.title,
                                RiderListWidget {}
                            }
                        }
                    }
                }
            }
        }
    })
}
