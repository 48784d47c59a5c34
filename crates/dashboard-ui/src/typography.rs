#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::{palette::Palette, style::Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypographyVariant {
    H4,
    H5,
    H6,
    #[default]
    Body2,
    Caption,
    Button,
}

impl TypographyVariant {
    const fn font_size(self) -> &'static str {
        match self {
            TypographyVariant::H4 => "1.5rem",
            TypographyVariant::H5 => "1.25rem",
            TypographyVariant::H6 => "1rem",
            TypographyVariant::Body2 => "0.875rem",
            TypographyVariant::Caption | TypographyVariant::Button => "0.75rem",
        }
    }

    const fn line_height(self) -> &'static str {
        match self {
            TypographyVariant::H4 | TypographyVariant::H5 => "1.375",
            TypographyVariant::H6 => "1.625",
            TypographyVariant::Body2 => "1.6",
            TypographyVariant::Caption => "1.25",
            TypographyVariant::Button => "1.5",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Medium,
    Bold,
}

impl FontWeight {
    pub const fn css(self) -> &'static str {
        match self {
            FontWeight::Light => "300",
            FontWeight::Regular => "400",
            FontWeight::Medium => "600",
            FontWeight::Bold => "700",
        }
    }
}

#[derive(Props)]
pub struct TypographyProps<'a> {
    #[props(default)]
    variant: TypographyVariant,
    #[props(default)]
    font_weight: FontWeight,
    #[props(default)]
    color: Palette,
    children: Element<'a>,
}

/// Text in the theme's type scale. Headings render as `h4`..`h6`, body text
/// as `p` and the small variants as `span`.
pub fn Typography<'a>(cx: Scope<'a, TypographyProps<'a>>) -> Element<'a> {
    let TypographyProps {
        variant,
        font_weight,
        color,
        ..
    } = *cx.props;

    let style = Style::new()
        .set("margin", "0")
        .set("font-family", "\"Roboto\", \"Helvetica\", \"Arial\", sans-serif")
        .set("font-size", variant.font_size())
        .set("line-height", variant.line_height())
        .set("font-weight", font_weight.css())
        .set("color", color.main())
        .set_if(
            matches!(variant, TypographyVariant::Button),
            "text-transform",
            "uppercase",
        );

    cx.render(match variant {
        TypographyVariant::H4 => rsx! { h4 { "data-ui": "typography", style: "{style}", &cx.props.children } },
        TypographyVariant::H5 => rsx! { h5 { "data-ui": "typography", style: "{style}", &cx.props.children } },
        TypographyVariant::H6 => rsx! { h6 { "data-ui": "typography", style: "{style}", &cx.props.children } },
        TypographyVariant::Body2 => rsx! { p { "data-ui": "typography", style: "{style}", &cx.props.children } },
        TypographyVariant::Caption | TypographyVariant::Button => {
            rsx! { span { "data-ui": "typography", style: "{style}", &cx.props.children } }
        }
    })
}
