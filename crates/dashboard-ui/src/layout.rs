#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::{
    palette::{colored_shadow, gradient, BorderRadius, Palette, ELEVATION_SHADOW},
    style::{spacing, Style},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxVariant {
    #[default]
    Contained,
    Gradient,
}

/// General purpose container. Every prop maps onto one css declaration, and
/// undeclared props produce no declaration at all.
#[derive(Props)]
pub struct MdBoxProps<'a> {
    #[props(optional)]
    p: Option<i8>,
    #[props(optional)]
    mx: Option<i8>,
    #[props(optional)]
    my: Option<i8>,
    #[props(optional)]
    mt: Option<i8>,
    #[props(optional)]
    mb: Option<i8>,
    #[props(optional)]
    px: Option<i8>,
    #[props(optional)]
    py: Option<i8>,
    #[props(optional)]
    pt: Option<i8>,
    #[props(optional)]
    pb: Option<i8>,
    #[props(default)]
    variant: BoxVariant,
    #[props(optional)]
    bg_color: Option<Palette>,
    #[props(optional)]
    color: Option<Palette>,
    #[props(optional)]
    border_radius: Option<BorderRadius>,
    #[props(optional)]
    colored_shadow: Option<Palette>,
    #[props(default)]
    display_flex: bool,
    #[props(optional)]
    justify_content: Option<&'a str>,
    #[props(optional)]
    align_items: Option<&'a str>,
    children: Element<'a>,
}

fn box_style(props: &MdBoxProps<'_>) -> Style {
    let background = props.bg_color.map(|color| match props.variant {
        BoxVariant::Contained => color.main().to_string(),
        BoxVariant::Gradient => gradient(color),
    });

    let background_property = match props.variant {
        BoxVariant::Contained => "background-color",
        BoxVariant::Gradient => "background-image",
    };

    Style::new()
        .spacing("padding", props.p)
        .spacing("margin-left", props.mx)
        .spacing("margin-right", props.mx)
        .spacing("margin-top", props.my.or(props.mt))
        .spacing("margin-bottom", props.my.or(props.mb))
        .spacing("padding-left", props.px)
        .spacing("padding-right", props.px)
        .spacing("padding-top", props.py.or(props.pt))
        .spacing("padding-bottom", props.py.or(props.pb))
        .set_opt(background_property, background)
        .set_opt("color", props.color.map(Palette::main))
        .set_opt("border-radius", props.border_radius.map(BorderRadius::css))
        .set_opt("box-shadow", props.colored_shadow.map(colored_shadow))
        .set_if(props.display_flex, "display", "flex")
        .set_opt("justify-content", props.justify_content)
        .set_opt("align-items", props.align_items)
}

pub fn MdBox<'a>(cx: Scope<'a, MdBoxProps<'a>>) -> Element<'a> {
    let style = box_style(cx.props);

    cx.render(rsx! {
        div {
            "data-ui": "box",
            style: "{style}",
            &cx.props.children
        }
    })
}

/// Spacing of the closest enclosing grid container, applied by its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GridSpacing(u8);

#[derive(Props)]
pub struct GridProps<'a> {
    #[props(default)]
    container: bool,
    #[props(optional)]
    spacing: Option<u8>,
    #[props(default)]
    item: bool,
    #[props(optional)]
    xs: Option<u8>,
    children: Element<'a>,
}

/// Width of an item spanning `columns` out of twelve.
pub fn column_width(columns: u8) -> String {
    let percent = f64::from(columns.clamp(1, 12)) * 100.0 / 12.0;
    let formatted = format!("{percent:.4}");

    format!("{}%", formatted.trim_end_matches('0').trim_end_matches('.'))
}

pub fn Grid<'a>(cx: Scope<'a, GridProps<'a>>) -> Element<'a> {
    let mut style = Style::new().set("box-sizing", "border-box");

    if cx.props.container {
        let gap = cx.props.spacing.unwrap_or(0);
        cx.provide_context(GridSpacing(gap));

        style = style
            .set("display", "flex")
            .set("flex-wrap", "wrap")
            .set("width", format!("calc(100% + {})", spacing(gap)))
            .set("margin-top", spacing(-i32::from(gap)))
            .set("margin-left", spacing(-i32::from(gap)));
    }

    if cx.props.item {
        let gap = cx
            .consume_context::<GridSpacing>()
            .map_or(0, |GridSpacing(gap)| gap);

        style = style
            .set("margin", "0")
            .set("padding-top", spacing(gap))
            .set("padding-left", spacing(gap));
    }

    if let Some(columns) = cx.props.xs {
        let width = column_width(columns);

        style = style
            .set("flex-basis", width.clone())
            .set("flex-grow", "0")
            .set("max-width", width);
    }

    cx.render(rsx! {
        div {
            "data-ui": "grid",
            style: "{style}",
            &cx.props.children
        }
    })
}

#[derive(Props)]
pub struct CardProps<'a> {
    children: Element<'a>,
}

pub fn Card<'a>(cx: Scope<'a, CardProps<'a>>) -> Element<'a> {
    let style = Style::new()
        .set("display", "flex")
        .set("flex-direction", "column")
        .set("position", "relative")
        .set("min-width", "0")
        .set("overflow-wrap", "break-word")
        .set("background-color", Palette::White.main())
        .set("background-clip", "border-box")
        .set("border-radius", BorderRadius::Xl.css())
        .set("box-shadow", ELEVATION_SHADOW);

    cx.render(rsx! {
        div {
            "data-ui": "card",
            style: "{style}",
            &cx.props.children
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_width_is_a_fraction_of_twelve() {
        assert_eq!(column_width(12), "100%");
        assert_eq!(column_width(6), "50%");
        assert_eq!(column_width(4), "33.3333%");
        assert_eq!(column_width(0), "8.3333%");
    }

    #[test]
    fn gradient_box_declares_only_given_props() {
        let html = dioxus_ssr::render_lazy(rsx! {
            MdBox {
                mx: 2,
                mt: -3,
                variant: BoxVariant::Gradient,
                bg_color: Palette::Info,
                border_radius: BorderRadius::Lg,
                "header"
            }
        });

        assert!(html.contains(
            "margin-left: 16px; margin-right: 16px; margin-top: -24px; \
             background-image: linear-gradient(195deg, #49a3f1, #1A73E8); \
             border-radius: 0.5rem;"
        ));
        assert!(!html.contains("padding"));
        assert!(html.contains(">header</div>"));
    }

    #[test]
    fn contained_box_uses_flat_background() {
        let html = dioxus_ssr::render_lazy(rsx! {
            MdBox { bg_color: Palette::Success, "ok" }
        });

        assert!(html.contains("background-color: #4CAF50;"));
    }

    #[test]
    fn grid_items_pick_up_container_spacing() {
        let html = dioxus_ssr::render_lazy(rsx! {
            Grid {
                container: true,
                spacing: 3,
                Grid { item: true, xs: 12, "cell" }
            }
        });

        assert!(html.contains("width: calc(100% + 24px); margin-top: -24px; margin-left: -24px;"));
        assert!(html.contains("padding-top: 24px; padding-left: 24px; flex-basis: 100%;"));
    }

    #[test]
    fn card_is_a_single_raised_surface() {
        let html = dioxus_ssr::render_lazy(rsx! {
            Card { "body" }
        });

        assert_eq!(html.matches("data-ui=\"card\"").count(), 1);
        assert!(html.contains("border-radius: 0.75rem;"));
    }

    #[test]
    fn widest_grid_spacing_does_not_overflow() {
        let html = dioxus_ssr::render_lazy(rsx! {
            Grid {
                container: true,
                spacing: u8::MAX,
                Grid { item: true, "cell" }
            }
        });

        assert!(html.contains("width: calc(100% + 2040px); margin-top: -2040px;"));
        assert!(html.contains("padding-top: 2040px;"));
    }
}
