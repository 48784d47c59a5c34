#![allow(non_snake_case)]

use cansi::{Color, Intensity};
use dioxus::prelude::*;

use crate::{palette::BorderRadius, style::Style};

/// Renders terminal coloured text, such as a colourised span trace, as
/// styled spans inside a preformatted block.
#[inline_props]
pub fn AnsiBlock(cx: Scope, ansi_text: String) -> Element {
    let slices = cansi::v3::categorise_text(ansi_text);

    let style = Style::new()
        .set("background-color", "#181818")
        .set("color", "#cccccc")
        .set("padding", "1rem")
        .set("overflow-x", "auto")
        .set("border-radius", BorderRadius::Md.css());

    cx.render(rsx! {
        pre {
            "data-ui": "ansi",
            style: "{style}",
            code {
                slices.into_iter().map(|slice| {
                    let color = slice.fg.map(terminal_color).unwrap_or("inherit");
                    let font_weight = slice.intensity.map(intensity_weight).unwrap_or("inherit");

                    rsx! {
                        span {
                            style: "color: {color}; font-weight: {font_weight};",
                            slice.text
                        }
                    }
                })
            }
        }
    })
}

fn terminal_color(color: Color) -> &'static str {
    match color {
        Color::Black => "#000000",
        Color::Red => "#cd3131",
        Color::Green => "#0dbc79",
        Color::Yellow => "#e5e510",
        Color::Blue => "#2472c8",
        Color::Magenta => "#bc3fbc",
        Color::Cyan => "#11a8cd",
        Color::White => "#e5e5e5",
        Color::BrightBlack => "#666666",
        Color::BrightRed => "#f14c4c",
        Color::BrightGreen => "#23d18b",
        Color::BrightYellow => "#f5f543",
        Color::BrightBlue => "#3b8eea",
        Color::BrightMagenta => "#d670d6",
        Color::BrightCyan => "#0598bc",
        Color::BrightWhite => "#a5a5a5",
    }
}

fn intensity_weight(intensity: Intensity) -> &'static str {
    match intensity {
        Intensity::Normal => "normal",
        Intensity::Bold => "bold",
        Intensity::Faint => "lighter",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coloured_slices_become_spans() {
        let html = dioxus_ssr::render_lazy(rsx! {
            AnsiBlock { ansi_text: "\u{1b}[31mfailed\u{1b}[0m at riders".to_string() }
        });

        assert!(html.contains("color: #cd3131;"));
        assert!(html.contains(">failed</span>"));
        assert!(html.contains("at riders"));
    }
}
