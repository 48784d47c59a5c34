//! Colours, gradients, shadows and radii of the dashboard theme.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Palette {
    Primary,
    Secondary,
    Info,
    Success,
    Warning,
    Error,
    Light,
    #[default]
    Dark,
    White,
}

impl Palette {
    /// Flat colour used for text and contained backgrounds.
    pub const fn main(self) -> &'static str {
        match self {
            Palette::Primary => "#e91e63",
            Palette::Secondary => "#7b809a",
            Palette::Info => "#1A73E8",
            Palette::Success => "#4CAF50",
            Palette::Warning => "#fb8c00",
            Palette::Error => "#F44335",
            Palette::Light => "#f0f2f5",
            Palette::Dark => "#344767",
            Palette::White => "#ffffff",
        }
    }

    /// Start and end stops of the gradient variant.
    pub const fn gradient_stops(self) -> (&'static str, &'static str) {
        match self {
            Palette::Primary => ("#EC407A", "#D81B60"),
            Palette::Secondary => ("#747b8a", "#495361"),
            Palette::Info => ("#49a3f1", "#1A73E8"),
            Palette::Success => ("#66BB6A", "#43A047"),
            Palette::Warning => ("#FFA726", "#FB8C00"),
            Palette::Error => ("#EF5350", "#E53935"),
            Palette::Light => ("#EBEFF4", "#CED4DA"),
            Palette::Dark => ("#42424a", "#191919"),
            Palette::White => ("#ffffff", "#ffffff"),
        }
    }

    /// Tint used by [`colored_shadow`].
    const fn shadow_tint(self) -> &'static str {
        match self {
            Palette::Primary => "rgba(233, 30, 99, 0.4)",
            Palette::Secondary => "rgba(110, 110, 110, 0.4)",
            Palette::Info => "rgba(0, 187, 212, 0.4)",
            Palette::Success => "rgba(76, 175, 80, 0.4)",
            Palette::Warning => "rgba(255, 152, 0, 0.4)",
            Palette::Error => "rgba(244, 67, 54, 0.4)",
            Palette::Light => "rgba(173, 181, 189, 0.4)",
            Palette::Dark => "rgba(64, 64, 64, 0.4)",
            Palette::White => "rgba(255, 255, 255, 0.4)",
        }
    }
}

pub fn gradient(color: Palette) -> String {
    let (start, end) = color.gradient_stops();

    format!("linear-gradient(195deg, {start}, {end})")
}

pub fn colored_shadow(color: Palette) -> String {
    format!(
        "0rem 0.25rem 1.25rem 0rem rgba(0, 0, 0, 0.14), 0rem 0.4375rem 0.625rem -0.3125rem {}",
        color.shadow_tint()
    )
}

/// Resting shadow of raised surfaces such as cards.
pub const ELEVATION_SHADOW: &str =
    "0rem 0.25rem 0.375rem -0.0625rem rgba(0, 0, 0, 0.1), 0rem 0.125rem 0.25rem -0.0625rem rgba(0, 0, 0, 0.06)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderRadius {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
    Section,
}

impl BorderRadius {
    pub const fn css(self) -> &'static str {
        match self {
            BorderRadius::Xs => "0.125rem",
            BorderRadius::Sm => "0.25rem",
            BorderRadius::Md => "0.375rem",
            BorderRadius::Lg => "0.5rem",
            BorderRadius::Xl => "0.75rem",
            BorderRadius::Xxl => "1rem",
            BorderRadius::Section => "10rem",
        }
    }
}
