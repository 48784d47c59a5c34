//! Design-system primitives for server rendered dashboard pages.
//!
//! Every primitive renders a single root element tagged with a `data-ui`
//! attribute and styled inline, so pages need no stylesheet.

mod ansi;
mod layout;
mod palette;
mod style;
mod typography;

pub use ansi::AnsiBlock;
pub use layout::{column_width, BoxVariant, Card, Grid, MdBox};
pub use palette::{colored_shadow, gradient, BorderRadius, Palette, ELEVATION_SHADOW};
pub use style::{spacing, Style, SPACING_UNIT};
pub use typography::{FontWeight, Typography, TypographyVariant};
