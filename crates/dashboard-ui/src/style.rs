use std::fmt;

/// Size of one spacing unit in pixels.
pub const SPACING_UNIT: i32 = 8;

/// Converts a number of spacing units into a css length.
pub fn spacing(units: impl Into<i32>) -> String {
    format!("{}px", units.into() * SPACING_UNIT)
}

/// An ordered list of inline css declarations.
///
/// Declarations are rendered in the order they were set, so two styles built
/// from the same props always produce the same string.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Style {
    declarations: Vec<(&'static str, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.declarations.push((property, value.into()));
        self
    }

    pub fn set_opt<T>(self, property: &'static str, value: Option<T>) -> Self
    where
        T: Into<String>,
    {
        match value {
            Some(value) => self.set(property, value),
            None => self,
        }
    }

    pub fn set_if(self, condition: bool, property: &'static str, value: &'static str) -> Self {
        if condition {
            self.set(property, value)
        } else {
            self
        }
    }

    pub fn spacing(self, property: &'static str, units: Option<i8>) -> Self {
        self.set_opt(property, units.map(spacing))
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (property, value)) in self.declarations.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }

            write!(f, "{property}: {value};")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scales_by_unit() {
        assert_eq!(spacing(0), "0px");
        assert_eq!(spacing(2), "16px");
        assert_eq!(spacing(-3), "-24px");
    }

    #[test]
    fn declarations_keep_insertion_order() {
        let style = Style::new()
            .spacing("margin-top", Some(-3))
            .spacing("padding-left", None)
            .set("display", "flex")
            .set_if(false, "position", "relative");

        assert_eq!(style.to_string(), "margin-top: -24px; display: flex;");
    }

    #[test]
    fn empty_style_renders_nothing() {
        assert!(Style::new().is_empty());
        assert_eq!(Style::new().to_string(), "");
    }
}
