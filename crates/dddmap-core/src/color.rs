//! Color handling for dddmap diagrams
//!
//! Table cells carry colors as plain strings because renderers consume them
//! verbatim. The [`Color`] type validates such a string as a CSS color with
//! the `color` crate while remembering the spelling it was written with.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// A validated color that keeps its original spelling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Color {
    source: String,
}

impl Color {
    /// Create a new `Color` from a string.
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use dddmap_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// assert_eq!(red.as_str(), "#ff0000");
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        let trimmed = color_str.trim();
        match DynamicColor::from_str(trimmed) {
            Ok(_) => Ok(Self {
                source: trimmed.to_string(),
            }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// The color as it was written, suitable for passing to a renderer.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("white").expect("'white' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}
