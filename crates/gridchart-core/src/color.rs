//! Color handling for chart elements.
//!
//! [`Color`] wraps the `DynamicColor` type from the `color` crate so that any
//! CSS color string (`"#bcd7ff"`, `"rgb(255, 0, 0)"`, `"white"`) can be used
//! for node fills, edge strokes and cluster backgrounds.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;
use serde::Deserialize;

/// A parsed CSS color.
#[derive(Clone, Copy, PartialEq, Debug, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a CSS color string.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridchart_core::color::Color;
    ///
    /// let fill = Color::new("#bcd7ff").unwrap();
    /// let stroke = Color::new("black").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Opaque white, the default node fill
    pub fn white() -> Self {
        Self::new("white").expect("'white' is a valid CSS color")
    }

    /// Returns an ID-safe string for this color, used to name arrow markers.
    ///
    /// ```
    /// use gridchart_core::color::Color;
    ///
    /// let color = Color::new("#ff8000").unwrap();
    /// let id = color.to_id_safe_string();
    /// assert!(id.chars().all(|c| c.is_alphanumeric() || c == '_'));
    /// ```
    pub fn to_id_safe_string(self) -> String {
        let mut sanitized = self
            .to_string()
            .replace('#', "hex")
            .replace(['(', ')', ',', ' ', ';', '.', '%', '/'], "_");

        // SVG ids must start with a letter
        if sanitized.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            sanitized = format!("c_{sanitized}");
        }

        sanitized
    }

    /// Returns the alpha component between 0.0 (transparent) and 1.0 (opaque)
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#ff0000").is_ok());
        assert!(Color::new("rgb(10, 20, 30)").is_ok());

        let err = Color::new("not-a-color").unwrap_err();
        assert!(err.contains("not-a-color"));
    }

    #[test]
    fn test_color_default_is_black() {
        assert_eq!(Color::default(), Color::new("black").unwrap());
        assert_eq!(Color::default().to_string(), "black");
    }

    #[test]
    fn test_color_white() {
        assert_eq!(Color::white(), Color::new("white").unwrap());
        assert_eq!(Color::white().alpha(), 1.0);
    }

    #[test]
    fn test_color_to_id_safe_string() {
        let safe_id = Color::new("#efffb9").unwrap().to_id_safe_string();
        assert!(!safe_id.contains('#'));
        assert!(safe_id.chars().all(|c| c.is_alphanumeric() || c == '_'));
        assert!(safe_id.chars().next().is_some_and(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn test_color_try_from_string() {
        let color = Color::try_from("#d00000".to_string()).unwrap();
        assert_eq!(color, Color::new("#d00000").unwrap());

        assert!(Color::try_from("nope".to_string()).is_err());
    }
}
