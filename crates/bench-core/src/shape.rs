//! Record shape tag.

use serde::{Deserialize, Serialize};

/// The two benchmarked record shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Two-field `{name, age}` record.
    Simple,
    /// Analytics event with nested properties.
    Event,
}

impl Shape {
    pub const ALL: [Shape; 2] = [Shape::Simple, Shape::Event];

    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Simple => "simple",
            Shape::Event => "event",
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Shape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(Shape::Simple),
            "event" | "complex" => Ok(Shape::Event),
            _ => Err(format!("Unknown shape: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_from_str() {
        assert_eq!("simple".parse::<Shape>().unwrap(), Shape::Simple);
        assert_eq!("EVENT".parse::<Shape>().unwrap(), Shape::Event);
        assert_eq!("complex".parse::<Shape>().unwrap(), Shape::Event);
        assert!("nested".parse::<Shape>().is_err());
    }

    #[test]
    fn test_shape_display_round_trips() {
        for shape in Shape::ALL {
            assert_eq!(shape.to_string().parse::<Shape>().unwrap(), shape);
        }
    }
}
