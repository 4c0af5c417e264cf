//! Tile values and the color/shape compatibility rule
//!
//! A tile is an immutable color/shape pair. Two tiles may share a line only
//! when exactly one of the two attributes matches.

use std::fmt;
use std::str::FromStr;

use crate::io::error::{GridError, invalid_parameter};

/// Tile color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Red
    Red,
    /// Orange
    Orange,
    /// Yellow
    Yellow,
    /// Green
    Green,
    /// Blue
    Blue,
    /// Purple
    Purple,
}

impl Color {
    /// Every color in declaration order
    pub const ALL: [Self; 6] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Purple,
    ];

    /// Display name of the color
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Orange => "Orange",
            Self::Yellow => "Yellow",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Purple => "Purple",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                invalid_parameter(
                    "color",
                    &s,
                    &"expected one of red, orange, yellow, green, blue, purple",
                )
            })
    }
}

/// Tile shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Circle
    Circle,
    /// Square
    Square,
    /// Diamond
    Diamond,
    /// Eight-pointed star
    Starburst,
    /// Clover
    Clover,
    /// X-shaped cross
    Cross,
}

impl Shape {
    /// Every shape in declaration order
    pub const ALL: [Self; 6] = [
        Self::Circle,
        Self::Square,
        Self::Diamond,
        Self::Starburst,
        Self::Clover,
        Self::Cross,
    ];

    /// Display name of the shape
    pub const fn name(self) -> &'static str {
        match self {
            Self::Circle => "Circle",
            Self::Square => "Square",
            Self::Diamond => "Diamond",
            Self::Starburst => "Starburst",
            Self::Clover => "Clover",
            Self::Cross => "Cross",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Short names used on the console
        if s.eq_ignore_ascii_case("star") {
            return Ok(Self::Starburst);
        }
        if s.eq_ignore_ascii_case("x") {
            return Ok(Self::Cross);
        }

        Self::ALL
            .into_iter()
            .find(|shape| shape.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                invalid_parameter(
                    "shape",
                    &s,
                    &"expected one of circle, square, diamond, starburst, clover, cross",
                )
            })
    }
}

/// An immutable color/shape pair
///
/// Equality and hashing are structural. Tiles have no ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    color: Color,
    shape: Shape,
}

impl Tile {
    /// Create a tile
    pub const fn new(color: Color, shape: Shape) -> Self {
        Self { color, shape }
    }

    /// Color of the tile
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Shape of the tile
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    /// Check whether two tiles may share a line
    ///
    /// Exactly one attribute has to match: same color with a different shape,
    /// or same shape with a different color. An absent tile is never
    /// compatible, and neither is an identical one.
    pub fn compatible_with(&self, other: Option<&Self>) -> bool {
        other.is_some_and(|other| (self.color == other.color) != (self.shape == other.shape))
    }

    /// All 36 distinct tiles, grouped by color
    pub fn all() -> impl Iterator<Item = Self> {
        Color::ALL.into_iter().flat_map(|color| {
            Shape::ALL
                .into_iter()
                .map(move |shape| Self::new(color, shape))
        })
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.color, self.shape)
    }
}

impl FromStr for Tile {
    type Err = GridError;

    /// Parse `color/shape` or `color shape`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s
            .split(|c: char| c == '/' || c.is_whitespace())
            .filter(|part| !part.is_empty());

        match (parts.next(), parts.next(), parts.next()) {
            (Some(color), Some(shape), None) => Ok(Self::new(color.parse()?, shape.parse()?)),
            _ => Err(invalid_parameter("tile", &s, &"expected <color>/<shape>")),
        }
    }
}
