//! Curve selectors: band material and motion direction.

use core::fmt;
use core::str::FromStr;

use exosense_errors::ConfigError;
use serde::{Deserialize, Serialize};

/// Elastic band material, identified by its color code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    /// Softest band
    #[serde(alias = "b")]
    Blue,
    /// Medium-soft band
    #[serde(alias = "g")]
    Green,
    /// Medium-stiff band
    #[serde(alias = "r")]
    Red,
    /// Stiffest band
    #[serde(alias = "y")]
    Yellow,
}

impl Material {
    /// All materials in table order.
    pub const ALL: [Material; 4] = [
        Material::Blue,
        Material::Green,
        Material::Red,
        Material::Yellow,
    ];

    /// Row of this material in the coefficient table.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Material::Blue => 0,
            Material::Green => 1,
            Material::Red => 2,
            Material::Yellow => 3,
        }
    }

    /// Single-character tag.
    pub const fn tag(self) -> char {
        match self {
            Material::Blue => 'b',
            Material::Green => 'g',
            Material::Red => 'r',
            Material::Yellow => 'y',
        }
    }

    /// Resolve a single-character tag.
    pub fn from_tag(tag: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.tag() == tag.to_ascii_lowercase())
    }

    /// Lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Material::Blue => "blue",
            Material::Green => "green",
            Material::Red => "red",
            Material::Yellow => "yellow",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Material {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(material) = Self::from_tag(c) {
                return Ok(material);
            }
        }
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                ConfigError::invalid_value(
                    "material",
                    format!("'{trimmed}' is not one of b, g, r, y"),
                )
            })
    }
}

/// Direction of joint motion; loading and unloading follow different curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Angle increasing (band loading)
    #[serde(alias = "i")]
    Increasing,
    /// Angle decreasing (band unloading)
    #[serde(alias = "d")]
    Decreasing,
}

impl Direction {
    /// Both directions in table order.
    pub const ALL: [Direction; 2] = [Direction::Increasing, Direction::Decreasing];

    /// Column of this direction in the coefficient table.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Direction::Increasing => 0,
            Direction::Decreasing => 1,
        }
    }

    /// Single-character tag.
    pub const fn tag(self) -> char {
        match self {
            Direction::Increasing => 'i',
            Direction::Decreasing => 'd',
        }
    }

    /// Resolve a single-character tag.
    pub fn from_tag(tag: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.tag() == tag.to_ascii_lowercase())
    }

    /// Lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Increasing => "increasing",
            Direction::Decreasing => "decreasing",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(direction) = Self::from_tag(c) {
                return Ok(direction);
            }
        }
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                ConfigError::invalid_value(
                    "direction",
                    format!("'{trimmed}' is not one of i, d"),
                )
            })
    }
}
