//! Ink predicate
//!
//! Decides whether a single sheet pixel belongs to a glyph stroke. Font
//! sheets come out of different editors, so which sample is tested and
//! how it is compared are both configurable.

use image::{Pixel, Rgba};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pixel sample tested by an [`InkRule`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Red,
    Green,
    Blue,
    /// Opacity (the default: ink is whatever is painted)
    #[default]
    Alpha,
    /// 8-bit grayscale of the pixel
    Luma,
}

impl Channel {
    /// Pick this channel's sample out of a pixel
    pub fn sample(&self, pixel: &Rgba<u8>) -> u8 {
        match self {
            Channel::Red => pixel[0],
            Channel::Green => pixel[1],
            Channel::Blue => pixel[2],
            Channel::Alpha => pixel[3],
            Channel::Luma => pixel.to_luma()[0],
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Alpha => "alpha",
            Channel::Luma => "luma",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" | "r" => Ok(Channel::Red),
            "green" | "g" => Ok(Channel::Green),
            "blue" | "b" => Ok(Channel::Blue),
            "alpha" | "a" => Ok(Channel::Alpha),
            "luma" | "gray" | "grey" => Ok(Channel::Luma),
            other => Err(format!(
                "unknown channel '{other}' (expected red, green, blue, alpha or luma)"
            )),
        }
    }
}

/// How a sample is compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InkTest {
    /// Only a sample equal to this value is ink
    Exact(u8),
    /// Any nonzero sample is ink
    #[default]
    NonZero,
}

impl InkTest {
    pub fn matches(&self, sample: u8) -> bool {
        match *self {
            InkTest::Exact(value) => sample == value,
            InkTest::NonZero => sample != 0,
        }
    }
}

impl fmt::Display for InkTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InkTest::Exact(value) => write!(f, "exact:{value}"),
            InkTest::NonZero => f.write_str("nonzero"),
        }
    }
}

impl FromStr for InkTest {
    type Err = String;

    /// Accepts `nonzero` or `exact:<0-255>`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("nonzero") {
            return Ok(InkTest::NonZero);
        }

        match s.split_once(':') {
            Some((kind, value)) if kind.eq_ignore_ascii_case("exact") => value
                .trim()
                .parse::<u8>()
                .map(InkTest::Exact)
                .map_err(|e| format!("invalid exact ink value '{value}': {e}")),
            _ => Err(format!(
                "unknown ink test '{s}' (expected 'nonzero' or 'exact:<0-255>')"
            )),
        }
    }
}

/// Channel plus comparison: the full ink predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InkRule {
    pub channel: Channel,
    pub test: InkTest,
}

impl InkRule {
    pub fn new(channel: Channel, test: InkTest) -> Self {
        Self { channel, test }
    }

    /// Whether this pixel is part of a glyph stroke
    pub fn is_ink(&self, pixel: &Rgba<u8>) -> bool {
        self.test.matches(self.channel.sample(pixel))
    }
}

impl fmt::Display for InkRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.channel, self.test)
    }
}
