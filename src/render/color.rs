// SPDX-License-Identifier: GPL-3.0-or-later
use std::convert::From;
use std::fmt;

use image::{Rgb, Rgba};

/// An 8-bit RGB color used for canvas fills and caption text.
///
/// This type can be formatted as a hex code using the standard formatting
/// syntax. The formatted output will have a leading '#'.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

impl From<&Rgb<u8>> for Color {
    fn from(pixel: &Rgb<u8>) -> Self {
        Self::new(pixel[0], pixel[1], pixel[2])
    }
}

impl From<&Rgba<u8>> for Color {
    fn from(pixel: &Rgba<u8>) -> Self {
        Self::new(pixel[0], pixel[1], pixel[2])
    }
}

impl fmt::LowerHex for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}",
            self.red(),
            self.green(),
            self.blue()
        )
    }
}

impl fmt::UpperHex for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02X}{:02X}{:02X}",
            self.red(),
            self.green(),
            self.blue()
        )
    }
}

impl Color {
    pub(crate) const BLACK: Self = Self {
        red: u8::MIN,
        green: u8::MIN,
        blue: u8::MIN,
    };

    pub(crate) const WHITE: Self = Self {
        red: u8::MAX,
        green: u8::MAX,
        blue: u8::MAX,
    };

    /// Create a new [Color] with the given 8-bit color values.
    pub(crate) const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// The 8-bit color value of the red component.
    pub(crate) fn red(&self) -> u8 {
        self.red
    }

    /// The 8-bit color value of the green component.
    pub(crate) fn green(&self) -> u8 {
        self.green
    }

    /// The 8-bit color value of the blue component.
    pub(crate) fn blue(&self) -> u8 {
        self.blue
    }

    /// This color as an RGBA pixel with the given alpha.
    pub(crate) fn to_rgba(self, alpha: u8) -> Rgba<u8> {
        Rgba([self.red, self.green, self.blue, alpha])
    }
}
