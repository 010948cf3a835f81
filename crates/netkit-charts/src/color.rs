// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use netkit_model::error::{NetKitError, Result};

/// A validated `#RRGGBB` hex color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexColor(String);

impl HexColor {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        let valid = value.len() == 7
            && value.starts_with('#')
            && value[1..].chars().all(|c| c.is_ascii_hexdigit());
        if !valid {
            return Err(NetKitError::invalid("color", "must match #RRGGBB"));
        }
        Ok(HexColor(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Fixed color palettes a chart cycles through when it has more series
/// than the palette has colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Default,
    Diverging,
    Sequential,
    Qualitative,
}

impl ColorScheme {
    fn palette(self) -> &'static [&'static str] {
        match self {
            ColorScheme::Default => &["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd"],
            ColorScheme::Diverging => &["#2166ac", "#67a9cf", "#f7f7f7", "#ef8a62", "#b2182b"],
            ColorScheme::Sequential => &["#f7fbff", "#c6dbef", "#6baed6", "#2171b5", "#08306b"],
            ColorScheme::Qualitative => &["#66c2a5", "#fc8d62", "#8da0cb", "#e78ac3", "#a6d854", "#ffd92f"],
        }
    }

    /// Cycles through the palette for series index `index`.
    pub fn color_for_index(self, index: usize) -> HexColor {
        let palette = self.palette();
        HexColor(palette[index % palette.len()].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_hex_color() {
        assert!(HexColor::new("#1f77b4").is_ok());
    }

    #[test]
    fn rejects_malformed_hex_color() {
        assert!(HexColor::new("1f77b4").is_err());
        assert!(HexColor::new("#1f77").is_err());
        assert!(HexColor::new("#gggggg").is_err());
    }

    #[test]
    fn palette_cycles_past_its_length() {
        let first = ColorScheme::Default.color_for_index(0);
        let wrapped = ColorScheme::Default.color_for_index(5);
        assert_eq!(first, wrapped);
    }
}
