use eframe::egui::Color32;
use palette::Srgb;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Hex colour parsing
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
#[error("invalid hex colour '{input}': {reason}")]
pub struct ColorError {
    pub input: String,
    reason: String,
}

/// Parse a `#RRGGBB` (or `RRGGBB`, `#RGB`) string into a [`Color32`].
pub fn parse_hex(input: &str) -> Result<Color32, ColorError> {
    let rgb: Srgb<u8> = input.trim().parse().map_err(|e| ColorError {
        input: input.to_string(),
        reason: format!("{e}"),
    })?;
    Ok(Color32::from_rgb(rgb.red, rgb.green, rgb.blue))
}

/// Inverse of [`parse_hex`], always upper-case with a leading `#`.
pub fn to_hex(color: Color32) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
}

// ---------------------------------------------------------------------------
// Fixed analysis palette
// ---------------------------------------------------------------------------

/// Hex codes of the analysis palette.
pub const BELOW_HEX: &str = "#D20824";
pub const ABOVE_HEX: &str = "#006CA9";
pub const REFERENCE_HEX: &str = "#221F20";
pub const OVERALL_HEX: &str = "#2E8B57";
pub const GRID_HEX: &str = "#C5C5C4";

/// The colours used to tell the two threshold groups apart in both charts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Measurements strictly below the threshold.
    pub below: Color32,
    /// Measurements at or above the threshold.
    pub above: Color32,
    /// Threshold reference line, bar edges and text.
    pub reference: Color32,
    /// Overall mean line in the histogram.
    pub overall: Color32,
    pub grid: Color32,
}

impl Palette {
    /// The fixed analysis colours, parsed from their hex codes.
    pub fn from_hex_codes() -> Result<Self, ColorError> {
        Ok(Self {
            below: parse_hex(BELOW_HEX)?,
            above: parse_hex(ABOVE_HEX)?,
            reference: parse_hex(REFERENCE_HEX)?,
            overall: parse_hex(OVERALL_HEX)?,
            grid: parse_hex(GRID_HEX)?,
        })
    }
}

/// Default series colour cycle ("tab10").
pub fn tab10() -> Vec<Color32> {
    vec![
        Color32::from_rgb(31, 119, 180),
        Color32::from_rgb(255, 127, 14),
        Color32::from_rgb(44, 160, 44),
        Color32::from_rgb(214, 39, 40),
        Color32::from_rgb(148, 103, 189),
        Color32::from_rgb(140, 86, 75),
        Color32::from_rgb(227, 119, 194),
        Color32::from_rgb(127, 127, 127),
        Color32::from_rgb(188, 189, 34),
        Color32::from_rgb(23, 190, 207),
    ]
}
