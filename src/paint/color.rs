use crate::css::round_to_hundredths;
use crate::types::ColorValue;
use serde_json::Value as JsonValue;

/// RGBA color with every channel in the 0.0-1.0 range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbaColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl RgbaColor {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Read a color object (`{r, g, b, a}`) from the API
    ///
    /// `r`, `g` and `b` must be numeric; `a` defaults to 1.0 when absent.
    pub fn from_json(value: &JsonValue) -> Option<Self> {
        let obj = value.as_object()?;
        let r = obj.get("r")?.as_f64()?;
        let g = obj.get("g")?.as_f64()?;
        let b = obj.get("b")?.as_f64()?;
        let a = obj.get("a").and_then(|v| v.as_f64()).unwrap_or(1.0);

        Some(Self { r, g, b, a })
    }
}

/// Convert an RGBA color to a `#RRGGBB` hex string and a combined opacity
///
/// The external `opacity` (usually the paint's own opacity) and the color's
/// alpha channel compose multiplicatively; the product is rounded to two
/// decimal places.
///
/// Channels are not validated: values outside 0.0-1.0 yield a hex string
/// that does not describe the intended color, but never an error.
///
/// # Examples
/// ```
/// use figma_simplify::paint::{convert_color, RgbaColor};
///
/// let color = convert_color(&RgbaColor::new(0.0, 0.0, 1.0, 0.5), 0.5);
/// assert_eq!(color.hex, "#0000FF");
/// assert_eq!(color.opacity, 0.25);
/// ```
pub fn convert_color(color: &RgbaColor, opacity: f64) -> ColorValue {
    let r = channel_to_int(color.r);
    let g = channel_to_int(color.g);
    let b = channel_to_int(color.b);

    // Leading 1 guarantees six digits after it for in-range channels
    let packed = (1i64 << 24)
        .wrapping_add(r.wrapping_shl(16))
        .wrapping_add(g.wrapping_shl(8))
        .wrapping_add(b);
    let digits = format!("{:X}", packed);
    let hex = format!("#{}", digits.get(1..).unwrap_or_default());

    ColorValue {
        hex,
        opacity: round_to_hundredths(opacity * color.a),
    }
}

/// Scale a 0.0-1.0 channel to 0-255, rounding half up
fn channel_to_int(value: f64) -> i64 {
    (value * 255.0).round() as i64
}
