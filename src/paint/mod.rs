/// Paint and color normalization
///
/// - `color`: RGBA (0.0-1.0 channels) to `#RRGGBB` plus combined opacity
/// - `fill`: raw paint records to [`crate::types::SimplifiedFill`]
pub mod color;
pub mod fill;

// Re-export commonly used items
pub use color::{convert_color, RgbaColor};
pub use fill::{parse_paint, PaintKind};
