use crate::error::{Result, SimplifyError};
use crate::paint::color::{convert_color, RgbaColor};
use crate::types::{Gradient, GradientStop, SimplifiedFill, Vector};
use serde_json::Value as JsonValue;

/// The paint kinds this crate understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintKind {
    Solid,
    Image,
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
}

impl PaintKind {
    /// Parse a paint `type` tag; unknown tags are an error
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag {
            "SOLID" => Ok(PaintKind::Solid),
            "IMAGE" => Ok(PaintKind::Image),
            "GRADIENT_LINEAR" => Ok(PaintKind::GradientLinear),
            "GRADIENT_RADIAL" => Ok(PaintKind::GradientRadial),
            "GRADIENT_ANGULAR" => Ok(PaintKind::GradientAngular),
            "GRADIENT_DIAMOND" => Ok(PaintKind::GradientDiamond),
            other => Err(SimplifyError::UnrecognizedPaintKind(other.to_string())),
        }
    }
}

/// Convert one raw paint (fill or stroke) into a [`SimplifiedFill`]
///
/// - `IMAGE`: `imageRef` and `scaleMode` are carried through as-is
/// - `SOLID`: `color` is converted with the paint's `opacity` (default 1.0)
/// - `GRADIENT_*`: handle positions are copied and every stop color is
///   converted, keeping stop order
///
/// # Errors
/// * `UnrecognizedPaintKind` - The paint's `type` is missing or unknown
/// * `MalformedPaint` - A `SOLID` paint has no usable `color`
///
/// # Examples
/// ```
/// use figma_simplify::paint::parse_paint;
/// use figma_simplify::types::SimplifiedFill;
/// use serde_json::json;
///
/// let fill = parse_paint(&json!({
///     "type": "SOLID",
///     "color": {"r": 1.0, "g": 0.0, "b": 0.0, "a": 1.0}
/// }))
/// .unwrap();
///
/// match fill {
///     SimplifiedFill::Solid(color) => assert_eq!(color.hex, "#FF0000"),
///     _ => unreachable!(),
/// }
/// ```
pub fn parse_paint(raw: &JsonValue) -> Result<SimplifiedFill> {
    let tag = raw.get("type").and_then(|v| v.as_str()).unwrap_or_default();

    let fill = match PaintKind::from_tag(tag)? {
        PaintKind::Image => SimplifiedFill::Image {
            image_ref: string_field(raw, "imageRef"),
            scale_mode: string_field(raw, "scaleMode"),
        },
        PaintKind::Solid => {
            let color = raw
                .get("color")
                .and_then(RgbaColor::from_json)
                .ok_or_else(|| SimplifyError::MalformedPaint {
                    kind: tag.to_string(),
                    reason: "missing or invalid color".to_string(),
                })?;
            let opacity = raw.get("opacity").and_then(|v| v.as_f64()).unwrap_or(1.0);

            SimplifiedFill::Solid(convert_color(&color, opacity))
        }
        PaintKind::GradientLinear => SimplifiedFill::GradientLinear(parse_gradient(raw)),
        PaintKind::GradientRadial => SimplifiedFill::GradientRadial(parse_gradient(raw)),
        PaintKind::GradientAngular => SimplifiedFill::GradientAngular(parse_gradient(raw)),
        PaintKind::GradientDiamond => SimplifiedFill::GradientDiamond(parse_gradient(raw)),
    };

    Ok(fill)
}

fn parse_gradient(raw: &JsonValue) -> Gradient {
    let gradient_handle_positions = raw
        .get("gradientHandlePositions")
        .and_then(|v| v.as_array())
        .map(|positions| positions.iter().filter_map(parse_vector).collect())
        .unwrap_or_default();

    // Stops carry no opacity of their own, so only the color alpha counts
    let gradient_stops = raw
        .get("gradientStops")
        .and_then(|v| v.as_array())
        .map(|stops| stops.iter().filter_map(parse_gradient_stop).collect())
        .unwrap_or_default();

    Gradient {
        gradient_handle_positions,
        gradient_stops,
    }
}

fn parse_gradient_stop(stop: &JsonValue) -> Option<GradientStop> {
    let position = stop.get("position")?.as_f64()?;
    let color = RgbaColor::from_json(stop.get("color")?)?;

    Some(GradientStop {
        position,
        color: convert_color(&color, 1.0),
    })
}

fn parse_vector(value: &JsonValue) -> Option<Vector> {
    Some(Vector {
        x: value.get("x")?.as_f64()?,
        y: value.get("y")?.as_f64()?,
    })
}

fn string_field(raw: &JsonValue, key: &str) -> Option<String> {
    raw.get(key).and_then(|v| v.as_str()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColorValue;
    use serde_json::json;

    #[test]
    fn test_solid_paint() {
        let fill = parse_paint(&json!({
            "type": "SOLID",
            "opacity": 0.5,
            "color": {"r": 0.0, "g": 0.0, "b": 1.0, "a": 0.5}
        }))
        .unwrap();

        assert_eq!(
            fill,
            SimplifiedFill::Solid(ColorValue {
                hex: "#0000FF".to_string(),
                opacity: 0.25,
            })
        );
    }

    #[test]
    fn test_solid_paint_defaults_opacity_to_one() {
        let fill = parse_paint(&json!({
            "type": "SOLID",
            "color": {"r": 1.0, "g": 1.0, "b": 1.0, "a": 0.4}
        }))
        .unwrap();

        match fill {
            SimplifiedFill::Solid(color) => {
                assert_eq!(color.hex, "#FFFFFF");
                assert_eq!(color.opacity, 0.4);
            }
            other => panic!("Expected solid fill, got {:?}", other),
        }
    }

    #[test]
    fn test_solid_paint_without_color_fails() {
        let err = parse_paint(&json!({"type": "SOLID", "opacity": 1.0})).unwrap_err();
        assert!(matches!(err, SimplifyError::MalformedPaint { .. }));
    }

    #[test]
    fn test_image_paint() {
        let fill = parse_paint(&json!({
            "type": "IMAGE",
            "imageRef": "8f2c0a",
            "scaleMode": "FILL",
            "color": {"r": 1.0, "g": 0.0, "b": 0.0, "a": 1.0}
        }))
        .unwrap();

        assert_eq!(
            fill,
            SimplifiedFill::Image {
                image_ref: Some("8f2c0a".to_string()),
                scale_mode: Some("FILL".to_string()),
            }
        );
    }

    #[test]
    fn test_gradient_paint_keeps_stop_order() {
        let fill = parse_paint(&json!({
            "type": "GRADIENT_LINEAR",
            "gradientHandlePositions": [
                {"x": 0.0, "y": 0.5},
                {"x": 1.0, "y": 0.5},
                {"x": 0.0, "y": 1.0}
            ],
            "gradientStops": [
                {"position": 0.0, "color": {"r": 1.0, "g": 0.0, "b": 0.0, "a": 1.0}},
                {"position": 0.5, "color": {"r": 0.0, "g": 1.0, "b": 0.0, "a": 0.5}},
                {"position": 1.0, "color": {"r": 0.0, "g": 0.0, "b": 1.0, "a": 1.0}}
            ]
        }))
        .unwrap();

        let gradient = match fill {
            SimplifiedFill::GradientLinear(gradient) => gradient,
            other => panic!("Expected linear gradient, got {:?}", other),
        };

        assert_eq!(gradient.gradient_handle_positions.len(), 3);
        assert_eq!(gradient.gradient_handle_positions[1], Vector { x: 1.0, y: 0.5 });

        let positions: Vec<f64> = gradient.gradient_stops.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![0.0, 0.5, 1.0]);

        let hexes: Vec<&str> = gradient
            .gradient_stops
            .iter()
            .map(|s| s.color.hex.as_str())
            .collect();
        assert_eq!(hexes, vec!["#FF0000", "#00FF00", "#0000FF"]);
        assert_eq!(gradient.gradient_stops[1].color.opacity, 0.5);
    }

    #[test]
    fn test_malformed_gradient_stops_are_skipped() {
        let fill = parse_paint(&json!({
            "type": "GRADIENT_RADIAL",
            "gradientStops": [
                {"position": 0.0, "color": {"r": 1.0, "g": 0.0, "b": 0.0, "a": 1.0}},
                {"position": "half", "color": {"r": 0.0, "g": 1.0, "b": 0.0, "a": 1.0}},
                {"position": 0.6, "color": {"r": 0.0, "g": 1.0}},
                {"position": 0.8},
                {"position": 1.0, "color": {"r": 0.0, "g": 0.0, "b": 1.0, "a": 1.0}}
            ]
        }))
        .unwrap();

        let gradient = match fill {
            SimplifiedFill::GradientRadial(gradient) => gradient,
            other => panic!("Expected radial gradient, got {:?}", other),
        };

        let stops: Vec<(f64, &str)> = gradient
            .gradient_stops
            .iter()
            .map(|s| (s.position, s.color.hex.as_str()))
            .collect();
        assert_eq!(stops, vec![(0.0, "#FF0000"), (1.0, "#0000FF")]);
    }

    #[test]
    fn test_every_gradient_kind_is_recognized() {
        for tag in ["GRADIENT_RADIAL", "GRADIENT_ANGULAR", "GRADIENT_DIAMOND"] {
            let fill = parse_paint(&json!({"type": tag})).unwrap();
            let value = serde_json::to_value(&fill).unwrap();
            assert_eq!(value["type"].as_str(), Some(tag));
            assert_eq!(value["gradientStops"], json!([]));
        }
    }

    #[test]
    fn test_unrecognized_paint_kind_fails() {
        let err = parse_paint(&json!({
            "type": "EMOJI",
            "color": {"r": 1.0, "g": 0.0, "b": 0.0, "a": 1.0}
        }))
        .unwrap_err();

        match err {
            SimplifyError::UnrecognizedPaintKind(tag) => assert_eq!(tag, "EMOJI"),
            other => panic!("Expected UnrecognizedPaintKind, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_paint_type_fails() {
        let err = parse_paint(&json!({"color": {"r": 1.0, "g": 0.0, "b": 0.0}})).unwrap_err();
        assert!(matches!(err, SimplifyError::UnrecognizedPaintKind(_)));
    }
}
