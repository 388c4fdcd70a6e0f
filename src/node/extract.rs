use crate::css::px;
use crate::error::Result;
use crate::paint::parse_paint;
use crate::types::{BoundingBox, SimplifiedFill, SimplifiedNode, StrokeWeights, TextStyle};
use serde_json::Value as JsonValue;

/// Run every attribute extractor against `raw`, filling `node` in place
///
/// Each extractor writes its own fields and leaves them `None` when the
/// source data is absent or not of the expected type. Only paint
/// conversion can fail.
pub fn extract_attributes(raw: &JsonValue, node: &mut SimplifiedNode) -> Result<()> {
    node.bounding_box = extract_bounding_box(raw);
    node.text = extract_text(raw);
    node.text_style = extract_text_style(raw);
    node.fills = extract_paints(raw, "fills")?;
    node.strokes = extract_paints(raw, "strokes")?;
    node.stroke_weight = extract_stroke_weight(raw, node.strokes.as_deref());
    node.stroke_dashes = extract_stroke_dashes(raw);
    node.stroke_weights = extract_stroke_weights(raw);
    node.opacity = extract_opacity(raw);
    node.border_radius = extract_border_radius(raw);

    Ok(())
}

/// Absolute bounding box; all four fields must be numeric
pub fn extract_bounding_box(raw: &JsonValue) -> Option<BoundingBox> {
    raw.get("absoluteBoundingBox").and_then(BoundingBox::from_json)
}

/// Text content; an empty string counts as absent
pub fn extract_text(raw: &JsonValue) -> Option<String> {
    raw.get("characters")
        .and_then(|v| v.as_str())
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

/// Text style with derived CSS units
///
/// - `lineHeight` = `lineHeightPx / fontSize` in `em`
/// - `letterSpacing` = `letterSpacing / fontSize * 100` in `%`, skipped for
///   a zero spacing so default text does not carry a `0%`
pub fn extract_text_style(raw: &JsonValue) -> Option<TextStyle> {
    let style = raw.get("style")?.as_object()?;
    if style.is_empty() {
        return None;
    }

    let number = |key: &str| style.get(key).and_then(|v| v.as_f64());
    let string = |key: &str| style.get(key).and_then(|v| v.as_str()).map(str::to_string);

    let font_size = number("fontSize");
    let usable_font_size = font_size.filter(|size| *size != 0.0);

    let line_height = match (number("lineHeightPx"), usable_font_size) {
        (Some(line_height_px), Some(size)) if line_height_px != 0.0 => {
            Some(format!("{}em", line_height_px / size))
        }
        _ => None,
    };

    let letter_spacing = match (number("letterSpacing"), usable_font_size) {
        (Some(spacing), Some(size)) if spacing != 0.0 => {
            Some(format!("{}%", spacing / size * 100.0))
        }
        _ => None,
    };

    let text_style = TextStyle {
        font_family: string("fontFamily"),
        font_weight: number("fontWeight"),
        font_size,
        text_case: string("textCase"),
        text_align_horizontal: string("textAlignHorizontal"),
        text_align_vertical: string("textAlignVertical"),
        line_height,
        letter_spacing,
    };

    if text_style.is_empty() {
        None
    } else {
        Some(text_style)
    }
}

/// Fills or strokes, depending on `key`
///
/// Absent, non-list and empty lists all yield `None`.
pub fn extract_paints(raw: &JsonValue, key: &str) -> Result<Option<Vec<SimplifiedFill>>> {
    let Some(paints) = raw.get(key).and_then(|v| v.as_array()) else {
        return Ok(None);
    };
    if paints.is_empty() {
        return Ok(None);
    }

    let fills = paints.iter().map(parse_paint).collect::<Result<Vec<_>>>()?;
    Ok(Some(fills))
}

/// Stroke weight, kept only alongside at least one stroke
pub fn extract_stroke_weight(raw: &JsonValue, strokes: Option<&[SimplifiedFill]>) -> Option<f64> {
    let weight = raw.get("strokeWeight")?.as_f64()?;
    match strokes {
        Some(strokes) if !strokes.is_empty() => Some(weight),
        _ => None,
    }
}

/// Dash pattern; an empty list is kept as-is
pub fn extract_stroke_dashes(raw: &JsonValue) -> Option<Vec<f64>> {
    let dashes = raw.get("strokeDashes")?.as_array()?;
    Some(dashes.iter().filter_map(|v| v.as_f64()).collect())
}

/// Per-side stroke weights; all four sides must be numeric
pub fn extract_stroke_weights(raw: &JsonValue) -> Option<StrokeWeights> {
    let weights = raw.get("individualStrokeWeights")?;
    Some(StrokeWeights {
        top: weights.get("top")?.as_f64()?,
        right: weights.get("right")?.as_f64()?,
        bottom: weights.get("bottom")?.as_f64()?,
        left: weights.get("left")?.as_f64()?,
    })
}

/// Node opacity; `0.0` is kept
pub fn extract_opacity(raw: &JsonValue) -> Option<f64> {
    raw.get("opacity")?.as_f64()
}

/// Uniform `cornerRadius` as a CSS length
pub fn extract_border_radius(raw: &JsonValue) -> Option<String> {
    let radius = raw.get("cornerRadius")?.as_f64()?;
    Some(px(radius))
}
