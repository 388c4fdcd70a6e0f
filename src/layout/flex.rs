use crate::css::{css_shorthand, px, round_to_hundredths};
use crate::layout::{
    Alignment, Dimensions, LayoutBuilder, LayoutMode, Positioning, ScrollAxis, SimplifiedLayout,
    Sizing, SizingMode,
};
use crate::types::{BoundingBox, Vector};
use serde_json::Value as JsonValue;

/// Maps Figma auto-layout properties onto flexbox terms
///
/// Two groups of values are produced:
/// - container values for frames (`mode`, `justifyContent`, `alignItems`,
///   `wrap`, `gap`, `padding`, `overflowScroll`)
/// - item values for anything with an `absoluteBoundingBox` (`sizing`,
///   `alignSelf`, `position`, `locationRelativeToParent`, `dimensions`)
///
/// # Examples
/// ```
/// use figma_simplify::layout::{FlexLayout, LayoutBuilder, LayoutMode};
/// use serde_json::json;
///
/// let frame = json!({
///     "clipsContent": false,
///     "layoutMode": "VERTICAL",
///     "itemSpacing": 8.0
/// });
/// let layout = FlexLayout.build_layout(&frame, None);
///
/// assert_eq!(layout.mode, LayoutMode::Column);
/// assert_eq!(layout.gap.as_deref(), Some("8px"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FlexLayout;

impl LayoutBuilder for FlexLayout {
    fn build_layout(&self, node: &JsonValue, parent: Option<&JsonValue>) -> SimplifiedLayout {
        let mut layout = container_values(node);
        apply_item_values(&mut layout, node, parent);
        layout
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Primary,
    Counter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Horizontal,
    Vertical,
}

fn container_values(node: &JsonValue) -> SimplifiedLayout {
    let mut layout = SimplifiedLayout::default();
    if !is_frame(node) {
        return layout;
    }

    layout.mode = layout_mode(node);

    let overflow = str_field(node, "overflowDirection").unwrap_or_default();
    let mut scroll = Vec::new();
    if overflow.contains("HORIZONTAL") {
        scroll.push(ScrollAxis::X);
    }
    if overflow.contains("VERTICAL") {
        scroll.push(ScrollAxis::Y);
    }
    if !scroll.is_empty() {
        layout.overflow_scroll = Some(scroll);
    }

    if layout.mode == LayoutMode::None {
        return layout;
    }

    let children = node
        .get("children")
        .and_then(|v| v.as_array())
        .map(Vec::as_slice)
        .unwrap_or_default();

    layout.justify_content = convert_align(
        str_field(node, "primaryAxisAlignItems"),
        children,
        Axis::Primary,
        layout.mode,
    );
    layout.align_items = convert_align(
        str_field(node, "counterAxisAlignItems"),
        children,
        Axis::Counter,
        layout.mode,
    );
    if str_field(node, "layoutWrap") == Some("WRAP") {
        layout.wrap = Some(true);
    }
    layout.gap = num_field(node, "itemSpacing")
        .filter(|spacing| *spacing != 0.0)
        .map(px);
    layout.padding = css_shorthand(
        num_field(node, "paddingTop").unwrap_or(0.0),
        num_field(node, "paddingRight").unwrap_or(0.0),
        num_field(node, "paddingBottom").unwrap_or(0.0),
        num_field(node, "paddingLeft").unwrap_or(0.0),
    );

    layout
}

fn apply_item_values(layout: &mut SimplifiedLayout, node: &JsonValue, parent: Option<&JsonValue>) {
    let Some(bounds) = node.get("absoluteBoundingBox").and_then(BoundingBox::from_json) else {
        return;
    };

    let sizing = Sizing {
        horizontal: sizing_mode(node, "layoutSizingHorizontal"),
        vertical: sizing_mode(node, "layoutSizingVertical"),
    };
    if sizing.horizontal.is_some() || sizing.vertical.is_some() {
        layout.sizing = Some(sizing);
    }

    let absolute = str_field(node, "layoutPositioning") == Some("ABSOLUTE");

    if let Some(parent) = parent.filter(|p| is_frame(p)) {
        let parent_mode = layout_mode(parent);

        if parent_mode != LayoutMode::None && !absolute {
            layout.align_self = convert_self_align(str_field(node, "layoutAlign"));
        }

        // Flex children are placed by their container; only free-floating
        // nodes get explicit coordinates
        if parent_mode == LayoutMode::None || absolute {
            if absolute {
                layout.position = Some(Positioning::Absolute);
            }
            if let Some(parent_bounds) = parent
                .get("absoluteBoundingBox")
                .and_then(BoundingBox::from_json)
            {
                layout.location_relative_to_parent = Some(Vector {
                    x: round_to_hundredths(bounds.x - parent_bounds.x),
                    y: round_to_hundredths(bounds.y - parent_bounds.y),
                });
            }
        }
    }

    let dimensions = dimensions(node, &bounds, layout.mode, &sizing);
    if !dimensions.is_empty() {
        layout.dimensions = Some(dimensions);
    }
}

fn dimensions(
    node: &JsonValue,
    bounds: &BoundingBox,
    mode: LayoutMode,
    sizing: &Sizing,
) -> Dimensions {
    let grows = num_field(node, "layoutGrow").is_some_and(|grow| grow != 0.0);
    let stretches = str_field(node, "layoutAlign") == Some("STRETCH");
    let fixed_width = sizing.horizontal == Some(SizingMode::Fixed);
    let fixed_height = sizing.vertical == Some(SizingMode::Fixed);

    let (keep_width, keep_height) = match mode {
        LayoutMode::Row => (!grows && fixed_width, !stretches && fixed_height),
        LayoutMode::Column => (!stretches && fixed_width, !grows && fixed_height),
        LayoutMode::None => (
            sizing.horizontal.is_none() || fixed_width,
            sizing.vertical.is_none() || fixed_height,
        ),
    };

    let mut dimensions = Dimensions::default();
    if keep_width {
        dimensions.width = Some(round_to_hundredths(bounds.width));
    }
    if keep_height {
        dimensions.height = Some(round_to_hundredths(bounds.height));
    }
    if node.get("preserveRatio").and_then(|v| v.as_bool()) == Some(true) && bounds.height != 0.0 {
        dimensions.aspect_ratio = Some(round_to_hundredths(bounds.width / bounds.height));
    }

    dimensions
}

fn convert_align(
    align: Option<&str>,
    children: &[JsonValue],
    axis: Axis,
    mode: LayoutMode,
) -> Option<Alignment> {
    if children_stretch(children, axis, mode) {
        return Some(Alignment::Stretch);
    }

    match align.unwrap_or("MIN") {
        "MAX" => Some(Alignment::FlexEnd),
        "CENTER" => Some(Alignment::Center),
        "SPACE_BETWEEN" => Some(Alignment::SpaceBetween),
        "BASELINE" => Some(Alignment::Baseline),
        // MIN is the flexbox default
        _ => None,
    }
}

fn convert_self_align(align: Option<&str>) -> Option<Alignment> {
    match align? {
        "MAX" => Some(Alignment::FlexEnd),
        "CENTER" => Some(Alignment::Center),
        "STRETCH" => Some(Alignment::Stretch),
        _ => None,
    }
}

/// True when every child fills the container along the axis
fn children_stretch(children: &[JsonValue], axis: Axis, mode: LayoutMode) -> bool {
    let Some(direction) = direction(axis, mode) else {
        return false;
    };
    let sizing_key = match direction {
        Direction::Horizontal => "layoutSizingHorizontal",
        Direction::Vertical => "layoutSizingVertical",
    };

    !children.is_empty()
        && children.iter().all(|child| {
            str_field(child, "layoutPositioning") == Some("ABSOLUTE")
                || str_field(child, sizing_key) == Some("FILL")
        })
}

fn direction(axis: Axis, mode: LayoutMode) -> Option<Direction> {
    match (axis, mode) {
        (_, LayoutMode::None) => None,
        (Axis::Primary, LayoutMode::Row) | (Axis::Counter, LayoutMode::Column) => {
            Some(Direction::Horizontal)
        }
        (Axis::Primary, LayoutMode::Column) | (Axis::Counter, LayoutMode::Row) => {
            Some(Direction::Vertical)
        }
    }
}

fn sizing_mode(node: &JsonValue, key: &str) -> Option<SizingMode> {
    match str_field(node, key)? {
        "FIXED" => Some(SizingMode::Fixed),
        "FILL" => Some(SizingMode::Fill),
        "HUG" => Some(SizingMode::Hug),
        _ => None,
    }
}

/// Frame-like nodes are the ones carrying a boolean `clipsContent`
fn is_frame(node: &JsonValue) -> bool {
    node.get("clipsContent").is_some_and(|v| v.is_boolean())
}

fn layout_mode(node: &JsonValue) -> LayoutMode {
    if !is_frame(node) {
        return LayoutMode::None;
    }
    match str_field(node, "layoutMode") {
        Some("HORIZONTAL") => LayoutMode::Row,
        Some("VERTICAL") => LayoutMode::Column,
        _ => LayoutMode::None,
    }
}

fn str_field<'a>(node: &'a JsonValue, key: &str) -> Option<&'a str> {
    node.get(key).and_then(|v| v.as_str())
}

fn num_field(node: &JsonValue, key: &str) -> Option<f64> {
    node.get(key).and_then(|v| v.as_f64())
}
