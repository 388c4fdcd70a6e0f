//! Layout descriptors attached to every simplified node
//!
//! The node transformer only knows the [`LayoutBuilder`] seam; [`FlexLayout`]
//! is the default implementation, mapping Figma auto-layout onto flexbox
//! vocabulary.

pub mod flex;

use crate::types::Vector;
use serde::Serialize;
use serde_json::Value as JsonValue;

pub use flex::FlexLayout;

/// Derives a layout descriptor from a raw node and its raw parent
pub trait LayoutBuilder {
    fn build_layout(&self, node: &JsonValue, parent: Option<&JsonValue>) -> SimplifiedLayout;
}

impl<F> LayoutBuilder for F
where
    F: Fn(&JsonValue, Option<&JsonValue>) -> SimplifiedLayout,
{
    fn build_layout(&self, node: &JsonValue, parent: Option<&JsonValue>) -> SimplifiedLayout {
        self(node, parent)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifiedLayout {
    pub mode: LayoutMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_self: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_relative_to_parent: Option<Vector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizing: Option<Sizing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow_scroll: Option<Vec<ScrollAxis>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Positioning>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    None,
    Row,
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    Baseline,
    Stretch,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f64>,
}

impl Dimensions {
    pub fn is_empty(&self) -> bool {
        self.width.is_none() && self.height.is_none() && self.aspect_ratio.is_none()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Sizing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal: Option<SizingMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical: Option<SizingMode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SizingMode {
    Fixed,
    Fill,
    Hug,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollAxis {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Positioning {
    Absolute,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_layout_serializes_mode_only() {
        let layout = SimplifiedLayout::default();
        assert_eq!(serde_json::to_value(&layout).unwrap(), json!({"mode": "none"}));
    }

    #[test]
    fn test_layout_serialization_names() {
        let layout = SimplifiedLayout {
            mode: LayoutMode::Row,
            justify_content: Some(Alignment::SpaceBetween),
            align_items: Some(Alignment::FlexEnd),
            overflow_scroll: Some(vec![ScrollAxis::X]),
            position: Some(Positioning::Absolute),
            sizing: Some(Sizing {
                horizontal: Some(SizingMode::Hug),
                vertical: None,
            }),
            ..SimplifiedLayout::default()
        };

        assert_eq!(
            serde_json::to_value(&layout).unwrap(),
            json!({
                "mode": "row",
                "justifyContent": "space-between",
                "alignItems": "flex-end",
                "overflowScroll": ["x"],
                "position": "absolute",
                "sizing": {"horizontal": "hug"}
            })
        );
    }

    #[test]
    fn test_closure_is_a_layout_builder() {
        let builder = |_node: &JsonValue, parent: Option<&JsonValue>| SimplifiedLayout {
            mode: if parent.is_some() {
                LayoutMode::Column
            } else {
                LayoutMode::None
            },
            ..SimplifiedLayout::default()
        };

        let node = json!({"id": "1:1"});
        assert_eq!(builder.build_layout(&node, None).mode, LayoutMode::None);
        assert_eq!(builder.build_layout(&node, Some(&node)).mode, LayoutMode::Column);
    }
}
