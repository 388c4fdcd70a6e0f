use crate::layout::SimplifiedLayout;
use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;
use std::fmt;

/// Node kind as reported by the `type` field of a Figma node
///
/// Unknown kinds are kept in `Other` so the tag always round-trips verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeType {
    Document,
    Canvas,
    Frame,
    Group,
    Section,
    Vector,
    BooleanOperation,
    Star,
    Line,
    Ellipse,
    RegularPolygon,
    Rectangle,
    Text,
    Slice,
    Component,
    ComponentSet,
    Instance,
    Sticky,
    ShapeWithText,
    Connector,
    Table,
    TableCell,
    WashiTape,
    Other(String),
}

impl NodeType {
    /// Parse a raw `type` tag
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "DOCUMENT" => NodeType::Document,
            "CANVAS" => NodeType::Canvas,
            "FRAME" => NodeType::Frame,
            "GROUP" => NodeType::Group,
            "SECTION" => NodeType::Section,
            "VECTOR" => NodeType::Vector,
            "BOOLEAN_OPERATION" => NodeType::BooleanOperation,
            "STAR" => NodeType::Star,
            "LINE" => NodeType::Line,
            "ELLIPSE" => NodeType::Ellipse,
            "REGULAR_POLYGON" => NodeType::RegularPolygon,
            "RECTANGLE" => NodeType::Rectangle,
            "TEXT" => NodeType::Text,
            "SLICE" => NodeType::Slice,
            "COMPONENT" => NodeType::Component,
            "COMPONENT_SET" => NodeType::ComponentSet,
            "INSTANCE" => NodeType::Instance,
            "STICKY" => NodeType::Sticky,
            "SHAPE_WITH_TEXT" => NodeType::ShapeWithText,
            "CONNECTOR" => NodeType::Connector,
            "TABLE" => NodeType::Table,
            "TABLE_CELL" => NodeType::TableCell,
            "WASHI_TAPE" => NodeType::WashiTape,
            other => NodeType::Other(other.to_string()),
        }
    }

    /// The verbatim tag
    pub fn as_str(&self) -> &str {
        match self {
            NodeType::Document => "DOCUMENT",
            NodeType::Canvas => "CANVAS",
            NodeType::Frame => "FRAME",
            NodeType::Group => "GROUP",
            NodeType::Section => "SECTION",
            NodeType::Vector => "VECTOR",
            NodeType::BooleanOperation => "BOOLEAN_OPERATION",
            NodeType::Star => "STAR",
            NodeType::Line => "LINE",
            NodeType::Ellipse => "ELLIPSE",
            NodeType::RegularPolygon => "REGULAR_POLYGON",
            NodeType::Rectangle => "RECTANGLE",
            NodeType::Text => "TEXT",
            NodeType::Slice => "SLICE",
            NodeType::Component => "COMPONENT",
            NodeType::ComponentSet => "COMPONENT_SET",
            NodeType::Instance => "INSTANCE",
            NodeType::Sticky => "STICKY",
            NodeType::ShapeWithText => "SHAPE_WITH_TEXT",
            NodeType::Connector => "CONNECTOR",
            NodeType::Table => "TABLE",
            NodeType::TableCell => "TABLE_CELL",
            NodeType::WashiTape => "WASHI_TAPE",
            NodeType::Other(tag) => tag,
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for NodeType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Simplified view of a whole file or of a set of requested nodes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifiedDesign {
    pub name: String,
    pub last_modified: String,
    /// Empty when the response carried no thumbnail
    pub thumbnail_url: String,
    pub nodes: Vec<SimplifiedNode>,
}

/// Uniform node shape; every optional field is omitted when the source lacks it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifiedNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fills: Option<Vec<SimplifiedFill>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strokes: Option<Vec<SimplifiedFill>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_dashes: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_weights: Option<StrokeWeights>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<SimplifiedLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<SimplifiedNode>>,
}

impl SimplifiedNode {
    /// A node carrying only its identity fields
    pub fn new(id: impl Into<String>, name: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            node_type,
            bounding_box: None,
            text: None,
            text_style: None,
            fills: None,
            strokes: None,
            stroke_weight: None,
            stroke_dashes: None,
            stroke_weights: None,
            opacity: None,
            border_radius: None,
            layout: None,
            children: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Read a `{x, y, width, height}` rectangle; every field must be numeric
    pub fn from_json(value: &JsonValue) -> Option<Self> {
        Some(Self {
            x: value.get("x")?.as_f64()?,
            y: value.get("y")?.as_f64()?,
            width: value.get("width")?.as_f64()?,
            height: value.get("height")?.as_f64()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

/// Per-side stroke weights (`individualStrokeWeights` in the API)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrokeWeights {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Text style with line height in `em` and letter spacing in `%`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_case: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align_horizontal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align_vertical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<String>,
}

impl TextStyle {
    pub fn is_empty(&self) -> bool {
        *self == TextStyle::default()
    }
}

/// Displayable color: `#RRGGBB` plus a combined opacity
///
/// Only built by [`crate::paint::convert_color`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorValue {
    pub hex: String,
    pub opacity: f64,
}

/// Normalized paint, tagged with the API's verbatim paint type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum SimplifiedFill {
    #[serde(rename = "SOLID")]
    Solid(ColorValue),
    #[serde(rename = "IMAGE", rename_all = "camelCase")]
    Image {
        #[serde(skip_serializing_if = "Option::is_none")]
        image_ref: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        scale_mode: Option<String>,
    },
    #[serde(rename = "GRADIENT_LINEAR")]
    GradientLinear(Gradient),
    #[serde(rename = "GRADIENT_RADIAL")]
    GradientRadial(Gradient),
    #[serde(rename = "GRADIENT_ANGULAR")]
    GradientAngular(Gradient),
    #[serde(rename = "GRADIENT_DIAMOND")]
    GradientDiamond(Gradient),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gradient {
    pub gradient_handle_positions: Vec<Vector>,
    /// In source order; the order defines the interpolation sequence
    pub gradient_stops: Vec<GradientStop>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientStop {
    pub position: f64,
    pub color: ColorValue,
}
