//! # figma-simplify
//!
//! A library for turning Figma REST API responses into a simplified,
//! uniform node tree.
//!
//! Every raw node, whatever its kind, becomes a [`SimplifiedNode`] with
//! optional, semantically named attributes: text and text style, fills and
//! strokes as hex colors or gradients, stroke geometry, opacity, border
//! radius and a flexbox-style layout descriptor.
//!
//! ## Example
//!
//! ```no_run
//! use figma_simplify::simplify_str;
//!
//! let text = std::fs::read_to_string("file.json").unwrap();
//!
//! let design = simplify_str(&text).unwrap();
//! println!("{}: {} top-level nodes", design.name, design.nodes.len());
//! ```

pub mod css;
pub mod error;
pub mod layout;
pub mod node;
pub mod paint;
pub mod response;
pub mod types;

// Re-export commonly used items
pub use error::{Result, SimplifyError};
pub use layout::{FlexLayout, LayoutBuilder, SimplifiedLayout};
pub use node::{transform_node, transform_node_with};
pub use paint::{convert_color, parse_paint};
pub use response::{
    parse_figma_response, parse_full_document, parse_json, parse_requested_nodes, simplify_str,
};
pub use types::{NodeType, SimplifiedDesign, SimplifiedFill, SimplifiedNode};
