/// Raw Figma node to simplified node conversion
///
/// - `extract`: one small function per optional attribute group
/// - `transform`: the tree walk that assembles simplified nodes
pub mod extract;
pub mod transform;

// Re-export commonly used items
pub use extract::extract_attributes;
pub use transform::{transform_node, transform_node_with};
