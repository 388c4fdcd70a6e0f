use crate::error::Result;
use crate::layout::{FlexLayout, LayoutBuilder};
use crate::node::extract::extract_attributes;
use crate::types::{NodeType, SimplifiedNode};
use serde_json::Value as JsonValue;

/// Transform a raw node and all of its descendants with the default layout builder
///
/// See [`transform_node_with`].
pub fn transform_node(raw: &JsonValue, parent: Option<&JsonValue>) -> Result<SimplifiedNode> {
    transform_node_with(raw, parent, &FlexLayout)
}

/// Transform a raw node and all of its descendants
///
/// For every node: identity fields are copied, every attribute extractor
/// runs, `layout` builds the layout descriptor from the node and its raw
/// parent, and children are transformed in source order.
///
/// The tree is walked with an explicit stack of open frames, so the depth
/// of the input is not limited by the call stack.
///
/// # Errors
/// Any paint error anywhere in the tree aborts the whole transformation.
///
/// # Examples
/// ```
/// use figma_simplify::node::transform_node;
/// use serde_json::json;
///
/// let frame = json!({
///     "id": "1:1",
///     "name": "Frame",
///     "type": "FRAME",
///     "children": [{"id": "1:2", "name": "Label", "type": "TEXT", "characters": "Hi"}]
/// });
/// let node = transform_node(&frame, None).unwrap();
///
/// assert_eq!(node.children.unwrap()[0].text.as_deref(), Some("Hi"));
/// ```
pub fn transform_node_with<L>(
    raw: &JsonValue,
    parent: Option<&JsonValue>,
    layout: &L,
) -> Result<SimplifiedNode>
where
    L: LayoutBuilder + ?Sized,
{
    let mut ancestors: Vec<Frame> = Vec::new();
    let mut current = Frame::open(raw, parent, layout)?;

    loop {
        if let Some(child) = current.pending.next() {
            let child_frame = Frame::open(child, Some(current.raw), layout)?;
            ancestors.push(std::mem::replace(&mut current, child_frame));
            continue;
        }

        let node = current.finish();
        match ancestors.pop() {
            Some(mut parent_frame) => {
                parent_frame.children.push(node);
                current = parent_frame;
            }
            None => return Ok(node),
        }
    }
}

/// A node whose own attributes are built but whose children are not all done yet
struct Frame<'a> {
    raw: &'a JsonValue,
    node: SimplifiedNode,
    pending: std::slice::Iter<'a, JsonValue>,
    children: Vec<SimplifiedNode>,
}

impl<'a> Frame<'a> {
    fn open<L>(raw: &'a JsonValue, parent: Option<&JsonValue>, layout: &L) -> Result<Self>
    where
        L: LayoutBuilder + ?Sized,
    {
        let str_field = |key: &str| raw.get(key).and_then(|v| v.as_str()).unwrap_or_default();

        let mut node = SimplifiedNode::new(
            str_field("id"),
            str_field("name"),
            NodeType::from_tag(str_field("type")),
        );
        extract_attributes(raw, &mut node)?;
        node.layout = Some(layout.build_layout(raw, parent));

        let children = raw
            .get("children")
            .and_then(|v| v.as_array())
            .map(Vec::as_slice)
            .unwrap_or_default();

        Ok(Self {
            raw,
            node,
            pending: children.iter(),
            children: Vec::with_capacity(children.len()),
        })
    }

    fn finish(self) -> SimplifiedNode {
        let mut node = self.node;
        if !self.children.is_empty() {
            node.children = Some(self.children);
        }
        node
    }
}
