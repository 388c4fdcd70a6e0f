use crate::error::{Result, SimplifyError};
use crate::layout::{FlexLayout, LayoutBuilder};
use crate::node::transform_node_with;
use crate::types::{SimplifiedDesign, SimplifiedNode};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use tracing::debug;

/// `GET /v1/files/:key` response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileResponse {
    name: String,
    last_modified: String,
    #[serde(default)]
    thumbnail_url: Option<String>,
    document: DocumentRoot,
}

#[derive(Debug, Deserialize)]
struct DocumentRoot {
    #[serde(default)]
    children: Vec<JsonValue>,
}

/// `GET /v1/files/:key/nodes?ids=...` response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NodesResponse {
    name: String,
    last_modified: String,
    #[serde(default)]
    thumbnail_url: Option<String>,
    /// Unknown ids come back as `null`
    nodes: BTreeMap<String, Option<NodeEntry>>,
}

#[derive(Debug, Deserialize)]
struct NodeEntry {
    document: JsonValue,
}

/// Simplify either response shape, picking the parser from its top-level keys
///
/// # Errors
/// * `InvalidResponse` - Neither `document` nor `nodes` is present
/// * `Json` - The envelope does not have the expected shape
/// * Any paint error from the node transformation
pub fn parse_figma_response(response: JsonValue) -> Result<SimplifiedDesign> {
    parse_figma_response_with(response, &FlexLayout)
}

/// [`parse_figma_response`] with a caller-supplied layout builder
pub fn parse_figma_response_with<L>(response: JsonValue, layout: &L) -> Result<SimplifiedDesign>
where
    L: LayoutBuilder + ?Sized,
{
    if response.get("document").is_some() {
        parse_full_document_with(response, layout)
    } else if response.get("nodes").is_some() {
        parse_requested_nodes_with(response, layout)
    } else {
        Err(SimplifyError::InvalidResponse(
            "expected a `document` or a `nodes` field".to_string(),
        ))
    }
}

/// Simplify a full file response; its top-level nodes are the document's pages
pub fn parse_full_document(response: JsonValue) -> Result<SimplifiedDesign> {
    parse_full_document_with(response, &FlexLayout)
}

/// [`parse_full_document`] with a caller-supplied layout builder
pub fn parse_full_document_with<L>(response: JsonValue, layout: &L) -> Result<SimplifiedDesign>
where
    L: LayoutBuilder + ?Sized,
{
    let response: FileResponse = serde_json::from_value(response)?;
    debug!(
        file = %response.name,
        pages = response.document.children.len(),
        "simplifying full document"
    );

    let nodes = transform_all(response.document.children.iter(), layout)?;

    Ok(SimplifiedDesign {
        name: response.name,
        last_modified: response.last_modified,
        thumbnail_url: response.thumbnail_url.unwrap_or_default(),
        nodes,
    })
}

/// Simplify a requested-nodes response; nodes are emitted in sorted id order
pub fn parse_requested_nodes(response: JsonValue) -> Result<SimplifiedDesign> {
    parse_requested_nodes_with(response, &FlexLayout)
}

/// [`parse_requested_nodes`] with a caller-supplied layout builder
pub fn parse_requested_nodes_with<L>(response: JsonValue, layout: &L) -> Result<SimplifiedDesign>
where
    L: LayoutBuilder + ?Sized,
{
    let response: NodesResponse = serde_json::from_value(response)?;
    debug!(
        file = %response.name,
        requested = response.nodes.len(),
        "simplifying requested nodes"
    );

    let documents = response.nodes.iter().filter_map(|(id, entry)| match entry {
        Some(entry) => Some(&entry.document),
        None => {
            debug!(node_id = %id, "skipping node missing from response");
            None
        }
    });
    let nodes = transform_all(documents, layout)?;

    Ok(SimplifiedDesign {
        name: response.name,
        last_modified: response.last_modified,
        thumbnail_url: response.thumbnail_url.unwrap_or_default(),
        nodes,
    })
}

/// Parse JSON text and simplify it with [`parse_figma_response`]
pub fn simplify_str(json: &str) -> Result<SimplifiedDesign> {
    parse_figma_response(parse_json(json)?)
}

/// Parse JSON text of any nesting depth
///
/// Every node level costs two JSON levels (the node and its `children`
/// list), so serde_json's default recursion limit would cap documents at
/// about 60 nodes deep. The limit is lifted and the stack grows on the heap
/// instead.
pub fn parse_json(json: &str) -> Result<JsonValue> {
    let mut de = serde_json::Deserializer::from_str(json);
    de.disable_recursion_limit();
    let value = JsonValue::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

fn transform_all<'a, I, L>(raw_nodes: I, layout: &L) -> Result<Vec<SimplifiedNode>>
where
    I: Iterator<Item = &'a JsonValue>,
    L: LayoutBuilder + ?Sized,
{
    raw_nodes
        .map(|raw| transform_node_with(raw, None, layout))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn file_response() -> JsonValue {
        json!({
            "name": "Landing",
            "lastModified": "2024-05-01T10:00:00Z",
            "thumbnailUrl": "https://example.com/thumb.png",
            "document": {
                "id": "0:0",
                "name": "Document",
                "type": "DOCUMENT",
                "children": [{
                    "id": "1:1",
                    "name": "Hero",
                    "type": "FRAME",
                    "children": [{
                        "id": "1:2",
                        "name": "Greeting",
                        "type": "TEXT",
                        "characters": "Hi",
                        "style": {"fontFamily": "Inter", "fontSize": 16, "lineHeightPx": 24}
                    }]
                }]
            }
        })
    }

    #[test]
    fn test_full_document_end_to_end() {
        let design = parse_full_document(file_response()).unwrap();

        assert_eq!(design.name, "Landing");
        assert_eq!(design.last_modified, "2024-05-01T10:00:00Z");
        assert_eq!(design.thumbnail_url, "https://example.com/thumb.png");
        assert_eq!(design.nodes.len(), 1);

        let frame = &design.nodes[0];
        assert_eq!(frame.id, "1:1");

        let text = &frame.children.as_ref().unwrap()[0];
        assert_eq!(text.text.as_deref(), Some("Hi"));
        assert_eq!(
            text.text_style.as_ref().and_then(|s| s.line_height.as_deref()),
            Some("1.5em")
        );
    }

    #[test]
    fn test_full_document_serialized_shape() {
        let design = parse_full_document(file_response()).unwrap();
        let value = serde_json::to_value(&design).unwrap();

        assert_eq!(value["thumbnailUrl"], json!("https://example.com/thumb.png"));
        assert_eq!(value["nodes"][0]["type"], json!("FRAME"));
        assert_eq!(value["nodes"][0]["layout"], json!({"mode": "none"}));
        assert_eq!(
            value["nodes"][0]["children"][0]["textStyle"],
            json!({"fontFamily": "Inter", "fontSize": 16.0, "lineHeight": "1.5em"})
        );
        assert!(value["nodes"][0]["children"][0].get("fills").is_none());
    }

    #[test]
    fn test_missing_thumbnail_defaults_to_empty() {
        let design = parse_full_document(json!({
            "name": "Empty",
            "lastModified": "2024-05-01T10:00:00Z",
            "document": {"children": []}
        }))
        .unwrap();

        assert_eq!(design.thumbnail_url, "");
        assert!(design.nodes.is_empty());
    }

    #[test]
    fn test_requested_nodes() {
        let design = parse_requested_nodes(json!({
            "name": "Landing",
            "lastModified": "2024-05-01T10:00:00Z",
            "thumbnailUrl": null,
            "nodes": {
                "2:1": {"document": {"id": "2:1", "name": "Button", "type": "COMPONENT"}},
                "1:9": {"document": {"id": "1:9", "name": "Icon", "type": "VECTOR"}},
                "9:9": null
            }
        }))
        .unwrap();

        assert_eq!(design.thumbnail_url, "");
        let ids: Vec<&str> = design.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["1:9", "2:1"]);
    }

    #[test]
    fn test_auto_detects_response_shape() {
        let full = parse_figma_response(file_response()).unwrap();
        assert_eq!(full.nodes[0].id, "1:1");

        let nodes = parse_figma_response(json!({
            "name": "Landing",
            "lastModified": "2024-05-01T10:00:00Z",
            "nodes": {"3:3": {"document": {"id": "3:3", "name": "Card", "type": "INSTANCE"}}}
        }))
        .unwrap();
        assert_eq!(nodes.nodes[0].name, "Card");
    }

    #[test]
    fn test_unknown_response_shape() {
        let err = parse_figma_response(json!({"name": "x", "lastModified": "y"})).unwrap_err();
        assert!(matches!(err, SimplifyError::InvalidResponse(_)));
    }

    #[test]
    fn test_malformed_envelope() {
        let err = parse_full_document(json!({"document": {"children": []}})).unwrap_err();
        assert!(matches!(err, SimplifyError::Json(_)));
    }

    #[test]
    fn test_unknown_paint_fails_whole_document() {
        let err = parse_full_document(json!({
            "name": "Broken",
            "lastModified": "2024-05-01T10:00:00Z",
            "document": {
                "children": [
                    {"id": "1:1", "name": "Ok", "type": "FRAME"},
                    {"id": "1:2", "name": "Bad", "type": "RECTANGLE", "fills": [{"type": "EMOJI"}]}
                ]
            }
        }))
        .unwrap_err();

        assert!(matches!(err, SimplifyError::UnrecognizedPaintKind(_)));
    }

    #[test]
    fn test_simplify_str() {
        let text = serde_json::to_string(&file_response()).unwrap();
        let design = simplify_str(&text).unwrap();
        assert_eq!(design.name, "Landing");

        assert!(matches!(simplify_str("{not json"), Err(SimplifyError::Json(_))));
        assert!(matches!(simplify_str("{} trailing"), Err(SimplifyError::Json(_))));
    }

    #[test]
    fn test_simplify_str_deep_document() {
        const DEPTH: usize = 200;

        let mut text = String::from(r#"{"name":"Deep","lastModified":"2024-05-01T10:00:00Z","#);
        text.push_str(r#""document":{"children":["#);
        for level in 0..DEPTH {
            text.push_str(&format!(r#"{{"id":"n{}","type":"GROUP","children":["#, level));
        }
        text.push_str(r#"{"id":"leaf","type":"TEXT","characters":"bottom"}"#);
        for _ in 0..DEPTH {
            text.push_str("]}");
        }
        text.push_str("]}}");

        let design = simplify_str(&text).unwrap();

        let mut depth = 0;
        let mut cursor = &design.nodes[0];
        while let Some(children) = cursor.children.as_ref() {
            cursor = &children[0];
            depth += 1;
        }
        assert_eq!(depth, DEPTH);
        assert_eq!(cursor.text.as_deref(), Some("bottom"));
    }
}
