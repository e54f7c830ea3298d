//! Graph assembly
//!
//! Converts a reconciled page registry into the node/edge output model. The
//! assembler is deterministic: registry iteration is path-ordered, node ids
//! are derived from paths, and edges follow the syntactic parent relation.
//! External collaborators (renderer, persistence) may rely on the result being
//! a connected rooted tree with unique ids and exactly one inbound edge per
//! non-root node.

use crate::registry::PageRegistry;
use crate::url::{depth_of, last_segment, parent_of};
use serde::{Deserialize, Serialize};

/// Maximum rendered label length, in characters
const MAX_LABEL_LEN: usize = 40;

/// Node id of the root page
pub const ROOT_NODE_ID: &str = "root";

/// One page in the output graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    pub label: String,
    pub path: String,
    pub is_root: bool,
    pub depth: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    pub unreachable: bool,
}

/// One parent→child relationship in the output graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// The complete crawl result handed to external collaborators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteGraph {
    pub domain: String,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

/// Returns the stable node id for a normalized path
pub fn node_id(path: &str) -> String {
    if path == "/" {
        ROOT_NODE_ID.to_string()
    } else {
        format!("node-{}", path)
    }
}

/// Truncates a label to the display length, marking the cut with an ellipsis
fn truncate_label(label: &str) -> String {
    if label.chars().count() <= MAX_LABEL_LEN {
        return label.to_string();
    }
    let mut truncated: String = label.chars().take(MAX_LABEL_LEN - 1).collect();
    truncated.push('…');
    truncated
}

/// Assembles the final graph from a reconciled registry
///
/// Label precedence per node: fetched title → last path segment → hostname.
/// A registry holding only the root produces a single synthetic "No links
/// found" child instead of a bare root, so the renderer never sees a lone
/// disconnected node without explanation.
pub fn assemble(registry: &PageRegistry, hostname: &str) -> SiteGraph {
    let mut nodes = Vec::with_capacity(registry.len());
    let mut edges = Vec::new();

    for entry in registry.iter() {
        let label = entry
            .title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .or_else(|| last_segment(&entry.path))
            .unwrap_or(hostname);

        nodes.push(Node {
            id: node_id(&entry.path),
            label: truncate_label(label),
            path: entry.path.clone(),
            is_root: entry.path == "/",
            depth: depth_of(&entry.path),
            status_code: entry.status_code,
            unreachable: entry.unreachable,
        });

        if let Some(parent) = parent_of(&entry.path) {
            if registry.contains(&parent) {
                let source = node_id(&parent);
                let target = node_id(&entry.path);
                edges.push(Edge {
                    id: format!("edge-{}-{}", source, target),
                    source,
                    target,
                });
            }
        }
    }

    // A site with no discoverable links still gets an explanatory child.
    if nodes.len() == 1 {
        let placeholder = Node {
            id: "node-no-links".to_string(),
            label: "No links found".to_string(),
            path: "/no-links-found".to_string(),
            is_root: false,
            depth: 1,
            status_code: None,
            unreachable: true,
        };
        edges.push(Edge {
            id: format!("edge-{}-{}", ROOT_NODE_ID, placeholder.id),
            source: ROOT_NODE_ID.to_string(),
            target: placeholder.id.clone(),
        });
        nodes.push(placeholder);
    }

    SiteGraph {
        domain: hostname.to_string(),
        nodes,
        edges,
    }
}
