use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub String);

impl EdgeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EdgeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Entity kind of a project graph node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[allow(non_camel_case_types)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum NodeCategory {
    SPECIFICATION,
    MODULE,
    CONTROLLER,
    MODEL,
    ROUTE,
    TASK,
    TEST,
    AGENT,
    GOAL,
    CONSTRAINT,
    DOCUMENTATION,

    #[default]
    UNKNOWN,
}

impl From<String> for NodeCategory {
    /// Unknown category strings resolve to the default entry rather than
    /// failing deserialization; the strict path is `TryFrom<&str>`.
    fn from(value: String) -> Self {
        NodeCategory::try_from(value.as_str()).unwrap_or_default()
    }
}

/// Error type for enum conversion failures
#[derive(Error, Debug, Clone)]
pub enum EnumConversionError {
    #[error("Invalid NodeCategory value: {0}")]
    InvalidNodeCategory(String),
    #[error("Invalid NodeStatus value: {0}")]
    InvalidNodeStatus(String),
    #[error("Invalid LayoutMode value: {0}")]
    InvalidLayoutMode(String),
}

impl TryFrom<&str> for NodeCategory {
    type Error = EnumConversionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "specification" => Ok(NodeCategory::SPECIFICATION),
            "module" => Ok(NodeCategory::MODULE),
            "controller" => Ok(NodeCategory::CONTROLLER),
            "model" => Ok(NodeCategory::MODEL),
            "route" => Ok(NodeCategory::ROUTE),
            "task" => Ok(NodeCategory::TASK),
            "test" => Ok(NodeCategory::TEST),
            "agent" => Ok(NodeCategory::AGENT),
            "goal" => Ok(NodeCategory::GOAL),
            "constraint" => Ok(NodeCategory::CONSTRAINT),
            "documentation" => Ok(NodeCategory::DOCUMENTATION),
            _ => Err(EnumConversionError::InvalidNodeCategory(value.to_string())),
        }
    }
}

/// Lifecycle status of a project graph node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[allow(non_camel_case_types)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum NodeStatus {
    ACTIVE,
    DRAFT,
    DEPRECATED,
    PENDING,

    #[default]
    UNSPECIFIED,
}

impl From<String> for NodeStatus {
    fn from(value: String) -> Self {
        NodeStatus::try_from(value.as_str()).unwrap_or_default()
    }
}

impl TryFrom<&str> for NodeStatus {
    type Error = EnumConversionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "active" => Ok(NodeStatus::ACTIVE),
            "draft" => Ok(NodeStatus::DRAFT),
            "deprecated" => Ok(NodeStatus::DEPRECATED),
            "pending" => Ok(NodeStatus::PENDING),
            _ => Err(EnumConversionError::InvalidNodeStatus(value.to_string())),
        }
    }
}

/// A project entity as supplied by the external data owner.
///
/// Position is deliberately absent: it is assigned by a layout strategy and
/// is not part of the node's identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GraphNode {
    pub id: NodeId,
    pub category: NodeCategory,
    pub name: String,
    #[serde(default)]
    pub status: NodeStatus,
    #[serde(default)]
    pub description: Option<String>,
    /// Short content excerpt shown on the node card.
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Reference back into the source artifact, e.g. "specs/auth.md#login".
    #[serde(default)]
    pub source_ref: Option<String>,
}

/// Per-edge visual overrides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EdgeStyle {
    /// Stroke color as a hex string, e.g. "#b45309".
    #[serde(default)]
    pub stroke: Option<String>,
    #[serde(default)]
    pub stroke_width: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GraphEdge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub style: Option<EdgeStyle>,
    #[serde(default)]
    pub animated: bool,
}

impl GraphEdge {
    /// Edge synthesized from a connect gesture. The id is deterministic so
    /// repeating the same gesture produces the same edge.
    pub fn connection(source: NodeId, target: NodeId) -> Self {
        Self {
            id: EdgeId(format!("{}-{}", source, target)),
            source,
            target,
            label: None,
            style: None,
            animated: false,
        }
    }
}

/// View configuration selecting one of the four layout strategies.
/// Not persisted as part of graph data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Layered,
    Hierarchical,
    Circular,
    Scatter,
}

impl TryFrom<&str> for LayoutMode {
    type Error = EnumConversionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "layered" => Ok(LayoutMode::Layered),
            "hierarchical" => Ok(LayoutMode::Hierarchical),
            "circular" => Ok(LayoutMode::Circular),
            "scatter" => Ok(LayoutMode::Scatter),
            _ => Err(EnumConversionError::InvalidLayoutMode(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str() {
        assert_eq!(
            NodeCategory::try_from("module").unwrap(),
            NodeCategory::MODULE
        );
        assert_eq!(
            NodeCategory::try_from("documentation").unwrap(),
            NodeCategory::DOCUMENTATION
        );
        assert!(NodeCategory::try_from("widget").is_err());
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!(NodeStatus::try_from("active").unwrap(), NodeStatus::ACTIVE);
        assert!(NodeStatus::try_from("archived").is_err());
    }

    #[test]
    fn test_defaults_resolve_to_fallback_variants() {
        assert_eq!(NodeCategory::default(), NodeCategory::UNKNOWN);
        assert_eq!(NodeStatus::default(), NodeStatus::UNSPECIFIED);
        assert_eq!(LayoutMode::default(), LayoutMode::Layered);
    }

    #[test]
    fn test_connection_edge_id_is_deterministic() {
        let edge = GraphEdge::connection(NodeId::from("n1"), NodeId::from("n2"));
        assert_eq!(edge.id, EdgeId::from("n1-n2"));
        assert!(!edge.animated);
        assert!(edge.style.is_none());
    }

    #[test]
    fn test_node_deserializes_with_unknown_category() {
        let node: GraphNode = serde_json::from_str(
            r#"{"id":"n1","category":"blueprint","name":"Auth"}"#,
        )
        .unwrap();
        assert_eq!(node.category, NodeCategory::UNKNOWN);
        assert_eq!(node.status, NodeStatus::UNSPECIFIED);
    }

    #[test]
    fn test_node_round_trips_through_json() {
        let node = GraphNode {
            id: NodeId::from("spec-1"),
            category: NodeCategory::SPECIFICATION,
            name: "Login flow".to_string(),
            status: NodeStatus::DRAFT,
            description: Some("OAuth2 login".to_string()),
            excerpt: None,
            source_ref: Some("specs/auth.md".to_string()),
        };
        let json = serde_json::to_string(&node).unwrap();
        let back: GraphNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
    }
}
