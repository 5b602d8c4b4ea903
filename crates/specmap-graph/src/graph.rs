use serde::{Deserialize, Serialize};
use specmap_core::{GraphEdge, GraphNode, NodeId};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Vec2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A domain node with the position assigned by a layout strategy.
///
/// The position is the top-left corner of the node's logical box, origin at
/// the top-left of the canvas, in layout pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedNode {
    pub node: GraphNode,
    pub position: Vec2,
}

/// Drop edges whose source or target id is absent from `nodes`.
///
/// The layout strategies tolerate dangling edges by never traversing through
/// a missing endpoint, but the rendering surface does not, so the dispatcher
/// filters before handing anything downstream.
pub fn filter_dangling_edges(nodes: &[GraphNode], edges: &[GraphEdge]) -> Vec<GraphEdge> {
    let known: HashSet<&NodeId> = nodes.iter().map(|n| &n.id).collect();

    edges
        .iter()
        .filter(|edge| {
            let source_known = known.contains(&edge.source);
            let target_known = known.contains(&edge.target);
            if !source_known {
                tracing::warn!(
                    "Dropping edge {} because source node {} is missing from the node set",
                    edge.id,
                    edge.source
                );
            }
            if !target_known {
                tracing::warn!(
                    "Dropping edge {} because target node {} is missing from the node set",
                    edge.id,
                    edge.target
                );
            }
            source_known && target_known
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use specmap_core::{EdgeId, NodeCategory};

    fn node(id: &str) -> GraphNode {
        GraphNode {
            id: NodeId::from(id),
            category: NodeCategory::MODULE,
            name: id.to_string(),
            ..Default::default()
        }
    }

    fn edge(id: &str, source: &str, target: &str) -> GraphEdge {
        GraphEdge {
            id: EdgeId::from(id),
            source: NodeId::from(source),
            target: NodeId::from(target),
            ..Default::default()
        }
    }

    #[test]
    fn test_filter_keeps_valid_edges() {
        let nodes = vec![node("a"), node("b")];
        let edges = vec![edge("e1", "a", "b")];
        assert_eq!(filter_dangling_edges(&nodes, &edges).len(), 1);
    }

    #[test]
    fn test_filter_drops_dangling_endpoints() {
        let nodes = vec![node("a"), node("b")];
        let edges = vec![
            edge("e1", "a", "b"),
            edge("e2", "a", "ghost"),
            edge("e3", "ghost", "b"),
        ];
        let kept = filter_dangling_edges(&nodes, &edges);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, EdgeId::from("e1"));
    }

    #[test]
    fn test_vec2_distance() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < f32::EPSILON);
    }
}
