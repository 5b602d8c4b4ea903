use crate::graph::PositionedNode;
use crate::style::DEFAULT_MARKER_COLOR;
use serde::{Deserialize, Serialize};
use specmap_core::{GraphEdge, NodeId};

/// A positioned node decorated for the rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderNode {
    #[serde(flatten)]
    pub positioned: PositionedNode,
    pub selected: bool,
}

/// An edge decorated for the rendering surface: the arrow-head marker color
/// is resolved here so the surface never consults the palette itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderEdge {
    pub edge: GraphEdge,
    pub marker_color: String,
    pub animated: bool,
}

/// Pure adapter from positioned domain records to render records.
pub struct RenderAdapter;

impl RenderAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Each render node carries the full positioned node plus
    /// `selected = (id == selected_id)`.
    pub fn to_render_nodes(
        &self,
        positioned: &[PositionedNode],
        selected_id: Option<&NodeId>,
    ) -> Vec<RenderNode> {
        positioned
            .iter()
            .map(|p| RenderNode {
                positioned: p.clone(),
                selected: selected_id == Some(&p.node.id),
            })
            .collect()
    }

    /// The marker color is the edge's own stroke override when present,
    /// else the neutral default. `animated` defaults to false.
    pub fn to_render_edges(&self, edges: &[GraphEdge]) -> Vec<RenderEdge> {
        edges
            .iter()
            .map(|edge| {
                let marker_color = edge
                    .style
                    .as_ref()
                    .and_then(|style| style.stroke.clone())
                    .unwrap_or_else(|| DEFAULT_MARKER_COLOR.to_string());
                RenderEdge {
                    edge: edge.clone(),
                    marker_color,
                    animated: edge.animated,
                }
            })
            .collect()
    }
}

impl Default for RenderAdapter {
    fn default() -> Self {
        Self::new()
    }
}
