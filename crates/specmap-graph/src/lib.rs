pub mod controller;
pub mod converter;
pub mod graph;
pub mod layout;
pub mod style;

pub use controller::GraphController;
pub use converter::{RenderAdapter, RenderEdge, RenderNode};
pub use graph::{filter_dangling_edges, PositionedNode, Vec2};
pub use layout::{
    layout, layout_seeded, CircularLayouter, HierarchicalLayouter, LayeredLayouter, LayoutResult,
    Layouter, ScatterLayouter, NODE_HEIGHT, NODE_WIDTH,
};
pub use style::{
    category_label, minimap_color, node_colors, status_color, status_label, Color, NodeColors,
    DEFAULT_MARKER_COLOR,
};
