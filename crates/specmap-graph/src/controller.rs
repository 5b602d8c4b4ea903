use crate::graph::PositionedNode;
use crate::layout::{layout, layout_seeded};
use specmap_core::{EdgeId, GraphEdge, GraphNode, LayoutMode, NodeId};
use specmap_events::{EventBus, GraphEvent};

/// Render-local state for one graph view.
///
/// Owns the positioned snapshot, the render-local edge list (which may grow
/// via connect gestures) and the single selection. The domain node/edge
/// lists are held as immutable snapshots for lookups; they are never
/// mutated here. Everything runs synchronously inside one event cycle.
pub struct GraphController {
    domain_nodes: Vec<GraphNode>,
    domain_edges: Vec<GraphEdge>,
    mode: LayoutMode,
    seed: Option<u64>,

    nodes: Vec<PositionedNode>,
    edges: Vec<GraphEdge>,
    selected: Option<NodeId>,

    events: EventBus,
}

impl GraphController {
    pub fn new(events: EventBus) -> Self {
        Self {
            domain_nodes: Vec::new(),
            domain_edges: Vec::new(),
            mode: LayoutMode::default(),
            seed: None,
            nodes: Vec::new(),
            edges: Vec::new(),
            selected: None,
            events,
        }
    }

    /// Controller whose Scatter layouts are reproducible.
    pub fn with_seed(events: EventBus, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::new(events)
        }
    }

    /// Replace the domain snapshot and derive a fresh positioned snapshot.
    ///
    /// Called whenever the external owner's node list, edge list or layout
    /// mode changes. Render-local edges from earlier connect gestures are
    /// discarded along with the old snapshot.
    pub fn set_graph(&mut self, nodes: &[GraphNode], edges: &[GraphEdge], mode: LayoutMode) {
        self.domain_nodes = nodes.to_vec();
        self.domain_edges = edges.to_vec();
        self.mode = mode;
        self.recompute();
    }

    /// Switch strategy over the currently held snapshot.
    pub fn set_mode(&mut self, mode: LayoutMode) {
        self.mode = mode;
        self.recompute();
    }

    fn recompute(&mut self) {
        let result = match self.seed {
            Some(seed) => layout_seeded(&self.domain_nodes, &self.domain_edges, self.mode, seed),
            None => layout(&self.domain_nodes, &self.domain_edges, self.mode),
        };
        self.nodes = result.nodes;
        self.edges = result.edges;
    }

    pub fn nodes(&self) -> &[PositionedNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn selected(&self) -> Option<&NodeId> {
        self.selected.as_ref()
    }

    /// The only way selection changes. Always publishes `NodeSelected`,
    /// including when re-selecting the already-selected node.
    pub fn select_node(&mut self, id: Option<NodeId>) {
        self.selected = id.clone();
        self.events.publish(GraphEvent::NodeSelected(id));
    }

    /// Double-click dispatch. Looks up the ORIGINAL domain node list, not
    /// the render-local copy; a stale id is a silent no-op because the data
    /// may have refreshed underneath the view.
    pub fn handle_double_click(&self, id: &NodeId) {
        match self.domain_nodes.iter().find(|n| &n.id == id) {
            Some(node) => self.events.publish(GraphEvent::NodeOpened(node.clone())),
            None => tracing::debug!("Ignoring double-click on stale node id {}", id),
        }
    }

    /// Edge-click dispatch, symmetric to [`Self::handle_double_click`].
    pub fn handle_edge_click(&self, id: &EdgeId) {
        match self.domain_edges.iter().find(|e| &e.id == id) {
            Some(edge) => self.events.publish(GraphEvent::EdgeActivated(edge.clone())),
            None => tracing::debug!("Ignoring click on stale edge id {}", id),
        }
    }

    /// Connect gesture: append a render-local edge `"<source>-<target>"`.
    ///
    /// The domain edge list is untouched; the owner observes
    /// `ConnectionDrafted` and decides whether to persist.
    pub fn connect(&mut self, source: NodeId, target: NodeId) {
        if source.is_empty() || target.is_empty() {
            return;
        }

        let edge = GraphEdge::connection(source, target);
        self.edges.push(edge.clone());
        self.events.publish(GraphEvent::ConnectionDrafted { edge });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use specmap_core::NodeCategory;

    fn node(id: &str) -> GraphNode {
        GraphNode {
            id: NodeId::from(id),
            category: NodeCategory::AGENT,
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

    fn controller_with_graph() -> (GraphController, crossbeam_channel::Receiver<GraphEvent>) {
        let bus = EventBus::new();
        let rx = bus.receiver();
        let mut controller = GraphController::new(bus);
        controller.set_graph(
            &[node("n1"), node("n2")],
            &[edge("e1", "n1", "n2")],
            LayoutMode::Layered,
        );
        (controller, rx)
    }

    #[test]
    fn test_select_then_clear_fires_two_events_in_order() {
        let (mut controller, rx) = controller_with_graph();

        controller.select_node(Some(NodeId::from("n1")));
        controller.select_node(None);

        assert_eq!(controller.selected(), None);
        match rx.try_recv().unwrap() {
            GraphEvent::NodeSelected(Some(id)) => assert_eq!(id, NodeId::from("n1")),
            other => panic!("Expected NodeSelected(n1), got {:?}", other),
        }
        match rx.try_recv().unwrap() {
            GraphEvent::NodeSelected(None) => {}
            other => panic!("Expected NodeSelected(None), got {:?}", other),
        }
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_reselecting_still_fires_the_callback() {
        let (mut controller, rx) = controller_with_graph();

        controller.select_node(Some(NodeId::from("n1")));
        controller.select_node(Some(NodeId::from("n1")));

        assert_eq!(controller.selected(), Some(&NodeId::from("n1")));
        assert_eq!(rx.try_iter().count(), 2);
    }

    #[test]
    fn test_double_click_dispatches_the_full_domain_node() {
        let (controller, rx) = controller_with_graph();

        controller.handle_double_click(&NodeId::from("n2"));

        match rx.try_recv().unwrap() {
            GraphEvent::NodeOpened(node) => assert_eq!(node.id, NodeId::from("n2")),
            other => panic!("Expected NodeOpened, got {:?}", other),
        }
    }

    #[test]
    fn test_stale_ids_are_silent_noops() {
        let (controller, rx) = controller_with_graph();

        controller.handle_double_click(&NodeId::from("gone"));
        controller.handle_edge_click(&EdgeId::from("gone"));

        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_edge_click_dispatches_the_full_domain_edge() {
        let (controller, rx) = controller_with_graph();

        controller.handle_edge_click(&EdgeId::from("e1"));

        match rx.try_recv().unwrap() {
            GraphEvent::EdgeActivated(edge) => assert_eq!(edge.id, EdgeId::from("e1")),
            other => panic!("Expected EdgeActivated, got {:?}", other),
        }
    }

    #[test]
    fn test_connect_appends_one_render_local_edge() {
        let (mut controller, rx) = controller_with_graph();
        let domain_edges_before = vec![edge("e1", "n1", "n2")];

        controller.connect(NodeId::from("n1"), NodeId::from("n2"));

        assert_eq!(controller.edges().len(), 2);
        assert_eq!(controller.edges()[1].id, EdgeId::from("n1-n2"));
        // Domain list is untouched; a fresh set_graph drops the draft.
        match rx.try_recv().unwrap() {
            GraphEvent::ConnectionDrafted { edge } => {
                assert_eq!(edge.id, EdgeId::from("n1-n2"));
            }
            other => panic!("Expected ConnectionDrafted, got {:?}", other),
        }
        controller.set_graph(
            &[node("n1"), node("n2")],
            &domain_edges_before,
            LayoutMode::Layered,
        );
        assert_eq!(controller.edges().len(), 1);
    }

    #[test]
    fn test_connect_rejects_empty_endpoints() {
        let (mut controller, rx) = controller_with_graph();

        controller.connect(NodeId::from(""), NodeId::from("n2"));
        controller.connect(NodeId::from("n1"), NodeId::from(""));

        assert_eq!(controller.edges().len(), 1);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_mode_change_recomputes_positions() {
        let (mut controller, _rx) = controller_with_graph();
        let layered: Vec<_> = controller.nodes().to_vec();

        controller.set_mode(LayoutMode::Circular);
        assert_eq!(controller.mode(), LayoutMode::Circular);
        assert_eq!(controller.nodes().len(), layered.len());
        assert_ne!(controller.nodes(), layered.as_slice());
    }
}
