use crossbeam_channel::{unbounded, Receiver, Sender};
use serde::{Deserialize, Serialize};
use specmap_core::{GraphEdge, GraphNode, NodeId};

/// Events emitted by the graph view toward its external owner.
///
/// The owner decides what, if anything, to do with them: highlight a detail
/// panel, open an inspector, persist a drafted connection. Nothing in the
/// graph core blocks on a consumer being present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GraphEvent {
    /// Selection changed. `None` means the selection was cleared.
    /// Fired on every `select_node` call, including re-selection.
    NodeSelected(Option<NodeId>),

    /// A node was double-clicked; carries the full domain node.
    NodeOpened(GraphNode),

    /// An edge was clicked; carries the full domain edge.
    EdgeActivated(GraphEdge),

    /// A connect gesture produced a render-local edge. The edge is NOT part
    /// of the domain edge list; persisting it is the owner's decision.
    ConnectionDrafted { edge: GraphEdge },
}

#[derive(Clone)]
pub struct EventBus {
    tx: Sender<GraphEvent>,
    rx: Receiver<GraphEvent>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx }
    }

    pub fn sender(&self) -> Sender<GraphEvent> {
        self.tx.clone()
    }

    pub fn receiver(&self) -> Receiver<GraphEvent> {
        self.rx.clone()
    }

    pub fn publish(&self, event: GraphEvent) {
        let _ = self.tx.send(event);
    }

    /// Dispatch all pending events to a listener.
    /// This is useful for processing events in the UI loop.
    pub fn dispatch_to<L: EventListener>(&self, listener: &mut L) {
        while let Ok(event) = self.rx.try_recv() {
            listener.handle_event(&event);
        }
    }
}

/// Trait for components that respond to events.
/// Implement this to receive events from the EventBus.
pub trait EventListener {
    fn handle_event(&mut self, event: &GraphEvent);
}

#[cfg(test)]
mod tests {
    use super::*;
    use specmap_core::NodeId;

    #[test]
    fn test_event_bus_publish_receive() {
        let bus = EventBus::new();
        let sender = bus.sender();
        let receiver = bus.receiver();

        sender
            .send(GraphEvent::NodeSelected(Some(NodeId::from("n1"))))
            .unwrap();

        match receiver.recv().unwrap() {
            GraphEvent::NodeSelected(Some(id)) => assert_eq!(id, NodeId::from("n1")),
            other => panic!("Expected NodeSelected, got {:?}", other),
        }
    }

    #[test]
    fn test_dispatch_drains_pending_events() {
        struct Counter(usize);
        impl EventListener for Counter {
            fn handle_event(&mut self, _event: &GraphEvent) {
                self.0 += 1;
            }
        }

        let bus = EventBus::new();
        bus.publish(GraphEvent::NodeSelected(None));
        bus.publish(GraphEvent::NodeSelected(Some(NodeId::from("a"))));

        let mut counter = Counter(0);
        bus.dispatch_to(&mut counter);
        assert_eq!(counter.0, 2);
    }
}
