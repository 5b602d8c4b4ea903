use crate::graph::{filter_dangling_edges, PositionedNode, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use specmap_core::{GraphEdge, GraphNode, LayoutMode, NodeId};
use std::collections::{HashMap, HashSet, VecDeque};

/// Logical node box used for spacing computations. The rendering surface
/// draws cards of exactly this size.
pub const NODE_WIDTH: f32 = 250.0;
pub const NODE_HEIGHT: f32 = 100.0;

pub trait Layouter {
    /// Assign a position to every input node. Returns exactly one positioned
    /// node per input node, in input order; never fails, never drops.
    fn execute(&mut self, nodes: &[GraphNode], edges: &[GraphEdge]) -> Vec<PositionedNode>;
}

/// Positioned snapshot produced by the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    pub nodes: Vec<PositionedNode>,
    /// Input edges minus any whose endpoints are missing from the node set.
    pub edges: Vec<GraphEdge>,
}

/// Run the strategy selected by `mode` over a fresh copy of the inputs.
///
/// Recomputes on every call and performs no caching: Layered, Hierarchical
/// and Circular are pure functions of their inputs and may be memoized by
/// the caller, but Scatter must be allowed to re-randomize when explicitly
/// re-invoked.
pub fn layout(nodes: &[GraphNode], edges: &[GraphEdge], mode: LayoutMode) -> LayoutResult {
    run(nodes, edges, mode, None)
}

/// Like [`layout`], but Scatter draws its jitter from a seeded generator so
/// repeated calls with the same seed are byte-identical.
pub fn layout_seeded(
    nodes: &[GraphNode],
    edges: &[GraphEdge],
    mode: LayoutMode,
    seed: u64,
) -> LayoutResult {
    run(nodes, edges, mode, Some(seed))
}

fn run(
    nodes: &[GraphNode],
    edges: &[GraphEdge],
    mode: LayoutMode,
    seed: Option<u64>,
) -> LayoutResult {
    let edges = filter_dangling_edges(nodes, edges);

    let mut layouter: Box<dyn Layouter> = match mode {
        LayoutMode::Layered => Box::new(LayeredLayouter),
        LayoutMode::Hierarchical => Box::new(HierarchicalLayouter),
        LayoutMode::Circular => Box::new(CircularLayouter),
        LayoutMode::Scatter => Box::new(match seed {
            Some(seed) => ScatterLayouter::from_seed(seed),
            None => ScatterLayouter::new(),
        }),
    };

    LayoutResult {
        nodes: layouter.execute(nodes, &edges),
        edges,
    }
}

/// Directed layered layout: ranks consistent with edge direction, rank order
/// top to bottom, per-rank ordering by barycenter sweeps. The computed node
/// center is shifted by half the box extents so the returned position is the
/// box's top-left corner.
pub struct LayeredLayouter;

impl LayeredLayouter {
    const NODE_SPACING: f32 = 60.0;
    const LAYER_SPACING: f32 = 150.0;
    /// Maximum iterations for ranking convergence
    const MAX_RANKING_ITERATIONS: usize = 1000;

    fn assign_ranks(nodes: &[GraphNode], edges: &[GraphEdge]) -> HashMap<NodeId, i32> {
        let mut ranks: HashMap<NodeId, i32> =
            nodes.iter().map(|n| (n.id.clone(), 0)).collect();

        let max_iterations = (nodes.len() + 2).min(Self::MAX_RANKING_ITERATIONS);
        let mut converged = false;
        for _ in 0..max_iterations {
            let mut changed = false;
            for edge in edges {
                if let (Some(&source_rank), Some(&target_rank)) =
                    (ranks.get(&edge.source), ranks.get(&edge.target))
                {
                    if target_rank <= source_rank {
                        ranks.insert(edge.target.clone(), source_rank + 1);
                        changed = true;
                    }
                }
            }

            if !changed {
                converged = true;
                break;
            }
        }

        if !converged {
            // Cyclic input: ranks are whatever the last bounded pass left.
            tracing::warn!(
                "Layer ranking did not converge after {} iterations",
                max_iterations
            );
        }

        Self::compress_ranks(&mut ranks);
        ranks
    }

    fn compress_ranks(ranks: &mut HashMap<NodeId, i32>) {
        if ranks.is_empty() {
            return;
        }

        let mut unique_ranks: Vec<i32> = ranks.values().copied().collect();
        unique_ranks.sort_unstable();
        unique_ranks.dedup();

        let remap: HashMap<i32, i32> = unique_ranks
            .iter()
            .enumerate()
            .map(|(i, &rank)| (rank, i as i32))
            .collect();

        for rank in ranks.values_mut() {
            if let Some(new_rank) = remap.get(rank) {
                *rank = *new_rank;
            }
        }
    }

    /// Layers in input order within each rank; ranks returned sorted.
    fn build_layers(
        nodes: &[GraphNode],
        ranks: &HashMap<NodeId, i32>,
    ) -> (HashMap<i32, Vec<NodeId>>, Vec<i32>) {
        let mut layers: HashMap<i32, Vec<NodeId>> = HashMap::new();
        for node in nodes {
            let rank = ranks.get(&node.id).copied().unwrap_or(0);
            layers.entry(rank).or_default().push(node.id.clone());
        }

        let mut sorted_ranks: Vec<i32> = layers.keys().copied().collect();
        sorted_ranks.sort_unstable();
        (layers, sorted_ranks)
    }

    fn order_layer_by_barycenter(
        layer_nodes: &mut [NodeId],
        layer_coords: &HashMap<NodeId, f32>,
        neighbors: &HashMap<NodeId, Vec<NodeId>>,
    ) {
        let mut barycenters: HashMap<NodeId, f32> = HashMap::new();

        for node_id in layer_nodes.iter() {
            let mut sum = 0.0;
            let mut count = 0;

            if let Some(adjacent) = neighbors.get(node_id) {
                for neighbor in adjacent {
                    if let Some(&coord) = layer_coords.get(neighbor) {
                        sum += coord;
                        count += 1;
                    }
                }
            }

            let barycenter = if count > 0 {
                sum / count as f32
            } else {
                layer_coords.get(node_id).copied().unwrap_or(0.0)
            };
            barycenters.insert(node_id.clone(), barycenter);
        }

        layer_nodes.sort_by(|a, b| {
            barycenters
                .get(a)
                .unwrap_or(&0.0)
                .partial_cmp(barycenters.get(b).unwrap_or(&0.0))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    fn run_barycenter_passes(
        layers: &mut HashMap<i32, Vec<NodeId>>,
        sorted_ranks: &[i32],
        layer_coords: &mut HashMap<NodeId, f32>,
        incoming: &HashMap<NodeId, Vec<NodeId>>,
        outgoing: &HashMap<NodeId, Vec<NodeId>>,
    ) {
        for _ in 0..2 {
            for &rank in sorted_ranks.iter().skip(1) {
                if let Some(layer_nodes) = layers.get_mut(&rank) {
                    Self::order_layer_by_barycenter(layer_nodes, layer_coords, incoming);
                    for (j, node_id) in layer_nodes.iter().enumerate() {
                        layer_coords.insert(node_id.clone(), j as f32 * Self::NODE_SPACING);
                    }
                }
            }

            for i in (0..sorted_ranks.len().saturating_sub(1)).rev() {
                let rank = sorted_ranks[i];
                if let Some(layer_nodes) = layers.get_mut(&rank) {
                    Self::order_layer_by_barycenter(layer_nodes, layer_coords, outgoing);
                    for (j, node_id) in layer_nodes.iter().enumerate() {
                        layer_coords.insert(node_id.clone(), j as f32 * Self::NODE_SPACING);
                    }
                }
            }
        }
    }

    fn adjacency(
        edges: &[GraphEdge],
    ) -> (HashMap<NodeId, Vec<NodeId>>, HashMap<NodeId, Vec<NodeId>>) {
        let mut incoming: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
        let mut outgoing: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
        for edge in edges {
            incoming
                .entry(edge.target.clone())
                .or_default()
                .push(edge.source.clone());
            outgoing
                .entry(edge.source.clone())
                .or_default()
                .push(edge.target.clone());
        }
        (incoming, outgoing)
    }
}

impl Layouter for LayeredLayouter {
    fn execute(&mut self, nodes: &[GraphNode], edges: &[GraphEdge]) -> Vec<PositionedNode> {
        if nodes.is_empty() {
            return Vec::new();
        }

        let ranks = Self::assign_ranks(nodes, edges);
        let (mut layers, sorted_ranks) = Self::build_layers(nodes, &ranks);
        let (incoming, outgoing) = Self::adjacency(edges);

        let mut layer_coords: HashMap<NodeId, f32> = HashMap::new();
        for rank in &sorted_ranks {
            if let Some(layer_nodes) = layers.get(rank) {
                for (j, node_id) in layer_nodes.iter().enumerate() {
                    layer_coords.insert(node_id.clone(), j as f32 * Self::NODE_SPACING);
                }
            }
        }
        Self::run_barycenter_passes(
            &mut layers,
            &sorted_ranks,
            &mut layer_coords,
            &incoming,
            &outgoing,
        );

        let mut positions: HashMap<NodeId, Vec2> = HashMap::new();
        for rank in &sorted_ranks {
            let Some(layer_nodes) = layers.get(rank) else {
                continue;
            };
            let count = layer_nodes.len();
            let extent =
                count as f32 * NODE_WIDTH + count.saturating_sub(1) as f32 * Self::NODE_SPACING;
            let center_y = *rank as f32 * Self::LAYER_SPACING;
            let mut center_x = -extent / 2.0 + NODE_WIDTH / 2.0;

            for node_id in layer_nodes {
                positions.insert(
                    node_id.clone(),
                    Vec2::new(center_x - NODE_WIDTH / 2.0, center_y - NODE_HEIGHT / 2.0),
                );
                center_x += NODE_WIDTH + Self::NODE_SPACING;
            }
        }

        nodes
            .iter()
            .map(|node| PositionedNode {
                node: node.clone(),
                position: positions.get(&node.id).copied().unwrap_or_default(),
            })
            .collect()
    }
}

/// Breadth-first level assignment from zero-indegree roots, one root at a
/// time in input order. A node keeps the level of its FIRST discovery, which
/// for multi-root graphs is not necessarily its shortest distance from any
/// root; that quirk is intentional and pinned by a regression test.
pub struct HierarchicalLayouter;

impl HierarchicalLayouter {
    const LEVEL_HEIGHT: f32 = 150.0;
    const LEVEL_TOP_OFFSET: f32 = 50.0;
    const ROW_WIDTH: f32 = 800.0;

    fn assign_levels(nodes: &[GraphNode], edges: &[GraphEdge]) -> HashMap<NodeId, u32> {
        let known: HashSet<&NodeId> = nodes.iter().map(|n| &n.id).collect();

        let mut outgoing: HashMap<&NodeId, Vec<&NodeId>> = HashMap::new();
        let mut indegree: HashMap<&NodeId, usize> =
            nodes.iter().map(|n| (&n.id, 0)).collect();
        for edge in edges {
            // Tolerate dangling endpoints by never traversing through them.
            if known.contains(&edge.source) && known.contains(&edge.target) {
                outgoing.entry(&edge.source).or_default().push(&edge.target);
                if let Some(count) = indegree.get_mut(&edge.target) {
                    *count += 1;
                }
            }
        }

        let mut levels: HashMap<NodeId, u32> = HashMap::new();

        let roots: Vec<&NodeId> = nodes
            .iter()
            .filter(|n| indegree.get(&n.id).copied().unwrap_or(0) == 0)
            .map(|n| &n.id)
            .collect();

        if roots.is_empty() {
            // No zero-indegree node; start arbitrarily from the first node.
            if let Some(first) = nodes.first() {
                Self::bfs_from(&first.id, &outgoing, &mut levels);
            }
        } else {
            for root in roots {
                Self::bfs_from(root, &outgoing, &mut levels);
            }
        }

        levels
    }

    fn bfs_from(
        start: &NodeId,
        outgoing: &HashMap<&NodeId, Vec<&NodeId>>,
        levels: &mut HashMap<NodeId, u32>,
    ) {
        if levels.contains_key(start) {
            return;
        }
        levels.insert(start.clone(), 0);

        let mut queue: VecDeque<NodeId> = VecDeque::new();
        queue.push_back(start.clone());

        while let Some(current) = queue.pop_front() {
            let level = levels[&current];
            if let Some(targets) = outgoing.get(&current) {
                for &target in targets {
                    if !levels.contains_key(target) {
                        levels.insert(target.clone(), level + 1);
                        queue.push_back(target.clone());
                    }
                }
            }
        }
    }
}

impl Layouter for HierarchicalLayouter {
    fn execute(&mut self, nodes: &[GraphNode], edges: &[GraphEdge]) -> Vec<PositionedNode> {
        if nodes.is_empty() {
            return Vec::new();
        }

        let levels = Self::assign_levels(nodes, edges);

        // Group by level, input order within a level. Nodes the traversal
        // never reached (e.g. a detached cycle) fall back to level 0.
        let mut groups: HashMap<u32, Vec<&NodeId>> = HashMap::new();
        for node in nodes {
            let level = levels.get(&node.id).copied().unwrap_or(0);
            groups.entry(level).or_default().push(&node.id);
        }

        let mut positions: HashMap<NodeId, Vec2> = HashMap::new();
        for (&level, members) in &groups {
            let slot = Self::ROW_WIDTH / members.len() as f32;
            for (i, &node_id) in members.iter().enumerate() {
                positions.insert(
                    node_id.clone(),
                    Vec2::new(
                        i as f32 * slot + slot / 2.0 - NODE_WIDTH / 2.0,
                        level as f32 * Self::LEVEL_HEIGHT + Self::LEVEL_TOP_OFFSET,
                    ),
                );
            }
        }

        nodes
            .iter()
            .map(|node| PositionedNode {
                node: node.clone(),
                position: positions.get(&node.id).copied().unwrap_or_default(),
            })
            .collect()
    }
}

/// All nodes evenly spaced on a circle around a fixed center. The radius
/// shrinks with node count so large graphs stay inside the frame.
pub struct CircularLayouter;

impl CircularLayouter {
    pub const CENTER: Vec2 = Vec2 { x: 400.0, y: 300.0 };
    const MIN_RADIUS: f32 = 20.0;

    pub fn radius(node_count: usize) -> f32 {
        (300.0 - 2.0 * node_count as f32)
            .min(250.0)
            .max(Self::MIN_RADIUS)
    }
}

impl Layouter for CircularLayouter {
    fn execute(&mut self, nodes: &[GraphNode], _edges: &[GraphEdge]) -> Vec<PositionedNode> {
        if nodes.is_empty() {
            return Vec::new();
        }

        let count = nodes.len();
        let radius = Self::radius(count);

        nodes
            .iter()
            .enumerate()
            .map(|(i, node)| {
                let angle = 2.0 * std::f32::consts::PI * i as f32 / count as f32;
                PositionedNode {
                    node: node.clone(),
                    position: Vec2::new(
                        Self::CENTER.x + radius * angle.cos(),
                        Self::CENTER.y + radius * angle.sin(),
                    ),
                }
            })
            .collect()
    }
}

/// Circular placement at a fixed radius with independent random jitter per
/// axis. Not a physics simulation: a single pass with noise, so unseeded
/// instances are non-deterministic across invocations by design.
pub struct ScatterLayouter {
    rng: StdRng,
}

impl ScatterLayouter {
    pub const RADIUS: f32 = 200.0;
    pub const JITTER: f32 = 50.0;

    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic instance for tests and reproducible snapshots.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for ScatterLayouter {
    fn default() -> Self {
        Self::new()
    }
}

impl Layouter for ScatterLayouter {
    fn execute(&mut self, nodes: &[GraphNode], _edges: &[GraphEdge]) -> Vec<PositionedNode> {
        if nodes.is_empty() {
            return Vec::new();
        }

        let count = nodes.len();

        nodes
            .iter()
            .enumerate()
            .map(|(i, node)| {
                let angle = 2.0 * std::f32::consts::PI * i as f32 / count as f32;
                let jitter_x = self.rng.gen_range(-Self::JITTER..=Self::JITTER);
                let jitter_y = self.rng.gen_range(-Self::JITTER..=Self::JITTER);
                PositionedNode {
                    node: node.clone(),
                    position: Vec2::new(
                        CircularLayouter::CENTER.x + Self::RADIUS * angle.cos() + jitter_x,
                        CircularLayouter::CENTER.y + Self::RADIUS * angle.sin() + jitter_y,
                    ),
                }
            })
            .collect()
    }
}
