use log::warn;
use serde::{Deserialize, Serialize};

use crate::core::error::{GraphError, GraphResult};

/// Stable handle addressing a vertex slot in a `NodeGraph` arena.
///
/// Identity is the handle, never the stored value: two slots holding equal
/// values are distinct vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    /// Raw slot index, for diagnostics only.
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct VertexSlot<T> {
    value: T,
    neighbors: Vec<NodeId>,
}

/// Directed graph of value-carrying vertices with ordered successor lists.
///
/// Vertices live in an arena and are addressed by `NodeId` handles, so the
/// structure may freely contain self-loops, mutual references and duplicate
/// edges. The traversal algorithms only ever borrow a `NodeGraph` immutably.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeGraph<T> {
    vertices: Vec<VertexSlot<T>>,
}

// 手动实现Default，避免对T引入多余约束
impl<T> Default for NodeGraph<T> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }
}

impl<T> NodeGraph<T> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices in the arena.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Allocate a vertex holding `value` and return its handle.
    pub fn add_vertex(&mut self, value: T) -> NodeId {
        let id = NodeId(self.vertices.len());
        self.vertices.push(VertexSlot {
            value,
            neighbors: Vec::new(),
        });
        id
    }

    /// Record a directed edge. The neighbor list is ordered and may hold
    /// duplicates; both endpoints must already be allocated.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> GraphResult<()> {
        if !self.contains(to) {
            warn!("edge rejected: target handle {} out of range", to.0);
            return Err(GraphError::InvalidHandle(to.0));
        }
        match self.vertices.get_mut(from.0) {
            Some(slot) => {
                slot.neighbors.push(to);
                Ok(())
            }
            None => {
                warn!("edge rejected: source handle {} out of range", from.0);
                Err(GraphError::InvalidHandle(from.0))
            }
        }
    }

    /// Whether `id` addresses an allocated vertex.
    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.vertices.len()
    }

    /// The value stored at `id`, or `None` for an unknown handle.
    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.vertices.get(id.0).map(|slot| &slot.value)
    }

    /// Successors of `id` in insertion order. An unknown handle yields an
    /// empty slice rather than a fault.
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.vertices
            .get(id.0)
            .map(|slot| slot.neighbors.as_slice())
            .unwrap_or(&[])
    }
}
