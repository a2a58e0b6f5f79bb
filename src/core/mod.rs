pub mod error;
pub mod map_graph;
pub mod network;
pub mod node_graph;

// 错误和结果类型
pub use error::{GraphError, GraphResult};

// 核心数据类型
pub use map_graph::MapGraph;
pub use network::{MemberId, Network, Professional};
pub use node_graph::{NodeGraph, NodeId};
