//! 双向可达性算法模块
//!
//! 包含节点图上的单向可达判定与双向互达判定算法实现

use crate::core::{NodeGraph, NodeId};
use crate::services::algorithm::dfs::Dfs;

/// 双向可达性算法结构体
pub struct MutualReachability;

impl MutualReachability {
    /// 判断两个顶点是否互达。任一为 None 返回 false，不做遍历；
    /// 同一顶点直接为真；否则以两次相互独立的遍历分别判定
    /// v1 到 v2 与 v2 到 v1。
    pub fn two_way<T>(graph: &NodeGraph<T>, v1: Option<NodeId>, v2: Option<NodeId>) -> bool {
        let (v1, v2) = match (v1, v2) {
            (Some(a), Some(b)) => (a, b),
            _ => return false,
        };
        if v1 == v2 {
            return true;
        }

        Self::reaches(graph, v1, v2) && Self::reaches(graph, v2, v1)
    }

    /// 判断沿有向边能否从 from 到达 to；顶点可达自身
    pub fn reaches<T>(graph: &NodeGraph<T>, from: NodeId, to: NodeId) -> bool {
        Dfs::walk(from, |id| graph.neighbors(*id).to_vec(), |id| *id != to)
    }
}
