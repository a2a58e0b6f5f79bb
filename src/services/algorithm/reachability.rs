//! 可达性统计算法模块
//!
//! 包含节点图上的奇数值顶点计数与可达值收集排序算法实现

use crate::core::{NodeGraph, NodeId};
use crate::services::algorithm::dfs::Dfs;

/// 可达性统计算法结构体
pub struct Reachability;

impl Reachability {
    /// 统计从起点可达的奇数值顶点个数，起点自身计入。
    /// 起点为 None 或句柄未知时返回 0，不做任何遍历。
    /// 按顶点计数：不同顶点存放相同奇数值时分别计入。
    pub fn odd_vertices(graph: &NodeGraph<i64>, starting: Option<NodeId>) -> usize {
        let start = match starting {
            Some(id) if graph.contains(id) => id,
            _ => return 0,
        };

        let mut count = 0;
        Dfs::walk(
            start,
            |id| graph.neighbors(*id).to_vec(),
            |id| {
                if let Some(value) = graph.value(*id) {
                    // 余数保留被除数符号，负奇数同样非零
                    if value % 2 != 0 {
                        count += 1;
                    }
                }
                true
            },
        );

        count
    }

    /// 收集从起点可达的全部顶点值并升序返回，起点自身包含在内。
    /// 不同顶点存放相同值时重复保留；起点为 None 或句柄未知时返回空。
    pub fn sorted_reachable<T>(graph: &NodeGraph<T>, starting: Option<NodeId>) -> Vec<T>
    where
        T: Clone + Ord,
    {
        let start = match starting {
            Some(id) if graph.contains(id) => id,
            _ => return Vec::new(),
        };

        let mut values = Vec::new();
        Dfs::walk(
            start,
            |id| graph.neighbors(*id).to_vec(),
            |id| {
                if let Some(value) = graph.value(*id) {
                    values.push(value.clone());
                }
                true
            },
        );

        values.sort();
        values
    }
}
