//! 邻接表图模型
//!
//! 以整数顶点标识到邻居标识集合的映射表示有向图。
//! 只有出现在键集中的标识才算存在的顶点；被引用但不在键集中的
//! 悬空标识查询邻居时得到空集而不是错误。

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// 整数标识邻接表图
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapGraph {
    adjacency: HashMap<i64, HashSet<i64>>,
}

impl MapGraph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    /// 图中顶点（键）数量
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// 插入无出边的顶点；已存在时不做任何事
    pub fn insert_vertex(&mut self, id: i64) {
        self.adjacency.entry(id).or_default();
    }

    /// 插入有向边；起点不在键集中时自动创建。集合语义去重
    pub fn insert_edge(&mut self, from: i64, to: i64) {
        self.adjacency.entry(from).or_default().insert(to);
    }

    /// 判断顶点是否存在（只看键集）
    pub fn contains(&self, id: i64) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// 顶点的邻居标识；未知标识返回空迭代器
    pub fn neighbors(&self, id: i64) -> impl Iterator<Item = i64> + '_ {
        self.adjacency.get(&id).into_iter().flatten().copied()
    }
}

impl From<HashMap<i64, HashSet<i64>>> for MapGraph {
    fn from(adjacency: HashMap<i64, HashSet<i64>>) -> Self {
        Self { adjacency }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_edge_deduplicates() {
        let mut graph = MapGraph::new();
        graph.insert_edge(1, 2);
        graph.insert_edge(1, 2);
        graph.insert_edge(1, 3);

        assert_eq!(graph.neighbors(1).count(), 2);
    }

    #[test]
    fn test_dangling_id_has_no_neighbors() {
        let mut graph = MapGraph::new();
        graph.insert_edge(1, 7);

        // 7 被引用但不是键
        assert!(!graph.contains(7));
        assert_eq!(graph.neighbors(7).count(), 0);
    }

    #[test]
    fn test_insert_vertex_is_idempotent() {
        let mut graph = MapGraph::new();
        graph.insert_edge(1, 2);
        graph.insert_vertex(1);

        assert_eq!(graph.neighbors(1).count(), 1);
        assert_eq!(graph.len(), 1);
    }
}
