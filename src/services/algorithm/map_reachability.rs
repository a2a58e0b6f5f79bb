//! 邻接表图可达性算法模块
//!
//! 包含邻接表图上的可达顶点收集与正值路径存在性判定算法实现

use crate::core::MapGraph;
use crate::services::algorithm::dfs::Dfs;

/// 邻接表图可达性算法结构体
pub struct MapReachability;

impl MapReachability {
    /// 收集从起点可达的全部顶点标识并升序返回，起点自身包含在内。
    /// 起点不在键集中时返回空。标识唯一，访问集保证无重复；
    /// 悬空邻居标识计入可达但不再展开。
    pub fn sorted_reachable(graph: &MapGraph, starting: i64) -> Vec<i64> {
        if !graph.contains(starting) {
            return Vec::new();
        }

        let mut ids = Vec::new();
        Dfs::walk(
            starting,
            |id| graph.neighbors(*id),
            |id| {
                ids.push(*id);
                true
            },
        );

        ids.sort_unstable();
        ids
    }

    /// 判断是否存在一条从起点到终点、途经顶点标识全部为正的路径。
    /// 任一端点不在键集中或不为正时直接返回 false，不做遍历；
    /// 起点等于终点视为长度为零的有效路径。
    /// 遍历期间只展开严格为正的邻居标识。
    pub fn positive_path_exists(graph: &MapGraph, starting: i64, ending: i64) -> bool {
        if !graph.contains(starting) || !graph.contains(ending) {
            return false;
        }
        if starting <= 0 || ending <= 0 {
            return false;
        }

        Dfs::walk(
            starting,
            |id| graph.neighbors(*id).filter(|neighbor| *neighbor > 0),
            |id| *id != ending,
        )
    }
}
