//! DFS算法模块
//!
//! 包含受访问集保护的深度优先遍历原语；各可达性算法在其上
//! 注入自己的邻居展开与访问副作用

use std::collections::HashSet;
use std::hash::Hash;

/// DFS遍历原语结构体
pub struct Dfs;

impl Dfs {
    /// 受保护的深度优先遍历：从起点出发，每个可达顶点恰好访问一次，
    /// 自环与菱形汇合也不会重复触发副作用。
    ///
    /// `neighbors` 给出顶点的后继展开；`visit` 在顶点首次访问时调用，
    /// 返回 `false` 则立即终止整个遍历。
    /// 返回值表示遍历是否被 `visit` 中断。
    pub fn walk<T, N, I, F>(start: T, mut neighbors: N, mut visit: F) -> bool
    where
        T: Copy + Eq + Hash,
        N: FnMut(&T) -> I,
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> bool,
    {
        let mut visited: HashSet<T> = HashSet::new();
        let mut stack = vec![start];

        while let Some(current) = stack.pop() {
            if visited.contains(&current) {
                continue;
            }
            visited.insert(current);

            if !visit(&current) {
                return true;
            }

            let expansion: Vec<T> = neighbors(&current).into_iter().collect();
            for neighbor in expansion.into_iter().rev() {
                // Reverse to maintain order when using stack
                if !visited.contains(&neighbor) {
                    stack.push(neighbor);
                }
            }
        }

        false
    }
}
