//! 统一错误处理
//!
//! 遍历算法是全函数：非法输入一律映射为 0/空/false，不产生错误。
//! 错误类型只覆盖图结构装配这一层，把悬空句柄之类的调用方缺陷
//! 显式返回而不是 panic。

use thiserror::Error;

/// 图结构装配错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("无效的顶点句柄: {0}")]
    InvalidHandle(usize),

    #[error("未知的网络成员: {0}")]
    UnknownMember(usize),
}

/// 统一的结果类型
pub type GraphResult<T> = Result<T, GraphError>;
