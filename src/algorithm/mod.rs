//! 图算法模块
//!
//! 只包含可达性遍历（DFS / BFS）

mod traversal;

pub use traversal::Traversal;
