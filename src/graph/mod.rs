//! 图核心模块
//!
//! 定义节点、图以及线程安全的共享图句柄

mod graph;
mod node;
mod shared;

pub use graph::Graph;
pub use node::{Node, NodeId};
pub use shared::SharedGraph;
