//! adjgraph - 基于邻接集合的内存无向图
//!
//! 支持：
//! - 顶点注册与移除（移除时级联删除相关的边）
//! - 无向边的添加与删除（邻接关系始终对称）
//! - 深度优先 / 广度优先可达性遍历
//! - 线程安全的共享图句柄
//!
//! ```
//! use adjgraph::Graph;
//!
//! let mut graph = Graph::new();
//! let a = graph.insert("A");
//! let b = graph.insert("B");
//! let c = graph.insert("C");
//! graph.add_edge(a, b)?;
//! graph.add_edge(a, c)?;
//!
//! assert_eq!(graph.breadth_first_search(a)?, vec![&"A", &"B", &"C"]);
//! # Ok::<(), adjgraph::Error>(())
//! ```

pub mod algorithm;
pub mod config;
pub mod error;
pub mod graph;
pub mod metrics;

// 重导出常用类型
pub use algorithm::Traversal;
pub use config::{GraphConfig, MissingVertexPolicy};
pub use error::{Error, Result};
pub use graph::{Graph, Node, NodeId, SharedGraph};
pub use metrics::{GraphMetrics, MetricsSnapshot};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
