//! 线程安全的共享图
//!
//! `Graph` 本身只允许单一所有者修改。需要跨线程访问时用 `SharedGraph`：
//! 变更持有写锁，遍历持有读锁并返回拥有所有权的结果。

use super::graph::Graph;
use super::node::NodeId;
use crate::config::GraphConfig;
use crate::error::Result;
use crate::metrics::MetricsSnapshot;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::collections::HashSet;
use std::sync::Arc;

/// 共享图句柄，克隆后指向同一张图
#[derive(Debug)]
pub struct SharedGraph<T> {
    inner: Arc<RwLock<Graph<T>>>,
}

impl<T> Clone for SharedGraph<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> SharedGraph<T> {
    pub fn new() -> Self {
        Self::from_graph(Graph::new())
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Self::from_graph(Graph::with_config(config))
    }

    pub fn from_graph(graph: Graph<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    /// 获取读锁
    pub fn read(&self) -> RwLockReadGuard<'_, Graph<T>> {
        self.inner.read()
    }

    /// 获取写锁
    pub fn write(&self) -> RwLockWriteGuard<'_, Graph<T>> {
        self.inner.write()
    }

    // ==================== 变更 ====================

    /// 创建节点（未注册）
    pub fn new_node(&self, value: T) -> NodeId {
        self.inner.write().new_node(value)
    }

    /// 创建节点并注册为顶点
    pub fn insert(&self, value: T) -> NodeId {
        self.inner.write().insert(value)
    }

    pub fn add_vertex(&self, vertex: NodeId) -> Result<bool> {
        self.inner.write().add_vertex(vertex)
    }

    pub fn add_vertices<I>(&self, vertices: I) -> Result<usize>
    where
        I: IntoIterator<Item = NodeId>,
    {
        self.inner.write().add_vertices(vertices)
    }

    pub fn remove_vertex(&self, vertex: NodeId) -> Result<bool> {
        self.inner.write().remove_vertex(vertex)
    }

    pub fn add_edge(&self, v1: NodeId, v2: NodeId) -> Result<bool> {
        self.inner.write().add_edge(v1, v2)
    }

    pub fn remove_edge(&self, v1: NodeId, v2: NodeId) -> Result<bool> {
        self.inner.write().remove_edge(v1, v2)
    }

    // ==================== 查询 ====================

    pub fn contains_vertex(&self, vertex: NodeId) -> bool {
        self.inner.read().contains_vertex(vertex)
    }

    pub fn has_edge(&self, v1: NodeId, v2: NodeId) -> bool {
        self.inner.read().has_edge(v1, v2)
    }

    pub fn vertex_count(&self) -> usize {
        self.inner.read().vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.read().edge_count()
    }

    pub fn neighbors(&self, vertex: NodeId) -> Option<Vec<NodeId>> {
        self.inner
            .read()
            .neighbors(vertex)
            .map(|neighbors| neighbors.collect())
    }

    pub fn depth_first_ids(&self, start: NodeId) -> Result<Vec<NodeId>> {
        self.inner.read().depth_first_ids(start)
    }

    pub fn breadth_first_ids(&self, start: NodeId) -> Result<Vec<NodeId>> {
        self.inner.read().breadth_first_ids(start)
    }

    pub fn reachable(&self, start: NodeId) -> Result<HashSet<NodeId>> {
        self.inner.read().reachable(start)
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.inner.read().metrics()
    }
}

impl<T: Clone> SharedGraph<T> {
    /// 深度优先遍历，返回克隆的节点值
    pub fn depth_first_search(&self, start: NodeId) -> Result<Vec<T>> {
        let graph = self.inner.read();
        let values = graph.depth_first_search(start)?;
        Ok(values.into_iter().cloned().collect())
    }

    /// 广度优先遍历，返回克隆的节点值
    pub fn breadth_first_search(&self, start: NodeId) -> Result<Vec<T>> {
        let graph = self.inner.read();
        let values = graph.breadth_first_search(start)?;
        Ok(values.into_iter().cloned().collect())
    }

    pub fn value(&self, id: NodeId) -> Option<T> {
        self.inner.read().value(id).cloned()
    }
}

impl<T> Default for SharedGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Graph<T>> for SharedGraph<T> {
    fn from(graph: Graph<T>) -> Self {
        Self::from_graph(graph)
    }
}
