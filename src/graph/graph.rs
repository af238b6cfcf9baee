//! 无向图数据结构
//!
//! 节点存放在 arena 中，图只记录哪些节点已注册为顶点。
//! 所有变更（增删顶点、增删边）都经由图完成，以保证邻接关系对称。

use super::node::{Node, NodeId};
use crate::algorithm::Traversal;
use crate::config::{GraphConfig, MissingVertexPolicy};
use crate::error::{Error, Result};
use crate::metrics::{GraphMetrics, MetricsSnapshot};
use indexmap::IndexSet;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

/// 下一个图编号，用于给 `NodeId` 打上所属图的标记
static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(1);

/// 无向图
#[derive(Debug)]
pub struct Graph<T> {
    /// 图编号
    id: u64,
    /// 所有交给图的节点（包括未注册或已移除的）
    arena: Vec<Node<T>>,
    /// 已注册的顶点
    nodes: IndexSet<NodeId>,
    /// 配置
    config: GraphConfig,
    /// 操作指标
    metrics: GraphMetrics,
}

impl<T> Graph<T> {
    /// 使用默认配置创建空图
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// 使用指定配置创建空图
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            id: NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed),
            arena: Vec::new(),
            nodes: IndexSet::new(),
            config,
            metrics: GraphMetrics::new(),
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// 获取指标快照
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    pub fn reset_metrics(&self) {
        self.metrics.reset();
    }

    pub(crate) fn metrics_handle(&self) -> Option<&GraphMetrics> {
        self.config.record_metrics.then_some(&self.metrics)
    }

    // ==================== 节点 ====================

    /// 把节点交给图管理，返回其 ID。节点此时尚未注册为顶点。
    pub fn insert_node(&mut self, node: Node<T>) -> NodeId {
        let id = NodeId::new(self.id, self.arena.len());
        self.arena.push(node);
        id
    }

    /// 用值创建节点（未注册）
    pub fn new_node(&mut self, value: T) -> NodeId {
        self.insert_node(Node::new(value))
    }

    /// 创建节点并立即注册为顶点
    pub fn insert(&mut self, value: T) -> NodeId {
        let id = self.new_node(value);
        self.nodes.insert(id);
        if let Some(metrics) = self.metrics_handle() {
            metrics.record_vertex_added();
        }
        debug!(vertex = %id, "注册顶点");
        id
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        if id.graph() != self.id {
            return None;
        }
        self.arena.get(id.index())
    }

    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(Node::value)
    }

    pub fn value_mut(&mut self, id: NodeId) -> Option<&mut T> {
        if id.graph() != self.id {
            return None;
        }
        self.arena.get_mut(id.index()).map(Node::value_mut)
    }

    /// arena 中的节点总数（含未注册节点）
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    // ==================== 顶点操作 ====================

    /// 注册顶点
    ///
    /// 返回 `Ok(true)` 表示新注册，`Ok(false)` 表示已经是顶点。
    /// 节点自带的邻接项按 `link_initial_adjacency` 的规则整理。
    pub fn add_vertex(&mut self, vertex: NodeId) -> Result<bool> {
        self.check_known(vertex)?;
        let added = self.nodes.insert(vertex);
        if added {
            let linked = self.link_initial_adjacency(vertex);
            if let Some(metrics) = self.metrics_handle() {
                metrics.record_vertex_added();
                metrics.record_edges_added(linked);
            }
            debug!(vertex = %vertex, linked, "注册顶点");
        }
        Ok(added)
    }

    /// 整理刚注册顶点的初始邻接集合，返回建立的边数
    ///
    /// 指向已注册顶点（含自身）的邻接项保留并补上反向邻接，其余丢弃，
    /// 保证注册后邻接关系仍然对称。
    fn link_initial_adjacency(&mut self, vertex: NodeId) -> usize {
        let initial = std::mem::take(&mut self.arena[vertex.index()].adjacent);
        let (kept, dropped): (IndexSet<NodeId>, IndexSet<NodeId>) = initial
            .into_iter()
            .partition(|neighbor| self.contains_vertex(*neighbor));

        for &neighbor in &kept {
            if neighbor != vertex {
                self.arena[neighbor.index()].adjacent.insert(vertex);
            }
        }
        if !dropped.is_empty() {
            debug!(vertex = %vertex, dropped = dropped.len(), "丢弃指向未注册顶点的邻接项");
        }

        let linked = kept.len();
        self.arena[vertex.index()].adjacent = kept;
        linked
    }

    /// 按顺序注册多个顶点，返回新注册的数量
    ///
    /// 重复项被跳过；遇到未知节点时立即返回错误，之前的注册保留。
    pub fn add_vertices<I>(&mut self, vertices: I) -> Result<usize>
    where
        I: IntoIterator<Item = NodeId>,
    {
        let mut added = 0;
        for vertex in vertices {
            if self.add_vertex(vertex)? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// 移除顶点，同时删除所有与之相连的边
    ///
    /// 返回 `Ok(false)` 表示该节点本来就不是顶点。
    pub fn remove_vertex(&mut self, vertex: NodeId) -> Result<bool> {
        self.check_known(vertex)?;
        if !self.nodes.shift_remove(&vertex) {
            return Ok(false);
        }

        let neighbors = std::mem::take(&mut self.arena[vertex.index()].adjacent);
        let mut removed_edges = 0;
        for neighbor in neighbors {
            if neighbor == vertex {
                removed_edges += 1;
                continue;
            }
            if let Some(node) = self.arena.get_mut(neighbor.index()) {
                if node.adjacent.shift_remove(&vertex) {
                    removed_edges += 1;
                }
            }
        }

        if let Some(metrics) = self.metrics_handle() {
            metrics.record_vertex_removed();
            metrics.record_edges_removed(removed_edges);
        }
        debug!(vertex = %vertex, removed_edges, "移除顶点");
        Ok(true)
    }

    pub fn contains_vertex(&self, vertex: NodeId) -> bool {
        self.nodes.contains(&vertex)
    }

    /// 已注册顶点，按注册顺序
    pub fn vertices(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    pub fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ==================== 边操作 ====================

    /// 在两个顶点之间加边
    ///
    /// 边已存在时返回 `Ok(false)`。自环只占一个邻接项。
    pub fn add_edge(&mut self, v1: NodeId, v2: NodeId) -> Result<bool> {
        if !self.check_vertices("add_edge", &[v1, v2])? {
            return Ok(false);
        }

        let added = self.arena[v1.index()].adjacent.insert(v2);
        self.arena[v2.index()].adjacent.insert(v1);

        if added {
            if let Some(metrics) = self.metrics_handle() {
                metrics.record_edge_added();
            }
            debug!(v1 = %v1, v2 = %v2, "添加边");
        }
        Ok(added)
    }

    /// 删除两个顶点之间的边
    ///
    /// 边不存在时返回 `Ok(false)`。其余邻居保持原有顺序。
    pub fn remove_edge(&mut self, v1: NodeId, v2: NodeId) -> Result<bool> {
        if !self.check_vertices("remove_edge", &[v1, v2])? {
            return Ok(false);
        }

        let removed = self.arena[v1.index()].adjacent.shift_remove(&v2);
        self.arena[v2.index()].adjacent.shift_remove(&v1);

        if removed {
            if let Some(metrics) = self.metrics_handle() {
                metrics.record_edges_removed(1);
            }
            debug!(v1 = %v1, v2 = %v2, "删除边");
        }
        Ok(removed)
    }

    /// 两个已注册顶点之间是否有边
    pub fn has_edge(&self, v1: NodeId, v2: NodeId) -> bool {
        self.contains_vertex(v1)
            && self.contains_vertex(v2)
            && self
                .node(v1)
                .map(|node| node.is_adjacent(v2))
                .unwrap_or(false)
    }

    /// 边数量（自环计一条）
    pub fn edge_count(&self) -> usize {
        let mut loops = 0;
        let mut ends = 0;
        for vertex in self.vertices() {
            for neighbor in self.neighbors(vertex).into_iter().flatten() {
                if neighbor == vertex {
                    loops += 1;
                } else {
                    ends += 1;
                }
            }
        }
        loops + ends / 2
    }

    // ==================== 邻居查询 ====================

    /// 顶点的已注册邻居，按加边顺序；未注册顶点返回 `None`
    pub fn neighbors(&self, vertex: NodeId) -> Option<impl DoubleEndedIterator<Item = NodeId> + '_> {
        if !self.contains_vertex(vertex) {
            return None;
        }
        let node = self.node(vertex)?;
        Some(
            node.adjacent
                .iter()
                .copied()
                .filter(move |neighbor| self.contains_vertex(*neighbor)),
        )
    }

    /// 顶点的度
    pub fn degree(&self, vertex: NodeId) -> Option<usize> {
        self.neighbors(vertex).map(Iterator::count)
    }

    // ==================== 遍历 ====================

    /// 深度优先遍历，返回先序访问的节点值
    pub fn depth_first_search(&self, start: NodeId) -> Result<Vec<&T>> {
        Traversal::new(self).depth_first_values(start)
    }

    /// 广度优先遍历，返回按层访问的节点值
    pub fn breadth_first_search(&self, start: NodeId) -> Result<Vec<&T>> {
        Traversal::new(self).breadth_first_values(start)
    }

    /// 深度优先遍历，返回节点 ID
    pub fn depth_first_ids(&self, start: NodeId) -> Result<Vec<NodeId>> {
        Traversal::new(self).depth_first(start)
    }

    /// 广度优先遍历，返回节点 ID
    pub fn breadth_first_ids(&self, start: NodeId) -> Result<Vec<NodeId>> {
        Traversal::new(self).breadth_first(start)
    }

    /// 从起点可达的所有顶点（含起点）
    pub fn reachable(&self, start: NodeId) -> Result<HashSet<NodeId>> {
        Traversal::new(self).reachable(start)
    }

    // ==================== 校验 ====================

    fn check_known(&self, id: NodeId) -> Result<()> {
        if id.graph() == self.id && id.index() < self.arena.len() {
            Ok(())
        } else {
            Err(Error::UnknownNode(id))
        }
    }

    /// 校验操作涉及的节点均已注册
    ///
    /// 全部注册返回 `Ok(true)`；有未注册顶点时按 `MissingVertexPolicy`
    /// 返回错误或 `Ok(false)`。未知节点总是错误。
    pub(crate) fn check_vertices(&self, op: &'static str, ids: &[NodeId]) -> Result<bool> {
        for &id in ids {
            self.check_known(id)?;
        }

        let Some(&missing) = ids.iter().find(|id| !self.contains_vertex(**id)) else {
            return Ok(true);
        };

        if let Some(metrics) = self.metrics_handle() {
            metrics.record_rejected();
        }
        match self.config.missing_vertex {
            MissingVertexPolicy::Error => Err(Error::VertexNotFound(missing)),
            MissingVertexPolicy::Ignore => {
                warn!(op, vertex = %missing, "顶点未注册，忽略操作");
                Ok(false)
            }
        }
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}
