//! 图操作指标
//!
//! 每个图实例维护一组原子计数器，遍历只持有 `&Graph` 也能计数

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// 图操作计数器
#[derive(Debug, Default)]
pub struct GraphMetrics {
    /// 变更统计
    mutation_stats: MutationStats,
    /// 遍历统计
    traversal_stats: TraversalStats,
    /// 因顶点未注册而被拒绝或忽略的操作数
    rejected_ops: AtomicU64,
}

/// 变更统计
#[derive(Debug, Default)]
struct MutationStats {
    vertices_added: AtomicU64,
    vertices_removed: AtomicU64,
    edges_added: AtomicU64,
    edges_removed: AtomicU64,
}

/// 遍历统计
#[derive(Debug, Default)]
struct TraversalStats {
    dfs_runs: AtomicU64,
    bfs_runs: AtomicU64,
    /// 所有遍历访问过的顶点总数
    vertices_visited: AtomicU64,
}

/// 可导出的指标快照
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub vertices_added: u64,
    pub vertices_removed: u64,
    pub edges_added: u64,
    pub edges_removed: u64,

    pub dfs_runs: u64,
    pub bfs_runs: u64,
    pub vertices_visited: u64,

    pub rejected_ops: u64,
}

impl MetricsSnapshot {
    /// 遍历总次数
    pub fn traversals(&self) -> u64 {
        self.dfs_runs + self.bfs_runs
    }
}

/// 遍历类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalKind {
    DepthFirst,
    BreadthFirst,
}

impl GraphMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_vertex_added(&self) {
        self.mutation_stats.vertices_added.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_vertex_removed(&self) {
        self.mutation_stats.vertices_removed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_edge_added(&self) {
        self.mutation_stats.edges_added.fetch_add(1, Ordering::Relaxed);
    }

    /// 记录一次注册时补齐的多条边
    pub fn record_edges_added(&self, count: usize) {
        self.mutation_stats
            .edges_added
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    /// 记录删除的边（级联删除顶点时可能一次删除多条）
    pub fn record_edges_removed(&self, count: usize) {
        self.mutation_stats
            .edges_removed
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    /// 记录一次遍历及其访问的顶点数
    pub fn record_traversal(&self, kind: TraversalKind, visited: usize) {
        let runs = match kind {
            TraversalKind::DepthFirst => &self.traversal_stats.dfs_runs,
            TraversalKind::BreadthFirst => &self.traversal_stats.bfs_runs,
        };
        runs.fetch_add(1, Ordering::Relaxed);
        self.traversal_stats
            .vertices_visited
            .fetch_add(visited as u64, Ordering::Relaxed);
    }

    pub fn record_rejected(&self) {
        self.rejected_ops.fetch_add(1, Ordering::Relaxed);
    }

    /// 获取指标快照
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            vertices_added: self.mutation_stats.vertices_added.load(Ordering::Relaxed),
            vertices_removed: self.mutation_stats.vertices_removed.load(Ordering::Relaxed),
            edges_added: self.mutation_stats.edges_added.load(Ordering::Relaxed),
            edges_removed: self.mutation_stats.edges_removed.load(Ordering::Relaxed),
            dfs_runs: self.traversal_stats.dfs_runs.load(Ordering::Relaxed),
            bfs_runs: self.traversal_stats.bfs_runs.load(Ordering::Relaxed),
            vertices_visited: self.traversal_stats.vertices_visited.load(Ordering::Relaxed),
            rejected_ops: self.rejected_ops.load(Ordering::Relaxed),
        }
    }

    /// 重置所有指标
    pub fn reset(&self) {
        self.mutation_stats.vertices_added.store(0, Ordering::Relaxed);
        self.mutation_stats.vertices_removed.store(0, Ordering::Relaxed);
        self.mutation_stats.edges_added.store(0, Ordering::Relaxed);
        self.mutation_stats.edges_removed.store(0, Ordering::Relaxed);

        self.traversal_stats.dfs_runs.store(0, Ordering::Relaxed);
        self.traversal_stats.bfs_runs.store(0, Ordering::Relaxed);
        self.traversal_stats.vertices_visited.store(0, Ordering::Relaxed);

        self.rejected_ops.store(0, Ordering::Relaxed);
    }
}
