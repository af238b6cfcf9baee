//! 可达性遍历
//!
//! 深度优先与广度优先遍历，只读取图的当前快照，不修改任何邻接集合

use crate::error::Result;
use crate::graph::{Graph, NodeId};
use crate::metrics::TraversalKind;
use std::collections::{HashSet, VecDeque};
use tracing::trace;

/// 遍历器
pub struct Traversal<'a, T> {
    graph: &'a Graph<T>,
}

impl<'a, T> Traversal<'a, T> {
    /// 创建遍历器
    pub fn new(graph: &'a Graph<T>) -> Self {
        Self { graph }
    }

    /// 深度优先先序遍历
    ///
    /// 使用显式栈，邻居逆序入栈，访问顺序与递归写法一致。
    pub fn depth_first(&self, start: NodeId) -> Result<Vec<NodeId>> {
        if !self.graph.check_vertices("depth_first_search", &[start])? {
            return Ok(Vec::new());
        }

        let mut visited = HashSet::new();
        let mut order = Vec::new();
        let mut stack = vec![start];

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            order.push(current);

            let pending: Vec<NodeId> = self
                .neighbors(current)
                .filter(|neighbor| !visited.contains(neighbor))
                .collect();
            stack.extend(pending.into_iter().rev());
        }

        self.finish(TraversalKind::DepthFirst, start, &order);
        Ok(order)
    }

    /// 广度优先遍历（FIFO 队列，按层访问）
    pub fn breadth_first(&self, start: NodeId) -> Result<Vec<NodeId>> {
        if !self.graph.check_vertices("breadth_first_search", &[start])? {
            return Ok(Vec::new());
        }

        let order = self.level_order(start);
        self.finish(TraversalKind::BreadthFirst, start, &order);
        Ok(order)
    }

    /// 深度优先遍历，返回节点值
    pub fn depth_first_values(&self, start: NodeId) -> Result<Vec<&'a T>> {
        let order = self.depth_first(start)?;
        Ok(self.values(order))
    }

    /// 广度优先遍历，返回节点值
    pub fn breadth_first_values(&self, start: NodeId) -> Result<Vec<&'a T>> {
        let order = self.breadth_first(start)?;
        Ok(self.values(order))
    }

    /// 从起点可达的顶点集合（含起点）
    ///
    /// 不计入遍历指标。
    pub fn reachable(&self, start: NodeId) -> Result<HashSet<NodeId>> {
        if !self.graph.check_vertices("reachable", &[start])? {
            return Ok(HashSet::new());
        }
        Ok(self.level_order(start).into_iter().collect())
    }

    /// 两个顶点是否连通
    pub fn is_connected(&self, from: NodeId, to: NodeId) -> Result<bool> {
        if !self.graph.contains_vertex(to) {
            return Ok(false);
        }
        Ok(self.reachable(from)?.contains(&to))
    }

    fn level_order(&self, start: NodeId) -> Vec<NodeId> {
        let mut visited = HashSet::new();
        let mut order = Vec::new();
        let mut queue = VecDeque::new();

        visited.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            order.push(current);
            for neighbor in self.neighbors(current) {
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }
        order
    }

    fn neighbors(&self, vertex: NodeId) -> impl DoubleEndedIterator<Item = NodeId> + 'a {
        self.graph.neighbors(vertex).into_iter().flatten()
    }

    fn values(&self, order: Vec<NodeId>) -> Vec<&'a T> {
        order
            .into_iter()
            .filter_map(|id| self.graph.value(id))
            .collect()
    }

    fn finish(&self, kind: TraversalKind, start: NodeId, order: &[NodeId]) {
        if let Some(metrics) = self.graph.metrics_handle() {
            metrics.record_traversal(kind, order.len());
        }
        trace!(?kind, start = %start, visited = order.len(), "遍历完成");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GraphConfig;
    use crate::error::Error;

    /// A - B, A - C
    fn create_test_graph() -> (Graph<&'static str>, NodeId, NodeId, NodeId) {
        let mut graph = Graph::new();
        let a = graph.new_node("A");
        let b = graph.new_node("B");
        let c = graph.new_node("C");
        graph.add_vertex(a).unwrap();
        graph.add_vertex(b).unwrap();
        graph.add_vertex(c).unwrap();
        graph.add_edge(a, b).unwrap();
        graph.add_edge(a, c).unwrap();
        (graph, a, b, c)
    }

    #[test]
    fn test_depth_first() {
        let (graph, a, _, _) = create_test_graph();
        assert_eq!(graph.depth_first_search(a).unwrap(), vec![&"A", &"B", &"C"]);
    }

    #[test]
    fn test_breadth_first() {
        let (graph, a, b, _) = create_test_graph();
        assert_eq!(graph.breadth_first_search(a).unwrap(), vec![&"A", &"B", &"C"]);
        assert_eq!(graph.breadth_first_search(b).unwrap(), vec![&"B", &"A", &"C"]);
    }

    #[test]
    fn test_depth_first_matches_recursive_order() {
        // 1 - 2, 1 - 3, 2 - 4, 3 - 4, 4 - 5
        let mut graph = Graph::new();
        let ids: Vec<NodeId> = (1..=5).map(|v| graph.insert(v)).collect();
        for (x, y) in [(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)] {
            graph.add_edge(ids[x], ids[y]).unwrap();
        }

        // 递归写法：1 -> 2 -> 4 -> 3（4 的第二个邻居）-> 5
        assert_eq!(
            graph.depth_first_search(ids[0]).unwrap(),
            vec![&1, &2, &4, &3, &5]
        );
        assert_eq!(
            graph.breadth_first_search(ids[0]).unwrap(),
            vec![&1, &2, &3, &4, &5]
        );
    }

    #[test]
    fn test_cycle_terminates() {
        let mut graph = Graph::new();
        let a = graph.insert("A");
        let b = graph.insert("B");
        let c = graph.insert("C");
        graph.add_edge(a, b).unwrap();
        graph.add_edge(b, c).unwrap();
        graph.add_edge(c, a).unwrap();

        let dfs = graph.depth_first_search(a).unwrap();
        assert_eq!(dfs.len(), 3);
        assert_eq!(dfs, vec![&"A", &"B", &"C"]);

        let bfs = graph.breadth_first_search(a).unwrap();
        assert_eq!(bfs, vec![&"A", &"B", &"C"]);
    }

    #[test]
    fn test_unregistered_start() {
        let (mut graph, a, _, _) = create_test_graph();
        let stray = graph.new_node("Z");

        assert_eq!(
            graph.depth_first_search(stray),
            Err(Error::VertexNotFound(stray))
        );
        assert_eq!(
            graph.breadth_first_search(stray),
            Err(Error::VertexNotFound(stray))
        );

        let lenient = {
            let mut g = Graph::with_config(GraphConfig::lenient());
            let x = g.new_node("X");
            assert!(g.breadth_first_ids(x).unwrap().is_empty());
            g.metrics().rejected_ops
        };
        assert_eq!(lenient, 1);
        assert!(graph.contains_vertex(a));
    }

    #[test]
    fn test_disconnected_components() {
        let (mut graph, a, _, _) = create_test_graph();
        let d = graph.insert("D");
        let e = graph.insert("E");
        graph.add_edge(d, e).unwrap();

        let traversal = Traversal::new(&graph);
        assert_eq!(traversal.reachable(a).unwrap().len(), 3);
        assert_eq!(traversal.depth_first(d).unwrap(), vec![d, e]);
        assert!(!traversal.is_connected(a, e).unwrap());
        assert!(traversal.is_connected(e, d).unwrap());
    }

    #[test]
    fn test_skips_unregistered_adjacency() {
        let mut graph = Graph::new();
        let hidden = graph.new_node("H");
        let a = graph.insert_node(crate::graph::Node::with_adjacent("A", [hidden]));
        graph.add_vertex(a).unwrap();

        assert_eq!(graph.depth_first_search(a).unwrap(), vec![&"A"]);
        assert_eq!(graph.breadth_first_search(a).unwrap(), vec![&"A"]);
    }

    #[test]
    fn test_after_remove_vertex() {
        let (mut graph, a, b, c) = create_test_graph();
        graph.add_edge(b, c).unwrap();
        graph.remove_vertex(a).unwrap();

        assert_eq!(graph.depth_first_ids(b).unwrap(), vec![b, c]);
        assert_eq!(graph.breadth_first_ids(c).unwrap(), vec![c, b]);
    }

    #[test]
    fn test_traversal_metrics() {
        let (graph, a, _, _) = create_test_graph();
        graph.depth_first_ids(a).unwrap();
        graph.breadth_first_ids(a).unwrap();

        let snapshot = graph.metrics();
        assert_eq!(snapshot.dfs_runs, 1);
        assert_eq!(snapshot.bfs_runs, 1);
        assert_eq!(snapshot.vertices_visited, 6);
    }

    #[test]
    fn test_reachability_queries_not_counted() {
        let (graph, a, _, c) = create_test_graph();
        let traversal = Traversal::new(&graph);

        assert_eq!(traversal.reachable(a).unwrap().len(), 3);
        assert!(traversal.is_connected(c, a).unwrap());
        assert!(graph.reachable(c).unwrap().contains(&a));

        let snapshot = graph.metrics();
        assert_eq!(snapshot.traversals(), 0);
        assert_eq!(snapshot.vertices_visited, 0);
    }
}
