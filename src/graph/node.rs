//! 节点定义
//!
//! 节点持有一个值和邻接集合。邻接关系用 `NodeId` 表示，节点本身存放在图的 arena 中

use indexmap::IndexSet;
use std::fmt;

/// 节点 ID
///
/// 由所属图的编号和 arena 下标组成，只能由图分配。
/// 节点身份只由 ID 决定，值相同的两个节点仍是不同的节点。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId {
    /// 分配该 ID 的图
    graph: u64,
    /// arena 下标
    index: usize,
}

impl NodeId {
    pub(crate) fn new(graph: u64, index: usize) -> Self {
        Self { graph, index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn graph(&self) -> u64 {
        self.graph
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// 节点
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    /// 节点值（图不解释其内容）
    value: T,
    /// 相邻节点，按插入顺序迭代
    pub(crate) adjacent: IndexSet<NodeId>,
}

impl<T> Node<T> {
    /// 创建没有邻居的节点
    pub fn new(value: T) -> Self {
        Self {
            value,
            adjacent: IndexSet::new(),
        }
    }

    /// 创建带初始邻接集合的节点
    ///
    /// 构造时不做校验。注册为顶点时，指向已注册顶点的邻接项会补上反向邻接，其余邻接项被丢弃。
    pub fn with_adjacent<I>(value: T, adjacent: I) -> Self
    where
        I: IntoIterator<Item = NodeId>,
    {
        Self {
            value,
            adjacent: adjacent.into_iter().collect(),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// 邻接集合
    pub fn adjacent(&self) -> &IndexSet<NodeId> {
        &self.adjacent
    }

    pub fn is_adjacent(&self, other: NodeId) -> bool {
        self.adjacent.contains(&other)
    }

    pub fn degree(&self) -> usize {
        self.adjacent.len()
    }
}
