//! 错误类型定义

use crate::graph::NodeId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// 顶点未注册到图中（边操作或遍历起点）
    #[error("顶点不存在: {0}")]
    VertexNotFound(NodeId),

    /// 节点 ID 不是由当前图分配的
    #[error("未知节点: {0}")]
    UnknownNode(NodeId),
}

impl Error {
    /// 出错的节点 ID
    pub fn node_id(&self) -> NodeId {
        match self {
            Error::VertexNotFound(id) | Error::UnknownNode(id) => *id,
        }
    }
}
