//! 图配置
//!
//! 控制对未注册顶点的处理方式以及是否记录操作指标

use serde::{Deserialize, Serialize};

/// 引用未注册顶点时的处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingVertexPolicy {
    /// 返回 `Error::VertexNotFound`
    #[default]
    Error,
    /// 静默忽略：边操作返回 `Ok(false)`，遍历返回空序列，并输出 warn 日志
    Ignore,
}

/// 图配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// 未注册顶点的处理策略
    pub missing_vertex: MissingVertexPolicy,
    /// 是否记录操作指标
    pub record_metrics: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            missing_vertex: MissingVertexPolicy::Error,
            record_metrics: true,
        }
    }
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 宽松模式：忽略对未注册顶点的引用
    pub fn lenient() -> Self {
        Self::default().with_missing_vertex(MissingVertexPolicy::Ignore)
    }

    pub fn with_missing_vertex(mut self, policy: MissingVertexPolicy) -> Self {
        self.missing_vertex = policy;
        self
    }

    pub fn with_metrics(mut self, enabled: bool) -> Self {
        self.record_metrics = enabled;
        self
    }
}
