//! 加载错误定义

use thiserror::Error;

/// 加载股票列表时可能出现的错误
///
/// 三种错误对用户的展示方式相同，只在日志中区分
#[derive(Debug, Error)]
pub enum LoadError {
    /// 网络层错误（连接失败、超时、读取响应体失败）
    #[error("{0}")]
    Network(#[from] reqwest::Error),
    /// 后端返回非 2xx 状态码
    #[error("Server {0}")]
    Server(u16),
    /// 响应体不是预期的股票列表
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

impl LoadError {
    /// 日志中使用的错误类别
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::Network(_) => "network",
            LoadError::Server(_) => "server",
            LoadError::Decode(_) => "decode",
        }
    }
}
