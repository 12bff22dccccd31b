//! 配置模块
//!
//! 支持从 JSON 文件加载后端地址、超时和日志配置

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// 股票列表接口的固定路径
pub const STOCKS_PATH: &str = "/api/stocks/";

/// 后端接口配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// 后端地址（协议 + 主机 + 端口）
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// 请求超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// 连接超时时间（秒）
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// 日志级别: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// 后端接口配置
    #[serde(default)]
    pub api: ApiConfig,
    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

// 默认值函数
fn default_base_url() -> String { "http://127.0.0.1:8000".to_string() }
fn default_timeout() -> u64 { 30 }
fn default_connect_timeout() -> u64 { 10 }
fn default_log_level() -> String { "info".to_string() }

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// 配置的来源，日志系统初始化之后再输出
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    /// 从文件加载
    File(PathBuf),
    /// 默认配置；附带加载失败而被跳过的文件
    Defaults { skipped: Vec<(PathBuf, String)> },
}

impl AppConfig {
    /// 默认查找的配置文件
    pub const SEARCH_PATHS: [&'static str; 2] = ["config.json", "config/config.json"];

    /// 从 JSON 文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("无法读取配置文件 {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("配置文件 {} 格式错误", path.display()))?;
        Ok(config)
    }

    /// 加载配置
    ///
    /// 指定了路径时必须加载成功；否则依次尝试默认路径，全部失败则使用默认值
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<(Self, ConfigSource)> {
        if let Some(path) = explicit {
            let config = Self::from_file(path)?;
            return Ok((config, ConfigSource::File(path.to_path_buf())));
        }
        Ok(Self::search(Self::SEARCH_PATHS.into_iter().map(PathBuf::from)))
    }

    fn search(paths: impl IntoIterator<Item = PathBuf>) -> (Self, ConfigSource) {
        let mut skipped = Vec::new();
        for path in paths {
            if !path.exists() {
                continue;
            }
            match Self::from_file(&path) {
                Ok(config) => return (config, ConfigSource::File(path)),
                Err(e) => skipped.push((path, format!("{e:#}"))),
            }
        }
        (Self::default(), ConfigSource::Defaults { skipped })
    }

    /// 股票列表接口的完整地址
    pub fn stocks_url(&self) -> anyhow::Result<Url> {
        let base = Url::parse(&self.api.base_url)
            .with_context(|| format!("后端地址无效: {}", self.api.base_url))?;
        Ok(base.join(STOCKS_PATH)?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.api.connect_timeout_secs)
    }
}
