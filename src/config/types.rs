//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

use crate::domain::family::NewMember;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 家庭（MemberStore 初始状态）配置
    #[serde(default)]
    pub family: FamilyConfig,

    /// API 行为配置
    #[serde(default)]
    pub api: ApiConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// 家庭配置
///
/// 每次进程启动时 MemberStore 都从这里重新初始化
#[derive(Debug, Clone, Deserialize)]
pub struct FamilyConfig {
    /// 家庭姓氏
    #[serde(default = "default_last_name")]
    pub last_name: String,

    /// 启动时按顺序添加的成员，id 从 1 开始分配
    #[serde(default)]
    pub members: Vec<NewMember>,
}

fn default_last_name() -> String {
    "Jackson".to_string()
}

impl Default for FamilyConfig {
    fn default() -> Self {
        Self {
            last_name: default_last_name(),
            members: Vec::new(),
        }
    }
}

/// API 行为配置
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// 成员列表为空时是否返回 400
    #[serde(default)]
    pub empty_list_is_error: bool,

    /// 请求体最大字节数
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_max_body_bytes() -> usize {
    64 * 1024
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            empty_list_is_error: false,
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
