//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量（含 `PORT`）
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "FAMILY";

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `FAMILY_`，层级分隔符 `__`），以及裸 `PORT`
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `FAMILY_SERVER__HOST=127.0.0.1`
/// - `FAMILY_SERVER__PORT=8080`
/// - `FAMILY_FAMILY__LAST_NAME=Simpson`
/// - `FAMILY_API__EMPTY_LIST_IS_ERROR=true`
/// - `PORT=8080`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("family.last_name", "Jackson")?
        .set_default("api.empty_list_is_error", false)?
        .set_default("api.max_body_bytes", 64 * 1024)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: FAMILY_SERVER__PORT=8080
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 裸 PORT 覆盖一切，便于托管平台注入端口
    builder = builder.set_override_option("server.port", std::env::var("PORT").ok())?;

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.family.last_name.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Family last name cannot be empty".to_string(),
        ));
    }

    if config.api.max_body_bytes == 0 {
        return Err(ConfigError::ValidationError(
            "Max body size cannot be 0".to_string(),
        ));
    }

    if let Some(index) = config
        .family
        .members
        .iter()
        .position(|m| m.first_name.trim().is_empty())
    {
        return Err(ConfigError::ValidationError(format!(
            "Seed member #{} has an empty first name",
            index
        )));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Family: {}", config.family.last_name);
    tracing::info!("Seed Members: {}", config.family.members.len());
    tracing::info!("Empty List Is Error: {}", config.api.empty_list_is_error);
    tracing::info!("Max Body Bytes: {}", config.api.max_body_bytes);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::family::NewMember;
    use std::io::Write;
    use std::sync::{Mutex, MutexGuard};

    /// 读取环境变量的测试共用，避免并行测试互相覆盖
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_guard() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_last_name() {
        let mut config = AppConfig::default();
        config.family.last_name = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_body_limit() {
        let mut config = AppConfig::default();
        config.api.max_body_bytes = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_unnamed_seed_member() {
        let mut config = AppConfig::default();
        config.family.members.push(NewMember::new("", 3, vec![]));
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_load_from_file_with_seed_members() {
        let _guard = env_guard();
        let file = write_config(
            r#"
[server]
host = "127.0.0.1"

[family]
last_name = "Simpson"

[[family.members]]
first_name = "Homer"
age = 42
lucky_numbers = [4, 8, 15]

[[family.members]]
first_name = "Marge"
age = 40
lucky_numbers = [7]

[api]
empty_list_is_error = true
"#,
        );

        let config = load_config_from_path(Some(file.path())).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.family.last_name, "Simpson");
        assert_eq!(config.family.members.len(), 2);
        assert_eq!(config.family.members[0].first_name, "Homer");
        assert_eq!(config.family.members[0].lucky_numbers, vec![4, 8, 15]);
        assert!(config.api.empty_list_is_error);
    }

    #[test]
    fn test_seed_member_without_lucky_numbers_is_error() {
        let _guard = env_guard();
        let file = write_config(
            r#"
[[family.members]]
first_name = "Homer"
age = 42
"#,
        );

        let result = load_config_from_path(Some(file.path()));

        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_env_overrides_file() {
        let _guard = env_guard();
        let file = write_config(
            r#"
[server]
port = 4000

[family]
last_name = "Simpson"
"#,
        );

        std::env::set_var("PORT", "8081");
        std::env::set_var("FAMILY_SERVER__PORT", "9000");
        std::env::set_var("FAMILY_FAMILY__LAST_NAME", "Bouvier");
        std::env::set_var("FAMILY_API__EMPTY_LIST_IS_ERROR", "true");

        let result = load_config_from_path(Some(file.path()));

        std::env::remove_var("PORT");
        std::env::remove_var("FAMILY_SERVER__PORT");
        std::env::remove_var("FAMILY_FAMILY__LAST_NAME");
        std::env::remove_var("FAMILY_API__EMPTY_LIST_IS_ERROR");

        let config = result.unwrap();
        // 裸 PORT 优先于 FAMILY_SERVER__PORT 和配置文件
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.family.last_name, "Bouvier");
        assert!(config.api.empty_list_is_error);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let result = load_config_from_path(Some(Path::new("/nonexistent/family.toml")));
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
