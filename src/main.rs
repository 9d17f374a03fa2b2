//! Family API - 家庭成员 CRUD 服务
//!
//! 启动顺序: 配置 -> 日志 -> MemberStore -> AppState -> HTTP Server

use family_api::config::{load_config, print_config, LogConfig};
use family_api::infrastructure::http::{AppState, HttpServer, ServerConfig};
use family_api::infrastructure::memory::InMemoryMemberStore;

fn init_logging(log: &LogConfig) {
    let log_filter = format!("{},family_api={},tower_http=debug", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_logging(&config.log);

    tracing::info!("Family API - 家庭成员 CRUD 服务");
    print_config(&config);

    // 每次启动都从配置重新初始化 MemberStore
    let member_store = InMemoryMemberStore::with_members(
        config.family.last_name.clone(),
        config.family.members.clone(),
    )?
    .arc();

    tracing::info!(
        family = %config.family.last_name,
        members = config.family.members.len(),
        "Member store initialized"
    );

    let state = AppState::new(member_store, config.api.empty_list_is_error);
    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_max_body_bytes(config.api.max_body_bytes);
    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
