mod settings;

use std::path::Path;
use std::sync::Arc;

use coffer_api::server::{AppState, start_server};
use coffer_api::token::TokenService;
use coffer_core::account::port::AccountStore;
use coffer_core::config::StoreBackend;
use coffer_store::account::SqliteAccountStore;
use coffer_store::memory::MemoryAccountStore;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// # Summary
/// 应用启动入口，纯粹的 DI 容器。
/// 负责加载配置、实例化存储与 Token 服务并注入 API 层。
///
/// # Logic
/// 1. 初始化全局日志。
/// 2. 加载并校验配置。
/// 3. 按配置选择存储实现。
/// 4. 构造 Token 服务 (注入签名密钥)。
/// 5. 启动 HTTP 服务，直到收到退出信号。
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 初始化日志
    let (writer, _guard) = tracing_appender::non_blocking(std::io::stdout());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .init();
    info!("Coffer starting...");

    // 2. 加载配置
    let config_file = std::env::var("COFFER_CONFIG")
        .unwrap_or_else(|_| settings::DEFAULT_CONFIG_FILE.to_string());
    let config = settings::load_config(&config_file)?;
    config.validate()?;

    // 3. 实例化存储层
    let account_store: Arc<dyn AccountStore> = match config.database.backend {
        StoreBackend::Sqlite => {
            info!("Using SQLite account store in {}", config.database.data_dir);
            Arc::new(SqliteAccountStore::new(Path::new(&config.database.data_dir)).await?)
        }
        StoreBackend::Memory => {
            warn!("Using in-memory account store, data will not survive a restart");
            Arc::new(MemoryAccountStore::new())
        }
    };

    // 4. Token 服务
    let token_service = Arc::new(TokenService::new(&config.auth.secret));
    if config.auth.enforce_ownership {
        info!("Per-account ownership checks enabled");
    }

    // 5. 启动 API 服务
    let bind_addr = config.bind_addr();
    let state = AppState {
        account_store,
        token_service,
        app_config: Arc::new(config),
    };
    start_server(state, &bind_addr).await?;

    info!("Shutdown complete. Exiting...");
    Ok(())
}
