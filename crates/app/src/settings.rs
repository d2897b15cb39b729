use coffer_core::config::AppConfig;
use config::{Config, ConfigError, Environment, File};

/// 未设置 `COFFER_CONFIG` 时读取的配置文件 (可省略扩展名)
pub const DEFAULT_CONFIG_FILE: &str = "coffer";

/// # Summary
/// 按优先级加载配置：内置默认值 < 配置文件 < 环境变量。
///
/// # Logic
/// 1. 读取 `file` 指向的配置文件，不存在时忽略。
/// 2. 叠加 `COFFER__SECTION__KEY` 形式的环境变量，如 `COFFER__AUTH__SECRET`。
/// 3. 反序列化为 `AppConfig`，缺省字段取默认值。
///
/// # Arguments
/// * `file` - 配置文件路径。
///
/// # Returns
/// 合并后的配置，尚未经过 `AppConfig::validate`。
pub fn load_config(file: &str) -> Result<AppConfig, ConfigError> {
    Config::builder()
        .add_source(File::with_name(file).required(false))
        .add_source(Environment::with_prefix("COFFER").separator("__"))
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use coffer_core::config::StoreBackend;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent");
        let config = load_config(path.to_str().unwrap()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.backend, StoreBackend::Sqlite);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coffer.toml");
        std::fs::write(
            &path,
            r#"
            [server]
            port = 9090

            [database]
            backend = "memory"

            [auth]
            secret = "from-file"
            enforce_ownership = true
            "#,
        )
        .unwrap();

        let config = load_config(path.to_str().unwrap()).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.database.backend, StoreBackend::Memory);
        assert_eq!(config.database.data_dir, "data");
        assert_eq!(config.auth.secret, "from-file");
        assert!(config.auth.enforce_ownership);
        assert!(config.validate().is_ok());
    }
}
