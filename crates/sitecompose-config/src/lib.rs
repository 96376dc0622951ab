pub mod error;

pub use error::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 設定ファイルパスを直接指定する環境変数
pub const CONFIG_PATH_ENV: &str = "SITECOMPOSE_CONFIG_PATH";

/// 暗黙のデフォルト TLS ポリシー
pub const DEFAULT_SSL_POLICY: &str = "Mozilla-Modern";

/// sitecompose の設定
///
/// YAML 形式：
/// ```yaml
/// ssl_policy: Mozilla-Intermediate
/// image_versions:
///   easyengine/nginx: v4.1.0
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteComposeConfig {
    #[serde(default = "default_ssl_policy")]
    pub ssl_policy: String,
    /// イメージ名 → タグ
    #[serde(default)]
    pub image_versions: BTreeMap<String, String>,
}

fn default_ssl_policy() -> String {
    DEFAULT_SSL_POLICY.to_string()
}

impl Default for SiteComposeConfig {
    fn default() -> Self {
        Self {
            ssl_policy: default_ssl_policy(),
            image_versions: BTreeMap::new(),
        }
    }
}

impl SiteComposeConfig {
    /// 指定されたファイルから読み込む
    #[tracing::instrument]
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        info!(
            config_file = %path.display(),
            image_count = config.image_versions.len(),
            "Loaded configuration"
        );

        Ok(config)
    }

    /// 設定ファイルを探して読み込む
    ///
    /// 設定ファイルが見つからない場合はデフォルト設定を返します。
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Ok(path) => Self::load_from_path(&path),
            Err(ConfigError::ConfigFileNotFound) => {
                debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }
}

/// sitecompose の設定ディレクトリを取得
pub fn get_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or(ConfigError::ConfigDirNotFound)?
        .join("sitecompose");

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)?;
    }

    Ok(config_dir)
}

/// 設定ファイルを探す
///
/// 以下の優先順位で設定ファイルを検索:
/// 1. 環境変数 SITECOMPOSE_CONFIG_PATH (直接パス指定)
/// 2. カレントディレクトリ: sitecompose.local.yml, .sitecompose.local.yml, sitecompose.yml, .sitecompose.yml
/// 3. ~/.config/sitecompose/config.yml (グローバル設定)
pub fn find_config_file() -> Result<PathBuf> {
    // 1. 環境変数で直接指定
    if let Ok(config_path) = std::env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(config_path);
        if path.exists() {
            return Ok(path);
        }
    }

    let current_dir = std::env::current_dir()?;
    let candidates = [
        "sitecompose.local.yml",
        ".sitecompose.local.yml",
        "sitecompose.yml",
        ".sitecompose.yml",
    ];

    // 2. カレントディレクトリで検索
    for filename in &candidates {
        let path = current_dir.join(filename);
        if path.exists() {
            return Ok(path);
        }
    }

    // 3. グローバル設定ファイル
    if let Some(config_dir) = dirs::config_dir() {
        let global_config = config_dir.join("sitecompose").join("config.yml");
        if global_config.exists() {
            return Ok(global_config);
        }
    }

    Err(ConfigError::ConfigFileNotFound)
}
