//! フィーチャーフラグ

use serde::{Deserialize, Serialize};

/// docker-compose.yml 生成を制御するフラグ
///
/// YAML 形式：
/// ```yaml
/// alias_domains: "a.com,b.com"
/// nohttps: false
/// site_prefix: example
/// subnet_ip: 10.0.0.0/24
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    /// カンマ区切りのエイリアスドメイン
    #[serde(default)]
    pub alias_domains: Option<String>,
    #[serde(default)]
    pub nohttps: Option<bool>,
    /// 外部ボリューム名のプレフィックス
    #[serde(default)]
    pub site_prefix: String,
    #[serde(default)]
    pub subnet_ip: String,
}

impl FeatureFlags {
    /// 空でないエイリアスドメインを取得
    pub fn alias_domains(&self) -> Option<&str> {
        self.alias_domains.as_deref().filter(|d| !d.is_empty())
    }

    pub fn is_nohttps(&self) -> bool {
        self.nohttps.unwrap_or(false)
    }
}
