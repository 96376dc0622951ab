//! サービス定義

use super::volume::MountEntry;
use serde::{Deserialize, Serialize};

/// docker-compose.yml の1サービス分の定義
///
/// 各リストは構築された順序のまま展開されます。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDefinition {
    pub service_name: String,
    pub image: String,
    pub restart: RestartPolicy,
    /// `KEY=value` 形式の環境変数
    pub environment: Vec<String>,
    pub volumes: Vec<MountEntry>,
    pub labels: Vec<String>,
    /// `key=value` 形式のカーネルパラメータ
    pub sysctls: Vec<String>,
    pub networks: Vec<String>,
}

/// 再起動ポリシー
///
/// サイトのコンテナは常に再起動させる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RestartPolicy {
    Always,
}
