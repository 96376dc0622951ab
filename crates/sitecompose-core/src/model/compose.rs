//! docker-compose ドキュメント定義

use super::service::ServiceDefinition;
use serde::{Deserialize, Serialize};

/// テンプレートに渡す中間表現
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposeDocument {
    pub services: Vec<ServiceDefinition>,
    pub network: NetworkBlock,
    /// Darwin では宣言しないため `None`
    #[serde(default)]
    pub external_volumes: Option<Vec<ExternalVolume>>,
}

/// サイトネットワークの定義
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkBlock {
    pub labels: Vec<String>,
    pub subnet_ip: String,
}

/// 外部ボリューム（`<prefix>_<volume>` として宣言される）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalVolume {
    pub prefix: String,
    pub volume: String,
}

impl ExternalVolume {
    pub fn new(prefix: impl Into<String>, volume: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            volume: volume.into(),
        }
    }

    /// コンテナランタイム上のボリューム名
    pub fn external_name(&self) -> String {
        format!("{}_{}", self.prefix, self.volume)
    }
}

impl ComposeDocument {
    /// サービス名で検索
    pub fn service(&self, name: &str) -> Option<&ServiceDefinition> {
        self.services.iter().find(|s| s.service_name == name)
    }
}
