//! 実行プラットフォーム

use serde::{Deserialize, Serialize};

/// コンテナランタイムが動作するプラットフォーム
///
/// Darwin では名前付き外部ボリュームを宣言せず、
/// ホストパスを直接マウントします。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Linux,
    Darwin,
}

impl Platform {
    /// ビルド対象OSから判定
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::Darwin
        } else {
            Self::Linux
        }
    }

    pub fn is_darwin(&self) -> bool {
        matches!(self, Self::Darwin)
    }

    /// 文字列からパース
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "linux" => Some(Self::Linux),
            "darwin" | "macos" => Some(Self::Darwin),
            _ => None,
        }
    }
}
