//! ボリューム定義

use serde::{Deserialize, Serialize};

/// 論理ボリューム定義
///
/// ビルダーは中身を解釈せず、そのまま `VolumeResolver` に渡します。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeSpec {
    /// 名前付きボリューム名（Linux でのマウント元）
    pub name: String,
    /// コンテナ内のマウント先
    pub path_to: String,
    /// ホスト側のパス（Darwin でのマウント元）
    #[serde(default)]
    pub host_path: Option<String>,
    #[serde(default)]
    pub skip_darwin: bool,
    #[serde(default)]
    pub skip_linux: bool,
    #[serde(default)]
    pub skip_volume: bool,
}

impl VolumeSpec {
    pub fn new(name: impl Into<String>, path_to: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path_to: path_to.into(),
            ..Default::default()
        }
    }

    pub fn with_host_path(mut self, host_path: impl Into<String>) -> Self {
        self.host_path = Some(host_path.into());
        self
    }

    /// `name:path_to[:host_path]` 形式をパース
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.splitn(3, ':');
        let name = parts.next().filter(|p| !p.is_empty())?;
        let path_to = parts.next().filter(|p| !p.is_empty())?;
        let spec = Self::new(name, path_to);

        match parts.next() {
            Some(host) if !host.is_empty() => Some(spec.with_host_path(host)),
            Some(_) => None,
            None => Some(spec),
        }
    }
}

/// サービスに渡すマウント定義
///
/// `"name:path_to"` として展開されます。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountEntry {
    pub name: String,
    pub path_to: String,
}
