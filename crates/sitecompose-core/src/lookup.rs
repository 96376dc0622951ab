//! ビルダーが参照する外部コラボレータ
//!
//! イメージバージョン、TLSポリシー、ボリュームのマウント解決、
//! カーネルパラメータをトレイトとして切り出しています。
//! それぞれにデフォルト実装を用意しています。
//! 実装は `Send + Sync` であること。

use crate::error::{ComposeError, Result};
use crate::model::{MountEntry, Platform, VolumeSpec};
use std::collections::BTreeMap;
use tracing::debug;

/// 暗黙のデフォルトとして扱われる TLS ポリシー
pub const DEFAULT_TLS_POLICY: &str = "Mozilla-Modern";

/// Linux で設定するローカルポート範囲
pub const LOCAL_PORT_RANGE_SYSCTL: &str = "net.ipv4.ip_local_port_range=1025 65535";

/// イメージ名から現在のタグを引く
pub trait ImageVersions: Send + Sync {
    fn image_tag(&self, image: &str) -> Result<String>;
}

/// 現在のTLSポリシーを返す
pub trait TlsPolicyResolver: Send + Sync {
    fn current_tls_policy(&self) -> Result<String>;
}

/// 論理ボリューム定義をマウント定義に変換
pub trait VolumeResolver: Send + Sync {
    fn resolve_volume_mounts(&self, volumes: &[VolumeSpec]) -> Result<Vec<MountEntry>>;
}

/// サービスに設定する sysctl パラメータを返す
pub trait SysctlProvider: Send + Sync {
    fn sysctl_parameters(&self) -> Vec<String>;
}

/// イメージバージョン表
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageVersionTable {
    versions: BTreeMap<String, String>,
}

impl ImageVersionTable {
    pub fn new(versions: BTreeMap<String, String>) -> Self {
        Self { versions }
    }

    pub fn insert(&mut self, image: impl Into<String>, tag: impl Into<String>) {
        self.versions.insert(image.into(), tag.into());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ImageVersionTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            versions: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ImageVersions for ImageVersionTable {
    fn image_tag(&self, image: &str) -> Result<String> {
        self.versions
            .get(image)
            .cloned()
            .ok_or_else(|| ComposeError::ImageVersionNotFound(image.to_string()))
    }
}

/// 設定値をそのまま返す TLS ポリシー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticTlsPolicy(String);

impl StaticTlsPolicy {
    pub fn new(policy: impl Into<String>) -> Self {
        Self(policy.into())
    }
}

impl Default for StaticTlsPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_TLS_POLICY)
    }
}

impl TlsPolicyResolver for StaticTlsPolicy {
    fn current_tls_policy(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// プラットフォームに応じてマウント元を切り替えるリゾルバ
///
/// - `skip_volume` の定義は常に除外
/// - Darwin では `skip_darwin`、それ以外では `skip_linux` の定義を除外
/// - Darwin ではホストパス（未指定なら名前）、それ以外では名前付きボリュームをマウント
#[derive(Debug, Clone, Copy)]
pub struct MountingVolumeResolver {
    platform: Platform,
}

impl MountingVolumeResolver {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }
}

impl VolumeResolver for MountingVolumeResolver {
    fn resolve_volume_mounts(&self, volumes: &[VolumeSpec]) -> Result<Vec<MountEntry>> {
        let darwin = self.platform.is_darwin();

        let mounts: Vec<MountEntry> = volumes
            .iter()
            .filter(|v| !v.skip_volume)
            .filter(|v| if darwin { !v.skip_darwin } else { !v.skip_linux })
            .map(|v| {
                let name = match (&v.host_path, darwin) {
                    (Some(host), true) => host.clone(),
                    _ => v.name.clone(),
                };
                MountEntry {
                    name,
                    path_to: v.path_to.clone(),
                }
            })
            .collect();

        debug!(
            requested = volumes.len(),
            resolved = mounts.len(),
            "Resolved volume mounts"
        );

        Ok(mounts)
    }
}

/// プラットフォーム別の sysctl パラメータ
///
/// Darwin のコンテナランタイムは sysctl を受け付けないため何も返しません。
#[derive(Debug, Clone, Copy)]
pub struct PlatformSysctls {
    platform: Platform,
}

impl PlatformSysctls {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }
}

impl SysctlProvider for PlatformSysctls {
    fn sysctl_parameters(&self) -> Vec<String> {
        if self.platform.is_darwin() {
            Vec::new()
        } else {
            vec![LOCAL_PORT_RANGE_SYSCTL.to_string()]
        }
    }
}
