//! CLI 引数からビルダーへの入力を組み立てる

use anyhow::Context;
use clap::{Args, ValueEnum};
use sitecompose_config::SiteComposeConfig;
use sitecompose_core::{
    ComposeBuilder, FeatureFlags, ImageVersionTable, MountingVolumeResolver, Platform,
    PlatformSysctls, StaticTlsPolicy, VolumeSpec,
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// サイトごとの入力
#[derive(Args, Debug)]
pub struct SiteArgs {
    /// 外部ボリューム名のプレフィックス
    #[arg(long, default_value = "")]
    pub site_prefix: String,
    /// サイトネットワークのサブネット (例: 10.0.0.0/24)
    #[arg(long)]
    pub subnet_ip: String,
    /// カンマ区切りのエイリアスドメイン
    #[arg(long)]
    pub alias_domains: Option<String>,
    /// HTTPS を無効化
    #[arg(long)]
    pub nohttps: bool,
    /// マウントするボリューム (name:path_to[:host_path])
    #[arg(long = "volume", value_parser = parse_volume)]
    pub volumes: Vec<VolumeSpec>,
    /// ボリューム定義の YAML ファイル
    #[arg(long)]
    pub volumes_file: Option<PathBuf>,
    /// プラットフォーム（省略時は実行環境）
    #[arg(long, value_enum)]
    pub platform: Option<PlatformArg>,
    /// 設定ファイル（省略時は自動探索）
    #[arg(short, long, env = "SITECOMPOSE_CONFIG_PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PlatformArg {
    Linux,
    Darwin,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Linux => Platform::Linux,
            PlatformArg::Darwin => Platform::Darwin,
        }
    }
}

fn parse_volume(s: &str) -> Result<VolumeSpec, String> {
    VolumeSpec::parse(s).ok_or_else(|| format!("'{s}' は name:path_to[:host_path] 形式ではありません"))
}

/// 解決済みの入力
pub struct SiteInputs {
    pub flags: FeatureFlags,
    pub volumes: Vec<VolumeSpec>,
    pub platform: Platform,
    pub config: SiteComposeConfig,
}

impl SiteArgs {
    pub fn resolve(&self) -> anyhow::Result<SiteInputs> {
        let config = match &self.config {
            Some(path) => SiteComposeConfig::load_from_path(path)
                .with_context(|| format!("設定ファイルを読み込めません: {}", path.display()))?,
            None => SiteComposeConfig::load()?,
        };

        let mut volumes = match &self.volumes_file {
            Some(path) => load_volumes_file(path)?,
            None => Vec::new(),
        };
        volumes.extend(self.volumes.iter().cloned());

        let platform = self.platform.map(Platform::from).unwrap_or_else(Platform::current);
        debug!(?platform, volume_count = volumes.len(), "Resolved site inputs");

        Ok(SiteInputs {
            flags: FeatureFlags {
                alias_domains: self.alias_domains.clone(),
                nohttps: self.nohttps.then_some(true),
                site_prefix: self.site_prefix.clone(),
                subnet_ip: self.subnet_ip.clone(),
            },
            volumes,
            platform,
            config,
        })
    }
}

fn load_volumes_file(path: &Path) -> anyhow::Result<Vec<VolumeSpec>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("ボリューム定義を読み込めません: {}", path.display()))?;
    serde_yaml::from_str(&content)
        .with_context(|| format!("ボリューム定義のパースに失敗しました: {}", path.display()))
}

/// 設定から作るデフォルトのコラボレータ一式
pub struct Collaborators {
    images: ImageVersionTable,
    tls: StaticTlsPolicy,
    resolver: MountingVolumeResolver,
    sysctls: PlatformSysctls,
}

impl Collaborators {
    pub fn new(config: &SiteComposeConfig, platform: Platform) -> Self {
        Self {
            images: ImageVersionTable::new(config.image_versions.clone()),
            tls: StaticTlsPolicy::new(&config.ssl_policy),
            resolver: MountingVolumeResolver::new(platform),
            sysctls: PlatformSysctls::new(platform),
        }
    }

    pub fn builder(&self) -> ComposeBuilder<'_> {
        ComposeBuilder::new(&self.images, &self.tls, &self.resolver, &self.sysctls)
    }
}
