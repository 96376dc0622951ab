//! docker-compose モデルの構築
//!
//! フィーチャーフラグとボリューム定義から、nginx サービス1件を含む
//! `ComposeDocument` を組み立てます。I/O は行わず、外部情報は
//! すべて注入されたコラボレータから取得します。

use crate::error::{ComposeError, Result};
use crate::lookup::{
    DEFAULT_TLS_POLICY, ImageVersions, SysctlProvider, TlsPolicyResolver, VolumeResolver,
};
use crate::model::{
    ComposeDocument, ExternalVolume, FeatureFlags, NetworkBlock, Platform, RestartPolicy,
    ServiceDefinition, VolumeSpec,
};
use tracing::{debug, info};

/// nginx イメージの論理名
pub const NGINX_IMAGE: &str = "easyengine/nginx";

pub const NGINX_SERVICE: &str = "nginx";

/// 共有フロントエンドネットワーク
pub const GLOBAL_FRONTEND_NETWORK: &str = "global-frontend-network";

/// サイト専用ネットワーク
pub const SITE_NETWORK: &str = "site-network";

/// 宣言する外部ボリューム（この順序で出力される）
pub const EXTERNAL_VOLUMES: [&str; 3] = ["htdocs", "config_nginx", "log_nginx"];

const SITE_LABEL: &str = "io.easyengine.site=${VIRTUAL_HOST}";
const VENDOR_LABEL: &str = "org.label-schema.vendor=EasyEngine";

/// docker-compose モデルビルダー
pub struct ComposeBuilder<'a> {
    images: &'a dyn ImageVersions,
    tls: &'a dyn TlsPolicyResolver,
    volumes: &'a dyn VolumeResolver,
    sysctls: &'a dyn SysctlProvider,
}

impl<'a> ComposeBuilder<'a> {
    pub fn new(
        images: &'a dyn ImageVersions,
        tls: &'a dyn TlsPolicyResolver,
        volumes: &'a dyn VolumeResolver,
        sysctls: &'a dyn SysctlProvider,
    ) -> Self {
        Self {
            images,
            tls,
            volumes,
            sysctls,
        }
    }

    /// モデルを構築
    ///
    /// 外部ボリュームは Darwin 以外でのみ宣言されます。
    /// コラボレータのエラーはそのまま返します。
    #[tracing::instrument(skip(self, flags, volumes), fields(site_prefix = %flags.site_prefix))]
    pub fn build(
        &self,
        flags: &FeatureFlags,
        volumes: &[VolumeSpec],
        platform: Platform,
    ) -> Result<ComposeDocument> {
        validate(flags, platform)?;

        let tag = self.images.image_tag(NGINX_IMAGE)?;
        let environment = self.environment(flags)?;
        let mounts = self.volumes.resolve_volume_mounts(volumes)?;

        let nginx = ServiceDefinition {
            service_name: NGINX_SERVICE.to_string(),
            image: format!("{NGINX_IMAGE}:{tag}"),
            restart: RestartPolicy::Always,
            environment,
            volumes: mounts,
            labels: vec![SITE_LABEL.to_string()],
            sysctls: self.sysctls.sysctl_parameters(),
            networks: vec![
                GLOBAL_FRONTEND_NETWORK.to_string(),
                SITE_NETWORK.to_string(),
            ],
        };

        let external_volumes = if platform.is_darwin() {
            debug!("Skipping external volume declarations on darwin");
            None
        } else {
            Some(
                EXTERNAL_VOLUMES
                    .iter()
                    .map(|volume| ExternalVolume::new(&flags.site_prefix, *volume))
                    .collect(),
            )
        };

        info!(
            image = %nginx.image,
            env_count = nginx.environment.len(),
            volume_count = nginx.volumes.len(),
            "Built compose document"
        );

        Ok(ComposeDocument {
            services: vec![nginx],
            network: NetworkBlock {
                labels: vec![VENDOR_LABEL.to_string(), SITE_LABEL.to_string()],
                subnet_ip: flags.subnet_ip.clone(),
            },
            external_volumes,
        })
    }

    /// 環境変数を構築
    ///
    /// 順序: VIRTUAL_HOST, VIRTUAL_PATH, HSTS, CERT_NAME, HTTPS_METHOD | SSL_POLICY
    fn environment(&self, flags: &FeatureFlags) -> Result<Vec<String>> {
        let mut virtual_host = String::from("VIRTUAL_HOST=${VIRTUAL_HOST}");
        if let Some(aliases) = flags.alias_domains() {
            virtual_host.push(',');
            virtual_host.push_str(aliases);
        }

        let mut env = vec![
            virtual_host,
            "VIRTUAL_PATH=/".to_string(),
            "HSTS=off".to_string(),
        ];

        if flags.alias_domains().is_some() {
            env.push("CERT_NAME=${VIRTUAL_HOST}".to_string());
        }

        // nohttps が優先
        if flags.is_nohttps() {
            env.push("HTTPS_METHOD=nohttps".to_string());
        } else {
            let policy = self.tls.current_tls_policy()?;
            if policy != DEFAULT_TLS_POLICY {
                debug!(policy = %policy, "Using non-default SSL policy");
                env.push(format!("SSL_POLICY={policy}"));
            }
        }

        Ok(env)
    }
}

fn validate(flags: &FeatureFlags, platform: Platform) -> Result<()> {
    if flags.subnet_ip.trim().is_empty() {
        return Err(ComposeError::InvalidConfig(
            "subnet_ip が指定されていません".to_string(),
        ));
    }

    if !platform.is_darwin() && flags.site_prefix.trim().is_empty() {
        return Err(ComposeError::InvalidConfig(
            "外部ボリュームの宣言には site_prefix が必要です".to_string(),
        ));
    }

    Ok(())
}
