//! sitecompose のコア機能
//!
//! サイト1件分の nginx コンテナ向け docker-compose.yml を、
//! フィーチャーフラグとボリューム定義から組み立てます。

pub mod builder;
pub mod error;
pub mod lookup;
pub mod model;
pub mod template;

pub use builder::*;
pub use error::*;
pub use lookup::*;
pub use model::*;
pub use template::*;

/// docker-compose.yml を生成
///
/// モデルの構築とテンプレート展開を続けて行います。
pub fn generate_docker_compose_yml(
    builder: &ComposeBuilder<'_>,
    renderer: &ComposeRenderer,
    flags: &FeatureFlags,
    volumes: &[VolumeSpec],
    platform: Platform,
) -> Result<String> {
    let document = builder.build(flags, volumes, platform)?;
    renderer.render(&document)
}
