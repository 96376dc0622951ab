use crate::inputs::{Collaborators, SiteArgs};
use anyhow::Context;
use colored::Colorize;
use sitecompose_core::{ComposeRenderer, generate_docker_compose_yml};
use std::path::Path;

pub fn handle(site: &SiteArgs, template: Option<&Path>, output: Option<&Path>) -> anyhow::Result<()> {
    let inputs = site.resolve()?;

    let renderer = match template {
        Some(path) => ComposeRenderer::from_template_file(path)?,
        None => ComposeRenderer::new()?,
    };

    let collaborators = Collaborators::new(&inputs.config, inputs.platform);
    let yaml = generate_docker_compose_yml(
        &collaborators.builder(),
        &renderer,
        &inputs.flags,
        &inputs.volumes,
        inputs.platform,
    )?;

    match output {
        Some(path) => {
            // ディレクトリが存在しない場合は作成
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("ディレクトリを作成できません: {}", parent.display()))?;
            }

            std::fs::write(path, &yaml)
                .with_context(|| format!("ファイルを書き込めません: {}", path.display()))?;

            eprintln!("{}", "✓ docker-compose.yml を生成しました！".green());
            eprintln!("  {}", path.display().to_string().cyan());
        }
        None => print!("{yaml}"),
    }

    Ok(())
}
