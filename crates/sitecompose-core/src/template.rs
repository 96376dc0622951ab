//! テンプレート展開機能
//!
//! Teraを使用して `ComposeDocument` を docker-compose.yml に展開します。

use crate::error::{ComposeError, Result};
use crate::model::ComposeDocument;
use std::path::Path;
use tera::{Context, Tera};
use tracing::{debug, info};

/// 同梱の docker-compose.yml テンプレート
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/docker-compose.yml.tera");

const TEMPLATE_NAME: &str = "docker-compose.yml";

/// docker-compose.yml レンダラー
pub struct ComposeRenderer {
    tera: Tera,
}

impl ComposeRenderer {
    /// 同梱テンプレートでレンダラーを作成
    pub fn new() -> Result<Self> {
        Self::from_template_str(DEFAULT_TEMPLATE)
    }

    /// 任意のテンプレート文字列でレンダラーを作成
    pub fn from_template_str(template: &str) -> Result<Self> {
        let mut tera = Tera::default();
        // 出力は YAML なのでエスケープしない
        tera.autoescape_on(vec![]);
        tera.add_raw_template(TEMPLATE_NAME, template)
            .map_err(|e| ComposeError::TemplateRenderError(extract_tera_error_detail(&e)))?;

        Ok(Self { tera })
    }

    /// テンプレートファイルを読み込んでレンダラーを作成
    #[tracing::instrument]
    pub fn from_template_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ComposeError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        debug!(bytes = content.len(), "Loaded compose template");

        Self::from_template_str(&content).map_err(|e| {
            // TemplateRenderErrorをファイル情報付きのTemplateErrorに変換
            if let ComposeError::TemplateRenderError(message) = e {
                ComposeError::TemplateError {
                    file: path.to_path_buf(),
                    message,
                }
            } else {
                e
            }
        })
    }

    /// ドキュメントを展開
    #[tracing::instrument(skip_all)]
    pub fn render(&self, document: &ComposeDocument) -> Result<String> {
        let context = Context::from_serialize(document)
            .map_err(|e| ComposeError::TemplateRenderError(extract_tera_error_detail(&e)))?;

        let rendered = self
            .tera
            .render(TEMPLATE_NAME, &context)
            .map_err(|e| ComposeError::TemplateRenderError(extract_tera_error_detail(&e)))?;

        info!(bytes = rendered.len(), "Rendered docker-compose.yml");
        Ok(rendered)
    }
}

/// Teraエラーから詳細情報を抽出
///
/// Teraのエラーメッセージを解析して、未定義変数などの具体的な情報を取得します。
fn extract_tera_error_detail(e: &tera::Error) -> String {
    use std::error::Error;

    // sourceチェーンをたどる
    let mut details = vec![e.to_string()];
    let mut source = e.source();
    while let Some(err) = source {
        details.push(err.to_string());
        source = err.source();
    }

    let full_error = details.join(" | ");

    // "Variable `xxx` not found in context"
    if full_error.contains("not found in context")
        && let Some(start) = full_error.find("Variable `")
        && let Some(end) = full_error[start..].find("` not found")
    {
        let var_name = &full_error[start + 10..start + end];
        return format!(
            "未定義の変数: `{}`\nヒント: テンプレートで参照できるのは services, network, external_volumes です",
            var_name
        );
    }

    full_error
}
