use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("無効な設定: {0}")]
    InvalidConfig(String),

    #[error(
        "イメージ '{0}' のバージョンが見つかりません\nヒント: 設定ファイルの image_versions に追加してください"
    )]
    ImageVersionNotFound(String),

    #[error("IO エラー: {path}\n理由: {message}")]
    IoError { path: PathBuf, message: String },

    #[error("テンプレートエラー: {file}\n理由: {message}")]
    TemplateError { file: PathBuf, message: String },

    #[error("テンプレート展開エラー: {0}")]
    TemplateRenderError(String),
}

pub type Result<T> = std::result::Result<T, ComposeError>;
