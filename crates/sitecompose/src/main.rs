mod commands;
mod inputs;

use clap::{Parser, Subcommand, ValueEnum};
use inputs::SiteArgs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sitecompose")]
#[command(about = "サイトの nginx 用 docker-compose.yml を生成します", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// docker-compose.yml を生成
    Generate {
        #[command(flatten)]
        site: SiteArgs,
        /// 同梱テンプレートの代わりに使う Tera テンプレート
        #[arg(long)]
        template: Option<PathBuf>,
        /// 出力先ファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// テンプレート展開前の中間モデルを表示
    Model {
        #[command(flatten)]
        site: SiteArgs,
        /// 出力形式
        #[arg(long, value_enum, default_value_t = ModelFormat::Json)]
        format: ModelFormat,
    },
    /// バージョン情報を表示
    Version,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModelFormat {
    Json,
    Yaml,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 標準出力はドキュメント用なのでログはstderrに出力
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    match cli.command {
        Commands::Generate {
            site,
            template,
            output,
        } => {
            commands::generate::handle(&site, template.as_deref(), output.as_deref())?;
        }
        Commands::Model { site, format } => {
            commands::model::handle(&site, format)?;
        }
        Commands::Version => {
            println!("sitecompose {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
