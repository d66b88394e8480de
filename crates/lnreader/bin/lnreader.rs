#[macro_use]
extern crate log;

use clap::{Parser, Subcommand};
use lnreader::{
    domain::services::source::SourceService,
    infrastructure::{config::Config, repositories::source::SourceRepositoryImpl},
};
use lnreader_client::ApiClient;
use serde::Serialize;

#[derive(Parser)]
#[clap(version, about = "Browse novels from the LNReader extensions API")]
struct Opts {
    /// Path to config file
    #[clap(long)]
    config: Option<String>,
    #[clap(subcommand)]
    subcmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List available sources
    Sources,
    /// Show a single source
    Source { id: i64 },
    /// Show a novel with its chapter list
    Novel { source_id: i64, novel_url: String },
    /// List the chapters of a novel
    Chapters { source_id: i64, novel_url: String },
    /// Show a single chapter
    Chapter {
        source_id: i64,
        novel_url: String,
        chapter_url: String,
    },
}

fn init_logger() {
    let mut builder = env_logger::Builder::from_default_env();
    if std::env::var("RUST_LOG").is_err() {
        if let Ok(level) = std::env::var("LNREADER_LOG") {
            builder.parse_filters(&format!("lnreader={level},lnreader_client={level}"));
        }
    }
    builder.init();
}

fn print<T: Serialize>(value: &T) -> Result<(), anyhow::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    init_logger();

    let opts: Opts = Opts::parse();
    let config = Config::open(opts.config)?;

    debug!("config: {:?}", config);

    let client = ApiClient::new(&config.api_url)?;
    let source_svc = SourceService::new(SourceRepositoryImpl::new(client));

    match opts.subcmd {
        Command::Sources => print(&source_svc.get_available_sources().await?)?,
        Command::Source { id } => print(&source_svc.get_source_by_id(id).await?)?,
        Command::Novel {
            source_id,
            novel_url,
        } => print(&source_svc.get_novel(source_id, &novel_url).await?)?,
        Command::Chapters {
            source_id,
            novel_url,
        } => print(&source_svc.get_chapters(source_id, &novel_url).await?)?,
        Command::Chapter {
            source_id,
            novel_url,
            chapter_url,
        } => print(
            &source_svc
                .get_chapter(source_id, &novel_url, &chapter_url)
                .await?,
        )?,
    }

    Ok(())
}
