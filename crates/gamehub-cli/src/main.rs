// gamehub: CLI frontend for gamehub-core
// Argument parsing, page rendering, terminal output

mod cli;
mod output;

use std::error::Error;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use gamehub_core::{
    Config, FileListLoader, HttpFileListSource, MemoryPage, PageDocument, resolve_home,
};

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gamehub: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let home = resolve_home(cli.home.clone())?;
    let config = Config::load(&home)?.merge_with(&cli.config_override());
    log::info!("using backend {}", config.base_url);

    let source = HttpFileListSource::from_config(&config)?;
    let loader = FileListLoader::new(&source, &config.labels);

    match &cli.command {
        Command::Render { page, output: out_path } => {
            let mut document = PageDocument::from_path(page)?;
            let report = loader.load_all(&mut document, &config.games).await;
            let rendered = document.render();
            match out_path {
                Some(path) => std::fs::write(path, rendered).map_err(|e| {
                    io::Error::new(
                        e.kind(),
                        format!("Failed to write '{}': {}", path.display(), e),
                    )
                })?,
                None => io::stdout().write_all(rendered.as_bytes())?,
            }
            eprintln!("[{}]", output::summary_line(&report));
        }
        Command::List { json } => {
            let mut page =
                MemoryPage::with_containers(config.games.iter().map(|g| g.container_id()));
            let report = loader.load_all(&mut page, &config.games).await;
            let mut stdout = io::stdout().lock();
            if *json {
                output::write_report_jsonl(&mut stdout, &report)?;
            } else {
                output::write_report_text(&mut stdout, &report)?;
            }
        }
        Command::Games { json } => {
            let catalog = source.fetch_catalog().await?;
            output::write_catalog(&mut io::stdout().lock(), &catalog, *json)?;
        }
    }
    Ok(())
}
