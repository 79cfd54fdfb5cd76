//! gamehub-core: file listing loader for the GameHub download site
//!
//! Fetches each game's file listing from the site backend and renders it
//! into the page container that hosts that game's downloads.
//!
//! # Quick Start
//!
//! ```no_run
//! use gamehub_core::{Config, FileListLoader, HttpFileListSource, PageDocument};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let source = HttpFileListSource::from_config(&config)?;
//!     let mut page = PageDocument::from_path("index.html".as_ref())?;
//!
//!     let loader = FileListLoader::new(&source, &config.labels);
//!     let report = loader.load_all(&mut page, &config.games).await;
//!     println!("{} game(s) failed", report.failed_count());
//!     std::fs::write("index.out.html", page.render())?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod container;
pub mod error;
pub mod files;
pub mod game;
pub mod loader;
pub mod page;
pub mod render;
pub mod source;

pub use config::{Config, ConfigOverride, resolve_home};
pub use container::{Container, ContainerLookup, MemoryPage};
pub use error::{ConfigError, LoadError};
pub use files::FileDescriptor;
pub use game::{GameId, GameInfo};
pub use loader::{FileListLoader, GameLoad, LoadOutcome, LoadReport};
pub use page::PageDocument;
pub use render::Labels;
pub use source::{FileListSource, HttpFileListSource};
