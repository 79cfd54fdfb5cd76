//! The file list loader.
//!
//! For each game, in order: find the game's container, fetch its listing,
//! and render exactly one of three states into the container:
//!
//! - populated: one card per file, in backend order
//! - empty: a single "no files yet" placeholder
//! - error: a single "load error" placeholder
//!
//! Games are processed one at a time; each fetch completes before the next
//! begins. Failures are contained to the game they occur in.

use serde::Serialize;

use crate::container::ContainerLookup;
use crate::files::FileDescriptor;
use crate::game::GameId;
use crate::render::{self, Labels};
use crate::source::FileListSource;

/// What happened to one game's container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoadOutcome {
    /// No container on the page; nothing fetched or rendered.
    Skipped,
    Populated { files: Vec<FileDescriptor> },
    Empty,
    Failed { reason: String },
}

impl LoadOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            LoadOutcome::Skipped => "skipped",
            LoadOutcome::Populated { .. } => "populated",
            LoadOutcome::Empty => "empty",
            LoadOutcome::Failed { .. } => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameLoad {
    pub game: GameId,
    pub outcome: LoadOutcome,
}

/// Outcomes of a [`FileListLoader::load_all`] run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub games: Vec<GameLoad>,
}

impl LoadReport {
    pub fn outcome(&self, game: GameId) -> Option<&LoadOutcome> {
        self.games
            .iter()
            .find(|entry| entry.game == game)
            .map(|entry| &entry.outcome)
    }

    pub fn failed_count(&self) -> usize {
        self.games
            .iter()
            .filter(|entry| matches!(entry.outcome, LoadOutcome::Failed { .. }))
            .count()
    }
}

/// Fetches listings from a source and renders them into containers.
///
/// Holds no state between calls; the same loader can be reused across
/// pages and runs.
pub struct FileListLoader<'a> {
    source: &'a dyn FileListSource,
    labels: &'a Labels,
}

impl<'a> FileListLoader<'a> {
    pub fn new(source: &'a dyn FileListSource, labels: &'a Labels) -> Self {
        Self { source, labels }
    }

    /// Load and render a single game.
    pub async fn load(&self, page: &mut dyn ContainerLookup, game: GameId) -> LoadOutcome {
        let id = game.container_id();
        if page.lookup(&id).is_none() {
            log::warn!("container '{}' for {} not found, skipping", id, game);
            return LoadOutcome::Skipped;
        }

        let (markup, outcome) = match self.source.fetch_files(game).await {
            Ok(files) if files.is_empty() => (render::empty_state(self.labels), LoadOutcome::Empty),
            Ok(files) => (
                render::file_list(&files, self.labels),
                LoadOutcome::Populated { files },
            ),
            Err(e) => {
                log::error!("failed to load files for {}: {}", game, e);
                (
                    render::error_state(self.labels),
                    LoadOutcome::Failed {
                        reason: e.to_string(),
                    },
                )
            }
        };

        match page.lookup(&id) {
            Some(container) => {
                container.replace_content(&markup);
                outcome
            }
            None => {
                log::warn!("container '{}' for {} disappeared during load", id, game);
                LoadOutcome::Skipped
            }
        }
    }

    /// Load every game in `games`, sequentially and in order.
    pub async fn load_all(&self, page: &mut dyn ContainerLookup, games: &[GameId]) -> LoadReport {
        let mut report = LoadReport::default();
        for &game in games {
            let outcome = self.load(page, game).await;
            log::debug!("{}: {}", game, outcome.label());
            report.games.push(GameLoad { game, outcome });
        }
        report
    }
}
