//! The fixed set of games the site hosts downloads for.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

/// Identifier of one supported game's file section.
///
/// The set is closed: the page template has one section per variant and
/// the backend only answers for these tags.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumString, AsRefStr, Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum GameId {
    Ddnet,
    Cs2,
    Minecraft,
}

impl GameId {
    /// Every game, in page order.
    pub const ALL: [GameId; 3] = [GameId::Ddnet, GameId::Cs2, GameId::Minecraft];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameId::Ddnet => "ddnet",
            GameId::Cs2 => "cs2",
            GameId::Minecraft => "minecraft",
        }
    }

    /// Id of the element that hosts this game's file list.
    pub fn container_id(&self) -> String {
        format!("{}-files", self.as_str())
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog entry served by `/api/games`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInfo {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}
