//! Save/restore of a full game to durable storage.
//!
//! The main record is an opaque bincode blob of [`SavedGame`]. Beside it
//! lives a two-line plain-text player record (nickname, sunk-ship count)
//! so a caller can show who was playing without deserializing the blob.
//! A missing, unreadable, or corrupt save is reported as absence, never
//! as an error the caller must handle.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::ai::HuntTargetAi;
use crate::game::GameStatus;
use crate::player::Player;

const SAVE_FILE: &str = "broadside.save";
const RECORD_FILE: &str = "player_record.txt";

/// Everything needed to resume a game after a process restart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedGame {
    pub human: Player,
    pub computer: Player,
    pub ai: HuntTargetAi,
    pub status: GameStatus,
    pub player_turn: bool,
}

/// Directory-scoped game persistence.
#[derive(Debug, Clone)]
pub struct SaveStore {
    dir: PathBuf,
}

impl SaveStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        SaveStore { dir: dir.into() }
    }

    fn save_path(&self) -> PathBuf {
        self.dir.join(SAVE_FILE)
    }

    fn record_path(&self) -> PathBuf {
        self.dir.join(RECORD_FILE)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write the full game blob and the text player record.
    pub fn save(&self, game: &SavedGame) -> anyhow::Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("create save directory {}", self.dir.display()))?;
        let bytes = bincode::serialize(game).context("encode saved game")?;
        fs::write(self.save_path(), bytes)
            .with_context(|| format!("write {}", self.save_path().display()))?;
        let record = format!("{}\n{}\n", game.human.nickname(), game.human.sunk_ships());
        fs::write(self.record_path(), record)
            .with_context(|| format!("write {}", self.record_path().display()))?;
        Ok(())
    }

    /// Read back a saved game. Returns `None` when no save exists or the
    /// file cannot be decoded; a bad file is logged and treated as absent.
    pub fn load(&self) -> Option<SavedGame> {
        let bytes = match fs::read(self.save_path()) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                log::warn!("unreadable save file {}: {}", self.save_path().display(), e);
                return None;
            }
        };
        match bincode::deserialize(&bytes) {
            Ok(game) => Some(game),
            Err(e) => {
                log::warn!("corrupt save file {}: {}", self.save_path().display(), e);
                None
            }
        }
    }

    /// Read the lightweight player record without touching the blob.
    pub fn load_record(&self) -> Option<(String, usize)> {
        let text = fs::read_to_string(self.record_path()).ok()?;
        let mut lines = text.lines();
        let nickname = lines.next()?.to_string();
        let sunk = lines.next()?.trim().parse().ok()?;
        Some((nickname, sunk))
    }

    pub fn has_save(&self) -> bool {
        self.save_path().exists()
    }

    /// Remove both files. Missing files are not an error.
    pub fn delete(&self) -> anyhow::Result<()> {
        for path in [self.save_path(), self.record_path()] {
            match fs::remove_file(&path) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(e).with_context(|| format!("remove {}", path.display()));
                }
            }
        }
        Ok(())
    }
}
