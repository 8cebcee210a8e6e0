//! Pool of draggable word tiles.
//!
//! The pool is a projection: it filters out placed words and never touches
//! placement state. The only thing it owns is each tile's current
//! orientation, which the player rotates before dragging.

use crate::coord::{Orientation, WordId};
use crate::puzzle::Puzzle;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// How tiles are oriented when a session starts.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TileOrientationPolicy {
    /// Every tile starts with its authored orientation.
    Authored,
    /// Every tile starts horizontal; the player works out the rest.
    #[default]
    Horizontal,
}

/// Order in which unplaced tiles are listed.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PoolOrder {
    /// Puzzle order: across words row-major, then down words row-major.
    #[default]
    Authored,
    /// Grouped by length, longest group first, authored order within a group.
    LongestFirst,
}

/// A draggable tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordTile {
    /// The word this tile places.
    pub id: WordId,
    /// The answer shown on the tile.
    pub text: String,
    /// Orientation the tile will be dropped with.
    pub orientation: Orientation,
}

impl WordTile {
    /// Number of letters on the tile.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns true for a tile without letters (never built from a valid puzzle).
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// All tiles of a puzzle, in authored order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePool {
    tiles: Vec<WordTile>,
    initial: Vec<Orientation>,
}

impl TilePool {
    /// Builds one tile per word.
    #[instrument(skip(puzzle), fields(words = puzzle.words().len()))]
    pub fn new(puzzle: &Puzzle, policy: TileOrientationPolicy) -> Self {
        let tiles: Vec<WordTile> = puzzle
            .words()
            .iter()
            .map(|word| WordTile {
                id: word.id.clone(),
                text: word.text.clone(),
                orientation: match policy {
                    TileOrientationPolicy::Authored => word.orientation,
                    TileOrientationPolicy::Horizontal => Orientation::Horizontal,
                },
            })
            .collect();
        let initial = tiles.iter().map(|tile| tile.orientation).collect();
        Self { tiles, initial }
    }

    /// Every tile, placed or not.
    pub fn tiles(&self) -> &[WordTile] {
        &self.tiles
    }

    /// Looks up a tile.
    pub fn tile(&self, word_id: &str) -> Option<&WordTile> {
        self.tiles.iter().find(|tile| tile.id.as_str() == word_id)
    }

    /// Current orientation of a tile.
    pub fn orientation_of(&self, word_id: &str) -> Option<Orientation> {
        self.tile(word_id).map(|tile| tile.orientation)
    }

    /// Tiles not yet placed, in the requested order.
    pub fn unplaced<'a>(
        &'a self,
        placed: &BTreeSet<WordId>,
        order: PoolOrder,
    ) -> Vec<&'a WordTile> {
        match order {
            PoolOrder::Authored => self
                .tiles
                .iter()
                .filter(|tile| !placed.contains(&tile.id))
                .collect(),
            PoolOrder::LongestFirst => self
                .groups(placed)
                .into_iter()
                .flat_map(|(_, group)| group)
                .collect(),
        }
    }

    /// Unplaced tiles grouped by length, longest first.
    ///
    /// Within a group tiles keep authored order. Empty groups are omitted.
    pub fn groups<'a>(&'a self, placed: &BTreeSet<WordId>) -> Vec<(usize, Vec<&'a WordTile>)> {
        let mut groups: Vec<(usize, Vec<&WordTile>)> = Vec::new();
        for tile in self.tiles.iter().filter(|tile| !placed.contains(&tile.id)) {
            match groups.iter_mut().find(|(len, _)| *len == tile.len()) {
                Some((_, group)) => group.push(tile),
                None => groups.push((tile.len(), vec![tile])),
            }
        }
        groups.sort_by(|a, b| b.0.cmp(&a.0));
        groups
    }

    /// Flips a tile between horizontal and vertical.
    ///
    /// Returns the new orientation, or `None` if the word is placed or not
    /// in the pool.
    #[instrument(skip(self, placed))]
    pub fn toggle_orientation(
        &mut self,
        word_id: &str,
        placed: &BTreeSet<WordId>,
    ) -> Option<Orientation> {
        if placed.contains(word_id) {
            debug!("Ignoring rotation of a placed tile");
            return None;
        }
        let tile = self.tiles.iter_mut().find(|tile| tile.id.as_str() == word_id)?;
        tile.orientation = tile.orientation.flipped();
        debug!(orientation = %tile.orientation, "Tile rotated");
        Some(tile.orientation)
    }

    /// Restores the orientations the pool was built with.
    pub fn reset(&mut self) {
        for (tile, orientation) in self.tiles.iter_mut().zip(&self.initial) {
            tile.orientation = *orientation;
        }
    }
}
