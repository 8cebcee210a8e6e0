//! Application state and key handling.

use super::input::{move_cursor, move_selection};
use crossdrop_puzzle::{
    BoardEvent, BoardSession, BoardUpdate, BoardView, Coord, EngineError, PlacementOutcome,
    WordId,
};
use crossterm::event::KeyCode;
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Which panel receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The word pool.
    Pool,
    /// The grid.
    Grid,
}

/// Main application state.
pub struct App {
    session: BoardSession,
    view: BoardView,
    focus: Focus,
    selected: usize,
    held: Option<WordId>,
    cursor: Coord,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application over a fresh session.
    pub fn new(session: BoardSession) -> Self {
        let view = session.view();
        Self {
            session,
            view,
            focus: Focus::Pool,
            selected: 0,
            held: None,
            cursor: Coord::new(0, 0),
            status_message: "Pick a tile with Enter, then drop it on its first cell.".to_string(),
            should_quit: false,
        }
    }

    /// Latest board projection.
    pub fn view(&self) -> &BoardView {
        &self.view
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Index of the selected pool tile.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Tile currently being dragged.
    pub fn held(&self) -> Option<&WordId> {
        self.held.as_ref()
    }

    /// Grid cursor.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns true once the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Cells of words auto-solved since the last key press.
    pub fn auto_solved_cells(&self) -> BTreeSet<Coord> {
        self.view
            .auto_solved
            .iter()
            .filter_map(|id| self.session.engine().indexes().cells_of(id.as_str()))
            .flatten()
            .copied()
            .collect()
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Result<(), EngineError> {
        // Auto-solve highlights last until the next input.
        self.session.mark_rendered();

        match (self.focus, key) {
            (_, KeyCode::Char('q')) => {
                info!("User quit");
                self.should_quit = true;
            }
            (_, KeyCode::Char('n')) => self.restart(),
            (_, KeyCode::Tab) => {
                self.focus = match self.focus {
                    Focus::Pool => Focus::Grid,
                    Focus::Grid => Focus::Pool,
                };
            }
            (Focus::Pool, KeyCode::Up | KeyCode::Down) => {
                self.selected = move_selection(self.selected, key, self.view.tiles.len());
            }
            (Focus::Pool, KeyCode::Char('r') | KeyCode::Char(' ')) => {
                if let Some(word_id) = self.selected_tile() {
                    self.rotate(word_id)?;
                }
            }
            (Focus::Pool, KeyCode::Enter) => {
                if let Some(word_id) = self.selected_tile() {
                    self.status_message = format!(
                        "Holding {}. Move to its first cell and press Enter.",
                        self.text_of(&word_id)
                    );
                    self.held = Some(word_id);
                    self.focus = Focus::Grid;
                }
            }
            (Focus::Grid, KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                self.cursor = move_cursor(self.cursor, key, self.view.rows, self.view.cols);
            }
            (Focus::Grid, KeyCode::Char('r') | KeyCode::Char(' ')) => {
                if let Some(word_id) = self.held.clone() {
                    self.rotate(word_id)?;
                }
            }
            (Focus::Grid, KeyCode::Enter) => self.drop_held(Some(self.cursor))?,
            (Focus::Grid, KeyCode::Esc) => self.drop_held(None)?,
            (Focus::Grid, KeyCode::Char('h')) => {
                let update = self.session.handle(BoardEvent::RevealCell { cell: self.cursor })?;
                self.report(&update);
            }
            _ => {}
        }

        self.refresh();
        Ok(())
    }

    fn selected_tile(&self) -> Option<WordId> {
        self.view.tiles.get(self.selected).map(|tile| tile.id.clone())
    }

    fn text_of(&self, word_id: &WordId) -> String {
        self.session
            .pool()
            .tile(word_id.as_str())
            .map(|tile| tile.text.clone())
            .unwrap_or_else(|| word_id.to_string())
    }

    fn rotate(&mut self, word_id: WordId) -> Result<(), EngineError> {
        let update = self.session.handle(BoardEvent::ToggleOrientation { word_id })?;
        self.report(&update);
        Ok(())
    }

    fn drop_held(&mut self, target: Option<Coord>) -> Result<(), EngineError> {
        let Some(word_id) = self.held.take() else {
            self.status_message = "Pick up a tile from the pool first (Tab, Enter).".to_string();
            return Ok(());
        };
        let orientation = self
            .session
            .pool()
            .orientation_of(word_id.as_str())
            .ok_or_else(|| EngineError::UnknownWord(word_id.clone()))?;
        let update = self.session.handle(BoardEvent::DragEnded {
            word_id,
            target,
            orientation,
        })?;
        self.report(&update);
        self.focus = Focus::Pool;
        Ok(())
    }

    fn report(&mut self, update: &BoardUpdate) {
        debug!(?update, "Reporting board update");
        self.status_message = match update {
            BoardUpdate::Drop(PlacementOutcome::Placed {
                word_id,
                auto_solved,
                ..
            }) => {
                let placed = format!("Placed {}.", self.text_of(word_id));
                self.with_auto_solved(placed, auto_solved)
            }
            BoardUpdate::Drop(PlacementOutcome::AlreadyPlaced(word_id)) => {
                format!("{} is already on the board.", self.text_of(word_id))
            }
            BoardUpdate::Drop(PlacementOutcome::Rejected { word_id, reason }) => {
                format!("{} does not go there: {}.", self.text_of(word_id), reason)
            }
            BoardUpdate::Rotated {
                word_id,
                orientation,
            } => format!("{} is now {}.", self.text_of(word_id), orientation),
            BoardUpdate::Revealed(outcome) => {
                self.with_auto_solved("Revealed a letter.".to_string(), &outcome.auto_solved)
            }
            BoardUpdate::Ignored => "Nothing happened.".to_string(),
        };
    }

    fn with_auto_solved(&self, message: String, auto_solved: &[WordId]) -> String {
        if auto_solved.is_empty() {
            return message;
        }
        let words: Vec<String> = auto_solved.iter().map(|id| self.text_of(id)).collect();
        format!("{} Crossings completed {}!", message, words.join(", "))
    }

    fn refresh(&mut self) {
        self.view = self.session.view();
        self.selected = move_selection(self.selected, KeyCode::Null, self.view.tiles.len());
        if self.view.solved {
            self.status_message = format!(
                "{} Solved! Press 'n' to play again or 'q' to quit.",
                self.status_message
            );
        }
    }

    /// Restarts the puzzle.
    pub fn restart(&mut self) {
        debug!("Restarting puzzle");
        self.session.restart();
        self.held = None;
        self.focus = Focus::Pool;
        self.selected = 0;
        self.status_message = "Puzzle restarted.".to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossdrop_puzzle::SessionOptions;

    const ORCHARD: &str = include_str!("../../../../puzzles/orchard.ipuz");

    fn app() -> App {
        App::new(BoardSession::from_ipuz_str(ORCHARD, SessionOptions::default()).unwrap())
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            app.handle_key(*key).unwrap();
        }
    }

    #[test]
    fn test_pick_up_and_drop_first_tile() {
        let mut app = app();
        // APPLE is first in the pool and starts at (1, 1), horizontal.
        press(
            &mut app,
            &[KeyCode::Enter, KeyCode::Down, KeyCode::Right, KeyCode::Enter],
        );
        assert_eq!(app.view().placed, 1);
        assert!(app.status_message().starts_with("Placed APPLE"));
        assert_eq!(app.focus(), Focus::Pool);
        assert!(app.held().is_none());
    }

    #[test]
    fn test_wrong_orientation_reports_reason() {
        let mut app = app();
        press(
            &mut app,
            &[
                KeyCode::Char('r'),
                KeyCode::Enter,
                KeyCode::Down,
                KeyCode::Right,
                KeyCode::Enter,
            ],
        );
        assert_eq!(app.view().placed, 0);
        assert!(app.status_message().contains("wrong orientation"));
    }

    #[test]
    fn test_escape_drops_outside() {
        let mut app = app();
        press(&mut app, &[KeyCode::Enter, KeyCode::Esc]);
        assert!(app.status_message().contains("outside the grid"));
        assert_eq!(app.view().tiles.len(), 8);
    }

    #[test]
    fn test_drop_without_tile() {
        let mut app = app();
        press(&mut app, &[KeyCode::Tab, KeyCode::Enter]);
        assert!(app.status_message().starts_with("Pick up a tile"));
    }

    #[test]
    fn test_hint_and_restart() {
        let mut app = app();
        press(
            &mut app,
            &[KeyCode::Tab, KeyCode::Down, KeyCode::Right, KeyCode::Char('h')],
        );
        assert_eq!(app.view().revealed.len(), 1);
        press(&mut app, &[KeyCode::Char('n')]);
        assert!(app.view().revealed.is_empty());
        assert_eq!(app.status_message(), "Puzzle restarted.");
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('q')]);
        assert!(app.should_quit());
    }
}
