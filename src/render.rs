//! Plain-text rendering.
//!
//! Draws the track as a grid of numbered cells (special cells marked `*`,
//! occupied cells show the players' tokens), the player list and the card
//! list. `ConsoleObserver` wires these into the observer boundary for the CLI.

use std::io::Write;

use crate::core::{GameConfig, GameState};
use crate::events::{GameEvent, GameObserver};

/// Default grid width.
pub const DEFAULT_COLUMNS: usize = 10;

/// Draw the board as rows of `columns` cells.
///
/// ```
/// use board_race::core::GameConfig;
/// use board_race::core::GameState;
/// use board_race::render::render_board;
///
/// let config = GameConfig::new(4).with_player("Solo", "#fff");
/// let state = GameState::new(&config);
/// assert_eq!(render_board(&state, &config, 2), "S  1\n2  3");
/// ```
#[must_use]
pub fn render_board(state: &GameState, config: &GameConfig, columns: usize) -> String {
    let columns = columns.max(1);
    let size = config.board.size;
    let width = config.board.last_cell().to_string().len().max(state.player_count());

    let cells: Vec<String> = (0..size)
        .map(|cell| {
            let tokens: String = state
                .players()
                .filter(|p| p.position == cell)
                .map(|p| p.token())
                .collect();
            let text = if tokens.is_empty() { cell.to_string() } else { tokens };
            let marker = if config.board.special_at(cell).is_some() { '*' } else { ' ' };
            format!("{:>width$}{}", text, marker, width = width)
        })
        .collect();

    cells
        .chunks(columns)
        .map(|row| row.join(" ").trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per player, the player to move marked with `>`.
#[must_use]
pub fn render_players(state: &GameState) -> String {
    state
        .players()
        .map(|p| {
            let cursor = if !state.ended && p.id == state.turn { '>' } else { ' ' };
            format!("{} {} {} (pos: {})", cursor, p.token(), p.name, p.position)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One-line game summary: player count, die and board size.
#[must_use]
pub fn render_summary(config: &GameConfig) -> String {
    format!(
        "Players: {} | Dice: d{} | Cells: {}",
        config.player_count(),
        config.dice_sides,
        config.board.size
    )
}

/// Numbered card list.
#[must_use]
pub fn render_cards(config: &GameConfig) -> String {
    config
        .cards
        .iter()
        .map(|(id, card)| format!("{}. {}", id.index() + 1, card.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes log lines (and optionally the board) to any `Write`.
///
/// Write failures are reported through `log` and otherwise ignored.
pub struct ConsoleObserver<W: Write> {
    out: W,
    show_board: bool,
    columns: usize,
}

impl<W: Write> ConsoleObserver<W> {
    /// Log lines only.
    pub fn new(out: W) -> Self {
        Self {
            out,
            show_board: false,
            columns: DEFAULT_COLUMNS,
        }
    }

    /// Also draw the board and player list on every render.
    #[must_use]
    pub fn with_board(mut self, columns: usize) -> Self {
        self.show_board = true;
        self.columns = columns;
        self
    }

    /// Consume the observer and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GameObserver for ConsoleObserver<W> {
    fn log(&mut self, event: &GameEvent) {
        if let Err(e) = writeln!(self.out, "{}", event) {
            log::warn!("failed to write game log: {}", e);
        }
    }

    fn render(&mut self, state: &GameState, config: &GameConfig) {
        if !self.show_board {
            return;
        }
        let frame = format!(
            "{}\n{}\n",
            render_board(state, config, self.columns),
            render_players(state)
        );
        if let Err(e) = self.out.write_all(frame.as_bytes()) {
            log::warn!("failed to draw board: {}", e);
        }
    }
}
