use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::{self, Display, Write};
use serde::{Deserialize, Serialize};

use crate::*;

const HIDDEN: char = '#';
const FLAGGED: char = 'F';
const MINE: char = '*';

impl CellView {
    pub fn token(self) -> char {
        match self {
            Self::Hidden => HIDDEN,
            Self::Flagged => FLAGGED,
            Self::Mine => MINE,
            // counts never exceed 8
            Self::Open(count) => char::from(b'0' + count),
        }
    }

    pub fn from_token(token: char) -> Option<Self> {
        match token {
            HIDDEN => Some(Self::Hidden),
            FLAGGED => Some(Self::Flagged),
            MINE => Some(Self::Mine),
            '0'..='8' => token.to_digit(10).map(|count| Self::Open(count as u8)),
            _ => None,
        }
    }
}

/// Board rows from top to bottom, each cell a token followed by a space, each row ending in `\n`.
///
/// ```text
/// # F 1 0
/// * 2 1 0
/// ```
impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for coords in row {
                f.write_char(self[coords].view().token())?;
                f.write_char(' ')?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

/// Player-visible board as text, readable back with [`parse_board`].
pub fn serialize(grid: &Grid) -> String {
    grid.to_string()
}

/// Reads text produced by [`serialize`] back into rows of cells, top row first.
pub fn parse_board(text: &str) -> Result<Vec<Vec<CellView>>> {
    let mut rows = Vec::new();
    for line in text.lines() {
        let row = line
            .split(' ')
            .filter(|token| !token.is_empty())
            .map(|token| {
                let mut chars = token.chars();
                let view = match (chars.next(), chars.next()) {
                    (Some(token), None) => CellView::from_token(token),
                    _ => None,
                };
                view.ok_or(GameError::MalformedState)
            })
            .collect::<Result<Vec<_>>>()?;

        if rows.first().is_some_and(|first: &Vec<CellView>| first.len() != row.len()) {
            return Err(GameError::MalformedState);
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Serde-friendly picture of everything a renderer needs, cells listed row by row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub width: Coord,
    pub height: Coord,
    pub status: GameStatus,
    pub mines_left: isize,
    pub cells: Vec<CellView>,
}

impl Snapshot {
    pub fn from_game(game: &Game) -> Self {
        let grid = game.grid();
        Self {
            width: grid.width(),
            height: grid.height(),
            status: game.status(),
            mines_left: game.mines_left(),
            cells: grid
                .rows()
                .flatten()
                .map(|coords| grid[coords].view())
                .collect(),
        }
    }

    pub fn cell_at(&self, (x, y): Coord2) -> Option<CellView> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells
            .get(usize::from(y) * usize::from(self.width) + usize::from(x))
            .copied()
    }
}
