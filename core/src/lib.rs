#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use placement::*;
pub use render::*;
pub use reveal::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod placement;
mod render;
mod reveal;
mod types;

/// Board used when no explicit configuration is given.
pub const DEFAULT_SIZE: Coord2 = (10, 10);

/// Mines placed on the default board.
pub const DEFAULT_MINES: CellCount = 10;

/// What a flood-fill cascade does when it reaches a flagged cell.
///
/// Flags always protect a cell from being opened directly, this only decides
/// whether a cascade started elsewhere may open it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlagCascade {
    /// Leave flagged cells closed, the cascade flows around them.
    Skip,
    /// Remove the flag and open the cell like any other.
    Reveal,
}

impl Default for FlagCascade {
    fn default() -> Self {
        Self::Skip
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
    #[serde(default)]
    pub flag_cascade: FlagCascade,
}

impl GameConfig {
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let config = Self {
            size,
            mines,
            flag_cascade: FlagCascade::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub const fn with_flag_cascade(self, flag_cascade: FlagCascade) -> Self {
        Self {
            flag_cascade,
            ..self
        }
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }

    /// A board needs at least one cell and at least one cell left free of mines.
    pub fn validate(&self) -> Result<()> {
        if self.size.0 == 0 || self.size.1 == 0 {
            log::warn!("Rejected empty board of size {:?}", self.size);
            return Err(GameError::InvalidConfiguration);
        }
        if self.mines >= self.total_cells() {
            log::warn!(
                "Rejected {} mines, board only has {} cells",
                self.mines,
                self.total_cells()
            );
            return Err(GameError::InvalidConfiguration);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            mines: DEFAULT_MINES,
            flag_cascade: FlagCascade::default(),
        }
    }
}
