use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Playing
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// One game from placement to win or loss.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,
    seed: Option<u64>,
    grid: Grid,
    status: GameStatus,
    revealed_safe_count: CellCount,
    total_safe_cells: CellCount,
    triggered_mine: Option<Coord2>,
}

impl Game {
    /// Random board for `config`, reproducible from `seed`.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        let mut game = Self::generate(config, RandomPlacer::new(seed))?;
        game.seed = Some(seed);
        Ok(game)
    }

    pub fn generate(config: GameConfig, placer: impl MinePlacer) -> Result<Self> {
        config.validate()?;
        let grid = populate(config.size, config.mines, placer)?;
        log::debug!(
            "New game: {:?} board with {} mines",
            config.size,
            config.mines
        );
        Ok(Self {
            config,
            seed: None,
            grid,
            status: GameStatus::default(),
            revealed_safe_count: 0,
            total_safe_cells: config.safe_cells(),
            triggered_mine: None,
        })
    }

    /// Board with mines at exactly the given coordinates.
    pub fn with_mines(size: Coord2, mines: &[Coord2]) -> Result<Self> {
        let count =
            CellCount::try_from(mines.len()).map_err(|_| GameError::InvalidConfiguration)?;
        let config = GameConfig::new(size, count)?;
        Self::generate(config, FixedPlacer::new(mines))
    }

    /// Throws away the current board and starts over with the same configuration.
    pub fn new_game(&mut self, seed: u64) -> Result<()> {
        *self = Self::new(self.config, seed)?;
        Ok(())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed the board was placed from, `None` for fixed layouts.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_lost(&self) -> bool {
        self.status == GameStatus::Lost
    }

    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    pub fn flag_count(&self) -> CellCount {
        self.grid.flag_count()
    }

    /// How many mines have not been flagged yet, negative when over-flagged.
    pub fn mines_left(&self) -> isize {
        (self.mine_count() as isize) - (self.flag_count() as isize)
    }

    pub fn revealed_safe_count(&self) -> CellCount {
        self.revealed_safe_count
    }

    pub fn total_safe_cells(&self) -> CellCount {
        self.total_safe_cells
    }

    /// The mine whose opening lost the game.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<CellView> {
        Ok(self.grid.get(coords)?.view())
    }

    pub fn open_field(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.grid.validate_coords(coords)?;
        self.check_playing()?;

        let outcome = reveal(&mut self.grid, coords, self.config.flag_cascade)?;
        self.apply(coords, outcome);
        Ok(outcome)
    }

    /// Opens the closed neighbors of a numbered cell once enough flags surround it.
    ///
    /// Anything other than an open number with a matching flag count is left alone.
    pub fn chord(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let coords = self.grid.validate_coords(coords)?;
        self.check_playing()?;

        let cell = self.grid[coords];
        if !cell.is_revealed || cell.is_mine || cell.adjacent_mines == 0 {
            return Ok(AlreadyOpen);
        }

        let flagged = self
            .grid
            .neighbors(coords)
            .filter(|&pos| self.grid[pos].is_flagged)
            .count();
        if flagged != usize::from(cell.adjacent_mines) {
            return Ok(AlreadyOpen);
        }

        let mut total = AlreadyOpen;
        for pos in self.grid.neighbors(coords) {
            if self.status.is_finished() {
                break;
            }
            let outcome = reveal(&mut self.grid, pos, self.config.flag_cascade)?;
            self.apply(pos, outcome);
            total = match (total, outcome) {
                (Mine, _) | (_, Mine) => Mine,
                (Cascaded(a), Cascaded(b)) => Cascaded(a + b),
                (Cascaded(a), AlreadyOpen) | (AlreadyOpen, Cascaded(a)) => Cascaded(a),
                (AlreadyOpen, AlreadyOpen) => AlreadyOpen,
            };
        }
        Ok(total)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.grid.validate_coords(coords)?;
        self.check_playing()?;

        let cell = &mut self.grid[coords];
        if cell.is_revealed {
            return Ok(MarkOutcome::NoChange);
        }
        cell.is_flagged = !cell.is_flagged;
        log::debug!("Flag at {:?} set to {}", coords, cell.is_flagged);
        Ok(MarkOutcome::Changed)
    }

    /// Text form of the player-visible board, see [`serialize`].
    pub fn state(&self) -> String {
        serialize(&self.grid)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_game(self)
    }

    fn apply(&mut self, coords: Coord2, outcome: RevealOutcome) {
        match outcome {
            RevealOutcome::AlreadyOpen => {}
            RevealOutcome::Mine => {
                // a chord may open more than one mine, the first one counts
                if self.triggered_mine.is_none() {
                    self.triggered_mine = Some(coords);
                }
                self.finish(GameStatus::Lost);
            }
            RevealOutcome::Cascaded(count) => {
                self.revealed_safe_count += count;
                if self.revealed_safe_count == self.total_safe_cells {
                    self.finish(GameStatus::Won);
                }
            }
        }
    }

    fn finish(&mut self, status: GameStatus) {
        if self.status.is_finished() {
            return;
        }
        log::debug!("Game ended: {:?}", status);
        self.status = status;
    }

    fn check_playing(&self) -> Result<()> {
        if self.status.is_finished() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }
}
