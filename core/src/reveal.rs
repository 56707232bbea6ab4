use alloc::collections::{BTreeSet, VecDeque};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Target was already open or is protected by a flag, nothing changed.
    AlreadyOpen,
    /// Target was a mine, only that cell was opened.
    Mine,
    /// Safe cells opened by this call, the target included.
    Cascaded(CellCount),
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::AlreadyOpen)
    }

    pub const fn opened_safe(self) -> CellCount {
        match self {
            Self::Cascaded(count) => count,
            Self::AlreadyOpen | Self::Mine => 0,
        }
    }
}

/// Opens the cell at `coords`, flood-filling outwards from cells with no adjacent mines.
///
/// The cascade stops at numbered cells (opened, but their neighbors are not),
/// never opens a mine, and treats flagged cells according to `flag_cascade`. A
/// flagged target is never opened regardless of policy. The fill runs off an
/// explicit queue with a seen-set, so each cell is visited at most once and the
/// stack depth does not grow with the board.
pub fn reveal(grid: &mut Grid, coords: Coord2, flag_cascade: FlagCascade) -> Result<RevealOutcome> {
    let coords = grid.validate_coords(coords)?;
    let target = grid[coords];

    if target.is_revealed || target.is_flagged {
        return Ok(RevealOutcome::AlreadyOpen);
    }

    if target.is_mine {
        grid[coords].is_revealed = true;
        log::debug!("Opened mine at {:?}", coords);
        return Ok(RevealOutcome::Mine);
    }

    let mut opened: CellCount = 0;
    let mut seen = BTreeSet::from([coords]);
    let mut to_visit = VecDeque::from([coords]);

    while let Some(visit_coords) = to_visit.pop_front() {
        let cell = &mut grid[visit_coords];
        cell.is_flagged = false;
        cell.is_revealed = true;
        opened += 1;
        let adjacent_mines = cell.adjacent_mines;
        log::trace!(
            "Opened cell at {:?}, adjacent mines: {}",
            visit_coords,
            adjacent_mines
        );

        if adjacent_mines != 0 {
            continue;
        }

        for pos in grid.neighbors(visit_coords) {
            let neighbor = grid[pos];
            let blocked = neighbor.is_revealed
                || neighbor.is_mine
                || (neighbor.is_flagged && flag_cascade == FlagCascade::Skip);
            if !blocked && seen.insert(pos) {
                to_visit.push_back(pos);
            }
        }
    }

    log::debug!("Opened {} cells starting at {:?}", opened, coords);
    Ok(RevealOutcome::Cascaded(opened))
}
