use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Strategy that decides where the mines of a fresh board go.
pub trait MinePlacer {
    /// Sets `is_mine` on exactly `mines` cells of a blank `grid`.
    fn place(self, grid: &mut Grid, mines: CellCount) -> Result<()>;
}

/// Fills in `adjacent_mines` for every safe cell once mines are in place.
pub fn count_adjacent(grid: &mut Grid) {
    let (width, height) = grid.size();
    for x in 0..width {
        for y in 0..height {
            let coords = (x, y);
            if grid[coords].is_mine {
                continue;
            }
            let count = grid
                .neighbors(coords)
                .filter(|&pos| grid[pos].is_mine)
                .count();
            // at most 8 neighbors
            grid[coords].adjacent_mines = count as u8;
        }
    }
}

/// Builds a ready-to-play grid: mines from `placer`, then adjacency counts.
pub fn populate(size: Coord2, mines: CellCount, placer: impl MinePlacer) -> Result<Grid> {
    let mut grid = Grid::new(size);
    placer.place(&mut grid, mines)?;
    count_adjacent(&mut grid);

    let placed = grid.mine_count();
    if placed != mines {
        log::warn!(
            "Placed mine count mismatch, actual: {}, requested: {}",
            placed,
            mines
        );
        return Err(GameError::InvalidConfiguration);
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_matches_hand_built_board() {
        // * . .
        // . . .
        // . . *
        let grid = populate((3, 3), 2, FixedPlacer::new(&[(0, 0), (2, 2)])).unwrap();

        let expected = [[0, 1, 0], [1, 2, 1], [0, 1, 0]];
        for y in 0..3u8 {
            for x in 0..3u8 {
                let cell = grid[(x, y)];
                if !cell.is_mine {
                    assert_eq!(
                        cell.adjacent_mines, expected[y as usize][x as usize],
                        "count at {:?}",
                        (x, y)
                    );
                }
            }
        }
        assert!(grid[(0, 0)].is_mine);
        assert!(grid[(2, 2)].is_mine);
    }

    #[test]
    fn fully_surrounded_cell_counts_eight() {
        let ring = [
            (0, 0),
            (1, 0),
            (2, 0),
            (0, 1),
            (2, 1),
            (0, 2),
            (1, 2),
            (2, 2),
        ];
        let grid = populate((3, 3), 8, FixedPlacer::new(&ring)).unwrap();

        assert_eq!(grid[(1, 1)].adjacent_mines, 8);
    }

    #[test]
    fn populate_rejects_count_mismatch() {
        assert_eq!(
            populate((3, 3), 2, FixedPlacer::new(&[(0, 0)])),
            Err(GameError::InvalidConfiguration)
        );
    }

    #[test]
    fn populate_leaves_cells_closed() {
        let grid = populate((5, 4), 6, RandomPlacer::new(9)).unwrap();

        assert!(
            grid.iter()
                .all(|(_, cell)| !cell.is_revealed && !cell.is_flagged)
        );
    }
}
