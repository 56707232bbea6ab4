use alloc::vec::Vec;
use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Uniform placement seeded from a `u64`, so a seed always yields the same board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomPlacer {
    seed: u64,
}

impl RandomPlacer {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MinePlacer for RandomPlacer {
    fn place(self, grid: &mut Grid, mines: CellCount) -> Result<()> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        place(grid, mines, &mut rng)
    }
}

/// Marks `mines` distinct cells of `grid` as mines, chosen uniformly without replacement.
pub fn place<R: Rng + ?Sized>(grid: &mut Grid, mines: CellCount, rng: &mut R) -> Result<()> {
    let total = grid.total_cells();
    if mines >= total {
        log::warn!(
            "Board cannot hold {} mines, only {} cells available",
            mines,
            total
        );
        return Err(GameError::InvalidConfiguration);
    }

    let width = CellCount::from(grid.width());
    let mut slots: Vec<CellCount> = (0..total).collect();

    // partial Fisher-Yates: only the first `mines` slots get shuffled into place
    for i in 0..mines {
        let pick = rng.random_range(i..total);
        slots.swap(usize::from(i), usize::from(pick));

        let slot = slots[usize::from(i)];
        let coords = ((slot % width) as Coord, (slot / width) as Coord);
        grid[coords].is_mine = true;
    }

    log::debug!("Placed {} mines on a {:?} board", mines, grid.size());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_exact_count() {
        for seed in 0..32 {
            let mut grid = Grid::new((9, 7));
            RandomPlacer::new(seed).place(&mut grid, 20).unwrap();
            assert_eq!(grid.mine_count(), 20, "seed {}", seed);
        }
    }

    #[test]
    fn same_seed_same_board() {
        let mut first = Grid::new((10, 10));
        let mut second = Grid::new((10, 10));

        RandomPlacer::new(1234).place(&mut first, 10).unwrap();
        RandomPlacer::new(1234).place(&mut second, 10).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn nearly_full_board_leaves_one_free_cell() {
        let mut grid = Grid::new((4, 4));

        RandomPlacer::new(7).place(&mut grid, 15).unwrap();

        assert_eq!(grid.mine_count(), 15);
        assert_eq!(grid.iter().filter(|(_, cell)| !cell.is_mine).count(), 1);
    }

    #[test]
    fn full_board_is_rejected() {
        let mut grid = Grid::new((3, 3));

        assert_eq!(
            RandomPlacer::new(0).place(&mut grid, 9),
            Err(GameError::InvalidConfiguration)
        );
        assert_eq!(grid.mine_count(), 0);
    }

    #[test]
    fn every_cell_can_receive_a_mine() {
        let mut hits = Grid::new((3, 3));
        for seed in 0..200 {
            let mut grid = Grid::new((3, 3));
            RandomPlacer::new(seed).place(&mut grid, 1).unwrap();
            for (coords, cell) in grid.iter() {
                if cell.is_mine {
                    hits[coords].adjacent_mines = hits[coords].adjacent_mines.saturating_add(1);
                }
            }
        }

        assert!(hits.iter().all(|(_, cell)| cell.adjacent_mines > 0));
    }
}
