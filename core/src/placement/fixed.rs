use super::*;

/// Places mines at exactly the given coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FixedPlacer<'a> {
    mines: &'a [Coord2],
}

impl<'a> FixedPlacer<'a> {
    pub fn new(mines: &'a [Coord2]) -> Self {
        Self { mines }
    }
}

impl MinePlacer for FixedPlacer<'_> {
    fn place(self, grid: &mut Grid, mines: CellCount) -> Result<()> {
        if mines >= grid.total_cells() || self.mines.len() != usize::from(mines) {
            return Err(GameError::InvalidConfiguration);
        }

        for &coords in self.mines {
            let coords = grid.validate_coords(coords)?;
            if grid[coords].is_mine {
                log::warn!("Mine listed twice at {:?}", coords);
                return Err(GameError::InvalidConfiguration);
            }
            grid[coords].is_mine = true;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_listed_cells() {
        let mut grid = Grid::new((3, 2));

        FixedPlacer::new(&[(2, 1), (0, 0)])
            .place(&mut grid, 2)
            .unwrap();

        assert!(grid[(2, 1)].is_mine);
        assert!(grid[(0, 0)].is_mine);
        assert_eq!(grid.mine_count(), 2);
    }

    #[test]
    fn rejects_duplicates_and_strays() {
        let mut grid = Grid::new((3, 2));
        assert_eq!(
            FixedPlacer::new(&[(1, 1), (1, 1)]).place(&mut grid, 2),
            Err(GameError::InvalidConfiguration)
        );

        let mut grid = Grid::new((3, 2));
        assert_eq!(
            FixedPlacer::new(&[(3, 0)]).place(&mut grid, 1),
            Err(GameError::OutOfBounds)
        );
    }
}
