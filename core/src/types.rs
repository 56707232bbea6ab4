/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Maps board coordinates onto the `[x, y]` index of the backing array.
pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Number of cells on a board of the given size.
pub const fn area((width, height): Coord2) -> CellCount {
    (width as CellCount).saturating_mul(height as CellCount)
}

/// Iterates over the up-to-8 cells surrounding `center`, clipped to the board.
///
/// Yields row by row starting at the top-left neighbor. Holds no borrow on the
/// board, so the board may be mutated while iterating.
#[derive(Clone, Debug)]
pub struct Neighbors {
    center: Coord2,
    size: Coord2,
    step: u8,
}

impl Neighbors {
    pub(crate) fn new(center: Coord2, size: Coord2) -> Self {
        Self {
            center,
            size,
            step: 0,
        }
    }
}

impl Iterator for Neighbors {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        // steps walk the 3x3 block around the center, 4 is the center itself
        while self.step < 9 {
            let step = self.step;
            self.step += 1;
            if step == 4 {
                continue;
            }

            let x = i16::from(self.center.0) + i16::from(step % 3) - 1;
            let y = i16::from(self.center.1) + i16::from(step / 3) - 1;
            if x < 0 || y < 0 || x >= i16::from(self.size.0) || y >= i16::from(self.size.1) {
                continue;
            }

            return Some((x as Coord, y as Coord));
        }
        None
    }
}
