//! Toroidal neighbor topology: 4-, 6-, or 8-connected (`spec.md` §4.2).

#![warn(missing_docs)]

use pond_config::DirectionCount;

/// The hex direction-reduction table. Indexed by the full 5-bit facing
/// value, it folds down to one of six hex directions (`spec.md` §4.2). The
/// derivation is undocumented upstream; carried as a literal constant.
pub const HEX_DIRMAP: [u8; 32] = [
    0, 1, 2, 3, 4, 5, 0, 1, 2, 3, 3, 4, 5, 0, 1, 2, 3, 4, 5, 0, 1, 2, 2, 3, 4, 5, 0, 1, 2, 3, 4, 5,
];

const FOUR_OFFSETS: [(i64, i64); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

const EIGHT_OFFSETS: [(i64, i64); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

const HEX_OFFSETS_ODD_ROW: [(i64, i64); 6] = [(1, -1), (1, 0), (1, 1), (0, 1), (-1, 0), (0, -1)];
const HEX_OFFSETS_EVEN_ROW: [(i64, i64); 6] = [(0, -1), (1, 0), (0, 1), (-1, 1), (-1, 0), (-1, -1)];

/// A toroidal grid's neighbor topology, fixed for the lifetime of a run.
#[derive(Clone, Copy, Debug)]
pub struct Topology {
    width: usize,
    height: usize,
    directions: DirectionCount,
}

impl Topology {
    /// Creates a topology over a `width` x `height` toroidal grid.
    pub fn new(width: usize, height: usize, directions: DirectionCount) -> Self {
        Topology {
            width,
            height,
            directions,
        }
    }

    /// Maps `(x, y, facing)` to the wrapped neighbor coordinate.
    pub fn neighbor(&self, x: usize, y: usize, facing: u8) -> (usize, usize) {
        let (dx, dy) = self.offset_for(y, facing);
        let nx = (x as i64 + dx).rem_euclid(self.width as i64) as usize;
        let ny = (y as i64 + dy).rem_euclid(self.height as i64) as usize;
        (nx, ny)
    }

    fn offset_for(&self, y: usize, facing: u8) -> (i64, i64) {
        match self.directions {
            DirectionCount::Four => FOUR_OFFSETS[(facing & 0b11) as usize],
            DirectionCount::Eight => EIGHT_OFFSETS[(facing & 0b111) as usize],
            DirectionCount::Six => {
                let dir = HEX_DIRMAP[(facing & 0x1f) as usize] as usize;
                if y & 1 == 1 {
                    HEX_OFFSETS_ODD_ROW[dir]
                } else {
                    HEX_OFFSETS_EVEN_ROW[dir]
                }
            }
        }
    }
}
