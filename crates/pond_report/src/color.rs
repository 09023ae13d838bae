//! Visualization color function (`spec.md` §6).

use pond_grid::Cell;

/// The eight color schemes the UI can cycle through on a right-click event.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ColorScheme {
    /// `(sum(genome bytes) mod 192) + 64`.
    Kinship,
    /// `(lineage_low_byte) | 1`.
    Lineage,
    /// `73 + logo`.
    Logo,
    /// `157 + facing`.
    Facing,
    /// `floor(255 * energy / maxLivingCellEnergy)`.
    Energy1,
    /// `floor(255 * energy / maxCellEnergy)`.
    Energy2,
    /// `(sum(ram[0..7]) & 0x7f) + 128`.
    Ram0,
    /// `(sum(ram[8..15]) & 0x7f) + 128`.
    Ram1,
}

impl ColorScheme {
    /// Cycles to the next scheme in the fixed order `spec.md` §6 lists.
    pub fn next(self) -> ColorScheme {
        use ColorScheme::*;
        match self {
            Kinship => Lineage,
            Lineage => Logo,
            Logo => Facing,
            Facing => Energy1,
            Energy1 => Energy2,
            Energy2 => Ram0,
            Ram0 => Ram1,
            Ram1 => Kinship,
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme::Kinship
    }
}

/// Computes one pixel byte for `cell` under `scheme`. Returns `0` for a
/// dead cell, and for most schemes also `0` when `generation <= 1`.
pub fn color_for_cell(
    cell: &Cell,
    scheme: ColorScheme,
    max_living_cell_energy: u64,
    max_cell_energy: u64,
) -> u8 {
    if cell.energy == 0 {
        return 0;
    }
    match scheme {
        ColorScheme::Kinship => {
            if !cell.is_living() {
                return 0;
            }
            let sum: u32 = cell.genome.iter().map(|&b| b as u32).sum();
            ((sum % 192) + 64) as u8
        }
        ColorScheme::Lineage => {
            if !cell.is_living() {
                return 0;
            }
            ((cell.lineage & 0xff) as u8) | 1
        }
        ColorScheme::Logo => {
            if !cell.is_living() {
                return 0;
            }
            73u8.wrapping_add(cell.logo)
        }
        ColorScheme::Facing => {
            if !cell.is_living() {
                return 0;
            }
            157u8.wrapping_add(cell.facing)
        }
        ColorScheme::Energy1 => {
            if !cell.is_living() || max_living_cell_energy == 0 {
                return 0;
            }
            ((255 * cell.energy) / max_living_cell_energy) as u8
        }
        ColorScheme::Energy2 => {
            if !cell.is_living() || max_cell_energy == 0 {
                return 0;
            }
            ((255 * cell.energy) / max_cell_energy) as u8
        }
        ColorScheme::Ram0 => {
            if !cell.is_living() {
                return 0;
            }
            let sum: u32 = cell.ram[0..8].iter().map(|&b| b as u32).sum();
            ((sum & 0x7f) + 128) as u8
        }
        ColorScheme::Ram1 => {
            if !cell.is_living() {
                return 0;
            }
            let sum: u32 = cell.ram[8..16].iter().map(|&b| b as u32).sum();
            ((sum & 0x7f) + 128) as u8
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pond_grid::CellStore;

    #[test]
    fn dead_cell_is_always_zero() {
        let store = CellStore::new(1, 1, 8);
        let cell = store.cell(0);
        assert_eq!(color_for_cell(cell, ColorScheme::Logo, 0, 0), 0);
    }

    #[test]
    fn non_living_cell_is_zero_under_logo_scheme() {
        let mut store = CellStore::new(1, 1, 8);
        store.cell_mut(0).energy = 10;
        store.cell_mut(0).generation = 1;
        assert_eq!(color_for_cell(store.cell(0), ColorScheme::Logo, 0, 0), 0);
    }

    #[test]
    fn logo_scheme_offsets_by_73() {
        let mut store = CellStore::new(1, 1, 8);
        store.cell_mut(0).energy = 10;
        store.cell_mut(0).generation = 2;
        store.cell_mut(0).logo = 5;
        assert_eq!(color_for_cell(store.cell(0), ColorScheme::Logo, 0, 0), 78);
    }

    #[test]
    fn energy1_scales_against_max_living_energy() {
        let mut store = CellStore::new(1, 1, 8);
        store.cell_mut(0).energy = 100;
        store.cell_mut(0).generation = 2;
        assert_eq!(
            color_for_cell(store.cell(0), ColorScheme::Energy1, 200, 0),
            127
        );
    }

    #[test]
    fn scheme_cycle_wraps_around() {
        assert_eq!(ColorScheme::Ram1.next(), ColorScheme::Kinship);
    }
}
