//! The 32-slot memory-mapped bank I/O (`spec.md` §4.4).

#![warn(missing_docs)]

pub mod bank;
pub mod counters;
pub mod special;

pub use bank::{decode_bank, MemBank};
pub use counters::BankCounters;
pub use special::{energy_bucket, read_special, write_special};

use pond_access::access_allowed;
use pond_common::{Mt19937, Sense};
use pond_grid::Cell;

/// Reads the memory-mapped slot `ptr` for `cell`. Neighbor-public reads are
/// unrestricted by the access permission check (`spec.md` §4.4); `neighbor`
/// may be omitted when the caller already knows `ptr` does not address the
/// input bank, but a missing neighbor on an input-bank read yields `0`.
pub fn read_mem(cell: &Cell, neighbor: Option<&Cell>, ptr: u8, counters: &mut BankCounters) -> u8 {
    match decode_bank(ptr) {
        MemBank::Special => {
            counters.special_reads += 1;
            read_special(cell, ptr)
        }
        MemBank::Private => {
            counters.private_reads += 1;
            cell.ram[(ptr & 7) as usize]
        }
        MemBank::Output => {
            counters.output_reads += 1;
            cell.ram[8 + (ptr & 7) as usize]
        }
        MemBank::Input => {
            counters.input_reads += 1;
            neighbor.map(|n| n.ram[8 + (ptr & 7) as usize]).unwrap_or(0)
        }
    }
}

/// Writes `value` to the memory-mapped slot `ptr`. A neighbor-public write
/// requires the facing neighbor to pass the positive-sense access check
/// (`spec.md` §4.3, §4.4); a missing neighbor silently drops the write.
pub fn write_mem(
    cell: &mut Cell,
    neighbor: Option<&mut Cell>,
    ptr: u8,
    value: u8,
    counters: &mut BankCounters,
    rng: &mut Mt19937,
) {
    match decode_bank(ptr) {
        MemBank::Special => {
            counters.special_writes += 1;
            write_special(cell, ptr, value);
        }
        MemBank::Private => {
            counters.private_writes += 1;
            cell.ram[(ptr & 7) as usize] = value;
        }
        MemBank::Output => {
            counters.output_writes += 1;
            cell.ram[8 + (ptr & 7) as usize] = value;
        }
        MemBank::Input => {
            counters.input_writes += 1;
            if let Some(n) = neighbor {
                if access_allowed(n, cell.logo, Sense::Positive, rng) {
                    n.ram[8 + (ptr & 7) as usize] = value;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn private_bank_round_trips() {
        let mut cell = Cell::new_empty(16);
        let mut counters = BankCounters::default();
        write_mem(&mut cell, None, 0x0a, 42, &mut counters, &mut Mt19937::new(1));
        assert_eq!(cell.ram[2], 42);
        assert_eq!(
            read_mem(&cell, None, 0x0a, &mut counters),
            42
        );
        assert_eq!(counters.private_writes, 1);
        assert_eq!(counters.private_reads, 1);
    }

    #[test]
    fn output_bank_round_trips_and_is_visible_to_input_reads() {
        let mut cell = Cell::new_empty(16);
        let mut counters = BankCounters::default();
        write_mem(&mut cell, None, 0x10, 9, &mut counters, &mut Mt19937::new(1));
        assert_eq!(cell.ram[8], 9);
        let neighbor_read = read_mem(&cell, None, 0x10, &mut counters);
        assert_eq!(neighbor_read, 9);
    }

    #[test]
    fn input_bank_read_is_unrestricted() {
        let mut neighbor = Cell::new_empty(16);
        neighbor.parent_id = 99;
        neighbor.ram[8] = 77;
        let cell = Cell::new_empty(16);
        let mut counters = BankCounters::default();
        let v = read_mem(&cell, Some(&neighbor), 0x18, &mut counters);
        assert_eq!(v, 77);
        assert_eq!(counters.input_reads, 1);
    }

    #[test]
    fn input_bank_write_requires_access_and_is_gated() {
        let mut cell = Cell::new_empty(16);
        cell.logo = 0;
        let mut neighbor = Cell::new_empty(16);
        neighbor.parent_id = 0; // parentless target always passes the check
        let mut counters = BankCounters::default();
        write_mem(
            &mut cell,
            Some(&mut neighbor),
            0x18,
            55,
            &mut counters,
            &mut Mt19937::new(1),
        );
        assert_eq!(neighbor.ram[8], 55);
        assert_eq!(counters.input_writes, 1);
    }

    #[test]
    fn missing_neighbor_drops_input_write_without_panicking() {
        let mut cell = Cell::new_empty(16);
        let mut counters = BankCounters::default();
        write_mem(&mut cell, None, 0x18, 1, &mut counters, &mut Mt19937::new(1));
        assert_eq!(counters.input_writes, 1);
    }
}
