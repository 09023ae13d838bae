//! Per-bank memory access counters (`spec.md` §4.4, §4.7).

/// Read/write counters for each of the four memory banks, accumulated
/// since the last statistics report.
#[derive(Clone, Copy, Default, Debug)]
pub struct BankCounters {
    /// Reads of the special (identity/energy) bank.
    pub special_reads: u64,
    /// Reads of the private RAM bank.
    pub private_reads: u64,
    /// Reads of the cell's own public ("output") RAM bank.
    pub output_reads: u64,
    /// Reads of the facing neighbor's public ("input") RAM bank.
    pub input_reads: u64,
    /// Writes to the special bank.
    pub special_writes: u64,
    /// Writes to the private RAM bank.
    pub private_writes: u64,
    /// Writes to the cell's own public ("output") RAM bank.
    pub output_writes: u64,
    /// Writes to the facing neighbor's public ("input") RAM bank.
    pub input_writes: u64,
}

impl BankCounters {
    /// Resets every counter to zero, as done at each report boundary.
    pub fn reset(&mut self) {
        *self = BankCounters::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_zeroes_all_fields() {
        let mut counters = BankCounters {
            special_reads: 1,
            private_reads: 2,
            output_reads: 3,
            input_reads: 4,
            special_writes: 5,
            private_writes: 6,
            output_writes: 7,
            input_writes: 8,
        };
        counters.reset();
        assert_eq!(counters.special_reads, 0);
        assert_eq!(counters.input_writes, 0);
    }
}
