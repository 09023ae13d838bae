//! The access-permission sense flag (`spec.md` §4.3, GLOSSARY "Sense").

/// Whether an interaction is harmful (`Negative`) or cooperative
/// (`Positive`) for the purpose of [the access permission check].
///
/// [the access permission check]: https://en.wikipedia.org/wiki/Hamming_distance
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Sense {
    /// Kill, reproduce-overwrite: `r <= h` permits.
    Negative,
    /// Share, neighbor-public RAM write: `r >= h` permits.
    Positive,
}

impl Sense {
    /// Interprets the `COMBINE_SENSE` configuration value (0 or 1).
    pub fn from_config_flag(flag: u8) -> Sense {
        if flag == 0 {
            Sense::Negative
        } else {
            Sense::Positive
        }
    }
}
