//! Shared foundational types used across the Nanopond-CH simulation crates.
//!
//! This crate provides the MT19937 pseudo-random generator, the bit-width
//! constants the rest of the workspace keys off, and the 32-opcode table.

#![warn(missing_docs)]

pub mod opcode;
pub mod rng;
pub mod sense;

pub use opcode::{Opcode, INST_CHARS};
pub use rng::Mt19937;
pub use sense::Sense;

/// Bit width of an opcode / genome byte / logo / facing value.
pub const INST_BITS: u32 = 5;
/// Mask for a 5-bit opcode / logo / facing value (0..=31).
pub const INST_MASK: u8 = 0x1f;
/// Mask for the 8-bit VM register.
pub const REG_MASK: u8 = 0xff;
/// Mask for the 5-bit memory pointer.
pub const MEM_MASK: u8 = 0x1f;
/// Mask applied when writing the `logo` special register.
pub const LOGO_MASK: u8 = 0x1f;
/// Mask applied when writing the `facing` special register.
pub const FACING_MASK: u8 = 0x1f;

/// The opcode value used to fill a cleared genome and to pad a fresh output
/// buffer; also the value that starts every genome before it is ever seeded.
pub const OPCODE_STOP: u8 = Opcode::Stop as u8;
