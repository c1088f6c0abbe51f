//! Driver library for the Solomon Systech SSD1306 dot matrix OLED display driver, providing
//! fixed-width 5x7 text rendering over I2C.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate core;

extern crate embedded_hal as hal;

pub mod command;
pub mod display;
pub mod font;
pub mod interface;

/// Errors that driver operations can return.
///
/// The driver introduces no failure modes of its own beyond argument validation: every bus-level
/// failure is carried through verbatim from the interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// The underlying bus transaction failed. Carries the interface's own error.
    Bus(E),
    /// A row, column, or character outside the displayable range was given.
    InvalidArgument,
}

// Re-exports for primary API.
pub use command::{consts, Command, MemoryMode};
pub use display::Display;
pub use interface::i2c::I2cInterface;
