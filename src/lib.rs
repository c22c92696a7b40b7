#![deny(clippy::all)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::print_stdout)]
#![allow(
    clippy::missing_docs_in_private_items,
    clippy::implicit_return,
    clippy::similar_names,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]

//! Bit-banged driver for TM1637 four digit seven-segment LED displays.
//!
//! The driver owns the CLK and DIO output pins, keeps a copy of every segment
//! byte it transmits and renders decimal and hexadecimal numbers, text, dot
//! points and brightness changes onto the display.
//!
//! ```no_run
//! use tm1637_display::common::libs::tm1637::emulator::WireLog;
//! use tm1637_display::common::libs::tm1637::Tm1637;
//! use tm1637_display::common::models::display_config::DisplayConfig;
//! use tm1637_display::helpers::delay::NoDelay;
//!
//! let wire = WireLog::new();
//! let (clk, dio) = wire.pins();
//! let mut tm = Tm1637::new(clk, dio, NoDelay {}, DisplayConfig::default()).unwrap();
//! tm.show_number(-42).unwrap();
//! ```

pub mod common;
pub mod constants;
pub mod features;
pub mod helpers;

pub use crate::common::errors::common_errors::ConfigError;
pub use crate::common::libs::tm1637::errors::{DecodeError, FormatError, TmError};
pub use crate::common::libs::tm1637::mappings::{Brightness, Power};
pub use crate::common::libs::tm1637::Tm1637;
pub use crate::common::models::display_config::DisplayConfig;
