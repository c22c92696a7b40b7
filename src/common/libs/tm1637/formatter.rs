#![allow(clippy::cast_possible_truncation)]

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;

use crate::common::libs::tm1637::errors::{FormatError, TmError};
use crate::common::libs::tm1637::mappings::MINUS;
use crate::common::libs::tm1637::Tm1637;

pub const DECIMAL_MAX: i32 = 9999;
pub const DECIMAL_MIN: i32 = -999;

/// Shown instead of a decimal number that does not fit.
pub const OVERFLOW_SENTINEL: i32 = 0xFFFF;

/// Magnitude of `n` if it fits on four digits, sign included.
pub const fn decimal_magnitude(n: i32) -> Result<u32, FormatError> {
    if n > DECIMAL_MAX || n < DECIMAL_MIN {
        return Err(FormatError::OutOfRange(n));
    }

    Ok(n.unsigned_abs())
}

/// Digit the minus sign takes for a negative number: right before its
/// leading digit.
#[must_use]
pub const fn minus_position(magnitude: u32) -> u8 {
    if magnitude < 10 {
        2
    } else if magnitude < 100 {
        1
    } else {
        0
    }
}

const fn nibble(value: u32, shift: u32) -> u8 {
    ((value >> shift) & 0x0F) as u8
}

impl<CLK, DIO, DELAY, E> Tm1637<CLK, DIO, DELAY>
where
    CLK: OutputPin<Error = E>,
    DIO: OutputPin<Error = E>,
    DELAY: DelayUs<u16>,
{
    /// Shows `n` in decimal on positions 0 to 3 with leading zeros blanked.
    /// Anything outside -999..=9999 shows `FFFF`.
    pub fn show_number(&mut self, n: i32) -> Result<(), TmError<E>> {
        let magnitude = match decimal_magnitude(n) {
            Ok(magnitude) => magnitude,
            Err(e) => {
                log::warn!("[Tm1637] {}", e);
                return self.show_hex(OVERFLOW_SENTINEL);
            }
        };

        let mut leading = true;
        for (position, divisor) in [(0_u8, 1000_u32), (1, 100), (2, 10)] {
            let digit = (magnitude / divisor % 10) as u8;

            if digit == 0 && leading {
                self.clear_digit(position)?;
            } else {
                self.write_digit(digit, position)?;
                leading = false;
            }
        }
        self.write_digit((magnitude % 10) as u8, 3)?;

        if n < 0 {
            self.write_raw_segment(minus_position(magnitude), MINUS)?;
        }

        Ok(())
    }

    /// Shows the low 16 bits of `n` as four hex digits. A negative number puts
    /// a minus sign on position 0 in place of the top digit of its magnitude.
    pub fn show_hex(&mut self, n: i32) -> Result<(), TmError<E>> {
        let magnitude = n.unsigned_abs();

        if n < 0 {
            if nibble(magnitude, 12) != 0 {
                log::debug!(
                    "[Tm1637] top digit of -{:#x} is hidden by the minus sign",
                    magnitude
                );
            }
            self.write_raw_segment(0, MINUS)?;
        } else {
            self.write_digit(nibble(magnitude, 12), 0)?;
        }

        self.write_digit(nibble(magnitude, 0), 3)?;
        self.write_digit(nibble(magnitude, 4), 2)?;
        self.write_digit(nibble(magnitude, 8), 1)
    }
}
