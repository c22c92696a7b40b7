use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;

use crate::common::libs::tm1637::bus::Tm1637Bus;
use crate::common::libs::tm1637::errors::TmError;
use crate::common::libs::tm1637::mappings::{Isa, Power, ADDRESS_MASK, BRIGHTNESS_MASK};

/// The three command forms the driver sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Auto-increment write mode.
    Data,
    /// Display register to write next; only the low 3 bits are used.
    Address(u8),
    DisplayControl { power: Power, brightness: u8 },
}

impl Command {
    #[must_use]
    pub const fn to_byte(self) -> u8 {
        match self {
            Self::Data => Isa::DataCommand as u8,
            Self::Address(address) => Isa::AddressCommand as u8 | (address & ADDRESS_MASK),
            Self::DisplayControl { power, brightness } => {
                Isa::DisplayControl as u8 | power as u8 | (brightness & BRIGHTNESS_MASK)
            }
        }
    }
}

impl<CLK, DIO, DELAY, E> Tm1637Bus<CLK, DIO, DELAY>
where
    CLK: OutputPin<Error = E>,
    DIO: OutputPin<Error = E>,
    DELAY: DelayUs<u16>,
{
    /// Sends a command alone in its own frame.
    pub fn send_command(&mut self, command: Command) -> Result<(), TmError<E>> {
        self.start()?;
        self.write_byte(command.to_byte())?;
        self.stop()
    }

    /// Data command, then address command with the segment bytes in one frame,
    /// then the display control command. The chip keeps the bytes but only
    /// shows them reliably once the display control is asserted again.
    pub fn send_segments(
        &mut self,
        address: u8,
        segments: &[u8],
        control: Command,
    ) -> Result<(), TmError<E>> {
        self.send_command(Command::Data)?;

        self.start()?;
        self.write_byte(Command::Address(address).to_byte())?;
        for segment in segments {
            self.write_byte(*segment)?;
        }
        self.stop()?;

        self.send_command(control)
    }

    /// Data command followed by the display control command; no register is written.
    pub fn send_control(&mut self, control: Command) -> Result<(), TmError<E>> {
        self.send_command(Command::Data)?;
        self.send_command(control)
    }
}
