use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;

use crate::common::libs::tm1637::errors::TmError;
use crate::common::libs::tm1637::mappings::GpioPinValue;

/// The two-wire TM1637 link. Write only: the acknowledge slot is clocked but
/// DIO is never read back.
pub struct Tm1637Bus<CLK, DIO, DELAY> {
    clk: CLK,
    dio: DIO,
    delay_fn: DELAY,
    delay_us: u16,
}

impl<CLK, DIO, DELAY, E> Tm1637Bus<CLK, DIO, DELAY>
where
    CLK: OutputPin<Error = E>,
    DIO: OutputPin<Error = E>,
    DELAY: DelayUs<u16>,
{
    pub const fn new(clk: CLK, dio: DIO, delay_fn: DELAY, delay_us: u16) -> Self {
        Self {
            clk,
            dio,
            delay_fn,
            delay_us,
        }
    }

    /// Pulls both lines low, CLK first.
    pub fn idle_low(&mut self) -> Result<(), TmError<E>> {
        self.clk.set_low()?;
        self.dio.set_low()?;
        self.pulse_delay();

        Ok(())
    }

    /// This tells the TM1637 that data input starts.
    /// DIO falls while CLK is still high from the previous stop.
    #[inline]
    pub fn start(&mut self) -> Result<(), TmError<E>> {
        self.dio.set_low()?;
        self.pulse_delay();
        self.clk.set_low()?;
        self.pulse_delay();

        Ok(())
    }

    /// This tells the TM1637 that data input stops.
    /// DIO rises while CLK is high.
    #[inline]
    pub fn stop(&mut self) -> Result<(), TmError<E>> {
        self.dio.set_low()?;
        self.clk.set_high()?;
        self.pulse_delay();
        self.dio.set_high()?;
        self.pulse_delay();

        Ok(())
    }

    /// Writes a byte bit by bit, LSB first, followed by the acknowledge clock.
    pub fn write_byte(&mut self, byte: u8) -> Result<(), TmError<E>> {
        log::trace!("[Tm1637Bus] write byte {:#04x}", byte);

        let mut data = byte;

        for _ in 0_u8..8_u8 {
            if GpioPinValue::from(data & 0x01) == GpioPinValue::High {
                self.dio.set_high()?;
            } else {
                self.dio.set_low()?;
            }

            self.clock_pulse()?;

            data >>= 1;
        }

        // ack slot; the chip pulls DIO low here but we don't look
        self.clock_pulse()
    }

    /// Hands the pins and the delay back.
    pub fn release(self) -> (CLK, DIO, DELAY) {
        (self.clk, self.dio, self.delay_fn)
    }

    fn clock_pulse(&mut self) -> Result<(), TmError<E>> {
        self.clk.set_high()?;
        self.pulse_delay();
        self.clk.set_low()?;
        self.pulse_delay();

        Ok(())
    }

    #[inline]
    fn pulse_delay(&mut self) {
        self.delay_fn.delay_us(self.delay_us);
    }
}
