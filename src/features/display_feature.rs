use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;
use strum::IntoEnumIterator;

use crate::common::libs::tm1637::errors::TmError;
use crate::common::libs::tm1637::mappings::Brightness;
use crate::common::libs::tm1637::Tm1637;
use crate::constants::segment_display_text::SegmentDisplayText;

/// Numbers the demo walks through; the last one does not fit and shows `FFFF`.
pub const DEMO_NUMBERS: [i32; 7] = [0, 7, -5, -42, 1234, -999, 10000];

pub const DEMO_HEX_NUMBERS: [i32; 2] = [0xBEEF, -1];

/// Walks a display through everything the driver can show.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayFeature {}

impl DisplayFeature {
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }

    /// Runs one round of the demo. `step` is called after every visible change
    /// with a short label of what is on the display now; callers use it to
    /// pace the demo and to inspect the display.
    pub fn run_demo<CLK, DIO, DELAY, E, F>(
        &self,
        tm: &mut Tm1637<CLK, DIO, DELAY>,
        mut step: F,
    ) -> Result<(), TmError<E>>
    where
        CLK: OutputPin<Error = E>,
        DIO: OutputPin<Error = E>,
        DELAY: DelayUs<u16>,
        F: FnMut(&str),
    {
        log::debug!("[DisplayFeature] demo started");

        tm.show_text(SegmentDisplayText::BOOT)?;
        step(SegmentDisplayText::BOOT);

        for n in DEMO_NUMBERS {
            tm.show_number(n)?;
            step(&format!("number {}", n));
        }

        tm.clear()?;
        tm.show_text(SegmentDisplayText::HEX)?;
        step(SegmentDisplayText::HEX);

        for n in DEMO_HEX_NUMBERS {
            tm.show_hex(n)?;
            step(&format!("hex {}", n));
        }

        // walk the decimal point across 1234
        tm.show_number(1234)?;
        for position in 0..tm.digit_count() {
            tm.set_dot_point(position, true)?;
            step(&format!("dot point {}", position));
            tm.set_dot_point(position, false)?;
        }

        for brightness in Brightness::iter() {
            tm.set_brightness(brightness)?;
            step(&format!("brightness {}", brightness));
        }

        tm.off()?;
        step("off");
        tm.on()?;
        step("on");

        tm.show_text(SegmentDisplayText::DONE)?;
        step(SegmentDisplayText::DONE);

        log::debug!("[DisplayFeature] demo finished");

        Ok(())
    }
}
