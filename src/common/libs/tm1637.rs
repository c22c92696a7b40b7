// ref: https://github.com/phip1611/generic-tm1637-gpio-driver-rust/blob/main/src/lib.rs
// ref: https://github.com/rustrum/tmledkey-hal-drv/blob/b5e0759c41442d4e28c0ae26ad2bc393c43f814c/src/lib.rs

pub mod bus;
pub mod commands;
pub mod emulator;
pub mod errors;
pub mod formatter;
pub mod mappings;

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;

use crate::common::libs::tm1637::bus::Tm1637Bus;
use crate::common::libs::tm1637::commands::Command;
use crate::common::libs::tm1637::errors::TmError;
use crate::common::libs::tm1637::mappings::{
    char_to_segment, digit_to_segment, Brightness, Power, BLANK, DOT_POINT,
};
use crate::common::models::display_config::DisplayConfig;
use crate::constants::default_values::DefaultValues;

/// A TM1637 driven display.
///
/// Owns both bus pins for its whole life. Positions passed to any method are
/// taken modulo the digit count and digit values modulo 16, so no call fails
/// because of an out of range argument; the only error is a pin error.
pub struct Tm1637<CLK, DIO, DELAY> {
    bus: Tm1637Bus<CLK, DIO, DELAY>,
    digit_count: u8,

    /// The segment byte last sent to each digit.
    positions: Vec<u8>,

    /// Lower 3 bits of the "display control"-command.
    brightness: u8,
    power: Power,
}

impl<CLK, DIO, DELAY, E> Tm1637<CLK, DIO, DELAY>
where
    CLK: OutputPin<Error = E>,
    DIO: OutputPin<Error = E>,
    DELAY: DelayUs<u16>,
{
    /// Takes over the pins and runs [`Tm1637::init`].
    pub fn new(
        clk: CLK,
        dio: DIO,
        delay_fn: DELAY,
        config: DisplayConfig,
    ) -> Result<Self, TmError<E>> {
        let config = config.normalized();

        let mut tm = Self {
            bus: Tm1637Bus::new(clk, dio, delay_fn, config.pulse_delay_us),
            digit_count: config.digit_count,
            positions: Vec::new(),
            brightness: config.brightness,
            power: Power::Off,
        };
        tm.init()?;

        Ok(tm)
    }

    /// Pulls both lines low, switches the display on and blanks every digit.
    pub fn init(&mut self) -> Result<(), TmError<E>> {
        log::debug!(
            "[Tm1637] init: {} digits, brightness {}",
            self.digit_count,
            self.brightness
        );

        self.bus.idle_low()?;
        self.power = Power::On;
        self.positions = vec![BLANK; usize::from(self.digit_count)];

        self.clear()
    }

    /// Shows the hex digit `value % 16` at `position`.
    pub fn write_digit(&mut self, value: u8, position: u8) -> Result<(), TmError<E>> {
        self.write_raw_segment(position, digit_to_segment(value))
    }

    /// Sends a segment byte as is. Used for patterns outside the digit table,
    /// such as the minus sign.
    pub fn write_raw_segment(&mut self, position: u8, segment: u8) -> Result<(), TmError<E>> {
        let position = self.wrap(position);
        self.positions[usize::from(position)] = segment;

        self.bus
            .send_segments(position, &[segment], self.display_control())
    }

    /// Writes consecutive digits starting at `position` in a single
    /// auto-increment frame. Bytes that would run past the last digit are dropped.
    pub fn write_segments(&mut self, position: u8, segments: &[u8]) -> Result<(), TmError<E>> {
        if segments.is_empty() {
            return Ok(());
        }

        let start = usize::from(self.wrap(position));
        let room = self.positions.len() - start;
        let segments = &segments[..segments.len().min(room)];

        self.positions[start..start + segments.len()].copy_from_slice(segments);

        self.bus
            .send_segments(self.wrap(position), segments, self.display_control())
    }

    /// Turns the decimal point of a digit on or off, leaving its other segments alone.
    pub fn set_dot_point(&mut self, position: u8, show: bool) -> Result<(), TmError<E>> {
        let position = self.wrap(position);
        let segment = self.positions[usize::from(position)];

        let segment = if show {
            segment | DOT_POINT
        } else {
            segment & !DOT_POINT
        };

        self.write_raw_segment(position, segment)
    }

    pub fn clear_digit(&mut self, position: u8) -> Result<(), TmError<E>> {
        self.write_raw_segment(position, BLANK)
    }

    /// Blanks every digit, one write per digit, lowest position first.
    pub fn clear(&mut self) -> Result<(), TmError<E>> {
        for position in 0..self.digit_count {
            self.clear_digit(position)?;
        }

        Ok(())
    }

    /// Right aligns `text` on the display; characters that don't fit are cut
    /// off on the right.
    pub fn show_text(&mut self, text: &str) -> Result<(), TmError<E>> {
        let width = usize::from(self.digit_count);

        let segments: Vec<u8> = format!("{:>width$}", text, width = width)
            .chars()
            .take(width)
            .map(char_to_segment)
            .collect();

        self.write_segments(0, &segments)
    }

    /// Intensity 1 to 8 switches the display on at brightness `val - 1`;
    /// anything above 8 counts as 8 and 0 switches it off.
    pub fn intensity(&mut self, val: u8) -> Result<(), TmError<E>> {
        if val < 1 {
            return self.off();
        }

        let val = val.min(DefaultValues::MAX_INTENSITY);
        self.power = Power::On;
        self.brightness = val - 1;

        self.bus.send_control(self.display_control())
    }

    pub fn set_brightness(&mut self, brightness: Brightness) -> Result<(), TmError<E>> {
        self.intensity(brightness as u8 + 1)
    }

    pub fn on(&mut self) -> Result<(), TmError<E>> {
        self.power = Power::On;
        self.bus.send_control(self.display_control())
    }

    pub fn off(&mut self) -> Result<(), TmError<E>> {
        self.power = Power::Off;
        self.bus.send_control(self.display_control())
    }

    #[must_use]
    pub const fn digit_count(&self) -> u8 {
        self.digit_count
    }

    #[must_use]
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    #[must_use]
    pub const fn power(&self) -> Power {
        self.power
    }

    #[must_use]
    pub fn is_on(&self) -> bool {
        self.power == Power::On
    }

    /// The segment byte last sent to each digit.
    #[must_use]
    pub fn segments(&self) -> &[u8] {
        &self.positions
    }

    /// Gives the pins and the delay back.
    pub fn release(self) -> (CLK, DIO, DELAY) {
        self.bus.release()
    }

    const fn wrap(&self, position: u8) -> u8 {
        position % self.digit_count
    }

    const fn display_control(&self) -> Command {
        Command::DisplayControl {
            power: self.power,
            brightness: self.brightness,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{display, display_with};
    use super::*;
    use crate::common::libs::tm1637::emulator::{decode_frames, Line, VirtualTm1637, WireLog};
    use crate::common::libs::tm1637::mappings::{GpioPinValue, MINUS, SEGMENT_TABLE};
    use crate::helpers::delay::NoDelay;

    #[test]
    fn init_pulls_the_lines_low_and_blanks_every_digit() {
        let wire = WireLog::new();
        let (clk, dio) = wire.pins();
        let tm = Tm1637::new(clk, dio, NoDelay {}, DisplayConfig::default()).unwrap();

        let events = wire.events();
        assert_eq!(events[0].line, Line::Clk);
        assert_eq!(events[0].level, GpioPinValue::Low);
        assert_eq!(events[1].line, Line::Dio);
        assert_eq!(events[1].level, GpioPinValue::Low);

        let frames = decode_frames(&events).unwrap();
        let mut expected = Vec::new();
        for position in 0..4 {
            expected.push(vec![0x40]);
            expected.push(vec![0xC0 | position, 0x00]);
            expected.push(vec![0x8F]);
        }
        assert_eq!(frames, expected);

        assert_eq!(tm.segments(), &[0, 0, 0, 0]);
        assert!(tm.is_on());
        assert_eq!(tm.brightness(), 7);
    }

    #[test]
    fn unsupported_digit_count_falls_back_to_four() {
        let (tm, _) = display_with(DisplayConfig {
            digit_count: 0,
            ..DisplayConfig::default()
        });
        assert_eq!(tm.digit_count(), 4);
        assert_eq!(tm.segments().len(), 4);
    }

    #[test]
    fn digit_write_is_three_frames() {
        let (mut tm, wire) = display();
        tm.write_digit(5, 1).unwrap();

        assert_eq!(
            decode_frames(&wire.events()).unwrap(),
            vec![vec![0x40], vec![0xC1, 0x6D], vec![0x8F]]
        );
        assert_eq!(tm.segments()[1], 0x6D);
    }

    #[test]
    fn value_and_position_wrap_instead_of_failing() {
        let (mut tm, wire) = display();
        tm.write_digit(17, 6).unwrap();

        assert_eq!(
            decode_frames(&wire.events()).unwrap(),
            vec![vec![0x40], vec![0xC2, 0x06], vec![0x8F]]
        );
        assert_eq!(tm.segments(), &[0, 0, 0x06, 0]);
    }

    #[test]
    fn dot_point_round_trip_restores_the_digit() {
        let (mut tm, _) = display();
        tm.write_digit(7, 2).unwrap();

        tm.set_dot_point(2, true).unwrap();
        assert_eq!(tm.segments()[2], SEGMENT_TABLE[7] | DOT_POINT);

        tm.set_dot_point(2, false).unwrap();
        assert_eq!(tm.segments()[2], SEGMENT_TABLE[7]);
    }

    #[test]
    fn dot_point_on_a_minus_sign_sends_0xc0() {
        let (mut tm, wire) = display();
        tm.write_raw_segment(1, MINUS).unwrap();
        wire.take_events();

        tm.set_dot_point(5, true).unwrap();

        assert_eq!(
            decode_frames(&wire.events()).unwrap(),
            vec![vec![0x40], vec![0xC1, 0xC0], vec![0x8F]]
        );
    }

    #[test]
    fn clear_zeroes_the_buffer_and_the_device() {
        let wire = WireLog::new();
        let (clk, dio) = wire.pins();
        let mut tm = Tm1637::new(
            clk,
            dio,
            NoDelay {},
            DisplayConfig {
                digit_count: 6,
                ..DisplayConfig::default()
            },
        )
        .unwrap();

        tm.show_text("8.8.8.").unwrap();
        tm.clear().unwrap();

        assert!(tm.segments().iter().all(|s| *s == 0));
        let device = VirtualTm1637::replay(&wire.events()).unwrap();
        assert_eq!(device.digits(6), &[0; 6]);
    }

    #[test]
    fn clear_goes_through_the_digits_in_order() {
        let (mut tm, wire) = display();
        tm.clear().unwrap();

        let addresses: Vec<u8> = decode_frames(&wire.events())
            .unwrap()
            .into_iter()
            .filter(|f| f[0] & 0xC0 == 0xC0)
            .map(|f| f[0])
            .collect();
        assert_eq!(addresses, vec![0xC0, 0xC1, 0xC2, 0xC3]);
    }

    #[test]
    fn intensity_zero_is_off() {
        let (mut tm, wire) = display();
        tm.intensity(0).unwrap();
        let by_intensity = decode_frames(&wire.take_events()).unwrap();

        let (mut other, other_wire) = display();
        other.off().unwrap();
        let by_off = decode_frames(&other_wire.take_events()).unwrap();

        assert_eq!(by_intensity, by_off);
        assert_eq!(by_intensity, vec![vec![0x40], vec![0x87]]);
        assert!(!tm.is_on());
        assert_eq!(tm.brightness(), 7);
    }

    #[test]
    fn intensity_above_eight_counts_as_eight() {
        let (mut tm, wire) = display();
        tm.intensity(9).unwrap();
        let nine = decode_frames(&wire.take_events()).unwrap();
        tm.intensity(8).unwrap();
        let eight = decode_frames(&wire.take_events()).unwrap();

        assert_eq!(nine, eight);
        assert_eq!(tm.brightness(), 7);
    }

    #[test]
    fn intensity_sets_brightness_and_power() {
        let (mut tm, wire) = display();
        tm.off().unwrap();
        wire.take_events();

        tm.intensity(3).unwrap();

        assert_eq!(
            decode_frames(&wire.events()).unwrap(),
            vec![vec![0x40], vec![0x8A]]
        );
        assert_eq!(tm.brightness(), 2);
        assert!(tm.is_on());
        assert_eq!(tm.segments(), &[0, 0, 0, 0]);
    }

    #[test]
    fn set_brightness_matches_intensity() {
        let (mut tm, wire) = display();
        tm.set_brightness(Brightness::L2).unwrap();

        assert_eq!(
            decode_frames(&wire.events()).unwrap(),
            vec![vec![0x40], vec![0x8A]]
        );
    }

    #[test]
    fn on_and_off_keep_brightness_and_digits() {
        let (mut tm, wire) = display();
        tm.intensity(2).unwrap();
        tm.write_digit(3, 0).unwrap();

        tm.off().unwrap();
        tm.on().unwrap();

        assert_eq!(tm.brightness(), 1);
        assert_eq!(tm.segments()[0], SEGMENT_TABLE[3]);

        let device = VirtualTm1637::replay(&wire.events()).unwrap();
        assert!(device.is_on());
        assert_eq!(device.brightness(), 1);
    }

    #[test]
    fn later_writes_carry_the_current_display_control() {
        let (mut tm, wire) = display();
        tm.off().unwrap();
        wire.take_events();

        tm.write_digit(1, 0).unwrap();

        let frames = decode_frames(&wire.events()).unwrap();
        assert_eq!(frames.last(), Some(&vec![0x87]));
    }

    #[test]
    fn segments_run_in_one_auto_increment_frame() {
        let (mut tm, wire) = display();
        tm.write_segments(2, &[0x06, 0x5B, 0x4F]).unwrap();

        assert_eq!(
            decode_frames(&wire.events()).unwrap(),
            vec![vec![0x40], vec![0xC2, 0x06, 0x5B], vec![0x8F]]
        );
        assert_eq!(tm.segments(), &[0, 0, 0x06, 0x5B]);
    }

    #[test]
    fn text_is_right_aligned() {
        let (mut tm, wire) = display();
        tm.show_text("Hi").unwrap();

        let expected = [0, 0, char_to_segment('H'), char_to_segment('i')];
        assert_eq!(tm.segments(), &expected);

        let device = VirtualTm1637::replay(&wire.events()).unwrap();
        assert_eq!(device.digits(4), &expected);
    }

    #[test]
    fn long_text_is_cut_on_the_right() {
        let (mut tm, _) = display();
        tm.show_text("done!").unwrap();

        let expected: Vec<u8> = "done".chars().map(char_to_segment).collect();
        assert_eq!(tm.segments(), expected.as_slice());
    }

    #[test]
    fn release_hands_the_pins_back() {
        let (tm, wire) = display();
        let (mut clk, _dio, _delay) = tm.release();

        clk.set_high().unwrap();
        assert_eq!(wire.len(), 1);
    }

    #[derive(Debug, PartialEq)]
    struct PinFault;

    struct FaultyPin {
        fail_after: usize,
    }

    impl OutputPin for FaultyPin {
        type Error = PinFault;

        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.tick()
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.tick()
        }
    }

    impl FaultyPin {
        fn tick(&mut self) -> Result<(), PinFault> {
            if self.fail_after == 0 {
                return Err(PinFault);
            }
            self.fail_after -= 1;
            Ok(())
        }
    }

    #[test]
    fn pin_errors_propagate() {
        let result = Tm1637::new(
            FaultyPin { fail_after: 10 },
            FaultyPin { fail_after: 10 },
            NoDelay {},
            DisplayConfig::default(),
        );

        assert!(matches!(result, Err(TmError::Io(PinFault))));
    }
}
