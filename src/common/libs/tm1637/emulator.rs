//! Host side stand-in for a TM1637 module.
//!
//! [`WireLog`] hands out a CLK and a DIO [`ProbePin`] that record every level the
//! driver sets. [`FrameDecoder`] turns those line transitions back into the
//! bytes of each start/stop frame and [`VirtualTm1637`] applies the frames the
//! way the chip does, so tests and the host demo can look at what the display
//! would show.

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::v2::OutputPin;

use crate::common::libs::tm1637::errors::DecodeError;
use crate::common::libs::tm1637::mappings::{
    GpioPinValue, Isa, Power, ADDRESS_MASK, BRIGHTNESS_MASK, DOT_POINT, FIXED_ADDRESS, SEG_A,
    SEG_B, SEG_C, SEG_D, SEG_E, SEG_F, SEG_G,
};

/// The chip decodes a 3 bit address; only the first six registers are wired
/// to grids on a real part.
pub const REGISTER_COUNT: usize = 8;

const COMMAND_KIND_MASK: u8 = 0b1100_0000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Clk,
    Dio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinEvent {
    pub line: Line,
    pub level: GpioPinValue,
}

/// Shared, single threaded record of every pin level set through its probes.
#[derive(Debug, Clone, Default)]
pub struct WireLog {
    events: Rc<RefCell<Vec<PinEvent>>>,
}

impl WireLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the CLK and the DIO probe, in that order.
    #[must_use]
    pub fn pins(&self) -> (ProbePin, ProbePin) {
        (
            ProbePin {
                line: Line::Clk,
                wire: self.clone(),
            },
            ProbePin {
                line: Line::Dio,
                wire: self.clone(),
            },
        )
    }

    #[must_use]
    pub fn events(&self) -> Vec<PinEvent> {
        self.events.borrow().clone()
    }

    /// Drains the recorded events.
    pub fn take_events(&self) -> Vec<PinEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

#[derive(Debug)]
pub struct ProbePin {
    line: Line,
    wire: WireLog,
}

impl ProbePin {
    fn record(&self, level: GpioPinValue) {
        self.wire.events.borrow_mut().push(PinEvent {
            line: self.line,
            level,
        });
    }
}

impl OutputPin for ProbePin {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.record(GpioPinValue::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.record(GpioPinValue::High);
        Ok(())
    }
}

/// Rebuilds frames from line transitions.
///
/// Both lines are assumed high (pulled up) before the first event. DIO falling
/// while CLK is high opens a frame and DIO rising while CLK is high closes it.
/// A bit is sampled when CLK rises and only counts once CLK falls again, so the
/// clock edge inside a stop condition is not mistaken for data. Every ninth
/// pulse is the acknowledge slot and completes a byte.
///
/// Bits clocked on an idle bus open an implicit frame: after `init` both lines
/// already sit low, so the first frame never shows a start condition.
#[derive(Debug, Clone)]
pub struct FrameDecoder {
    clk: GpioPinValue,
    dio: GpioPinValue,
    in_frame: bool,
    sampled: Option<GpioPinValue>,
    pulses: u8,
    byte: u8,
    bytes: Vec<u8>,
}

impl Default for FrameDecoder {
    fn default() -> Self {
        Self {
            clk: GpioPinValue::High,
            dio: GpioPinValue::High,
            in_frame: false,
            sampled: None,
            pulses: 0,
            byte: 0,
            bytes: Vec::new(),
        }
    }
}

impl FrameDecoder {
    /// Feeds one event; returns the frame it completed, if any.
    pub fn push(&mut self, event: PinEvent) -> Result<Option<Vec<u8>>, DecodeError> {
        match event.line {
            Line::Dio => {
                let changed = event.level != self.dio;
                self.dio = event.level;

                if !changed || self.clk == GpioPinValue::Low {
                    return Ok(None);
                }

                self.sampled = None;
                match event.level {
                    GpioPinValue::Low => {
                        if self.in_frame {
                            self.reset();
                            return Err(DecodeError::UnterminatedFrame);
                        }
                        self.open();
                        Ok(None)
                    }
                    GpioPinValue::High => self.close(),
                }
            }
            Line::Clk => {
                let previous = self.clk;
                self.clk = event.level;

                match (previous, event.level) {
                    (GpioPinValue::Low, GpioPinValue::High) => self.sampled = Some(self.dio),
                    (GpioPinValue::High, GpioPinValue::Low) => {
                        if let Some(bit) = self.sampled.take() {
                            self.clock_in(bit);
                        }
                    }
                    _ => {}
                }

                Ok(None)
            }
        }
    }

    /// Fails if a frame is still open.
    pub fn finish(&self) -> Result<(), DecodeError> {
        if self.in_frame {
            return Err(DecodeError::UnterminatedFrame);
        }

        Ok(())
    }

    fn open(&mut self) {
        self.reset();
        self.in_frame = true;
    }

    fn close(&mut self) -> Result<Option<Vec<u8>>, DecodeError> {
        if !self.in_frame {
            return Ok(None);
        }

        let bits = self.pulses;
        let bytes = std::mem::take(&mut self.bytes);
        self.reset();

        if bits != 0 {
            return Err(DecodeError::PartialByte { bits });
        }

        Ok(Some(bytes))
    }

    fn clock_in(&mut self, bit: GpioPinValue) {
        if !self.in_frame {
            self.open();
        }

        if self.pulses < 8 {
            if bit == GpioPinValue::High {
                self.byte |= 1 << self.pulses;
            }
            self.pulses += 1;
        } else {
            self.bytes.push(self.byte);
            self.byte = 0;
            self.pulses = 0;
        }
    }

    fn reset(&mut self) {
        self.in_frame = false;
        self.sampled = None;
        self.pulses = 0;
        self.byte = 0;
        self.bytes.clear();
    }
}

/// Decodes a complete recording into its frames.
pub fn decode_frames(events: &[PinEvent]) -> Result<Vec<Vec<u8>>, DecodeError> {
    let mut decoder = FrameDecoder::default();
    let mut frames = Vec::new();

    for event in events {
        if let Some(frame) = decoder.push(*event)? {
            frames.push(frame);
        }
    }
    decoder.finish()?;

    Ok(frames)
}

/// Register level model of the chip.
#[derive(Debug, Clone)]
pub struct VirtualTm1637 {
    registers: [u8; REGISTER_COUNT],
    power: Power,
    brightness: u8,
    fixed_address: bool,
    decoder: FrameDecoder,
}

impl Default for VirtualTm1637 {
    fn default() -> Self {
        Self {
            registers: [0; REGISTER_COUNT],
            power: Power::Off,
            brightness: 0,
            fixed_address: false,
            decoder: FrameDecoder::default(),
        }
    }
}

impl VirtualTm1637 {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a device state from a full recording.
    pub fn replay(events: &[PinEvent]) -> Result<Self, DecodeError> {
        let mut device = Self::new();
        for frame in decode_frames(events)? {
            device.apply_frame(&frame)?;
        }

        Ok(device)
    }

    /// Drains the wire log and applies every frame completed so far.
    /// Line levels carry over between calls. Returns the number of frames applied.
    pub fn absorb(&mut self, wire: &WireLog) -> Result<usize, DecodeError> {
        let mut applied = 0_usize;

        for event in wire.take_events() {
            if let Some(frame) = self.decoder.push(event)? {
                self.apply_frame(&frame)?;
                applied += 1;
            }
        }

        Ok(applied)
    }

    pub fn apply_frame(&mut self, frame: &[u8]) -> Result<(), DecodeError> {
        let (command, data) = match frame.split_first() {
            Some((command, data)) => (*command, data),
            None => return Ok(()),
        };

        match command & COMMAND_KIND_MASK {
            kind if kind == Isa::DataCommand as u8 => {
                self.fixed_address = command & FIXED_ADDRESS != 0;
            }
            kind if kind == Isa::AddressCommand as u8 => {
                let mut address = usize::from(command & ADDRESS_MASK);
                for segment in data {
                    self.registers[address % REGISTER_COUNT] = *segment;
                    if !self.fixed_address {
                        address += 1;
                    }
                }
            }
            kind if kind == Isa::DisplayControl as u8 => {
                self.power = if command & Power::On as u8 == 0 {
                    Power::Off
                } else {
                    Power::On
                };
                self.brightness = command & BRIGHTNESS_MASK;
            }
            _ => return Err(DecodeError::UnknownCommand(command)),
        }

        Ok(())
    }

    #[must_use]
    pub const fn registers(&self) -> &[u8; REGISTER_COUNT] {
        &self.registers
    }

    /// The first `count` registers.
    #[must_use]
    pub fn digits(&self, count: usize) -> &[u8] {
        &self.registers[..count.min(REGISTER_COUNT)]
    }

    #[must_use]
    pub const fn power(&self) -> Power {
        self.power
    }

    #[must_use]
    pub fn is_on(&self) -> bool {
        self.power == Power::On
    }

    #[must_use]
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Draws the first `count` digits as three lines of ASCII art.
    #[must_use]
    pub fn render(&self, count: usize) -> String {
        let lit = |segment: u8, bit: u8, on: char| if segment & bit == 0 { ' ' } else { on };

        let mut rows = [String::new(), String::new(), String::new()];
        for segment in self.digits(count).iter().copied() {
            rows[0].push(' ');
            rows[0].push(lit(segment, SEG_A, '_'));
            rows[0].push_str("  ");

            rows[1].push(lit(segment, SEG_F, '|'));
            rows[1].push(lit(segment, SEG_G, '_'));
            rows[1].push(lit(segment, SEG_B, '|'));
            rows[1].push(' ');

            rows[2].push(lit(segment, SEG_E, '|'));
            rows[2].push(lit(segment, SEG_D, '_'));
            rows[2].push(lit(segment, SEG_C, '|'));
            rows[2].push(lit(segment, DOT_POINT, '.'));
        }

        rows.join("\n")
    }
}
