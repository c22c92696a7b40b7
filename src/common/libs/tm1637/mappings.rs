use strum_macros::{Display, EnumIter};

/// Shows which segment has which bit.
///
/// ```text
///      A
///     ---
///  F |   | B
///     -G-
///  E |   | C
///     ---
///      D   .DP
/// ```
pub const SEG_A: u8 = 0b0000_0001;
pub const SEG_B: u8 = 0b0000_0010;
pub const SEG_C: u8 = 0b0000_0100;
pub const SEG_D: u8 = 0b0000_1000;
pub const SEG_E: u8 = 0b0001_0000;
pub const SEG_F: u8 = 0b0010_0000;
pub const SEG_G: u8 = 0b0100_0000;

/// Decimal point (or the colon on clock style modules).
pub const DOT_POINT: u8 = 0b1000_0000;

pub const MINUS: u8 = SEG_G;
pub const BLANK: u8 = 0;

/// Segment patterns for the values 0 to F.
pub const SEGMENT_TABLE: [u8; 16] = [
    0x3F, // 0
    0x06, // 1
    0x5B, // 2
    0x4F, // 3
    0x66, // 4
    0x6D, // 5
    0x7D, // 6
    0x07, // 7
    0x7F, // 8
    0x6F, // 9
    0x77, // A
    0x7C, // b
    0x39, // C
    0x5E, // d
    0x79, // E
    0x71, // F
];

/// Looks up the segment pattern of a 4 bit value; anything larger wraps.
#[must_use]
pub const fn digit_to_segment(value: u8) -> u8 {
    SEGMENT_TABLE[(value % 16) as usize]
}

/// Maps a character to its closest possible representation on a 7-segment display.
/// Characters without a usable shape become a question mark.
#[must_use]
pub const fn char_to_segment(chr: char) -> u8 {
    match chr {
        '0'..='9' => digit_to_segment(chr as u8 - b'0'),

        // upper case shapes; a few lower case letters borrow them
        'A' => SEG_A | SEG_B | SEG_C | SEG_E | SEG_F | SEG_G,
        'C' => SEG_A | SEG_D | SEG_E | SEG_F,
        'E' => SEG_A | SEG_D | SEG_E | SEG_F | SEG_G,
        'F' | 'f' => SEG_A | SEG_E | SEG_F | SEG_G,
        'G' | 'g' => SEG_A | SEG_C | SEG_D | SEG_E | SEG_F,
        'H' => SEG_B | SEG_C | SEG_E | SEG_F | SEG_G,
        'I' => SEG_B | SEG_C,
        'J' | 'j' => SEG_B | SEG_C | SEG_D | SEG_E,
        'L' => SEG_D | SEG_E | SEG_F,
        'N' => SEG_A | SEG_B | SEG_C | SEG_E | SEG_F,
        'O' => SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F,
        'P' | 'p' => SEG_A | SEG_B | SEG_E | SEG_F | SEG_G,
        'R' => SEG_A | SEG_E | SEG_F,
        'S' | 's' => SEG_A | SEG_C | SEG_D | SEG_F | SEG_G,
        'U' => SEG_B | SEG_C | SEG_D | SEG_E | SEG_F,

        // lower case shapes; a few upper case letters borrow them
        'a' => SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_G,
        'b' | 'B' => SEG_C | SEG_D | SEG_E | SEG_F | SEG_G,
        'c' => SEG_D | SEG_E | SEG_G,
        'd' | 'D' => SEG_B | SEG_C | SEG_D | SEG_E | SEG_G,
        'e' => SEG_A | SEG_B | SEG_D | SEG_E | SEG_F | SEG_G,
        'h' => SEG_C | SEG_E | SEG_F | SEG_G,
        'i' => SEG_C,
        'l' => SEG_D | SEG_E,
        'n' => SEG_C | SEG_E | SEG_G,
        'o' => SEG_C | SEG_D | SEG_E | SEG_G,
        'q' | 'Q' => SEG_A | SEG_B | SEG_C | SEG_F | SEG_G,
        'r' => SEG_E | SEG_G,
        't' | 'T' => SEG_D | SEG_E | SEG_F | SEG_G,
        'u' => SEG_C | SEG_D | SEG_E,
        'y' | 'Y' => SEG_B | SEG_C | SEG_D | SEG_F | SEG_G,

        ' ' => BLANK,
        '-' => MINUS,
        '_' => SEG_D,
        '=' => SEG_G | SEG_D,
        '[' => SEG_A | SEG_D | SEG_E | SEG_F,
        ']' => SEG_A | SEG_B | SEG_C | SEG_D,

        // '?' and everything else
        _ => SEG_A | SEG_B | SEG_G | SEG_E,
    }
}

/// The command prefixes of the TM1637. See data sheet
/// for more information. Bits 6 & 7 mark the kind of command.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Isa {
    /// "write data to display register"-mode with automatic address increment.
    DataCommand = 0b0100_0000,

    /// Selects the display register; the low 3 bits carry the address.
    AddressCommand = 0b1100_0000,

    // bits 0 - 2 tell the brightness.
    // bit 3 is display on/off
    DisplayControl = 0b1000_0000,
}

/// Set in a data command to keep writing to the same register.
pub const FIXED_ADDRESS: u8 = 0b0000_0100;

pub const ADDRESS_MASK: u8 = 0b0000_0111;
pub const BRIGHTNESS_MASK: u8 = 0b0000_0111;

/// The level of brightness.
/// The TM1637 "DisplayControl"-command transports the brightness information
/// in bits 0 to 2.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Display)]
pub enum Brightness {
    /// Lowest brightness.
    L0 = 0b000,
    L1 = 0b001,
    L2 = 0b010,
    L3 = 0b011,
    L4 = 0b100,
    L5 = 0b101,
    L6 = 0b110,
    /// Highest brightness.
    L7 = 0b111,
}

/// Whether the display is on or off.
/// The TM1637 "DisplayControl"-command transports the display on/off information
/// in the third bit (2^3) of the command.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Power {
    Off = 0b0000,
    On = 0b1000,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioPinValue {
    Low,
    High,
}

impl From<u8> for GpioPinValue {
    fn from(x: u8) -> Self {
        if x == 0 {
            Self::Low
        } else {
            Self::High
        }
    }
}
