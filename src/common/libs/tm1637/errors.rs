use thiserror::Error;

#[derive(Error, Debug)]
pub enum TmError<E> {
    #[error("[E0101] an IO error occured while driving the TM1637 bus: {0:?}")]
    Io(E),
}

impl<E> From<E> for TmError<E> {
    fn from(err: E) -> Self {
        Self::Io(err)
    }
}

/// Raised internally by the decimal formatter. The display never shows it;
/// an out of range number is rendered as the `FFFF` sentinel instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    #[error("[E0102] {0} does not fit on a four digit display")]
    OutOfRange(i32),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("[E0111] frame stopped after {bits} bits of an unfinished byte")]
    PartialByte { bits: u8 },

    #[error("[E0112] a new frame started before the previous one was stopped")]
    UnterminatedFrame,

    #[error("[E0113] unknown TM1637 command byte {0:#04x}")]
    UnknownCommand(u8),
}
