use esp_idf_hal::gpio::{Gpio13, Gpio27, Output};
use esp_idf_hal::peripherals::Peripherals;

use crate::common::errors::device_errors::DeviceError;

pub struct Peripheral {
    /// clk pin for TM1637
    pub out_g27: Gpio27<Output>,

    /// data io pin for TM1637
    pub out_g13: Gpio13<Output>,
}

impl Peripheral {
    pub fn new() -> anyhow::Result<Self> {
        let per = Peripherals::take()
            .ok_or(DeviceError::PeripheralPin("E0301", "'peripherals' is empty"))?;

        let out_g27 = per.pins.gpio27.into_output()?;
        let out_g13 = per.pins.gpio13.into_output()?;

        log::debug!("[PeripheralFeature] TM1637 on gpio27 (clk) and gpio13 (dio)");

        Ok(Self { out_g27, out_g13 })
    }
}
