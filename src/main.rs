#![deny(clippy::all)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::print_stdout)]
#![allow(
    clippy::missing_docs_in_private_items,
    clippy::implicit_return,
    clippy::similar_names,
    clippy::module_name_repetitions
)]

use std::env;
use std::path::Path;
use std::thread;
use std::time::Duration;

use tm1637_display::common::models::display_config::DisplayConfig;
use tm1637_display::constants::default_values::DefaultValues;
use tm1637_display::features::display_feature::DisplayFeature;
use tm1637_display::helpers::logs::fern_log::setup_logging;
use tm1637_display::Tm1637;

/// The first argument, when given, is the path to a JSON display config.
fn load_config() -> anyhow::Result<DisplayConfig> {
    match env::args().nth(1) {
        Some(path) => {
            let config = DisplayConfig::from_json_file(Path::new(&path))?;
            log::info!("[Main] config loaded from {}", path);

            Ok(config)
        }
        None => Ok(DisplayConfig::default()),
    }
}

#[cfg(not(feature = "esp32"))]
fn main() -> anyhow::Result<()> {
    use tm1637_display::common::libs::tm1637::emulator::{VirtualTm1637, WireLog};
    use tm1637_display::constants::environment::APP_ENV;
    use tm1637_display::helpers::delay::ThreadSleepDelay;

    setup_logging()?;
    let config = load_config()?;

    let wire = WireLog::new();
    let (clk, dio) = wire.pins();
    let mut tm = Tm1637::new(clk, dio, ThreadSleepDelay {}, config)?;

    let digit_count = usize::from(tm.digit_count());
    let mut device = VirtualTm1637::new();

    DisplayFeature::new().run_demo(&mut tm, |label| {
        if let Err(e) = device.absorb(&wire) {
            log::error!("[E0401][Main] {}", e);
        }

        log::info!("[Main] {}", label);
        if APP_ENV.config.draw_emulated_display {
            log::info!("[Main]\n{}", device.render(digit_count));
        }

        thread::sleep(Duration::from_millis(DefaultValues::DEMO_STEP_DELAY_MS_HOST));
    })?;

    Ok(())
}

#[cfg(feature = "esp32")]
fn main() -> anyhow::Result<()> {
    use esp_idf_hal::delay::Ets;
    use tm1637_display::features::peripheral::Peripheral;

    esp_idf_sys::link_patches();

    setup_logging()?;
    let config = load_config()?;

    let peripheral = Peripheral::new()?;
    let mut tm = Tm1637::new(peripheral.out_g27, peripheral.out_g13, Ets, config)?;

    let display_feature = DisplayFeature::new();
    loop {
        display_feature.run_demo(&mut tm, |label| {
            log::info!("[Main] {}", label);
            thread::sleep(Duration::from_millis(DefaultValues::DEMO_STEP_DELAY_MS));
        })?;
    }
}
