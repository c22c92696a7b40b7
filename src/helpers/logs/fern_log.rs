use fern::colors::{Color, ColoredLevelConfig};
use std::io;

use crate::constants::environment::APP_ENV;

pub fn setup_logging() -> anyhow::Result<()> {
    // configure colors for the whole line
    let colors_line = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Magenta)
        .debug(Color::BrightBlack)
        // depending on the terminals color scheme, this is the same as the background color
        .trace(Color::BrightBlack);

    // only the info color differs from the line colors
    let colors_level = colors_line.info(Color::Blue);

    let stdout_config = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{target}][{level}] {color_line}{message}\x1B[0m",
                color_line = format_args!(
                    "\x1B[{}m",
                    colors_line.get_color(&record.level()).to_fg_str()
                ),
                target = record.target(),
                level = colors_level.color(record.level()),
                message = message,
            ));
        })
        .level(APP_ENV.config.log_level)
        .chain(io::stdout());

    fern::Dispatch::new().chain(stdout_config).apply()?;

    log::debug!(
        "[Logs] logging at {} (debug build: {})",
        APP_ENV.config.log_level,
        APP_ENV.is_debug
    );

    Ok(())
}
