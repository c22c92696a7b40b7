use lazy_static::lazy_static;
use log::LevelFilter;

lazy_static! {
    pub static ref APP_ENV: Environment = Environment::new();
}

pub struct Environment {
    pub is_debug: bool,
    pub is_release: bool,
    pub config: EnvConfig,
}

impl Environment {
    #[must_use]
    pub const fn new() -> Self {
        const IS_DEBUG: bool = cfg!(debug_assertions);
        const IS_RELEASE: bool = cfg!(not(debug_assertions));

        let config: EnvConfig = EnvConfig::new(IS_DEBUG);

        Self {
            is_debug: IS_DEBUG,
            is_release: IS_RELEASE,
            config,
        }
    }
}

pub struct EnvConfig {
    pub log_level: LevelFilter,
    /// Demo output draws the emulated display after every step.
    pub draw_emulated_display: bool,
}

impl EnvConfig {
    #[must_use]
    pub const fn new(is_debug: bool) -> Self {
        if is_debug {
            return Self {
                log_level: LevelFilter::Debug,
                draw_emulated_display: true,
            };
        }

        Self {
            log_level: LevelFilter::Info,
            draw_emulated_display: false,
        }
    }
}
