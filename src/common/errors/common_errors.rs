use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("[{0}] the display config could not be parsed: {1}")]
    Parse(String, String),

    #[error("[{0}] the display config file could not be read: {1}")]
    Read(String, String),
}
