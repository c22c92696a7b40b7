pub mod common_errors;
#[cfg(feature = "esp32")]
pub mod device_errors;
