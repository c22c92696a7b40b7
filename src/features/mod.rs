pub mod display_feature;
#[cfg(feature = "esp32")]
pub mod peripheral;
