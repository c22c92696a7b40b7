pub mod display_config;
