pub mod default_values;
pub mod environment;
pub mod segment_display_text;
