pub mod errors;
pub mod libs;
pub mod models;
