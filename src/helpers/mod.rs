pub mod delay;
pub mod logs;
