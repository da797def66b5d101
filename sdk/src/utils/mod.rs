pub mod duration;
pub mod timestamp;
