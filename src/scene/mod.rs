pub mod carousel;
pub mod content;
pub mod particles;
pub mod pulse;
pub mod reveal;
pub mod screen;
