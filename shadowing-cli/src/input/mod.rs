//! Input handling module

pub mod file_reader;
pub mod recognized;

pub use file_reader::FileReader;
pub use recognized::read_recognized;
