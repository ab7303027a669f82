pub mod course;
pub mod teacher;

pub use course::*;
pub use teacher::*;
