pub mod entities;
pub mod errors;
pub mod factories;
pub mod models;
pub mod paths;
pub mod ports;
pub mod repositories;
pub mod validation;

pub use entities::*;
pub use errors::*;
pub use factories::CourseFactory;
pub use models::*;
pub use ports::*;
