// src/factories/mod.rs

mod course_factory;

pub use course_factory::CourseFactory;
