use std::path::PathBuf;

pub const TEACHERS_FILE: &str = "teachers.json";
pub const COURSES_FILE: &str = "courses.json";

/// Locations of the two catalog data files.
pub trait CatalogPaths {
    fn data_dir(&self) -> PathBuf;

    fn teachers_path(&self) -> PathBuf {
        self.data_dir().join(TEACHERS_FILE)
    }

    fn courses_path(&self) -> PathBuf {
        self.data_dir().join(COURSES_FILE)
    }
}

impl CatalogPaths for PathBuf {
    fn data_dir(&self) -> PathBuf {
        self.clone()
    }
}
