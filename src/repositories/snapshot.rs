use crate::{CatalogError, ports::RecordSource};
use serde_json::Value;

/// Immutable in-memory copy of both record collections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnapshotRecordSource {
    teachers: Vec<Value>,
    courses: Vec<Value>,
}

impl SnapshotRecordSource {
    pub fn new(teachers: Vec<Value>, courses: Vec<Value>) -> Self {
        Self { teachers, courses }
    }

    pub fn teachers(&self) -> &[Value] {
        &self.teachers
    }

    pub fn courses(&self) -> &[Value] {
        &self.courses
    }
}

impl RecordSource for SnapshotRecordSource {
    fn teacher_records(&self) -> Result<Vec<Value>, CatalogError> {
        Ok(self.teachers.clone())
    }

    fn course_records(&self) -> Result<Vec<Value>, CatalogError> {
        Ok(self.courses.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_returns_records_unchanged() {
        let snapshot = SnapshotRecordSource::new(
            vec![json!({"name": "Ruslan Malinowski"})],
            vec![json!({"name": "Python", "type": "LocalCourse", "topics": []})],
        );

        assert_eq!(snapshot.teacher_records().unwrap(), snapshot.teachers());
        assert_eq!(snapshot.course_records().unwrap()[0]["type"], "LocalCourse");
    }

    #[test]
    fn test_default_is_empty() {
        let snapshot = SnapshotRecordSource::default();
        assert!(snapshot.teacher_records().unwrap().is_empty());
        assert!(snapshot.course_records().unwrap().is_empty());
    }
}
