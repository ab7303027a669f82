use crate::{CatalogError, Course, validation::FieldValidator};
use serde_json::Value;
use std::fmt;

/// Teacher entity.
///
/// The name is validated on construction and on every assignment, so a
/// `Teacher` value always carries a name longer than one character.
#[derive(Debug, Clone)]
pub struct Teacher {
    name: String,
    courses: Vec<Course>,
}

impl Teacher {
    /// Creates a teacher with no courses.
    ///
    /// # Errors
    /// * `CatalogError::Value` - name is empty or a single character
    pub fn new<S: Into<String>>(name: S) -> Result<Self, CatalogError> {
        let name = name.into();
        FieldValidator::validate_name("Teacher", &name)?;

        Ok(Self {
            name,
            courses: Vec::new(),
        })
    }

    /// Returns teacher name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the name. The previous name is kept on failure.
    pub fn set_name<S: Into<String>>(&mut self, name: S) -> Result<(), CatalogError> {
        let name = name.into();
        FieldValidator::validate_name("Teacher", &name)?;
        self.name = name;
        Ok(())
    }

    /// Assigns a name taken from an untyped JSON value.
    pub fn try_set_name(&mut self, value: &Value) -> Result<(), CatalogError> {
        let name = FieldValidator::expect_str("name", value)?;
        self.set_name(name)
    }

    /// Returns courses in insertion order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn set_courses(&mut self, courses: Vec<Course>) {
        self.courses = courses;
    }

    pub fn add_course(&mut self, course: Course) {
        self.courses.push(course);
    }
}

impl fmt::Display for Teacher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CourseKind;
    use serde_json::json;
    use std::rc::Rc;

    fn course(name: &str) -> Course {
        let teacher = Rc::new(Teacher::new("Andriy Shevchenko").unwrap());
        Course::new(CourseKind::Offsite, name, teacher, vec!["jvm".to_string()]).unwrap()
    }

    #[test]
    fn test_display_has_trailing_space() {
        let teacher = Teacher::new("Ruslan Malinowski").unwrap();
        assert_eq!(teacher.to_string(), "Ruslan Malinowski ");
    }

    #[test]
    fn test_short_name_rejected() {
        assert!(matches!(Teacher::new(""), Err(CatalogError::Value(_))));
        assert!(matches!(Teacher::new("R"), Err(CatalogError::Value(_))));
    }

    #[test]
    fn test_failed_assignment_keeps_previous_name() {
        let mut teacher = Teacher::new("Ruslan Malinowski").unwrap();

        assert!(matches!(teacher.set_name("x"), Err(CatalogError::Value(_))));
        assert!(matches!(
            teacher.try_set_name(&json!(17)),
            Err(CatalogError::Type(_))
        ));
        assert_eq!(teacher.name(), "Ruslan Malinowski");

        teacher.try_set_name(&json!("Volodymyr Vladimirov")).unwrap();
        assert_eq!(teacher.name(), "Volodymyr Vladimirov");
    }

    #[test]
    fn test_add_course_appends_in_order() {
        let mut teacher = Teacher::new("Andriy Shevchenko").unwrap();
        assert!(teacher.courses().is_empty());

        teacher.add_course(course("Java"));
        assert_eq!(teacher.courses().len(), 1);

        teacher.add_course(course("Kotlin"));
        let names: Vec<&str> = teacher.courses().iter().map(Course::name).collect();
        assert_eq!(names, ["Java", "Kotlin"]);
    }

    #[test]
    fn test_set_courses_replaces_sequence() {
        let mut teacher = Teacher::new("Andriy Shevchenko").unwrap();
        teacher.add_course(course("Java"));

        teacher.set_courses(vec![course("Scala"), course("Groovy")]);
        assert_eq!(teacher.courses().len(), 2);
        assert_eq!(teacher.courses()[0].name(), "Scala");

        teacher.set_courses(Vec::new());
        assert!(teacher.courses().is_empty());
    }
}
