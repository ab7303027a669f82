use crate::{CatalogError, Teacher, validation::FieldValidator};
use serde_json::Value;
use std::fmt;
use std::rc::Rc;

/// Course variant. Selected by the `type` discriminator of a course record
/// and only affects how the course is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourseKind {
    Local,
    Offsite,
}

impl CourseKind {
    /// Discriminator value used in course records.
    pub fn discriminator(&self) -> &'static str {
        match self {
            Self::Local => "LocalCourse",
            Self::Offsite => "OffsiteCourse",
        }
    }

    /// Leading label of the rendered course.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Local => "Local course",
            Self::Offsite => "Offsite course",
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local)
    }

    pub fn is_offsite(&self) -> bool {
        matches!(self, Self::Offsite)
    }
}

impl fmt::Display for CourseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.discriminator())
    }
}

impl TryFrom<&str> for CourseKind {
    type Error = CatalogError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "LocalCourse" => Ok(Self::Local),
            "OffsiteCourse" => Ok(Self::Offsite),
            _ => Err(CatalogError::key_error(format!(
                "no course variant registered for type '{}'",
                value
            ))),
        }
    }
}

/// Course entity.
///
/// A single representation for both variants; `kind` decides the rendering.
/// The teacher is shared, so one `Teacher` can back several courses.
#[derive(Debug, Clone)]
pub struct Course {
    kind: CourseKind,
    name: String,
    teacher: Rc<Teacher>,
    topics: Vec<String>,
}

impl Course {
    /// Creates a course of the given variant.
    ///
    /// # Errors
    /// * `CatalogError::Value` - name is empty or a single character
    pub fn new<S: Into<String>>(
        kind: CourseKind,
        name: S,
        teacher: Rc<Teacher>,
        topics: Vec<String>,
    ) -> Result<Self, CatalogError> {
        let name = name.into();
        FieldValidator::validate_name("Course", &name)?;

        Ok(Self {
            kind,
            name,
            teacher,
            topics,
        })
    }

    pub fn local<S: Into<String>>(
        name: S,
        teacher: Rc<Teacher>,
        topics: Vec<String>,
    ) -> Result<Self, CatalogError> {
        Self::new(CourseKind::Local, name, teacher, topics)
    }

    pub fn offsite<S: Into<String>>(
        name: S,
        teacher: Rc<Teacher>,
        topics: Vec<String>,
    ) -> Result<Self, CatalogError> {
        Self::new(CourseKind::Offsite, name, teacher, topics)
    }

    /// Returns course variant.
    pub fn kind(&self) -> CourseKind {
        self.kind
    }

    /// Returns course name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the teacher running the course.
    pub fn teacher(&self) -> &Rc<Teacher> {
        &self.teacher
    }

    /// Returns topics in order.
    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    /// Replaces the name. The previous name is kept on failure.
    pub fn set_name<S: Into<String>>(&mut self, name: S) -> Result<(), CatalogError> {
        let name = name.into();
        FieldValidator::validate_name("Course", &name)?;
        self.name = name;
        Ok(())
    }

    /// Assigns a name taken from an untyped JSON value.
    pub fn try_set_name(&mut self, value: &Value) -> Result<(), CatalogError> {
        let name = FieldValidator::expect_str("name", value)?;
        self.set_name(name)
    }

    pub fn set_teacher(&mut self, teacher: Rc<Teacher>) {
        self.teacher = teacher;
    }

    pub fn set_topics(&mut self, topics: Vec<String>) {
        self.topics = topics;
    }

    /// Assigns topics taken from an untyped JSON value.
    ///
    /// # Errors
    /// * `CatalogError::Type` - value is not an array or holds a non-string
    pub fn try_set_topics(&mut self, value: &Value) -> Result<(), CatalogError> {
        self.topics = FieldValidator::expect_string_list("topics", value)?;
        Ok(())
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, teacher: {}, topics: {}",
            self.kind.label(),
            self.name,
            self.teacher,
            TopicList(&self.topics)
        )
    }
}

/// Renders topics as a bracketed list of quoted strings: `['basics', 'oop']`.
pub struct TopicList<'a>(pub &'a [String]);

impl fmt::Display for TopicList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, topic) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write_quoted(f, topic)?;
        }
        f.write_str("]")
    }
}

// Single quotes unless the text holds a single quote and no double quote.
fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    write!(f, "{}", quote)?;
    for c in text.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => write!(f, "\\{}", c)?,
            // every control character sits below U+0100
            c if c.is_control() => write!(f, "\\x{:02x}", c as u32)?,
            c => write!(f, "{}", c)?,
        }
    }
    write!(f, "{}", quote)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn teacher(name: &str) -> Rc<Teacher> {
        Rc::new(Teacher::new(name).unwrap())
    }

    fn topics(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_local_rendering() {
        let course = Course::local(
            "Python",
            teacher("Ruslan Malinowski"),
            topics(&["basics", "oop"]),
        )
        .unwrap();

        assert_eq!(
            course.to_string(),
            "Local course Python, teacher: Ruslan Malinowski , topics: ['basics', 'oop']"
        );
    }

    #[test]
    fn test_offsite_rendering_with_no_topics() {
        let course = Course::offsite("C#", teacher("Volodymyr Vladimirov"), Vec::new()).unwrap();

        assert_eq!(
            course.to_string(),
            "Offsite course C#, teacher: Volodymyr Vladimirov , topics: []"
        );
    }

    #[test]
    fn test_topic_quoting() {
        let rendered = TopicList(&topics(&["it's", "say \"hi\"", "both ' \"", "a\\b"])).to_string();
        assert_eq!(
            rendered,
            r#"["it's", 'say "hi"', 'both \' "', 'a\\b']"#
        );
    }

    #[test]
    fn test_control_characters_are_hex_escaped() {
        let rendered = TopicList(&topics(&["a\u{7}", "\u{0}end", "del\u{7f}", "nel\u{85}"])).to_string();
        assert_eq!(rendered, r"['a\x07', '\x00end', 'del\x7f', 'nel\x85']");
    }

    #[test]
    fn test_short_name_rejected() {
        for name in ["", "C"] {
            let result = Course::local(name, teacher("Ruslan Malinowski"), Vec::new());
            assert!(matches!(result, Err(CatalogError::Value(_))));
        }
    }

    #[test]
    fn test_try_set_name_type_and_value_errors() {
        let mut course = Course::local("Python", teacher("Ruslan Malinowski"), Vec::new()).unwrap();

        assert!(matches!(
            course.try_set_name(&json!(["Python"])),
            Err(CatalogError::Type(_))
        ));
        assert!(matches!(
            course.try_set_name(&json!("P")),
            Err(CatalogError::Value(_))
        ));
        assert_eq!(course.name(), "Python");
    }

    #[test]
    fn test_try_set_topics_rejects_non_strings() {
        let mut course = Course::local("Python", teacher("Ruslan Malinowski"), topics(&["oop"]))
            .unwrap();

        for value in [json!(["basics", 1]), json!([null]), json!("basics"), json!({})] {
            assert!(matches!(
                course.try_set_topics(&value),
                Err(CatalogError::Type(_))
            ));
        }
        assert_eq!(course.topics(), ["oop"]);

        course.try_set_topics(&json!([])).unwrap();
        assert!(course.topics().is_empty());
    }

    #[test]
    fn test_teacher_shared_between_courses() {
        let shared = teacher("Andriy Shevchenko");
        let java = Course::offsite("Java", Rc::clone(&shared), Vec::new()).unwrap();
        let kotlin = Course::local("Kotlin", Rc::clone(&shared), Vec::new()).unwrap();

        assert!(Rc::ptr_eq(java.teacher(), kotlin.teacher()));
        assert_eq!(Rc::strong_count(&shared), 3);
    }

    #[test]
    fn test_set_teacher() {
        let mut course = Course::local("Python", teacher("Ruslan Malinowski"), Vec::new()).unwrap();
        course.set_teacher(teacher("Andriy Shevchenko"));
        assert_eq!(course.teacher().name(), "Andriy Shevchenko");
        assert!(course.kind().is_local());
    }

    #[test]
    fn test_kind_discriminator() {
        assert_eq!(CourseKind::try_from("LocalCourse").unwrap(), CourseKind::Local);
        assert_eq!(CourseKind::try_from("OffsiteCourse").unwrap(), CourseKind::Offsite);
        assert_eq!(CourseKind::Offsite.to_string(), "OffsiteCourse");

        for unknown in ["RemoteCourse", "localcourse", ""] {
            assert!(matches!(
                CourseKind::try_from(unknown),
                Err(CatalogError::Key(_))
            ));
        }
    }
}
