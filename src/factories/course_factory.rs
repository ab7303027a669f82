// src/factories/course_factory.rs

use crate::{
    CatalogConfig, CatalogError, Course, CourseRecord, DuplicatePolicy, Teacher, TeacherRecord,
    models::record_name,
    ports::RecordSource,
    repositories::JsonFileRecordSource,
};
use serde_json::Value;
use std::rc::Rc;
use tracing::{debug, warn};

/// Factory resolving course and teacher names into validated entities.
///
/// The factory holds no state between calls: every lookup asks the record
/// source again and builds fresh entities.
#[derive(Debug, Clone)]
pub struct CourseFactory<S>
where
    S: RecordSource,
{
    source: S,
    duplicate_policy: DuplicatePolicy,
}

impl CourseFactory<JsonFileRecordSource<CatalogConfig>> {
    /// Creates a factory reading the data files named by `config`.
    pub fn from_config(config: CatalogConfig) -> Self {
        let policy = config.duplicate_policy;
        Self::new(JsonFileRecordSource::new(config)).with_duplicate_policy(policy)
    }
}

impl<S> CourseFactory<S>
where
    S: RecordSource,
{
    /// Creates a factory over `source`. Duplicate course names resolve to
    /// the last record.
    pub fn new(source: S) -> Self {
        Self {
            source,
            duplicate_policy: DuplicatePolicy::default(),
        }
    }

    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicate_policy
    }

    /// Looks a teacher up by exact name.
    ///
    /// # Returns
    /// * `Ok(Some(Teacher))` - first matching record, as a new instance
    /// * `Ok(None)` - no record carries this name
    /// * `Err(CatalogError)` - source unreadable, or a record scanned
    ///   before the match is malformed
    pub fn find_teacher(&self, name: &str) -> Result<Option<Teacher>, CatalogError> {
        let records = self.source.teacher_records()?;

        for record in &records {
            if record_name(record)? == Some(name) {
                let record = TeacherRecord::try_from(record)?;
                debug!(teacher = %record.name, "teacher record matched");
                return Teacher::new(record.name).map(Some);
            }
        }

        debug!(teacher = %name, "no teacher record matched");
        Ok(None)
    }

    /// Creates a teacher from the first record named `name`.
    ///
    /// # Errors
    /// * `CatalogError::NotFound` - no teacher record carries this name
    /// * `CatalogError::Value` - the stored name is too short
    pub fn create_teacher(&self, name: &str) -> Result<Teacher, CatalogError> {
        self.find_teacher(name)?
            .ok_or_else(|| CatalogError::not_found("teacher", name))
    }

    /// Creates the course named `course_name`, taught by `teacher_name`.
    ///
    /// The course record is chosen according to the duplicate policy and
    /// its `type` decides the variant. The teacher is resolved through
    /// [`CourseFactory::create_teacher`].
    ///
    /// # Errors
    /// * `CatalogError::NotFound` - no course or no teacher record matches
    /// * `CatalogError::Key` - unknown `type`, or a required field is missing
    /// * `CatalogError::Type` - a record field has the wrong JSON type
    /// * `CatalogError::Value` - a stored name is too short
    pub fn create_course(
        &self,
        course_name: &str,
        teacher_name: &str,
    ) -> Result<Course, CatalogError> {
        let records = self.source.course_records()?;
        let record = self
            .select_course_record(&records, course_name)?
            .ok_or_else(|| CatalogError::not_found("course", course_name))?;
        let record = CourseRecord::try_from(record)?;

        let teacher = self.create_teacher(teacher_name)?;

        debug!(
            course = %record.name,
            kind = %record.kind,
            teacher = %teacher.name(),
            "creating course"
        );
        Course::new(record.kind, record.name, Rc::new(teacher), record.topics)
    }

    /// Picks the record named `name`, scanning every record in order.
    fn select_course_record<'a>(
        &self,
        records: &'a [Value],
        name: &str,
    ) -> Result<Option<&'a Value>, CatalogError> {
        let mut matches = Vec::new();
        for record in records {
            if record_name(record)? == Some(name) {
                matches.push(record);
            }
        }

        if matches.len() > 1 {
            warn!(
                course = %name,
                count = matches.len(),
                policy = %self.duplicate_policy,
                "duplicate course records"
            );
        }

        let selected = match self.duplicate_policy {
            DuplicatePolicy::First => matches.first(),
            DuplicatePolicy::Last => matches.last(),
        };
        Ok(selected.copied())
    }
}
