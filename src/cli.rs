use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use course_catalog::{CatalogConfig, CourseFactory, DuplicatePolicy};
use std::path::PathBuf;

/// Configuration picked up from the working directory when `--config` is absent.
const DEFAULT_CONFIG_FILE: &str = "catalog.toml";

/// Course pairs printed by the `demo` command.
const DEMO_COURSES: [(&str, &str); 3] = [
    ("Python", "Ruslan Malinowski"),
    ("Java", "Andriy Shevchenko"),
    ("C#", "Volodymyr Vladimirov"),
];

#[derive(Parser, Debug)]
#[command(
    name = "course-catalog",
    version,
    about = "Build courses and teachers from teachers.json and courses.json"
)]
pub struct Cli {
    /// TOML configuration file [default: ./catalog.toml when present]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding teachers.json and courses.json
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Resolve duplicate course names to the first record instead of the last
    #[arg(long, global = true)]
    pub first_match: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print one course
    Course {
        /// Course name as stored in courses.json
        course: String,
        /// Teacher name as stored in teachers.json
        teacher: String,
    },

    /// Print one teacher
    Teacher { name: String },

    /// Print the demonstration courses
    Demo,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let config = self.load_config()?;
        tracing::debug!(?config, "configuration loaded");
        let factory = CourseFactory::from_config(config);

        match self.command.unwrap_or(Commands::Demo) {
            Commands::Course { course, teacher } => {
                let course = factory
                    .create_course(&course, &teacher)
                    .with_context(|| format!("cannot create course `{}`", course))?;
                println!("{}", course);
            }
            Commands::Teacher { name } => {
                let teacher = factory
                    .create_teacher(&name)
                    .with_context(|| format!("cannot create teacher `{}`", name))?;
                println!("{}", teacher);
            }
            Commands::Demo => {
                for (course, teacher) in DEMO_COURSES {
                    println!("{}", factory.create_course(course, teacher)?);
                }
            }
        }

        Ok(())
    }

    fn load_config(&self) -> Result<CatalogConfig> {
        let path = self.config.clone().or_else(|| {
            let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
            fallback.is_file().then_some(fallback)
        });

        let mut config = match path {
            Some(path) => CatalogConfig::load(&path)
                .with_context(|| format!("cannot load config {}", path.display()))?,
            None => CatalogConfig::default(),
        };

        if let Some(data_dir) = &self.data_dir {
            config.data_dir = data_dir.clone();
        }
        if self.first_match {
            config.duplicate_policy = DuplicatePolicy::First;
        }

        Ok(config)
    }
}
