use std::fmt;

use heka_core::progress::DEFAULT_PROGRESS_KEY;
use heka_core::model::LessonId;
use heka_core::{BasePath, Curriculum, ProgressState};
use storage::repository::Storage;

#[derive(Debug, Clone)]
struct Args {
    db_url: String,
    key: String,
    track: String,
    course: String,
    completed: usize,
}

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidCourse { raw: String },
    InvalidCompleted { raw: String },
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidCourse { raw } => {
                write!(f, "invalid --course value (expected track/course): {raw}")
            }
            ArgsError::InvalidCompleted { raw } => write!(f, "invalid --completed value: {raw}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

#[derive(Debug)]
struct UnknownCourse(String);

impl fmt::Display for UnknownCourse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "course not found: {}", self.0)
    }
}

impl std::error::Error for UnknownCourse {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn split_course(raw: &str) -> Result<(String, String), ArgsError> {
    match raw.split_once('/') {
        Some((track, course)) if !track.is_empty() && !course.is_empty() && !course.contains('/') => {
            Ok((track.to_owned(), course.to_owned()))
        }
        _ => Err(ArgsError::InvalidCourse {
            raw: raw.to_owned(),
        }),
    }
}

impl Args {
    fn parse() -> Result<Self, ArgsError> {
        let mut db_url =
            std::env::var("HEKA_DB_URL").unwrap_or_else(|_| "sqlite://heka.sqlite3?mode=rwc".into());
        let mut key =
            std::env::var("HEKA_PROGRESS_KEY").unwrap_or_else(|_| DEFAULT_PROGRESS_KEY.into());
        let (mut track, mut course) = ("fundamentos-it".to_owned(), "linux-practico".to_owned());
        let mut completed = 1;

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(&mut args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = value;
                }
                "--key" => {
                    key = require_value(&mut args, "--key")?;
                }
                "--course" => {
                    let value = require_value(&mut args, "--course")?;
                    (track, course) = split_course(&value)?;
                }
                "--completed" => {
                    let value = require_value(&mut args, "--completed")?;
                    completed = value
                        .parse::<usize>()
                        .map_err(|_| ArgsError::InvalidCompleted { raw: value.clone() })?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            key,
            track,
            course,
            completed,
        })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p storage --bin seed -- [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --db <sqlite_url>         SQLite URL (default: sqlite://heka.sqlite3?mode=rwc)");
    eprintln!("  --key <key>               Progress key (default: {DEFAULT_PROGRESS_KEY})");
    eprintln!("  --course <track/course>   Course to seed (default: fundamentos-it/linux-practico)");
    eprintln!("  --completed <n>           Mark the first n lessons completed (default: 1)");
    eprintln!("  -h, --help                Show this help");
    eprintln!();
    eprintln!("Environment (same as flags):");
    eprintln!("  HEKA_DB_URL, HEKA_PROGRESS_KEY");
}

/// Adds `seeded` to the stored set so other courses keep their progress.
/// An unreadable stored value is replaced.
fn merge_seeded(existing: Option<&str>, seeded: Vec<LessonId>) -> ProgressState {
    let mut state = match existing.map(ProgressState::from_json) {
        Some(Ok(state)) => state,
        Some(Err(err)) => {
            eprintln!("discarding unreadable progress entry: {err}");
            ProgressState::new()
        }
        None => ProgressState::new(),
    };
    state.extend(seeded);
    state
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse().map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let curriculum = Curriculum::builtin(BasePath::root());
    let (track, course) = curriculum
        .course(&args.track, &args.course)
        .ok_or_else(|| UnknownCourse(format!("{}/{}", args.track, args.course)))?;

    let seeded: Vec<LessonId> = curriculum
        .build_lesson_nodes(track.slug(), course)
        .into_iter()
        .take(args.completed)
        .map(|node| node.id)
        .collect();
    let seeded_count = seeded.len();

    let storage = Storage::sqlite(&args.db_url).await?;
    let existing = storage.entries.get(&args.key).await?;
    let state = merge_seeded(existing.as_deref(), seeded);
    storage.entries.put(&args.key, &state.to_json()?).await?;

    println!(
        "Seeded {} completed lessons of {}/{} under {} into {} ({} total)",
        seeded_count,
        track.slug(),
        course.slug(),
        args.key,
        args.db_url,
        state.len()
    );

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
