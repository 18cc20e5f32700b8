use std::fmt;

use heka_core::model::LessonId;
use heka_core::progress::DEFAULT_PROGRESS_KEY;

pub const DEFAULT_DB_URL: &str = "sqlite://heka.sqlite3";

#[derive(Debug, PartialEq, Eq)]
pub enum ArgsError {
    MissingValue { flag: &'static str },
    MissingArgument { what: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidLessonId { raw: String },
    InvalidCourse { raw: String },
    InvalidDbUrl { raw: String },
    InvalidKey { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::MissingArgument { what } => write!(f, "missing {what}"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidLessonId { raw } => {
                write!(f, "invalid lesson (expected track/course/module/lesson): {raw}")
            }
            ArgsError::InvalidCourse { raw } => {
                write!(f, "invalid course (expected track/course): {raw}")
            }
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidKey { raw } => write!(f, "invalid --key value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Tracks,
    Course { track: String, course: String },
    Lesson(LessonId),
    Toggle(LessonId),
    Reset,
    Help,
}

/// Runtime settings: environment first, flags override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub db_url: String,
    pub base_path: String,
    pub progress_key: String,
    pub json: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            db_url: lookup("HEKA_DB_URL").map_or_else(|| DEFAULT_DB_URL.into(), normalize_sqlite_url),
            base_path: lookup("HEKA_BASE_PATH").unwrap_or_else(|| "/".into()),
            progress_key: lookup("HEKA_PROGRESS_KEY")
                .filter(|key| !key.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_PROGRESS_KEY.into()),
            json: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub command: Command,
    pub settings: Settings,
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_lesson(raw: Option<String>) -> Result<LessonId, ArgsError> {
    let raw = raw.ok_or(ArgsError::MissingArgument {
        what: "lesson (track/course/module/lesson)",
    })?;
    raw.trim_matches('/')
        .parse()
        .map_err(|_| ArgsError::InvalidLessonId { raw })
}

fn parse_course(raw: Option<String>) -> Result<Command, ArgsError> {
    let raw = raw.ok_or(ArgsError::MissingArgument {
        what: "course (track/course)",
    })?;
    let parts: Vec<&str> = raw.trim_matches('/').split('/').collect();
    match parts.as_slice() {
        [track, course] if !track.is_empty() && !course.is_empty() => Ok(Command::Course {
            track: (*track).to_owned(),
            course: (*course).to_owned(),
        }),
        _ => Err(ArgsError::InvalidCourse { raw }),
    }
}

impl Args {
    pub fn parse(argv: Vec<String>, settings: Settings) -> Result<Self, ArgsError> {
        let mut settings = settings;
        let mut positional = Vec::new();

        let mut iter = argv.into_iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(&mut iter, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    settings.db_url = normalize_sqlite_url(value);
                }
                "--base" => {
                    settings.base_path = require_value(&mut iter, "--base")?;
                }
                "--key" => {
                    let value = require_value(&mut iter, "--key")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidKey { raw: value });
                    }
                    settings.progress_key = value;
                }
                "--json" => settings.json = true,
                "--help" | "-h" => positional.insert(0, "help".to_owned()),
                flag if flag.starts_with("--") => return Err(ArgsError::UnknownArg(arg)),
                _ => positional.push(arg),
            }
        }

        let mut positional = positional.into_iter();
        let command = match positional.next().as_deref() {
            None | Some("help") => Command::Help,
            Some("tracks") => Command::Tracks,
            Some("course") => parse_course(positional.next())?,
            Some("lesson") => Command::Lesson(parse_lesson(positional.next())?),
            Some("toggle") => Command::Toggle(parse_lesson(positional.next())?),
            Some("reset") => Command::Reset,
            Some(other) => return Err(ArgsError::UnknownCommand(other.to_owned())),
        };

        if let Some(extra) = positional.next() {
            if command != Command::Help {
                return Err(ArgsError::UnknownArg(extra));
            }
        }

        Ok(Self { command, settings })
    }
}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  heka tracks");
    eprintln!("  heka course <track/course>");
    eprintln!("  heka lesson <track/course/module/lesson>");
    eprintln!("  heka toggle <track/course/module/lesson>");
    eprintln!("  heka reset");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --db <sqlite_url>   progress database (default: {DEFAULT_DB_URL})");
    eprintln!("  --base <path>       base path for generated links (default: /)");
    eprintln!("  --key <key>         progress key (default: {DEFAULT_PROGRESS_KEY})");
    eprintln!("  --json              print JSON instead of text");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  HEKA_DB_URL, HEKA_BASE_PATH, HEKA_PROGRESS_KEY, RUST_LOG");
}

pub fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}
