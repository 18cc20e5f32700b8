mod args;
mod render;

use heka_core::{BasePath, Curriculum};
use services::{LessonPlayerService, ProgressStore};
use storage::repository::Storage;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::args::{Args, ArgsError, Command, Settings, print_usage};

/// Logs go to stderr so `--json` output on stdout stays machine readable.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn print_json(value: &impl serde::Serialize) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let parsed = Args::parse(argv, Settings::from_env()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let settings = parsed.settings;

    if parsed.command == Command::Help {
        print_usage();
        return Ok(());
    }

    // Curriculum questions need no database; only open it for progress.
    let curriculum = Curriculum::builtin(BasePath::new(&settings.base_path));
    if parsed.command == Command::Tracks {
        if settings.json {
            print_json(&curriculum.tracks())?;
        } else {
            print!("{}", render::tracks_text(curriculum.tracks()));
        }
        return Ok(());
    }

    prepare_sqlite_file(&settings.db_url)?;
    let storage = Storage::sqlite(&settings.db_url).await?;
    tracing::debug!(db = %settings.db_url, key = %settings.progress_key, "progress store opened");
    let store = ProgressStore::new(storage.entries, settings.progress_key);
    let player_service = LessonPlayerService::new(curriculum, store);

    match parsed.command {
        Command::Course { track, course } => {
            let overview = player_service.course_overview(&track, &course).await?;
            if settings.json {
                print_json(&overview)?;
            } else {
                print!("{}", render::course_text(&overview));
            }
        }
        Command::Lesson(id) => {
            let player = player_service.open_lesson_by_id(&id).await?;
            if settings.json {
                print_json(&render::lesson_json(&player))?;
            } else {
                print!("{}", render::lesson_text(&player));
            }
        }
        Command::Toggle(id) => {
            let mut player = player_service.open_lesson_by_id(&id).await?;
            let completed = player.toggle_current().await?;
            if settings.json {
                print_json(&render::lesson_json(&player))?;
            } else {
                let state = if completed { "completed" } else { "pending" };
                println!("{id}: {state}");
                print!("{}", render::lesson_text(&player));
            }
        }
        Command::Reset => {
            player_service.reset_progress().await?;
            println!("progress cleared");
        }
        Command::Tracks | Command::Help => {}
    }

    Ok(())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
