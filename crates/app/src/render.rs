use std::fmt::Write as _;

use heka_core::model::Track;
use heka_core::progress::{LessonStatus, NextStep, PreviousStep};
use serde_json::{Value, json};
use services::{CourseOverview, LessonPlayer};

fn marker(status: &LessonStatus) -> &'static str {
    match (status.is_done, status.unlocked) {
        (true, _) => "[x]",
        (false, true) => "[ ]",
        (false, false) => "[-]",
    }
}

fn push_outline(out: &mut String, outline: &[LessonStatus]) {
    let mut module = "";
    for status in outline {
        if status.node.module_title != module {
            module = status.node.module_title;
            let _ = writeln!(out, "  {module}");
        }
        let current = if status.is_current { "  <- current" } else { "" };
        let _ = writeln!(
            out,
            "    {} {}  {}{current}",
            marker(status),
            status.node.title,
            status.node.href
        );
    }
}

#[must_use]
pub fn tracks_text(tracks: &[Track]) -> String {
    let mut out = String::new();
    for track in tracks {
        let _ = writeln!(out, "{} ({})", track.title(), track.slug());
        let _ = writeln!(out, "  {}", track.summary());
        for course in track.courses() {
            let _ = writeln!(
                out,
                "  - {}/{}  {} [{}] {} lessons, ~{} h",
                track.slug(),
                course.slug(),
                course.title(),
                course.level(),
                course.lesson_count(),
                course.estimated_hours()
            );
        }
    }
    out
}

#[must_use]
pub fn course_text(overview: &CourseOverview) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} / {}", overview.track.title(), overview.course.title());
    let _ = writeln!(out, "{}", overview.course.summary());
    let _ = writeln!(
        out,
        "Level: {}  Duration: {} min",
        overview.course.level(),
        overview.total_minutes
    );
    let _ = writeln!(
        out,
        "Progress: {}/{} lessons ({}%)",
        overview.completed, overview.total, overview.percent
    );
    out.push('\n');
    push_outline(&mut out, &overview.outline);
    out.push('\n');
    match &overview.resume {
        Some(node) => {
            let _ = writeln!(out, "Continue: {}  {}", node.title, node.href);
        }
        None if overview.is_finished() => {
            let _ = writeln!(out, "Course completed.");
        }
        None => {}
    }
    out
}

#[must_use]
pub fn lesson_text(player: &LessonPlayer) -> String {
    let context = player.context();
    let (position, total) = player.position();
    let mut out = String::new();

    let _ = writeln!(out, "{} / {}", context.track.title(), context.course.title());
    let _ = writeln!(
        out,
        "Progress: {}/{} lessons ({}%)",
        player.completed_count(),
        total,
        player.progress_percent()
    );
    out.push('\n');
    push_outline(&mut out, &player.outline());
    out.push('\n');

    let _ = writeln!(out, "Lesson {position} of {total} · {}", context.module.title());
    let _ = writeln!(out, "# {}", context.lesson.title());
    let _ = writeln!(out, "{}", context.lesson.summary());
    let _ = writeln!(out, "Duration: {} min", context.lesson.duration_minutes());
    out.push('\n');
    let _ = writeln!(out, "Objectives:");
    for objective in context.lesson.objectives() {
        let _ = writeln!(out, "  - {objective}");
    }
    out.push('\n');
    for paragraph in context.lesson.content() {
        let _ = writeln!(out, "{paragraph}");
        out.push('\n');
    }

    let status = if player.is_current_completed() {
        "completed"
    } else {
        "pending"
    };
    let _ = writeln!(out, "Status: {status}");

    match player.previous_step() {
        PreviousStep::Open(node) => {
            let _ = writeln!(out, "Previous: {}  {}", node.title, node.href);
        }
        PreviousStep::BackToCourse => {
            let _ = writeln!(out, "Previous: back to course  {}", player.course_href());
        }
    }
    match player.next_step() {
        NextStep::Open(node) => {
            let _ = writeln!(out, "Next: {}  {}", node.title, node.href);
        }
        NextStep::Locked(node) => {
            let _ = writeln!(
                out,
                "Next: {} (locked, complete this lesson to continue)",
                node.title
            );
        }
        NextStep::Repeat => {
            let _ = writeln!(out, "Next: repeat lesson  {}", context.lesson_path);
        }
    }
    out
}

#[must_use]
pub fn lesson_json(player: &LessonPlayer) -> Value {
    let context = player.context();
    let (position, total) = player.position();
    let previous = match player.previous_step() {
        PreviousStep::Open(node) => json!({ "kind": "lesson", "href": node.href, "title": node.title }),
        PreviousStep::BackToCourse => json!({ "kind": "course", "href": player.course_href() }),
    };
    let next = match player.next_step() {
        NextStep::Open(node) => json!({ "kind": "lesson", "href": node.href, "title": node.title }),
        NextStep::Locked(node) => json!({ "kind": "locked", "title": node.title }),
        NextStep::Repeat => json!({ "kind": "repeat", "href": context.lesson_path }),
    };

    json!({
        "lessonId": context.lesson_id,
        "lessonPath": context.lesson_path,
        "track": context.track.title(),
        "course": context.course.title(),
        "module": context.module.title(),
        "lesson": context.lesson,
        "position": position,
        "total": total,
        "completed": player.is_current_completed(),
        "completedCount": player.completed_count(),
        "percent": player.progress_percent(),
        "canOpenNext": player.can_open_next(),
        "outline": player.outline(),
        "previous": previous,
        "next": next,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use heka_core::model::LessonId;
    use heka_core::{BasePath, Curriculum};
    use services::{LessonPlayerService, ProgressStore};

    fn service() -> LessonPlayerService {
        LessonPlayerService::new(
            Curriculum::builtin(BasePath::new("/academia")),
            ProgressStore::in_memory(),
        )
    }

    fn first_linux_lesson() -> LessonId {
        "fundamentos-it/linux-practico/entorno-terminal/primeros-comandos"
            .parse()
            .unwrap()
    }

    #[test]
    fn tracks_list_every_course() {
        let text = tracks_text(service().curriculum().tracks());
        assert!(text.contains("fundamentos-it/linux-practico"));
        assert!(text.contains("fundamentos-it/redes-desde-cero"));
        assert!(text.contains("desarrollo-web/frontend-moderno"));
    }

    #[tokio::test]
    async fn fresh_lesson_shows_locked_next_and_back_to_course() {
        let player = service()
            .open_lesson_by_id(&first_linux_lesson())
            .await
            .unwrap();
        let text = lesson_text(&player);

        assert!(text.contains("Lesson 1 of 4"));
        assert!(text.contains("Progress: 0/4 lessons (0%)"));
        assert!(text.contains("Status: pending"));
        assert!(text.contains("back to course  /academia/cursos/fundamentos-it/linux-practico"));
        assert!(text.contains("(locked, complete this lesson to continue)"));
        assert!(text.contains("<- current"));
    }

    #[tokio::test]
    async fn toggled_lesson_opens_next() {
        let mut player = service()
            .open_lesson_by_id(&first_linux_lesson())
            .await
            .unwrap();
        player.toggle_current().await.unwrap();

        let text = lesson_text(&player);
        assert!(text.contains("Status: completed"));
        assert!(text.contains(
            "/academia/cursos/fundamentos-it/linux-practico/entorno-terminal/archivos-y-directorios"
        ));

        let value = lesson_json(&player);
        assert_eq!(value["percent"], 25);
        assert_eq!(value["next"]["kind"], "lesson");
        assert_eq!(value["canOpenNext"], true);
    }

    #[tokio::test]
    async fn course_overview_points_to_resume_lesson() {
        let overview = service()
            .course_overview("fundamentos-it", "linux-practico")
            .await
            .unwrap();
        let text = course_text(&overview);
        assert!(text.contains("Progress: 0/4 lessons (0%)"));
        assert!(text.contains("Continue: "));
    }
}
