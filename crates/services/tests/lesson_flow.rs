use std::sync::Arc;

use heka_core::progress::{DEFAULT_PROGRESS_KEY, NextStep, PreviousStep};
use heka_core::{BasePath, Curriculum};
use services::{LessonPlayerError, LessonPlayerService, ProgressStore};
use storage::repository::{InMemoryRepository, KeyValueRepository};

const TRACK: &str = "fundamentos-it";
const COURSE: &str = "linux-practico";

fn service(repo: Arc<InMemoryRepository>) -> LessonPlayerService {
    LessonPlayerService::new(
        Curriculum::builtin(BasePath::new("/heka/")),
        ProgressStore::with_default_key(repo),
    )
}

#[tokio::test]
async fn completing_lessons_unlocks_the_next_one() {
    let repo = Arc::new(InMemoryRepository::new());
    let svc = service(repo.clone());

    let mut first = svc
        .open_lesson(TRACK, COURSE, "entorno-terminal", "primeros-comandos")
        .await
        .unwrap();
    assert_eq!(first.position(), (1, 4));
    assert_eq!(first.previous_step(), PreviousStep::BackToCourse);
    assert!(!first.can_open_next());
    assert!(matches!(first.next_step(), NextStep::Locked(_)));
    assert_eq!(first.course_href(), "/heka/cursos/fundamentos-it/linux-practico");

    assert!(first.toggle_current().await.unwrap());
    assert!(first.is_current_completed());
    assert_eq!(first.progress_percent(), 25);
    match first.next_step() {
        NextStep::Open(node) => {
            assert_eq!(
                node.href,
                "/heka/cursos/fundamentos-it/linux-practico/entorno-terminal/archivos-y-directorios"
            );
        }
        other => panic!("expected open next step, got {other:?}"),
    }

    let raw = repo.get(DEFAULT_PROGRESS_KEY).await.unwrap().unwrap();
    assert_eq!(
        raw,
        r#"{"completedLessonIds":["fundamentos-it/linux-practico/entorno-terminal/primeros-comandos"]}"#
    );

    let second = svc
        .open_lesson(TRACK, COURSE, "entorno-terminal", "archivos-y-directorios")
        .await
        .unwrap();
    let unlocked: Vec<bool> = second.outline().iter().map(|s| s.unlocked).collect();
    assert_eq!(unlocked, [true, true, false, false]);
    assert_eq!(second.completed_count(), 1);
}

#[tokio::test]
async fn deep_link_opens_locked_lesson_but_keeps_gate() {
    let svc = service(Arc::new(InMemoryRepository::new()));

    let third = svc
        .open_lesson(TRACK, COURSE, "automatizacion-inicial", "bash-basico")
        .await
        .unwrap();
    let outline = third.outline();
    assert!(outline[2].unlocked);
    assert!(outline[2].is_current);
    assert!(!outline[1].unlocked);
    assert!(!outline[3].unlocked);
    assert!(!third.can_open_next());
}

#[tokio::test]
async fn toggling_twice_restores_persisted_set() {
    let repo = Arc::new(InMemoryRepository::new());
    let svc = service(repo.clone());

    let mut player = svc
        .open_lesson(TRACK, COURSE, "entorno-terminal", "primeros-comandos")
        .await
        .unwrap();
    let before = player.progress().clone();
    assert!(player.toggle_current().await.unwrap());
    assert!(!player.toggle_current().await.unwrap());
    assert_eq!(player.progress(), &before);

    let reloaded = svc.store().load().await;
    assert_eq!(reloaded, before);
}

#[tokio::test]
async fn last_lesson_offers_repeat() {
    let svc = service(Arc::new(InMemoryRepository::new()));
    let last = svc
        .open_lesson(TRACK, COURSE, "automatizacion-inicial", "tarea-final-linux")
        .await
        .unwrap();
    assert_eq!(last.position(), (4, 4));
    assert_eq!(last.next_step(), NextStep::Repeat);
    assert!(last.can_open_next());
    assert!(matches!(last.previous_step(), PreviousStep::Open(_)));
}

#[tokio::test]
async fn corrupt_progress_degrades_to_empty() {
    let repo = Arc::new(InMemoryRepository::new());
    repo.put(DEFAULT_PROGRESS_KEY, r#"{"completedLessonIds":"not-a-list"}"#)
        .await
        .unwrap();
    let svc = service(repo.clone());

    let mut player = svc
        .open_lesson(TRACK, COURSE, "entorno-terminal", "primeros-comandos")
        .await
        .unwrap();
    assert!(player.progress().is_empty());

    // the next toggle overwrites the corrupt entry with a well-formed one
    player.toggle_current().await.unwrap();
    let raw = repo.get(DEFAULT_PROGRESS_KEY).await.unwrap().unwrap();
    assert!(raw.starts_with(r#"{"completedLessonIds":["#));
}

#[tokio::test]
async fn unknown_segments_are_not_found() {
    let svc = service(Arc::new(InMemoryRepository::new()));

    let cases = [
        ("nope", COURSE, "entorno-terminal", "primeros-comandos"),
        (TRACK, "nope", "entorno-terminal", "primeros-comandos"),
        (TRACK, COURSE, "nope", "primeros-comandos"),
        (TRACK, COURSE, "entorno-terminal", "nope"),
    ];
    for (track, course, module, lesson) in cases {
        let result = svc.open_lesson(track, course, module, lesson).await;
        assert!(matches!(result, Err(LessonPlayerError::NotFound(_))));
    }

    let result = svc.course_overview(TRACK, "nope").await;
    assert!(matches!(result, Err(LessonPlayerError::NotFound(_))));
}

#[tokio::test]
async fn progress_is_scoped_to_the_course() {
    let repo = Arc::new(InMemoryRepository::new());
    let svc = service(repo);

    let mut network = svc
        .open_lesson(TRACK, "redes-desde-cero", "fundamentos-red", "modelo-osi-simple")
        .await
        .unwrap();
    network.toggle_current().await.unwrap();
    assert_eq!(network.progress_percent(), 50);

    let overview = svc.course_overview(TRACK, COURSE).await.unwrap();
    assert_eq!(overview.completed, 0);
    assert_eq!(overview.percent, 0);
}

#[tokio::test]
async fn reset_clears_everything() {
    let repo = Arc::new(InMemoryRepository::new());
    let svc = service(repo.clone());

    let id = "fundamentos-it/linux-practico/entorno-terminal/primeros-comandos"
        .parse()
        .unwrap();
    let mut player = svc.open_lesson_by_id(&id).await.unwrap();
    player.toggle_current().await.unwrap();

    svc.reset_progress().await.unwrap();
    assert!(repo.get(DEFAULT_PROGRESS_KEY).await.unwrap().is_none());
    let overview = svc.course_overview(TRACK, COURSE).await.unwrap();
    assert_eq!(overview.completed, 0);
}
