//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `tasknote_core` linkage without the Flutter runtime.
//! - Run one deterministic task/note walkthrough and print its results.
//!
//! Environment:
//! - `TASKNOTE_LOG_DIR`: absolute directory; enables file logging when set.
//! - `TASKNOTE_LOG_LEVEL`: overrides the build-mode default level.

use log::info;
use std::process::ExitCode;
use tasknote_core::{default_log_level, init_logging, NoteScreen, SubmitOutcome, TaskScreen};

fn main() -> ExitCode {
    if let Err(err) = configure_logging() {
        eprintln!("tasknote: {err}");
        return ExitCode::FAILURE;
    }

    println!("tasknote_core ping={}", tasknote_core::ping());
    println!("tasknote_core version={}", tasknote_core::core_version());

    let mut tasks = TaskScreen::new();
    let seeded = seed_tasks(&mut tasks);
    println!("tasks seeded={seeded}");
    tasks.set_query("walk");
    for task in tasks.visible_items() {
        println!(
            "task [{}] {}",
            if task.completed { "x" } else { " " },
            task.value
        );
    }

    let mut notes = NoteScreen::new();
    notes.open_create();
    notes.set_draft("Groceries: eggs, flour");
    let added = matches!(notes.submit_editor(), SubmitOutcome::Added(_));
    println!("note added={added} count={}", notes.store().len());

    info!(
        "event=cli_smoke module=cli status=ok tasks={} notes={}",
        tasks.store().len(),
        notes.store().len()
    );
    ExitCode::SUCCESS
}

/// Adds "Buy milk" and a completed "Walk dog"; `true` when every step applied.
fn seed_tasks(tasks: &mut TaskScreen) -> bool {
    let milk = tasks.store_mut().add("Buy milk");
    let walk = tasks.store_mut().add("Walk dog");
    let walk_completed = walk.and_then(|key| tasks.toggle_complete(key));
    milk.is_some() && walk_completed == Some(true)
}

fn configure_logging() -> Result<(), String> {
    let Ok(dir) = std::env::var("TASKNOTE_LOG_DIR") else {
        return Ok(());
    };
    let level = std::env::var("TASKNOTE_LOG_LEVEL")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default_log_level().to_string());
    init_logging(&level, &dir)
}

#[cfg(test)]
mod tests {
    use super::seed_tasks;
    use tasknote_core::TaskScreen;

    #[test]
    fn seed_tasks_adds_both_and_completes_walk() {
        let mut tasks = TaskScreen::new();
        assert!(seed_tasks(&mut tasks));

        let items = tasks.store().items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].value, "Buy milk");
        assert!(!items[0].completed);
        assert_eq!(items[1].value, "Walk dog");
        assert!(items[1].completed);
    }
}
