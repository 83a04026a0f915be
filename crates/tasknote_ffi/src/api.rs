//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the task and note screen operations to Dart via FRB.
//! - Own the process-wide session both screens live in.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Keys cross the boundary as UUID strings handed out by `*_add`.
//! - Unknown or malformed keys produce `ok = false`, never a panic.
//! - Item text is never set blank: `*_add`, `*_update` and editor submits
//!   all reject text that is empty after trim.

use log::{debug, warn};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use tasknote_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, parse_item_key,
    ping as ping_inner, ItemKey, ListItem, ListScreen, NoteItem, NoteScreen, SubmitOutcome,
    TaskItem, TaskScreen,
};

static SESSION: OnceLock<Mutex<Session>> = OnceLock::new();

/// Both screens of one running app.
#[derive(Debug, Default)]
struct Session {
    tasks: TaskScreen,
    notes: NoteScreen,
}

impl Session {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

fn task_screen(session: &mut Session) -> &mut TaskScreen {
    &mut session.tasks
}

fn note_screen(session: &mut Session) -> &mut NoteScreen {
    &mut session.notes
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may create the log directory.
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Task row as rendered by the task list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    pub key: String,
    pub value: String,
    pub completed: bool,
}

/// Note row as rendered by the notes screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteView {
    pub key: String,
    pub value: String,
}

/// Result envelope for mutating calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListActionResponse {
    /// Whether the store changed.
    pub ok: bool,
    /// Key of the affected item, when one was found or created.
    pub key: Option<String>,
    /// Human-readable outcome for diagnostics/UI.
    pub message: String,
}

impl ListActionResponse {
    fn changed(message: impl Into<String>, key: ItemKey) -> Self {
        Self {
            ok: true,
            key: Some(key.to_string()),
            message: message.into(),
        }
    }

    fn unchanged(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            key: None,
            message: message.into(),
        }
    }
}

/// Snapshot of one screen's add/edit editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorView {
    pub visible: bool,
    pub draft: String,
    /// Key under edit; `None` in create mode.
    pub editing_key: Option<String>,
}

/// Search envelope for the task list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListResponse {
    /// Matching tasks in list order.
    pub items: Vec<TaskView>,
    pub message: String,
}

/// Search envelope for the notes screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteListResponse {
    /// Matching notes in list order.
    pub items: Vec<NoteView>,
    pub message: String,
}

/// Adds a task; blank text leaves the list unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn task_add(text: String) -> ListActionResponse {
    match with_session(|session| session.tasks.store_mut().add(text)) {
        Some(key) => ListActionResponse::changed("Task added.", key),
        None => ListActionResponse::unchanged("Task text is empty."),
    }
}

/// Replaces the text of one task, keeping its completion state.
///
/// Blank text is rejected and the task keeps its value.
#[flutter_rust_bridge::frb(sync)]
pub fn task_update(key: String, text: String) -> ListActionResponse {
    let key = match parse_key("task_update", &key) {
        Ok(key) => key,
        Err(response) => return response,
    };
    if text.trim().is_empty() {
        debug!("event=task_update module=ffi status=skipped reason=blank_text");
        return ListActionResponse::unchanged("Task text is empty.");
    }
    if with_session(|session| session.tasks.store_mut().update(key, text)) {
        ListActionResponse::changed("Task updated.", key)
    } else {
        ListActionResponse::unchanged("Task not found.")
    }
}

/// Removes one task.
#[flutter_rust_bridge::frb(sync)]
pub fn task_remove(key: String) -> ListActionResponse {
    let key = match parse_key("task_remove", &key) {
        Ok(key) => key,
        Err(response) => return response,
    };
    if with_session(|session| session.tasks.remove(key)) {
        ListActionResponse::changed("Task removed.", key)
    } else {
        ListActionResponse::unchanged("Task not found.")
    }
}

/// Flips completion of one task.
#[flutter_rust_bridge::frb(sync)]
pub fn task_toggle_complete(key: String) -> ListActionResponse {
    let key = match parse_key("task_toggle_complete", &key) {
        Ok(key) => key,
        Err(response) => return response,
    };
    match with_session(|session| session.tasks.toggle_complete(key)) {
        Some(true) => ListActionResponse::changed("Task completed.", key),
        Some(false) => ListActionResponse::changed("Task reopened.", key),
        None => ListActionResponse::unchanged("Task not found."),
    }
}

/// Sets the task screen query and returns the matching tasks.
///
/// Empty query returns every task.
#[flutter_rust_bridge::frb(sync)]
pub fn task_search(query: String) -> TaskListResponse {
    let items = with_session(|session| {
        session.tasks.set_query(query);
        session
            .tasks
            .visible_items()
            .map(to_task_view)
            .collect::<Vec<_>>()
    });
    let message = result_message(items.len());
    TaskListResponse { items, message }
}

/// Adds a note; blank text leaves the list unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn note_add(text: String) -> ListActionResponse {
    match with_session(|session| session.notes.store_mut().add(text)) {
        Some(key) => ListActionResponse::changed("Note added.", key),
        None => ListActionResponse::unchanged("Note text is empty."),
    }
}

/// Replaces the text of one note; blank text is rejected.
#[flutter_rust_bridge::frb(sync)]
pub fn note_update(key: String, text: String) -> ListActionResponse {
    let key = match parse_key("note_update", &key) {
        Ok(key) => key,
        Err(response) => return response,
    };
    if text.trim().is_empty() {
        debug!("event=note_update module=ffi status=skipped reason=blank_text");
        return ListActionResponse::unchanged("Note text is empty.");
    }
    if with_session(|session| session.notes.store_mut().update(key, text)) {
        ListActionResponse::changed("Note updated.", key)
    } else {
        ListActionResponse::unchanged("Note not found.")
    }
}

/// Removes one note.
#[flutter_rust_bridge::frb(sync)]
pub fn note_remove(key: String) -> ListActionResponse {
    let key = match parse_key("note_remove", &key) {
        Ok(key) => key,
        Err(response) => return response,
    };
    if with_session(|session| session.notes.remove(key)) {
        ListActionResponse::changed("Note removed.", key)
    } else {
        ListActionResponse::unchanged("Note not found.")
    }
}

/// Sets the notes screen query and returns the matching notes.
#[flutter_rust_bridge::frb(sync)]
pub fn note_search(query: String) -> NoteListResponse {
    let items = with_session(|session| {
        session.notes.set_query(query);
        session
            .notes
            .visible_items()
            .map(to_note_view)
            .collect::<Vec<_>>()
    });
    let message = result_message(items.len());
    NoteListResponse { items, message }
}

/// Opens the task editor empty, in create mode.
#[flutter_rust_bridge::frb(sync)]
pub fn task_editor_open_create() -> EditorView {
    update_editor(task_screen, ListScreen::open_create)
}

/// Opens the task editor on an existing task, preloaded with its text.
#[flutter_rust_bridge::frb(sync)]
pub fn task_editor_begin_edit(key: String) -> ListActionResponse {
    begin_edit(task_screen, "task_editor_begin_edit", "Task", &key)
}

/// Replaces the task editor draft.
#[flutter_rust_bridge::frb(sync)]
pub fn task_editor_set_draft(text: String) -> EditorView {
    update_editor(task_screen, |screen| screen.set_draft(text))
}

/// Adds or updates a task from the editor draft.
#[flutter_rust_bridge::frb(sync)]
pub fn task_editor_submit() -> ListActionResponse {
    submit_editor(task_screen, "Task")
}

/// Discards the task editor draft and closes it.
#[flutter_rust_bridge::frb(sync)]
pub fn task_editor_cancel() -> EditorView {
    update_editor(task_screen, ListScreen::cancel_editor)
}

/// Dismisses the task editor, keeping draft and edit target.
#[flutter_rust_bridge::frb(sync)]
pub fn task_editor_hide() -> EditorView {
    update_editor(task_screen, ListScreen::hide_editor)
}

/// Current task editor state.
#[flutter_rust_bridge::frb(sync)]
pub fn task_editor_state() -> EditorView {
    update_editor(task_screen, |_| ())
}

/// Opens the note editor empty, in create mode.
#[flutter_rust_bridge::frb(sync)]
pub fn note_editor_open_create() -> EditorView {
    update_editor(note_screen, ListScreen::open_create)
}

/// Opens the note editor on an existing note, preloaded with its text.
#[flutter_rust_bridge::frb(sync)]
pub fn note_editor_begin_edit(key: String) -> ListActionResponse {
    begin_edit(note_screen, "note_editor_begin_edit", "Note", &key)
}

/// Replaces the note editor draft.
#[flutter_rust_bridge::frb(sync)]
pub fn note_editor_set_draft(text: String) -> EditorView {
    update_editor(note_screen, |screen| screen.set_draft(text))
}

/// Adds or updates a note from the editor draft.
#[flutter_rust_bridge::frb(sync)]
pub fn note_editor_submit() -> ListActionResponse {
    submit_editor(note_screen, "Note")
}

/// Discards the note editor draft and closes it.
#[flutter_rust_bridge::frb(sync)]
pub fn note_editor_cancel() -> EditorView {
    update_editor(note_screen, ListScreen::cancel_editor)
}

/// Dismisses the note editor, keeping draft and edit target.
#[flutter_rust_bridge::frb(sync)]
pub fn note_editor_hide() -> EditorView {
    update_editor(note_screen, ListScreen::hide_editor)
}

/// Current note editor state.
#[flutter_rust_bridge::frb(sync)]
pub fn note_editor_state() -> EditorView {
    update_editor(note_screen, |_| ())
}

/// Drops every task and note, clears both queries and resets both editors.
#[flutter_rust_bridge::frb(sync)]
pub fn reset_session() {
    with_session(Session::reset);
}

fn with_session<R>(f: impl FnOnce(&mut Session) -> R) -> R {
    let mut guard = lock_session();
    f(&mut *guard)
}

fn lock_session() -> MutexGuard<'static, Session> {
    SESSION
        .get_or_init(|| Mutex::new(Session::default()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

fn update_editor<T: ListItem>(
    select: impl Fn(&mut Session) -> &mut ListScreen<T>,
    f: impl FnOnce(&mut ListScreen<T>),
) -> EditorView {
    with_session(|session| {
        let screen = select(session);
        f(&mut *screen);
        to_editor_view(screen)
    })
}

fn begin_edit<T: ListItem>(
    select: impl Fn(&mut Session) -> &mut ListScreen<T>,
    operation: &str,
    label: &str,
    raw_key: &str,
) -> ListActionResponse {
    let key = match parse_key(operation, raw_key) {
        Ok(key) => key,
        Err(response) => return response,
    };
    if with_session(|session| select(session).begin_edit(key)) {
        ListActionResponse::changed(format!("Editing {}.", label.to_lowercase()), key)
    } else {
        ListActionResponse::unchanged(format!("{label} not found."))
    }
}

fn submit_editor<T: ListItem>(
    select: impl Fn(&mut Session) -> &mut ListScreen<T>,
    label: &str,
) -> ListActionResponse {
    match with_session(|session| select(session).submit_editor()) {
        SubmitOutcome::Ignored => ListActionResponse::unchanged(format!("{label} text is empty.")),
        SubmitOutcome::Added(key) => ListActionResponse::changed(format!("{label} added."), key),
        SubmitOutcome::Updated(key) => {
            ListActionResponse::changed(format!("{label} updated."), key)
        }
        SubmitOutcome::Stale(_) => ListActionResponse::unchanged(format!("{label} not found.")),
    }
}

fn to_editor_view<T: ListItem>(screen: &ListScreen<T>) -> EditorView {
    let editor = screen.editor();
    EditorView {
        visible: editor.is_visible(),
        draft: editor.draft().to_string(),
        editing_key: editor.editing_key().map(|key| key.to_string()),
    }
}

fn parse_key(operation: &str, raw: &str) -> Result<ItemKey, ListActionResponse> {
    parse_item_key(raw).map_err(|err| {
        warn!("event=key_parse module=ffi status=error op={operation}");
        ListActionResponse::unchanged(format!("{operation} failed: {err}"))
    })
}

fn result_message(count: usize) -> String {
    if count == 0 {
        "No results.".to_string()
    } else {
        format!("Found {count} result(s).")
    }
}

fn to_task_view(task: &TaskItem) -> TaskView {
    TaskView {
        key: task.key.to_string(),
        value: task.value.clone(),
        completed: task.completed,
    }
}

fn to_note_view(note: &NoteItem) -> NoteView {
    NoteView {
        key: note.key.to_string(),
        value: note.value.clone(),
    }
}
