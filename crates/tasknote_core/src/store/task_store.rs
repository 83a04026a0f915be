//! Task-specific store operations.

use crate::model::item::{ItemKey, TaskItem};
use crate::store::list_store::ListStore;
use log::debug;

/// Store for the task list screen.
pub type TaskListStore = ListStore<TaskItem>;

impl ListStore<TaskItem> {
    /// Flips `completed` on the task identified by `key`.
    ///
    /// Returns the new state, or `None` when no task matches.
    pub fn toggle_complete(&mut self, key: ItemKey) -> Option<bool> {
        let completed = self.get_mut(key).map(TaskItem::toggle);
        match completed {
            Some(state) => debug!(
                "event=task_toggle module=store status=ok key={key} completed={state}"
            ),
            None => debug!("event=task_toggle module=store status=skipped reason=unknown_key"),
        }
        completed
    }
}
