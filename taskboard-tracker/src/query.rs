//! Stateless query functions over task snapshots.
//!
//! Both queries filter linearly over a full snapshot of the task
//! collection and return an empty sequence when nothing matches, in
//! contrast to the listing operations' error-on-empty policy. Linear scans
//! are fine at the collection's configured entry bound.

use taskboard_proto::identity::Identity;
use taskboard_proto::task::Task;

/// Returns the tasks assigned to `identity` whose completion state equals
/// `done`, preserving snapshot order.
#[must_use]
pub fn personal_tasks(tasks: &[Task], identity: &Identity, done: bool) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| t.assigned_to == *identity && t.is_done == done)
        .cloned()
        .collect()
}

/// Returns the tasks whose title or description contains `text`,
/// case-insensitively, preserving snapshot order.
#[must_use]
pub fn search_tasks(tasks: &[Task], text: &str) -> Vec<Task> {
    let needle = text.to_lowercase();
    tasks
        .iter()
        .filter(|t| {
            t.title.to_lowercase().contains(&needle)
                || t.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
