//! End-to-end walkthrough of the tracker operation surface.
//!
//! Exercises the full member and task lifecycle as one scenario: register,
//! assign, search, complete, delete, with the authorization and weak
//! reference behavior observable at each step.
//!
//! Verification command: `cargo test --test scenario`

use std::time::{SystemTime, UNIX_EPOCH};

use taskboard_proto::identity::Identity;
use taskboard_proto::member::MemberId;
use taskboard_proto::task::{TaskId, TaskPayload};
use taskboard_tracker::error::TrackerError;
use taskboard_tracker::tracker::Tracker;

fn admin() -> Identity {
    Identity::new("admin-A")
}

fn now_ns() -> u64 {
    u64::try_from(
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos(),
    )
    .unwrap_or(u64::MAX)
}

#[test]
fn full_walkthrough() {
    let mut tracker = Tracker::with_admin(admin());
    assert_eq!(tracker.owner(), &admin());

    // 1. Admin registers P1.
    let member_id = tracker.add_member(&admin(), Identity::new("P1")).unwrap();
    assert_eq!(member_id, MemberId::from_raw(1));
    let member = tracker.member(member_id).unwrap();
    assert_eq!(member.id, member_id);
    assert_eq!(member.identity, Identity::new("P1"));

    // 2. A member cannot register members; the collection is unchanged.
    let err = tracker
        .add_member(&Identity::new("P1"), Identity::new("P2"))
        .unwrap_err();
    assert_eq!(err, TrackerError::Unauthorized);
    assert_eq!(tracker.members().unwrap().len(), 1);

    // 3. Admin assigns a task to P1.
    let before = now_ns();
    let task_id = tracker
        .add_task(
            &admin(),
            TaskPayload {
                title: "Report".to_string(),
                description: "Q3 numbers".to_string(),
                assigned_to: Identity::new("P1"),
                deadline_hours: 5,
            },
        )
        .unwrap();
    assert_eq!(task_id, TaskId::from_raw(1));

    let task = tracker.task(task_id).unwrap();
    assert!(!task.is_done);
    assert_eq!(task.deadline_hours, 5);
    assert!(task.start_time >= before);
    assert_eq!(
        task.deadline_at(),
        task.start_time + 5 * 3_600 * 1_000_000_000
    );

    // 4. Search is case-insensitive.
    let hits = tracker.search_tasks("report");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, task_id);

    // 5. The assignee completes the task; the open/done filters flip.
    assert_eq!(
        tracker.complete_task(&Identity::new("P1"), task_id).unwrap(),
        task_id
    );
    assert!(tracker.personal_tasks(&Identity::new("P1"), false).is_empty());
    let done = tracker.personal_tasks(&Identity::new("P1"), true);
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].id, task_id);

    // 6. Deleting the member leaves the task's assignee stale.
    tracker.delete_member(&admin(), member_id).unwrap();
    assert_eq!(
        tracker.member(member_id).unwrap_err(),
        TrackerError::MemberNotFound(member_id)
    );
    assert_eq!(tracker.task(task_id).unwrap().assigned_to, Identity::new("P1"));
}

#[test]
fn listing_policies_differ_from_query_policies() {
    let mut tracker = Tracker::with_admin(admin());

    // Empty collections: listing errors, queries return empty sequences.
    assert_eq!(tracker.members().unwrap_err(), TrackerError::NoMembers);
    assert_eq!(tracker.tasks().unwrap_err(), TrackerError::NoTasks);
    assert!(tracker.personal_tasks(&Identity::new("P1"), false).is_empty());
    assert!(tracker.search_tasks("anything").is_empty());

    tracker.add_member(&admin(), Identity::new("P1")).unwrap();
    assert_eq!(tracker.members().unwrap().len(), 1);
}

#[test]
fn rejected_task_creation_leaves_no_trace() {
    let mut tracker = Tracker::with_admin(admin());
    tracker.add_member(&admin(), Identity::new("P1")).unwrap();

    let bad = TaskPayload {
        title: "Report".to_string(),
        description: "Q3 numbers".to_string(),
        assigned_to: Identity::new("P1"),
        deadline_hours: 0,
    };
    assert_eq!(
        tracker.add_task(&admin(), bad).unwrap_err(),
        TrackerError::DeadlineTooShort
    );
    assert_eq!(tracker.tasks().unwrap_err(), TrackerError::NoTasks);

    // The rejection consumed no identifier.
    let id = tracker
        .add_task(
            &admin(),
            TaskPayload {
                title: "Report".to_string(),
                description: "Q3 numbers".to_string(),
                assigned_to: Identity::new("P1"),
                deadline_hours: 1,
            },
        )
        .unwrap();
    assert_eq!(id, TaskId::from_raw(1));
}

#[test]
fn update_member_keeps_id_and_swaps_identity() {
    let mut tracker = Tracker::with_admin(admin());
    let id = tracker.add_member(&admin(), Identity::new("P1")).unwrap();

    let returned = tracker
        .update_member(&admin(), id, Identity::new("P1-rotated"))
        .unwrap();
    assert_eq!(returned, id);
    assert!(tracker.is_member(&Identity::new("P1-rotated")));
    assert!(!tracker.is_member(&Identity::new("P1")));

    // A later registration still continues the sequence.
    let next = tracker.add_member(&admin(), Identity::new("P2")).unwrap();
    assert_eq!(next, MemberId::from_raw(2));
}
