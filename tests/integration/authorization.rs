//! Authorization sweep: every mutating operation under a non-admin caller.
//!
//! Each rejected call must return `Unauthorized` and leave all state
//! unchanged.
//!
//! Verification command: `cargo test --test authorization`

use taskboard_proto::identity::Identity;
use taskboard_proto::member::MemberId;
use taskboard_proto::task::{TaskId, TaskPayload};
use taskboard_tracker::error::TrackerError;
use taskboard_tracker::tracker::Tracker;

fn admin() -> Identity {
    Identity::new("admin-A")
}

fn intruder() -> Identity {
    Identity::new("intruder")
}

fn payload() -> TaskPayload {
    TaskPayload {
        title: "Report".to_string(),
        description: "Q3 numbers".to_string(),
        assigned_to: Identity::new("P1"),
        deadline_hours: 5,
    }
}

/// A tracker with one member and one open task.
fn populated_tracker() -> Tracker {
    let mut tracker = Tracker::with_admin(admin());
    tracker.add_member(&admin(), Identity::new("P1")).unwrap();
    tracker.add_task(&admin(), payload()).unwrap();
    tracker
}

#[test]
fn add_member_requires_admin() {
    let mut tracker = Tracker::with_admin(admin());
    let err = tracker
        .add_member(&intruder(), Identity::new("P1"))
        .unwrap_err();
    assert_eq!(err, TrackerError::Unauthorized);
    assert_eq!(tracker.members().unwrap_err(), TrackerError::NoMembers);
}

#[test]
fn delete_member_requires_admin() {
    let mut tracker = populated_tracker();
    let err = tracker
        .delete_member(&intruder(), MemberId::from_raw(1))
        .unwrap_err();
    assert_eq!(err, TrackerError::Unauthorized);
    assert_eq!(tracker.members().unwrap().len(), 1);
}

#[test]
fn update_member_requires_admin() {
    let mut tracker = populated_tracker();
    let err = tracker
        .update_member(&intruder(), MemberId::from_raw(1), Identity::new("evil"))
        .unwrap_err();
    assert_eq!(err, TrackerError::Unauthorized);
    assert_eq!(
        tracker.member(MemberId::from_raw(1)).unwrap().identity,
        Identity::new("P1")
    );
}

#[test]
fn add_task_requires_admin() {
    let mut tracker = populated_tracker();
    let err = tracker.add_task(&intruder(), payload()).unwrap_err();
    assert_eq!(err, TrackerError::Unauthorized);
    assert_eq!(tracker.tasks().unwrap().len(), 1);
}

#[test]
fn even_a_member_is_not_an_admin() {
    let mut tracker = populated_tracker();
    // P1 is registered, but registration grants no mutating rights.
    let err = tracker.add_task(&Identity::new("P1"), payload()).unwrap_err();
    assert_eq!(err, TrackerError::Unauthorized);
}

#[test]
fn delete_task_requires_admin() {
    let mut tracker = populated_tracker();
    let err = tracker
        .delete_task(&intruder(), TaskId::from_raw(1))
        .unwrap_err();
    assert_eq!(err, TrackerError::Unauthorized);
    assert_eq!(tracker.tasks().unwrap().len(), 1);
}

#[test]
fn complete_task_rejects_non_assignee_non_admin() {
    let mut tracker = populated_tracker();
    let err = tracker
        .complete_task(&intruder(), TaskId::from_raw(1))
        .unwrap_err();
    assert_eq!(err, TrackerError::Unauthorized);
    assert!(!tracker.task(TaskId::from_raw(1)).unwrap().is_done);
}

#[test]
fn queries_are_open_to_any_caller() {
    let tracker = populated_tracker();
    // Reads take no caller argument at all; the intruder can observe but
    // not mutate.
    assert!(tracker.is_member(&Identity::new("P1")));
    assert_eq!(tracker.member(MemberId::from_raw(1)).unwrap().id.get(), 1);
    assert_eq!(tracker.tasks().unwrap().len(), 1);
    assert_eq!(tracker.search_tasks("report").len(), 1);
}
