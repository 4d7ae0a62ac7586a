//! Property tests for identifier allocation.
//!
//! For any interleaving of successful creations and deletions, returned
//! identifiers are strictly increasing from 1 with no repeats; deletions
//! never cause reuse.
//!
//! Verification command: `cargo test --test identifiers`

use proptest::prelude::*;
use taskboard_proto::identity::Identity;
use taskboard_proto::member::MemberId;
use taskboard_proto::task::{TaskId, TaskPayload};
use taskboard_tracker::tracker::Tracker;

fn admin() -> Identity {
    Identity::new("admin-A")
}

proptest! {
    #[test]
    fn member_ids_strictly_increase_across_deletions(ops in prop::collection::vec(any::<bool>(), 1..90)) {
        let mut tracker = Tracker::with_admin(admin());
        let mut live: Vec<MemberId> = Vec::new();
        let mut issued: Vec<u32> = Vec::new();

        // true = add a member, false = delete the oldest surviving one.
        for (i, add) in ops.iter().enumerate() {
            if *add || live.is_empty() {
                let id = tracker
                    .add_member(&admin(), Identity::new(format!("peer-{i}")))
                    .unwrap();
                issued.push(id.get());
                live.push(id);
            } else {
                let id = live.remove(0);
                tracker.delete_member(&admin(), id).unwrap();
            }
        }

        prop_assert_eq!(issued.first().copied(), Some(1));
        prop_assert!(issued.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn task_ids_strictly_increase_across_deletions(ops in prop::collection::vec(any::<bool>(), 1..90)) {
        let mut tracker = Tracker::with_admin(admin());
        tracker.add_member(&admin(), Identity::new("P1")).unwrap();

        let mut live: Vec<TaskId> = Vec::new();
        let mut issued: Vec<u32> = Vec::new();

        for add in &ops {
            if *add || live.is_empty() {
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
                issued.push(id.get());
                live.push(id);
            } else {
                let id = live.remove(0);
                tracker.delete_task(&admin(), id).unwrap();
            }
        }

        prop_assert_eq!(issued.first().copied(), Some(1));
        prop_assert!(issued.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn rejected_creations_never_consume_identifiers(rejections in 1usize..20) {
        let mut tracker = Tracker::with_admin(admin());
        tracker.add_member(&admin(), Identity::new("P1")).unwrap();

        for _ in 0..rejections {
            let _ = tracker.add_task(
                &admin(),
                TaskPayload {
                    title: String::new(),
                    description: "Q3 numbers".to_string(),
                    assigned_to: Identity::new("P1"),
                    deadline_hours: 1,
                },
            );
        }

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
        prop_assert_eq!(id, TaskId::from_raw(1));
    }
}
