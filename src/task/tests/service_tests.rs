//! Lifecycle service tests over in-memory store and timer doubles.

use super::{FixedClock, local_datetime};
use crate::reminder::adapters::memory::RecordingTimerFacility;
use crate::reminder::domain::ReminderPolicy;
use crate::reminder::services::ReminderScheduler;
use crate::task::adapters::memory::InMemoryTaskRepository;
use crate::task::domain::{Category, TaskDomainError, TaskDraft, TaskId, TaskPatch};
use crate::task::ports::{TaskRepository, TaskRepositoryError};
use crate::task::services::{TaskLifecycleError, TaskLifecycleService};
use rstest::{fixture, rstest};
use std::sync::Arc;

type TestService =
    TaskLifecycleService<InMemoryTaskRepository, RecordingTimerFacility, FixedClock>;

struct Harness {
    service: TestService,
    repository: Arc<InMemoryTaskRepository>,
    facility: Arc<RecordingTimerFacility>,
}

#[fixture]
fn harness() -> Harness {
    let repository = Arc::new(InMemoryTaskRepository::new());
    let facility = Arc::new(RecordingTimerFacility::new());
    let scheduler = ReminderScheduler::new(
        Arc::clone(&facility),
        Arc::new(FixedClock(local_datetime(2025, 6, 10, 8, 0))),
        ReminderPolicy::at_due_time(),
    );
    let service = TaskLifecycleService::new(Arc::clone(&repository), scheduler);
    Harness {
        service,
        repository,
        facility,
    }
}

fn draft(title: &str, due_time: Option<&str>) -> TaskDraft {
    let base = TaskDraft::new(title, Category::Work).expect("valid draft");
    match due_time {
        Some(value) => base.with_due_time(value),
        None => base,
    }
}

#[rstest]
fn create_with_due_time_arms_a_reminder(harness: Harness) {
    let task = harness
        .service
        .create(&draft("Write report", Some("09:00")))
        .expect("create should succeed");

    let registration = harness
        .facility
        .registration(task.id())
        .expect("registration should exist");
    assert_eq!(registration.trigger_at, local_datetime(2025, 6, 10, 9, 0));
    assert_eq!(registration.payload.id(), task.id());
    assert_eq!(registration.payload.title(), "Write report");
}

#[rstest]
fn create_without_due_time_stays_unarmed(harness: Harness) {
    let task = harness
        .service
        .create(&draft("No deadline", None))
        .expect("create should succeed");

    assert!(harness.facility.registration(task.id()).is_none());
}

#[rstest]
fn malformed_due_time_never_blocks_the_save(harness: Harness) {
    let task = harness
        .service
        .create(&draft("Fuzzy deadline", Some("25:99")))
        .expect("create should succeed despite the bad due time");

    let stored = harness
        .repository
        .find_by_id(task.id())
        .expect("lookup should succeed")
        .expect("task should be stored");
    assert_eq!(stored.title(), "Fuzzy deadline");
    assert_eq!(stored.due_time(), Some("25:99"));
    assert!(!stored.completed());
    assert!(harness.facility.registrations().is_empty());
}

#[rstest]
fn updating_the_due_time_replaces_the_registration(harness: Harness) {
    let task = harness
        .service
        .create(&draft("Shifting deadline", Some("09:00")))
        .expect("create should succeed");

    harness
        .service
        .update(task.id(), TaskPatch::new().due_time("10:30"))
        .expect("update should succeed");

    assert_eq!(harness.facility.registrations().len(), 1);
    let registration = harness
        .facility
        .registration(task.id())
        .expect("registration should exist");
    assert_eq!(registration.trigger_at, local_datetime(2025, 6, 10, 10, 30));
}

#[rstest]
fn breaking_the_due_time_cancels_the_stale_registration(harness: Harness) {
    let task = harness
        .service
        .create(&draft("Was fine", Some("09:00")))
        .expect("create should succeed");

    let updated = harness
        .service
        .update(task.id(), TaskPatch::new().due_time("not a time"))
        .expect("update should succeed despite the bad due time");

    assert_eq!(updated.due_time(), Some("not a time"));
    assert!(harness.facility.registrations().is_empty());
}

#[rstest]
fn completing_disarms_and_uncompleting_rearms(harness: Harness) {
    let task = harness
        .service
        .create(&draft("Toggle me", Some("09:00")))
        .expect("create should succeed");

    harness
        .service
        .set_completed(task.id(), true)
        .expect("completing should succeed");
    assert!(harness.facility.registration(task.id()).is_none());

    harness
        .service
        .set_completed(task.id(), false)
        .expect("uncompleting should succeed");
    assert!(harness.facility.registration(task.id()).is_some());
}

#[rstest]
fn clearing_the_due_time_disarms(harness: Harness) {
    let task = harness
        .service
        .create(&draft("Fading deadline", Some("09:00")))
        .expect("create should succeed");

    harness
        .service
        .update(task.id(), TaskPatch::new().clear_due_time())
        .expect("update should succeed");

    assert!(harness.facility.registrations().is_empty());
}

#[rstest]
fn updating_an_unknown_id_fails_with_not_found(harness: Harness) {
    let result = harness
        .service
        .update(TaskId::new(404), TaskPatch::new().title("ghost"));

    assert!(matches!(
        result,
        Err(TaskLifecycleError::Repository(
            TaskRepositoryError::NotFound(id)
        )) if id == TaskId::new(404)
    ));
}

#[rstest]
fn rejected_patch_leaves_the_stored_task_unchanged(harness: Harness) {
    let task = harness
        .service
        .create(&draft("Original title", Some("09:00")))
        .expect("create should succeed");

    let result = harness.service.update(task.id(), TaskPatch::new().title("  "));

    assert!(matches!(
        result,
        Err(TaskLifecycleError::Domain(TaskDomainError::EmptyTitle))
    ));
    let stored = harness
        .repository
        .find_by_id(task.id())
        .expect("lookup should succeed")
        .expect("task should be stored");
    assert_eq!(stored.title(), "Original title");
}

#[rstest]
fn deleting_cancels_the_registration_and_removes_the_task(harness: Harness) {
    let task = harness
        .service
        .create(&draft("Doomed", Some("09:00")))
        .expect("create should succeed");

    harness.service.delete(task.id()).expect("delete should succeed");

    assert!(harness.facility.registrations().is_empty());
    assert!(
        harness
            .repository
            .find_by_id(task.id())
            .expect("lookup should succeed")
            .is_none()
    );
}

#[rstest]
fn deleting_an_unknown_id_is_a_noop(harness: Harness) {
    harness
        .service
        .delete(TaskId::new(404))
        .expect("deleting an absent task should succeed");
}

#[rstest]
fn rearm_all_rebuilds_registrations_from_the_store(harness: Harness) {
    let pending = harness
        .service
        .create(&draft("Pending", Some("09:00")))
        .expect("create should succeed");
    harness
        .service
        .create(&draft("Broken", Some("25:99")))
        .expect("create should succeed");
    harness
        .service
        .create(&draft("Undated", None))
        .expect("create should succeed");
    let completed = harness
        .service
        .create(&draft("Completed", Some("11:00")))
        .expect("create should succeed");
    harness
        .service
        .set_completed(completed.id(), true)
        .expect("completing should succeed");

    let armed = harness.service.rearm_all().expect("rearm should succeed");

    assert_eq!(armed, 1);
    let registrations = harness.facility.registrations();
    assert_eq!(registrations.len(), 1);
    assert!(registrations.contains_key(&pending.id()));
}

#[rstest]
fn partial_update_preserves_unspecified_fields_end_to_end(harness: Harness) {
    let task = harness
        .service
        .create(
            &TaskDraft::new("Read chapter four", Category::Study)
                .expect("valid draft")
                .with_description("Pages 120-160")
                .with_due_time("21:00"),
        )
        .expect("create should succeed");

    harness
        .service
        .update(task.id(), TaskPatch::new().title("Read chapter five"))
        .expect("update should succeed");

    let stored = harness
        .repository
        .find_by_id(task.id())
        .expect("lookup should succeed")
        .expect("task should be stored");
    assert_eq!(stored.title(), "Read chapter five");
    assert_eq!(stored.description(), Some("Pages 120-160"));
    assert_eq!(stored.category(), Category::Study);
    assert_eq!(stored.due_time(), Some("21:00"));
}
