//! Domain-focused tests for task validation and patch merging.

use crate::task::domain::{
    Category, PersistedTaskData, Task, TaskDomainError, TaskDraft, TaskId, TaskPatch,
};
use rstest::rstest;

fn stored_task() -> Task {
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(7),
        title: "Prepare standup notes".to_owned(),
        description: Some("Cover yesterday's incident".to_owned()),
        category: Category::Work,
        due_time: Some("09:00".to_owned()),
        completed: false,
    })
}

#[rstest]
#[case("WORK", Category::Work)]
#[case("study", Category::Study)]
#[case(" Etc ", Category::Etc)]
fn category_parses_known_labels(#[case] input: &str, #[case] expected: Category) {
    assert_eq!(Category::try_from(input), Ok(expected));
}

#[rstest]
#[case("")]
#[case("ALL")]
#[case("CHORES")]
fn category_rejects_unknown_labels(#[case] input: &str) {
    assert_eq!(
        Category::try_from(input),
        Err(TaskDomainError::UnknownCategory(input.to_owned()))
    );
}

#[rstest]
fn category_storage_text_round_trips() {
    for category in [Category::Work, Category::Study, Category::Etc] {
        assert_eq!(Category::try_from(category.as_str()), Ok(category));
    }
}

#[rstest]
fn draft_rejects_empty_title() {
    assert_eq!(
        TaskDraft::new("   ", Category::Work).map(|_| ()),
        Err(TaskDomainError::EmptyTitle)
    );
}

#[rstest]
fn draft_trims_the_title() {
    let draft = TaskDraft::new("  Water the plants  ", Category::Etc).expect("valid draft");
    assert_eq!(draft.title(), "Water the plants");
    assert!(!draft.completed());
    assert!(draft.due_time().is_none());
}

#[rstest]
fn patch_overwrites_only_provided_fields() {
    let mut task = stored_task();
    task.apply(TaskPatch::new().title("Prepare retro notes"))
        .expect("patch should apply");

    assert_eq!(task.title(), "Prepare retro notes");
    assert_eq!(task.description(), Some("Cover yesterday's incident"));
    assert_eq!(task.category(), Category::Work);
    assert_eq!(task.due_time(), Some("09:00"));
    assert!(!task.completed());
}

#[rstest]
fn patch_without_category_keeps_existing_category() {
    let mut task = stored_task();
    task.apply(TaskPatch::new().due_time("10:30").completed(true))
        .expect("patch should apply");

    assert_eq!(task.category(), Category::Work);
    assert_eq!(task.due_time(), Some("10:30"));
    assert!(task.completed());
}

#[rstest]
fn patch_clears_due_time_and_description_explicitly() {
    let mut task = stored_task();
    task.apply(TaskPatch::new().clear_due_time().clear_description())
        .expect("patch should apply");

    assert_eq!(task.due_time(), None);
    assert_eq!(task.description(), None);
    assert_eq!(task.title(), "Prepare standup notes");
}

#[rstest]
fn rejected_patch_leaves_the_task_untouched() {
    let mut task = stored_task();
    let result = task.apply(TaskPatch::new().title("  ").category(Category::Study));

    assert_eq!(result, Err(TaskDomainError::EmptyTitle));
    assert_eq!(task.title(), "Prepare standup notes");
    assert_eq!(task.category(), Category::Work);
}

#[rstest]
fn empty_patch_is_a_noop() {
    let mut task = stored_task();
    let before = task.clone();
    task.apply(TaskPatch::new()).expect("empty patch applies");
    assert_eq!(task, before);
}
