use crate::common::{Call, FakeTopicService, Op, stock};
use qz_client::TopicDraft;
use qz_ui::{
    MemoryNotifier, Tone,
    admin::{AdminController, Answer, EditMode, Field, Phase, PendingConfirmation, RowAction},
};

type Controller = AdminController<FakeTopicService, MemoryNotifier>;

async fn mounted() -> (Controller, FakeTopicService, MemoryNotifier) {
    let service = FakeTopicService::with_topics(stock());
    let notifier = MemoryNotifier::new();
    let mut controller = AdminController::new(service.clone(), notifier.clone());

    controller.mount().await;
    service.clear_calls();

    (controller, service, notifier)
}

fn fill(controller: &mut Controller, draft: &TopicDraft) {
    controller.edit_field(Field::Code, draft.code.clone());
    controller.edit_field(Field::Name, draft.name.clone());
    controller.edit_field(Field::Description, draft.description.clone());
}

#[tokio::test]
async fn test_mount_loads_topics_in_server_order() {
    let service = FakeTopicService::with_topics(stock());
    let notifier = MemoryNotifier::new();
    let mut controller = AdminController::new(service.clone(), notifier.clone());

    controller.mount().await;

    assert_eq!(service.calls(), vec![Call::List]);
    assert_eq!(controller.workflow().topics(), stock().as_slice());
    assert!(!controller.workflow().is_loading());
    assert!(notifier.toasts().is_empty());
}

#[tokio::test]
async fn test_reload_without_mutation_is_identical() {
    let (mut controller, _, _) = mounted().await;
    let before = controller.workflow().topics().to_vec();

    controller.reload().await;

    assert_eq!(controller.workflow().topics(), before.as_slice());
}

#[tokio::test]
async fn test_create_posts_once_then_reloads() {
    let (mut controller, service, notifier) = mounted().await;
    let draft = TopicDraft::new("sports", "Sports", "...");

    fill(&mut controller, &draft);
    controller.submit().await;

    assert_eq!(service.calls(), vec![Call::Create(draft.clone()), Call::List]);
    assert_eq!(controller.workflow().form().draft(), &TopicDraft::default());
    assert_eq!(controller.workflow().phase(), &Phase::Viewing);

    let listed = controller
        .workflow()
        .topics()
        .iter()
        .find(|t| t.code == "sports")
        .expect("created topic should be listed after reload");
    assert_eq!(TopicDraft::from(listed), draft);

    let toasts = notifier.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].title, "New Topic Added");
    assert_eq!(toasts[0].description, "Sports has been added successfully.");
}

#[tokio::test]
async fn test_consecutive_creates_are_all_listed() {
    let (mut controller, _, _) = mounted().await;
    let drafts = [
        TopicDraft::new("sports", "Sports", "Ball games"),
        TopicDraft::new("technology", "Technology", "Computers"),
        TopicDraft::new("art", "Art", ""),
    ];

    for draft in &drafts {
        fill(&mut controller, draft);
        controller.submit().await;
    }

    let listed: Vec<TopicDraft> = controller
        .workflow()
        .topics()
        .iter()
        .map(TopicDraft::from)
        .collect();
    for draft in &drafts {
        assert!(listed.contains(draft), "{draft:?} missing from list");
    }
}

#[tokio::test]
async fn test_update_requires_yes_then_puts_once_and_reloads() {
    let (mut controller, service, notifier) = mounted().await;

    assert!(controller.edit_topic(3));
    controller.edit_field(Field::Name, "World History");
    controller.submit().await;

    assert!(service.calls().is_empty(), "update must wait for confirmation");
    assert_eq!(
        controller.workflow().pending_confirmation(),
        Some(&PendingConfirmation::Update)
    );

    controller.answer(Answer::Yes).await;

    let expected = TopicDraft::new("history", "World History", "All about History");
    assert_eq!(service.calls(), vec![Call::Update(3, expected), Call::List]);
    assert_eq!(controller.workflow().editing_id(), None);
    assert!(controller.workflow().form().is_empty());
    assert_eq!(controller.workflow().pending_confirmation(), None);
    assert_eq!(controller.workflow().topic(3).unwrap().name, "World History");
    assert_eq!(notifier.toasts()[0].title, "Topic Updated");
}

#[tokio::test]
async fn test_delete_scenario() {
    let (mut controller, service, notifier) = mounted().await;

    let row = controller.workflow().list_view().rows()[2].delete();
    assert_eq!(row, RowAction::Delete(7));
    controller.row_action(row);

    let pending = controller.workflow().pending_confirmation().copied().unwrap();
    assert_eq!(pending, PendingConfirmation::Delete { target: 7 });
    assert_eq!(pending.target(), Some(7));

    controller.answer(Answer::No).await;
    assert!(service.calls().is_empty());
    assert_eq!(controller.workflow().pending_confirmation(), None);

    controller.request_delete(7);
    controller.answer(Answer::Yes).await;

    assert_eq!(service.calls(), vec![Call::Delete(7), Call::List]);
    let ids: Vec<_> = controller.workflow().topics().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(notifier.toasts()[0].title, "Topic Deleted");
}

#[tokio::test]
async fn test_cancel_preserves_draft_and_makes_no_calls() {
    let (mut controller, service, _) = mounted().await;

    controller.edit_topic(1);
    controller.edit_field(Field::Description, "Trivia of all kinds");
    let before = controller.workflow().form().clone();
    controller.submit().await;

    controller.answer(Answer::No).await;

    assert!(service.calls().is_empty());
    assert_eq!(controller.workflow().form(), &before);
    assert_eq!(
        controller.workflow().phase(),
        &Phase::Drafting(EditMode::Update(1))
    );
}

#[tokio::test]
async fn test_create_failure_keeps_draft_and_allows_retry() {
    let (mut controller, service, notifier) = mounted().await;
    let draft = TopicDraft::new("science", "Science", "...");
    service.fail(Op::Create);

    fill(&mut controller, &draft);
    controller.submit().await;

    assert_eq!(service.calls(), vec![Call::Create(draft.clone())]);
    assert_eq!(controller.workflow().form().draft(), &draft);
    assert_eq!(controller.workflow().editing_id(), None);
    let toasts = notifier.take();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].title, "Failed Adding");
    assert_eq!(toasts[0].tone, Tone::Failure);

    service.recover(Op::Create);
    controller.submit().await;

    assert!(controller.workflow().form().is_empty());
    assert_eq!(notifier.take()[0].title, "New Topic Added");
}

#[tokio::test]
async fn test_update_failure_keeps_editing_state() {
    let (mut controller, service, notifier) = mounted().await;
    service.fail(Op::Update);

    controller.edit_topic(3);
    controller.edit_field(Field::Name, "World History");
    let before = controller.workflow().form().clone();
    controller.submit().await;
    controller.answer(Answer::Yes).await;

    assert_eq!(service.calls().len(), 1, "no reload after a failed update");
    assert_eq!(controller.workflow().editing_id(), Some(3));
    assert_eq!(controller.workflow().form(), &before);
    assert_eq!(controller.workflow().pending_confirmation(), None);
    assert_eq!(controller.workflow().topic(3).unwrap().name, "History");

    let toasts = notifier.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].title, "Failed Updating");
}

#[tokio::test]
async fn test_delete_while_editing_resets_form() {
    let (mut controller, service, _) = mounted().await;

    controller.edit_topic(3);
    controller.edit_field(Field::Name, "World History");
    assert!(controller.request_delete(7));
    controller.answer(Answer::Yes).await;

    assert_eq!(service.calls(), vec![Call::Delete(7), Call::List]);
    assert_eq!(controller.workflow().editing_id(), None);
    assert!(controller.workflow().form().is_empty());
    assert_eq!(controller.workflow().phase(), &Phase::Viewing);
    assert_eq!(controller.workflow().topic(3).unwrap().name, "History");
}

#[tokio::test]
async fn test_failed_delete_while_editing_keeps_draft() {
    let (mut controller, service, notifier) = mounted().await;
    service.fail(Op::Delete);

    controller.edit_topic(3);
    controller.edit_field(Field::Name, "World History");
    let before = controller.workflow().form().clone();
    controller.request_delete(7);
    controller.answer(Answer::Yes).await;

    assert_eq!(service.calls(), vec![Call::Delete(7)]);
    assert_eq!(controller.workflow().form(), &before);
    assert_eq!(
        controller.workflow().phase(),
        &Phase::Drafting(EditMode::Update(3))
    );
    assert_eq!(controller.workflow().editing_id(), Some(3));
    assert_eq!(notifier.toasts().len(), 1);
}

#[tokio::test]
async fn test_delete_failure_leaves_list() {
    let (mut controller, service, notifier) = mounted().await;
    service.fail(Op::Delete);
    let before = controller.workflow().topics().to_vec();

    controller.request_delete(3);
    controller.answer(Answer::Yes).await;

    assert_eq!(service.calls(), vec![Call::Delete(3)]);
    assert_eq!(controller.workflow().topics(), before.as_slice());
    assert_eq!(controller.workflow().pending_confirmation(), None);

    let toasts = notifier.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].title, "Failed Deleting");
}

#[tokio::test]
async fn test_list_failure_notifies_once() {
    let service = FakeTopicService::with_topics(stock());
    let notifier = MemoryNotifier::new();
    service.fail(Op::List);
    let mut controller = AdminController::new(service.clone(), notifier.clone());

    controller.mount().await;

    assert!(controller.workflow().topics().is_empty());
    assert!(!controller.workflow().is_loading());
    assert_eq!(notifier.toasts().len(), 1);
    assert_eq!(notifier.toasts()[0].description, "Failed to load topics.");
}

#[tokio::test]
async fn test_edit_unknown_topic_is_rejected() {
    let (mut controller, _, _) = mounted().await;

    assert!(!controller.edit_topic(99));
    assert_eq!(controller.workflow().phase(), &Phase::Viewing);
}
