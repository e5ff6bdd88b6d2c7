use super::*;

#[test]
fn default_has_no_draft_and_modal_closed() {
    let state = DraftState::default();
    assert!(!state.is_modal_open());
    assert!(state.draft().is_none());
    assert!(!state.is_sending());
    assert!(state.error().is_none());
}

#[test]
fn pending_draft_opens_modal() {
    let state = DraftState::pending(DraftMessage::new("hello"));
    assert!(state.is_modal_open());
    assert_eq!(state.draft(), Some(&DraftMessage::new("hello")));
    assert!(!state.is_sending());
}

#[test]
fn pending_draft_with_empty_text_still_opens_modal() {
    assert!(DraftState::pending(DraftMessage::new("")).is_modal_open());
}

#[test]
fn error_and_sending_are_read_from_pending_draft() {
    let state = DraftState::Pending(PendingDraft {
        draft: DraftMessage::new("x"),
        sending: true,
        error: Some("bad key".to_owned()),
    });
    assert!(state.is_sending());
    assert_eq!(state.error(), Some("bad key"));
}
