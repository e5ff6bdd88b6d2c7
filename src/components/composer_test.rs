use super::*;

#[test]
fn submit_packages_text_and_clears_input() {
    let mut input = "hello".to_owned();
    assert_eq!(
        submit_draft(&mut input),
        Some(Action::SetCurrentMessage(DraftMessage::new("hello")))
    );
    assert_eq!(input, "");
}

#[test]
fn submit_keeps_multiline_text_verbatim() {
    let mut input = "line one\nline two ".to_owned();
    assert_eq!(
        submit_draft(&mut input),
        Some(Action::SetCurrentMessage(DraftMessage::new("line one\nline two ")))
    );
}

#[test]
fn submit_ignores_blank_input() {
    let mut input = "  \n ".to_owned();
    assert_eq!(submit_draft(&mut input), None);
    assert_eq!(input, "  \n ");
}

#[test]
fn enter_submits() {
    let mut input = "hello".to_owned();
    assert!(matches!(keydown_draft("Enter", false, &mut input), KeyOutcome::Submit(Some(_))));
    assert!(input.is_empty());
}

#[test]
fn enter_on_blank_input_is_swallowed_without_a_draft() {
    let mut input = "   ".to_owned();
    assert_eq!(keydown_draft("Enter", false, &mut input), KeyOutcome::Submit(None));
    assert_eq!(input, "   ");
}

#[test]
fn shift_enter_keeps_input_and_dispatches_nothing() {
    let mut input = "hello".to_owned();
    assert_eq!(keydown_draft("Enter", true, &mut input), KeyOutcome::Passthrough);
    assert_eq!(input, "hello");
}

#[test]
fn ordinary_keys_do_nothing() {
    let mut input = "hell".to_owned();
    assert_eq!(keydown_draft("o", false, &mut input), KeyOutcome::Passthrough);
    assert_eq!(input, "hell");
}

#[test]
fn help_text_mentions_cipher_settings() {
    assert!(HELP_TEXT.contains("cipher method and cipher key"));
}
