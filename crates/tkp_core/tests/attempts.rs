use tkp_core::{update, Effect, Msg, PanelState, RequestState};

fn submit_query(state: PanelState, input: &str) -> (PanelState, Vec<Effect>) {
    let (state, _) = update(state, Msg::QueryChanged(input.to_string()));
    update(state, Msg::SubmitClicked)
}

#[test]
fn stale_success_is_ignored() {
    let (state, _) = submit_query(PanelState::new(), "Лоток");
    let (state, _) = update(
        state,
        Msg::GenerationFailed {
            attempt: 1,
            error: "boom".to_string(),
        },
    );
    let (state, _) = update(state, Msg::SubmitClicked);
    let before = state.clone();

    let (state, effects) = update(
        state,
        Msg::GenerationSucceeded {
            attempt: 1,
            document: b"late".to_vec(),
            received_at_ms: 10,
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state, before);
    assert_eq!(*state.request(), RequestState::Submitting { attempt: 2 });
}

#[test]
fn failure_without_pending_attempt_is_ignored() {
    let state = PanelState::with_query("Лоток");
    let (state, effects) = update(
        state.clone(),
        Msg::GenerationFailed {
            attempt: 7,
            error: "boom".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(*state.request(), RequestState::Idle);
}

#[test]
fn attempt_ids_increase_per_accepted_submission() {
    let (state, effects) = submit_query(PanelState::new(), "   ");
    assert!(effects.is_empty());

    let (state, effects) = submit_query(state, "Лоток");
    assert_eq!(
        effects,
        vec![Effect::Generate {
            attempt: 1,
            query: "Лоток".to_string()
        }]
    );

    let (state, _) = update(
        state,
        Msg::GenerationFailed {
            attempt: 1,
            error: "x".to_string(),
        },
    );
    let (_state, effects) = update(state, Msg::SubmitClicked);
    assert!(matches!(&effects[..], [Effect::Generate { attempt: 2, .. }]));
}
