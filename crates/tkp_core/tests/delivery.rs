use std::path::PathBuf;

use tkp_core::{update, BannerKind, Msg, PanelState, RequestState};

fn succeeded_panel() -> PanelState {
    let (state, _) = update(PanelState::with_query("Лоток"), Msg::SubmitClicked);
    let (state, _) = update(
        state,
        Msg::GenerationSucceeded {
            attempt: 1,
            document: b"PK".to_vec(),
            received_at_ms: 42,
        },
    );
    state
}

#[test]
fn saved_and_cancelled_downloads_leave_state_untouched() {
    let state = succeeded_panel();

    let (next, effects) = update(
        state.clone(),
        Msg::DownloadSaved {
            attempt: 1,
            path: PathBuf::from("downloads/ТКП_42.docx"),
        },
    );
    assert_eq!(next, state);
    assert!(effects.is_empty());

    let (next, effects) = update(state.clone(), Msg::DownloadCancelled { attempt: 1 });
    assert_eq!(next, state);
    assert!(effects.is_empty());
}

#[test]
fn failed_save_turns_success_into_error() {
    let state = succeeded_panel();

    let (state, effects) = update(
        state,
        Msg::DownloadFailed {
            attempt: 1,
            error: "disk full".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(
        *state.request(),
        RequestState::Failed {
            message: "Ошибка: disk full".to_string()
        }
    );
    assert_eq!(state.view().banner.unwrap().kind, BannerKind::Error);
}

#[test]
fn failed_save_of_older_attempt_is_ignored() {
    let state = succeeded_panel();
    let (state, _) = update(state, Msg::SubmitClicked);

    let (state, _) = update(
        state,
        Msg::DownloadFailed {
            attempt: 1,
            error: "disk full".to_string(),
        },
    );

    assert_eq!(*state.request(), RequestState::Submitting { attempt: 2 });
}
