use crate::{failure_message, DocumentDownload, Effect, Msg, PanelState, VALIDATION_MESSAGE};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PanelState, msg: Msg) -> (PanelState, Vec<Effect>) {
    let effects = match msg {
        Msg::QueryChanged(text) => {
            state.set_query(text);
            Vec::new()
        }
        Msg::SubmitClicked => submit(&mut state),
        Msg::GenerationSucceeded {
            attempt,
            document,
            received_at_ms,
        } => {
            // Answers for anything but the in-flight attempt are stale.
            if !state.is_in_flight(attempt) {
                return (state, Vec::new());
            }
            state.succeed(attempt);
            vec![Effect::Download(DocumentDownload::new(
                attempt,
                received_at_ms,
                document,
            ))]
        }
        Msg::GenerationFailed { attempt, error } => {
            if state.is_in_flight(attempt) {
                state.fail(failure_message(&error));
            }
            Vec::new()
        }
        Msg::DownloadFailed { attempt, error } => {
            if state.has_succeeded(attempt) {
                state.fail(failure_message(&error));
            }
            Vec::new()
        }
        Msg::DownloadSaved { .. } | Msg::DownloadCancelled { .. } => Vec::new(),
    };

    (state, effects)
}

fn submit(state: &mut PanelState) -> Vec<Effect> {
    // The button is disabled while submitting; a stray click still must not start a second call.
    if state.request().is_submitting() {
        return Vec::new();
    }
    if state.query().trim().is_empty() {
        state.fail(VALIDATION_MESSAGE.to_string());
        return Vec::new();
    }

    let attempt = state.begin_attempt();
    vec![Effect::Generate {
        attempt,
        query: state.query().to_owned(),
    }]
}
