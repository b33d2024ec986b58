//! Drives the pure panel state machine against the engine with fake collaborators.
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use tkp_core::{update, Effect, Msg, PanelState, RequestState, DOCX_MIME_TYPE, VALIDATION_MESSAGE};
use tkp_engine::{
    Delivery, DeliveryError, DownloadSink, Engine, FailureKind, GenerateError, Generator,
};

struct FakeGenerator {
    calls: Mutex<Vec<String>>,
    answer: Result<String, GenerateError>,
}

impl FakeGenerator {
    fn answering(answer: Result<String, GenerateError>) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            answer,
        })
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Generator for FakeGenerator {
    async fn generate(&self, query: &str) -> Result<String, GenerateError> {
        self.calls.lock().unwrap().push(query.to_string());
        self.answer.clone()
    }
}

#[derive(Default)]
struct RecordingSink {
    saved: Mutex<Vec<(String, Vec<u8>)>>,
}

impl RecordingSink {
    fn saved(&self) -> Vec<(String, Vec<u8>)> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl DownloadSink for RecordingSink {
    async fn deliver(&self, file_name: &str, bytes: Vec<u8>) -> Result<Delivery, DeliveryError> {
        self.saved
            .lock()
            .unwrap()
            .push((file_name.to_string(), bytes));
        Ok(Delivery::Saved(format!("downloads/{file_name}").into()))
    }
}

fn engine(generator: Arc<FakeGenerator>, sink: Arc<RecordingSink>) -> Engine {
    Engine::new(generator, sink, Arc::new(|| 1_718_000_000_000u64))
}

/// Applies `msg` and keeps executing effects until no messages remain.
async fn settle(engine: &Engine, mut state: PanelState, msg: Msg) -> (PanelState, Vec<Effect>) {
    let mut pending = VecDeque::from([msg]);
    let mut seen = Vec::new();
    while let Some(msg) = pending.pop_front() {
        let (next, effects) = update(state, msg);
        state = next;
        for effect in effects {
            seen.push(effect.clone());
            let reply = match effect {
                Effect::Generate { attempt, query } => match engine.generate(query).await {
                    Ok(document) => Msg::GenerationSucceeded {
                        attempt,
                        document: document.bytes,
                        received_at_ms: document.received_at_ms,
                    },
                    Err(err) => Msg::GenerationFailed {
                        attempt,
                        error: err.to_string(),
                    },
                },
                Effect::Download(download) => {
                    let attempt = download.attempt;
                    match engine.deliver(download.file_name, download.bytes).await {
                        Ok(Delivery::Saved(path)) => Msg::DownloadSaved { attempt, path },
                        Ok(Delivery::Cancelled) => Msg::DownloadCancelled { attempt },
                        Err(err) => Msg::DownloadFailed {
                            attempt,
                            error: err.to_string(),
                        },
                    }
                }
            };
            pending.push_back(reply);
        }
    }
    (state, seen)
}

#[tokio::test]
async fn empty_query_never_reaches_generator() {
    let generator = FakeGenerator::answering(Ok("QUJD".to_string()));
    let sink = Arc::new(RecordingSink::default());
    let engine = engine(generator.clone(), sink.clone());

    let (state, effects) = settle(&engine, PanelState::with_query(""), Msg::SubmitClicked).await;

    assert!(effects.is_empty());
    assert!(generator.calls().is_empty());
    assert_eq!(
        *state.request(),
        RequestState::Failed {
            message: VALIDATION_MESSAGE.to_string()
        }
    );
}

#[tokio::test]
async fn successful_generation_downloads_decoded_document() {
    let generator = FakeGenerator::answering(Ok("QUJD".to_string()));
    let sink = Arc::new(RecordingSink::default());
    let engine = engine(generator.clone(), sink.clone());
    let query = "Лоток 100х100, 12 метров";

    let (state, effects) =
        settle(&engine, PanelState::with_query(query), Msg::SubmitClicked).await;

    assert_eq!(generator.calls(), vec![query.to_string()]);
    assert_eq!(
        sink.saved(),
        vec![("ТКП_1718000000000.docx".to_string(), b"ABC".to_vec())]
    );
    let download = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::Download(download) => Some(download),
            _ => None,
        })
        .expect("download effect");
    assert_eq!(download.mime_type, DOCX_MIME_TYPE);
    assert_eq!(*state.request(), RequestState::Succeeded { attempt: 1 });
    assert!(state.view().submit_enabled);
}

#[tokio::test]
async fn generator_error_is_shown_and_nothing_downloads() {
    let generator = FakeGenerator::answering(Err(GenerateError::new(
        FailureKind::Backend,
        "каталог недоступен",
    )));
    let sink = Arc::new(RecordingSink::default());
    let engine = engine(generator.clone(), sink.clone());

    let (state, _) = settle(&engine, PanelState::with_query("Лоток"), Msg::SubmitClicked).await;

    assert!(sink.saved().is_empty());
    assert_eq!(
        *state.request(),
        RequestState::Failed {
            message: "Ошибка: каталог недоступен".to_string()
        }
    );
    assert!(state.view().submit_enabled);
}

#[tokio::test]
async fn undecodable_payload_is_a_generation_failure() {
    let generator = FakeGenerator::answering(Ok("%%%".to_string()));
    let sink = Arc::new(RecordingSink::default());
    let engine = engine(generator, sink.clone());

    let (state, _) = settle(&engine, PanelState::with_query("Лоток"), Msg::SubmitClicked).await;

    assert!(sink.saved().is_empty());
    let RequestState::Failed { message } = state.request() else {
        panic!("expected failure, got {:?}", state.request());
    };
    assert!(message.starts_with("Ошибка: invalid document payload"));
}

#[tokio::test]
async fn resubmitting_repeats_the_same_call() {
    let generator = FakeGenerator::answering(Ok("QUJD".to_string()));
    let sink = Arc::new(RecordingSink::default());
    let engine = engine(generator.clone(), sink.clone());

    let (state, _) = settle(&engine, PanelState::with_query("Гайка М10"), Msg::SubmitClicked).await;
    let (state, _) = settle(&engine, state, Msg::SubmitClicked).await;

    assert_eq!(generator.calls(), vec!["Гайка М10".to_string(); 2]);
    assert_eq!(sink.saved().len(), 2);
    assert_eq!(*state.request(), RequestState::Succeeded { attempt: 2 });
}
