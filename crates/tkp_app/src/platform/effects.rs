use iced::Task;
use tkp_core::{AttemptId, Effect, Msg};
use tkp_engine::{Delivery, DeliveryError, Engine, GenerateError, GeneratedDocument};
use tkp_logging::{tkp_error, tkp_info};

/// Turns one effect from the state machine into an async task that answers with a message.
pub fn run(engine: &Engine, effect: Effect) -> Task<Msg> {
    match effect {
        Effect::Generate { attempt, query } => {
            let engine = engine.clone();
            Task::perform(async move { engine.generate(query).await }, move |result| {
                generation_reply(attempt, result)
            })
        }
        Effect::Download(download) => {
            tkp_info!(
                "Download attempt={} file={} mime={} bytes={}",
                download.attempt,
                download.file_name,
                download.mime_type,
                download.bytes.len()
            );
            let engine = engine.clone();
            let attempt = download.attempt;
            Task::perform(
                async move { engine.deliver(download.file_name, download.bytes).await },
                move |result| delivery_reply(attempt, result),
            )
        }
    }
}

pub fn generation_reply(attempt: AttemptId, result: Result<GeneratedDocument, GenerateError>) -> Msg {
    match result {
        Ok(document) => Msg::GenerationSucceeded {
            attempt,
            document: document.bytes,
            received_at_ms: document.received_at_ms,
        },
        Err(err) => Msg::GenerationFailed {
            attempt,
            error: err.to_string(),
        },
    }
}

pub fn delivery_reply(attempt: AttemptId, result: Result<Delivery, DeliveryError>) -> Msg {
    match result {
        Ok(Delivery::Saved(path)) => Msg::DownloadSaved { attempt, path },
        Ok(Delivery::Cancelled) => {
            tkp_info!("Save dialog dismissed for attempt {}", attempt);
            Msg::DownloadCancelled { attempt }
        }
        Err(err) => {
            tkp_error!("Saving document for attempt {} failed: {}", attempt, err);
            Msg::DownloadFailed {
                attempt,
                error: err.to_string(),
            }
        }
    }
}
