use std::sync::Arc;

use tkp_logging::{preview, tkp_info, tkp_warn};

use crate::{decode_payload, Delivery, DeliveryError, DownloadSink, GenerateError, Generator};

/// Milliseconds since the Unix epoch, injected so tests control file names.
pub type Clock = Arc<dyn Fn() -> u64 + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    pub bytes: Vec<u8>,
    pub received_at_ms: u64,
}

/// Executes the panel's effects against the injected generator and sink.
#[derive(Clone)]
pub struct Engine {
    generator: Arc<dyn Generator>,
    sink: Arc<dyn DownloadSink>,
    clock: Clock,
}

impl Engine {
    pub fn new(generator: Arc<dyn Generator>, sink: Arc<dyn DownloadSink>, clock: Clock) -> Self {
        Self {
            generator,
            sink,
            clock,
        }
    }

    /// One call to the generator, then decoding of its base64 answer.
    pub async fn generate(&self, query: String) -> Result<GeneratedDocument, GenerateError> {
        tkp_info!("Generating document for {:?}", preview(&query));
        let payload = match self.generator.generate(&query).await {
            Ok(payload) => payload,
            Err(err) => {
                tkp_warn!("Generation failed ({:?}): {}", err.kind, err);
                return Err(err);
            }
        };
        let received_at_ms = (self.clock)();
        let bytes = decode_payload(&payload).map_err(|err| {
            tkp_warn!("Generator returned an undecodable payload: {}", err);
            GenerateError::from(err)
        })?;
        tkp_info!("Received document: {} bytes", bytes.len());
        Ok(GeneratedDocument {
            bytes,
            received_at_ms,
        })
    }

    pub async fn deliver(&self, file_name: String, bytes: Vec<u8>) -> Result<Delivery, DeliveryError> {
        self.sink.deliver(&file_name, bytes).await
    }
}
