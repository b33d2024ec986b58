//! Auto-TKP engine: generator boundary, payload decoding and document delivery.
mod deliver;
mod engine;
mod generate;
mod payload;
mod persist;
mod types;

pub use deliver::{write_document, Delivery, DirectorySink, DownloadSink};
pub use engine::{Clock, Engine, GeneratedDocument};
pub use generate::{Generator, GeneratorSettings, HttpGenerator};
pub use payload::{decode_payload, PayloadError};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use types::{DeliveryError, FailureKind, GenerateError};
