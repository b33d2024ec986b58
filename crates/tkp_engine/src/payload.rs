use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;

const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    #[error("invalid document payload: {0}")]
    InvalidBase64(String),
}

/// Decode the generator's base64 payload into document bytes.
///
/// Surrounding whitespace and embedded line breaks are ignored; padding is optional.
pub fn decode_payload(payload: &str) -> Result<Vec<u8>, PayloadError> {
    let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    LENIENT_STANDARD
        .decode(compact.as_bytes())
        .map_err(|err| PayloadError::InvalidBase64(err.to_string()))
}
