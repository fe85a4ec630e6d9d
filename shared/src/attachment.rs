use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::DomainError;

/// Proof-of-payment image, stored as decoded bytes.
///
/// The wire form is base64 text, optionally wrapped in a
/// `data:<mime>;base64,` prefix; the stored form is raw bytes plus the
/// declared content type. Strict decoding means canonical input re-encodes
/// byte-for-byte identical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn decode(text: &str) -> Result<Self, DomainError> {
        let (content_type, payload) = match split_data_uri(text) {
            Some((mime, payload)) => (Some(mime.to_string()), payload),
            None => (None, text),
        };

        let bytes = STANDARD.decode(payload).map_err(|e| {
            DomainError::validation("data.attachment", format!("invalid base64 image: {e}"))
        })?;
        if bytes.is_empty() {
            return Err(DomainError::validation(
                "data.attachment",
                "attachment must not be empty",
            ));
        }

        Ok(Self {
            content_type,
            bytes,
        })
    }

    pub fn encode(&self) -> String {
        let payload = STANDARD.encode(&self.bytes);
        match &self.content_type {
            Some(mime) => format!("data:{mime};base64,{payload}"),
            None => payload,
        }
    }
}

fn split_data_uri(text: &str) -> Option<(&str, &str)> {
    let rest = text.strip_prefix("data:")?;
    let (mime, payload) = rest.split_once(";base64,")?;
    Some((mime, payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn decodes_plain_base64() {
        let text = STANDARD.encode(PNG_HEADER);
        let attachment = Attachment::decode(&text).unwrap();
        assert_eq!(attachment.bytes, PNG_HEADER);
        assert_eq!(attachment.content_type, None);
    }

    #[test]
    fn decodes_data_uri() {
        let text = format!("data:image/png;base64,{}", STANDARD.encode(PNG_HEADER));
        let attachment = Attachment::decode(&text).unwrap();
        assert_eq!(attachment.bytes, PNG_HEADER);
        assert_eq!(attachment.content_type.as_deref(), Some("image/png"));
    }

    #[test]
    fn round_trips_byte_for_byte() {
        for text in [
            STANDARD.encode(PNG_HEADER),
            format!("data:image/png;base64,{}", STANDARD.encode(PNG_HEADER)),
            format!("data:image/jpeg;base64,{}", STANDARD.encode(b"jpeg body")),
        ] {
            let attachment = Attachment::decode(&text).unwrap();
            assert_eq!(attachment.encode(), text);
        }
    }

    #[test]
    fn rejects_invalid_base64() {
        assert!(Attachment::decode("not base64!!!").is_err());
    }

    #[test]
    fn rejects_empty_payload() {
        assert!(Attachment::decode("").is_err());
        assert!(Attachment::decode("data:image/png;base64,").is_err());
    }

    #[test]
    fn decode_failure_is_keyed_to_the_attachment_field() {
        let err = Attachment::decode("%%%").unwrap_err();
        let errors = err.field_errors().unwrap();
        assert!(errors.contains_key("data.attachment"));
    }
}
