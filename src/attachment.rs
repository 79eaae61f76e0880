//! Turns a locally selected image into an inline `data:` URL preview.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AttachmentError {
    #[error("Could not read {0}")]
    Unreadable(String),

    #[error("{0} is empty")]
    Empty(String),

    #[error("{0} is not an image")]
    NotAnImage(String),
}

/// A decoded image staged in the composer.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachmentPreview {
    pub file_name: String,
    pub mime: &'static str,
    pub data_url: String,
}

/// Something the user picked that can be read asynchronously.
#[async_trait(?Send)]
pub trait ImageSource {
    fn name(&self) -> &str;

    /// `None` when the underlying file could not be read.
    async fn read_bytes(&self) -> Option<Vec<u8>>;
}

pub async fn load_preview(source: &dyn ImageSource) -> Result<AttachmentPreview, AttachmentError> {
    let name = source.name().to_string();
    let bytes = source
        .read_bytes()
        .await
        .ok_or_else(|| AttachmentError::Unreadable(name.clone()))?;
    decode_preview(&name, &bytes)
}

pub fn decode_preview(file_name: &str, bytes: &[u8]) -> Result<AttachmentPreview, AttachmentError> {
    if bytes.is_empty() {
        return Err(AttachmentError::Empty(file_name.to_string()));
    }
    let mime = sniff_image_mime(bytes)
        .or_else(|| mime_from_extension(file_name))
        .ok_or_else(|| AttachmentError::NotAnImage(file_name.to_string()))?;

    Ok(AttachmentPreview {
        file_name: file_name.to_string(),
        mime,
        data_url: format!("data:{mime};base64,{}", STANDARD.encode(bytes)),
    })
}

fn sniff_image_mime(bytes: &[u8]) -> Option<&'static str> {
    match bytes {
        [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, ..] => Some("image/png"),
        [0xFF, 0xD8, 0xFF, ..] => Some("image/jpeg"),
        [b'G', b'I', b'F', b'8', b'7' | b'9', b'a', ..] => Some("image/gif"),
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => Some("image/webp"),
        [b'B', b'M', ..] => Some("image/bmp"),
        _ => None,
    }
}

// Formats without a reliable magic number (svg, ico) fall back to the name.
fn mime_from_extension(file_name: &str) -> Option<&'static str> {
    let (_, ext) = file_name.rsplit_once('.')?;
    match ext.to_ascii_lowercase().as_str() {
        "svg" => Some("image/svg+xml"),
        "ico" => Some("image/x-icon"),
        "avif" => Some("image/avif"),
        _ => None,
    }
}
