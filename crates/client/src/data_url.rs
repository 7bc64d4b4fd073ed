//! Inline `data:` URLs for profile pictures

use base64::Engine;

/// Encode raw file bytes as a base64 data URL
pub fn encode(mime_type: &str, data: &[u8]) -> String {
    let mime_type = if mime_type.is_empty() {
        "application/octet-stream"
    } else {
        mime_type
    };
    let payload = base64::engine::general_purpose::STANDARD.encode(data);
    format!("data:{mime_type};base64,{payload}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_png_header() {
        let url = encode("image/png", &[0x89, b'P', b'N', b'G']);
        assert_eq!(url, "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn missing_mime_type() {
        assert_eq!(encode("", b"hi"), "data:application/octet-stream;base64,aGk=");
    }
}
