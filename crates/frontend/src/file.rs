//! Profile picture preview

use portal_client::data_url;
use web_sys::HtmlInputElement;

/// First file selected in a file input
pub fn selected_file(input: &HtmlInputElement) -> Option<web_sys::File> {
    input.files().and_then(|files| files.get(0))
}

/// Read a file into a data URL for previewing and inline upload
pub async fn read_data_url(file: web_sys::File) -> Result<String, String> {
    let file = gloo::file::File::from(file);
    let bytes = gloo::file::futures::read_as_bytes(&file)
        .await
        .map_err(|e| format!("Failed to read file: {e}"))?;
    Ok(data_url::encode(&file.raw_mime_type(), &bytes))
}
