//! Capture browser form submissions

use portal_client::{FormEntries, FormValue};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{File, FormData, HtmlFormElement};
use yew::prelude::*;

/// Snapshot every entry of a form, in document order
pub fn form_entries(form: &HtmlFormElement) -> Result<FormEntries, JsValue> {
    let data = FormData::new_with_form(form)?;
    let iter = js_sys::try_iter(&data)?
        .ok_or_else(|| JsValue::from_str("FormData is not iterable"))?;

    let mut entries = FormEntries::new();
    for entry in iter {
        let entry: js_sys::Array = entry?.dyn_into()?;
        let Some(name) = entry.get(0).as_string() else {
            continue;
        };
        let value = entry.get(1);

        let value = if let Some(text) = value.as_string() {
            FormValue::Text(text)
        } else if let Ok(file) = value.dyn_into::<File>() {
            FormValue::File {
                name: file.name(),
                mime_type: file.type_(),
                size: file.size() as u64,
            }
        } else {
            continue;
        };
        entries.push(name, value);
    }
    Ok(entries)
}

/// Cancel the native submission and capture the submitting form
pub fn take_submission(event: &SubmitEvent) -> Option<FormEntries> {
    event.prevent_default();
    let form: HtmlFormElement = event.target_unchecked_into();
    match form_entries(&form) {
        Ok(entries) => Some(entries),
        Err(err) => {
            gloo::console::error!("failed to read form:", err);
            None
        }
    }
}
