//! Display-only previews of selected files.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::field::FileHandle;

/// Render an image file as a `data:` URL for an `<img>` preview.
///
/// Returns `None` for anything that cannot be previewed (non-image types,
/// unknown type, empty content); callers simply skip the preview then.
pub fn preview_data_url(file: &FileHandle) -> Option<String> {
    if !file.is_image() || file.bytes.is_empty() {
        return None;
    }
    let content_type = file.content_type.as_deref()?;
    Some(format!(
        "data:{content_type};base64,{}",
        STANDARD.encode(&file.bytes)
    ))
}
