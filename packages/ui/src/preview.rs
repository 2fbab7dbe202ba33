//! Image previews for picked files.

use dioxus::prelude::*;
use forms::FormState;

/// `data:` URL previewing the image held by a file field.
///
/// Recomputed whenever the form changes. Non-images, empty files and unknown
/// fields simply have no preview.
pub fn use_file_preview(form: Signal<FormState>, name: &'static str) -> Memo<Option<String>> {
    use_memo(move || {
        let state = form.read();
        let file = state.file(name)?;
        let preview = forms::preview_data_url(file);
        if preview.is_none() && file.is_image() {
            tracing::warn!(field = name, "Skipping preview of unreadable image");
        }
        preview
    })
}
