//! # Form widgets bound to a [`FormState`] signal
//!
//! [`use_form`] creates the state for one mounted form. The field widgets read
//! their value and visible error from it and write back through the engine:
//!
//! | Widget | Engine calls |
//! |--------|--------------|
//! | [`TextField`] | `set_text` on input, `blur_field` on blur |
//! | [`ChoiceField`] | `set_choice` then `blur_field` on change |
//! | [`FileField`] | `set_file` then `blur_field` once the file is read |
//!
//! A file that cannot be read leaves the field as it was and shows a note.
//!
//! Submission stays with the view: it calls `begin_submit`, spawns the request
//! and hands the outcome to `complete`.

use dioxus::prelude::*;
use forms::{FieldError, FileHandle, FormSchema, FormState, SubmitStatus, YesNo};

use crate::components::{Alert, AlertKind};
use crate::preview::use_file_preview;

/// Working state of a form, dropped with the component that created it.
pub fn use_form(schema: &'static FormSchema) -> Signal<FormState> {
    use_signal(|| FormState::new(schema))
}

fn report(result: Result<(), FieldError>) {
    if let Err(e) = result {
        tracing::warn!("Form widget out of sync with schema: {e}");
    }
}

const UNREADABLE_FILE: &str = "تعذر قراءة الملف، يرجى اختياره مرة أخرى";

/// Result of one change event on a file input.
enum FilePick {
    Cleared,
    Read(FileHandle),
    Unreadable,
}

/// Apply a pick to the form, returning the note to show next to the input.
fn apply_pick(state: &mut FormState, name: &str, pick: FilePick) -> Option<&'static str> {
    let file = match pick {
        FilePick::Cleared => None,
        FilePick::Read(file) => Some(file),
        FilePick::Unreadable => return Some(UNREADABLE_FILE),
    };
    report(state.set_file(name, file));
    report(state.blur_field(name));
    None
}

#[component]
pub fn TextField(
    form: Signal<FormState>,
    name: &'static str,
    label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] multiline: bool,
    #[props(default)] placeholder: String,
) -> Element {
    let mut form = form;
    let value = form.read().text(name).to_string();
    let error = form.read().error(name);

    let oninput = move |evt: FormEvent| report(form.write().set_text(name, evt.value()));
    let onblur = move |_| report(form.write().blur_field(name));

    rsx! {
        div {
            class: if error.is_some() { "field field-invalid" } else { "field" },
            label { r#for: name, "{label}" }
            if multiline {
                textarea {
                    id: name,
                    name: name,
                    rows: 5,
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput,
                    onblur,
                }
            } else {
                input {
                    id: name,
                    name: name,
                    r#type: "{input_type}",
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput,
                    onblur,
                }
            }
            if let Some(message) = error {
                span { class: "field-error", "{message}" }
            }
        }
    }
}

/// Yes/no select with an empty placeholder option.
#[component]
pub fn ChoiceField(form: Signal<FormState>, name: &'static str, label: String) -> Element {
    let mut form = form;
    let selected = form.read().choice(name);
    let error = form.read().error(name);

    let onchange = move |evt: FormEvent| {
        let mut state = form.write();
        report(state.set_choice(name, YesNo::parse(&evt.value())));
        report(state.blur_field(name));
    };

    rsx! {
        div {
            class: if error.is_some() { "field field-invalid" } else { "field" },
            label { r#for: name, "{label}" }
            select {
                id: name,
                name: name,
                onchange,
                onblur: move |_| report(form.write().blur_field(name)),
                option { value: "", selected: selected.is_none(), "اختر" }
                for answer in [YesNo::Yes, YesNo::No] {
                    option {
                        key: "{answer.as_str()}",
                        value: answer.as_str(),
                        selected: selected == Some(answer),
                        "{answer.label()}"
                    }
                }
            }
            if let Some(message) = error {
                span { class: "field-error", "{message}" }
            }
        }
    }
}

/// File input holding the picked file in the form, with an image preview.
#[component]
pub fn FileField(
    form: Signal<FormState>,
    name: &'static str,
    label: String,
    #[props(default)] accept: String,
) -> Element {
    let mut form = form;
    let mut read_note = use_signal(|| None::<&'static str>);
    let picked = form.read().file(name).map(|f| f.name.clone());
    let error = form.read().error(name);
    let preview = use_file_preview(form, name);

    let onchange = move |evt: FormEvent| async move {
        let pick = match evt.files().into_iter().next() {
            Some(file) => match file.read_bytes().await {
                Ok(bytes) => FilePick::Read(FileHandle::new(file.name(), file.content_type(), bytes)),
                Err(e) => {
                    tracing::warn!("Failed to read picked file: {e}");
                    FilePick::Unreadable
                }
            },
            None => FilePick::Cleared,
        };
        let note = apply_pick(&mut form.write(), name, pick);
        read_note.set(note);
    };

    rsx! {
        div {
            class: if error.is_some() { "field field-invalid" } else { "field" },
            label { r#for: name, "{label}" }
            input {
                id: name,
                name: name,
                r#type: "file",
                accept: "{accept}",
                onchange,
            }
            if let Some(file_name) = picked {
                span { class: "field-note", "تم اختيار الملف: {file_name}" }
            }
            if let Some(note) = read_note() {
                span { class: "field-error", "{note}" }
            }
            if let Some(src) = preview() {
                img { class: "file-preview", src: "{src}", alt: "{label}" }
            }
            if let Some(message) = error {
                span { class: "field-error", "{message}" }
            }
        }
    }
}

/// Success or failure message of the last submission.
#[component]
pub fn SubmitStatusAlert(form: Signal<FormState>) -> Element {
    match form.read().status().clone() {
        SubmitStatus::Succeeded(message) => rsx! {
            Alert { message, kind: AlertKind::Success }
        },
        SubmitStatus::Failed(message) => rsx! {
            Alert { message, kind: AlertKind::Error }
        },
        SubmitStatus::Idle | SubmitStatus::Submitting => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forms::schemas::registration;

    fn pdf(name: &str) -> FileHandle {
        FileHandle::new(name, Some("application/pdf".to_string()), b"%PDF".to_vec())
    }

    #[test]
    fn test_unreadable_pick_keeps_previous_file() {
        let mut form = FormState::new(&registration::SCHEMA);
        let name = registration::COMMERCIAL_REGISTRATION;
        assert_eq!(apply_pick(&mut form, name, FilePick::Read(pdf("cr.pdf"))), None);

        assert_eq!(apply_pick(&mut form, name, FilePick::Unreadable), Some(UNREADABLE_FILE));
        assert_eq!(form.file(name).map(|f| f.name.as_str()), Some("cr.pdf"));
        assert_eq!(form.error(name), None);
    }

    #[test]
    fn test_unreadable_first_pick_reports_note_only() {
        let mut form = FormState::new(&registration::SCHEMA);
        let name = registration::CONTRACT_MANAGER_ID;

        assert_eq!(apply_pick(&mut form, name, FilePick::Unreadable), Some(UNREADABLE_FILE));
        assert!(form.file(name).is_none());
        assert_eq!(form.error(name), None);
    }

    #[test]
    fn test_cleared_pick_requires_file() {
        let mut form = FormState::new(&registration::SCHEMA);
        let name = registration::COMMERCIAL_REGISTRATION;
        let _ = apply_pick(&mut form, name, FilePick::Read(pdf("cr.pdf")));

        assert_eq!(apply_pick(&mut form, name, FilePick::Cleared), None);
        assert!(form.file(name).is_none());
        assert_eq!(form.error(name), Some("السجل التجاري مطلوب"));
    }
}
