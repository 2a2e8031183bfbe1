use crate::dashboard::api;
use crate::shared::date_utils::format_file_size;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

/// Extensions accepted by the picker. The backend does its own validation;
/// this only narrows the native dialog.
const ACCEPTED_EXTENSIONS: &str = ".pdf,.doc,.docx,.txt";

#[component]
pub fn UploadTab() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");

    // web_sys::File is not Send+Sync, store locally.
    let selected_file = StoredValue::new_local(None::<web_sys::File>);
    let (file_name, set_file_name) = signal(None::<String>);
    let (file_size, set_file_size) = signal(0u64);
    let (is_uploading, set_is_uploading) = signal(false);

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());

        if let Some(input) = input {
            if let Some(files) = input.files() {
                if let Some(file) = files.get(0) {
                    set_file_name.set(Some(file.name()));
                    set_file_size.set(file.size() as u64);
                    selected_file.set_value(Some(file));
                }
            }
        }
    };

    let handle_upload = move |_| {
        let Some(file) = selected_file.get_value() else {
            return;
        };
        set_is_uploading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::upload_document(&file).await {
                Ok(()) => {
                    toasts.success(format!("Document \"{}\" uploaded", file.name()));
                    selected_file.set_value(None);
                    set_file_name.set(None);
                    set_file_size.set(0);
                }
                Err(e) => {
                    // Keep the selection so the user can retry.
                    log::error!("Document upload failed: {}", e);
                    toasts.error(format!("Upload failed: {}", e));
                }
            }
            set_is_uploading.set(false);
        });
    };

    let selected_view = move || {
        file_name.get().map(|name| {
            view! {
                <div class="upload-panel__selected">
                    {icon("file")}
                    <span class="upload-panel__name">{name}</span>
                    <span class="upload-panel__size">{format_file_size(file_size.get())}</span>
                </div>
            }
        })
    };

    view! {
        <div class="upload-panel">
            <p class="upload-panel__hint">
                "Upload knowledge-base documents (PDF, DOC, DOCX, TXT) for the AI to draw on."
            </p>
            <input
                type="file"
                class="upload-panel__input"
                accept=ACCEPTED_EXTENSIONS
                on:change=handle_file_select
            />
            {selected_view}
            <Button
                appearance=ButtonAppearance::Primary
                on_click=handle_upload
                disabled=Signal::derive(move || is_uploading.get() || file_name.get().is_none())
            >
                {icon("upload")}
                {move || if is_uploading.get() { " Uploading..." } else { " Upload document" }}
            </Button>
        </div>
    }
}
