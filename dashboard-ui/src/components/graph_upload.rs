use leptos::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, FileReader, HtmlInputElement, ProgressEvent, SubmitEvent};

const MAX_UPLOAD_BYTES: f64 = 10.0 * 1024.0 * 1024.0;

/// Client-side upload form. Validates the selected image and previews it
/// via a FileReader data URL; nothing is transmitted or persisted.
#[component]
pub fn GraphUpload() -> impl IntoView {
    let title = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let file_name = create_rw_signal(None::<String>);
    let file_size_mb = create_rw_signal(0.0_f64);
    let preview = create_rw_signal(None::<String>);
    // (is_error, text) for the inline notice under the form.
    let notice = create_rw_signal(None::<(bool, String)>);

    let file_input: NodeRef<html::Input> = create_node_ref();

    let clear_file = move || {
        file_name.set(None);
        file_size_mb.set(0.0);
        preview.set(None);
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
    };

    let on_file_change = move |ev: Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        if !file.type_().starts_with("image/") {
            notice.set(Some((
                true,
                "Please upload an image file (jpg, png, etc.)".into(),
            )));
            clear_file();
            return;
        }
        if file.size() > MAX_UPLOAD_BYTES {
            notice.set(Some((true, "Images must be less than 10MB in size".into())));
            clear_file();
            return;
        }

        file_name.set(Some(file.name()));
        file_size_mb.set(file.size() / (1024.0 * 1024.0));
        notice.set(None);

        let Ok(reader) = FileReader::new() else {
            notice.set(Some((true, "File reading is unavailable".into())));
            return;
        };
        let handle = reader.clone();
        let onload = Closure::<dyn FnMut(ProgressEvent)>::new(move |_event: ProgressEvent| {
            if let Ok(result) = handle.result() {
                preview.set(result.as_string());
            }
        });
        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();
        if reader.read_as_data_url(&file).is_err() {
            notice.set(Some((true, "Could not read the selected file".into())));
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if file_name.get_untracked().is_none() {
            notice.set(Some((true, "Please select a graph image to upload".into())));
            return;
        }
        let submitted = title.get_untracked().trim().to_string();
        if submitted.is_empty() {
            notice.set(Some((true, "Please provide a title for your graph".into())));
            return;
        }

        notice.set(Some((
            false,
            format!("Graph \"{submitted}\" has been uploaded and will be reviewed."),
        )));
        title.set(String::new());
        description.set(String::new());
        clear_file();
    };

    view! {
        <section class="panel">
            <form class="stack" on:submit=on_submit>
                <label class="field">
                    <span>"Graph Title"</span>
                    <input
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                        placeholder="Flood Frequency in Kerala (2010-2023)"
                    />
                </label>
                <label class="field">
                    <span>"Description (optional)"</span>
                    <textarea
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                        placeholder="Data source, methodology, or other relevant information"
                    ></textarea>
                </label>

                <input
                    id="graph-upload"
                    class="hidden"
                    type="file"
                    accept="image/*"
                    node_ref=file_input
                    on:change=on_file_change
                />
                <Show
                    when=move || preview.get().is_some()
                    fallback=|| {
                        view! {
                            <label class="dropzone" for="graph-upload">
                                <span class="dropzone-title">"Click to upload graph"</span>
                                <span class="meta">"PNG, JPG, GIF up to 10MB"</span>
                            </label>
                        }
                    }
                >
                    <div class="preview">
                        <img
                            src=move || preview.get().unwrap_or_default()
                            alt="Graph preview"
                        />
                        <button type="button" class="preview-remove" on:click=move |_| clear_file()>
                            "Remove"
                        </button>
                    </div>
                </Show>
                <Show when=move || file_name.get().is_some() fallback=|| ()>
                    <div class="file-meta meta">
                        <span>{move || file_name.get().unwrap_or_default()}</span>
                        <span>{move || format!("{:.2} MB", file_size_mb.get())}</span>
                    </div>
                </Show>

                <button type="submit">"Upload Graph"</button>

                {move || {
                    notice.get().map(|(is_error, text)| {
                        view! {
                            <p class="notice" class:notice-error=is_error>
                                {text}
                            </p>
                        }
                    })
                }}
            </form>
        </section>
    }
}
