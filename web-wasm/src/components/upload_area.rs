//! アップロードエリアコンポーネント

use leptos::html;
use leptos::prelude::*;
use web_sys::{HtmlInputElement, Url};
use food_analyzer_common::view::{IMAGE_ACCEPT, UPLOAD_HINT, UPLOAD_LABEL};
use food_analyzer_common::ImageSelection;

#[component]
pub fn UploadArea<F>(
    preview_url: Signal<Option<String>>,
    on_image_selected: F,
) -> impl IntoView
where
    F: Fn(ImageSelection) + 'static + Clone,
{
    let file_input = NodeRef::<html::Input>::new();

    // 非表示のfile inputを開く
    let on_click = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_change = {
        let on_image_selected = on_image_selected.clone();
        move |ev: leptos::ev::Event| {
            let input: HtmlInputElement = event_target(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };

            match Url::create_object_url_with_blob(&file) {
                Ok(url) => on_image_selected(ImageSelection::new(file.name(), url)),
                Err(err) => log::error!("failed to create preview for {}: {:?}", file.name(), err),
            }
        }
    };

    view! {
        <div class="form-section">
            <label class="form-label">{UPLOAD_LABEL}</label>
            <div class="upload-area" on:click=on_click>
                <Show
                    when=move || preview_url.with(Option::is_some)
                    fallback=|| view! {
                        <div class="text-center">
                            <div class="upload-icon">"📷"</div>
                            <p class="upload-text">{UPLOAD_HINT}</p>
                        </div>
                    }
                >
                    <img
                        src=move || preview_url.get().unwrap_or_default()
                        alt="Food preview"
                        class="preview-image"
                    />
                </Show>
                <input
                    node_ref=file_input
                    id="file-input"
                    type="file"
                    accept=IMAGE_ACCEPT
                    capture="environment"
                    class="hidden"
                    on:click=|ev| ev.stop_propagation()
                    on:change=on_change
                />
            </div>
        </div>
    }
}
