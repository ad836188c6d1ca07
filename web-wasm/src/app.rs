//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use food_analyzer_common::{AnalyzerState, FoodDatabase, ImageSelection};

use crate::analysis::run_analysis;
use crate::components::{
    analyze_button::AnalyzeButton,
    disclaimer::Disclaimer,
    food_name_input::FoodNameInput,
    header::Header,
    result_card::ResultCard,
    upload_area::UploadArea,
};
use crate::page_config;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let config = page_config::load();
    let show_disclaimer = config.show_disclaimer;
    let database = FoodDatabase::builtin();

    // 画面状態
    let state = RwSignal::new(AnalyzerState::new());

    let preview_url = Signal::derive(move || state.with(|s| s.preview_url().map(str::to_string)));
    let food_name = Signal::derive(move || state.with(|s| s.food_name().to_string()));
    let loading = Signal::derive(move || state.with(|s| s.is_loading()));
    let error = Memo::new(move |_| state.with(|s| s.error().map(str::to_string)));
    let result = Memo::new(move |_| state.with(|s| s.result().cloned()));

    // 画像選択ハンドラ
    let on_image_selected = move |image: ImageSelection| {
        let mut replaced = None;
        state.update(|s| replaced = s.select_image(image));
        if let Some(old) = replaced {
            release_preview(&old);
        }
    };

    // 食品名入力ハンドラ
    let on_food_name_input = move |name: String| {
        state.update(|s| s.set_food_name(name));
    };

    // 解析開始ハンドラ
    let on_analyze = move |_| {
        let mut ticket = None;
        state.update(|s| ticket = s.begin_analysis());
        let Some(ticket) = ticket else {
            return;
        };

        let config = config.clone();
        let database = database.clone();
        spawn_local(async move {
            let outcome = run_analysis(&config, &database, &ticket).await;
            state.update(move |s| {
                s.finish_analysis(ticket, outcome);
            });
        });
    };

    view! {
        <div class="analyzer-container">
            <Header />

            <UploadArea preview_url=preview_url on_image_selected=on_image_selected />

            <FoodNameInput food_name=food_name on_input=on_food_name_input />

            <AnalyzeButton loading=loading on_analyze=on_analyze />

            {move || error.get().map(|message| view! {
                <div class="error-message">{message}</div>
            })}

            {move || result.get().map(|record| view! { <ResultCard record=record /> })}

            <Show when=move || show_disclaimer>
                <Disclaimer />
            </Show>
        </div>
    }
}

/// 置き換えたプレビューのObject URLを解放する
fn release_preview(image: &ImageSelection) {
    if let Err(err) = web_sys::Url::revoke_object_url(&image.preview_url) {
        log::warn!("failed to revoke preview url for {}: {:?}", image.file_name, err);
    }
}
