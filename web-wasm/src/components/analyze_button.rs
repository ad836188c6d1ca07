//! 解析ボタンコンポーネント

use leptos::prelude::*;
use food_analyzer_common::view::analyze_button_label;

#[component]
pub fn AnalyzeButton<F>(
    loading: Signal<bool>,
    on_analyze: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <button
            class="button"
            disabled=move || loading.get()
            on:click={
                let on_analyze = on_analyze.clone();
                move |_| on_analyze(())
            }
        >
            {move || analyze_button_label(loading.get())}
        </button>
    }
}
