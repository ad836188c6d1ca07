//! 免責事項コンポーネント

use leptos::prelude::*;
use food_analyzer_common::view::DISCLAIMER;

#[component]
pub fn Disclaimer() -> impl IntoView {
    view! {
        <div class="disclaimer">
            <p>{DISCLAIMER}</p>
        </div>
    }
}
