//! ヘッダーコンポーネント

use leptos::prelude::*;
use food_analyzer_common::view::{SUBTITLE, TITLE};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <div class="text-center">
            <h1 class="title">{TITLE}</h1>
            <p class="subtitle">{SUBTITLE}</p>
        </div>
    }
}
