//! 食品名入力コンポーネント

use leptos::prelude::*;
use food_analyzer_common::view::{FOOD_NAME_LABEL, FOOD_NAME_PLACEHOLDER};

#[component]
pub fn FoodNameInput<F>(
    food_name: Signal<String>,
    on_input: F,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone,
{
    view! {
        <div class="form-section">
            <label for="food-name" class="form-label">{FOOD_NAME_LABEL}</label>
            <input
                type="text"
                id="food-name"
                class="text-input"
                placeholder=FOOD_NAME_PLACEHOLDER
                prop:value=move || food_name.get()
                on:input={
                    let on_input = on_input.clone();
                    move |ev| on_input(event_target_value(&ev))
                }
            />
        </div>
    }
}
