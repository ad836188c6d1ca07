//! 解析結果コンポーネント

use leptos::prelude::*;
use food_analyzer_common::view::NUTRITION_UNAVAILABLE;
use food_analyzer_common::{FoodRecord, NutritionInfo, TriState};

#[component]
pub fn ResultCard(record: FoodRecord) -> impl IntoView {
    let shows_unavailable = record.shows_nutrition_unavailable();
    let status_items = record.status_items();

    view! {
        <div class="results-container">
            <h2 class="result-title">{record.name.clone()}</h2>

            <div class="status-grid">
                {status_items
                    .into_iter()
                    .map(|(label, flag)| view! { <StatusBox label=label flag=flag /> })
                    .collect_view()}
            </div>

            <div class="description">
                <h3 class="section-title">"Description:"</h3>
                <p>{record.description.clone()}</p>
            </div>

            {record.warning.clone().map(|warning| view! {
                <div class="warning-box">
                    <strong>"Warning:"</strong>" "{warning}
                </div>
            })}

            {record.nutrition.clone().map(|nutrition| view! { <NutritionTable nutrition=nutrition /> })}

            {shows_unavailable.then(|| view! {
                <div class="italic-text">{NUTRITION_UNAVAILABLE}</div>
            })}
        </div>
    }
}

#[component]
fn StatusBox(label: &'static str, flag: TriState) -> impl IntoView {
    view! {
        <div class="status-box">
            <span class="status-label">{label}</span>
            <div class=format!("status-value {}", flag.emphasis().css_class())>
                {flag.label()}
            </div>
        </div>
    }
}

#[component]
fn NutritionTable(nutrition: NutritionInfo) -> impl IntoView {
    let vitamins = nutrition.vitamins_line();

    view! {
        <div>
            <h3 class="section-title">"Nutritional Information:"</h3>
            <div class="nutrition-box">
                <div class="nutrition-grid">
                    {nutrition
                        .rows()
                        .into_iter()
                        .map(|(label, value)| view! {
                            <div class="nutrition-item">
                                <span class="nutrition-label">{label}</span>
                                <span class="nutrition-value">{value}</span>
                            </div>
                        })
                        .collect_view()}
                </div>

                {vitamins.map(|line| view! {
                    <div class="vitamins-row">
                        <span class="nutrition-label">"Vitamins & Minerals:"</span>
                        <span class="nutrition-value">{line}</span>
                    </div>
                })}
            </div>
        </div>
    }
}
