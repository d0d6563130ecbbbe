//! Single company counter on the dashboard.

use leptos::prelude::*;

#[component]
pub fn StatCard(label: &'static str, value: String, #[prop(optional)] hint: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{value}</span>
            {hint.map(|hint| view! { <span class="stat-card__hint">{hint}</span> })}
        </div>
    }
}
