use crate::dashboard::ui::DashboardPage;
use crate::shared::toast::{ToastHost, ToastService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the ToastService to the whole app via context.
    provide_context(ToastService::new());

    view! {
        <DashboardPage />
        <ToastHost />
    }
}
