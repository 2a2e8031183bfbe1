use crate::dashboard::api;
use crate::dashboard::state::{DashboardEvent, DashboardState};
use crate::dashboard::ui::activity_tab::ActivityTab;
use crate::dashboard::ui::config_tab::ConfigTab;
use crate::dashboard::ui::tickets_tab::TicketsTab;
use crate::dashboard::ui::upload_tab::UploadTab;
use crate::shared::components::stat_card::{format_count, StatCard};
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use leptos::prelude::*;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PanelTab {
    Tickets,
    Activity,
    Config,
    Upload,
}

fn tab_class(active: PanelTab, this: PanelTab) -> &'static str {
    if active == this {
        "panel-tabs__tab panel-tabs__tab--active"
    } else {
        "panel-tabs__tab"
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");
    let state = RwSignal::new(DashboardState::new());
    let (active_tab, set_active_tab) = signal(PanelTab::Tickets);

    let busy = Signal::derive(move || state.with(|s| s.is_busy()));
    let tickets = Signal::derive(move || state.with(|s| s.tickets.clone()));
    let activity = Signal::derive(move || state.with(|s| s.activity.clone()));
    let stats = Signal::derive(move || state.with(|s| s.stats.clone()));

    let load_tickets = move || {
        let mut seq = 0;
        state.update(|s| seq = s.begin_request());
        wasm_bindgen_futures::spawn_local(async move {
            match api::list_tickets().await {
                Ok(response) => {
                    state.update(|s| {
                        s.apply(DashboardEvent::TicketsLoaded {
                            seq,
                            tickets: response.tickets,
                        })
                    });
                }
                Err(e) => {
                    log::error!("Failed to load tickets: {}", e);
                    state.update(|s| s.apply(DashboardEvent::LoadFailed { seq }));
                    toasts.error(format!("Failed to load tickets: {}", e));
                }
            }
        });
    };

    let run_ai_replies = move || {
        let mut seq = 0;
        state.update(|s| seq = s.begin_request());
        wasm_bindgen_futures::spawn_local(async move {
            match api::run_ai_reply().await {
                Ok(()) => {
                    state.update(|s| s.apply(DashboardEvent::AiRunFinished { seq }));
                    toasts.success("AI reply run completed");
                    // Reflect whatever the run changed.
                    load_tickets();
                }
                Err(e) => {
                    log::error!("AI reply run failed: {}", e);
                    state.update(|s| s.apply(DashboardEvent::AiRunFinished { seq }));
                    toasts.error(format!("AI reply run failed: {}", e));
                }
            }
        });
    };

    // Initial load on mount.
    load_tickets();

    view! {
        <div class="dashboard">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <div>
                    <h1 class="dashboard__title">"AI Support Console"</h1>
                    <p class="dashboard__subtitle">"AI-assisted customer support administration"</p>
                </div>
                <Space>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_tickets()
                        disabled=busy
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| run_ai_replies()
                        disabled=busy
                    >
                        {icon("sparkle")}
                        " Run AI replies"
                    </Button>
                </Space>
            </Flex>

            <div class="stat-grid">
                <StatCard
                    label="Total tickets"
                    icon_name="tickets"
                    value=Signal::derive(move || format_count(stats.get().total_tickets))
                />
                <StatCard
                    label="Processed today"
                    icon_name="check-circle"
                    value=Signal::derive(move || format_count(stats.get().processed_today))
                />
                <StatCard
                    label="Avg response time"
                    icon_name="clock"
                    value=Signal::derive(move || format!("{:.1} min", stats.get().avg_response_time))
                />
                <StatCard
                    label="Success rate"
                    icon_name="chart"
                    value=Signal::derive(move || format!("{:.1}%", stats.get().success_rate))
                />
            </div>

            <div class="panel-tabs">
                <button
                    class=move || tab_class(active_tab.get(), PanelTab::Tickets)
                    on:click=move |_| set_active_tab.set(PanelTab::Tickets)
                >
                    {icon("tickets")}
                    " Tickets"
                </button>
                <button
                    class=move || tab_class(active_tab.get(), PanelTab::Activity)
                    on:click=move |_| set_active_tab.set(PanelTab::Activity)
                >
                    {icon("activity")}
                    " Activity"
                </button>
                <button
                    class=move || tab_class(active_tab.get(), PanelTab::Config)
                    on:click=move |_| set_active_tab.set(PanelTab::Config)
                >
                    {icon("settings")}
                    " Configuration"
                </button>
                <button
                    class=move || tab_class(active_tab.get(), PanelTab::Upload)
                    on:click=move |_| set_active_tab.set(PanelTab::Upload)
                >
                    {icon("upload")}
                    " Documents"
                </button>
            </div>

            {move || match active_tab.get() {
                PanelTab::Tickets => view! { <TicketsTab tickets=tickets /> }.into_any(),
                PanelTab::Activity => view! { <ActivityTab entries=activity /> }.into_any(),
                PanelTab::Config => view! { <ConfigTab /> }.into_any(),
                PanelTab::Upload => view! { <UploadTab /> }.into_any(),
            }}
        </div>
    }
}
