use crate::shared::components::badge::{log_level_class, log_level_icon};
use crate::shared::date_utils::format_time;
use crate::shared::icons::icon;
use contracts::support::LogEntry;
use leptos::prelude::*;

#[component]
pub fn ActivityTab(#[prop(into)] entries: Signal<Vec<LogEntry>>) -> impl IntoView {
    view! {
        <div class="activity-feed">
            {move || {
                entries
                    .get()
                    .into_iter()
                    .map(|entry| {
                        let icon_view = log_level_icon(&entry.level).map(icon);
                        let ticket_ref = entry.ticket_id.map(|id| {
                            view! { <span class="log-entry__ticket">{format!("#{}", id)}</span> }
                        });
                        view! {
                            <div class=log_level_class(&entry.level)>
                                <span class="log-entry__icon">{icon_view}</span>
                                <span class="log-entry__time">{format_time(&entry.timestamp)}</span>
                                <span class="log-entry__message">{entry.message}</span>
                                {ticket_ref}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
