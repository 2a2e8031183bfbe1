use crate::shared::components::badge::{Badge, StatusBadge};
use crate::shared::date_utils::format_timestamp;
use contracts::support::Ticket;
use leptos::prelude::*;

#[component]
pub fn TicketsTab(#[prop(into)] tickets: Signal<Vec<Ticket>>) -> impl IntoView {
    view! {
        <table class="tickets-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Subject"</th>
                    <th>"Status"</th>
                    <th>"Requester"</th>
                    <th>"Tags"</th>
                    <th>"Created"</th>
                    <th>"Updated"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let items = tickets.get();
                    if items.is_empty() {
                        view! {
                            <tr class="tickets-table__empty">
                                <td colspan="7">"No tickets found"</td>
                            </tr>
                        }
                        .into_any()
                    } else {
                        items
                            .into_iter()
                            .map(|ticket| view! { <TicketRow ticket=ticket /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </tbody>
        </table>
    }
}

#[component]
fn TicketRow(ticket: Ticket) -> impl IntoView {
    view! {
        <tr>
            <td class="tickets-table__id">{format!("#{}", ticket.id)}</td>
            <td class="tickets-table__subject">{ticket.subject}</td>
            <td>
                <StatusBadge status=ticket.status />
            </td>
            <td>{format!("#{}", ticket.requester_id)}</td>
            <td class="tickets-table__tags">
                {ticket
                    .tags
                    .into_iter()
                    .map(|tag| view! { <Badge>{tag}</Badge> })
                    .collect_view()}
            </td>
            <td>{format_timestamp(&ticket.created_at)}</td>
            <td>{format_timestamp(&ticket.updated_at)}</td>
        </tr>
    }
}
