use leptos::prelude::*;

/// Badge variant class for a ticket status.
///
/// Total over arbitrary input: anything outside the known set falls back to
/// the neutral variant.
pub fn ticket_status_variant(status: &str) -> &'static str {
    match status {
        "open" => "badge--success",
        "pending" => "badge--warning",
        "solved" => "badge--primary",
        _ => "badge--neutral",
    }
}

/// Icon name for a log level; `None` for unrecognized levels.
pub fn log_level_icon(level: &str) -> Option<&'static str> {
    match level {
        "INFO" => Some("info"),
        "SUCCESS" => Some("check-circle"),
        "WARNING" => Some("alert-triangle"),
        "ERROR" => Some("alert-circle"),
        _ => None,
    }
}

/// Text style class for a log level, with a default branch.
pub fn log_level_class(level: &str) -> &'static str {
    match level {
        "INFO" => "log-entry log-entry--info",
        "SUCCESS" => "log-entry log-entry--success",
        "WARNING" => "log-entry log-entry--warning",
        "ERROR" => "log-entry log-entry--error",
        _ => "log-entry",
    }
}

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant class, e.g. "badge--success"; defaults to neutral
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || {
        variant
            .get()
            .unwrap_or_else(|| "badge--neutral".to_string())
    };

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}

/// Status badge for the tickets table.
#[component]
pub fn StatusBadge(
    /// Raw status text from the backend
    #[prop(into)]
    status: String,
) -> impl IntoView {
    let status_class = format!("badge {}", ticket_status_variant(&status));

    view! {
        <span class=status_class>
            {status}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_variant_is_total() {
        assert_eq!(ticket_status_variant("open"), "badge--success");
        assert_eq!(ticket_status_variant("pending"), "badge--warning");
        assert_eq!(ticket_status_variant("solved"), "badge--primary");
        assert_eq!(ticket_status_variant("other"), "badge--neutral");
        assert_eq!(ticket_status_variant("escalated"), "badge--neutral");
        assert_eq!(ticket_status_variant(""), "badge--neutral");
    }

    #[test]
    fn test_log_level_icon_for_known_levels() {
        assert_eq!(log_level_icon("INFO"), Some("info"));
        assert_eq!(log_level_icon("SUCCESS"), Some("check-circle"));
        assert_eq!(log_level_icon("WARNING"), Some("alert-triangle"));
        assert_eq!(log_level_icon("ERROR"), Some("alert-circle"));
    }

    #[test]
    fn test_unknown_level_has_no_icon_and_default_class() {
        assert_eq!(log_level_icon("TRACE"), None);
        assert_eq!(log_level_class("TRACE"), "log-entry");
        assert_eq!(log_level_class(""), "log-entry");
    }

    #[test]
    fn test_log_level_class_for_known_levels() {
        assert_eq!(log_level_class("ERROR"), "log-entry log-entry--error");
        assert_eq!(log_level_class("INFO"), "log-entry log-entry--info");
    }
}
