use crate::shared::icons::icon;
use leptos::prelude::*;

/// Thousands-separated integer formatting for card values.
pub fn format_count(n: i64) -> String {
    let s = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Pre-formatted value text
    #[prop(into)]
    value: Signal<String>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {subtitle_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(247), "247");
        assert_eq!(format_count(1247), "1\u{00a0}247");
        assert_eq!(format_count(1_000_000), "1\u{00a0}000\u{00a0}000");
        assert_eq!(format_count(-1500), "-1\u{00a0}500");
    }

    #[test]
    fn test_format_count_extremes() {
        assert_eq!(
            format_count(i64::MIN),
            "-9\u{00a0}223\u{00a0}372\u{00a0}036\u{00a0}854\u{00a0}775\u{00a0}808"
        );
        assert_eq!(
            format_count(i64::MAX),
            "9\u{00a0}223\u{00a0}372\u{00a0}036\u{00a0}854\u{00a0}775\u{00a0}807"
        );
    }
}
