use crate::shared::components::textarea::Textarea;
use leptos::prelude::*;
use thaw::*;

const DEFAULT_TEMPLATE: &str = "Hello {customer_name},\n\n\
Thank you for reaching out. {reply_body}\n\n\
Best regards,\nSupport team";

#[component]
pub fn ConfigTab() -> impl IntoView {
    // Draft lives only in this browser session.
    let (template, set_template) = signal(DEFAULT_TEMPLATE.to_string());

    view! {
        <div class="config-panel">
            <Textarea
                label="Reply template".to_string()
                value=template
                rows=10u32
                placeholder="Template used by the AI reply run".to_string()
                on_input=Callback::new(move |value| set_template.set(value))
            />
            <div class="config-panel__actions">
                <Button appearance=ButtonAppearance::Primary disabled=true>
                    "Save"
                </Button>
                <span class="config-panel__note">
                    "Saving is not wired to the backend yet; edits are lost on reload."
                </span>
            </div>
        </div>
    }
}
