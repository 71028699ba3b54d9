//! Status text under the question form.

#[cfg(test)]
#[path = "status_line_test.rs"]
mod status_line_test;

use leptos::prelude::*;

use crate::state::qa::{QaState, StatusLine, StatusTone};

/// Live status line; errors are styled with the danger colour.
#[component]
pub fn StatusLineView() -> impl IntoView {
    let qa = expect_context::<RwSignal<QaState>>();

    view! {
        <p class=move || qa.with(|s| status_class(&s.status)) aria-live="polite">
            {move || qa.with(|s| s.status.text.clone())}
        </p>
    }
}

fn status_class(status: &StatusLine) -> &'static str {
    match status.tone {
        StatusTone::Muted => "status",
        StatusTone::Error => "status status--error",
    }
}
