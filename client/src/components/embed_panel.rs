//! Embed panel: iframe snippet, live preview, refresh and copy actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows `QaState::embed`. The page hides this panel in embed mode through
//! the `embed-mode` body class, and the snippet is never derived there.

use leptos::prelude::*;

use crate::state::qa::QaState;

/// Snippet textarea with a preview of the embedded page.
#[component]
pub fn EmbedPanel(on_refresh: Callback<()>, on_copy: Callback<()>) -> impl IntoView {
    let qa = expect_context::<RwSignal<QaState>>();

    let iframe_code = move || qa.with(|s| s.embed.as_ref().map(|e| e.iframe.clone()).unwrap_or_default());
    let preview_src = move || qa.with(|s| s.embed.as_ref().map(|e| e.preview_src.clone()));

    view! {
        <section class="embed-panel">
            <div class="embed-panel__header">
                <h2 class="embed-panel__title">"嵌入代码"</h2>
                <div class="embed-panel__actions">
                    <button type="button" class="btn" on:click=move |_| on_refresh.run(())>
                        "刷新"
                    </button>
                    <button type="button" class="btn" on:click=move |_| on_copy.run(())>
                        "复制代码"
                    </button>
                </div>
            </div>
            <textarea class="embed-panel__code" rows="4" readonly=true prop:value=iframe_code></textarea>
            <iframe class="embed-panel__preview" src=preview_src title="RAG助手"></iframe>
        </section>
    }
}
