//! Question/answer page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the `QaState` signal and registers every event handler once: submit,
//! input change, fill demo, copy answer, refresh snippet, copy snippet. The
//! handlers only call `QaState` methods; async work (the question POST and
//! clipboard writes) runs on `spawn_local` and feeds its outcome back through
//! the same signal.
//!
//! LOAD ORDER
//! ==========
//! The embed marker is applied, the query pre-fill happens while building the
//! initial state, and the snippet is derived once the browser location is
//! available after hydration.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::chat_view::ChatView;
use crate::components::embed_panel::EmbedPanel;
use crate::components::status_line::StatusLineView;
use crate::state::qa::{QaState, QueryState};
use crate::util::embed::PLACEHOLDER_QUESTION;
use crate::util::{clipboard, embed_mode, page};

#[component]
pub fn AskPage() -> impl IntoView {
    let query = use_query_map();
    let query_state = query.with_untracked(|q| {
        QueryState::new(q.get("embed").as_deref(), q.get("question").as_deref())
    });
    let embed = query_state.embed_mode;

    let qa = RwSignal::new(QaState::load(&query_state));
    provide_context(qa);

    let answer_ref = NodeRef::<leptos::html::Div>::new();

    // Client-only: effects do not run during server rendering.
    Effect::new(move || {
        embed_mode::apply(qa.with_untracked(QaState::embed_mode));
        if let Some(location) = page::current() {
            qa.update(|s| s.attach_location(location));
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(question) = qa.with_untracked(QaState::pending_question) else {
            return;
        };
        qa.update(|s| {
            s.begin_submit();
        });

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::ask(&question).await;
            if let Err(err) = &outcome {
                log::error!("question request failed: {err}");
            }
            qa.update(|s| s.finish_submit(outcome));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = question;
    };

    let copy = move |text: Option<String>| {
        let Some(text) = text else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match clipboard::write_text(&text).await {
                Ok(()) => qa.update(QaState::copy_succeeded),
                Err(err) => {
                    log::warn!("clipboard write failed: {err}");
                    qa.update(QaState::copy_failed);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = text;
    };

    let on_copy_answer = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        let displayed = answer_ref.get_untracked().map(|el| el.inner_text());
        #[cfg(not(feature = "hydrate"))]
        let displayed: Option<String> = None;
        copy(clipboard::copy_source_text(None, displayed.as_deref()));
    });

    let on_copy_embed = Callback::new(move |()| {
        let code = qa.with_untracked(|s| s.embed.as_ref().map(|e| e.iframe.clone()));
        copy(clipboard::copy_source_text(code.as_deref(), None));
    });

    let on_refresh_embed = Callback::new(move |()| qa.update(QaState::refresh_embed));
    let on_fill_demo = move |_| qa.update(QaState::fill_demo);

    view! {
        <main class="qa-page" class:qa-page--embed=embed>
            <header class="qa-page__header">
                <h1 class="qa-page__title">"RAG 助手"</h1>
                <p class="qa-page__subtitle">"输入问题，提交后由接口返回 Markdown 格式的回答。"</p>
            </header>

            <form id="qa-form" class="qa-form" on:submit=on_submit>
                <textarea
                    id="question"
                    class="qa-form__input"
                    rows="4"
                    placeholder=PLACEHOLDER_QUESTION
                    prop:value=move || qa.with(|s| s.input.clone())
                    on:input=move |ev| qa.update(|s| s.input_changed(event_target_value(&ev)))
                ></textarea>
                <div class="qa-form__actions">
                    <button type="button" id="fill-demo" class="btn" on:click=on_fill_demo>
                        "填入示例"
                    </button>
                    <button
                        type="submit"
                        id="submit-btn"
                        class="btn btn--primary"
                        disabled=move || qa.with(|s| s.submitting)
                    >
                        "提交"
                    </button>
                </div>
            </form>

            <StatusLineView/>
            <ChatView answer_ref=answer_ref on_copy=on_copy_answer/>
            <EmbedPanel on_refresh=on_refresh_embed on_copy=on_copy_embed/>
        </main>
    }
}
