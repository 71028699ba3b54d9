//! Conversation view: the user's question and the assistant bubble.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rebuilt from `QaState::conversation` on every change; a new submission
//! replaces the previous pair rather than appending to it.

#[cfg(test)]
#[path = "chat_view_test.rs"]
mod chat_view_test;

use leptos::prelude::*;

use crate::state::qa::{AssistantReply, QaState};

/// Conversation log with a "copy answer" button.
///
/// `answer_ref` points at the log element so the copy handler can read its
/// displayed text.
#[component]
pub fn ChatView(answer_ref: NodeRef<leptos::html::Div>, on_copy: Callback<()>) -> impl IntoView {
    let qa = expect_context::<RwSignal<QaState>>();

    view! {
        <section class="chat">
            <div class="chat__header">
                <h2 class="chat__title">"对话"</h2>
                <button type="button" class="btn chat__copy" on:click=move |_| on_copy.run(())>
                    "复制回答"
                </button>
            </div>
            <div class="chat__log" node_ref=answer_ref>
                {move || {
                    let conversation = qa.with(|s| s.conversation.clone());
                    let Some(question) = conversation.question else {
                        return ().into_any();
                    };
                    let reply = conversation.reply;
                    let class = assistant_bubble_class(&reply);

                    view! {
                        <div class="chat-row user">
                            <div class="bubble user">{question}</div>
                        </div>
                        <div class="chat-row ai">
                            {match reply.html() {
                                Some(html) => view! { <div class=class inner_html=html></div> }.into_any(),
                                None => view! {
                                    <div class=class>
                                        <span class="dot"></span>
                                        <span class="dot"></span>
                                        <span class="dot"></span>
                                    </div>
                                }
                                    .into_any(),
                            }}
                        </div>
                    }
                        .into_any()
                }}
            </div>
        </section>
    }
}

fn assistant_bubble_class(reply: &AssistantReply) -> &'static str {
    match reply {
        AssistantReply::Idle | AssistantReply::Pending => "bubble ai typing",
        AssistantReply::Rendered(_) => "bubble ai",
        AssistantReply::Failed(_) => "bubble ai bubble--failed",
    }
}
