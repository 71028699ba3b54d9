//! Question/answer form state.
//!
//! DESIGN
//! ======
//! `QaState` is the single mutable receiver behind the page: every event
//! handler calls one of its methods through `RwSignal::update`. Methods never
//! touch the DOM or the network, so the whole request/render lifecycle can be
//! exercised without a browser.
//!
//! LIFECYCLE
//! =========
//! `begin_submit` validates and locks the form and returns the question to
//! send; `finish_submit` takes the outcome of that request and unlocks the
//! form again. Between the two, `submitting` keeps the submit button disabled,
//! which is the only thing preventing a second request.

#[cfg(test)]
#[path = "qa_test.rs"]
mod qa_test;

use crate::net::types::{AskError, AskResponse};
use crate::util::embed::{EmbedSnippet, build_snippet};
use crate::util::embed_mode;
use crate::util::markdown::render_markdown_html;
use crate::util::page::PageLocation;
use crate::util::text::js_trim;

/// Question placed in the input box by the "fill demo" button.
pub const DEMO_QUESTION: &str =
    "请拉一下今年注册选股通，没有领《脱水研报》《早知道》7天试读的手机号清单,以csv形式导出。";

pub const STATUS_IDLE: &str = "等待提交";
pub const STATUS_REQUESTING: &str = "正在请求接口...";
pub const STATUS_COMPLETE: &str = "请求完成";
pub const STATUS_REQUEST_FAILED: &str = "请求失败";
pub const STATUS_COPIED: &str = "已复制到剪贴板";
pub const STATUS_COPY_FAILED: &str = "复制失败";

/// Assistant text when a 2xx response carries no usable `answer`.
pub const NO_ANSWER_FIELD: &str = "未返回 answer 字段";

/// Assistant text when the request fails.
pub const FAILURE_MESSAGE: &str = "请求失败，请检查服务是否已启动。";

/// Query parameters read once at page load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryState {
    pub embed_mode: bool,
    pub question: Option<String>,
}

impl QueryState {
    /// Build from the raw `embed` and `question` parameters.
    ///
    /// An empty `question` counts as absent.
    pub fn new(embed: Option<&str>, question: Option<&str>) -> Self {
        Self {
            embed_mode: embed_mode::is_enabled(embed),
            question: question.filter(|q| !q.is_empty()).map(str::to_owned),
        }
    }
}

/// Tone of the status line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusTone {
    #[default]
    Muted,
    Error,
}

/// Status text under the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub tone: StatusTone,
}

impl StatusLine {
    pub fn muted(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: StatusTone::Muted }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: StatusTone::Error }
    }

    pub fn is_error(&self) -> bool {
        self.tone == StatusTone::Error
    }
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::muted(STATUS_IDLE)
    }
}

/// State of the assistant bubble. Exactly one at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AssistantReply {
    /// Nothing asked yet.
    #[default]
    Idle,
    /// Request in flight; shown as three animated dots.
    Pending,
    /// Rendered answer HTML.
    Rendered(String),
    /// Request failed; the reason is surfaced in the status line.
    Failed(String),
}

impl AssistantReply {
    /// HTML to place in the bubble, or `None` while idle or pending.
    pub fn html(&self) -> Option<String> {
        match self {
            Self::Idle | Self::Pending => None,
            Self::Rendered(html) => Some(html.clone()),
            Self::Failed(_) => Some(render_markdown_html(FAILURE_MESSAGE)),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// The (user, assistant) pair shown for the latest submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Conversation {
    pub question: Option<String>,
    pub reply: AssistantReply,
}

impl Conversation {
    fn asked(question: String) -> Self {
        Self { question: Some(question), reply: AssistantReply::Pending }
    }

    pub fn is_empty(&self) -> bool {
        self.question.is_none()
    }
}

/// Full UI state of the question/answer page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QaState {
    /// Current contents of the question box.
    pub input: String,
    /// True while a request is in flight; disables the submit button.
    pub submitting: bool,
    pub status: StatusLine,
    pub conversation: Conversation,
    /// Latest derived snippet; `None` until first derived.
    pub embed: Option<EmbedSnippet>,
    location: Option<PageLocation>,
    embed_mode: bool,
}

impl QaState {
    /// Initial state for a page loaded with `query`, pre-filling the question.
    pub fn load(query: &QueryState) -> Self {
        Self {
            input: query.question.clone().unwrap_or_default(),
            embed_mode: query.embed_mode,
            ..Self::default()
        }
    }

    /// Whether the page was loaded in embed mode. Fixed for the page lifetime.
    pub fn embed_mode(&self) -> bool {
        self.embed_mode
    }

    pub fn location(&self) -> Option<&PageLocation> {
        self.location.as_ref()
    }

    /// Record where the page is served from and derive the snippet.
    pub fn attach_location(&mut self, location: PageLocation) {
        self.location = Some(location);
        self.refresh_embed();
    }

    /// Trimmed question that a submit would send, if any.
    pub fn pending_question(&self) -> Option<String> {
        if self.submitting {
            return None;
        }
        let question = js_trim(&self.input);
        (!question.is_empty()).then(|| question.to_owned())
    }

    /// Start a submission.
    ///
    /// Returns the question to send, or `None` (leaving the state untouched)
    /// when the input is blank or a request is already in flight.
    pub fn begin_submit(&mut self) -> Option<String> {
        let question = self.pending_question()?;
        self.submitting = true;
        self.input.clear();
        self.status = StatusLine::muted(STATUS_REQUESTING);
        self.conversation = Conversation::asked(question.clone());
        Some(question)
    }

    /// Apply the outcome of the request started by `begin_submit`.
    pub fn finish_submit(&mut self, outcome: Result<AskResponse, AskError>) {
        match outcome {
            Ok(resp) => {
                let markdown = resp.answer_text().unwrap_or(NO_ANSWER_FIELD);
                self.conversation.reply = AssistantReply::Rendered(render_markdown_html(markdown));
                self.status = StatusLine::muted(STATUS_COMPLETE);
            }
            Err(err) => {
                let mut reason = err.to_string();
                if reason.is_empty() {
                    reason = STATUS_REQUEST_FAILED.to_owned();
                }
                self.conversation.reply = AssistantReply::Failed(reason.clone());
                self.status = StatusLine::error(reason);
            }
        }
        self.submitting = false;
        self.refresh_embed();
    }

    /// Store a user edit of the question box and reset the status.
    pub fn input_changed(&mut self, value: String) {
        self.input = value;
        self.status = StatusLine::muted(STATUS_IDLE);
    }

    /// Put the demo question in the box and refresh the snippet.
    pub fn fill_demo(&mut self) {
        self.input = DEMO_QUESTION.to_owned();
        self.refresh_embed();
    }

    /// Re-derive the embed snippet from the current input.
    ///
    /// No-op in embed mode and before the page location is known.
    pub fn refresh_embed(&mut self) {
        if self.embed_mode {
            return;
        }
        let Some(location) = &self.location else {
            return;
        };
        self.embed = Some(build_snippet(location, &self.input));
    }

    pub fn copy_succeeded(&mut self) {
        self.status = StatusLine::muted(STATUS_COPIED);
    }

    pub fn copy_failed(&mut self) {
        self.status = StatusLine::error(STATUS_COPY_FAILED);
    }
}
