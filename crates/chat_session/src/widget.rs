use std::sync::Arc;

use chat_core::Message;
use chat_state::VisibilityController;
use parking_lot::Mutex;
use tokio::sync::broadcast;

use crate::events::SessionEvent;
use crate::session::{ChatSession, SubmitOutcome};

/// Everything a shell renders, read in one go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetSnapshot {
    pub messages: Vec<Message>,
    pub busy: bool,
    pub pending_input: String,
    pub open: bool,
}

/// The surface exposed to presentation shells: the chat session plus the
/// open/closed toggle of the widget.
#[derive(Clone)]
pub struct ChatWidget {
    session: ChatSession,
    visibility: Arc<Mutex<VisibilityController>>,
}

impl ChatWidget {
    pub fn new(session: ChatSession) -> Self {
        Self {
            session,
            visibility: Arc::new(Mutex::new(VisibilityController::new())),
        }
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.session.subscribe()
    }

    pub fn messages(&self) -> Vec<Message> {
        self.session.messages()
    }

    pub fn is_busy(&self) -> bool {
        self.session.is_busy()
    }

    pub fn pending_input(&self) -> String {
        self.session.pending_input()
    }

    pub fn is_open(&self) -> bool {
        self.visibility.lock().is_open()
    }

    pub fn snapshot(&self) -> WidgetSnapshot {
        let session = self.session.snapshot();
        WidgetSnapshot {
            messages: session.messages,
            busy: session.busy,
            pending_input: session.pending_input,
            open: self.is_open(),
        }
    }

    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        self.session.submit(text).await
    }

    pub fn set_pending_input(&self, text: impl Into<String>) {
        self.session.set_pending_input(text);
    }

    pub async fn submit_sample(&self, sample: &str) -> SubmitOutcome {
        self.session.submit_sample(sample).await
    }

    /// Flip between expanded and collapsed. Session state is untouched.
    pub fn toggle(&self) -> bool {
        let mut visibility = self.visibility.lock();
        let open = visibility.toggle();
        self.session.notify(SessionEvent::VisibilityChanged(open));
        open
    }
}
