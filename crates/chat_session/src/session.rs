//! ChatSession - one exchange at a time against the chat backend
//!
//! All mutation goes through the session; the lock guarding history, pending
//! input and the state machine is never held across the backend await.

use std::sync::Arc;
use std::time::Duration;

use chat_client::{ChatBackend, ChatRequest, ChatResponse, ClientError, HttpChatClient};
use chat_core::{Config, Message, MessageStore};
use chat_state::{ChatEvent, SessionState, StateMachine};
use parking_lot::Mutex;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::error::ExchangeError;
use crate::events::SessionEvent;

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Result of a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was empty after trimming; nothing changed.
    Ignored,
    /// An exchange is already outstanding; nothing changed.
    Busy,
    /// The backend replied and the reply was appended.
    Replied,
    /// The exchange failed and the fallback message was appended.
    Failed,
}

/// Point-in-time copy of the session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub messages: Vec<Message>,
    pub busy: bool,
    pub pending_input: String,
}

struct SessionInner {
    store: MessageStore,
    pending_input: String,
    machine: StateMachine,
    cancel: Option<CancellationToken>,
}

/// The chat session controller.
///
/// Cloning is cheap and every clone drives the same session.
#[derive(Clone)]
pub struct ChatSession {
    backend: Arc<dyn ChatBackend>,
    inner: Arc<Mutex<SessionInner>>,
    events: broadcast::Sender<SessionEvent>,
    timeout: Duration,
    fallback_message: String,
}

impl ChatSession {
    /// Create a session seeded with the configured greeting.
    pub fn new(backend: Arc<dyn ChatBackend>, config: &Config) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            backend,
            inner: Arc::new(Mutex::new(SessionInner {
                store: MessageStore::with_greeting(config.greeting()),
                pending_input: String::new(),
                machine: StateMachine::new(),
                cancel: None,
            })),
            events,
            timeout: config.request_timeout(),
            fallback_message: config.fallback_message().to_string(),
        }
    }

    /// Create a session talking to the HTTP endpoint named by `config`.
    pub fn connect(config: &Config) -> Result<Self, ClientError> {
        let client = HttpChatClient::new(config)?;
        Ok(Self::new(Arc::new(client), config))
    }

    /// Receive change notifications. Lagging receivers skip events but can
    /// always re-read state with [`ChatSession::snapshot`].
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    pub(crate) fn notify(&self, event: SessionEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }

    pub fn messages(&self) -> Vec<Message> {
        self.inner.lock().store.snapshot().to_vec()
    }

    pub fn state(&self) -> SessionState {
        self.inner.lock().machine.state()
    }

    pub fn is_busy(&self) -> bool {
        self.state().is_busy()
    }

    pub fn pending_input(&self) -> String {
        self.inner.lock().pending_input.clone()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let inner = self.inner.lock();
        SessionSnapshot {
            messages: inner.store.snapshot().to_vec(),
            busy: inner.machine.state().is_busy(),
            pending_input: inner.pending_input.clone(),
        }
    }

    /// Replace the not-yet-submitted input text.
    pub fn set_pending_input(&self, text: impl Into<String>) {
        let text = text.into();
        let mut inner = self.inner.lock();
        inner.pending_input = text.clone();
        self.notify(SessionEvent::PendingInputChanged(text));
    }

    /// Submit `text` as a user message and wait for the exchange to resolve.
    ///
    /// Empty input and submissions while another exchange is outstanding
    /// are rejected without touching any state. Otherwise exactly one user
    /// message is appended before the request goes out and exactly one bot
    /// message (reply or fallback) after it resolves. Dropping the returned
    /// future mid-exchange resolves it as cancelled.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let (request, token) = match self.begin_exchange(text) {
            Ok(started) => started,
            Err(outcome) => return outcome,
        };

        let guard = ExchangeGuard {
            session: self,
            resolved: false,
        };
        let result = self.exchange(request, &token).await;
        guard.resolve(result)
    }

    /// Submit the current pending input, as the send button does.
    pub async fn submit_pending(&self) -> SubmitOutcome {
        let text = self.pending_input();
        self.submit(&text).await
    }

    /// Submit a canned prompt exactly as if it had been typed.
    pub async fn submit_sample(&self, sample: &str) -> SubmitOutcome {
        self.set_pending_input(sample);
        self.submit(sample).await
    }

    /// Run [`ChatSession::submit`] on the runtime so the caller stays free.
    pub fn submit_in_background(&self, text: impl Into<String>) -> JoinHandle<SubmitOutcome> {
        let session = self.clone();
        let text = text.into();
        tokio::spawn(async move { session.submit(&text).await })
    }

    /// Abort the outstanding exchange, if any. It resolves as failed.
    pub fn cancel(&self) -> bool {
        match self.inner.lock().cancel.as_ref() {
            Some(token) => {
                log::info!("Cancelling outstanding chat exchange");
                token.cancel();
                true
            }
            None => false,
        }
    }

    fn begin_exchange(&self, text: &str) -> Result<(ChatRequest, CancellationToken), SubmitOutcome> {
        let Some(user_message) = Message::user(text) else {
            log::debug!("Ignoring empty submission");
            return Err(SubmitOutcome::Ignored);
        };

        let mut inner = self.inner.lock();
        if let Err(e) = inner.machine.handle_event(ChatEvent::UserMessageSent) {
            log::info!("Rejecting submission: {}", e);
            return Err(SubmitOutcome::Busy);
        }

        // History is the context preceding this message; the message itself
        // travels separately.
        let request = ChatRequest {
            message: user_message.text().to_string(),
            history: inner.store.chat_context(),
        };
        let index = inner.store.append(user_message.clone());
        inner.pending_input.clear();
        let token = CancellationToken::new();
        inner.cancel = Some(token.clone());

        self.notify(SessionEvent::MessageAppended {
            index,
            message: user_message,
        });
        self.notify(SessionEvent::PendingInputChanged(String::new()));
        self.notify(SessionEvent::BusyChanged(true));

        Ok((request, token))
    }

    async fn exchange(
        &self,
        request: ChatRequest,
        token: &CancellationToken,
    ) -> Result<ChatResponse, ExchangeError> {
        tokio::select! {
            _ = token.cancelled() => Err(ExchangeError::Cancelled),
            reply = tokio::time::timeout(self.timeout, self.backend.send_chat(request)) => match reply {
                Ok(reply) => reply.map_err(ExchangeError::from),
                Err(_) => Err(ExchangeError::Timeout(self.timeout)),
            },
        }
    }

    fn finish_exchange(&self, result: Result<ChatResponse, ExchangeError>) -> SubmitOutcome {
        let (message, event, outcome) = match result {
            Ok(reply) => (
                Message::bot(reply.message),
                ChatEvent::ResponseReceived,
                SubmitOutcome::Replied,
            ),
            Err(e) => {
                log::warn!("Chat exchange failed: {}", e);
                (
                    Message::bot(self.fallback_message.clone()),
                    ChatEvent::RequestFailed {
                        reason: e.to_string(),
                    },
                    SubmitOutcome::Failed,
                )
            }
        };

        let mut inner = self.inner.lock();
        if let Err(e) = inner.machine.handle_event(event) {
            log::error!("Exchange resolved outside of an outstanding request: {}", e);
        }
        inner.cancel = None;
        let index = inner.store.append(message.clone());

        self.notify(SessionEvent::MessageAppended { index, message });
        self.notify(SessionEvent::BusyChanged(false));

        outcome
    }
}

/// Resolves the exchange as cancelled if the submitting future is dropped.
struct ExchangeGuard<'a> {
    session: &'a ChatSession,
    resolved: bool,
}

impl ExchangeGuard<'_> {
    fn resolve(mut self, result: Result<ChatResponse, ExchangeError>) -> SubmitOutcome {
        self.resolved = true;
        self.session.finish_exchange(result)
    }
}

impl Drop for ExchangeGuard<'_> {
    fn drop(&mut self) {
        if !self.resolved {
            self.session.finish_exchange(Err(ExchangeError::Cancelled));
        }
    }
}
