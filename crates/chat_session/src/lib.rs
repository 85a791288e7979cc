//! chat_session - The chat session controller
//!
//! `ChatSession` owns the message history and sequences a single in-flight
//! exchange with the backend. `ChatWidget` adds the visibility toggle and is
//! the whole surface a presentation shell needs: it reads state, invokes
//! operations and subscribes to `SessionEvent`s to know when to re-render.

pub mod error;
pub mod events;
pub mod session;
pub mod widget;

pub use error::ExchangeError;
pub use events::SessionEvent;
pub use session::{ChatSession, SessionSnapshot, SubmitOutcome};
pub use widget::{ChatWidget, WidgetSnapshot};
