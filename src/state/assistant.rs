#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

/// Greeting seeded as the first assistant message.
pub const GREETING: &str = "Hi, I’m the Deakin Rover AI assistant. Tap the bubble and ask me anything about the rover or the Australian Rover Challenge.";

/// Fallback assistant reply shown when the backend call fails.
pub const FALLBACK_REPLY: &str =
    "Sorry, something went wrong talking to the AI backend. Please try again.";

/// Who authored a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// A single conversation message. Immutable once appended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
}

/// Conversation and request state for the assistant widget.
///
/// Wrapped in an `RwSignal` and provided via context; components read it
/// reactively and mutate it through the methods below. Ids are strictly
/// increasing and unique within a session, and `loading` admits at most
/// one in-flight request at a time.
#[derive(Clone, Debug)]
pub struct AssistantState {
    pub open: bool,
    pub loading: bool,
    pub messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Default for AssistantState {
    fn default() -> Self {
        Self {
            open: false,
            loading: false,
            messages: vec![ChatMessage {
                id: 1,
                sender: Sender::Assistant,
                text: GREETING.to_owned(),
            }],
            next_id: 2,
        }
    }
}

impl AssistantState {
    /// Flip panel visibility. Messages and any in-flight request are
    /// untouched.
    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    /// Accept a draft for submission.
    ///
    /// Appends the trimmed draft as a user message, raises the in-flight
    /// gate, and returns the text to dispatch. Returns `None` without
    /// touching state when the draft is blank or a request is already in
    /// flight.
    pub fn begin_exchange(&mut self, raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || self.loading {
            return None;
        }

        let text = trimmed.to_owned();
        self.push(Sender::User, text.clone());
        self.loading = true;
        Some(text)
    }

    /// Record the assistant's reply for the in-flight exchange and drop
    /// the gate.
    ///
    /// Failure paths pass [`FALLBACK_REPLY`] through this same call, so a
    /// failed exchange is structurally identical to a successful one.
    pub fn finish_exchange(&mut self, reply: String) {
        self.push(Sender::Assistant, reply);
        self.loading = false;
    }

    fn push(&mut self, sender: Sender, text: String) {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage { id, sender, text });
    }
}
