//! Local state of the chat page: the draft box and the (empty) transcript.

/// Author of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    /// The person asking.
    User,
    /// The assistant answering.
    Assistant,
}

/// One transcript line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    /// Author.
    pub role: ChatRole,
    /// Body text.
    pub text: String,
}

/// Text in the prompt box.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatDraft {
    text: String,
}

impl ChatDraft {
    /// Current text.
    #[must_use]
    pub const fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Replace the text with what the user typed.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Fill the box with a suggested prompt.
    pub fn apply_suggestion(&mut self, suggestion: &str) {
        suggestion.clone_into(&mut self.text);
    }

    /// Whether there is something other than whitespace to send.
    #[must_use]
    pub fn can_send(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// Transcript plus draft for one chat page instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatSession {
    /// Messages shown above the prompt box.
    pub messages: Vec<ChatMessage>,
    /// Prompt box.
    pub draft: ChatDraft,
}

impl ChatSession {
    /// Whether the hero and suggestions replace the transcript.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_shows_hero() {
        let session = ChatSession::default();
        assert!(session.is_empty());
        assert!(!session.draft.can_send());
    }

    #[test]
    fn suggestion_replaces_draft_text() {
        let mut draft = ChatDraft::default();
        draft.set_text("partial question");
        draft.apply_suggestion("Show Pacific Ocean temperature data");
        assert_eq!(draft.text(), "Show Pacific Ocean temperature data");
        assert!(draft.can_send());
    }

    #[test]
    fn whitespace_only_draft_cannot_be_sent() {
        let mut draft = ChatDraft::default();
        draft.set_text(" \n\t ");
        assert!(!draft.can_send());
    }

    #[test]
    fn transcript_with_messages_is_not_empty() {
        let session = ChatSession {
            messages: vec![ChatMessage {
                role: ChatRole::User,
                text: "hello".into(),
            }],
            draft: ChatDraft::default(),
        };
        assert!(!session.is_empty());
    }
}
