use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// Transient footer message with an expiry deadline.
#[derive(Debug, Clone, Default)]
pub struct MessageState {
    current: Option<(MessageKind, String)>,
    expires_at: Option<Instant>,
}

impl MessageState {
    const SUCCESS_TIMEOUT: Duration = Duration::from_secs(3);
    const ERROR_TIMEOUT: Duration = Duration::from_secs(5);

    pub fn set_success_at(&mut self, msg: impl Into<String>, now: Instant) {
        self.current = Some((MessageKind::Success, msg.into()));
        self.expires_at = Some(now + Self::SUCCESS_TIMEOUT);
    }

    pub fn set_error_at(&mut self, msg: impl Into<String>, now: Instant) {
        self.current = Some((MessageKind::Error, msg.into()));
        self.expires_at = Some(now + Self::ERROR_TIMEOUT);
    }

    pub fn clear_expired_at(&mut self, now: Instant) {
        if let Some(expires) = self.expires_at
            && expires <= now
        {
            self.current = None;
            self.expires_at = None;
        }
    }

    pub fn current(&self) -> Option<(MessageKind, &str)> {
        self.current.as_ref().map(|(kind, text)| (*kind, text.as_str()))
    }

    pub fn last_success(&self) -> Option<&str> {
        match &self.current {
            Some((MessageKind::Success, text)) => Some(text),
            _ => None,
        }
    }

    pub fn last_error(&self) -> Option<&str> {
        match &self.current {
            Some((MessageKind::Error, text)) => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_instant() -> Instant {
        Instant::now()
    }

    #[test]
    fn success_replaces_error() {
        let now = fixed_instant();
        let mut state = MessageState::default();
        state.set_error_at("boom", now);

        state.set_success_at("Saved", now);

        assert_eq!(state.last_success(), Some("Saved"));
        assert_eq!(state.last_error(), None);
    }

    #[test]
    fn error_replaces_success() {
        let now = fixed_instant();
        let mut state = MessageState::default();
        state.set_success_at("Saved", now);

        state.set_error_at("boom", now);

        assert_eq!(state.last_error(), Some("boom"));
        assert_eq!(state.last_success(), None);
    }

    #[test]
    fn expired_message_is_cleared() {
        let now = fixed_instant();
        let mut state = MessageState::default();
        state.set_error_at("boom", now);

        state.clear_expired_at(now + MessageState::ERROR_TIMEOUT);

        assert_eq!(state.current(), None);
    }

    #[test]
    fn unexpired_message_survives_clear() {
        let now = fixed_instant();
        let mut state = MessageState::default();
        state.set_success_at("Saved", now);

        state.clear_expired_at(now + Duration::from_secs(1));

        assert_eq!(state.last_success(), Some("Saved"));
    }
}
