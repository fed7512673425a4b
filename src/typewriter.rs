use std::{sync::Arc, time::Duration};

/// Delay between two revealed characters.
pub const TYPE_INTERVAL: Duration = Duration::from_millis(40);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingState {
    Typing,
    Finished,
    Cancelled,
}

/// Reveals a string one character per tick.
///
/// Once finished or cancelled, `tick` never mutates again, so a timer callback
/// that outlives its view is harmless.
#[derive(Debug, Clone)]
pub struct Typewriter {
    source: Arc<str>,
    // byte offset of the revealed prefix, always on a char boundary
    end: usize,
    state: TypingState,
}

impl Typewriter {
    pub fn new(source: impl Into<Arc<str>>) -> Self {
        let source = source.into();
        let state = if source.is_empty() {
            TypingState::Finished
        } else {
            TypingState::Typing
        };
        Self {
            source,
            end: 0,
            state,
        }
    }

    /// Reveals the next character and returns the visible prefix.
    pub fn tick(&mut self) -> Option<&str> {
        if self.state != TypingState::Typing {
            return None;
        }
        let next = self.source[self.end..].chars().next()?;
        self.end += next.len_utf8();
        if self.end == self.source.len() {
            self.state = TypingState::Finished;
        }
        Some(&self.source[..self.end])
    }

    pub fn cancel(&mut self) {
        if self.state == TypingState::Typing {
            self.state = TypingState::Cancelled;
        }
    }

    pub fn visible(&self) -> &str {
        &self.source[..self.end]
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn state(&self) -> TypingState {
        self.state
    }

    pub fn is_typing(&self) -> bool {
        self.state == TypingState::Typing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_after_each_tick() {
        let source = "let x = 1;";
        let mut tw = Typewriter::new(source);
        assert_eq!(tw.visible(), "");
        for n in 1..=source.len() {
            let shown = tw.tick().map(str::to_owned);
            assert_eq!(shown.as_deref(), Some(&source[..n]));
            assert_eq!(tw.visible(), &source[..n]);
        }
        assert_eq!(tw.state(), TypingState::Finished);
    }

    #[test]
    fn test_no_mutation_after_finish() {
        let mut tw = Typewriter::new("ab");
        tw.tick();
        tw.tick();
        assert!(!tw.is_typing());
        for _ in 0..5 {
            assert_eq!(tw.tick(), None);
        }
        assert_eq!(tw.visible(), "ab");
        assert_eq!(tw.state(), TypingState::Finished);
    }

    #[test]
    fn test_multibyte_characters() {
        let source = "héllo → 🚀";
        let mut tw = Typewriter::new(source);
        let expected = source
            .char_indices()
            .map(|(i, c)| &source[..i + c.len_utf8()])
            .collect::<Vec<_>>();
        for prefix in expected {
            assert_eq!(tw.tick(), Some(prefix));
        }
        assert_eq!(tw.tick(), None);
    }

    #[test]
    fn test_cancel_mid_reveal() {
        let mut tw = Typewriter::new("hello");
        tw.tick();
        tw.tick();
        tw.cancel();
        assert_eq!(tw.state(), TypingState::Cancelled);
        assert_eq!(tw.tick(), None);
        assert_eq!(tw.tick(), None);
        assert_eq!(tw.visible(), "he");
    }

    #[test]
    fn test_cancel_after_finish_keeps_finished() {
        let mut tw = Typewriter::new("a");
        tw.tick();
        tw.cancel();
        assert_eq!(tw.state(), TypingState::Finished);
    }

    #[test]
    fn test_empty_source() {
        let mut tw = Typewriter::new("");
        assert_eq!(tw.state(), TypingState::Finished);
        assert_eq!(tw.tick(), None);
        assert_eq!(tw.visible(), "");
    }
}
