//! Customer support — a FIFO of free-text complaint lines per number.

use crate::error::{TelcoError, TelcoResult};
use std::collections::VecDeque;

/// Check that a message can be stored as a single queue line.
pub fn validate_message(message: &str) -> TelcoResult<()> {
    if message.contains(|c: char| c == '\n' || c == '\r') {
        return Err(TelcoError::MultilineComplaint);
    }
    if message.trim().is_empty() {
        return Err(TelcoError::EmptyComplaint);
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplaintQueue {
    messages: VecDeque<String>,
}

impl ComplaintQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a queue from the stored lines, oldest first.
    pub fn from_lines(content: &str) -> Self {
        Self {
            messages: content.lines().map(str::to_string).collect(),
        }
    }

    pub fn enqueue(&mut self, message: &str) -> TelcoResult<()> {
        validate_message(message)?;
        self.messages.push_back(message.to_string());
        Ok(())
    }

    pub fn dequeue(&mut self) -> Option<String> {
        self.messages.pop_front()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// File contents for this queue: one line per message, newline-terminated.
    pub fn to_lines(&self) -> String {
        self.messages.iter().fold(String::new(), |mut out, m| {
            out.push_str(m);
            out.push('\n');
            out
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_keep_order_and_spaces() {
        let mut q = ComplaintQueue::from_lines("no signal at home\nbill too high\n");
        assert_eq!(q.len(), 2);
        assert_eq!(q.dequeue().as_deref(), Some("no signal at home"));
        assert_eq!(q.to_lines(), "bill too high\n");
    }

    #[test]
    fn multiline_message_rejected() {
        let mut q = ComplaintQueue::new();
        assert!(matches!(q.enqueue("a\nb"), Err(TelcoError::MultilineComplaint)));
        assert!(matches!(q.enqueue("   "), Err(TelcoError::EmptyComplaint)));
        assert!(q.is_empty());
    }
}
