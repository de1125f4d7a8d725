//! FAQ accordion.

use serde::{Deserialize, Serialize};

/// A question and its answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// Which answer is expanded. At most one is open at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a click on question `index`.
    ///
    /// An open question closes; any other question opens and closes the rest.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open(&self) -> Option<usize> {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_open_at_a_time() {
        let mut faq = Accordion::new();
        faq.toggle(1);
        assert!(faq.is_open(1));
        faq.toggle(3);
        assert!(faq.is_open(3));
        assert!(!faq.is_open(1));
    }

    #[test]
    fn test_click_open_closes() {
        let mut faq = Accordion::new();
        faq.toggle(0);
        faq.toggle(0);
        assert_eq!(faq.open(), None);
    }
}
