//! Inline Edit Session
//!
//! State of one row while its name is being edited.

/// Draft name plus a one-shot commit flag.
///
/// Blur and Enter both commit; whichever fires first wins and later
/// commits in the same session return `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    draft: String,
    finished: bool,
}

impl EditSession {
    /// Start editing with the current name pre-filled
    pub fn begin(current_name: &str) -> Self {
        Self {
            draft: current_name.to_string(),
            finished: false,
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, value: String) {
        if !self.finished {
            self.draft = value;
        }
    }

    /// Close the session, yielding the name to commit the first time only
    pub fn finish(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }
        self.finished = true;
        Some(self.draft.clone())
    }
}
