//! Typed quit-phrase detection.
//!
//! The toy grabs input focus, so a child cannot close it by accident; the
//! only way out is typing the quit phrase. The tracker keeps a sliding
//! window of the most recently produced characters and reports when the
//! phrase appears, case-insensitively.

/// The phrase that ends a session when typed.
pub const QUIT_PHRASE: &str = "quit";

/// Sliding-window detector for the typed quit phrase.
#[derive(Debug, Default)]
pub struct QuitTracker {
    window: String,
}

impl QuitTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one produced character; returns true once the phrase is typed.
    pub fn observe(&mut self, ch: char) -> bool {
        for lowered in ch.to_lowercase() {
            self.window.push(lowered);
        }
        // Keep only as many chars as the phrase needs.
        let excess = self.window.chars().count().saturating_sub(QUIT_PHRASE.len());
        for _ in 0..excess {
            self.window.remove(0);
        }
        self.window == QUIT_PHRASE
    }
}
