pub mod presenter;
pub mod prompt;
pub mod session;

pub use presenter::{MatchPresenter, NewsPresenter};
pub use prompt::SelectionPrompt;
pub use session::{Session, SessionOutcome};

/// User-facing warning lines, printed to the session output.
pub mod messages {
    pub const CRICKET_FETCH_FAILED: &str = "⚠️ Error fetching cricket data.";
    pub const NEWS_FETCH_FAILED: &str = "⚠️ Error fetching news.";
    pub const INVALID_CHOICE: &str = "⚠️ Invalid choice.";
    pub const NO_TEAM_SELECTED: &str = "⚠️ No team selected.";
}
