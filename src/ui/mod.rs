//! Presentation layers over the game core: a ratatui terminal UI and a
//! line-based text mode that reads column numbers from any reader.

mod app;
mod game_view;
pub mod prompt;
pub mod text;

pub use app::App;
pub use prompt::PromptLoop;
pub use text::TextRenderer;
