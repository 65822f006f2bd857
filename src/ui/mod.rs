//! Interactive terminal front-end for the search bar.
//!
//! [`App`] owns a [`SearchBar`](crate::widget::SearchBar) wired to a
//! [`TerminalNavigator`], translates crossterm key and mouse events into
//! search bar events, and renders its view with ratatui.

mod actions;
mod app;
mod navigator;
mod render;
mod runtime;
pub mod theme;

pub use app::{App, SessionOutcome};
pub use navigator::TerminalNavigator;
pub use theme::Theme;
