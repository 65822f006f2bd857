//! Documentation site search: index loading with a built-in fallback,
//! case-insensitive substring matching with highlighted snippets, and a
//! search bar state machine with a terminal front-end.
//!
//! The [`widget::SearchBar`] is the core: it is driven by events, loads its
//! index through an [`index::IndexProvider`] and acts on selections through a
//! [`navigation::Navigator`].

pub mod app_dirs;
pub mod index;
pub mod logging;
pub mod navigation;
pub mod search;
pub mod ui;
pub mod widget;

pub use index::{LoadedIndex, SearchEntry};
pub use navigation::{Navigation, Navigator};
pub use search::{SearchResult, Snippet, search};
pub use ui::{App, SessionOutcome, TerminalNavigator, Theme};
pub use widget::{SearchBar, SearchBarOptions};
