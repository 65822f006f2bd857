//! The search bar: an input, a results panel, and the state machine tying
//! them to the index loader and the navigator.
//!
//! [`SearchBar`] is event driven. Front-ends feed it input, focus, key and
//! pointer events, call [`SearchBar::pump_index_updates`] once per frame, and
//! render whatever [`SearchBar::view`] returns.

mod state;
mod view;

pub use state::{FocusPolicy, Key, PanelState, PointerTarget, SearchBar, SearchBarOptions};
pub use view::{
	EXTERNAL_GLYPH, INPUT_LABEL, InputView, PLACEHOLDER, PanelView, ResultRow, SearchBarView,
	no_results_message,
};
