//! Hooks tying core state to browser events.

pub mod reducers;
pub mod scroll;
pub mod token;
pub mod viewport;

pub use reducers::{FormState, Pager, ScrollEvent, ScrollState, Sidebar, Wizard};
pub use scroll::use_scroll_tracker;
pub use token::use_token_gate;
pub use viewport::use_viewport_page_size;
