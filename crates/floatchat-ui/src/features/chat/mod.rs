//! Chat feature slice.
//!
//! # Design
//! - The transcript and draft live in `core::chat::ChatSession`, owned by the page.
//! - `/chat/:session` selects a history entry; unknown slugs select nothing.

mod history;
mod view;

pub(crate) use view::ChatPage;
