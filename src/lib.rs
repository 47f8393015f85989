//! # forum-page
//!
//! WASM interactivity layer for the forum's server-rendered pages:
//! alert dismissal, post/comment voting, share-link copy, and the
//! light/dark theme toggle. Replaces the page's hand-written JS glue.
//!
//! Everything that needs a real browser (DOM, `localStorage`, clipboard,
//! HTTP) is gated behind the `browser` feature; the decision logic
//! underneath is plain Rust and runs in host tests.

pub mod alert;
pub mod app;
pub mod net;
pub mod share;
pub mod theme;
pub mod vote;
