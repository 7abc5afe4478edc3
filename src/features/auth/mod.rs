//! Auth feature module covering the credential gate, session persistence and
//! the reactive session context. It keeps authentication logic out of the UI.
//! This module touches security boundaries and must avoid logging passwords or
//! token material.
//!
//! Flow Overview: on startup the persisted `token`/`usuario` pair is restored
//! without contacting the server; corrupted data is wiped silently. Login posts
//! the credentials once, persists the returned pair and flips the view. Logout
//! wipes both slots.

pub(crate) mod client;
pub(crate) mod gate;
pub(crate) mod session;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub(crate) mod types;
