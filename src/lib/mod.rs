//! Shared frontend utilities for API access, configuration, errors, storage and
//! build metadata.
//!
//! ## Request flow
//!
//! Feature clients build an [`api::ApiRequest`] from path segments and hand it to
//! a [`api::Transport`]. In the browser that is `gloo-net` fetch; on the host it
//! is `reqwest`, which is what the tests drive. Responses come back as status plus
//! body text and the helpers in [`api`] decide between decoding the payload and
//! lifting the backend's `{ "error": ... }` message into [`AppError`].
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. Callers must never log passwords or
//! session tokens.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod state;
pub(crate) mod storage;
#[cfg(target_arch = "wasm32")]
pub(crate) mod telemetry;
#[cfg(test)]
pub(crate) mod testing;
pub(crate) mod theme;

pub(crate) use api::{delete, get_json, post_json, post_json_response, put_json, Transport};
pub(crate) use errors::AppError;
pub(crate) use state::StateCell;
