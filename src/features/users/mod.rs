//! User records: wire types, API client and the record manager that drives the
//! list/create/update/delete screen.

pub(crate) mod client;
pub(crate) mod confirm;
pub(crate) mod manager;
pub(crate) mod types;
