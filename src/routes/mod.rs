//! Top-level views. There is no URL routing: the session decides which one is
//! shown.

mod login;
mod users;

pub(crate) use login::LoginPage;
pub(crate) use users::UserManagementPage;
