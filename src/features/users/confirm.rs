//! Delete confirmation as an injected capability. Whether the user is asked
//! first is a configuration choice (`confirm_delete`), not a hard-coded constant.

use crate::{app_lib::config::AppConfig, features::users::types::UserRecord};

pub(crate) trait ConfirmDelete {
    fn confirm(&self, user: &UserRecord) -> bool;
}

impl<F: Fn(&UserRecord) -> bool> ConfirmDelete for F {
    fn confirm(&self, user: &UserRecord) -> bool {
        self(user)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeletePolicy {
    /// Delete proceeds as soon as it is invoked.
    Unconditional,
    /// Ask through the browser's `confirm()` dialog.
    Prompt,
}

impl DeletePolicy {
    pub fn from_config(config: &AppConfig) -> Self {
        if config.confirm_delete {
            Self::Prompt
        } else {
            Self::Unconditional
        }
    }
}

impl ConfirmDelete for DeletePolicy {
    fn confirm(&self, user: &UserRecord) -> bool {
        match self {
            Self::Unconditional => true,
            Self::Prompt => prompt(user),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn prompt(user: &UserRecord) -> bool {
    let message = format!("¿Está seguro de eliminar a {}?", user.name);
    web_sys::window()
        .and_then(|window| window.confirm_with_message(&message).ok())
        .unwrap_or(false)
}

// No dialog outside the browser; a prompt that cannot be shown is a refusal.
#[cfg(not(target_arch = "wasm32"))]
fn prompt(_user: &UserRecord) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::{ConfirmDelete, DeletePolicy};
    use crate::{app_lib::config::AppConfig, features::users::types::UserRecord};

    #[test]
    fn policy_follows_config_flag() {
        let mut config = AppConfig::default();
        assert_eq!(DeletePolicy::from_config(&config), DeletePolicy::Unconditional);

        config.confirm_delete = true;
        assert_eq!(DeletePolicy::from_config(&config), DeletePolicy::Prompt);
    }

    #[test]
    fn unconditional_policy_always_confirms() {
        assert!(DeletePolicy::Unconditional.confirm(&UserRecord::default()));
    }

    #[test]
    fn closures_act_as_confirmation() {
        let only_ana = |user: &UserRecord| user.name == "Ana";
        let ana = UserRecord {
            name: "Ana".to_string(),
            ..UserRecord::default()
        };
        assert!(only_ana.confirm(&ana));
        assert!(!only_ana.confirm(&UserRecord::default()));
    }
}
