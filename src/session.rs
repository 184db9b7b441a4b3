use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;
use uuid::Uuid;

use crate::store::ClinicStore;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Receptionist,
    Doctor,
    Pharmacist,
    Admin,
}

impl Role {
    fn display_name(self) -> &'static str {
        match self {
            Self::Receptionist => "Front Desk",
            Self::Doctor => "Duty Doctor",
            Self::Pharmacist => "Dispensary",
            Self::Admin => "Administrator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Receptionist => "receptionist",
            Self::Doctor => "doctor",
            Self::Pharmacist => "pharmacist",
            Self::Admin => "admin",
        };
        f.write_str(label)
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
}

impl ClinicStore {
    /// Sign in under a role. Role selection is a trusted toggle: no
    /// credential is checked, the caller simply picks which desk it is.
    pub fn login(&mut self, role: Role) -> &User {
        info!("Signed in as {}", role);
        self.current_user.insert(User {
            id: Uuid::new_v4(),
            name: role.display_name().to_string(),
            role,
        })
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.take() {
            info!("Signed out {}", user.role);
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_replaces_previous_session() {
        let mut store = ClinicStore::new();
        assert!(store.current_user().is_none());

        store.login(Role::Receptionist);
        let user = store.current_user().expect("logged in");
        assert_eq!(user.role, Role::Receptionist);

        store.login(Role::Doctor);
        let user = store.current_user().expect("still logged in");
        assert_eq!(user.role, Role::Doctor);

        store.logout();
        assert!(store.current_user().is_none());
    }
}
