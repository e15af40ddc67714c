// Identity context handed explicitly to whatever needs the signed-in user

use crate::display::{initials, split_name};
use eyre::{Result, eyre};
use tracing::info;

/// Signed-in user as reported by the identity provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

/// Snapshot of the provider's state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// False until the provider has finished restoring any session
    pub loaded: bool,
    pub user: Option<User>,
}

impl Session {
    pub fn signed_in(&self) -> bool {
        self.user.is_some()
    }
}

/// Outcome of checking a protected route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Provider still loading; show a spinner
    Loading,
    RedirectToLogin,
    Granted,
}

pub const LOGIN_PATH: &str = "/login";

pub fn gate(session: &Session) -> Access {
    if !session.loaded {
        Access::Loading
    } else if !session.signed_in() {
        Access::RedirectToLogin
    } else {
        Access::Granted
    }
}

/// Third-party identity provider seam
pub trait IdentityProvider {
    fn session(&self) -> Session;

    fn sign_out(&mut self) -> Result<()>;

    /// Push a new display name to the provider
    fn update_name(&mut self, full_name: &str) -> Result<()>;
}

/// Provider with a fixed user, for the CLI and tests
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    user: Option<User>,
}

impl StaticIdentity {
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn signed_out() -> Self {
        Self { user: None }
    }
}

impl IdentityProvider for StaticIdentity {
    fn session(&self) -> Session {
        Session {
            loaded: true,
            user: self.user.clone(),
        }
    }

    fn sign_out(&mut self) -> Result<()> {
        if let Some(user) = self.user.take() {
            info!(user = %user.id, "Signed out");
        }
        Ok(())
    }

    fn update_name(&mut self, full_name: &str) -> Result<()> {
        let user = self.user.as_mut().ok_or_else(|| eyre!("No signed-in user to update"))?;
        let (first, last) = split_name(full_name);
        user.display_name = match (first, last) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            (Some(first), None) => Some(first),
            _ => None,
        };
        Ok(())
    }
}

/// Profile fields shown in the dashboard header and settings form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub full_name: String,
    pub email: String,
    pub initials: String,
}

/// Partial profile edit; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub email: Option<String>,
}

impl Profile {
    pub fn new(full_name: &str, email: &str) -> Self {
        Self {
            full_name: full_name.to_string(),
            email: email.to_string(),
            initials: initials(full_name),
        }
    }

    /// Build from the session user, if any
    pub fn from_session(session: &Session) -> Option<Self> {
        let user = session.user.as_ref()?;
        Some(Self::new(
            user.display_name.as_deref().unwrap_or_default(),
            user.email.as_deref().unwrap_or_default(),
        ))
    }

    /// Apply an edit, recomputing initials when the name changes
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.full_name {
            self.initials = initials(&name);
            self.full_name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
    }
}
