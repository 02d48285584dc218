use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// Display fields returned by an identity provider. The session store
/// assigns the record id itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}

/// Source of the identity attached to a new session.
///
/// A failing provider leaves the session store untouched: sign-in either
/// fully succeeds with one persisted record or fails with the prior state.
pub trait IdentityProvider: Send + Sync {
    fn name(&self) -> &str;

    fn authenticate(&self) -> Result<Identity, SessionError>;
}

/// Always succeeds with a fixed placeholder identity. No credentials are
/// exchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct DemoIdentityProvider;

pub const DEMO_DISPLAY_NAME: &str = "Demo User";
pub const DEMO_EMAIL: &str = "user@example.com";
pub const DEMO_AVATAR_URL: &str =
    "https://ui-avatars.com/api/?name=Demo+User&background=2970ff&color=fff";

impl IdentityProvider for DemoIdentityProvider {
    fn name(&self) -> &str {
        "demo"
    }

    fn authenticate(&self) -> Result<Identity, SessionError> {
        Ok(Identity {
            display_name: Some(DEMO_DISPLAY_NAME.to_string()),
            email: Some(DEMO_EMAIL.to_string()),
            avatar_url: Some(DEMO_AVATAR_URL.to_string()),
        })
    }
}
