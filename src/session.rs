//! The session gate: tells the engine whether a user is signed in.
//!
//! Authentication itself is an external concern. The engine only consumes
//! the boolean; the profile exists so display layers have a name to show.

/// The signed-in user's display profile. Opaque to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    /// The user's display name.
    pub name: String,
}

/// Whether a user is currently signed in, and who they are.
///
/// The initial ledger load is triggered when this gate reports an
/// authenticated user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<UserProfile>,
}

impl Session {
    /// A session with nobody signed in.
    pub fn signed_out() -> Self {
        Self::default()
    }

    /// A session for the user with the given display name.
    pub fn sign_in(name: &str) -> Self {
        Self {
            user: Some(UserProfile {
                name: name.to_owned(),
            }),
        }
    }

    /// Whether a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// The signed-in user's profile, if any.
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }
}
