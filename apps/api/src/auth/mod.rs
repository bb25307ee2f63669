//! Identity — pluggable login backend plus the session endpoints.
//!
//! Only the mocked demo provider exists; `AppState` holds an
//! `Arc<dyn IdentityProvider>` so a real one can replace it at startup.

use crate::models::{Role, User};

pub mod handlers;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Resolves a login request to the identity that becomes the live session.
pub trait IdentityProvider: Send + Sync {
    fn login(&self, role: Role) -> User;
}

// ────────────────────────────────────────────────────────────────────────────
// DemoIdentityProvider
// ────────────────────────────────────────────────────────────────────────────

const DEMO_EMAIL: &str = "demo@chatpye.com";

const RECRUITER_AVATAR: &str =
    "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=100&h=100&fit=crop";
const CANDIDATE_AVATAR: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop";

/// Fixed demo identities, one per role. No credentials are checked.
pub struct DemoIdentityProvider;

impl IdentityProvider for DemoIdentityProvider {
    fn login(&self, role: Role) -> User {
        let (id, name, avatar) = match role {
            Role::Recruiter => ("rec-1", "Sarah Recruiter", RECRUITER_AVATAR),
            Role::Candidate => ("cand-1", "Alex Talent", CANDIDATE_AVATAR),
        };
        User {
            id: id.to_string(),
            name: name.to_string(),
            email: DEMO_EMAIL.to_string(),
            avatar_url: avatar.to_string(),
            role,
        }
    }
}
