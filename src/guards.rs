use crate::error::{AuthError, AuthResult};
use crate::extractors::AuthContext;

/// Route-level role check: the authenticated role must be a member of
/// `allowed`. Taking [`AuthContext`] makes the ordering contract explicit —
/// authorization cannot run without a prior successful authentication.
///
/// An empty allow-list declares no role restriction and always passes.
pub fn ensure_role(auth: &AuthContext, allowed: &[&str]) -> AuthResult<()> {
    if allowed.is_empty() {
        return Ok(());
    }

    if allowed.iter().any(|role| auth.claims.role == *role) {
        Ok(())
    } else {
        Err(AuthError::Forbidden {
            required: allowed.iter().map(|value| value.to_string()).collect(),
        })
    }
}
