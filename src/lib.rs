pub mod claims;
pub mod config;
pub mod error;
pub mod extractors;
pub mod guards;
pub mod roles;
pub mod tokens;
pub mod verifier;

pub use claims::Claims;
pub use config::{load_jwt_config, JwtConfig};
pub use error::{AuthError, AuthResult};
pub use extractors::AuthContext;
pub use guards::ensure_role;
pub use roles::{ALL_ROLES, ROLE_ADMIN, ROLE_PLAYER, ROLE_RECRUITER};
pub use tokens::{IssuedToken, TokenSigner, TokenSubject};
pub use verifier::JwtVerifier;
