use anyhow::{anyhow, Result};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;
use uuid::Uuid;

use crate::config::JwtConfig;

/// Signs access tokens over the shared secret; the issuing counterpart of
/// [`crate::verifier::JwtVerifier`].
pub struct TokenSigner {
    config: JwtConfig,
    encoding_key: EncodingKey,
}

pub struct TokenSubject {
    pub user_id: Uuid,
    pub role: String,
}

pub struct IssuedToken {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
    pub token_type: &'static str,
}

impl TokenSigner {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        Self {
            config,
            encoding_key,
        }
    }

    pub fn config(&self) -> &JwtConfig {
        &self.config
    }

    pub fn issue(&self, subject: TokenSubject) -> Result<IssuedToken> {
        let now = Utc::now();
        let expires_at = now + Duration::seconds(self.config.access_ttl_seconds);

        let claims = AccessClaims {
            sub: subject.user_id.to_string(),
            role: &subject.role,
            iss: self.config.issuer.as_deref(),
            aud: self.config.audience.as_deref(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let access_token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|err| anyhow!("Failed to sign access token: {err}"))?;

        Ok(IssuedToken {
            access_token,
            expires_at,
            expires_in: self.config.access_ttl_seconds,
            token_type: "Bearer",
        })
    }
}

#[derive(Serialize)]
struct AccessClaims<'a> {
    sub: String,
    role: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    iss: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    aud: Option<&'a str>,
    exp: i64,
    iat: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::ROLE_RECRUITER;
    use crate::verifier::JwtVerifier;

    fn config() -> JwtConfig {
        JwtConfig::new("signer-secret").with_leeway(0).with_access_ttl(3600)
    }

    #[test]
    fn issued_token_verifies_and_round_trips_claims() {
        let signer = TokenSigner::new(config());
        let verifier = JwtVerifier::new(config());
        let user_id = Uuid::new_v4();

        let issued = signer
            .issue(TokenSubject {
                user_id,
                role: ROLE_RECRUITER.to_string(),
            })
            .expect("issue");
        assert_eq!(issued.token_type, "Bearer");
        assert_eq!(issued.expires_in, 3600);

        let claims = verifier.verify(&issued.access_token).expect("verify");
        assert_eq!(claims.subject, user_id);
        assert_eq!(claims.role, ROLE_RECRUITER);
        assert_eq!(claims.expires_at.timestamp(), issued.expires_at.timestamp());
    }

    #[test]
    fn expiry_tracks_configured_ttl() {
        let signer = TokenSigner::new(config().with_access_ttl(900));
        let issued = signer
            .issue(TokenSubject {
                user_id: Uuid::new_v4(),
                role: ROLE_RECRUITER.to_string(),
            })
            .expect("issue");

        let lifetime = (issued.expires_at - Utc::now()).num_seconds();
        assert!((895..=900).contains(&lifetime), "unexpected lifetime {lifetime}");
    }

    #[test]
    fn issued_token_fails_against_other_secret() {
        let signer = TokenSigner::new(config());
        let verifier = JwtVerifier::new(JwtConfig::new("other-secret").with_leeway(0));

        let issued = signer
            .issue(TokenSubject {
                user_id: Uuid::new_v4(),
                role: ROLE_RECRUITER.to_string(),
            })
            .expect("issue");
        assert!(verifier.verify(&issued.access_token).is_err());
    }

    #[test]
    fn issuer_and_audience_are_stamped_when_configured() {
        let config = config().with_issuer("futbolink").with_audience("futbolink-api");
        let signer = TokenSigner::new(config.clone());
        let verifier = JwtVerifier::new(config);

        let issued = signer
            .issue(TokenSubject {
                user_id: Uuid::new_v4(),
                role: ROLE_RECRUITER.to_string(),
            })
            .expect("issue");

        let claims = verifier.verify(&issued.access_token).expect("verify");
        assert_eq!(claims.raw["iss"], serde_json::json!("futbolink"));
        assert_eq!(claims.raw["aud"], serde_json::json!("futbolink-api"));
    }
}
