//! Simple bearer token authentication middleware.
//!
//! Development: a shared password per role, role-prefixed random tokens.
//! Production: replace with JWT + OAuth2 (jsonwebtoken crate + Auth0/Ory).

use axum::extract::Request;
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{Duration, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::models::{ErrorResponse, LoginRequest, LoginResponse};
use crate::store::MarketplaceStore;
use talentlink_core::{Role, User};

/// Hard-coded token prefix for development. Production: use JWT.
const DEV_TOKEN_PREFIX: &str = "tl_";

/// Shared development password.
const DEV_PASSWORD: &str = "launch2024";

/// Validate a login request against the store and return a bearer token.
pub fn authenticate(store: &MarketplaceStore, req: &LoginRequest) -> Result<LoginResponse, String> {
    if req.password != DEV_PASSWORD {
        return Err("Invalid credentials".to_string());
    }

    let user = match req.role {
        Role::Founder => {
            let founder = store
                .founder_by_email(&req.email)
                .ok_or_else(|| "No founder account for this email".to_string())?;
            User::Founder {
                id: founder.id,
                name: founder.name,
                email: founder.email,
            }
        }
        Role::Talent => {
            let talent = store
                .talent_by_email(&req.email)
                .ok_or_else(|| "No talent account for this email".to_string())?;
            User::Talent {
                id: talent.id,
                name: talent.name,
                email: talent.email,
            }
        }
        Role::Admin => User::Admin {
            id: Uuid::new_v4(),
            name: "Admin".to_string(),
            email: req.email.clone(),
        },
    };

    Ok(LoginResponse {
        token: generate_token(user.role()),
        user,
        expires_at: Utc::now() + Duration::hours(24),
    })
}

/// Generate a random role-prefixed bearer token.
fn generate_token(role: Role) -> String {
    let mut rng = rand::thread_rng();
    let bytes: Vec<u8> = (0..32).map(|_| rng.gen()).collect();
    format!(
        "{}{}_{}",
        DEV_TOKEN_PREFIX,
        role.as_str(),
        bytes
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<String>()
    )
}

/// Axum middleware layer that checks for a valid bearer token.
/// Skips auth for the login endpoint and health checks.
pub async fn auth_middleware(req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();

    if path.ends_with("/auth/login") || path.starts_with("/health") {
        return next.run(req).await;
    }

    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    match auth_header {
        Some(value) if value.starts_with("Bearer ") => {
            let token = &value[7..];
            if token.starts_with(DEV_TOKEN_PREFIX) && token.len() > DEV_TOKEN_PREFIX.len() {
                next.run(req).await
            } else {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorResponse {
                        error: "invalid_token".to_string(),
                        message: "Invalid or expired bearer token".to_string(),
                    }),
                )
                    .into_response()
            }
        }
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                error: "missing_auth".to_string(),
                message: "Authorization header with Bearer token required".to_string(),
            }),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_known_talent() {
        let store = MarketplaceStore::new();
        store.seed_demo_data();

        let resp = authenticate(
            &store,
            &LoginRequest {
                email: "mara@example.com".to_string(),
                password: DEV_PASSWORD.to_string(),
                role: Role::Talent,
            },
        )
        .unwrap();

        assert!(resp.token.starts_with("tl_talent_"));
        assert_eq!(resp.user.role(), Role::Talent);
    }

    #[test]
    fn test_authenticate_rejects_bad_password() {
        let store = MarketplaceStore::new();
        store.seed_demo_data();

        assert!(authenticate(
            &store,
            &LoginRequest {
                email: "mara@example.com".to_string(),
                password: "wrong".to_string(),
                role: Role::Talent,
            },
        )
        .is_err());
    }

    #[test]
    fn test_authenticate_unknown_founder() {
        let store = MarketplaceStore::new();
        assert!(authenticate(
            &store,
            &LoginRequest {
                email: "nobody@example.com".to_string(),
                password: DEV_PASSWORD.to_string(),
                role: Role::Founder,
            },
        )
        .is_err());
    }
}
