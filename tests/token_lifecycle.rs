//! Ciclo de vida de la credencial, sin base de datos: emisión,
//! verificación, rechazo de firmas ajenas y recuperación de la expiración
//! para la revocación en logout.

use axum::http::{HeaderMap, HeaderValue};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use uuid::Uuid;

use keyturn_backend::middleware::auth::bearer_token;
use keyturn_backend::models::user::{User, UserRole};
use keyturn_backend::services::jwt_service::{JwtClaims, JwtService};

fn sample_user(role: UserRole) -> User {
    User {
        id: Uuid::new_v4(),
        name: "Sample".to_string(),
        email: "sample@keyturn.test".to_string(),
        password_hash: "irrelevant".to_string(),
        role,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[test]
fn issued_token_authenticates_with_same_service() {
    let jwt = JwtService::new("integration-secret", 7).unwrap();
    let user = sample_user(UserRole::Admin);

    let token = jwt.issue(&user).unwrap();
    let claims = jwt.authenticate(&token).unwrap();

    assert_eq!(claims.sub, user.id);
    assert_eq!(claims.role, "admin");
    assert_eq!(UserRole::from_str(&claims.role), Some(UserRole::Admin));
}

#[test]
fn foreign_signature_is_rejected() {
    let jwt = JwtService::new("integration-secret", 7).unwrap();
    let foreign = JwtService::new("someone-else", 7).unwrap();

    let token = foreign.issue(&sample_user(UserRole::Agent)).unwrap();
    assert!(jwt.authenticate(&token).is_err());
}

#[test]
fn expired_token_still_yields_its_own_expiry_for_revocation() {
    let jwt = JwtService::new("integration-secret", 7).unwrap();
    let now = Utc::now();
    let exp = (now - Duration::hours(2)).timestamp();

    let claims = JwtClaims {
        sub: Uuid::new_v4(),
        email: "expired@keyturn.test".to_string(),
        role: "agent".to_string(),
        iat: (now - Duration::days(8)).timestamp(),
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"integration-secret"),
    )
    .unwrap();

    // Ya no sirve para autenticar
    assert!(jwt.authenticate(&token).is_err());

    // Pero el logout acota la fila de revocación con su expiración real
    assert_eq!(jwt.expires_at_or_default(&token).timestamp(), exp);
}

#[test]
fn undecodable_token_gets_default_lifetime_bound() {
    let jwt = JwtService::new("integration-secret", 3).unwrap();
    let before = Utc::now();

    let expires = jwt.expires_at_or_default("definitely.not.a-jwt");

    assert!(expires > before + Duration::days(2));
    assert!(expires <= Utc::now() + Duration::days(4));
}

#[test]
fn bearer_header_parsing() {
    let mut headers = HeaderMap::new();
    headers.insert("Authorization", HeaderValue::from_static("Bearer tok123"));
    assert_eq!(bearer_token(&headers), Some("tok123"));

    let mut headers = HeaderMap::new();
    headers.insert("Authorization", HeaderValue::from_static("tok123"));
    assert_eq!(bearer_token(&headers), None);
}
