//! Servicio JWT (emisión y verificación de credenciales bearer)
//!
//! El secreto de firma se inyecta en la construcción, nunca se lee del
//! entorno en el momento de la llamada. La revocación vive en
//! `TokenBlacklistRepository`; aquí solo se emite, se verifica y se decodifica.

use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::User;
use crate::utils::errors::AppError;

/// Claims embebidos en cada credencial
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: Uuid,
    pub email: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// Configuración JWT
pub struct JwtConfig {
    pub secret: String,
    pub algorithm: Algorithm,
    pub token_lifetime: Duration,
}

/// Servicio JWT
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(secret: &str, lifetime_days: i64) -> Result<Self, AppError> {
        if secret.trim().is_empty() {
            return Err(AppError::Configuration(
                "JWT signing secret is not configured".to_string(),
            ));
        }

        let config = JwtConfig {
            secret: secret.to_string(),
            algorithm: Algorithm::HS256,
            token_lifetime: Duration::days(lifetime_days),
        };
        let encoding_key = EncodingKey::from_secret(config.secret.as_ref());
        let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
        })
    }

    /// Emite una credencial firmada para un usuario
    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: user.id,
            email: user.email.clone(),
            role: user.role.as_str().to_string(),
            iat: now.timestamp(),
            exp: (now + self.config.token_lifetime).timestamp(),
        };

        self.encode_claims(&claims)
    }

    fn encode_claims(&self, claims: &JwtClaims) -> Result<String, AppError> {
        encode(
            &Header::new(self.config.algorithm),
            claims,
            &self.encoding_key,
        )
        .map_err(|e| AppError::Internal(format!("Error generating token: {}", e)))
    }

    /// Valida firma y expiración; devuelve los claims del principal
    pub fn authenticate(&self, token: &str) -> Result<JwtClaims, AppError> {
        let validation = Validation::new(self.config.algorithm);

        decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::Unauthorized("Invalid token".to_string()))
    }

    /// Decodifica SIN verificar firma ni expiración.
    ///
    /// Solo para logout: un token recién expirado (o manipulado) también debe
    /// poder cerrar sesión limpiamente, y lo único que necesitamos de él es
    /// su propia expiración para acotar la fila de revocación.
    pub fn decode_unverified(&self, token: &str) -> Option<JwtClaims> {
        let mut validation = Validation::new(self.config.algorithm);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;

        decode::<JwtClaims>(token, &DecodingKey::from_secret(&[]), &validation)
            .map(|data| data.claims)
            .ok()
    }

    /// Expiración declarada por el propio token, con fallback a la vida
    /// útil estándar cuando el token no se puede decodificar
    pub fn expires_at_or_default(&self, token: &str) -> DateTime<Utc> {
        self.decode_unverified(token)
            .and_then(|claims| Utc.timestamp_opt(claims.exp, 0).single())
            .unwrap_or_else(|| Utc::now() + self.config.token_lifetime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::UserRole;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Test Agent".to_string(),
            email: "agent@keyturn.test".to_string(),
            password_hash: "x".to_string(),
            role: UserRole::Agent,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn service() -> JwtService {
        JwtService::new("test-secret", 7).unwrap()
    }

    #[test]
    fn test_empty_secret_is_configuration_error() {
        assert!(matches!(
            JwtService::new("   ", 7),
            Err(AppError::Configuration(_))
        ));
    }

    #[test]
    fn test_issue_and_authenticate() {
        let jwt = service();
        let user = sample_user();

        let token = jwt.issue(&user).unwrap();
        let claims = jwt.authenticate(&token).unwrap();

        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.role, "agent");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let jwt = service();
        let other = JwtService::new("another-secret", 7).unwrap();
        let token = other.issue(&sample_user()).unwrap();

        assert!(matches!(
            jwt.authenticate(&token),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_expired_token_rejected_but_still_decodable() {
        let jwt = service();
        let user = sample_user();
        let now = Utc::now();

        let claims = JwtClaims {
            sub: user.id,
            email: user.email.clone(),
            role: "agent".to_string(),
            iat: (now - Duration::days(8)).timestamp(),
            exp: (now - Duration::days(1)).timestamp(),
        };
        let token = jwt.encode_claims(&claims).unwrap();

        // authenticate la rechaza por expirada
        assert!(jwt.authenticate(&token).is_err());

        // pero logout todavía puede recuperar su expiración real
        let decoded = jwt.decode_unverified(&token).unwrap();
        assert_eq!(decoded.exp, claims.exp);
        assert_eq!(jwt.expires_at_or_default(&token).timestamp(), claims.exp);
    }

    #[test]
    fn test_garbage_token_falls_back_to_default_lifetime() {
        let jwt = service();
        let before = Utc::now();
        let expires = jwt.expires_at_or_default("not-a-jwt");
        assert!(expires >= before + Duration::days(6));
        assert!(expires <= Utc::now() + Duration::days(8));
    }
}
