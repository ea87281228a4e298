use crate::config::AppConfig;
use actix_web::cookie::{Cookie, SameSite};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,        // Subject (user ID)
    pub role: String,       // account role
    pub token_type: String, // "access" or "refresh"
    pub exp: usize,         // expiration timestamp
    pub iat: usize,         // issued-at timestamp
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

pub struct JwtUtils;

impl JwtUtils {
    fn get_secret() -> String {
        AppConfig::get().jwt.secret.clone()
    }

    pub fn generate_access_token(
        user_id: i64,
        role: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        Self::generate_token_with_expiry(
            user_id,
            role,
            "access",
            chrono::Duration::minutes(config.jwt.access_token_expiry),
        )
    }

    pub fn generate_refresh_token(
        user_id: i64,
        role: &str,
        token_expiry: Option<chrono::Duration>,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        match token_expiry {
            Some(expiry) => Self::generate_token_with_expiry(user_id, role, "refresh", expiry),
            None => Self::generate_token_with_expiry(
                user_id,
                role,
                "refresh",
                chrono::Duration::days(config.jwt.refresh_token_expiry),
            ),
        }
    }

    pub fn generate_token_with_expiry(
        user_id: i64,
        role: &str,
        token_type: &str,
        expiry_duration: chrono::Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let expiration = now + expiry_duration;

        let claims = Claims {
            sub: user_id.to_string(),
            role: role.to_string(),
            token_type: token_type.to_string(),
            exp: expiration.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let secret = Self::get_secret();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&Header::default(), &claims, &encoding_key)
    }

    pub fn generate_token_pair(
        user_id: i64,
        role: &str,
        refresh_token_expiry: Option<chrono::Duration>,
    ) -> Result<TokenPair, jsonwebtoken::errors::Error> {
        let access_token = Self::generate_access_token(user_id, role)?;
        let refresh_token = Self::generate_refresh_token(user_id, role, refresh_token_expiry)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let secret = Self::get_secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<Claims>(token, &decoding_key, &validation).map(|token_data| token_data.claims)
    }

    pub fn verify_token_type(
        token: &str,
        expected_type: &str,
    ) -> Result<Claims, jsonwebtoken::errors::Error> {
        let claims = Self::verify_token(token)?;
        if claims.token_type != expected_type {
            return Err(jsonwebtoken::errors::Error::from(
                jsonwebtoken::errors::ErrorKind::InvalidToken,
            ));
        }
        Ok(claims)
    }

    pub fn verify_access_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        Self::verify_token_type(token, "access")
    }

    pub fn verify_refresh_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        Self::verify_token_type(token, "refresh")
    }

    // Generates a fresh access token from a valid refresh token
    pub fn refresh_access_token(
        refresh_token: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Self::verify_refresh_token(refresh_token)?;
        let user_id = claims
            .sub
            .parse::<i64>()
            .map_err(|_| jsonwebtoken::errors::ErrorKind::InvalidToken)?;
        Self::generate_access_token(user_id, &claims.role)
    }

    pub fn create_refresh_token_cookie(refresh_token: &str) -> Cookie<'static> {
        let config = AppConfig::get();
        Cookie::build("refresh_token", refresh_token.to_string())
            .path("/")
            .max_age(actix_web::cookie::time::Duration::days(
                config.jwt.refresh_token_expiry,
            ))
            .same_site(SameSite::Strict)
            .http_only(true)
            .secure(config.is_production())
            .finish()
    }

    /// Expired cookie used on logout.
    pub fn create_empty_refresh_token_cookie() -> Cookie<'static> {
        let config = AppConfig::get();
        Cookie::build("refresh_token", "")
            .path("/")
            .max_age(actix_web::cookie::time::Duration::seconds(0))
            .same_site(SameSite::Strict)
            .http_only(true)
            .secure(config.is_production())
            .finish()
    }

    pub fn extract_refresh_token_from_cookie(req: &actix_web::HttpRequest) -> Option<String> {
        req.cookie("refresh_token")
            .map(|cookie| cookie.value().to_string())
    }
}
