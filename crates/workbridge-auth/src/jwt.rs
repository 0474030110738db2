//! JWT encoding and decoding with HMAC-SHA algorithms.
//!
//! The signing secret and algorithm come from service configuration;
//! only the HMAC family (HS256/HS384/HS512) is accepted, and decoding
//! pins validation to the configured algorithm.

use crate::claims::Claims;
use crate::error::AuthError;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

/// Clock-skew tolerance for expiry validation, in seconds.
const LEEWAY_SECS: u64 = 60;

/// Parse an algorithm name from configuration.
///
/// # Errors
///
/// Returns `AuthError::InvalidAlgorithm` for anything outside the HMAC
/// family.
pub fn parse_algorithm(name: &str) -> Result<Algorithm, AuthError> {
    match name.to_uppercase().as_str() {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        _ => Err(AuthError::InvalidAlgorithm),
    }
}

/// Encode claims into a signed token string.
///
/// # Errors
///
/// Returns `AuthError::InvalidToken` if encoding fails.
pub fn encode_token(
    claims: &Claims,
    secret: &[u8],
    algorithm: Algorithm,
) -> Result<String, AuthError> {
    let key = EncodingKey::from_secret(secret);
    let header = Header::new(algorithm);

    encode(&header, claims, &key).map_err(|e| AuthError::InvalidToken(format!("Encoding failed: {e}")))
}

/// Decode and validate a token.
///
/// Validation pins the algorithm to the configured one, enforces expiry
/// with a small leeway, and requires the claims this service issues.
///
/// # Errors
///
/// - `AuthError::TokenExpired` - token is past its expiry
/// - `AuthError::InvalidSignature` - signature verification failed
/// - `AuthError::InvalidToken` - token is malformed
/// - `AuthError::InvalidAlgorithm` - token was signed with another algorithm
pub fn decode_token(token: &str, secret: &[u8], algorithm: Algorithm) -> Result<Claims, AuthError> {
    let key = DecodingKey::from_secret(secret);

    let mut validation = Validation::new(algorithm);
    validation.leeway = LEEWAY_SECS;
    validation.set_required_spec_claims(&["sub", "exp"]);

    let token_data = decode::<Claims>(token, &key, &validation).map_err(map_jwt_error)?;

    Ok(token_data.claims)
}

/// Map jsonwebtoken errors to `AuthError`.
fn map_jwt_error(err: jsonwebtoken::errors::Error) -> AuthError {
    use jsonwebtoken::errors::ErrorKind;

    match err.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        ErrorKind::InvalidAlgorithm => AuthError::InvalidAlgorithm,
        ErrorKind::InvalidToken => AuthError::InvalidToken("Malformed token".to_string()),
        ErrorKind::Base64(_) => AuthError::InvalidToken("Invalid base64 encoding".to_string()),
        ErrorKind::Json(_) => AuthError::InvalidToken("Invalid JSON in claims".to_string()),
        ErrorKind::MissingRequiredClaim(claim) => AuthError::MissingClaim(claim.to_string()),
        _ => AuthError::InvalidToken(format!("Token validation failed: {err}")),
    }
}
