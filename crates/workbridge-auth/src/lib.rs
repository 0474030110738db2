//! workbridge authentication primitives.
//!
//! Bearer token encoding/validation (HMAC-signed JWTs) and Argon2id
//! password hashing. The HTTP-facing auth surface lives in
//! `workbridge-api-auth`; this crate is framework-free.

pub mod claims;
pub mod error;
pub mod jwt;
pub mod password;

pub use claims::Claims;
pub use error::AuthError;
pub use jwt::{decode_token, encode_token, parse_algorithm};
pub use password::PasswordHasher;
