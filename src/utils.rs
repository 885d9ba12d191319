use argon2::{
    password_hash::{
        rand_core::OsRng, Error, PasswordHasher, SaltString
    }, Argon2, PasswordHash, PasswordVerifier
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::schema::{JWTClaims, Role};

pub fn hash_password(password:&str)->Result<String, Error>{

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2.hash_password(password.as_bytes(), &salt)?.to_string();
    Ok(password_hash)
}

pub fn verify_password(password:&str, hash:&str)->Result<(), Error>{

    let argon2 = Argon2::default();
    let parsed_hash = PasswordHash::new(hash)?;
    argon2.verify_password(password.as_bytes(), &parsed_hash)?;

    Ok(())
}

/// Signs a token for `username` that is only accepted by the gate for `role`.
pub fn issue_token(role:Role, username:&str, secret:&str, ttl_secs:i64) -> Result<String, jsonwebtoken::errors::Error>{
    let now = Utc::now();
    let expires = now + Duration::seconds(ttl_secs);

    let claims = JWTClaims{
        sub: username.to_string(),
        role,
        iat: now.timestamp() as usize,
        exp: expires.timestamp() as usize,
    };

    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes()))
}

pub fn decode_token(token:&str, secret:&str) -> Result<JWTClaims, jsonwebtoken::errors::Error>{
    let decoded = decode::<JWTClaims>(token, &DecodingKey::from_secret(secret.as_bytes()), &Validation::default())?;
    Ok(decoded.claims)
}
