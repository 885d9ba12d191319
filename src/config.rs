use crate::{errors::AppError, schema::Role};

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";
const DEFAULT_DATABASE_URL: &str = "sqlite://courser.db?mode=rwc";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_TOKEN_TTL_SECS: i64 = 60 * 60;

/// Settings read once at startup and shared through `GlobalState`.
#[derive(Debug, Clone)]
pub struct Config{
    pub bind_address: String,
    pub database_url: String,
    pub max_connections: u32,
    pub admin_jwt_secret: String,
    pub user_jwt_secret: String,
    pub token_ttl_secs: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let admin_jwt_secret = required(&lookup, "ADMIN_JWT_PASSWORD")?;
        let user_jwt_secret = required(&lookup, "USER_JWT_PASSWORD")?;

        // both roles signing with one key would let a token cross over
        if admin_jwt_secret == user_jwt_secret {
            return Err(AppError::InvalidEnv("USER_JWT_PASSWORD"));
        }

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(val) => val.parse::<u32>().ok().filter(|n| *n > 0)
                .ok_or(AppError::InvalidEnv("DATABASE_MAX_CONNECTIONS"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let token_ttl_secs = match lookup("TOKEN_TTL_SECS") {
            Some(val) => val.parse::<i64>().ok().filter(|n| *n > 0)
                .ok_or(AppError::InvalidEnv("TOKEN_TTL_SECS"))?,
            None => DEFAULT_TOKEN_TTL_SECS,
        };

        Ok(Config{
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            max_connections,
            admin_jwt_secret,
            user_jwt_secret,
            token_ttl_secs,
        })
    }

    pub fn jwt_secret(&self, role: Role) -> &str {
        match role {
            Role::Admin => &self.admin_jwt_secret,
            Role::User => &self.user_jwt_secret,
        }
    }
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, AppError>
where
    F: Fn(&'static str) -> Option<String>,
{
    lookup(key)
        .filter(|val| !val.trim().is_empty())
        .ok_or(AppError::MissingEnv(key))
}

#[cfg(test)]
mod tests{
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> = pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_secrets_are_set(){
        let config = Config::from_lookup(lookup_from(&[
            ("ADMIN_JWT_PASSWORD", "admin-secret"),
            ("USER_JWT_PASSWORD", "user-secret"),
        ])).unwrap();

        assert_eq!(config.bind_address, "127.0.0.1:3000");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.token_ttl_secs, 3600);
        assert_eq!(config.jwt_secret(Role::Admin), "admin-secret");
        assert_eq!(config.jwt_secret(Role::User), "user-secret");
    }

    #[test]
    fn missing_secret_is_reported(){
        let err = Config::from_lookup(lookup_from(&[("ADMIN_JWT_PASSWORD", "admin-secret")])).unwrap_err();
        assert!(matches!(err, AppError::MissingEnv("USER_JWT_PASSWORD")));
    }

    #[test]
    fn shared_secret_is_rejected(){
        let err = Config::from_lookup(lookup_from(&[
            ("ADMIN_JWT_PASSWORD", "same"),
            ("USER_JWT_PASSWORD", "same"),
        ])).unwrap_err();
        assert!(matches!(err, AppError::InvalidEnv("USER_JWT_PASSWORD")));
    }

    #[test]
    fn bad_numbers_are_rejected(){
        let err = Config::from_lookup(lookup_from(&[
            ("ADMIN_JWT_PASSWORD", "a"),
            ("USER_JWT_PASSWORD", "b"),
            ("TOKEN_TTL_SECS", "soon"),
        ])).unwrap_err();
        assert!(matches!(err, AppError::InvalidEnv("TOKEN_TTL_SECS")));
    }
}
