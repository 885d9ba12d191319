use derive_more::Display;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

pub mod course;

/// The two principal kinds. Each has its own account table and signing secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role{
    #[display("admin")]
    Admin,
    #[display("user")]
    User,
}

impl Role {
    pub fn account_table(self) -> &'static str {
        match self {
            Role::Admin => "admin_table",
            Role::User => "user_table",
        }
    }
}

#[derive(Deserialize, Serialize, Debug)]
pub struct JWTClaims{
    pub sub: String,
    pub role: Role,
    pub iat: usize,
    pub exp: usize,
}

/// Identity attached to a request once its token checks out.
#[derive(Debug, Clone, PartialEq)]
pub struct Principal{
    pub username: String,
    pub role: Role,
}

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct Credentials{
    #[serde(default, deserialize_with = "lenient")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub password: Option<String>,
}

/// Reads a field that is absent, null or of the wrong JSON type as `None`,
/// leaving the rejection to the handler's own checks.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse{
    pub message: String,
}
