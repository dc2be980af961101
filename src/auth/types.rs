use serde::{Deserialize, Serialize};

use crate::models::Role;

/// Email/password pair posted to `/auth/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Country as nested in the login and verify payloads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRef {
    pub id: String,
    pub country_name: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// User payload returned by login and verify
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    pub country: CountryRef,
}

/// The logged-in user as the rest of the app sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    pub country_id: String,
    pub country_name: String,
    pub code: String,
}

impl From<AuthUser> for Identity {
    fn from(user: AuthUser) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            role: user.role,
            country_id: user.country.id,
            country_name: user.country.country_name,
            code: user.country.code.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn identity_flattens_nested_country() {
        let user: AuthUser = serde_json::from_value(json!({
            "id": "u-7",
            "fullName": "Sita Shrestha",
            "email": "sita@whv.org",
            "role": "country_manager",
            "country": { "id": "np", "countryName": "Nepal", "code": "NP" }
        }))
        .unwrap();

        let identity = Identity::from(user);
        assert_eq!(identity.country_id, "np");
        assert_eq!(identity.country_name, "Nepal");
        assert_eq!(identity.code, "NP");
        assert_eq!(identity.role, Role::CountryManager);
    }
}
