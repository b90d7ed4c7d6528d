use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// User entity - matches SQL schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Identifier assigned by the record store at creation, immutable
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Unique, syntactically valid email
    pub email: String,
    /// Calendar birth date, never in the future
    pub birth_date: NaiveDate,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

/// Field set persisted at creation; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub birth_date: NaiveDate,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

/// Incoming representation for create, full update, and partial update.
///
/// Every field is optional: a field missing from the JSON body deserializes
/// to `None`. Create and full update require email and birth date and fail
/// in the service when they are absent; partial update treats `None` as
/// "leave unchanged". A present-but-empty string counts as supplied.
///
/// The derive-level checks are transport sanity caps only; the registry's
/// rules (email syntax and uniqueness, date validity, minimum age) run in
/// the service so that violations surface as conflicts.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UserInput {
    #[validate(length(max = 255))]
    #[serde(default)]
    pub first_name: Option<String>,
    #[validate(length(max = 255))]
    #[serde(default)]
    pub last_name: Option<String>,
    #[validate(length(max = 255))]
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[validate(length(max = 255))]
    #[serde(default)]
    pub address: Option<String>,
    #[validate(length(max = 255))]
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// Query parameters for the birth-date range search. Both bounds are
/// required; the range is inclusive.
#[derive(Debug, Clone, Copy, Deserialize, ToSchema, IntoParams)]
pub struct DateRangeQuery {
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 1,
            first_name: Some("Bob".to_string()),
            last_name: Some("Smith".to_string()),
            email: "bobsmith@example.com".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            address: Some("123 Main St, City".to_string()),
            phone_number: Some("123-456-7890".to_string()),
        }
    }

    #[test]
    fn test_user_json_round_trip_preserves_all_fields() {
        let user = sample_user();

        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();

        assert_eq!(back, user);
    }

    #[test]
    fn test_user_round_trip_with_absent_optionals() {
        let user = User {
            first_name: None,
            last_name: None,
            address: None,
            phone_number: None,
            ..sample_user()
        };

        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();

        assert_eq!(back, user);
    }

    #[test]
    fn test_user_input_missing_fields_deserialize_to_none() {
        let input: UserInput = serde_json::from_str(r#"{"email": "bob@example.com"}"#).unwrap();

        assert_eq!(input.email.as_deref(), Some("bob@example.com"));
        assert!(input.first_name.is_none());
        assert!(input.last_name.is_none());
        assert!(input.birth_date.is_none());
        assert!(input.address.is_none());
        assert!(input.phone_number.is_none());
    }

    #[test]
    fn test_user_input_empty_string_is_supplied() {
        let input: UserInput = serde_json::from_str(r#"{"first_name": ""}"#).unwrap();

        assert_eq!(input.first_name.as_deref(), Some(""));
    }

    #[test]
    fn test_user_input_length_cap() {
        let input = UserInput {
            first_name: Some("a".repeat(256)),
            ..UserInput::default()
        };

        assert!(input.validate().is_err());
    }
}
