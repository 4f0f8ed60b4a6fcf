//! # Profile — `api.tweet.profile` v1
//!
//! User profile payload.
//!
//! | field         | kind        | required |
//! |---------------|-------------|----------|
//! | `id`          | UUID        | yes |
//! | `username`    | String      | yes |
//! | `firstName`   | String      | no  |
//! | `lastName`    | String      | no  |
//! | `bio`         | String      | no  |
//! | `birthdate`   | Date        | no  |
//! | `email`       | Email       | yes |
//! | `accountType` | AccountType | no  |
//! | `verified`    | Boolean     | no  |

use nsa_core::{
    AccountType, Codec, Date, Email, FieldKind, FieldPath, FieldSpec, ObjectReader, ObjectWriter,
    Record, RecordDescriptor, Uuid, ValidationError,
};
use serde_json::Value;

static FIELDS: [FieldSpec; 9] = [
    FieldSpec::required("id", FieldKind::Uuid),
    FieldSpec::required("username", FieldKind::String),
    FieldSpec::optional("firstName", FieldKind::String),
    FieldSpec::optional("lastName", FieldKind::String),
    FieldSpec::optional("bio", FieldKind::String),
    FieldSpec::optional("birthdate", FieldKind::Date),
    FieldSpec::required("email", FieldKind::Email),
    FieldSpec::optional(
        "accountType",
        FieldKind::Enum {
            name: "AccountType",
            values: AccountType::VALUES,
        },
    ),
    FieldSpec::optional("verified", FieldKind::Boolean),
];

/// Descriptor for [`Profile`].
pub static PROFILE: RecordDescriptor = RecordDescriptor {
    name: "Profile",
    namespace: "api.tweet.profile",
    description: "User profile payload",
    version: 1,
    fields: &FIELDS,
};

/// A user profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    id: Uuid,
    username: String,
    first_name: Option<String>,
    last_name: Option<String>,
    bio: Option<String>,
    birthdate: Option<Date>,
    email: Email,
    account_type: Option<AccountType>,
    verified: Option<bool>,
}

/// Field values for [`Profile::new`].
///
/// `id` and `email` are given as raw strings and validated by the
/// constructor; everything else is already typed.
#[derive(Debug, Clone, Default)]
pub struct ProfileFields {
    /// Canonical UUID string.
    pub id: String,
    /// Username.
    pub username: String,
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Free-form biography.
    pub bio: Option<String>,
    /// Date of birth.
    pub birthdate: Option<Date>,
    /// Email address.
    pub email: String,
    /// Account type.
    pub account_type: Option<AccountType>,
    /// Verification flag.
    pub verified: Option<bool>,
}

impl Profile {
    /// Build a profile from field values.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] at `Profile.id` if the id is not a
    /// canonical UUID.
    pub fn new(fields: ProfileFields) -> Result<Self, ValidationError> {
        let path = FieldPath::record(PROFILE.name);
        let id = Uuid::new(fields.id).map_err(|e| e.at(path.field("id")))?;
        let email = Email::new(fields.email).map_err(|e| e.at(path.field("email")))?;
        Ok(Self {
            id,
            username: fields.username,
            first_name: fields.first_name,
            last_name: fields.last_name,
            bio: fields.bio,
            birthdate: fields.birthdate,
            email,
            account_type: fields.account_type,
            verified: fields.verified,
        })
    }

    /// Profile identifier.
    pub fn id(&self) -> &Uuid {
        &self.id
    }

    /// Username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Given name, if set.
    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    /// Family name, if set.
    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    /// Biography, if set.
    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }

    /// Date of birth, if set.
    pub fn birthdate(&self) -> Option<Date> {
        self.birthdate
    }

    /// Email address.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Account type, if set.
    pub fn account_type(&self) -> Option<AccountType> {
        self.account_type
    }

    /// Verification flag, if set.
    pub fn verified(&self) -> Option<bool> {
        self.verified
    }
}

impl Codec for Profile {
    const KIND: &'static str = "Profile";

    fn decode(value: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        let obj = ObjectReader::new(value, path, &PROFILE)?;
        Ok(Self {
            id: obj.required("id")?,
            username: obj.required("username")?,
            first_name: obj.optional("firstName")?,
            last_name: obj.optional("lastName")?,
            bio: obj.optional("bio")?,
            birthdate: obj.optional("birthdate")?,
            email: obj.required("email")?,
            account_type: obj.optional("accountType")?,
            verified: obj.optional("verified")?,
        })
    }

    fn encode(&self, path: &FieldPath) -> Result<Value, ValidationError> {
        Ok(ObjectWriter::new(path)
            .required("id", &self.id)?
            .required("username", &self.username)?
            .optional("firstName", self.first_name.as_ref())?
            .optional("lastName", self.last_name.as_ref())?
            .optional("bio", self.bio.as_ref())?
            .optional("birthdate", self.birthdate.as_ref())?
            .required("email", &self.email)?
            .optional("accountType", self.account_type.as_ref())?
            .optional("verified", self.verified.as_ref())?
            .finish())
    }
}

impl Record for Profile {
    fn descriptor() -> &'static RecordDescriptor {
        &PROFILE
    }

    fn validate_at(&self, path: &FieldPath) -> Result<(), ValidationError> {
        self.id.encode(&path.field("id"))?;
        self.email.encode(&path.field("email"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ID: &str = "0f8fad5b-d9cb-469f-a165-70867728950e";

    fn full_payload() -> Value {
        json!({
            "id": ID,
            "username": "ada",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "bio": "Analyst",
            "birthdate": "1815-12-10",
            "email": "ada@example.com",
            "accountType": "CREATOR",
            "verified": true
        })
    }

    #[test]
    fn test_new_minimal() {
        let profile = Profile::new(ProfileFields {
            id: ID.to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(profile.id().as_str(), ID);
        assert_eq!(profile.username(), "ada");
        assert_eq!(profile.first_name(), None);
        assert_eq!(profile.account_type(), None);
    }

    #[test]
    fn test_new_rejects_bad_id() {
        let err = Profile::new(ProfileFields {
            id: "not-a-uuid".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.path.to_string(), "Profile.id");
    }

    #[test]
    fn test_decode_full() {
        let profile = Profile::from_value(&full_payload()).unwrap();
        assert_eq!(profile.first_name(), Some("Ada"));
        assert_eq!(profile.birthdate(), Date::from_ymd(1815, 12, 10));
        assert_eq!(profile.account_type(), Some(AccountType::Creator));
        assert_eq!(profile.verified(), Some(true));
    }

    #[test]
    fn test_decode_rejects_bad_id() {
        let err = Profile::from_value(&json!({
            "id": "not-a-uuid",
            "username": "a",
            "email": "a@b.com"
        }))
        .unwrap_err();
        assert_eq!(err.field(), Some("id"));
        assert_eq!(err.path.to_string(), "Profile.id");
    }

    #[test]
    fn test_decode_requires_email() {
        let err = Profile::from_value(&json!({"id": ID, "username": "a"})).unwrap_err();
        assert_eq!(err.path.to_string(), "Profile.email");
        assert!(err.is_missing());
    }

    #[test]
    fn test_decode_rejects_unknown_account_type() {
        let mut payload = full_payload();
        payload["accountType"] = json!("PERSONAL");
        let err = Profile::from_value(&payload).unwrap_err();
        assert_eq!(err.path.to_string(), "Profile.accountType");
    }

    #[test]
    fn test_decode_rejects_non_object() {
        let err = Profile::from_value(&json!("profile")).unwrap_err();
        assert_eq!(err.path.to_string(), "Profile");
        assert_eq!(err.expected, "Profile");
    }

    #[test]
    fn test_decode_rejects_wrong_optional_type() {
        let mut payload = full_payload();
        payload["verified"] = json!("yes");
        let err = Profile::from_value(&payload).unwrap_err();
        assert_eq!(err.path.to_string(), "Profile.verified");
    }

    #[test]
    fn test_encode_emits_nulls_in_declared_order() {
        let profile = Profile::from_value(&json!({
            "email": "a@b.com",
            "username": "a",
            "id": ID
        }))
        .unwrap();
        let encoded = profile.to_value().unwrap();
        let keys: Vec<&str> = encoded.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, PROFILE.field_names());
        assert_eq!(encoded["bio"], Value::Null);
        assert_eq!(encoded["verified"], Value::Null);
    }

    #[test]
    fn test_encode_of_canonical_payload_is_identity() {
        let payload = full_payload();
        let profile = Profile::from_value(&payload).unwrap();
        assert_eq!(profile.to_value().unwrap(), payload);
    }

    #[test]
    fn test_validate_passes_for_built_record() {
        let profile = Profile::from_value(&full_payload()).unwrap();
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_json_text_roundtrip() {
        let text = Profile::from_value(&full_payload()).unwrap().to_json_string().unwrap();
        let parsed = Profile::from_json_str(&text).unwrap();
        assert_eq!(parsed.username(), "ada");
        assert!(Profile::from_json_str("{not json").is_err());
    }
}
