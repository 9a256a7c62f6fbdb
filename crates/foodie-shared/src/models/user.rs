use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::RecordError;

const REDACTED: &str = "[REDACTED]";

/// User data as it crosses the persistence/presentation boundary.
///
/// Only `id` is required. Every other field may be absent, and `None` is kept
/// distinct from an empty string or zero.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl UserRecord {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            username: None,
            password: None,
            email: None,
            profile_picture_url: None,
            role: None,
            phone_number: None,
            address: None,
            full_name: None,
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_profile_picture_url(mut self, url: impl Into<String>) -> Self {
        self.profile_picture_url = Some(url.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_phone_number(mut self, phone_number: i64) -> Self {
        self.phone_number = Some(phone_number);
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn profile_picture_url(&self) -> Option<&str> {
        self.profile_picture_url.as_deref()
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    pub fn phone_number(&self) -> Option<i64> {
        self.phone_number
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    /// Decodes a record from its JSON wire form.
    ///
    /// A missing or `null` `id` is reported as [`RecordError::MissingField`]
    /// rather than a generic JSON error.
    pub fn from_json(input: &str) -> Result<Self, RecordError> {
        let raw: RawUserRecord = serde_json::from_str(input)?;
        let record = raw.into_record()?;
        tracing::debug!(user_id = record.id, "Decoded user record");
        Ok(record)
    }

    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string(self)?)
    }
}

// Password is printed as a placeholder only.
impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| REDACTED))
            .field("email", &self.email)
            .field("profile_picture_url", &self.profile_picture_url)
            .field("role", &self.role)
            .field("phone_number", &self.phone_number)
            .field("address", &self.address)
            .field("full_name", &self.full_name)
            .finish()
    }
}

impl fmt::Display for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User #{}", self.id)?;
        if let Some(username) = &self.username {
            write!(f, " ({})", username)?;
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for UserRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawUserRecord::deserialize(deserializer)?
            .into_record()
            .map_err(|_| de::Error::missing_field("id"))
    }
}

/// Wire shape with every field optional, so a missing `id` can be told apart
/// from malformed input.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawUserRecord {
    id: Option<i64>,
    username: Option<String>,
    password: Option<String>,
    email: Option<String>,
    profile_picture_url: Option<String>,
    role: Option<String>,
    phone_number: Option<i64>,
    address: Option<String>,
    full_name: Option<String>,
}

impl RawUserRecord {
    fn into_record(self) -> Result<UserRecord, RecordError> {
        let Some(id) = self.id else {
            tracing::debug!("User record rejected: missing id");
            return Err(RecordError::MissingField("id"));
        };

        Ok(UserRecord {
            id,
            username: self.username,
            password: self.password,
            email: self.email,
            profile_picture_url: self.profile_picture_url,
            role: self.role,
            phone_number: self.phone_number,
            address: self.address,
            full_name: self.full_name,
        })
    }
}

/// Password-free projection of a [`UserRecord`] for display surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
}

impl From<&UserRecord> for UserSummary {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: record.id,
            username: record.username.clone(),
            email: record.email.clone(),
            full_name: record.full_name.clone(),
            role_name: record.role.clone(),
            phone_number: record.phone_number,
            address: record.address.clone(),
            profile_picture_url: record.profile_picture_url.clone(),
        }
    }
}
