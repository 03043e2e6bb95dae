//! User — a person who may own or occupy houses.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::UserId;
use crate::record::{Record, null_as_default, require_non_empty};

const PHONE_NUMBER_DIGITS: usize = 10;

/// A person known to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: UserId,
    pub name: String,
    pub phone_number: String,
    pub email: String,
}

impl User {
    /// Create a builder for constructing a [`User`].
    #[must_use]
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }
}

impl Record for User {
    type Id = UserId;

    const KIND: &'static str = "User";

    fn id(&self) -> &UserId {
        &self.id
    }

    fn set_id(&mut self, id: UserId) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        if !is_valid_phone_number(&self.phone_number) {
            return Err(ValidationError::InvalidPhoneNumber);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

fn is_valid_phone_number(value: &str) -> bool {
    value.len() == PHONE_NUMBER_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
}

/// Structural check: `local@domain.tld`, no whitespace, exactly one `@`.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty() && !host.starts_with('.')
}

/// Step-by-step builder for [`User`].
#[derive(Debug, Default)]
pub struct UserBuilder {
    id: Option<UserId>,
    name: Option<String>,
    phone_number: Option<String>,
    email: Option<String>,
}

impl UserBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<UserId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Consume the builder, validate, and return a [`User`].
    ///
    /// The id is left empty unless one was supplied; the registry assigns
    /// one on creation.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if any field breaks an invariant.
    pub fn build(self) -> Result<User, ValidationError> {
        let user = User {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            phone_number: self.phone_number.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
        };
        user.validate()?;
        Ok(user)
    }
}
