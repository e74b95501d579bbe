//! Domain validation errors.

use std::fmt;

/// Errors that can occur while validating a submitted contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided ID is empty.
    EmptyId,

    /// The submitted name is empty.
    EmptyName,

    /// A contact with this name already exists.
    DuplicateName(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),
}

impl ValidationError {
    /// The submitted form field this error is attached to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyId => "_id",
            Self::EmptyName => "name",
            Self::DuplicateName(_) => "name",
            Self::InvalidEmail(_) => "email",
            Self::InvalidPhone(_) => "phoneNumber",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "ID cannot be empty"),
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::DuplicateName(name) => {
                write!(f, "A contact named \"{}\" already exists", name)
            }
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
        }
    }
}

impl std::error::Error for ValidationError {}
