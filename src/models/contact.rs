//! Contact model: the stored document and the submitted form fields.

use crate::domain::ContactId;
use serde::{Deserialize, Serialize};

/// A contact record as persisted in the document store.
///
/// Documents keep the original wire field names (`phoneNumber`, `_id`) so
/// the stored JSON matches what the forms submit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    /// Unique identifier, assigned by the store on insert. Immutable.
    #[serde(rename = "_id")]
    pub id: ContactId,

    /// Display name. Unique among all contacts.
    pub name: String,

    /// Regional mobile number.
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,

    /// Optional email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// The writable fields of a contact, as accepted by store inserts and
/// updates. The id is never part of this set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub phone_number: String,
    pub email: Option<String>,
}

/// A submitted contact form, straight off the wire.
///
/// All fields default to empty so the same shape serves create (no `_id`,
/// no `oldName`), update, and delete bodies.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "phoneNumber", default)]
    pub phone_number: String,

    #[serde(default)]
    pub email: String,

    #[serde(rename = "_id", default)]
    pub id: String,

    #[serde(rename = "oldName", default)]
    pub old_name: String,

    /// Method override for rendered forms: browsers can only POST, so the
    /// edit and delete forms carry `_method=PUT` or `_method=DELETE`.
    #[serde(rename = "_method", default)]
    pub method: String,
}

impl ContactForm {
    /// Convert the submitted values into store-writable fields.
    /// An empty email is treated as absent.
    pub fn fields(&self) -> ContactFields {
        ContactFields {
            name: self.name.clone(),
            phone_number: self.phone_number.clone(),
            email: if self.email.trim().is_empty() {
                None
            } else {
                Some(self.email.clone())
            },
        }
    }
}
