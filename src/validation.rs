//! Validation workflow for submitted contact forms.
//!
//! An ordered list of independent checks runs against the submitted fields;
//! every failure is collected before the handler branches, so a form with a
//! taken name, a bad email, and a bad phone reports all three at once.

use crate::domain::{EmailAddress, PhoneNumber, ValidationError};
use crate::error::StoreResult;
use crate::models::ContactForm;
use crate::store::ContactStore;

/// A single validation failure, attached to the form field that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl From<ValidationError> for FieldError {
    fn from(err: ValidationError) -> Self {
        FieldError {
            field: err.field(),
            message: err.to_string(),
        }
    }
}

/// The operation the submission is for. Updates carry the record's previous
/// name so an unchanged name never trips the uniqueness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Create,
    Update { previous_name: String },
}

/// Run every validation rule against the submitted form.
///
/// Checks, in order: name presence and uniqueness (against the store), email
/// syntax when an email is present, phone syntax. All failures are
/// aggregated; an empty vec means the submission may proceed to the store.
///
/// # Errors
///
/// Returns `StoreError` only when the uniqueness lookup itself fails;
/// validation outcomes are carried in the `Ok` value.
pub async fn validate_submission(
    store: &dyn ContactStore,
    form: &ContactForm,
    mode: Mode,
) -> StoreResult<Vec<FieldError>> {
    let mut errors = Vec::new();

    if form.name.trim().is_empty() {
        errors.push(ValidationError::EmptyName.into());
    } else if let Some(err) = check_unique_name(store, &form.name, &mode).await? {
        errors.push(err.into());
    }

    if !form.email.trim().is_empty() {
        if let Err(err) = EmailAddress::new(form.email.clone()) {
            errors.push(err.into());
        }
    }

    if let Err(err) = PhoneNumber::new(form.phone_number.clone()) {
        errors.push(err.into());
    }

    Ok(errors)
}

/// Uniqueness rule: a name already in the store blocks a create, and blocks
/// an update only when the submission renames the record onto it.
async fn check_unique_name(
    store: &dyn ContactStore,
    name: &str,
    mode: &Mode,
) -> StoreResult<Option<ValidationError>> {
    let duplicate = store.find_by_name(name).await?;

    let blocked = match mode {
        Mode::Create => duplicate.is_some(),
        Mode::Update { previous_name } => duplicate.is_some() && name != previous_name,
    };

    if blocked {
        Ok(Some(ValidationError::DuplicateName(name.to_string())))
    } else {
        Ok(None)
    }
}
