//! Data structures for contacts.

pub mod contact;

pub use contact::{Contact, ContactFields, ContactForm};
