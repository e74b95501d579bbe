//! HTML page builders.
//!
//! Plain string rendering with a shared layout. Every interpolated value is
//! escaped; the detail view handles an absent contact with a "not found"
//! state rather than failing.

use crate::models::{Contact, ContactForm};
use crate::validation::FieldError;
use std::fmt::Write;

/// Escape text for safe interpolation into HTML.
fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Shared page chrome around a body fragment.
fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} | Contact Book</title>\n</head>\n<body>\n\
         <nav><a href=\"/\">Home</a> <a href=\"/about\">About</a> \
         <a href=\"/contact\">Contacts</a></nav>\n\
         <main>\n{body}\n</main>\n</body>\n</html>\n",
        title = escape(title),
        body = body,
    )
}

fn flash_banner(flash: Option<&str>) -> String {
    match flash {
        Some(message) => format!("<p class=\"flash\">{}</p>\n", escape(message)),
        None => String::new(),
    }
}

fn error_list(errors: &[FieldError]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let mut out = String::from("<ul class=\"errors\">\n");
    for error in errors {
        let _ = writeln!(
            out,
            "<li data-field=\"{}\">{}</li>",
            escape(error.field),
            escape(&error.message)
        );
    }
    out.push_str("</ul>\n");
    out
}

pub fn home_page() -> String {
    layout(
        "Home",
        "<h1>Contact Book</h1>\n<p>A small address book. Browse the \
         <a href=\"/contact\">contact list</a> to get started.</p>",
    )
}

pub fn about_page() -> String {
    layout(
        "About",
        "<h1>About</h1>\n<p>Contact Book keeps names, phone numbers, and \
         email addresses in one place.</p>",
    )
}

pub fn list_page(contacts: &[Contact], flash: Option<&str>) -> String {
    let mut body = String::from("<h1>Contacts</h1>\n");
    body.push_str(&flash_banner(flash));
    body.push_str("<p><a href=\"/contact/add\">Add contact</a></p>\n");

    if contacts.is_empty() {
        body.push_str("<p>No contacts yet.</p>\n");
    } else {
        body.push_str("<ul class=\"contacts\">\n");
        for contact in contacts {
            let _ = writeln!(
                body,
                "<li><a href=\"/contact/{href}\">{name}</a> &mdash; {phone}</li>",
                href = urlencoding::encode(&contact.name),
                name = escape(&contact.name),
                phone = escape(&contact.phone_number),
            );
        }
        body.push_str("</ul>\n");
    }

    body.push_str(
        "<form action=\"/contact/search\" method=\"post\">\n\
         <input type=\"text\" name=\"name\" placeholder=\"Exact name\">\n\
         <button type=\"submit\">Search</button>\n</form>",
    );
    layout("Contacts", &body)
}

pub fn detail_page(contact: Option<&Contact>, flash: Option<&str>) -> String {
    let mut body = String::from("<h1>Detail</h1>\n");
    body.push_str(&flash_banner(flash));

    match contact {
        Some(contact) => {
            let _ = write!(
                body,
                "<dl>\n<dt>Name</dt><dd>{name}</dd>\n\
                 <dt>Phone</dt><dd>{phone}</dd>\n\
                 <dt>Email</dt><dd>{email}</dd>\n</dl>\n\
                 <p><a href=\"/contact/edit/{href}\">Edit</a></p>\n\
                 <form action=\"/contact\" method=\"post\">\n\
                 <input type=\"hidden\" name=\"_method\" value=\"DELETE\">\n\
                 <input type=\"hidden\" name=\"_id\" value=\"{id}\">\n\
                 <button type=\"submit\">Delete</button>\n</form>",
                name = escape(&contact.name),
                phone = escape(&contact.phone_number),
                email = escape(contact.email.as_deref().unwrap_or("-")),
                href = urlencoding::encode(&contact.name),
                id = escape(contact.id.as_str()),
            );
        }
        None => body.push_str("<p class=\"not-found\">Contact not found.</p>"),
    }

    body.push_str("\n<p><a href=\"/contact\">Back to list</a></p>");
    layout("Detail", &body)
}

pub fn add_form_page(form: Option<&ContactForm>, errors: &[FieldError]) -> String {
    let empty = ContactForm::default();
    let form = form.unwrap_or(&empty);

    let mut body = String::from("<h1>Add Contact</h1>\n");
    body.push_str(&error_list(errors));
    let _ = write!(
        body,
        "<form action=\"/contact\" method=\"post\">\n\
         <label>Name <input type=\"text\" name=\"name\" value=\"{name}\"></label>\n\
         <label>Phone <input type=\"text\" name=\"phoneNumber\" value=\"{phone}\"></label>\n\
         <label>Email <input type=\"text\" name=\"email\" value=\"{email}\"></label>\n\
         <button type=\"submit\">Save</button>\n</form>",
        name = escape(&form.name),
        phone = escape(&form.phone_number),
        email = escape(&form.email),
    );
    layout("Add Contact", &body)
}

pub fn edit_form_page(form: &ContactForm, errors: &[FieldError]) -> String {
    let mut body = String::from("<h1>Edit Contact</h1>\n");
    body.push_str(&error_list(errors));
    let _ = write!(
        body,
        "<form action=\"/contact\" method=\"post\">\n\
         <input type=\"hidden\" name=\"_method\" value=\"PUT\">\n\
         <input type=\"hidden\" name=\"_id\" value=\"{id}\">\n\
         <input type=\"hidden\" name=\"oldName\" value=\"{old_name}\">\n\
         <label>Name <input type=\"text\" name=\"name\" value=\"{name}\"></label>\n\
         <label>Phone <input type=\"text\" name=\"phoneNumber\" value=\"{phone}\"></label>\n\
         <label>Email <input type=\"text\" name=\"email\" value=\"{email}\"></label>\n\
         <button type=\"submit\">Save</button>\n</form>",
        id = escape(&form.id),
        old_name = escape(&form.old_name),
        name = escape(&form.name),
        phone = escape(&form.phone_number),
        email = escape(&form.email),
    );
    layout("Edit Contact", &body)
}

pub fn not_found_page(what: &str) -> String {
    layout(
        "Not Found",
        &format!(
            "<h1>Not Found</h1>\n<p>{}</p>\n<p><a href=\"/contact\">Back to list</a></p>",
            escape(what)
        ),
    )
}

pub fn error_page() -> String {
    layout(
        "Error",
        "<h1>Something went wrong</h1>\n<p>The server could not complete the \
         request. Please try again.</p>",
    )
}
