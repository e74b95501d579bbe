//! Request handlers, one per route.
//!
//! Mutating handlers follow the same workflow: parse the form, run the
//! validation rules, then either re-render the originating form with the
//! collected errors (HTTP 200, store untouched) or perform the store
//! operation, queue a flash confirmation, and redirect to the listing.

use crate::error::StoreError;
use crate::models::ContactForm;
use crate::server::session::Session;
use crate::server::views;
use crate::server::AppState;
use crate::validation::{validate_submission, Mode};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use tracing::{debug, error, warn};

/// Store failures surfaced out of a handler.
///
/// `NotFound` becomes a 404 page; anything else is an operator-visible 500.
/// Validation failures never reach this type — they are rendered inline.
pub struct AppError(StoreError);

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.0 {
            StoreError::NotFound(what) => {
                warn!("request targeted a missing contact: {}", what);
                (StatusCode::NOT_FOUND, Html(views::not_found_page(&what))).into_response()
            }
            err => {
                error!("store failure while handling request: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, Html(views::error_page())).into_response()
            }
        }
    }
}

/// GET `/`
pub async fn home() -> Html<String> {
    Html(views::home_page())
}

/// GET `/about`
pub async fn about() -> Html<String> {
    Html(views::about_page())
}

/// GET `/contact` — list every contact, draining any pending flash message.
pub async fn contact_list(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, AppError> {
    let contacts = state.store.find_all().await?;
    let flash = state.flash.consume(session.id());
    Ok(session.attach(Html(views::list_page(&contacts, flash.as_deref()))))
}

/// GET `/contact/add`
pub async fn add_form(session: Session) -> Response {
    session.attach(Html(views::add_form_page(None, &[])))
}

/// POST `/contact` — create a contact.
///
/// Browsers can only POST forms, so a `_method` field of `PUT` or `DELETE`
/// reroutes the submission to the update or delete handler.
pub async fn create_contact(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ContactForm>,
) -> Result<Response, AppError> {
    if form.method.eq_ignore_ascii_case("put") {
        return update_contact(State(state), session, Form(form)).await;
    }
    if form.method.eq_ignore_ascii_case("delete") {
        return delete_contact(State(state), session, Form(form)).await;
    }

    let errors = validate_submission(state.store.as_ref(), &form, Mode::Create).await?;
    if !errors.is_empty() {
        debug!("create rejected with {} validation error(s)", errors.len());
        return Ok(session.attach(Html(views::add_form_page(Some(&form), &errors))));
    }

    let contact = state.store.insert(form.fields()).await?;
    debug!("created contact {} ({})", contact.name, contact.id);
    state.flash.set(session.id(), "Contact added.");
    Ok(session.attach(Redirect::to("/contact")))
}

/// GET `/contact/edit/{name}` — edit form pre-filled with the existing record.
pub async fn edit_form(
    State(state): State<AppState>,
    session: Session,
    Path(name): Path<String>,
) -> Result<Response, AppError> {
    let contact = state
        .store
        .find_by_name(&name)
        .await?
        .ok_or_else(|| StoreError::NotFound(name))?;

    let form = ContactForm {
        name: contact.name.clone(),
        phone_number: contact.phone_number.clone(),
        email: contact.email.clone().unwrap_or_default(),
        id: contact.id.into_inner(),
        old_name: contact.name,
        ..Default::default()
    };
    Ok(session.attach(Html(views::edit_form_page(&form, &[]))))
}

/// PUT `/contact` — update a contact.
///
/// An unchanged name (`name == oldName`) passes the uniqueness check; an
/// unknown `_id` is a 404, not a silent success.
pub async fn update_contact(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ContactForm>,
) -> Result<Response, AppError> {
    let mode = Mode::Update {
        previous_name: form.old_name.clone(),
    };
    let errors = validate_submission(state.store.as_ref(), &form, mode).await?;
    if !errors.is_empty() {
        debug!("update rejected with {} validation error(s)", errors.len());
        return Ok(session.attach(Html(views::edit_form_page(&form, &errors))));
    }

    state.store.update_by_id(&form.id, form.fields()).await?;
    debug!("updated contact {}", form.id);
    state.flash.set(session.id(), "Contact updated.");
    Ok(session.attach(Redirect::to("/contact")))
}

/// DELETE `/contact` — delete a contact by `_id`. Absent ids are a no-op.
pub async fn delete_contact(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ContactForm>,
) -> Result<Response, AppError> {
    state.store.delete_by_id(&form.id).await?;
    debug!("deleted contact {}", form.id);
    state.flash.set(session.id(), "Contact deleted.");
    Ok(session.attach(Redirect::to("/contact")))
}

/// GET `/contact/{name}` — detail page, draining any pending flash message.
pub async fn contact_detail(
    State(state): State<AppState>,
    session: Session,
    Path(name): Path<String>,
) -> Result<Response, AppError> {
    let contact = state.store.find_by_name(&name).await?;
    let flash = state.flash.consume(session.id());
    Ok(session.attach(Html(views::detail_page(contact.as_ref(), flash.as_deref()))))
}

/// POST `/contact/search` — exact-name search, rendered as the detail view.
///
/// A miss renders the absent-contact state; it is never an error.
pub async fn search_contact(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ContactForm>,
) -> Result<Response, AppError> {
    let contact = state.store.find_by_name(&form.name).await?;
    let flash = state.flash.consume(session.id());
    Ok(session.attach(Html(views::detail_page(contact.as_ref(), flash.as_deref()))))
}
