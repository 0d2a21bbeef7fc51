//! # Generic UI Handlers
//!
//! Handler factories shared by every resource. Each factory takes the
//! service function(s) it should call and the template it should render, and
//! returns a ready `MethodRouter`.
//!
//! ## Handler Shapes
//! ```text
//! ┌──────────────────┬──────────────────────────────────────────────────────┐
//! │ static_view      │ GET  → template, no data                             │
//! │ list_view        │ GET  → ?query → filter → service → { resources }     │
//! │                  │        NotFound renders an empty list                │
//! │ detail(_with)    │ GET  → /{id} → service → { resource, ..extras }      │
//! │ create_view(_with│ GET  → { resource: null, ..extras }                  │
//! │ create           │ POST → form → params → service → 302 redirect()      │
//! │ create_with_parser POST → raw form → parser → params → ... → 302        │
//! │ update           │ POST → /{id} + form → service → 302 redirect()       │
//! │ update_with_parser POST → /{id} + raw form → parser → ... → 302         │
//! └──────────────────┴──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors
//! - Malformed path id or form body → 400
//! - Service errors → their taxonomy status (404 / 500)
//! - Render errors → 500
//!
//! ## Example
//! ```rust,ignore
//! Router::new().route(
//!     "/items/{id}",
//!     detail_with(
//!         |s: LogisticsService, id| async move { s.item(id).await },
//!         item_extras,
//!         "logistics/item.html",
//!     )
//!     .merge(update(|s: LogisticsService, id, p| async move { s.update_item(id, p).await })),
//! )
//! ```

use std::collections::BTreeMap;
use std::future::Future;

use apex_core::{Resource, ValidationError};
use apex_db::DbResult;
use axum::body::Bytes;
use axum::extract::rejection::FormRejection;
use axum::extract::{Path, RawQuery, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post, MethodRouter};
use axum::Form;
use minijinja::Value;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};

use super::params::{parse_id, FormData, QueryParams, MALFORMED_ID};
use super::templates::Templates;
use crate::error::AppError;

/// Reference data rendered next to a record, keyed by template variable.
pub type Extras = BTreeMap<&'static str, Value>;

// =============================================================================
// State & Template Data
// =============================================================================

/// Router state of one module: its service plus the template registry.
#[derive(Debug, Clone)]
pub struct UiState<S> {
    pub service: S,
    pub templates: Templates,
}

impl<S> UiState<S> {
    pub fn new(service: S, templates: Templates) -> Self {
        UiState { service, templates }
    }
}

/// Context of list templates.
#[derive(Debug, Serialize)]
pub struct ListData<R> {
    pub resources: Vec<R>,
}

/// Context of detail and create-form templates. `resource` is `None` on the
/// blank create form.
#[derive(Debug, Serialize)]
pub struct DetailData<R> {
    pub resource: Option<R>,

    #[serde(flatten)]
    pub extras: Extras,
}

/// Reference list for [`Extras`]. An empty table is an empty list.
pub fn reference<T: Serialize>(result: DbResult<Vec<T>>) -> Result<Value, AppError> {
    match result {
        Ok(rows) => Ok(Value::from_serialize(&rows)),
        Err(err) if err.is_not_found() => Ok(Value::from(Vec::<Value>::new())),
        Err(err) => Err(err.into()),
    }
}

async fn no_extras<S>(_service: S) -> Result<Extras, AppError> {
    Ok(Extras::new())
}

// =============================================================================
// Views
// =============================================================================

/// Renders `template` without data.
pub fn static_view<S>(template: &'static str) -> MethodRouter<UiState<S>>
where
    S: Clone + Send + Sync + 'static,
{
    get(move |State(state): State<UiState<S>>| async move {
        state.templates.render(template, minijinja::context! {})
    })
}

/// Lists resources matching the query string.
///
/// ## Arguments
/// * `parse` - Query string to filter; a coercion error is a 400
/// * `query` - Service call returning the matching resources
/// * `template` - Rendered with `{ resources }`
pub fn list_view<S, P, F, Q, Fut, R>(
    parse: P,
    query: Q,
    template: &'static str,
) -> MethodRouter<UiState<S>>
where
    S: Clone + Send + Sync + 'static,
    P: Fn(&QueryParams) -> Result<F, ValidationError> + Clone + Send + Sync + 'static,
    F: Send + 'static,
    Q: Fn(S, F) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = DbResult<Vec<R>>> + Send + 'static,
    R: Serialize + Send + 'static,
{
    get(
        move |State(state): State<UiState<S>>, RawQuery(raw): RawQuery| async move {
            render_list(state, raw, parse, query, template).await
        },
    )
}

/// Shows one resource.
pub fn detail<S, Q, Fut, R>(query: Q, template: &'static str) -> MethodRouter<UiState<S>>
where
    S: Clone + Send + Sync + 'static,
    Q: Fn(S, i64) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = DbResult<R>> + Send + 'static,
    R: Serialize + Send + 'static,
{
    detail_with(query, no_extras::<S>, template)
}

/// Shows one resource together with the reference data from `augment`.
pub fn detail_with<S, Q, Fut, R, A, AFut>(
    query: Q,
    augment: A,
    template: &'static str,
) -> MethodRouter<UiState<S>>
where
    S: Clone + Send + Sync + 'static,
    Q: Fn(S, i64) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = DbResult<R>> + Send + 'static,
    R: Serialize + Send + 'static,
    A: Fn(S) -> AFut + Clone + Send + Sync + 'static,
    AFut: Future<Output = Result<Extras, AppError>> + Send + 'static,
{
    get(
        move |State(state): State<UiState<S>>, Path(raw): Path<String>| async move {
            render_detail(state, raw, query, augment, template).await
        },
    )
}

/// Blank create form.
pub fn create_view<S, R>(template: &'static str) -> MethodRouter<UiState<S>>
where
    S: Clone + Send + Sync + 'static,
    R: Serialize + Send + 'static,
{
    create_view_with::<S, R, _, _>(no_extras::<S>, template)
}

/// Blank create form with the reference data from `augment`.
pub fn create_view_with<S, R, A, AFut>(augment: A, template: &'static str) -> MethodRouter<UiState<S>>
where
    S: Clone + Send + Sync + 'static,
    R: Serialize + Send + 'static,
    A: Fn(S) -> AFut + Clone + Send + Sync + 'static,
    AFut: Future<Output = Result<Extras, AppError>> + Send + 'static,
{
    get(move |State(state): State<UiState<S>>| async move {
        let extras = augment(state.service.clone()).await?;
        let data = DetailData::<R> {
            resource: None,
            extras,
        };
        state.templates.render(template, data)
    })
}

// =============================================================================
// Actions
// =============================================================================

/// Creates a resource from a form body decoded into `P`.
pub fn create<S, P, C, Fut, R>(create_fn: C) -> MethodRouter<UiState<S>>
where
    S: Clone + Send + Sync + 'static,
    P: DeserializeOwned + Send + 'static,
    C: Fn(S, P) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = DbResult<R>> + Send + 'static,
    R: Resource + Send + 'static,
{
    post(
        move |State(state): State<UiState<S>>, form: Result<Form<P>, FormRejection>| async move {
            let params = decode_form(form)?;
            store(create_fn(state.service, params)).await
        },
    )
}

/// Creates a resource from a form body read by `parser` (repeated keys,
/// nested lists).
pub fn create_with_parser<S, P, X, C, Fut, R>(parser: X, create_fn: C) -> MethodRouter<UiState<S>>
where
    S: Clone + Send + Sync + 'static,
    P: Send + 'static,
    X: Fn(&FormData) -> Result<P, ValidationError> + Clone + Send + Sync + 'static,
    C: Fn(S, P) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = DbResult<R>> + Send + 'static,
    R: Resource + Send + 'static,
{
    post(move |State(state): State<UiState<S>>, body: Bytes| async move {
        let params = parser(&FormData::parse(&body))?;
        store(create_fn(state.service, params)).await
    })
}

/// Replaces resource `{id}` with a form body decoded into `P`.
pub fn update<S, P, U, Fut, R>(update_fn: U) -> MethodRouter<UiState<S>>
where
    S: Clone + Send + Sync + 'static,
    P: DeserializeOwned + Send + 'static,
    U: Fn(S, i64, P) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = DbResult<R>> + Send + 'static,
    R: Resource + Send + 'static,
{
    post(
        move |State(state): State<UiState<S>>,
              Path(raw): Path<String>,
              form: Result<Form<P>, FormRejection>| async move {
            let id = path_id(&raw)?;
            let params = decode_form(form)?;
            store(update_fn(state.service, id, params)).await
        },
    )
}

/// Replaces resource `{id}` with a form body read by `parser`.
pub fn update_with_parser<S, P, X, U, Fut, R>(parser: X, update_fn: U) -> MethodRouter<UiState<S>>
where
    S: Clone + Send + Sync + 'static,
    P: Send + 'static,
    X: Fn(&FormData) -> Result<P, ValidationError> + Clone + Send + Sync + 'static,
    U: Fn(S, i64, P) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = DbResult<R>> + Send + 'static,
    R: Resource + Send + 'static,
{
    post(
        move |State(state): State<UiState<S>>, Path(raw): Path<String>, body: Bytes| async move {
            let id = path_id(&raw)?;
            let params = parser(&FormData::parse(&body))?;
            store(update_fn(state.service, id, params)).await
        },
    )
}

// =============================================================================
// Shared Steps
// =============================================================================

/// Parses a path id, 400 `malformatted id` otherwise.
pub fn path_id(raw: &str) -> Result<i64, AppError> {
    parse_id(raw).map_err(|_| AppError::bad_request(MALFORMED_ID))
}

/// `302 Found` to the resource's canonical path.
pub fn redirect_to<R: Resource>(resource: &R) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, resource.redirect())]).into_response()
}

fn decode_form<P>(form: Result<Form<P>, FormRejection>) -> Result<P, AppError> {
    form.map(|Form(params)| params).map_err(|rejection| {
        debug!(error = %rejection, "Unable to decode form");
        AppError::bad_request("unable to decode form")
    })
}

async fn store<Fut, R>(write: Fut) -> Result<Response, AppError>
where
    Fut: Future<Output = DbResult<R>>,
    R: Resource,
{
    let resource = write.await?;
    debug!(id = resource.id(), location = %resource.redirect(), "Stored resource");
    Ok(redirect_to(&resource))
}

async fn render_list<S, P, F, Q, Fut, R>(
    state: UiState<S>,
    raw_query: Option<String>,
    parse: P,
    query: Q,
    template: &'static str,
) -> Result<Html<String>, AppError>
where
    P: Fn(&QueryParams) -> Result<F, ValidationError>,
    Q: Fn(S, F) -> Fut,
    Fut: Future<Output = DbResult<Vec<R>>>,
    R: Serialize,
{
    let filter = parse(&QueryParams::from_query(raw_query.as_deref()))?;

    let resources = match query(state.service, filter).await {
        Ok(resources) => resources,
        Err(err) if err.is_not_found() => Vec::new(),
        Err(err) => {
            error!(error = %err, template, "Unable to query resources");
            return Err(AppError::internal());
        }
    };

    state.templates.render(template, ListData { resources })
}

async fn render_detail<S, Q, Fut, R, A, AFut>(
    state: UiState<S>,
    raw_id: String,
    query: Q,
    augment: A,
    template: &'static str,
) -> Result<Html<String>, AppError>
where
    S: Clone,
    Q: Fn(S, i64) -> Fut,
    Fut: Future<Output = DbResult<R>>,
    R: Serialize,
    A: Fn(S) -> AFut,
    AFut: Future<Output = Result<Extras, AppError>>,
{
    let id = path_id(&raw_id)?;
    let resource = query(state.service.clone(), id).await?;
    let extras = augment(state.service.clone()).await?;

    let data = DetailData {
        resource: Some(resource),
        extras,
    };
    state.templates.render(template, data)
}
