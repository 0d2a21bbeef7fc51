//! Accounting HTML views.

use apex_core::{Account, AccountFilter, AccountParams, Document, DocumentFilter, DocumentParams};
use axum::Router;

use super::{account_filter, document_filter, document_params};
use crate::error::AppError;
use crate::services::AccountingService;
use crate::ui::{
    create, create_view, create_view_with, create_with_parser, detail, detail_with, list_view,
    reference, static_view, update, update_with_parser, Extras, UiState,
};

/// Routes mounted under `/accounting`.
pub fn router(state: UiState<AccountingService>) -> Router {
    Router::new()
        .route("/", static_view("accounting/index.html"))
        // Accounts
        .route(
            "/accounts",
            list_view(
                account_filter,
                |s: AccountingService, filter: AccountFilter| async move {
                    s.accounts(filter).await
                },
                "accounting/accounts.html",
            )
            .merge(create(|s: AccountingService, params: AccountParams| async move {
                s.create_account(params).await
            })),
        )
        .route(
            "/accounts/new",
            create_view::<_, Account>("accounting/account.html"),
        )
        .route(
            "/accounts/{id}",
            detail(
                |s: AccountingService, id| async move { s.account(id).await },
                "accounting/account.html",
            )
            .merge(update(|s: AccountingService, id, params: AccountParams| async move {
                s.update_account(id, params).await
            })),
        )
        // Documents
        .route(
            "/documents",
            list_view(
                document_filter,
                |s: AccountingService, filter: DocumentFilter| async move {
                    s.documents(filter).await
                },
                "accounting/documents.html",
            )
            .merge(create_with_parser(
                document_params,
                |s: AccountingService, params: DocumentParams| async move {
                    s.create_document(params).await
                },
            )),
        )
        .route(
            "/documents/new",
            create_view_with::<_, Document, _, _>(document_extras, "accounting/document.html"),
        )
        .route(
            "/documents/{id}",
            detail_with(
                |s: AccountingService, id| async move { s.document_view(id).await },
                document_extras,
                "accounting/document.html",
            )
            .merge(update_with_parser(
                document_params,
                |s: AccountingService, id, params: DocumentParams| async move {
                    s.update_document(id, params).await
                },
            )),
        )
        .with_state(state)
}

/// Account, currency and position type options for the document form.
async fn document_extras(service: AccountingService) -> Result<Extras, AppError> {
    let accounts = reference(service.accounts(AccountFilter::default()).await)?;
    let currencies = reference(service.currencies().await)?;
    let position_types = reference(service.position_types().await)?;

    Ok(Extras::from([
        ("accounts", accounts),
        ("currencies", currencies),
        ("position_types", position_types),
    ]))
}
