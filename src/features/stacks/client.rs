//! Client wrappers for the stack catalog endpoints. Reads are public; writes
//! ride the cookie session and may be rejected with 403 until the account's
//! email is verified, which the protected-action flow handles.

use crate::app_lib::{
    ApiEnvelope, AppError, delete_with_credentials, get_json, get_json_with_credentials,
    post_json_with_credentials,
};
use crate::features::stacks::types::{
    CreateStackRequest, StackListResponse, StackPage, StackQuery, StackSummary,
};

/// Fetches one page of the public stack catalog.
pub async fn fetch_stacks(query: StackQuery) -> Result<StackPage, AppError> {
    let path = format!("/stack/getStacks{}", query.to_query_string());
    let response: StackListResponse = get_json(&path).await?;

    if !response.success {
        return Err(AppError::Http {
            status: 200,
            message: response
                .message
                .unwrap_or_else(|| "Failed to load stacks.".to_string()),
        });
    }

    Ok(StackPage {
        items: response.data.unwrap_or_default().items,
        total_count: response.total_count,
        page_number: response.page_number,
        total_pages: response.total_pages,
        has_previous_page: response.has_previous_page,
        has_next_page: response.has_next_page,
    })
}

/// Fetches a single stack listing.
pub async fn fetch_stack(id: &str) -> Result<StackSummary, AppError> {
    let envelope: ApiEnvelope<StackSummary> = get_json(&format!("/stack/{id}")).await?;
    envelope.into_data()
}

/// Lists the signed-in user's own stacks.
pub async fn fetch_my_stacks() -> Result<Vec<StackSummary>, AppError> {
    let envelope: ApiEnvelope<Vec<StackSummary>> =
        get_json_with_credentials("/stack/getUserStacks").await?;
    envelope.into_data()
}

/// Publishes a new stack. Subject to the email-verification gate.
pub async fn create_stack(request: &CreateStackRequest) -> Result<StackSummary, AppError> {
    let envelope: ApiEnvelope<StackSummary> =
        post_json_with_credentials("/stack/create", request).await?;
    envelope.into_data()
}

/// Removes one of the signed-in user's stacks.
pub async fn delete_stack(id: &str) -> Result<(), AppError> {
    delete_with_credentials(&format!("/stack/{id}")).await
}
