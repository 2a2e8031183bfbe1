use crate::shared::api::{get_json, post_form, post_trigger, ApiError};
use contracts::support::TicketListResponse;

/// Form field name the ingestion endpoint expects the file under.
const DOCUMENT_FIELD: &str = "document";

/// Fetch the current ticket list.
pub async fn list_tickets() -> Result<TicketListResponse, ApiError> {
    get_json("/test_zendesk").await
}

/// Trigger an AI reply run over open tickets. Fire-and-forget: the backend
/// does not report which tickets were affected.
pub async fn run_ai_reply() -> Result<(), ApiError> {
    post_trigger("/run_ai_reply").await
}

/// Upload one knowledge-base document for ingestion.
pub async fn upload_document(file: &web_sys::File) -> Result<(), ApiError> {
    let form = web_sys::FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
    form.append_with_blob(DOCUMENT_FIELD, file)
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    post_form("/upload_document", form).await
}
