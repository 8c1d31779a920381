use crate::domain::entities::iso_timestamp;
use crate::domain::errors::WordListError;
use crate::domain::ports::Clock;
use crate::interface_adapters::protocol::{
    ResetWordListResponse, WordChangeResponse, WordErrorResponse, WordListResponse,
};
use crate::interface_adapters::state::{AppState, SystemClock};
use crate::use_cases::{
    AddWordOutcome, AddWordUseCase, ListWordsUseCase, RemoveWordUseCase, ResetWordListUseCase,
};
use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use serde_json::Value;
use tracing::{info, warn};

type WordError = (StatusCode, Json<WordErrorResponse>);

// Handler for adding a word to the shared list.
#[tracing::instrument(name = "add_word", skip_all)]
pub async fn add_word(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<WordChangeResponse>, WordError> {
    let payload = parse_body(&body, WordErrorContext::Add)?;
    let word = word_field(&payload);

    let use_case = AddWordUseCase {
        store: state.word_store(),
    };
    let result = use_case
        .execute(word)
        .await
        .map_err(|err| map_word_error(err, WordErrorContext::Add))?;

    let message = match result.outcome {
        AddWordOutcome::Added => format!("Word \"{word}\" added successfully"),
        AddWordOutcome::Duplicate => format!("Word \"{word}\" already exists in the list"),
        AddWordOutcome::Blank => format!("Word \"{word}\" is empty after trimming"),
    };
    info!(outcome = ?result.outcome, word_count = result.words.len(), "add word handled");

    Ok(Json(WordChangeResponse {
        success: result.outcome == AddWordOutcome::Added,
        message,
        word: word.to_string(),
        word_count: result.words.len(),
        word_list: result.words,
        timestamp: now_iso(),
    }))
}

// Handler for reading the shared list.
pub async fn list_words(
    State(state): State<AppState>,
) -> Result<Json<WordListResponse>, WordError> {
    let use_case = ListWordsUseCase {
        store: state.word_store(),
    };
    let words = use_case
        .execute()
        .await
        .map_err(|err| map_word_error(err, WordErrorContext::List))?;

    Ok(Json(WordListResponse {
        word_count: words.len(),
        word_list: words,
        timestamp: now_iso(),
    }))
}

// Handler for removing an exact word from the shared list.
#[tracing::instrument(name = "remove_word", skip_all)]
pub async fn remove_word(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<WordChangeResponse>, WordError> {
    let payload = parse_body(&body, WordErrorContext::Remove)?;
    let word = word_field(&payload);

    let use_case = RemoveWordUseCase {
        store: state.word_store(),
    };
    let result = use_case
        .execute(word)
        .await
        .map_err(|err| map_word_error(err, WordErrorContext::Remove))?;

    let message = if result.removed {
        format!("Word \"{word}\" removed successfully")
    } else {
        format!("Word \"{word}\" was not found in the list")
    };

    Ok(Json(WordChangeResponse {
        success: result.removed,
        message,
        word: word.to_string(),
        word_count: result.words.len(),
        word_list: result.words,
        timestamp: now_iso(),
    }))
}

// Handler for clearing the shared list; served for both GET and POST.
#[tracing::instrument(name = "reset_word_list", skip_all)]
pub async fn reset_word_list(
    State(state): State<AppState>,
) -> Result<Json<ResetWordListResponse>, WordError> {
    let use_case = ResetWordListUseCase {
        store: state.word_store(),
    };
    let result = use_case
        .execute()
        .await
        .map_err(|err| map_word_error(err, WordErrorContext::Reset))?;

    info!(previous_count = result.previous_count, "word list reset");

    Ok(Json(ResetWordListResponse {
        success: true,
        message: format!(
            "Word list reset successfully. Removed {} words.",
            result.previous_count
        ),
        previous_count: result.previous_count,
        current_count: 0,
        timestamp: now_iso(),
    }))
}

fn now_iso() -> String {
    iso_timestamp(SystemClock.now())
}

// Missing, null, non-string and empty values all collapse to "".
fn word_field(payload: &Value) -> &str {
    payload
        .get("word")
        .and_then(Value::as_str)
        .unwrap_or_default()
}

fn parse_body(body: &[u8], context: WordErrorContext) -> Result<Value, WordError> {
    serde_json::from_slice(body).map_err(|err| {
        warn!(error = %err, "word request body is not valid JSON");
        failure_response(context, err.to_string())
    })
}

// Maps word list errors to HTTP responses by endpoint context.
#[derive(Clone, Copy)]
enum WordErrorContext {
    Add,
    Remove,
    List,
    Reset,
}

impl WordErrorContext {
    fn failure_title(self) -> &'static str {
        match self {
            WordErrorContext::Add => "Failed to add word",
            WordErrorContext::Remove => "Failed to remove word",
            WordErrorContext::List => "Failed to load word list",
            WordErrorContext::Reset => "Failed to reset word list",
        }
    }
}

fn failure_response(context: WordErrorContext, message: String) -> WordError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(WordErrorResponse {
            error: context.failure_title(),
            success: false,
            message: Some(message),
        }),
    )
}

fn map_word_error(err: WordListError, context: WordErrorContext) -> WordError {
    match err {
        WordListError::WordRequired => (
            StatusCode::BAD_REQUEST,
            Json(WordErrorResponse {
                error: "Word is required",
                success: false,
                message: None,
            }),
        ),
        WordListError::StorageFailure(reason) => {
            warn!(%reason, "word store failure");
            failure_response(context, reason)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn when_word_field_is_not_a_string_then_it_is_treated_as_empty() {
        assert_eq!(word_field(&json!({ "word": 5 })), "");
        assert_eq!(word_field(&json!({ "word": null })), "");
        assert_eq!(word_field(&json!({})), "");
        assert_eq!(word_field(&json!(["word"])), "");
        assert_eq!(word_field(&json!({ "word": " ok " })), " ok ");
    }

    #[test]
    fn when_storage_fails_then_reset_maps_to_500_with_reset_title() {
        let (status, Json(body)) = map_word_error(
            WordListError::StorageFailure("reset failed".to_string()),
            WordErrorContext::Reset,
        );

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Failed to reset word list");
        assert!(!body.success);
        assert_eq!(body.message.as_deref(), Some("reset failed"));
    }

    #[test]
    fn when_word_is_required_then_maps_to_400_without_message() {
        let (status, Json(body)) = map_word_error(WordListError::WordRequired, WordErrorContext::Add);

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Word is required");
        assert!(body.message.is_none());
    }
}
