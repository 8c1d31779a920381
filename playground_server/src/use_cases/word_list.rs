use crate::domain::errors::WordListError;
use crate::domain::ports::WordStore;

// How an add request was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddWordOutcome {
    Added,
    Duplicate,
    // Non-empty input that trimmed down to nothing.
    Blank,
}

// Response returned by the add word use case.
pub struct AddWordResponse {
    pub outcome: AddWordOutcome,
    pub words: Vec<String>,
}

// Add word use case with injected dependencies.
pub struct AddWordUseCase<S> {
    pub store: S,
}

impl<S> AddWordUseCase<S>
where
    S: WordStore,
{
    pub async fn execute(&self, word: &str) -> Result<AddWordResponse, WordListError> {
        if word.is_empty() {
            return Err(WordListError::WordRequired);
        }

        let mutation = self
            .store
            .add(word)
            .await
            .map_err(WordListError::StorageFailure)?;

        let outcome = if mutation.changed {
            AddWordOutcome::Added
        } else if word.trim().is_empty() {
            AddWordOutcome::Blank
        } else {
            AddWordOutcome::Duplicate
        };

        Ok(AddWordResponse {
            outcome,
            words: mutation.words,
        })
    }
}

// Response returned by the remove word use case.
pub struct RemoveWordResponse {
    pub removed: bool,
    pub words: Vec<String>,
}

pub struct RemoveWordUseCase<S> {
    pub store: S,
}

impl<S> RemoveWordUseCase<S>
where
    S: WordStore,
{
    pub async fn execute(&self, word: &str) -> Result<RemoveWordResponse, WordListError> {
        if word.is_empty() {
            return Err(WordListError::WordRequired);
        }

        let mutation = self
            .store
            .remove(word)
            .await
            .map_err(WordListError::StorageFailure)?;

        Ok(RemoveWordResponse {
            removed: mutation.changed,
            words: mutation.words,
        })
    }
}

pub struct ListWordsUseCase<S> {
    pub store: S,
}

impl<S> ListWordsUseCase<S>
where
    S: WordStore,
{
    pub async fn execute(&self) -> Result<Vec<String>, WordListError> {
        self.store
            .list()
            .await
            .map_err(WordListError::StorageFailure)
    }
}

// Response returned by the reset use case.
pub struct ResetWordListResponse {
    pub previous_count: usize,
}

pub struct ResetWordListUseCase<S> {
    pub store: S,
}

impl<S> ResetWordListUseCase<S>
where
    S: WordStore,
{
    pub async fn execute(&self) -> Result<ResetWordListResponse, WordListError> {
        let previous_count = self
            .store
            .reset()
            .await
            .map_err(WordListError::StorageFailure)?;

        Ok(ResetWordListResponse { previous_count })
    }
}
