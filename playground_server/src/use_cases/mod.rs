// Use cases layer: word list workflows, delay simulation and canned failures.

pub mod delay;
pub mod error_catalog;
pub mod faults;
pub mod request_id;
pub mod synthetic;
pub mod word_list;

#[cfg(test)]
pub(crate) mod test_support;

pub use delay::DelayUseCase;
pub use error_catalog::ErrorCatalog;
pub use word_list::{
    AddWordOutcome, AddWordUseCase, ListWordsUseCase, RemoveWordUseCase, ResetWordListUseCase,
};
