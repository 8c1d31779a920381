// Domain layer: word list rules, delay rules and error shapes.

pub mod delay;
pub mod entities;
pub mod errors;
pub mod ports;
pub mod words;

pub use delay::{DelayPolicy, DelayRequest, MAX_DELAY_MS};
pub use entities::{
    ErrorExtension, ErrorPayload, FieldError, PostErrorPayload, TimingReport, iso_timestamp,
};
pub use errors::{ErrorKind, SimulatedFault, WordListError};
pub use ports::{Clock, RandomSource, WordMutation, WordStore};
pub use words::WordRegistry;
