pub mod errors;
pub mod faults;
pub mod region;
pub mod timing;
pub mod words;
