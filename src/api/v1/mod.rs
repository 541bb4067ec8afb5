//! V1 API handlers.

mod contacts;


pub use contacts::*;
