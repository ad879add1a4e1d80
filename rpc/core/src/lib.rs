//! # RPC Core
//!
//! Data structures returned by the Kasparov API together with the error
//! taxonomy of its handlers. Every error knows the status code and the
//! message a client gets to see; the full detail is reserved for the logs.

pub mod convert;
pub mod error;
pub mod model;

pub mod prelude {
    //! Re-exports of the most commonly used types and traits in this crate.
    pub use super::model::*;
}

pub use error::*;
pub use model::*;
