//! Service layer

pub mod verification;

pub use verification::{Fast2faClient, POLL_INTERVAL};
