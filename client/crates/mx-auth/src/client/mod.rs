pub(crate) mod client;
pub(crate) mod error;

pub use client::AuthClient;
pub use error::{ClientError, Result as ClientResult};
