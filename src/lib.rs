pub mod errors;
pub mod net;

pub use errors::FetchError;
pub use net::{get, post, Response};
