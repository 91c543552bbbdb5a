pub mod fetch;
pub mod response;

pub use fetch::{get, post};
pub use response::Response;
