/*
[INPUT]:  HTTP client configuration and API method names
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod links;

pub use error::{Result, VkError};

pub use client::{API_BASE_URL, ClientConfig, Credentials, DEFAULT_API_VERSION, VkClient};
