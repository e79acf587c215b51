/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public VK link adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    API_BASE_URL,
    ClientConfig,
    Credentials,
    DEFAULT_API_VERSION,
    Result,
    VkClient,
    VkError,
};

// Re-export all types
pub use types::*;
