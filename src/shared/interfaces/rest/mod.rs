pub mod openapi;
pub mod success_headers;
