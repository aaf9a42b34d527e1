pub mod response;

pub use response::{domain_error_response, json_body, EMPTY_OBJECT};
