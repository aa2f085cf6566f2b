mod api_key;
mod request_id;

pub use api_key::api_key_middleware;
pub use request_id::request_id_middleware;
