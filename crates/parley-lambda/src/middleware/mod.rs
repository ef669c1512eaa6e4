pub mod identity;
pub mod request_log;
