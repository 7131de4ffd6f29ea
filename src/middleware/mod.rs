pub mod auth_gate;
pub mod cors;
pub mod request_trace;
