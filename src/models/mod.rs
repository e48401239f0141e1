pub mod plot;
pub mod request;
