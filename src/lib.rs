pub mod alert;
pub mod cli;
pub mod config;
pub mod render;
pub mod transport;

pub use transport::{MailTransport, TransportError};
