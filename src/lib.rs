pub mod config;
pub mod dispatch;
pub mod error;
pub mod parse;
pub mod prompt;
pub mod response;
pub mod server;
