pub mod export;
mod http_client;
pub mod report;
pub mod sorare;
pub mod users;
