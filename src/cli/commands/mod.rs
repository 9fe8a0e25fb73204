pub mod backup;
pub mod config;
pub mod days;
pub mod del;
pub mod edit;
pub mod export;
pub mod history;
pub mod init;
pub mod log;
pub mod sessions;
