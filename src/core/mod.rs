pub mod backup;
pub mod codec;
pub mod dedupe;
pub mod history;
pub mod locate;
pub mod log;
pub mod mutate;
pub mod session;
