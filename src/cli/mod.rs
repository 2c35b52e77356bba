mod migrate;
mod server;
mod token;

pub use migrate::{migrate, reset, run_migrations};
pub use server::serve;
pub use token::token;
