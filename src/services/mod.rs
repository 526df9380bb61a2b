pub use auth::*;
pub use seed::*;

mod auth;
mod seed;
