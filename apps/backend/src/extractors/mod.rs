pub mod auth_user;

pub use auth_user::{current_identity, current_principal, AuthUser};
