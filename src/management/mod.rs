mod auth;

pub use auth::AccessToken;
pub use auth::TokenManager;
