//! Authentication: v1 Basic credentials and v3 token providers.

mod basic;
mod refresh;
mod token;

pub use basic::BasicCredentials;
pub use refresh::RefreshingTokenProvider;
pub use token::AccessToken;
pub use token::StaticTokenProvider;
pub use token::TokenProvider;
