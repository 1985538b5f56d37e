mod authorize;
mod middleware;
mod password;
mod token;

pub use authorize::{Decision, Target, authorize, decide};
pub use middleware::{AuthError, TOKEN_COOKIE, authenticate, cookie_value};
pub use password::{PasswordHasher, generate_password};
pub use token::{Identity, TokenRejection, TokenSigner};
