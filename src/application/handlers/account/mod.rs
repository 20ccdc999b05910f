//! Account query and sign-in/sign-up command handlers.

mod get_profile;
mod sign_in;
mod sign_up;

pub use get_profile::{GetProfileHandler, GetProfileQuery};
pub use sign_in::{SignInCommand, SignInHandler};
pub use sign_up::{SignUpCommand, SignUpHandler};
