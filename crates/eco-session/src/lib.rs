pub mod controller;
pub mod error;
pub mod registration;

pub use controller::{AdminIdentity, LoginOutcome, SessionController, SessionState};
pub use error::{Result, SessionError};
pub use registration::RegistrationForm;

#[cfg(test)]
mod tests;
