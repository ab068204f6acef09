//! User profile - the record stored in the user directory.

use serde::{Deserialize, Serialize};

/// A registered (or temporary guest) user of the program.
///
/// The email is the unique key in the user directory. Phone and CPF are
/// stored already formatted, exactly as the registration form produced
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cpf: String,
}

impl UserProfile {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        cpf: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            cpf: cpf.into(),
        }
    }

    /// First word of the full name, used in greetings.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Initials for the avatar placeholder ("Ana Silva" -> "AS").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}
