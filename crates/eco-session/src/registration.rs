/// Raw registration input, as typed by the user.
///
/// CPF and phone may arrive with or without separators; the controller
/// normalizes both through the formatters before anything is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub phone: String,
}
