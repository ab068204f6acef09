//! Profile screen: identity card, stats and logout.

use crate::catalog;
use crate::error::Result as AppErrorResult;
use crate::screens::{header, prompt};

use eco_session::SessionController;
use eco_store::UserDirectory;

/// Returns `true` when the user logged out.
pub fn run<D: UserDirectory>(controller: &mut SessionController<D>) -> AppErrorResult<bool> {
    let Some(user) = controller.current_user() else {
        return Ok(true);
    };

    header("Perfil");
    println!("({}) {}", user.initials(), user.name);
    println!(
        "Nível: {} | Membro desde {}",
        catalog::USER_LEVEL,
        catalog::MEMBER_SINCE
    );

    println!("\nEmail: {}", user.email);
    println!("Telefone: {}", user.phone);
    println!("CPF: {}", user.cpf);

    println!(
        "\nDescartes: {} | Capivaras: {}",
        catalog::DISPOSALS_TOTAL,
        catalog::CAPIVARAS_BALANCE
    );

    match prompt("\nDigite 'sair' para encerrar a sessão (Enter volta ao início):")? {
        Some(command) if command == "sair" => {
            controller.logout();
            println!("Sessão encerrada.");
            Ok(true)
        }
        _ => Ok(false),
    }
}
