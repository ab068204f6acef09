//! Admin panel: directory overview for the municipal operator.

use crate::error::Result as AppErrorResult;
use crate::screens::{header, prompt};

use eco_session::SessionController;
use eco_store::UserDirectory;

/// Returns `false` when the client should exit.
pub fn run<D: UserDirectory>(controller: &mut SessionController<D>) -> AppErrorResult<bool> {
    header("Painel do Administrador");

    let count = controller.directory().count()?;
    println!("{count} usuário(s) cadastrado(s)\n");

    println!("  [1] Listar usuários");
    println!("  [2] Limpar dados");
    println!("  [0] Sair da conta");

    let Some(choice) = prompt("\nOpção:")? else {
        return Ok(false);
    };

    match choice.as_str() {
        "1" => {
            for user in controller.directory().list_all()? {
                println!(
                    "  #{} {} <{}> {} {}",
                    user.id, user.name, user.email, user.phone, user.cpf
                );
            }
        }
        "2" => {
            controller.directory_mut().clear_all()?;
            println!("Todos os usuários foram removidos");
        }
        "0" => {
            controller.logout();
        }
        "" => {}
        other => println!("Opção desconhecida: {other}"),
    }

    Ok(true)
}
