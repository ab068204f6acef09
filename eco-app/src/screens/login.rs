//! Login view: sign in, sign up, admin shortcut and the dev-mode
//! directory helpers.

use crate::error::Result as AppErrorResult;
use crate::screens::{header, prompt};

use eco_core::format::{format_cpf, format_phone, is_valid_cpf, is_valid_phone};
use eco_session::{LoginOutcome, RegistrationForm, SessionController, SessionError};
use eco_store::UserDirectory;

use log::error;

/// What the login view decided.
pub enum LoginAction {
    Continue,
    Quit,
}

pub fn run<D: UserDirectory>(
    controller: &mut SessionController<D>,
) -> AppErrorResult<LoginAction> {
    header("Recife Sustentável");
    println!("Descarte certo, benefícios reais.\n");
    println!("  [1] Entrar");
    println!("  [2] Cadastrar (ganhe 50 Capivaras)");
    println!("  [3] Entrar como administrador");
    println!("  [4] Ver usuários cadastrados");
    println!("  [5] Limpar dados");
    println!("  [0] Sair");

    let Some(choice) = prompt("\nOpção:")? else {
        return Ok(LoginAction::Quit);
    };

    match choice.as_str() {
        "1" => sign_in(controller)?,
        "2" => sign_up(controller)?,
        "3" => {
            controller.admin_login();
            println!("Bem-vindo, administrador!");
        }
        "4" => show_users(controller)?,
        "5" => {
            controller.directory_mut().clear_all()?;
            println!("Todos os usuários foram removidos");
        }
        "0" => return Ok(LoginAction::Quit),
        "" => {}
        other => println!("Opção desconhecida: {other}"),
    }

    Ok(LoginAction::Continue)
}

fn sign_in<D: UserDirectory>(controller: &mut SessionController<D>) -> AppErrorResult<()> {
    let Some(email) = prompt("Email:")? else {
        return Ok(());
    };
    if email.is_empty() {
        println!("Informe um email.");
        return Ok(());
    }

    // Accepted and ignored: the pilot has no real credential check.
    let _password = prompt("Senha:")?;

    match controller.login(&email)? {
        LoginOutcome::Known(profile) => {
            println!("Bem-vindo de volta, {}! 👋", profile.first_name());
        }
        LoginOutcome::Guest(_) => {
            println!("Bem-vindo! Faça seu cadastro completo para salvar seus dados.");
        }
    }

    Ok(())
}

fn sign_up<D: UserDirectory>(controller: &mut SessionController<D>) -> AppErrorResult<()> {
    let Some(name) = prompt("Nome completo:")? else {
        return Ok(());
    };

    let Some(cpf) = prompt("CPF:")? else {
        return Ok(());
    };
    let cpf = format_cpf(&cpf);
    println!("CPF: {cpf}");
    if !is_valid_cpf(&cpf) {
        println!("Digite os 11 dígitos do CPF");
    }

    let Some(phone) = prompt("Telefone:")? else {
        return Ok(());
    };
    let phone = format_phone(&phone);
    println!("Telefone: {phone}");
    if !is_valid_phone(&phone) {
        println!("Digite o número completo");
    }

    let Some(email) = prompt("Email:")? else {
        return Ok(());
    };
    let _password = prompt("Senha:")?;

    let form = RegistrationForm {
        name,
        email,
        cpf,
        phone,
    };

    match controller.register(form) {
        Ok(profile) => {
            println!(
                "Bem-vindo, {}! +50 Capivaras de boas-vindas 🎉",
                profile.first_name()
            );
        }
        Err(SessionError::EmailTaken { .. }) => {
            println!("Este email já está cadastrado! Use a opção \"Entrar\" para fazer login.");
        }
        Err(e) => {
            error!("Registration failed: {e}");
            println!("Erro ao cadastrar. Tente novamente.");
        }
    }

    Ok(())
}

fn show_users<D: UserDirectory>(controller: &SessionController<D>) -> AppErrorResult<()> {
    let users = controller.directory().list_all()?;
    println!("{} usuário(s) cadastrado(s)", users.len());
    for user in users {
        println!("  {} <{}>", user.name, user.email);
    }
    Ok(())
}
