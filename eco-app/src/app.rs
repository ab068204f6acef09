//! Composition root and top-level view switch.
//!
//! Exactly one view is active at a time, decided by the session state:
//! logged out shows the login screen, a regular session the mobile tabs,
//! the admin session the admin panel.

use crate::error::Result as AppErrorResult;
use crate::scanner::ScanEngine;
use crate::screens::login::LoginAction;
use crate::screens::{admin, bin_map, home, login, profile, prompt, rewards, scanner};

use eco_config::Config;
use eco_session::{AdminIdentity, SessionController};
use eco_store::{JsonFileDirectory, UserDirectory};

use log::info;
use rand::rngs::StdRng;

pub struct App {
    controller: SessionController<JsonFileDirectory>,
    engine: ScanEngine<StdRng>,
}

impl App {
    pub fn new(config: &Config) -> AppErrorResult<Self> {
        let directory = JsonFileDirectory::open(config.storage_path()?)?;
        info!("User directory has {} profiles", directory.count()?);

        let controller = SessionController::new(
            directory,
            AdminIdentity {
                email: config.auth.admin_email.clone(),
                name: config.auth.admin_name.clone(),
            },
        );
        let engine = ScanEngine::from_config(&config.scanner);

        Ok(Self { controller, engine })
    }

    pub async fn run(&mut self) -> AppErrorResult<()> {
        loop {
            if self.controller.is_admin() {
                if !admin::run(&mut self.controller)? {
                    break;
                }
            } else if self.controller.is_logged_in() {
                if !self.run_tabs().await? {
                    break;
                }
            } else {
                match login::run(&mut self.controller)? {
                    LoginAction::Quit => break,
                    LoginAction::Continue => {}
                }
            }
        }

        println!("Até logo! 🌿");
        Ok(())
    }

    /// The mobile tab bar. Returns `false` when the client should exit.
    async fn run_tabs(&mut self) -> AppErrorResult<bool> {
        loop {
            // Clone: the screens below need the controller mutably.
            let Some(user) = self.controller.current_user().cloned() else {
                break;
            };
            home::render(&user);

            println!("\nAbas: escanear | lixeiras | recompensas | perfil | sair");
            let Some(command) = prompt("eco>")? else {
                return Ok(false);
            };

            match command.as_str() {
                "escanear" => scanner::run(&mut self.engine).await?,
                "lixeiras" => bin_map::run()?,
                "recompensas" => rewards::run()?,
                "perfil" => {
                    if profile::run(&mut self.controller)? {
                        // Logged out; back to the top-level switch.
                        return Ok(true);
                    }
                }
                "sair" => return Ok(false),
                "" => {}
                other => println!("Comando desconhecido: {other}"),
            }
        }

        Ok(true)
    }
}
