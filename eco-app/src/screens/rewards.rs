//! Rewards catalog with the redeem confirmation dialog.

use crate::catalog;
use crate::error::Result as AppErrorResult;
use crate::screens::{header, prompt};

pub fn run() -> AppErrorResult<()> {
    header("Recompensas");
    println!("Troque suas Capivaras por benefícios.");

    let balance = catalog::CAPIVARAS_BALANCE;
    println!("Seu saldo: {balance} 🌿\n");

    let rewards = catalog::rewards();
    for reward in &rewards {
        let note = if reward.affordable_with(balance) {
            ""
        } else {
            " (saldo insuficiente)"
        };
        println!("  [{}] {} - {} 🌿{}", reward.id, reward.title, reward.cost, note);
        println!(
            "      {} | {} | válido até {}",
            reward.description, reward.partner, reward.validity
        );
    }

    let Some(choice) = prompt("\nResgatar (número) ou 'voltar':")? else {
        return Ok(());
    };
    if choice.is_empty() || choice == "voltar" {
        return Ok(());
    }

    let Ok(id) = choice.parse::<i64>() else {
        println!("Opção desconhecida: {choice}");
        return Ok(());
    };
    let Some(reward) = rewards.iter().find(|r| r.id == id) else {
        println!("Recompensa não encontrada: {id}");
        return Ok(());
    };

    if !reward.affordable_with(balance) {
        println!("Saldo insuficiente para {}.", reward.title);
        return Ok(());
    }

    // Confirmation dialog: cost and balance preview before committing.
    println!("\nResgatar recompensa: {} ({})", reward.title, reward.partner);
    println!("{}", reward.description);
    println!("Custo: {} 🌿", reward.cost);
    println!("Saldo após resgate: {} 🌿", reward.balance_after(balance));

    match prompt("Confirmar resgate? (sim/não):")? {
        Some(answer) if answer == "sim" => {
            println!("{} resgatado com sucesso! 🎉", reward.title);
        }
        _ => println!("Resgate cancelado."),
    }

    Ok(())
}
