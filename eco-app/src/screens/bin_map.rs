//! Bin map: the static site catalog with client-side filtering.

use crate::catalog;
use crate::error::Result as AppErrorResult;
use crate::screens::{header, prompt};

use eco_core::WasteKind;

use std::str::FromStr;

pub fn run() -> AppErrorResult<()> {
    header("Mapa de Lixeiras");
    println!("Encontre lixeiras inteligentes próximas.\n");

    let kinds: Vec<&str> = WasteKind::ALL.iter().map(|k| k.as_str()).collect();
    println!("Filtros: todos, {}", kinds.join(", "));

    let Some(choice) = prompt("Tipo de resíduo:")? else {
        return Ok(());
    };

    let filter = match choice.as_str() {
        "" | "todos" => None,
        other => match WasteKind::from_str(other) {
            Ok(kind) => Some(kind),
            Err(_) => {
                println!("Tipo desconhecido: {other} (mostrando todos)");
                None
            }
        },
    };

    let sites: Vec<_> = catalog::bin_sites()
        .into_iter()
        .filter(|site| site.matches(filter))
        .collect();

    println!("\nLixeiras próximas ({}):", sites.len());
    for site in &sites {
        println!(
            "  {} [{}] - {} - {:.1} km",
            site.location,
            site.kind.label(),
            site.status.label(),
            site.distance_km
        );
        if site.status.is_active() {
            println!("      Capacidade: {}%", site.capacity_pct);
        }
    }

    println!("\nLegenda: Ativa = aceita descartes | Cheia = aguarde coleta | Offline = indisponível");

    Ok(())
}
