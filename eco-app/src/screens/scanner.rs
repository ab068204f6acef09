//! Scanner screen: idle -> scanning -> success | error.
//!
//! An unrecognized scan is terminal; only the user restarts it. A
//! recognized one offers confirm (credits the award and returns home) or
//! a rescan.

use crate::error::Result as AppErrorResult;
use crate::scanner::{ScanEngine, ScanOutcome};
use crate::screens::{header, prompt};

use eco_core::WasteKind;

use rand::Rng;

pub async fn run<R: Rng>(engine: &mut ScanEngine<R>) -> AppErrorResult<()> {
    header("Scanner AI");
    println!("Escaneie seu resíduo.");

    let labels: Vec<&str> = WasteKind::ALL.iter().map(|k| k.label()).collect();
    println!("Tipos de resíduo reconhecidos: {}\n", labels.join(", "));

    loop {
        let Some(command) = prompt("Digite 'iniciar' para escanear (ou 'voltar'):")? else {
            return Ok(());
        };

        match command.as_str() {
            "voltar" => return Ok(()),
            "iniciar" => {
                println!("Analisando resíduo...");

                match engine.scan().await {
                    ScanOutcome::Recognized(reading) => {
                        println!("\nDescarte válido! [{}]", reading.kind.label());
                        println!("+{} 🌿", reading.capivaras);
                        println!("Peso estimado: {:.2} kg\n", reading.weight_kg);

                        let Some(answer) =
                            prompt("Digite 'confirmar' para contabilizar (ou 'voltar'):")?
                        else {
                            return Ok(());
                        };

                        if answer == "confirmar" {
                            println!(
                                "Parabéns! +{} Capivaras contabilizadas 🎉",
                                reading.capivaras
                            );
                            return Ok(());
                        }
                        if answer == "voltar" {
                            return Ok(());
                        }
                        // Anything else: back to idle for a rescan.
                    }
                    ScanOutcome::Unrecognized => {
                        println!("\nDescarte não reconhecido.");
                        println!("Tente novamente com melhor iluminação.\n");
                    }
                }
            }
            "" => {}
            other => println!("Comando desconhecido: {other}"),
        }
    }
}
