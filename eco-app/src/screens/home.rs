//! Home dashboard: greeting, balance, stats and recent activity.

use crate::catalog;
use crate::screens::header;

use eco_core::UserProfile;

pub fn render(user: &UserProfile) {
    header("Recife Sustentável");
    println!("Bem-vindo de volta, {}! 👋\n", user.first_name());

    println!("Saldo de Capivaras: {} 🌿\n", catalog::CAPIVARAS_BALANCE);

    println!("Esta semana: {} descartes", catalog::DISPOSALS_THIS_WEEK);
    println!("Total de descartes: {}", catalog::DISPOSALS_TOTAL);
    println!("Nível: {}", catalog::USER_LEVEL);

    println!("\nDescartes recentes:");
    for disposal in catalog::recent_disposals() {
        let badge = if disposal.valid { "Válido" } else { "Inválido" };
        println!(
            "  {} - {} +{} 🌿 [{}]",
            disposal.at.format("%d/%m/%Y %H:%M"),
            disposal.kind.label(),
            disposal.capivaras,
            badge
        );
    }

    println!("\nVocê tem 0 penalidades ativas. Continue descartando corretamente!");
}
