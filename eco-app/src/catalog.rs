//! Static reference data baked into the client.
//!
//! Bins, rewards and the disposal history are read-only mock catalogs; the
//! pilot has no backend to fetch them from.

use eco_core::{BinSite, BinStatus, Disposal, Reward, RewardKind, WasteKind};

use chrono::{TimeZone, Utc};

/// Mocked Capivara balance shown across the screens.
pub const CAPIVARAS_BALANCE: i64 = 1250;

/// Dashboard stats.
pub const DISPOSALS_THIS_WEEK: u32 = 12;
pub const DISPOSALS_TOTAL: u32 = 156;
pub const USER_LEVEL: &str = "Eco-Herói";
pub const MEMBER_SINCE: &str = "11/2025";

/// The six smart-bin sites around town.
pub fn bin_sites() -> Vec<BinSite> {
    vec![
        BinSite {
            id: 1,
            location: "Praça do Derby".to_string(),
            kind: WasteKind::Recyclable,
            status: BinStatus::Active,
            capacity_pct: 75,
            distance_km: 0.3,
            latitude: -8.0522,
            longitude: -34.8956,
        },
        BinSite {
            id: 2,
            location: "Parque da Jaqueira".to_string(),
            kind: WasteKind::Organic,
            status: BinStatus::Active,
            capacity_pct: 45,
            distance_km: 0.8,
            latitude: -8.0389,
            longitude: -34.8989,
        },
        BinSite {
            id: 3,
            location: "Shopping Recife".to_string(),
            kind: WasteKind::Electronic,
            status: BinStatus::Active,
            capacity_pct: 30,
            distance_km: 1.2,
            latitude: -8.1194,
            longitude: -34.9050,
        },
        BinSite {
            id: 4,
            location: "Boa Viagem".to_string(),
            kind: WasteKind::Recyclable,
            status: BinStatus::Full,
            capacity_pct: 95,
            distance_km: 2.5,
            latitude: -8.1277,
            longitude: -34.8948,
        },
        BinSite {
            id: 5,
            location: "Casa Forte".to_string(),
            kind: WasteKind::Metal,
            status: BinStatus::Active,
            capacity_pct: 60,
            distance_km: 1.5,
            latitude: -8.0265,
            longitude: -34.9264,
        },
        BinSite {
            id: 6,
            location: "Pina".to_string(),
            kind: WasteKind::Glass,
            status: BinStatus::Offline,
            capacity_pct: 0,
            distance_km: 3.2,
            latitude: -8.0889,
            longitude: -34.8756,
        },
    ]
}

/// The reward catalog.
pub fn rewards() -> Vec<Reward> {
    vec![
        Reward {
            id: 1,
            title: "Vale Cinema".to_string(),
            description: "Ingresso grátis em salas 2D".to_string(),
            cost: 50,
            partner: "Cinépolis".to_string(),
            validity: "31/12/2025".to_string(),
            kind: RewardKind::Event,
        },
        Reward {
            id: 2,
            title: "Desconto no Transporte".to_string(),
            description: "R$ 30 de crédito no VEM".to_string(),
            cost: 30,
            partner: "Grande Recife".to_string(),
            validity: "31/01/2026".to_string(),
            kind: RewardKind::Credit,
        },
        Reward {
            id: 3,
            title: "Vale Shopping".to_string(),
            description: "R$ 50 de desconto".to_string(),
            cost: 50,
            partner: "Shopping Recife".to_string(),
            validity: "30/11/2025".to_string(),
            kind: RewardKind::Voucher,
        },
        Reward {
            id: 4,
            title: "Desconto Restaurante".to_string(),
            description: "20% de desconto até R$40".to_string(),
            cost: 40,
            partner: "iFood".to_string(),
            validity: "31/12/2025".to_string(),
            kind: RewardKind::Discount,
        },
        Reward {
            id: 5,
            title: "Crédito Biblioteca".to_string(),
            description: "Mensalidade grátis por 1 mês".to_string(),
            cost: 80,
            partner: "Biblioteca Municipal".to_string(),
            validity: "31/03/2026".to_string(),
            kind: RewardKind::Credit,
        },
        Reward {
            id: 6,
            title: "Vale Farmácia".to_string(),
            description: "R$ 25 em produtos".to_string(),
            cost: 25,
            partner: "Farmácia Popular".to_string(),
            validity: "31/12/2025".to_string(),
            kind: RewardKind::Voucher,
        },
    ]
}

/// Recent disposals shown on the home screen.
pub fn recent_disposals() -> Vec<Disposal> {
    vec![
        Disposal::new(
            1,
            WasteKind::Recyclable,
            Utc.with_ymd_and_hms(2025, 10, 23, 14, 30, 0).unwrap(),
        ),
        Disposal::new(
            2,
            WasteKind::Organic,
            Utc.with_ymd_and_hms(2025, 10, 22, 9, 15, 0).unwrap(),
        ),
        Disposal::new(
            3,
            WasteKind::Electronic,
            Utc.with_ymd_and_hms(2025, 10, 21, 18, 45, 0).unwrap(),
        ),
    ]
}
