use crate::{Reward, RewardKind};

fn cinema_voucher() -> Reward {
    Reward {
        id: 1,
        title: "Vale Cinema".to_string(),
        description: "Ingresso grátis em salas 2D".to_string(),
        cost: 50,
        partner: "Cinépolis".to_string(),
        validity: "31/12/2025".to_string(),
        kind: RewardKind::Event,
    }
}

#[test]
fn test_affordable_with() {
    let reward = cinema_voucher();
    assert!(reward.affordable_with(50));
    assert!(reward.affordable_with(1250));
    assert!(!reward.affordable_with(49));
}

#[test]
fn test_balance_after() {
    let reward = cinema_voucher();
    assert_eq!(reward.balance_after(1250), 1200);
}
