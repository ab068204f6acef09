use crate::UserProfile;

#[test]
fn test_user_profile_new() {
    let profile = UserProfile::new(
        1,
        "Ana Silva",
        "ana@example.com",
        "(81) 99999-8888",
        "123.456.789-01",
    );

    assert_eq!(profile.id, 1);
    assert_eq!(profile.name, "Ana Silva");
    assert_eq!(profile.email, "ana@example.com");
    assert_eq!(profile.phone, "(81) 99999-8888");
    assert_eq!(profile.cpf, "123.456.789-01");
}

#[test]
fn test_first_name() {
    let profile = UserProfile::new(1, "Ana Silva", "a@b.com", "", "");
    assert_eq!(profile.first_name(), "Ana");

    let single = UserProfile::new(2, "Ana", "a@b.com", "", "");
    assert_eq!(single.first_name(), "Ana");
}

#[test]
fn test_initials() {
    let profile = UserProfile::new(1, "Ana Silva", "a@b.com", "", "");
    assert_eq!(profile.initials(), "AS");
}

#[test]
fn test_serde_round_trip() {
    let profile = UserProfile::new(
        7,
        "João Pereira",
        "joao@example.com",
        "(81) 98888-7777",
        "987.654.321-00",
    );

    let json = serde_json::to_string(&profile).unwrap();
    let back: UserProfile = serde_json::from_str(&json).unwrap();
    assert_eq!(back, profile);
}
