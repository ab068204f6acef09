
use eco_core::UserProfile;

pub(crate) fn ana() -> UserProfile {
    UserProfile::new(
        1,
        "Ana Silva",
        "ana@example.com",
        "(81) 99999-8888",
        "123.456.789-01",
    )
}

pub(crate) fn joao() -> UserProfile {
    UserProfile::new(
        2,
        "João Pereira",
        "joao@example.com",
        "(81) 98888-7777",
        "987.654.321-00",
    )
}
