mod guest;

use crate::{AdminIdentity, SessionController};

use eco_store::MemoryDirectory;

pub(crate) fn new_controller() -> SessionController<MemoryDirectory> {
    SessionController::new(
        MemoryDirectory::new(),
        AdminIdentity {
            email: "admin@recife.gov.br".to_string(),
            name: "Administrador".to_string(),
        },
    )
}
