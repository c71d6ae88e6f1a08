//! Authenticated user record.

use serde::Serialize;

/// Role assigned to a user by the backend.
///
/// Unknown or missing role strings decode to [`Rol::Usuario`]. That is a
/// deliberate fail-open policy: an account with a role this client does not
/// recognize still works, it just gets no admin affordances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Rol {
    Admin,
    Usuario,
}

/// A user as returned by the login endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Usuario {
    pub id: i64,
    pub nombre: String,
    pub apellidos: String,
    pub email: String,
    pub username: String,
    pub rol: Rol,
}

impl Usuario {
    /// First name and surname(s) joined by a space, skipping blank parts.
    pub fn nombre_completo(&self) -> String {
        [self.nombre.as_str(), self.apellidos.as_str()]
            .iter()
            .filter(|part| !part.trim().is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
