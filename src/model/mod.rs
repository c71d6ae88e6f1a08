//! # Domain Records
//!
//! Immutable snapshots of what the backend returns: users, parcels
//! (*fincas*), their geometry, and crops (*cultivos*). Records are plain
//! data — construction happens once in [`crate::decode`] and nothing
//! mutates them afterwards.
//!
//! Field names keep the backend's Spanish vocabulary so the wire format,
//! the records and the UI copy all speak the same language.

mod cultivo;
mod finca;
mod usuario;

pub use cultivo::Cultivo;
pub use finca::{Coordenada, Finca, FincaDetalle};
pub use usuario::{Rol, Usuario};
