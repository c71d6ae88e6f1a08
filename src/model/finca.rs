//! Parcel (*finca*) records and geometry.

use serde::Serialize;

use super::Cultivo;

/// A boundary vertex: latitude and longitude, both finite.
///
/// The decoder never constructs a `Coordenada` with a non-finite component;
/// pairs that fail that check are dropped before they get here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordenada {
    pub latitud: f64,
    pub longitud: f64,
}

/// A managed land parcel as listed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finca {
    pub id: i64,
    pub nombre: String,
    pub ubicacion: Option<String>,
    /// Area in hectares.
    pub superficie: Option<f64>,
    pub tipo_suelo: Option<String>,
    pub sistema_riego: Option<String>,
    pub estado: String,
    /// Boundary polygon, in server order. `None` covers both "no geometry
    /// recorded" and "geometry recorded but empty" — the backend does not
    /// let us tell those apart.
    pub coordenadas: Option<Vec<Coordenada>>,
}

/// Detail view of one parcel: the parcel itself plus its crops.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FincaDetalle {
    pub finca: Finca,
    pub fecha_registro: Option<String>,
    /// Crops on this parcel, possibly empty, never absent.
    pub cultivos: Vec<Cultivo>,
}
