//! Crop (*cultivo*) record.

use serde::Serialize;

/// One planting cycle on a parcel.
///
/// Dates are kept as the strings the backend sends; this layer does not
/// parse or validate them. The three yield figures are optional and, when
/// present, always finite — non-finite values are normalized to absent
/// during decoding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cultivo {
    pub id: i64,
    pub nombre: String,
    pub variedad: Option<String>,
    pub fecha_siembra: Option<String>,
    pub fecha_cosecha: Option<String>,
    pub estado: String,
    /// Harvested production in kilograms.
    pub produccion_kg: Option<f64>,
    pub rendimiento_estimado: Option<f64>,
    pub rendimiento_real: Option<f64>,
}
