//! Record and list decoders built on the field extraction rules.

use serde_json::Value;

use super::{finite, id, opt_f64, opt_string, req_string};
use crate::model::{Coordenada, Cultivo, Finca, Rol, Usuario};

/// Decode a user object from the login payload.
pub fn usuario(value: &Value) -> Usuario {
    Usuario {
        id: id(value, "id"),
        nombre: req_string(value, "nombre"),
        apellidos: req_string(value, "apellidos"),
        email: req_string(value, "email"),
        username: req_string(value, "username"),
        rol: rol(value),
    }
}

/// Decode the role field, matching case-insensitively and falling open to
/// [`Rol::Usuario`] for anything unrecognized or missing.
fn rol(value: &Value) -> Rol {
    match req_string(value, "rol").to_uppercase().as_str() {
        "ADMIN" => Rol::Admin,
        _ => Rol::Usuario,
    }
}

/// Decode one parcel object.
pub fn finca(value: &Value) -> Finca {
    Finca {
        id: id(value, "id"),
        nombre: req_string(value, "nombre"),
        ubicacion: opt_string(value, "ubicacion"),
        superficie: opt_f64(value, "superficie"),
        tipo_suelo: opt_string(value, "tipo_suelo"),
        sistema_riego: opt_string(value, "sistema_riego"),
        estado: req_string(value, "estado"),
        coordenadas: value.get("coordenadas").and_then(coordenadas),
    }
}

/// Decode a parcel array tolerantly: a null, absent or non-array value
/// decodes to an empty list, and non-object entries are skipped.
pub fn fincas(value: Option<&Value>) -> Vec<Finca> {
    let Some(items) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    items.iter().filter(|item| item.is_object()).map(finca).collect()
}

/// Decode a crop array with the same tolerant list rule as [`fincas`].
pub fn cultivos(value: Option<&Value>) -> Vec<Cultivo> {
    let Some(items) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .filter(|item| item.is_object())
        .map(|item| Cultivo {
            id: id(item, "id"),
            nombre: req_string(item, "nombre"),
            variedad: opt_string(item, "variedad"),
            fecha_siembra: opt_string(item, "fecha_siembra"),
            fecha_cosecha: opt_string(item, "fecha_cosecha"),
            estado: req_string(item, "estado"),
            produccion_kg: opt_f64(item, "produccion_kg"),
            rendimiento_estimado: opt_f64(item, "rendimiento_estimado"),
            rendimiento_real: opt_f64(item, "rendimiento_real"),
        })
        .collect()
}

/// Decode a coordinate sequence, polymorphic over the wire representation.
///
/// The backend sends boundaries either as an array of `[lat, lon]` pairs or
/// as a string containing the JSON text of such an array; the string case
/// is parsed once and then handled like the array case. Pairs with a
/// missing or non-finite component are skipped. Anything else — including
/// an empty or all-invalid array, or a string that is not valid JSON array
/// text — decodes to `None`. An empty boundary is indistinguishable from an
/// absent one; this mirrors the backend and is a known ambiguity.
pub fn coordenadas(value: &Value) -> Option<Vec<Coordenada>> {
    match value {
        Value::Array(items) => pairs(items),
        Value::String(text) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Array(items)) => pairs(&items),
            _ => None,
        },
        _ => None,
    }
}

fn pairs(items: &[Value]) -> Option<Vec<Coordenada>> {
    let mut coords = Vec::new();
    for item in items {
        let Value::Array(pair) = item else { continue };
        let Some(latitud) = pair.first().and_then(finite) else {
            continue;
        };
        let Some(longitud) = pair.get(1).and_then(finite) else {
            continue;
        };
        coords.push(Coordenada { latitud, longitud });
    }
    if coords.is_empty() { None } else { Some(coords) }
}
