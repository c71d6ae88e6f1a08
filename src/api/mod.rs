//! # API Operations
//!
//! The three use cases of the data-access layer: authenticate, list
//! parcels, fetch one parcel's detail. Each follows the same pipeline:
//! build the request, perform the transport call, validate the
//! `{status, data, message}` envelope, decode the payload, and wrap the
//! result in an [`Outcome`]. Every error along the way — connection fault,
//! bad status, unparseable body, missing payload — is converted into
//! `Outcome::Failure` here; nothing escapes as an `Err` or a panic.
//!
//! ## Concurrency contract
//!
//! Operations are plain `async fn`s with no internal state: each call
//! builds its own request and decodes its own response. A call can take up
//! to the configured timeouts, so never await one on a latency-sensitive
//! thread. Keep at most one call in flight per screen — a stale response
//! racing a newer request is the caller's bug to avoid — and on teardown
//! just drop the future; dropping it abandons the request.

use serde::Serialize;
use serde_json::Value;

use crate::decode;
use crate::model::{Finca, FincaDetalle, Usuario};
use crate::outcome::Outcome;
use crate::transport::{ApiConfig, Transport};

const MSG_RESPUESTA_INCOMPLETA: &str = "Respuesta incompleta del servidor";
const MSG_CREDENCIALES: &str = "Credenciales inválidas";
const MSG_CARGAR_FINCAS: &str = "No se pudieron cargar las fincas";
const MSG_CARGAR_FINCA: &str = "No se pudo cargar la finca";
const MSG_FINCA_NO_DISPONIBLE: &str = "Datos de finca no disponibles";

#[derive(Serialize)]
struct LoginBody<'a> {
    usuario: &'a str,
    password: &'a str,
}

/// Client for the Agrovista backend.
///
/// Cheap to share behind an `Arc`; holds only the transport and its
/// connection pool.
pub struct ApiClient {
    transport: Transport,
}

impl ApiClient {
    /// Build a client from the given config.
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            transport: Transport::new(config),
        }
    }

    /// Authenticate with username and password.
    ///
    /// Credential validation (non-empty fields and the like) belongs to the
    /// caller; this layer sends whatever it is given.
    pub async fn login(&self, usuario: &str, password: &str) -> Outcome<Usuario> {
        let body = LoginBody { usuario, password };
        match self.transport.post("/login.php", &body).await {
            Ok(response) => login_outcome(&response),
            Err(err) => Outcome::Failure(err.to_string()),
        }
    }

    /// List the parcels managed by a user.
    pub async fn fincas(&self, usuario_id: i64) -> Outcome<Vec<Finca>> {
        let query = [("usuario_id", usuario_id.to_string())];
        match self.transport.get("/fincas.php", &query).await {
            Ok(response) => fincas_outcome(&response),
            Err(err) => Outcome::Failure(err.to_string()),
        }
    }

    /// Fetch one parcel's detail, including its crops.
    pub async fn finca_detalle(&self, finca_id: i64, usuario_id: i64) -> Outcome<FincaDetalle> {
        let query = [
            ("finca_id", finca_id.to_string()),
            ("usuario_id", usuario_id.to_string()),
        ];
        match self.transport.get("/finca_detalle.php", &query).await {
            Ok(response) => detalle_outcome(&response),
            Err(err) => Outcome::Failure(err.to_string()),
        }
    }
}

fn envelope_ok(response: &Value) -> bool {
    response.get("status").and_then(Value::as_str) == Some("ok")
}

/// The envelope's `message` field, or `default` when absent or non-string.
fn envelope_message(response: &Value, default: &str) -> String {
    response
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

fn login_outcome(response: &Value) -> Outcome<Usuario> {
    if !envelope_ok(response) {
        return Outcome::Failure(envelope_message(response, MSG_CREDENCIALES));
    }
    match response.get("data").and_then(|data| data.get("usuario")) {
        Some(user) if user.is_object() => Outcome::Success(decode::usuario(user)),
        _ => Outcome::Failure(MSG_RESPUESTA_INCOMPLETA.to_string()),
    }
}

fn fincas_outcome(response: &Value) -> Outcome<Vec<Finca>> {
    if !envelope_ok(response) {
        return Outcome::Failure(envelope_message(response, MSG_CARGAR_FINCAS));
    }
    // A missing or null array is an empty holding, not an error.
    let lista = response.get("data").and_then(|data| data.get("fincas"));
    Outcome::Success(decode::fincas(lista))
}

fn detalle_outcome(response: &Value) -> Outcome<FincaDetalle> {
    if !envelope_ok(response) {
        return Outcome::Failure(envelope_message(response, MSG_CARGAR_FINCA));
    }
    let Some(data) = response.get("data").filter(|data| data.is_object()) else {
        return Outcome::Failure(MSG_RESPUESTA_INCOMPLETA.to_string());
    };
    match data.get("finca") {
        Some(finca_json) if finca_json.is_object() => Outcome::Success(FincaDetalle {
            finca: decode::finca(finca_json),
            fecha_registro: decode::opt_string(finca_json, "fecha_registro"),
            cultivos: decode::cultivos(data.get("cultivos")),
        }),
        _ => Outcome::Failure(MSG_FINCA_NO_DISPONIBLE.to_string()),
    }
}
