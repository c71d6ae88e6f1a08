//! # End-to-End API Tests
//!
//! Exercise the real transport against an in-process stub backend. Each
//! test binds an ephemeral port, serves the handlers it needs, and calls
//! the public API operations the way a UI would.

use std::collections::HashMap;
use std::time::Duration;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use agrovista::model::{Coordenada, Rol};
use agrovista::{ApiClient, ApiConfig, Outcome};

/// Serve a router on an ephemeral port, returning the base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub server");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server");
    });
    format!("http://{}", addr)
}

async fn client_for(router: Router) -> ApiClient {
    let base_url = serve(router).await;
    ApiClient::new(&ApiConfig::new(base_url))
}

#[tokio::test]
async fn login_success_decodes_user() {
    let router = Router::new().route(
        "/login.php",
        post(|Json(body): Json<Value>| async move {
            // The operation must send exactly {usuario, password}.
            assert_eq!(body["usuario"], "aruiz");
            assert_eq!(body["password"], "secreto");
            Json(json!({
                "status": "ok",
                "data": {"usuario": {
                    "id": 1, "nombre": "Ana", "apellidos": "Ruiz",
                    "email": "a@x.com", "username": "aruiz", "rol": "ADMIN"
                }}
            }))
        }),
    );
    let client = client_for(router).await;

    let Outcome::Success(usuario) = client.login("aruiz", "secreto").await else {
        panic!("expected success");
    };
    assert_eq!(usuario.id, 1);
    assert_eq!(usuario.nombre_completo(), "Ana Ruiz");
    assert_eq!(usuario.rol, Rol::Admin);
}

#[tokio::test]
async fn login_rejected_surfaces_server_message() {
    let router = Router::new().route(
        "/login.php",
        post(|| async {
            Json(json!({"status": "error", "message": "Usuario o contraseña incorrectos"}))
        }),
    );
    let client = client_for(router).await;

    assert_eq!(
        client.login("aruiz", "mal").await,
        Outcome::Failure("Usuario o contraseña incorrectos".to_string())
    );
}

#[tokio::test]
async fn fincas_decodes_list_with_string_coordinates() {
    let router = Router::new().route(
        "/fincas.php",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            assert_eq!(params.get("usuario_id").map(String::as_str), Some("7"));
            Json(json!({
                "status": "ok",
                "data": {"fincas": [
                    {
                        "id": 4, "nombre": "La Loma", "ubicacion": "Jaén",
                        "superficie": "2.5", "estado": "activa",
                        "coordenadas": "[[37.9, -3.6], [37.8, -3.5]]"
                    },
                    {"id": 5, "nombre": "El Soto", "estado": "en barbecho"}
                ]}
            }))
        }),
    );
    let client = client_for(router).await;

    let Outcome::Success(fincas) = client.fincas(7).await else {
        panic!("expected success");
    };
    assert_eq!(fincas.len(), 2);
    assert_eq!(fincas[0].superficie, Some(2.5));
    assert_eq!(
        fincas[0].coordenadas,
        Some(vec![
            Coordenada { latitud: 37.9, longitud: -3.6 },
            Coordenada { latitud: 37.8, longitud: -3.5 },
        ])
    );
    assert_eq!(fincas[1].coordenadas, None);
    assert_eq!(fincas[1].superficie, None);
}

#[tokio::test]
async fn fincas_null_array_is_empty_list() {
    let router = Router::new().route(
        "/fincas.php",
        get(|| async { Json(json!({"status": "ok", "data": {"fincas": null}})) }),
    );
    let client = client_for(router).await;

    assert_eq!(client.fincas(1).await, Outcome::Success(vec![]));
}

#[tokio::test]
async fn detalle_decodes_parcel_and_crops() {
    let router = Router::new().route(
        "/finca_detalle.php",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            assert_eq!(params.get("finca_id").map(String::as_str), Some("4"));
            assert_eq!(params.get("usuario_id").map(String::as_str), Some("7"));
            Json(json!({
                "status": "ok",
                "data": {
                    "finca": {
                        "id": 4, "nombre": "La Loma", "estado": "activa",
                        "fecha_registro": "2023-05-17"
                    },
                    "cultivos": [{
                        "id": 9, "nombre": "Olivo", "variedad": "Picual",
                        "estado": "en curso", "produccion_kg": 1200.5,
                        "rendimiento_estimado": null
                    }]
                }
            }))
        }),
    );
    let client = client_for(router).await;

    let Outcome::Success(detalle) = client.finca_detalle(4, 7).await else {
        panic!("expected success");
    };
    assert_eq!(detalle.finca.nombre, "La Loma");
    assert_eq!(detalle.fecha_registro, Some("2023-05-17".to_string()));
    assert_eq!(detalle.cultivos.len(), 1);
    assert_eq!(detalle.cultivos[0].produccion_kg, Some(1200.5));
    assert_eq!(detalle.cultivos[0].rendimiento_estimado, None);
}

#[tokio::test]
async fn detalle_missing_finca_fails() {
    let router = Router::new().route(
        "/finca_detalle.php",
        get(|| async { Json(json!({"status": "ok", "data": {"cultivos": []}})) }),
    );
    let client = client_for(router).await;

    assert_eq!(
        client.finca_detalle(4, 7).await,
        Outcome::Failure("Datos de finca no disponibles".to_string())
    );
}

#[tokio::test]
async fn http_500_surfaces_body_message() {
    let router = Router::new().route(
        "/fincas.php",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"message": "server down"})),
            )
        }),
    );
    let client = client_for(router).await;

    assert_eq!(
        client.fincas(1).await,
        Outcome::Failure("server down".to_string())
    );
}

#[tokio::test]
async fn unparseable_body_is_invalid_response() {
    let router = Router::new().route("/fincas.php", get(|| async { "<html>mantenimiento</html>" }));
    let client = client_for(router).await;

    assert_eq!(
        client.fincas(1).await,
        Outcome::Failure("Respuesta inválida del servidor".to_string())
    );
}

#[tokio::test]
async fn slow_server_times_out_as_ordinary_failure() {
    let router = Router::new().route(
        "/login.php",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({"status": "ok"}))
        }),
    );
    let base_url = serve(router).await;
    let mut config = ApiConfig::new(base_url);
    config.read_timeout = Duration::from_millis(200);
    let client = ApiClient::new(&config);

    let outcome = client.login("aruiz", "secreto").await;
    assert!(!outcome.is_success(), "timeout must surface as Failure");
}

#[tokio::test]
async fn connection_refused_is_ordinary_failure() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(&ApiConfig::new(format!("http://{}", addr)));
    assert!(!client.fincas(1).await.is_success());
}
