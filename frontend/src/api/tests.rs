#![cfg(not(coverage))]

use super::*;
use httpmock::prelude::*;
use serde_json::json;

fn new_user() -> NewUser {
    NewUser {
        nombre: "Ana".into(),
        apellido: "Gómez".into(),
        dni: "12345678".into(),
        cuil_cuit: "20123456783".into(),
        email: "ana@example.com".into(),
        telefono: "1144556677".into(),
        password: "secreta123".into(),
    }
}

fn reservation_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "fecha_entrada": "2026-11-02T00:00:00",
        "fecha_salida": "2026-11-05T00:00:00",
        "huespedes": 2,
        "contacto": "ana@example.com",
        "estado": "Pendiente",
        "precio_total": "600.00",
        "fecha_creacion": "2026-10-17T12:00:00"
    })
}

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.base_url())
}

#[tokio::test]
async fn register_posts_json_and_reads_optional_token() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/usuarios/crear")
            .header("content-type", "application/json")
            .json_body(json!({
                "nombre": "Ana",
                "apellido": "Gómez",
                "dni": "12345678",
                "cuil_cuit": "20123456783",
                "email": "ana@example.com",
                "telefono": "1144556677",
                "password": "secreta123"
            }));
        then.status(200).json_body(json!({"id": 5, "nombre": "Ana"}));
    });

    let response = api_client(&server).register(&new_user()).await.unwrap();
    assert_eq!(response.id, Some(5));
    assert_eq!(response.session_token(), None);
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn issue_token_posts_form_encoded_credentials() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/autenticar_creacion_usuario/login")
            .header("content-type", "application/x-www-form-urlencoded")
            .x_www_form_urlencoded_tuple("username", "ana@example.com")
            .x_www_form_urlencoded_tuple("password", "secreta123");
        then.status(200)
            .json_body(json!({"access_token": "jwt-token", "token_type": "bearer"}));
    });

    let token = api_client(&server)
        .issue_token(" ana@example.com ", "secreta123")
        .await
        .unwrap();
    assert_eq!(token.access_token, "jwt-token");
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn issue_token_rejects_blank_token() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/autenticar_creacion_usuario/login");
        then.status(200).json_body(json!({"access_token": ""}));
    });

    let error = api_client(&server)
        .issue_token("ana@example.com", "secreta123")
        .await
        .unwrap_err();
    assert_eq!(error.kind, ApiErrorKind::Api);
}

#[tokio::test]
async fn check_credentials_posts_dni_and_password() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/login")
            .json_body(json!({"dni": "1234567", "password": "secreta123"}));
        then.status(200).json_body(json!({
            "message": "Login exitoso",
            "user": {"id": 9, "nombre": "Ana", "apellido": "Gómez", "dni": "1234567", "email": "ana@example.com"}
        }));
    });

    let response = api_client(&server)
        .check_credentials("1234567", "secreta123")
        .await
        .unwrap();
    assert_eq!(response.user.email, "ana@example.com");
    assert_eq!(response.user.full_name(), "Ana Gómez");
}

#[tokio::test]
async fn reservations_are_fetched_and_created_with_bearer_token() {
    let server = MockServer::start_async().await;
    let list = server.mock(|when, then| {
        when.method(GET)
            .path("/api/reservas")
            .header("Authorization", "Bearer tok-1");
        then.status(200).json_body(json!([reservation_json(1)]));
    });
    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/api/reservas")
            .header("Authorization", "Bearer tok-1")
            .json_body(json!({
                "fecha_check_in": "2026-11-02",
                "fecha_check_out": "2026-11-05",
                "cantidad_habitaciones": 2
            }));
        then.status(200).json_body(reservation_json(2));
    });

    let client = api_client(&server);
    let reservations = client.list_reservations("tok-1").await.unwrap();
    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0].cantidad_habitaciones, 2);

    let created = client
        .create_reservation(
            "tok-1",
            &NewReservation {
                fecha_check_in: chrono::NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(),
                fecha_check_out: chrono::NaiveDate::from_ymd_opt(2026, 11, 5).unwrap(),
                cantidad_habitaciones: 2,
            },
        )
        .await
        .unwrap();
    assert_eq!(created.id, 2);
    list.assert_hits_async(1).await;
    create.assert_hits_async(1).await;
}

#[tokio::test]
async fn user_admin_endpoints_round_trip_messages() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/usuarios");
        then.status(200).json_body(json!([
            {"id": 1, "nombre": "Ana", "apellido": "Gómez", "email": "ana@example.com"}
        ]));
    });
    server.mock(|when, then| {
        when.method(PUT)
            .path("/api/usuarios/1")
            .json_body(json!({"nombre": "Ana", "apellido": "Paz", "email": "ana@example.com"}));
        then.status(200)
            .json_body(json!({"message": "Usuario actualizado exitosamente"}));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/usuarios/1");
        then.status(200)
            .json_body(json!({"message": "Usuario Ana Paz eliminado exitosamente"}));
    });

    let client = api_client(&server);
    let users = client.list_users(None).await.unwrap();
    assert_eq!(users[0].id, 1);

    let update = UserUpdate {
        nombre: "Ana".into(),
        apellido: "Paz".into(),
        email: "ana@example.com".into(),
    };
    let updated = client.update_user(1, &update, None).await.unwrap();
    assert_eq!(
        updated.message.as_deref(),
        Some("Usuario actualizado exitosamente")
    );

    let deleted = client.delete_user(1, None).await.unwrap();
    assert_eq!(
        deleted.message.as_deref(),
        Some("Usuario Ana Paz eliminado exitosamente")
    );
}

#[tokio::test]
async fn error_bodies_are_normalized_into_one_message() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/usuarios/crear");
        then.status(400).json_body(json!({
            "detail": "No se pudo crear el usuario",
            "errors": ["El DNI ya está registrado", "El email ya está registrado"]
        }));
    });

    let error = api_client(&server).register(&new_user()).await.unwrap_err();
    assert_eq!(error.kind, ApiErrorKind::Api);
    assert_eq!(error.status, Some(400));
    assert_eq!(
        error.user_message(),
        "No se pudo crear el usuario\nEl DNI ya está registrado\nEl email ya está registrado"
    );
}

#[tokio::test]
async fn forbidden_responses_are_auth_errors() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/reservas");
        then.status(403).json_body(json!({"detail": "Not authenticated"}));
    });

    let error = api_client(&server)
        .list_reservations("expired")
        .await
        .unwrap_err();
    assert!(error.is_auth());
    assert_eq!(error.message, "Not authenticated");
}

#[tokio::test]
async fn unreadable_error_body_falls_back_to_generic_message() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/usuarios");
        then.status(500).body("Internal Server Error");
    });

    let error = api_client(&server).list_users(None).await.unwrap_err();
    assert_eq!(error.message, "Error desconocido (HTTP 500)");
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let client = ApiClient::new_with_base_url("http://127.0.0.1:9");
    let error = client.list_users(None).await.unwrap_err();
    assert_eq!(error.kind, ApiErrorKind::Network);
    assert!(error.message.starts_with("Error de conexión"));
}
