//! # Comandos Básicos
//! src/commands/basic.rs
//!
//! Handlers de ejemplo que registra el binario:
//! - GET /ping: responde `pong`
//! - PUT /user: recibe `{"name": ...}` y responde `{"id": 20}`
//! - /bad (cualquier método): responde 400 sin body

use crate::http::{Body, HeaderList, Method, StatusCode};
use crate::router::RouteConflict;
use crate::server::{Connection, Server};
use serde::{Deserialize, Serialize};

/// Id que se asigna a todo usuario creado por /user
const USER_ID: u64 = 20;

/// Payload esperado por /user
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    pub name: String,
}

/// Respuesta de /user
#[derive(Debug, Serialize)]
pub struct UserCreated {
    pub id: u64,
}

/// Handler para GET /ping
pub fn ping_handler(conn: &mut Connection<'_>, _headers: &HeaderList, _body: Option<&Body>) {
    if let Err(e) = conn.respond(StatusCode::Ok.as_u16(), None, Some("pong\n")) {
        tracing::error!(error = %e, "No se pudo responder /ping");
    }
}

/// Handler para PUT /user
///
/// Un body ausente o que no es JSON válido se responde con 400.
pub fn user_handler(conn: &mut Connection<'_>, headers: &HeaderList, body: Option<&Body>) {
    let payload = match body.map(|b| serde_json::from_slice::<UserPayload>(b.as_bytes())) {
        Some(Ok(payload)) => payload,
        Some(Err(e)) => {
            tracing::warn!(error = %e, "Body inválido en /user");
            respond_or_log(conn, StatusCode::BadRequest, None, None);
            return;
        }
        None => {
            tracing::warn!("Request a /user sin body");
            respond_or_log(conn, StatusCode::BadRequest, None, None);
            return;
        }
    };

    tracing::info!(
        name = %payload.name,
        content_type = headers.get("Content-Type").unwrap_or("-"),
        "Usuario recibido"
    );

    let mut response_headers = HeaderList::new();
    response_headers.insert("Content-Type", "application/json");

    match serde_json::to_string(&UserCreated { id: USER_ID }) {
        Ok(json) => respond_or_log(conn, StatusCode::Ok, Some(&response_headers), Some(&json)),
        Err(e) => {
            tracing::error!(error = %e, "No se pudo serializar la respuesta");
            respond_or_log(conn, StatusCode::InternalServerError, None, None);
        }
    }
}

/// Handler para /bad
pub fn bad_handler(conn: &mut Connection<'_>, _headers: &HeaderList, _body: Option<&Body>) {
    respond_or_log(conn, StatusCode::BadRequest, None, None);
}

/// Registra los tres comandos en el servidor
pub fn register_defaults(server: &mut Server) -> Result<(), RouteConflict> {
    server.add_route("/ping", Some(Method::GET), ping_handler)?;
    server.add_route("/user", Some(Method::PUT), user_handler)?;
    server.add_route("/bad", None, bad_handler)?;
    Ok(())
}

fn respond_or_log(conn: &mut Connection<'_>, status: StatusCode, headers: Option<&HeaderList>, body: Option<&str>) {
    if let Err(e) = conn.respond(status.as_u16(), headers, body) {
        tracing::error!(error = %e, status = status.as_u16(), "No se pudo enviar la respuesta");
    }
}
