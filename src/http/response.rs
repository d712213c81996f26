//! # Construcción de Respuestas HTTP
//! src/http/response.rs
//!
//! Serializa una respuesta HTTP/1.1 a un único buffer de bytes.
//!
//! ## Formato
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: application/json\r\n     <- headers del caller, en orden
//! Content-Length: 10\r\n                 <- solo si hay body
//! \r\n
//! {"id": 20}
//! ```
//!
//! ## Ejemplo de uso
//!
//! ```
//! use http_core::http::{Response, StatusCode};
//!
//! let response = Response::new(StatusCode::Ok)
//!     .with_header("Content-Type", "text/plain")
//!     .with_body("pong");
//!
//! assert_eq!(
//!     response.to_bytes(),
//!     b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 4\r\n\r\npong".to_vec()
//! );
//! ```

use super::status::UnknownStatusCode;
use super::{HeaderList, StatusCode};
use thiserror::Error;

/// Errores al construir o enviar una respuesta
#[derive(Debug, Error)]
pub enum ResponseError {
    /// Se intentó responder fuera del procesamiento de un request,
    /// o la conexión ya respondió
    #[error("No active connection")]
    NoActiveConnection,

    /// El código no tiene reason phrase registrada
    #[error(transparent)]
    UnknownStatusCode(#[from] UnknownStatusCode),

    /// Falló la escritura en el socket
    #[error("Failed to write response: {0}")]
    Io(#[from] std::io::Error),
}

/// Respuesta HTTP/1.1 completa
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,

    /// Headers del caller; `Content-Length` se sintetiza al serializar
    headers: HeaderList,

    /// Cuerpo, ausente si no hay
    body: Option<Vec<u8>>,
}

impl Response {
    /// Crea una respuesta sin headers ni body
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderList::new(),
            body: None,
        }
    }

    /// Agrega un header `name: value`
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Reemplaza todos los headers por la lista dada
    pub fn with_headers(mut self, headers: HeaderList) -> Self {
        self.headers = headers;
        self
    }

    /// Establece el cuerpo desde un string
    pub fn with_body(mut self, body: &str) -> Self {
        self.body = Some(body.as_bytes().to_vec());
        self
    }

    /// Establece el cuerpo desde bytes
    pub fn with_body_bytes(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Respuesta JSON con `Content-Type: application/json`
    pub fn json(status: StatusCode, body: &str) -> Self {
        Self::new(status)
            .with_header("Content-Type", "application/json")
            .with_body(body)
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    pub fn to_bytes(&self) -> Vec<u8> {
        let body = self.body.as_deref().unwrap_or_default();
        let mut result = Vec::with_capacity(64 + body.len());

        // 1. Status line
        append_line(&mut result, &format!("HTTP/1.1 {}", self.status));

        // 2. Headers del caller, en el orden recibido
        for line in self.headers.iter() {
            append_line(&mut result, line);
        }

        // 3. Content-Length solo si hay body
        if !body.is_empty() {
            append_line(&mut result, &format!("Content-Length: {}", body.len()));
        }

        // 4. Línea vacía y body
        result.extend_from_slice(b"\r\n");
        result.extend_from_slice(body);

        result
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderList {
        &self.headers
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}

/// Construye los bytes de una respuesta a partir de un código numérico
///
/// Falla con `UnknownStatusCode` si el código no está en la tabla.
///
/// # Ejemplo
/// ```
/// use http_core::http::response::build;
///
/// let bytes = build(200, None, Some("pong")).unwrap();
/// assert_eq!(bytes, b"HTTP/1.1 200 OK\r\nContent-Length: 4\r\n\r\npong".to_vec());
///
/// assert!(build(299, None, None).is_err());
/// ```
pub fn build(code: u16, headers: Option<&HeaderList>, body: Option<&str>) -> Result<Vec<u8>, ResponseError> {
    let mut response = Response::new(StatusCode::from_u16(code)?);

    if let Some(headers) = headers {
        response = response.with_headers(headers.clone());
    }
    if let Some(body) = body {
        response = response.with_body(body);
    }

    Ok(response.to_bytes())
}

/// Agrega `line` seguido de `\r\n`
fn append_line(buffer: &mut Vec<u8>, line: &str) {
    buffer.extend_from_slice(line.as_bytes());
    buffer.extend_from_slice(b"\r\n");
}
