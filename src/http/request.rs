//! # Modelo de Request HTTP
//! src/http/request.rs
//!
//! Contenedores de datos para un request ya parseado. El parsing en sí
//! vive en `http::parser`; aquí solo están los tipos y sus accessors.
//!
//! ## Componentes
//!
//! 1. **Start line**: `METHOD /path HTTP/1.1` (la versión se descarta)
//! 2. **Headers**: líneas crudas `Name: value`, en orden de llegada
//! 3. **Body**: bytes después de `\r\n\r\n`, ausente si no llegó nada

use super::parser::{self, ParseError};
use super::HeaderList;

/// Método HTTP del start line
///
/// La comparación es exacta y distingue mayúsculas: `"get"` no es `GET`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    GET,
    HEAD,
    POST,
    PUT,
    DELETE,
    PATCH,
    OPTIONS,

    /// Cualquier otro token, guardado tal cual
    Other(String),
}

impl Method {
    /// Convierte el método a string
    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::PATCH => "PATCH",
            Method::OPTIONS => "OPTIONS",
            Method::Other(token) => token.as_str(),
        }
    }
}

impl From<&str> for Method {
    fn from(token: &str) -> Self {
        match token {
            "GET" => Method::GET,
            "HEAD" => Method::HEAD,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            "PATCH" => Method::PATCH,
            "OPTIONS" => Method::OPTIONS,
            other => Method::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bytes que llegaron después del terminador de headers
///
/// Nunca está vacío: si no llegaron bytes el request no tiene body
/// (`Option::None`), que es distinto de un body vacío.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body(Vec<u8>);

impl Body {
    pub(crate) fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// El body como texto, si es UTF-8 válido
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

/// Request HTTP parseado
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Método HTTP (GET, PUT, ...)
    method: Method,

    /// Path de la petición, sin interpretar (ej: "/ping")
    path: String,

    /// Headers crudos en orden de llegada
    headers: HeaderList,

    /// Body, ausente si no llegaron bytes después de los headers
    body: Option<Body>,
}

impl Request {
    pub(crate) fn new(method: Method, path: String, headers: HeaderList, body: Option<Body>) -> Self {
        Self {
            method,
            path,
            headers,
            body,
        }
    }

    /// Parsea un request desde bytes con el límite de headers por defecto
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use http_core::http::{Method, Request};
    ///
    /// let raw = b"GET /ping HTTP/1.1\r\nHost: x\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.method(), &Method::GET);
    /// assert_eq!(request.path(), "/ping");
    /// assert!(request.body().is_none());
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        parser::parse(buffer)
    }

    // === Métodos públicos para acceder a los campos ===

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &HeaderList {
        &self.headers
    }

    /// Obtiene un header específico (ver `HeaderList::get`)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    /// Separa el request en start line, headers y body
    pub fn into_parts(self) -> (Method, String, HeaderList, Option<Body>) {
        (self.method, self.path, self.headers, self.body)
    }
}
