//! # Códigos de Estado HTTP
//! src/http/status.rs
//!
//! Tabla fija de códigos de estado que el servidor sabe serializar.
//! Un código fuera de la tabla no tiene reason phrase y por lo tanto
//! no se puede construir una status line válida con él: en ese caso
//! se retorna `UnknownStatusCode` en vez de inventar un texto.

use thiserror::Error;

/// Códigos de estado con reason phrase conocida
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK - La petición fue exitosa
    Ok = 200,

    /// 201 Created - Recurso creado
    Created = 201,

    /// 204 No Content - Petición exitosa sin contenido en el body
    NoContent = 204,

    /// 400 Bad Request - Petición inválida o malformada
    BadRequest = 400,

    /// 404 Not Found - Ruta o recurso no encontrado
    NotFound = 404,

    /// 405 Method Not Allowed
    MethodNotAllowed = 405,

    /// 409 Conflict
    Conflict = 409,

    /// 413 Payload Too Large - El body no cabe en el buffer de lectura
    PayloadTooLarge = 413,

    /// 500 Internal Server Error
    InternalServerError = 500,

    /// 503 Service Unavailable
    ServiceUnavailable = 503,
}

/// El código pedido no está en la tabla de reason phrases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unknown HTTP status code: {0}")]
pub struct UnknownStatusCode(pub u16);

impl StatusCode {
    /// Busca el código numérico en la tabla
    ///
    /// # Ejemplo
    /// ```
    /// use http_core::http::StatusCode;
    ///
    /// assert_eq!(StatusCode::from_u16(200), Ok(StatusCode::Ok));
    /// assert!(StatusCode::from_u16(299).is_err());
    /// ```
    pub fn from_u16(code: u16) -> Result<Self, UnknownStatusCode> {
        match code {
            200 => Ok(StatusCode::Ok),
            201 => Ok(StatusCode::Created),
            204 => Ok(StatusCode::NoContent),
            400 => Ok(StatusCode::BadRequest),
            404 => Ok(StatusCode::NotFound),
            405 => Ok(StatusCode::MethodNotAllowed),
            409 => Ok(StatusCode::Conflict),
            413 => Ok(StatusCode::PayloadTooLarge),
            500 => Ok(StatusCode::InternalServerError),
            503 => Ok(StatusCode::ServiceUnavailable),
            other => Err(UnknownStatusCode(other)),
        }
    }

    /// Convierte el código a su valor numérico
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Retorna el texto de razón (reason phrase) asociado al código
    ///
    /// # Ejemplo
    /// ```
    /// use http_core::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::NoContent => "No Content",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::Conflict => "Conflict",
            StatusCode::PayloadTooLarge => "Payload Too Large",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::ServiceUnavailable => "Service Unavailable",
        }
    }

    /// Verifica si el código indica éxito (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.as_u16())
    }

    /// Verifica si el código indica error del cliente (4xx)
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.as_u16())
    }

    /// Verifica si el código indica error del servidor (5xx)
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.as_u16())
    }
}

impl TryFrom<u16> for StatusCode {
    type Error = UnknownStatusCode;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        StatusCode::from_u16(code)
    }
}

impl std::fmt::Display for StatusCode {
    /// Formato: "200 OK"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_u16_known_codes() {
        assert_eq!(StatusCode::from_u16(200), Ok(StatusCode::Ok));
        assert_eq!(StatusCode::from_u16(400), Ok(StatusCode::BadRequest));
        assert_eq!(StatusCode::from_u16(503), Ok(StatusCode::ServiceUnavailable));
    }

    #[test]
    fn test_from_u16_unknown_code() {
        assert_eq!(StatusCode::from_u16(418), Err(UnknownStatusCode(418)));
        assert_eq!(StatusCode::from_u16(0), Err(UnknownStatusCode(0)));
    }

    #[test]
    fn test_table_is_consistent() {
        // Cada variante debe volver a sí misma a través de su número
        for status in [
            StatusCode::Ok,
            StatusCode::Created,
            StatusCode::NoContent,
            StatusCode::BadRequest,
            StatusCode::NotFound,
            StatusCode::MethodNotAllowed,
            StatusCode::Conflict,
            StatusCode::PayloadTooLarge,
            StatusCode::InternalServerError,
            StatusCode::ServiceUnavailable,
        ] {
            assert_eq!(StatusCode::from_u16(status.as_u16()), Ok(status));
        }
    }

    #[test]
    fn test_categories() {
        assert!(StatusCode::Ok.is_success());
        assert!(StatusCode::NoContent.is_success());
        assert!(StatusCode::BadRequest.is_client_error());
        assert!(!StatusCode::Ok.is_client_error());
        assert!(StatusCode::InternalServerError.is_server_error());
        assert!(!StatusCode::BadRequest.is_server_error());
    }

    #[test]
    fn test_display() {
        assert_eq!(StatusCode::Ok.to_string(), "200 OK");
        assert_eq!(StatusCode::BadRequest.to_string(), "400 Bad Request");
        assert_eq!(UnknownStatusCode(299).to_string(), "Unknown HTTP status code: 299");
    }
}
