//! # Parser de Requests HTTP/1.1
//! src/http/parser.rs
//!
//! Convierte el buffer crudo leído del socket en un `Request`.
//!
//! ## Algoritmo
//!
//! ```text
//! GET /ping HTTP/1.1\r\n        <- start line: método y path
//! Host: x\r\n                   <- headers crudos
//! \r\n                          <- terminador (\r\n\r\n)
//! {"name":"A"}                  <- body: lo que quede en el buffer
//! ```
//!
//! 1. Se busca el primer `\r\n\r\n`. Sin él no hay request.
//! 2. El start line se corta en el primer espacio (método) y en el
//!    siguiente (path). La versión se descarta sin validarla.
//! 3. Las líneas entre el start line y el terminador se guardan tal cual.
//! 4. El body son los bytes restantes del buffer. `Content-Length` no se
//!    consulta aquí; completar el body es trabajo del servidor.

use super::request::{Body, Method, Request};
use super::HeaderList;
use thiserror::Error;

/// Separador de líneas
const CRLF: &[u8] = b"\r\n";

/// Separador entre headers y body
const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Límite de headers por defecto
pub const DEFAULT_MAX_HEADERS: usize = 128;

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No se encontró `\r\n\r\n` en el buffer
    #[error("Missing header terminator")]
    MissingHeaderTerminator,

    /// El start line no tiene método y path separados por espacios
    #[error("Malformed start line")]
    MalformedStartLine,

    /// Más headers que el máximo configurado
    #[error("Too many headers (limit: {limit})")]
    TooManyHeaders { limit: usize },

    /// Método, path o header que no es UTF-8 válido
    #[error("Request head is not valid UTF-8")]
    InvalidEncoding,
}

/// Parsea un request con el límite de headers por defecto
pub fn parse(buffer: &[u8]) -> Result<Request, ParseError> {
    parse_with_limit(buffer, DEFAULT_MAX_HEADERS)
}

/// Parsea un request aceptando como máximo `max_headers` líneas de header
///
/// # Ejemplo
///
/// ```
/// use http_core::http::parser::{parse_with_limit, ParseError};
///
/// let raw = b"GET / HTTP/1.1\r\nA: 1\r\nB: 2\r\n\r\n";
/// assert_eq!(
///     parse_with_limit(raw, 1),
///     Err(ParseError::TooManyHeaders { limit: 1 })
/// );
/// ```
pub fn parse_with_limit(buffer: &[u8], max_headers: usize) -> Result<Request, ParseError> {
    // 1. Terminador de headers
    let terminator = find(buffer, HEADER_TERMINATOR).ok_or(ParseError::MissingHeaderTerminator)?;

    // 2. Start line. El primer \r\n existe siempre porque el terminador empieza con uno
    let start_line_end = find(buffer, CRLF).unwrap_or(terminator);
    let (method, path) = parse_start_line(&buffer[..start_line_end])?;

    // 3. Headers, solo si el start line no termina justo en el terminador
    let headers = if start_line_end < terminator {
        parse_headers(&buffer[start_line_end + CRLF.len()..terminator], max_headers)?
    } else {
        HeaderList::new()
    };

    // 4. Body
    let body_start = terminator + HEADER_TERMINATOR.len();
    let body = match buffer.get(body_start..) {
        Some(rest) if !rest.is_empty() => Some(Body::new(rest.to_vec())),
        _ => None,
    };

    Ok(Request::new(method, path, headers, body))
}

/// Largo del bloque de headers, terminador incluido
///
/// Es el offset del primer byte del body. `None` si el terminador
/// todavía no llegó.
pub fn header_block_len(buffer: &[u8]) -> Option<usize> {
    find(buffer, HEADER_TERMINATOR).map(|pos| pos + HEADER_TERMINATOR.len())
}

/// Parsea `METHOD SP PATH SP VERSION`
fn parse_start_line(line: &[u8]) -> Result<(Method, String), ParseError> {
    let method_end = find(line, b" ").ok_or(ParseError::MalformedStartLine)?;
    let rest = &line[method_end + 1..];
    let path_end = find(rest, b" ").ok_or(ParseError::MalformedStartLine)?;

    let method = &line[..method_end];
    let path = &rest[..path_end];

    if method.is_empty() || path.is_empty() {
        return Err(ParseError::MalformedStartLine);
    }

    let method = Method::from(to_str(method)?);
    let path = to_str(path)?.to_string();

    Ok((method, path))
}

/// Separa el bloque de headers en líneas crudas
fn parse_headers(raw: &[u8], max_headers: usize) -> Result<HeaderList, ParseError> {
    let mut headers = HeaderList::new();

    for line in raw.split_crlf() {
        // Una línea vacía marca el fin de los headers
        if line.is_empty() {
            break;
        }

        if headers.len() == max_headers {
            return Err(ParseError::TooManyHeaders { limit: max_headers });
        }

        headers.push(to_str(line)?);
    }

    Ok(headers)
}

fn to_str(bytes: &[u8]) -> Result<&str, ParseError> {
    std::str::from_utf8(bytes).map_err(|_| ParseError::InvalidEncoding)
}

/// Posición de la primera ocurrencia de `needle` en `haystack`
fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|window| window == needle)
}

/// Iterador de líneas separadas por `\r\n`
trait SplitCrlf {
    fn split_crlf(&self) -> CrlfLines<'_>;
}

impl SplitCrlf for [u8] {
    fn split_crlf(&self) -> CrlfLines<'_> {
        CrlfLines { rest: Some(self) }
    }
}

struct CrlfLines<'a> {
    rest: Option<&'a [u8]>,
}

impl<'a> Iterator for CrlfLines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        match find(rest, CRLF) {
            Some(pos) => {
                self.rest = Some(&rest[pos + CRLF.len()..]);
                Some(&rest[..pos])
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}
