//! # Conexión Activa
//! src/server/connection.rs
//!
//! `Connection` es el handle que el servidor le presta a cada handler para
//! que responda. Toma prestado el socket solo durante la llamada al
//! handler, así que no puede sobrevivir al cierre de la conexión.
//!
//! Una conexión acepta una sola respuesta: después de escribirla deja de
//! estar activa y cualquier otro intento retorna `NoActiveConnection`.

use crate::http::{parser, HeaderList, Response, ResponseError};
use std::io::{self, Read, Write};
use std::net::SocketAddr;

/// Handle de la conexión que se está procesando
pub struct Connection<'a> {
    stream: Option<&'a mut dyn Write>,
    peer: Option<SocketAddr>,
    bytes_written: usize,
}

impl<'a> Connection<'a> {
    /// Crea un handle activo sobre `stream`
    pub fn new(stream: &'a mut dyn Write, peer: Option<SocketAddr>) -> Self {
        Self {
            stream: Some(stream),
            peer,
            bytes_written: 0,
        }
    }

    /// Handle sin socket, útil para invocar handlers fuera del servidor
    pub fn detached() -> Self {
        Self {
            stream: None,
            peer: None,
            bytes_written: 0,
        }
    }

    /// Construye y envía la respuesta en una sola escritura
    ///
    /// Retorna la cantidad de bytes escritos.
    ///
    /// # Ejemplo
    /// ```
    /// use http_core::server::Connection;
    ///
    /// let mut out = Vec::new();
    /// let mut conn = Connection::new(&mut out, None);
    ///
    /// let written = conn.respond(200, None, Some("pong")).unwrap();
    /// drop(conn);
    /// assert_eq!(written, out.len());
    /// ```
    pub fn respond(
        &mut self,
        code: u16,
        headers: Option<&HeaderList>,
        body: Option<&str>,
    ) -> Result<usize, ResponseError> {
        if !self.is_active() {
            return Err(ResponseError::NoActiveConnection);
        }
        let bytes = crate::http::response::build(code, headers, body)?;
        self.write_once(&bytes)
    }

    /// Envía una `Response` ya construida
    pub fn send(&mut self, response: &Response) -> Result<usize, ResponseError> {
        self.write_once(&response.to_bytes())
    }

    /// `true` mientras no se haya enviado una respuesta
    pub fn is_active(&self) -> bool {
        self.stream.is_some()
    }

    /// Bytes escritos por la respuesta (0 si no se respondió)
    pub fn bytes_written(&self) -> usize {
        self.bytes_written
    }

    /// Dirección del cliente, si se conoce
    pub fn peer_addr(&self) -> Option<SocketAddr> {
        self.peer
    }

    fn write_once(&mut self, bytes: &[u8]) -> Result<usize, ResponseError> {
        let stream = self.stream.take().ok_or(ResponseError::NoActiveConnection)?;
        stream.write_all(bytes)?;
        stream.flush()?;

        self.bytes_written = bytes.len();
        Ok(bytes.len())
    }
}

/// Lee un request del socket
///
/// Hace una lectura de hasta `buffer_size` bytes. Si los headers ya
/// llegaron y declaran `Content-Length`, sigue leyendo hasta completar el
/// body, hasta que el cliente cierre o hasta llenar el buffer. Sin
/// `Content-Length` la primera lectura se considera completa.
pub fn read_request<R: Read>(stream: &mut R, buffer_size: usize, max_headers: usize) -> io::Result<Vec<u8>> {
    let mut buffer = vec![0u8; buffer_size];
    let mut filled = stream.read(&mut buffer)?;

    if let Some(expected) = expected_length(&buffer[..filled], max_headers) {
        let target = expected.min(buffer_size);

        while filled < target {
            let n = stream.read(&mut buffer[filled..target])?;
            if n == 0 {
                tracing::debug!(filled, expected, "Cliente cerró antes de completar el body");
                break;
            }
            filled += n;
        }

        if expected > buffer_size {
            tracing::warn!(
                expected,
                buffer_size,
                "Body truncado: Content-Length excede el buffer de lectura"
            );
        }
    }

    buffer.truncate(filled);
    Ok(buffer)
}

/// Largo total esperado (headers + body) según `Content-Length`
fn expected_length(buffer: &[u8], max_headers: usize) -> Option<usize> {
    let header_len = parser::header_block_len(buffer)?;
    let request = parser::parse_with_limit(buffer, max_headers).ok()?;
    let content_length = request.headers().content_length()?;

    header_len.checked_add(content_length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Lector que entrega los datos en trozos, como un socket lento
    struct Chunked {
        chunks: Vec<Vec<u8>>,
    }

    impl Read for Chunked {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.chunks.is_empty() {
                return Ok(0);
            }
            let chunk = &mut self.chunks[0];
            let n = chunk.len().min(buf.len());
            buf[..n].copy_from_slice(&chunk[..n]);
            chunk.drain(..n);
            if chunk.is_empty() {
                self.chunks.remove(0);
            }
            Ok(n)
        }
    }

    #[test]
    fn test_respond_writes_full_response() {
        let mut out = Vec::new();
        let mut conn = Connection::new(&mut out, None);

        let written = conn.respond(200, None, Some("pong")).unwrap();
        assert_eq!(written, 42);
        assert!(!conn.is_active());
        assert_eq!(conn.bytes_written(), written);
        drop(conn);

        assert_eq!(out, b"HTTP/1.1 200 OK\r\nContent-Length: 4\r\n\r\npong".to_vec());
    }

    #[test]
    fn test_second_respond_fails() {
        let mut out = Vec::new();
        let mut conn = Connection::new(&mut out, None);

        conn.respond(200, None, None).unwrap();
        let second = conn.respond(400, None, None);
        assert!(matches!(second, Err(ResponseError::NoActiveConnection)));
        drop(conn);

        // Solo quedó la primera respuesta
        assert_eq!(out, b"HTTP/1.1 200 OK\r\n\r\n".to_vec());
    }

    #[test]
    fn test_detached_connection() {
        let mut conn = Connection::detached();
        let result = conn.respond(200, None, Some("x"));
        assert!(matches!(result, Err(ResponseError::NoActiveConnection)));
    }

    #[test]
    fn test_unknown_status_keeps_connection_active() {
        let mut out = Vec::new();
        let mut conn = Connection::new(&mut out, None);

        let result = conn.respond(299, None, None);
        assert!(matches!(result, Err(ResponseError::UnknownStatusCode(_))));
        assert!(conn.is_active());

        conn.respond(400, None, None).unwrap();
        drop(conn);
        assert_eq!(out, b"HTTP/1.1 400 Bad Request\r\n\r\n".to_vec());
    }

    #[test]
    fn test_send_response() {
        let mut out = Vec::new();
        let mut conn = Connection::new(&mut out, None);
        let response = Response::json(crate::http::StatusCode::Ok, "{}");

        conn.send(&response).unwrap();
        drop(conn);
        assert_eq!(out, response.to_bytes());
    }

    #[test]
    fn test_read_request_single_read_without_content_length() {
        let raw = b"GET /ping HTTP/1.1\r\nHost: x\r\n\r\n".to_vec();
        let mut stream = Cursor::new(raw.clone());

        let read = read_request(&mut stream, 1024, 128).unwrap();
        assert_eq!(read, raw);
    }

    #[test]
    fn test_read_request_completes_split_body() {
        let mut stream = Chunked {
            chunks: vec![
                b"PUT /user HTTP/1.1\r\nContent-Length: 12\r\n\r\n".to_vec(),
                b"{\"name\"".to_vec(),
                b":\"A\"}".to_vec(),
            ],
        };

        let read = read_request(&mut stream, 1024, 128).unwrap();
        assert!(read.ends_with(br#"{"name":"A"}"#));
    }

    #[test]
    fn test_read_request_stops_at_buffer_size() {
        let mut stream = Chunked {
            chunks: vec![
                b"POST / HTTP/1.1\r\nContent-Length: 100\r\n\r\n".to_vec(),
                vec![b'a'; 100],
            ],
        };

        let read = read_request(&mut stream, 64, 128).unwrap();
        assert_eq!(read.len(), 64);
    }

    #[test]
    fn test_read_request_peer_closes_early() {
        let mut stream = Chunked {
            chunks: vec![b"POST / HTTP/1.1\r\nContent-Length: 10\r\n\r\nabc".to_vec()],
        };

        let read = read_request(&mut stream, 1024, 128).unwrap();
        assert!(read.ends_with(b"abc"));
    }

    #[test]
    fn test_read_request_empty_stream() {
        let mut stream = Cursor::new(Vec::new());
        let read = read_request(&mut stream, 1024, 128).unwrap();
        assert!(read.is_empty());
    }
}
