//! # Servidor TCP Secuencial
//! src/server/tcp.rs
//!
//! Acepta una conexión a la vez y la procesa completa antes del siguiente
//! `accept`: lectura, parsing, búsqueda de ruta, handler y cierre.
//!
//! ## Estados
//!
//! ```text
//! Unbound --bind--> Bound --listen--> Listening --accept--> Processing
//!                                         ^                     |
//!                                         +---------------------+
//! ```
//!
//! Un request malformado o sin ruta se descarta sin respuesta y el
//! servidor sigue aceptando. Solo un fallo de `accept` termina el loop.

use super::connection::{self, Connection};
use crate::config::Config;
use crate::http::{Body, HeaderList, Method, ParseError};
use crate::http::parser;
use crate::router::{RouteConflict, Router};
use std::io;
use std::net::{Shutdown, SocketAddr, TcpListener, TcpStream};
use thiserror::Error;

/// Errores de setup y del loop de accept; todos son fatales
#[derive(Debug, Error)]
pub enum ServerError {
    /// No se pudo crear o bindear el socket
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },

    /// `bind` se llamó dos veces
    #[error("Server is already bound")]
    AlreadyBound,

    /// `listen` se llamó antes de `bind`
    #[error("Server is not bound")]
    NotBound,

    /// Falló `accept`
    #[error("Failed to accept connection: {0}")]
    Accept(#[source] io::Error),
}

/// Qué pasó con una conexión procesada
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionOutcome {
    /// El cliente cerró sin enviar bytes
    Closed,

    /// Falló la lectura del socket
    ReadFailed,

    /// El request no se pudo parsear; no se envió respuesta
    Rejected(ParseError),

    /// Ninguna ruta coincide; no se envió respuesta
    Unrouted,

    /// El handler terminó sin responder
    Unanswered,

    /// El handler respondió con esta cantidad de bytes
    Answered(usize),
}

/// Servidor HTTP/1.1 de una conexión a la vez
pub struct Server {
    config: Config,
    router: Router,
    listener: Option<TcpListener>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            router: Router::new(),
            listener: None,
        }
    }

    /// Registra una ruta. Solo durante el setup, antes de `listen`.
    pub fn add_route<F>(&mut self, path: &str, method: Option<Method>, handler: F) -> Result<(), RouteConflict>
    where
        F: Fn(&mut Connection<'_>, &HeaderList, Option<&Body>) + Send + Sync + 'static,
    {
        let display_method = method.as_ref().map_or("*", |m| m.as_str()).to_string();
        self.router.register(path, method, handler)?;

        tracing::debug!(method = %display_method, path, "Ruta registrada");
        Ok(())
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Crea el socket y lo bindea a `host:port`
    ///
    /// Con puerto 0 el sistema elige uno libre; la dirección real se
    /// retorna. Un fallo aquí es terminal: no se reintenta.
    pub fn bind(&mut self, port: u16) -> Result<SocketAddr, ServerError> {
        if self.listener.is_some() {
            return Err(ServerError::AlreadyBound);
        }

        let address = format!("{}:{}", self.config.host, port);
        let bind_error = |source| ServerError::Bind {
            address: address.clone(),
            source,
        };

        let listener = TcpListener::bind(&address).map_err(bind_error)?;
        let local = listener.local_addr().map_err(bind_error)?;

        tracing::info!(address = %local, "Servidor escuchando");
        self.listener = Some(listener);
        Ok(local)
    }

    /// Dirección en la que está bindeado el servidor
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.listener.as_ref().and_then(|l| l.local_addr().ok())
    }

    /// Loop de accept
    ///
    /// No retorna mientras `accept` funcione. Retorna error si el servidor
    /// no está bindeado o si `accept` falla.
    pub fn listen(&self) -> Result<(), ServerError> {
        tracing::info!(routes = self.router.len(), "Modo secuencial: una conexión a la vez");

        loop {
            self.accept_one()?;
        }
    }

    /// Acepta y procesa exactamente una conexión
    pub fn accept_one(&self) -> Result<ConnectionOutcome, ServerError> {
        let listener = self.listener.as_ref().ok_or(ServerError::NotBound)?;

        tracing::trace!("Esperando nueva conexión");
        let (stream, peer) = listener.accept().map_err(|e| {
            tracing::error!(error = %e, "Error al aceptar conexión");
            ServerError::Accept(e)
        })?;

        Ok(self.handle_connection(stream, Some(peer)))
    }

    /// Procesa una conexión ya aceptada y la cierra
    pub fn handle_connection(&self, mut stream: TcpStream, peer: Option<SocketAddr>) -> ConnectionOutcome {
        let outcome = self.process_request(&mut stream, peer);

        // El cliente pudo haber cerrado ya; no importa
        let _ = stream.shutdown(Shutdown::Both);

        let peer_label = peer.map(|p| p.to_string()).unwrap_or_else(|| "unknown".to_string());
        tracing::debug!(peer = %peer_label, outcome = ?outcome, "Conexión cerrada");
        outcome
    }

    fn process_request(&self, stream: &mut TcpStream, peer: Option<SocketAddr>) -> ConnectionOutcome {
        let buffer = match connection::read_request(stream, self.config.buffer_size, self.config.max_headers) {
            Ok(buffer) => buffer,
            Err(e) => {
                tracing::warn!(error = %e, "Error al leer del socket");
                return ConnectionOutcome::ReadFailed;
            }
        };

        if buffer.is_empty() {
            return ConnectionOutcome::Closed;
        }
        tracing::trace!(bytes = buffer.len(), "Request leído");

        let request = match parser::parse_with_limit(&buffer, self.config.max_headers) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(error = %e, bytes = buffer.len(), "Request descartado");
                return ConnectionOutcome::Rejected(e);
            }
        };

        let Some(route) = self.router.find_route(Some(request.method()), request.path()) else {
            tracing::info!(method = %request.method(), path = request.path(), "Ninguna ruta coincide");
            return ConnectionOutcome::Unrouted;
        };

        let mut conn = Connection::new(stream, peer);
        route.invoke(&mut conn, request.headers(), request.body());

        if conn.is_active() {
            tracing::warn!(method = %request.method(), path = request.path(), "El handler no respondió");
            ConnectionOutcome::Unanswered
        } else {
            tracing::info!(
                method = %request.method(),
                path = request.path(),
                bytes = conn.bytes_written(),
                "Request atendido"
            );
            ConnectionOutcome::Answered(conn.bytes_written())
        }
    }
}
