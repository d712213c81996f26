//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! Este módulo implementa el servidor TCP que:
//! 1. Escucha en un puerto
//! 2. Acepta una conexión a la vez
//! 3. Lee y parsea el request
//! 4. Entrega al handler un `Connection` para que responda
//! 5. Cierra la conexión y vuelve a aceptar

pub mod connection;
pub mod tcp;

// Re-exportar para facilitar el uso
pub use connection::Connection;
pub use tcp::{ConnectionOutcome, Server, ServerError};
