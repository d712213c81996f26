//! # Configuración del Servidor
//! src/config.rs
//!
//! Configuración por argumentos CLI con respaldo en variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./http_core --port 8080 --buffer-size 30000 --max-headers 128
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=8080 HTTP_HOST=127.0.0.1 HTTP_LOG=debug ./http_core
//! ```

use clap::Parser;
use thiserror::Error;

/// Tamaño mínimo del buffer de lectura
///
/// Por debajo de esto ni siquiera cabe un start line razonable.
pub const MIN_BUFFER_SIZE: usize = 16;

/// Errores de validación de la configuración
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Buffer size must be >= {min} (got {0})", min = MIN_BUFFER_SIZE)]
    BufferTooSmall(usize),

    #[error("Max headers must be >= 1")]
    NoHeadersAllowed,

    #[error("Host must not be empty")]
    EmptyHost,
}

/// Configuración del servidor HTTP/1.1
#[derive(Debug, Clone, Parser)]
#[command(name = "http_core")]
#[command(about = "Servidor HTTP/1.1 síncrono: una conexión a la vez")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "8080", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "0.0.0.0", env = "HTTP_HOST")]
    pub host: String,

    /// Máximo de bytes que se leen por request
    #[arg(long = "buffer-size", default_value = "30000", env = "HTTP_BUFFER_SIZE")]
    pub buffer_size: usize,

    /// Máximo de líneas de header por request
    #[arg(long = "max-headers", default_value = "128", env = "HTTP_MAX_HEADERS")]
    pub max_headers: usize,

    /// Filtro de logging (ej: "info", "http_core=debug")
    #[arg(long = "log-level", default_value = "info", env = "HTTP_LOG")]
    pub log_level: String,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buffer_size < MIN_BUFFER_SIZE {
            return Err(ConfigError::BufferTooSmall(self.buffer_size));
        }
        if self.max_headers == 0 {
            return Err(ConfigError::NoHeadersAllowed);
        }
        if self.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }

        Ok(())
    }

    /// Imprime un resumen de la configuración
    pub fn print_summary(&self) {
        println!("╔══════════════════════════════════════════════╗");
        println!("║        http_core HTTP/1.1 Configuration      ║");
        println!("╚══════════════════════════════════════════════╝");
        println!();
        println!("🌐 Network:");
        println!("   Address:      {}", self.address());
        println!();
        println!("📦 Limits:");
        println!("   Buffer:       {} bytes", self.buffer_size);
        println!("   Headers:      {}", self.max_headers);
        println!();
        println!("📝 Logging:      {}", self.log_level);
        println!();
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 8080,
            host: "0.0.0.0".to_string(),
            buffer_size: 30_000,
            max_headers: crate::http::parser::DEFAULT_MAX_HEADERS,
            log_level: "info".to_string(),
        }
    }
}
