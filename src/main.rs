//! # http_core - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor: lee la configuración, registra los
//! comandos de ejemplo y entra al loop de accept.

use http_core::commands;
use http_core::config::Config;
use http_core::logging;
use http_core::server::Server;

fn main() {
    let config = Config::new();

    if let Err(e) = config.validate() {
        eprintln!("💥 Configuración inválida: {}", e);
        std::process::exit(2);
    }

    logging::init(&config.log_level);
    config.print_summary();

    let port = config.port;
    let mut server = Server::new(config);

    if let Err(e) = commands::register_defaults(&mut server) {
        tracing::error!(error = %e, "No se pudieron registrar las rutas");
        std::process::exit(1);
    }

    if let Err(e) = server.bind(port) {
        tracing::error!(error = %e, "Error fatal al iniciar");
        std::process::exit(1);
    }

    // Esto bloquea el thread; solo retorna si falla accept
    if let Err(e) = server.listen() {
        tracing::error!(error = %e, "Error fatal");
        std::process::exit(1);
    }
}
