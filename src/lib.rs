//! # http_core
//! src/lib.rs
//!
//! Núcleo de servidor HTTP/1.1 síncrono implementado desde cero: acepta
//! conexiones TCP, parsea los bytes crudos del request, lo despacha al
//! handler registrado para ese path/método y escribe la respuesta en la
//! misma conexión.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: Parsing de requests, modelo de headers/body y responses
//! - `router`: Tabla de rutas con match exacto
//! - `server`: Loop de accept y procesamiento de una conexión a la vez
//! - `config`: Configuración por CLI y variables de entorno
//! - `logging`: Inicialización de `tracing`
//! - `commands`: Handlers de ejemplo usados por el binario
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use http_core::config::Config;
//! use http_core::http::Method;
//! use http_core::server::Server;
//!
//! let mut server = Server::new(Config::default());
//! server
//!     .add_route("/ping", Some(Method::GET), |conn, _headers, _body| {
//!         let _ = conn.respond(200, None, Some("pong"));
//!     })
//!     .expect("ruta duplicada");
//!
//! server.bind(8080).expect("Error al bindear");
//! server.listen().expect("Error en accept");
//! ```

pub mod commands;
pub mod config;
pub mod http;
pub mod logging;
pub mod router;
pub mod server;
