//! # Módulo HTTP
//!
//! Subconjunto estricto del framing HTTP/1.1, implementado desde cero:
//!
//! - Parsing de requests desde bytes crudos
//! - Modelo de request (método, path, headers crudos, body)
//! - Construcción de responses
//! - Tabla de status codes
//!
//! ## Lo que no se soporta
//!
//! - Conexiones persistentes (keep-alive) ni pipelining
//! - Chunked transfer encoding
//! - Headers multilínea (folding)
//! - Query strings: el path se entrega tal cual llegó
//!
//! ### Formato de Request
//!
//! ```text
//! PUT /user HTTP/1.1\r\n
//! Content-Type: application/json\r\n
//! \r\n
//! {"name":"A"}
//! ```

pub mod headers;   // Lista ordenada de headers crudos
pub mod parser;    // Parsing de HTTP requests
pub mod request;   // Modelo de request
pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
pub use headers::HeaderList;
pub use parser::ParseError;
pub use request::{Body, Method, Request};
pub use response::{Response, ResponseError};
pub use status::{StatusCode, UnknownStatusCode};
