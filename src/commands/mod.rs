//! # Comandos del Servidor
//!
//! Handlers de ejemplo que usa el binario para demostrar el núcleo.
//! Cada comando es una función que recibe el `Connection` activo, los
//! headers y el body, y responde una sola vez.

pub mod basic;

// Re-exportar funciones útiles
pub use basic::*;
