//! # Tabla de Rutas
//! src/router/mod.rs
//!
//! Mapea `(path, método opcional)` a handlers.
//!
//! ## Reglas
//!
//! - El path se compara exacto y distingue mayúsculas: sin prefijos,
//!   comodines ni parámetros.
//! - Una ruta sin método acepta cualquier método.
//! - Gana la primera ruta registrada que coincida, no la más específica.
//! - Las rutas solo se agregan; no se modifican ni se eliminan.
//! - No se puede registrar una ruta que choque con otra: mismo path y
//!   (alguno de los dos sin método, o el mismo método).

use crate::http::{Body, HeaderList, Method};
use crate::server::Connection;
use thiserror::Error;

/// Tipo de función handler
///
/// Recibe el handle de la conexión activa, los headers y el body del
/// request. Debe responder llamando `Connection::respond` una vez; si no
/// lo hace, la conexión se cierra sin respuesta.
pub type Handler = Box<dyn Fn(&mut Connection<'_>, &HeaderList, Option<&Body>) + Send + Sync>;

/// La ruta choca con otra ya registrada
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Route conflict: {} {path}", .method.as_ref().map_or("*", |m| m.as_str()))]
pub struct RouteConflict {
    pub path: String,
    pub method: Option<Method>,
}

/// Una ruta registrada
pub struct Route {
    path: String,

    /// `None` acepta cualquier método
    method: Option<Method>,

    handler: Handler,
}

impl Route {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn method(&self) -> Option<&Method> {
        self.method.as_ref()
    }

    /// Ejecuta el handler de la ruta
    pub fn invoke(&self, conn: &mut Connection<'_>, headers: &HeaderList, body: Option<&Body>) {
        (self.handler)(conn, headers, body)
    }

    /// La ruta acepta `(method, path)`; un método ausente coincide con todos
    fn matches(&self, method: Option<&Method>, path: &str) -> bool {
        let method_ok = match (self.method.as_ref(), method) {
            (None, _) | (_, None) => true,
            (Some(own), Some(requested)) => own == requested,
        };

        method_ok && self.path == path
    }
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.path)
            .field("method", &self.method)
            .finish_non_exhaustive()
    }
}

/// Router que mapea paths a handlers
#[derive(Default)]
pub struct Router {
    /// Rutas en orden de registro
    routes: Vec<Route>,
}

impl Router {
    /// Crea un nuevo router vacío
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Registra una ruta con su handler
    ///
    /// Falla si ya existe una ruta con el mismo path cuyo método se
    /// superpone con el nuevo.
    ///
    /// # Ejemplo
    /// ```
    /// use http_core::http::Method;
    /// use http_core::router::Router;
    ///
    /// let mut router = Router::new();
    /// router
    ///     .register("/ping", Some(Method::GET), |conn, _headers, _body| {
    ///         let _ = conn.respond(200, None, Some("pong"));
    ///     })
    ///     .unwrap();
    ///
    /// // Sin método choca con el GET anterior
    /// assert!(router.register("/ping", None, |_, _, _| {}).is_err());
    /// ```
    pub fn register<F>(&mut self, path: &str, method: Option<Method>, handler: F) -> Result<(), RouteConflict>
    where
        F: Fn(&mut Connection<'_>, &HeaderList, Option<&Body>) + Send + Sync + 'static,
    {
        if self.find_route(method.as_ref(), path).is_some() {
            return Err(RouteConflict {
                path: path.to_string(),
                method,
            });
        }

        self.routes.push(Route {
            path: path.to_string(),
            method,
            handler: Box::new(handler),
        });

        Ok(())
    }

    /// Busca la primera ruta que acepte `(method, path)`
    ///
    /// Recorre las rutas en orden de registro.
    pub fn find_route(&self, method: Option<&Method>, path: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.matches(method, path))
    }

    /// Rutas en orden de registro
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_conn: &mut Connection<'_>, _headers: &HeaderList, _body: Option<&Body>) {}

    fn pong(conn: &mut Connection<'_>, _headers: &HeaderList, _body: Option<&Body>) {
        let _ = conn.respond(200, None, Some("pong"));
    }

    fn bad(conn: &mut Connection<'_>, _headers: &HeaderList, _body: Option<&Body>) {
        let _ = conn.respond(400, None, None);
    }

    /// Ejecuta la ruta y retorna lo que escribió
    fn run(route: &Route) -> Vec<u8> {
        let mut out = Vec::new();
        let mut conn = Connection::new(&mut out, None);
        route.invoke(&mut conn, &HeaderList::new(), None);
        drop(conn);
        out
    }

    #[test]
    fn test_router_creation() {
        let router = Router::new();
        assert!(router.is_empty());
    }

    #[test]
    fn test_register_route() {
        let mut router = Router::new();
        router.register("/test", Some(Method::GET), noop).unwrap();

        assert_eq!(router.len(), 1);
        let route = router.routes().next().unwrap();
        assert_eq!(route.path(), "/test");
        assert_eq!(route.method(), Some(&Method::GET));
    }

    #[test]
    fn test_first_match_wins_and_wildcard_conflicts() {
        let mut router = Router::new();
        router.register("/x", Some(Method::GET), pong).unwrap();

        let conflict = router.register("/x", None, bad).unwrap_err();
        assert_eq!(conflict.path, "/x");
        assert_eq!(conflict.method, None);

        let route = router.find_route(Some(&Method::GET), "/x").unwrap();
        assert!(run(route).ends_with(b"pong"));
    }

    #[test]
    fn test_wildcard_first_blocks_specific_method() {
        let mut router = Router::new();
        router.register("/bad", None, bad).unwrap();

        assert!(router.register("/bad", Some(Method::POST), noop).is_err());
        assert_eq!(router.len(), 1);
    }

    #[test]
    fn test_same_method_conflicts() {
        let mut router = Router::new();
        router.register("/user", Some(Method::PUT), noop).unwrap();

        let conflict = router.register("/user", Some(Method::PUT), noop).unwrap_err();
        assert_eq!(conflict.to_string(), "Route conflict: PUT /user");
    }

    #[test]
    fn test_different_methods_coexist() {
        let mut router = Router::new();
        router.register("/item", Some(Method::GET), pong).unwrap();
        router.register("/item", Some(Method::DELETE), bad).unwrap();

        let get = router.find_route(Some(&Method::GET), "/item").unwrap();
        let delete = router.find_route(Some(&Method::DELETE), "/item").unwrap();

        assert!(run(get).ends_with(b"pong"));
        assert!(run(delete).starts_with(b"HTTP/1.1 400"));
    }

    #[test]
    fn test_method_mismatch_is_no_match() {
        let mut router = Router::new();
        router.register("/x", Some(Method::GET), pong).unwrap();

        assert!(router.find_route(Some(&Method::POST), "/x").is_none());
    }

    #[test]
    fn test_wildcard_route_matches_any_method() {
        let mut router = Router::new();
        router.register("/bad", None, bad).unwrap();

        for method in [Method::GET, Method::POST, Method::Other("BREW".to_string())] {
            assert!(router.find_route(Some(&method), "/bad").is_some());
        }
    }

    #[test]
    fn test_absent_method_lookup_matches_any_route() {
        let mut router = Router::new();
        router.register("/x", Some(Method::PUT), noop).unwrap();

        assert!(router.find_route(None, "/x").is_some());
    }

    #[test]
    fn test_exact_path_only() {
        let mut router = Router::new();
        router.register("/user", None, noop).unwrap();

        assert!(router.find_route(Some(&Method::GET), "/user/").is_none());
        assert!(router.find_route(Some(&Method::GET), "/users").is_none());
        assert!(router.find_route(Some(&Method::GET), "/User").is_none());
        assert!(router.find_route(Some(&Method::GET), "/").is_none());
    }

    #[test]
    fn test_lookup_is_idempotent() {
        let mut router = Router::new();
        router.register("/a", Some(Method::GET), noop).unwrap();
        router.register("/b", None, noop).unwrap();

        let first = router.find_route(Some(&Method::GET), "/b").unwrap();
        let second = router.find_route(Some(&Method::GET), "/b").unwrap();
        assert!(std::ptr::eq(first, second));

        assert!(router.find_route(Some(&Method::GET), "/c").is_none());
        assert!(router.find_route(Some(&Method::GET), "/c").is_none());
    }

    #[test]
    fn test_closure_handler_with_captured_state() {
        let greeting = String::from("hola");
        let mut router = Router::new();
        router
            .register("/greet", Some(Method::GET), move |conn, _headers, _body| {
                let _ = conn.respond(200, None, Some(greeting.as_str()));
            })
            .unwrap();

        let route = router.find_route(Some(&Method::GET), "/greet").unwrap();
        assert!(run(route).ends_with(b"hola"));
    }
}
