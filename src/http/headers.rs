//! # Lista de Headers
//! src/http/headers.rs
//!
//! Los headers se guardan tal cual llegaron por el cable: cada entrada es
//! una línea completa `Name: value`, sin separar nombre y valor. El orden
//! de inserción es el orden del cable y se respeta al re-serializar.

/// Secuencia ordenada de líneas de header crudas
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderList {
    lines: Vec<String>,
}

impl HeaderList {
    /// Crea una lista vacía
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Agrega una línea cruda al final (ej: `"Content-Type: text/plain"`)
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Agrega un header armando la línea `name: value`
    pub fn insert(&mut self, name: &str, value: &str) {
        self.lines.push(format!("{}: {}", name, value));
    }

    /// Número de líneas
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Itera las líneas en orden de llegada
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Busca el valor del primer header con ese nombre
    ///
    /// El nombre se compara sin distinguir mayúsculas y el valor se
    /// retorna sin espacios alrededor. Las líneas sin `:` se ignoran.
    ///
    /// # Ejemplo
    /// ```
    /// use http_core::http::HeaderList;
    ///
    /// let mut headers = HeaderList::new();
    /// headers.push("Host: localhost:8080");
    ///
    /// assert_eq!(headers.get("host"), Some("localhost:8080"));
    /// assert_eq!(headers.get("Accept"), None);
    /// ```
    pub fn get(&self, name: &str) -> Option<&str> {
        self.lines.iter().find_map(|line| {
            let (line_name, value) = line.split_once(':')?;
            if line_name.trim().eq_ignore_ascii_case(name) {
                Some(value.trim())
            } else {
                None
            }
        })
    }

    /// Valor numérico de `Content-Length`, si existe y es válido
    pub fn content_length(&self) -> Option<usize> {
        self.get("Content-Length")?.parse().ok()
    }
}

impl<S: Into<String>> FromIterator<S> for HeaderList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().map(Into::into).collect(),
        }
    }
}
