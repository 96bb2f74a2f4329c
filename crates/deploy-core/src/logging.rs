//! Capacidad de logging inyectada en los steps.
//!
//! El runner no escribe a stderr por su cuenta: el logger llega como
//! capacidad explícita en el contexto, de modo que los tests puedan
//! sustituirlo y afirmar exactamente qué líneas emitió un step (incluida
//! la ausencia total de salida en redes reales).
use std::sync::Mutex;

/// Reportero de progreso de deployment.
pub trait DeployLogger: Send + Sync {
    fn log(&self, message: &str);
}

/// Logger de consola (stderr) con prefijo estable.
#[derive(Debug, Default)]
pub struct ConsoleLogger;

impl DeployLogger for ConsoleLogger {
    fn log(&self, message: &str) {
        eprintln!("[deploy] {message}");
    }
}

/// Logger en memoria para tests: acumula líneas en orden de emisión.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    lines: Mutex<Vec<String>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copia de las líneas registradas hasta el momento.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }
}

impl DeployLogger for MemoryLogger {
    fn log(&self, message: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(message.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_logger_preserves_order() {
        let logger = MemoryLogger::new();
        logger.log("uno");
        logger.log("dos");
        assert_eq!(logger.lines(), vec!["uno".to_string(), "dos".to_string()]);
    }
}
