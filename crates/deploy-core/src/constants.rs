//! Constantes del runner.
//!
//! Valores estáticos que participan en el cálculo de fingerprints de
//! deployments. Un cambio de versión del runner invalida los fingerprints
//! almacenados aunque nombre y argumentos no cambien, forzando un
//! redeploy determinista.

/// Versión lógica del runner. Entra al `fingerprint` de cada deployment.
pub const RUNNER_VERSION: &str = "D1.0";
