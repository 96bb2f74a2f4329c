use async_trait::async_trait;

use crate::context::StepContext;
use crate::errors::CoreRunnerError;

/// Trait que define un step de deployment.
///
/// El descriptor es declarativo: id, tags y dependencias son metadata
/// estática consultada por el runner antes de ejecutar. Un step decide
/// por sí mismo si la red activa lo requiere; devolver `Ok(())` sin
/// efectos es la forma normal de "no aplica aquí".
#[async_trait]
pub trait DeployStep: Send + Sync {
    /// Identificador estable y único dentro del pipeline.
    fn id(&self) -> &str;

    /// Nombre opcional amigable.
    fn name(&self) -> &str {
        self.id()
    }

    /// Etiquetas bajo las cuales el runner incluye/excluye este step.
    fn tags(&self) -> Vec<String>;

    /// Ids de steps que deben haber terminado antes de ejecutar éste.
    fn dependencies(&self) -> Vec<String> {
        Vec::new()
    }

    /// Ejecuta el step contra el contexto. Los errores se propagan sin
    /// envolver: un fallo de provisioning es un fallo del pipeline.
    async fn run(&self, ctx: &mut StepContext<'_>) -> Result<(), CoreRunnerError>;
}
