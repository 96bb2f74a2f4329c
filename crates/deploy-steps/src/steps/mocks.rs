//! DeployMocksStep (provisioner condicional de infraestructura mock)
//!
//! - En la red local en memoria despliega el coordinador mock del oráculo
//!   de aleatoriedad, para que los contratos dependientes puedan probarse
//!   sin un servicio de oráculo vivo.
//! - En cualquier otra red es un no-op garantizado: ni deploy, ni log, ni
//!   error (las direcciones reales del oráculo se configuran afuera).
//! - La idempotencia del deploy la garantiza el cache de la facility; el
//!   step siempre invoca `deploy` y confía en ese contrato.

use async_trait::async_trait;
use serde_json::json;

use deploy_core::{CoreRunnerError, DeployOptions, DeployStep, StepContext};
use deploy_domain::is_development;

/// Nombre lógico bajo el cual steps posteriores resuelven el mock.
pub const MOCK_COORDINATOR_NAME: &str = "MockOracleCoordinator";

/// Premium por request del coordinador mock: 0.25 ether en wei.
pub const BASE_FEE: u64 = 250_000_000_000_000_000;

/// Precio LINK por unidad de gas simulado por el mock.
pub const GAS_PRICE_LINK: u64 = 1_000_000_000;

const SEPARATOR: &str = "------------------------------------------------------";

/// Step de provisioning de mocks. Sin estado propio: toda la entrada
/// llega por el contexto.
#[derive(Debug, Default)]
pub struct DeployMocksStep;

impl DeployMocksStep {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DeployStep for DeployMocksStep {
    fn id(&self) -> &str {
        "deploy_mocks"
    }

    fn tags(&self) -> Vec<String> {
        vec!["all".to_string(), "mocks".to_string()]
    }

    async fn run(&self, ctx: &mut StepContext<'_>) -> Result<(), CoreRunnerError> {
        // Clasificación de red: fuera de la cadena local no hay nada que
        // hacer y ninguna salida observable.
        if !is_development(ctx.chain_id) {
            return Ok(());
        }

        let deployer = ctx.accounts.deployer()?.to_string();
        ctx.log.log("Local network detected! Deploying mocks...");
        ctx.deployments
           .deploy(MOCK_COORDINATOR_NAME,
                   DeployOptions { from: deployer,
                                   args: vec![json!(BASE_FEE), json!(GAS_PRICE_LINK)],
                                   log: true })
           .await?;
        ctx.log.log("Mocks deployed!");
        ctx.log.log(SEPARATOR);
        Ok(())
    }
}
