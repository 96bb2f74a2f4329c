//! Configuración central de la aplicación.
//! Lee variables de entorno (cargadas desde `.env` por el binario) y
//! expone una estructura inmutable (`CONFIG`). La identidad de red y la
//! cuenta deployer se resuelven una sola vez acá y después viajan como
//! entradas explícitas del pipeline.
use once_cell::sync::Lazy;
use std::env;

use deploy_domain::LOCAL_CHAIN_ID;

/// Primera cuenta del nodo local de desarrollo (deployer por defecto).
pub const DEFAULT_DEPLOYER: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";

/// Configuración global de la aplicación.
pub struct AppConfig {
    /// Red activa de la corrida.
    pub network: NetworkConfig,
    /// Cuentas nombradas del pipeline.
    pub accounts: AccountsConfig,
}

/// Identidad de red de la corrida.
pub struct NetworkConfig {
    /// Chain id (`NETWORK_CHAIN_ID`); por defecto la cadena local.
    pub chain_id: u64,
}

/// Direcciones de cuentas nombradas.
pub struct AccountsConfig {
    /// Cuenta que firma los deployments (`DEPLOYER_ADDRESS`).
    pub deployer: String,
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let chain_id = env::var("NETWORK_CHAIN_ID").ok()
        .and_then(|v| v.parse().ok()).unwrap_or(LOCAL_CHAIN_ID);
    let deployer = env::var("DEPLOYER_ADDRESS").unwrap_or_else(|_| DEFAULT_DEPLOYER.to_string());
    AppConfig {
        network: NetworkConfig { chain_id },
        accounts: AccountsConfig { deployer },
    }
});
