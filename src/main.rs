use std::sync::Arc;

use deploy_core::{ConsoleLogger, DeployFacility, Deployments, InMemoryChain, NamedAccounts,
                  StepRunner, DEPLOYER_ACCOUNT};
use deploy_domain::{network_name, Address};
use deploy_steps::{DeployMocksStep, MOCK_COORDINATOR_NAME};
use deployflow_rust::config::CONFIG;

#[tokio::main]
async fn main() {
    // Cargar .env si existe para NETWORK_CHAIN_ID / DEPLOYER_ADDRESS
    let _ = dotenvy::dotenv();

    // CLI mínima: `deployflow [--tags t1,t2]`
    let args: Vec<String> = std::env::args().collect();
    let mut tag_filter: Vec<String> = Vec::new();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--tags" => {
                i += 1;
                if i < args.len() {
                    tag_filter = args[i].split(',')
                                        .map(|t| t.trim().to_string())
                                        .filter(|t| !t.is_empty())
                                        .collect();
                }
            }
            other => {
                eprintln!("[deployflow] argumento desconocido: {other}");
                std::process::exit(2);
            }
        }
        i += 1;
    }

    let chain_id = CONFIG.network.chain_id;
    let deployer = match Address::new(&CONFIG.accounts.deployer) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("[deployflow] DEPLOYER_ADDRESS inválida: {e}");
            std::process::exit(2);
        }
    };

    let mut accounts = NamedAccounts::new();
    accounts.insert(DEPLOYER_ACCOUNT, deployer.as_str());

    let logger = Arc::new(ConsoleLogger);
    let mut deployments = Deployments::new(InMemoryChain::new(), logger.clone());
    let mut runner = StepRunner::new().add_step(DeployMocksStep::new()).build();

    eprintln!("[deployflow] red activa: {} (chain id {chain_id})",
              network_name(chain_id));

    match runner.run(chain_id, &accounts, &mut deployments, logger.as_ref(), &tag_filter)
                .await
    {
        Ok(run_id) => {
            if let Some(variants) = runner.event_variants() {
                eprintln!("[deployflow] run {run_id} eventos: {}", variants.join(""));
            }
            match deployments.get(MOCK_COORDINATOR_NAME) {
                Some(record) => {
                    println!("{} @ {}", record.name, record.address);
                }
                None => {
                    println!("sin mocks para esta red");
                }
            }
        }
        Err(e) => {
            eprintln!("[deployflow] pipeline falló: {e}");
            std::process::exit(1);
        }
    }
}
