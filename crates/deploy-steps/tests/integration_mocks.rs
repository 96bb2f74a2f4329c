//! Integración: pipeline completo con la facility real en memoria.

use std::sync::Arc;

use deploy_core::{DeployFacility, Deployments, InMemoryChain, MemoryLogger, NamedAccounts, StepRunner};
use deploy_steps::{DeployMocksStep, MOCK_COORDINATOR_NAME};

fn accounts() -> NamedAccounts {
    let mut accounts = NamedAccounts::new();
    accounts.insert("deployer", "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266");
    accounts
}

#[tokio::test]
async fn provisions_mock_coordinator_on_local_chain() {
    let accounts = accounts();
    let logger = Arc::new(MemoryLogger::new());
    let mut deployments = Deployments::new(InMemoryChain::new(), logger.clone());
    let mut runner = StepRunner::new().add_step(DeployMocksStep::new()).build();

    runner.run(31337, &accounts, &mut deployments, logger.as_ref(), &[])
          .await
          .expect("pipeline should complete");

    let record = deployments.get(MOCK_COORDINATOR_NAME)
                            .expect("record must be resolvable by later steps");
    assert!(record.newly_deployed);
    assert_eq!(record.args.len(), 2);
    assert_eq!(deployments.chain().transaction_count(), 1);
    assert_eq!(runner.event_variants().expect("events"), vec!["I", "S", "F", "C"]);
}

#[tokio::test]
async fn second_run_reuses_the_cached_record() {
    let accounts = accounts();
    let logger = Arc::new(MemoryLogger::new());
    let mut deployments = Deployments::new(InMemoryChain::new(), logger.clone());
    let mut runner = StepRunner::new().add_step(DeployMocksStep::new()).build();

    runner.run(31337, &accounts, &mut deployments, logger.as_ref(), &[])
          .await
          .expect("first run");
    runner.run(31337, &accounts, &mut deployments, logger.as_ref(), &[])
          .await
          .expect("second run");

    // El cache de la facility absorbe la repetición: una sola transacción.
    assert_eq!(deployments.chain().transaction_count(), 1);
    assert!(logger.lines().iter().any(|l| l.starts_with("reusing \"MockOracleCoordinator\"")));
}

#[tokio::test]
async fn mainnet_run_provisions_nothing() {
    let accounts = accounts();
    let logger = Arc::new(MemoryLogger::new());
    let mut deployments = Deployments::new(InMemoryChain::new(), logger.clone());
    let mut runner = StepRunner::new().add_step(DeployMocksStep::new()).build();

    runner.run(1, &accounts, &mut deployments, logger.as_ref(), &[])
          .await
          .expect("noop run");

    assert!(deployments.get(MOCK_COORDINATOR_NAME).is_none());
    assert_eq!(deployments.chain().transaction_count(), 0);
    // El step corre (está en "all") pero no emite ni despliega nada.
    assert_eq!(runner.event_variants().expect("events"), vec!["I", "S", "F", "C"]);
    assert!(logger.lines().is_empty());
}

#[tokio::test]
async fn mocks_tag_selects_the_step() {
    let accounts = accounts();
    let logger = Arc::new(MemoryLogger::new());
    let mut deployments = Deployments::new(InMemoryChain::new(), logger.clone());
    let mut runner = StepRunner::new().add_step(DeployMocksStep::new()).build();

    runner.run(31337,
               &accounts,
               &mut deployments,
               logger.as_ref(),
               &["mocks".to_string()])
          .await
          .expect("filtered run");

    assert!(deployments.get(MOCK_COORDINATOR_NAME).is_some());
}
