use super::IntegrationHarness;
use anyhow::Result;
use notestamp::config::{config_file_path, load_or_default, save, AppConfig, HOME_ENV};
use std::env;

#[test]
fn config_persists_under_workspace_home() -> Result<()> {
    let harness = IntegrationHarness::new();
    env::set_var(HOME_ENV, harness.workspace_path());

    assert_eq!(load_or_default()?, AppConfig::default());

    let mut config = AppConfig::default();
    config.vault.root = Some(harness.vault_path());
    config.vault.note_extension = "txt".into();
    save(&config)?;

    let path = config_file_path()?;
    assert!(path.starts_with(harness.workspace_path()));
    assert_eq!(load_or_default()?, config);

    env::remove_var(HOME_ENV);
    Ok(())
}
