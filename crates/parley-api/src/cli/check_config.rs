//! `parley check-config`: validate configuration without starting the server.

use std::path::Path;

use serde::Serialize;

use parley_infra::config::{read_config, resolve_api_key};

use crate::state::build_agents;

/// Outcome of one check.
#[derive(Debug, Serialize)]
pub struct Check {
    pub name: String,
    pub ok: bool,
    pub detail: String,
}

impl Check {
    fn new(name: impl Into<String>, result: Result<String, String>) -> Self {
        let (ok, detail) = match result {
            Ok(detail) => (true, detail),
            Err(detail) => (false, detail),
        };
        Self {
            name: name.into(),
            ok,
            detail,
        }
    }
}

/// Run every check against the config at `path`.
pub async fn run_checks(path: &Path) -> Vec<Check> {
    let config = match read_config(path).await {
        Ok(config) => config,
        Err(e) => return vec![Check::new("config file", Err(e.to_string()))],
    };

    let mut checks = vec![Check::new(
        "config file",
        Ok(format!("{} parsed", path.display())),
    )];

    checks.push(Check::new(
        "provider",
        Ok(format!(
            "{} at {} using {}",
            config.provider.name, config.provider.base_url, config.provider.model
        )),
    ));

    checks.push(Check::new(
        "api key",
        resolve_api_key(&config.provider)
            .map(|_| "present".to_string())
            .map_err(|e| e.to_string()),
    ));

    for def in &config.agents {
        checks.push(Check::new(
            format!("agent '{}'", def.name),
            build_agents(std::slice::from_ref(def))
                .map(|_| "template ok".to_string())
                .map_err(|e| e.to_string()),
        ));
    }

    checks
}

/// Print the report; fails if any check failed.
pub async fn check_config(path: &Path, json: bool) -> anyhow::Result<()> {
    let checks = run_checks(path).await;
    let failed = checks.iter().filter(|c| !c.ok).count();

    if json {
        println!("{}", serde_json::to_string_pretty(&checks)?);
    } else {
        println!();
        for check in &checks {
            let mark = if check.ok {
                console::style("✓").green()
            } else {
                console::style("✗").red()
            };
            println!(
                "  {} {}: {}",
                mark,
                console::style(&check.name).bold(),
                check.detail
            );
        }
        println!();
    }

    if failed > 0 {
        anyhow::bail!("{failed} check(s) failed");
    }
    Ok(())
}
