use std::collections::BTreeMap;

use anyhow::Context;
use regex_lite::Regex;
use serde::Deserialize;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    /// `null` for normal dependencies, `"dev"` or `"build"` otherwise
    kind: Option<String>,
}

/// Crates that must stay pure, and the dependencies they may not take.
fn layering_rules() -> anyhow::Result<BTreeMap<&'static str, Regex>> {
    let transport = r"dioxus.*|reqwest|gloo-.*|web-sys|wasm-bindgen.*|js-sys|tokio.*";
    Ok(BTreeMap::from([
        (
            "tracker-domain",
            Regex::new(&format!("^({transport}|tracker-shared|tracker-wizard)$"))?,
        ),
        (
            "tracker-shared",
            Regex::new(&format!("^({transport}|tracker-wizard)$"))?,
        ),
    ]))
}

fn violations(metadata: &Metadata, rules: &BTreeMap<&'static str, Regex>) -> Vec<String> {
    let mut found = Vec::new();
    for package in &metadata.packages {
        let Some(forbidden) = rules.get(package.name.as_str()) else {
            continue;
        };
        for dep in &package.dependencies {
            if dep.kind.is_none() && forbidden.is_match(&dep.name) {
                found.push(format!("{} depends on {}", package.name, dep.name));
            }
        }
    }
    found
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;
    let rules = layering_rules()?;

    for name in rules.keys() {
        if !metadata.packages.iter().any(|p| p.name == *name) {
            anyhow::bail!("workspace member {name} not found");
        }
    }

    let found = violations(&metadata, &rules);
    if !found.is_empty() {
        for violation in &found {
            eprintln!("  {violation}");
        }
        anyhow::bail!("arch-check failed: {} layering violation(s)", found.len());
    }

    println!("arch-check passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(json: &str) -> Metadata {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn transport_crates_in_domain_are_flagged() {
        let metadata = metadata(
            r#"{"packages": [
                {"name": "tracker-domain", "dependencies": [
                    {"name": "serde", "kind": null},
                    {"name": "reqwest", "kind": null}
                ]},
                {"name": "tracker-wizard", "dependencies": [
                    {"name": "dioxus", "kind": null}
                ]}
            ]}"#,
        );

        let found = violations(&metadata, &layering_rules().unwrap());
        assert_eq!(found, vec!["tracker-domain depends on reqwest".to_string()]);
    }

    #[test]
    fn dev_dependencies_are_allowed() {
        let metadata = metadata(
            r#"{"packages": [
                {"name": "tracker-shared", "dependencies": [
                    {"name": "tokio", "kind": "dev"},
                    {"name": "tracker-domain", "kind": null}
                ]}
            ]}"#,
        );

        assert!(violations(&metadata, &layering_rules().unwrap()).is_empty());
    }

    #[test]
    fn domain_may_not_depend_on_shared() {
        let metadata = metadata(
            r#"{"packages": [
                {"name": "tracker-domain", "dependencies": [
                    {"name": "tracker-shared", "kind": null}
                ]}
            ]}"#,
        );

        assert_eq!(violations(&metadata, &layering_rules().unwrap()).len(), 1);
    }
}
