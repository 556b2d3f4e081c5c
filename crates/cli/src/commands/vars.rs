//! `vars`: list the recognized environment variables.

use anyhow::Result;
use redirects_config::{EnvVarSpec, apps_dir, env_schema};
use std::path::Path;

use crate::formatters::OutputFormat;

fn to_table(specs: &[EnvVarSpec]) -> String {
    let name_width = specs.iter().map(|s| s.name.len()).max().unwrap_or(4).max(4);
    let kind_width = specs
        .iter()
        .map(|s| s.kind.as_str().len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut out = format!(
        "{:<name_width$}  {:<kind_width$}  DEFAULT",
        "NAME", "TYPE"
    );
    for spec in specs {
        let default = if spec.default.is_empty() {
            "(empty)"
        } else {
            spec.default.as_str()
        };
        out.push_str(&format!(
            "\n{:<name_width$}  {:<kind_width$}  {}",
            spec.name,
            spec.kind.as_str(),
            default
        ));
    }
    out
}

/// Render the variable schema with defaults resolved against `root_dir`.
pub fn render(root_dir: &Path, format: OutputFormat) -> Result<String> {
    let specs = env_schema(&apps_dir(root_dir));
    match format {
        OutputFormat::Text => Ok(to_table(&specs)),
        other => other.render(&specs),
    }
}

pub fn run(root_dir: &Path, format: OutputFormat) -> Result<()> {
    println!("{}", render(root_dir, format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lists_every_variable() {
        let out = render(Path::new("/srv/app"), OutputFormat::Text).unwrap();
        let mut lines = out.lines();
        assert!(lines.next().unwrap().starts_with("NAME"));
        assert_eq!(lines.count(), env_schema(Path::new("/srv/app")).len());
        assert!(out.contains("POSTGRES_PORT"));
        assert!(out.contains("5432"));
    }

    #[test]
    fn test_path_defaults_follow_root_dir() {
        let out = render(Path::new("/srv/app"), OutputFormat::Json).unwrap();
        assert!(out.contains("/srv/app"));
        assert!(out.contains("\"kind\": \"port\""));
    }
}
