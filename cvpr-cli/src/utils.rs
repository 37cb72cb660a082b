//! Output helpers for the CLI.

use cvpr::config::ConfigLoader;
use cvpr::{Config, Result};

/// Replacement shown for the API token in debug output.
const MASK: &str = "********";

/// Render the human-readable summary printed after resolution.
pub fn format_summary(config: &Config) -> String {
    let mut lines = vec![format!("Release {} ({})", config.version, config.date)];

    let deploy_type = config.deploy_type.as_deref().unwrap_or("-");
    match (&config.source, &config.target) {
        (Some(source), Some(target)) => {
            lines.push(format!("  Deploy type: {deploy_type} ({source} -> {target})"));
        }
        _ => lines.push(format!("  Deploy type: {deploy_type}")),
    }

    lines.push(format!("  Assignees:   {}", config.assignees.join(", ")));
    lines.push(format!("  Owner:       {}", config.owner));
    lines.push(format!("  Projects:    {}", config.projects.len()));
    for project in &config.projects {
        lines.push(format!("    - {} ({})", project.name, project.repo));
    }

    lines.join("\n")
}

/// Render the configuration as YAML with the token masked.
pub fn redacted_yaml(config: &Config) -> Result<String> {
    let mut shown = config.clone();
    if !shown.token.is_empty() {
        shown.token = MASK.to_string();
    }
    ConfigLoader::to_yaml(&shown)
}
