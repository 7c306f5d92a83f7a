//! Declarative text rendering of an inferred configuration.
//!
//! Line-oriented, human-editable form: one task block with `phase: command`
//! lines under a `tasks:` root, and an `extensions:` list under `vscode:`
//! when any were recommended. Pure and total over every reachable config,
//! including the empty one (which renders to the empty string).

use configscout_shared::{Phase, WorkspaceConfig};

/// Render `config` to its declarative text form.
pub fn to_declarative(config: &WorkspaceConfig) -> String {
    let mut out = String::new();

    if !config.tasks.is_empty() {
        out.push_str("tasks:\n");
        for task in &config.tasks {
            let mut first = true;
            for phase in Phase::ORDER {
                if let Some(command) = task.phase(phase) {
                    out.push_str(if first { "  - " } else { "    " });
                    out.push_str(phase.as_str());
                    out.push_str(": ");
                    out.push_str(command);
                    out.push('\n');
                    first = false;
                }
            }
        }
    }

    if let Some(vscode) = &config.vscode {
        if !vscode.extensions.is_empty() {
            out.push_str("vscode:\n  extensions:\n");
            for ext in &vscode.extensions {
                out.push_str("    - ");
                out.push_str(ext);
                out.push('\n');
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use configscout_shared::{Task, VsCodeConfig};

    #[test]
    fn renders_tasks_and_extensions() {
        let config = WorkspaceConfig {
            tasks: vec![Task {
                before: None,
                init: Some("yarn install".into()),
                command: Some("yarn run build".into()),
            }],
            vscode: Some(VsCodeConfig {
                extensions: vec!["foo".into(), "bar".into()],
            }),
        };

        assert_eq!(
            to_declarative(&config),
            "tasks:\n  - init: yarn install\n    command: yarn run build\nvscode:\n  extensions:\n    - foo\n    - bar\n"
        );
    }

    #[test]
    fn empty_config_renders_to_empty_string() {
        assert_eq!(to_declarative(&WorkspaceConfig::default()), "");
    }

    #[test]
    fn before_phase_renders_first() {
        let config = WorkspaceConfig {
            tasks: vec![Task {
                before: Some("nvm use 20".into()),
                init: Some("npm install".into()),
                command: None,
            }],
            vscode: None,
        };

        assert_eq!(
            to_declarative(&config),
            "tasks:\n  - before: nvm use 20\n    init: npm install\n"
        );
    }

    #[test]
    fn extensions_only_config_renders_vscode_block() {
        let config = WorkspaceConfig {
            tasks: vec![],
            vscode: Some(VsCodeConfig {
                extensions: vec!["golang.go".into()],
            }),
        };

        assert_eq!(
            to_declarative(&config),
            "vscode:\n  extensions:\n    - golang.go\n"
        );
    }
}
