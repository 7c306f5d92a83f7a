//! Core domain types for inferred workspace configurations.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// A named command slot within a [`Task`].
///
/// Rendering and execution order is `Before`, `Init`, `Command`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Runs before everything else (environment preparation).
    Before,
    /// One-time setup: dependency installation, builds.
    Init,
    /// The long-running command that starts the project.
    Command,
}

impl Phase {
    /// All phases in rendering/execution order.
    pub const ORDER: [Phase; 3] = [Phase::Before, Phase::Init, Phase::Command];

    /// The phase's name as it appears in the declarative rendering.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Before => "before",
            Phase::Init => "init",
            Phase::Command => "command",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Task
// ---------------------------------------------------------------------------

/// One shell-command group with three optional named phases.
///
/// Phase strings are append-only: contributions from multiple rules are
/// joined with `" && "` in rule order, never replaced or reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Pre-setup command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    /// Setup/build command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub init: Option<String>,
    /// Run command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl Task {
    /// Borrow the slot for a phase.
    pub fn phase(&self, phase: Phase) -> &Option<String> {
        match phase {
            Phase::Before => &self.before,
            Phase::Init => &self.init,
            Phase::Command => &self.command,
        }
    }

    /// Mutably borrow the slot for a phase.
    pub fn phase_mut(&mut self, phase: Phase) -> &mut Option<String> {
        match phase {
            Phase::Before => &mut self.before,
            Phase::Init => &mut self.init,
            Phase::Command => &mut self.command,
        }
    }
}

// ---------------------------------------------------------------------------
// VsCodeConfig
// ---------------------------------------------------------------------------

/// Editor-related suggestions: recommended extension identifiers.
///
/// Insertion order is preserved for stable output, but carries no meaning;
/// the list is deduplicated on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VsCodeConfig {
    /// Extension identifiers (e.g. `golang.go`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<String>,
}

// ---------------------------------------------------------------------------
// WorkspaceConfig
// ---------------------------------------------------------------------------

/// The inference output: ordered tasks plus editor suggestions.
///
/// The current engine populates at most one task, but the model supports
/// multiplicity. An empty config is a valid terminal output meaning "no
/// inference possible", not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Ordered task groups.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<Task>,
    /// Editor suggestions, present once any rule recommended an extension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vscode: Option<VsCodeConfig>,
}

impl WorkspaceConfig {
    /// True when no rule contributed anything.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
            && self
                .vscode
                .as_ref()
                .is_none_or(|v| v.extensions.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_order_and_names() {
        let names: Vec<&str> = Phase::ORDER.iter().map(|p| p.as_str()).collect();
        assert_eq!(names, ["before", "init", "command"]);
    }

    #[test]
    fn empty_config_is_empty() {
        assert!(WorkspaceConfig::default().is_empty());

        let with_empty_vscode = WorkspaceConfig {
            tasks: vec![],
            vscode: Some(VsCodeConfig::default()),
        };
        assert!(with_empty_vscode.is_empty());

        let with_task = WorkspaceConfig {
            tasks: vec![Task {
                init: Some("make".into()),
                ..Task::default()
            }],
            vscode: None,
        };
        assert!(!with_task.is_empty());
    }

    #[test]
    fn config_json_skips_absent_fields() {
        let config = WorkspaceConfig {
            tasks: vec![Task {
                before: None,
                init: Some("yarn install".into()),
                command: Some("yarn run watch".into()),
            }],
            vscode: Some(VsCodeConfig {
                extensions: vec!["dbaeumer.vscode-eslint".into()],
            }),
        };

        let json = serde_json::to_string(&config).expect("serialize");
        assert!(!json.contains("before"));
        assert!(json.contains("yarn install"));

        let parsed: WorkspaceConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, config);
    }

    #[test]
    fn task_phase_accessors() {
        let mut task = Task::default();
        *task.phase_mut(Phase::Init) = Some("go get".into());
        assert_eq!(task.phase(Phase::Init).as_deref(), Some("go get"));
        assert!(task.phase(Phase::Command).is_none());
    }
}
