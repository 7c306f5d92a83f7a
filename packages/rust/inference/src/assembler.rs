//! Merge primitives that accumulate rule contributions into a config.
//!
//! Every rule mutates the shared [`WorkspaceConfig`] exclusively through
//! these two functions, which is what keeps the concatenation semantics in
//! one place: phases are append-only, joined with `" && "` in rule order.

use configscout_shared::{Phase, Task, VsCodeConfig, WorkspaceConfig};

/// Add `command` to `phase` of the first task, creating the task lazily.
///
/// When the phase already holds a value the command is appended with a
/// `" && "` join. If `unless` is given and the existing value *contains* it
/// as a substring, the append is skipped — an idempotence guard against
/// duplicate concatenation. The containment check is deliberately looser
/// than exact-segment matching; it mirrors the observed behavior of the
/// system this engine models.
pub fn add_command(
    config: &mut WorkspaceConfig,
    command: &str,
    phase: Phase,
    unless: Option<&str>,
) {
    if config.tasks.is_empty() {
        config.tasks.push(Task::default());
    }

    let slot = config.tasks[0].phase_mut(phase);
    match slot {
        Some(existing) => {
            if let Some(marker) = unless {
                if existing.contains(marker) {
                    return;
                }
            }
            *existing = format!("{existing} && {command}");
        }
        None => *slot = Some(command.to_string()),
    }
}

/// Recommend an editor extension, deduplicated by identifier.
pub fn add_extension(config: &mut WorkspaceConfig, id: &str) {
    let vscode = config.vscode.get_or_insert_with(VsCodeConfig::default);
    if !vscode.extensions.iter().any(|e| e == id) {
        vscode.extensions.push(id.to_string());
    }
}
