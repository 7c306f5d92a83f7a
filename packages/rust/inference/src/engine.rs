//! The contribution pipeline: ordered rules over one inference context.

use configscout_shared::{Phase, WorkspaceConfig};
use tracing::{debug, warn};

use crate::assembler;
use crate::probe::Probes;
use crate::rules::{self, RULE_ORDER, Rule, RuleId};

// ---------------------------------------------------------------------------
// InferCtx
// ---------------------------------------------------------------------------

/// Per-call mutable state: the in-progress config plus the probe handle
/// bound to one repository snapshot. Created fresh per inference call and
/// discarded when it returns.
pub struct InferCtx<'a> {
    probes: &'a dyn Probes,
    /// The config rules accumulate into.
    pub config: WorkspaceConfig,
}

impl<'a> InferCtx<'a> {
    /// Fresh context with an empty config.
    pub fn new(probes: &'a dyn Probes) -> Self {
        Self {
            probes,
            config: WorkspaceConfig::default(),
        }
    }

    /// True iff a readable file exists at `path`.
    pub async fn exists(&self, path: &str) -> bool {
        self.probes.exists(path).await
    }

    /// File content at `path`, or `None` if missing or unreadable.
    pub async fn read(&self, path: &str) -> Option<String> {
        self.probes.read(path).await
    }

    /// Append `command` to `phase` (see [`assembler::add_command`]).
    pub fn add_command(&mut self, command: &str, phase: Phase) {
        assembler::add_command(&mut self.config, command, phase, None);
    }

    /// Append `command` to `phase` unless the phase already contains
    /// `unless` as a substring.
    pub fn add_command_unless(&mut self, command: &str, phase: Phase, unless: &str) {
        assembler::add_command(&mut self.config, command, phase, Some(unless));
    }

    /// Recommend an extension, deduplicated.
    pub fn add_extension(&mut self, id: &str) {
        assembler::add_extension(&mut self.config, id);
    }
}

// ---------------------------------------------------------------------------
// ConfigInferrer
// ---------------------------------------------------------------------------

/// Runs the detector rules in their fixed priority order.
pub struct ConfigInferrer {
    rules: Vec<Box<dyn Rule>>,
}

impl ConfigInferrer {
    /// Inferrer with the built-in rule set in [`RULE_ORDER`].
    pub fn new() -> Self {
        Self {
            rules: RULE_ORDER.iter().map(|id| rules::build(*id)).collect(),
        }
    }

    /// Inferrer with a custom rule list, in the given order.
    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// The rule order this inferrer will run, as identity tags.
    pub fn rule_ids(&self) -> Vec<RuleId> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    /// Walk all rules sequentially against one repository snapshot.
    ///
    /// Each rule is awaited to completion before the next starts. A failing
    /// rule is logged and skipped; the contract is best-effort partial
    /// result, never total failure — this method cannot error. The returned
    /// config is deterministic for fixed repository contents, independent
    /// of probe completion timing.
    pub async fn infer(&self, probes: &dyn Probes) -> WorkspaceConfig {
        let mut ctx = InferCtx::new(probes);

        for rule in &self.rules {
            debug!(rule = %rule.id(), "running detector");
            if let Err(e) = rule.apply(&mut ctx).await {
                warn!(rule = %rule.id(), error = %e, "detector failed, skipping");
            }
        }

        ctx.config
    }
}

impl Default for ConfigInferrer {
    fn default() -> Self {
        Self::new()
    }
}
