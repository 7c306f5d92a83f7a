//! Workspace-configuration inference for repositories without explicit config.
//!
//! Given read access to a repository snapshot, ConfigScout probes the file
//! tree with a fixed-order pipeline of detector rules and produces a
//! best-effort [`WorkspaceConfig`](configscout_shared::WorkspaceConfig):
//! ordered setup/build/run commands plus recommended editor extensions.
//!
//! The interesting part is latency: probes may be network-backed and slow,
//! while the rules walk them strictly sequentially. [`ConfigGuesser`] wraps
//! the raw [`FileProvider`] with a per-call memoization layer and a
//! process-wide learned-path set, so that on warm runs every historically
//! probed path is prefetched in parallel before the rules ask for it.
//!
//! The engine never executes commands, never mutates the repository, and
//! never fails hard: an unrecognized layout yields an absent result, and a
//! single broken rule is logged and skipped.

pub mod assembler;
pub mod cache;
pub mod engine;
pub mod probe;
pub mod render;
pub mod rules;

#[cfg(test)]
pub(crate) mod testkit;

// Re-export public API at crate root for ergonomic imports.
pub use cache::{ConfigGuesser, LearnedPaths, ProbeCache};
pub use engine::{ConfigInferrer, InferCtx};
pub use probe::{FileProvider, Probes};
pub use render::to_declarative;
pub use rules::{RULE_ORDER, Rule, RuleId};
