//! Detector rules: one independent unit per ecosystem.
//!
//! Rules run strictly in [`RULE_ORDER`]; the order is a contract, because
//! every rule appends to the same task phases and callers observe the
//! concatenated strings. Rules are otherwise independent — a polyglot
//! repository may trigger any number of them — with one documented
//! exception: the Python rule defers entirely to a Make/CMake build (see
//! [`make::uses_build_system`]).

mod dotnet;
mod golang;
mod java;
mod make;
mod node;
mod python;
mod ruby;
mod rustlang;

use async_trait::async_trait;
use configscout_shared::Result;

use crate::engine::InferCtx;

pub use dotnet::DotNetRule;
pub use golang::GoRule;
pub use java::JavaRule;
pub use make::MakeRule;
pub use node::NodeRule;
pub use python::PythonRule;
pub use ruby::RubyRule;
pub use rustlang::RustRule;

pub(crate) use make::uses_build_system;

// ---------------------------------------------------------------------------
// Rule identity and ordering
// ---------------------------------------------------------------------------

/// Stable identifier for each built-in rule, used for ordering and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
    Node,
    Java,
    Python,
    Go,
    Rust,
    Make,
    DotNet,
    Ruby,
}

impl RuleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::Node => "node",
            RuleId::Java => "java",
            RuleId::Python => "python",
            RuleId::Go => "go",
            RuleId::Rust => "rust",
            RuleId::Make => "make",
            RuleId::DotNet => "dotnet",
            RuleId::Ruby => "ruby",
        }
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed priority order rules run in.
///
/// Later rules' phase contributions land after earlier ones in the
/// concatenated command strings, so reordering this list changes output.
pub const RULE_ORDER: [RuleId; 8] = [
    RuleId::Node,
    RuleId::Java,
    RuleId::Python,
    RuleId::Go,
    RuleId::Rust,
    RuleId::Make,
    RuleId::DotNet,
    RuleId::Ruby,
];

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// One detector: inspects probe results and conditionally contributes
/// commands and extensions to the shared config.
///
/// A rule that does not recognize the repository returns `Ok(())` without
/// touching the config. An `Err` means the rule hit something it could not
/// handle (e.g. a malformed manifest); the engine logs it and moves on —
/// it never aborts the remaining rules.
#[async_trait]
pub trait Rule: Send + Sync {
    /// Identity tag for ordering and logs.
    fn id(&self) -> RuleId;

    /// Probe the repository and contribute to `ctx.config`.
    async fn apply(&self, ctx: &mut InferCtx<'_>) -> Result<()>;
}

/// Construct the built-in rule for a tag.
pub(crate) fn build(id: RuleId) -> Box<dyn Rule> {
    match id {
        RuleId::Node => Box::new(NodeRule),
        RuleId::Java => Box::new(JavaRule),
        RuleId::Python => Box::new(PythonRule),
        RuleId::Go => Box::new(GoRule),
        RuleId::Rust => Box::new(RustRule),
        RuleId::Make => Box::new(MakeRule),
        RuleId::DotNet => Box::new(DotNetRule),
        RuleId::Ruby => Box::new(RubyRule),
    }
}
