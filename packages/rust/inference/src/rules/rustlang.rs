//! Rust detector: Cargo manifest, watch-based run command.

use async_trait::async_trait;
use configscout_shared::{Phase, Result};

use super::{Rule, RuleId};
use crate::engine::InferCtx;

pub struct RustRule;

#[async_trait]
impl Rule for RustRule {
    fn id(&self) -> RuleId {
        RuleId::Rust
    }

    async fn apply(&self, ctx: &mut InferCtx<'_>) -> Result<()> {
        if ctx.exists("Cargo.toml").await {
            ctx.add_command("cargo build", Phase::Init);
            ctx.add_command("cargo watch -x run", Phase::Command);
        }
        Ok(())
    }
}
