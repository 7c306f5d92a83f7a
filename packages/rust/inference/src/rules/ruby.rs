//! Ruby detector: setup script or Gemfile, startup script or Rails binary.

use async_trait::async_trait;
use configscout_shared::{Phase, Result};

use super::{Rule, RuleId};
use crate::engine::InferCtx;

pub struct RubyRule;

#[async_trait]
impl Rule for RubyRule {
    fn id(&self) -> RuleId {
        RuleId::Ruby
    }

    async fn apply(&self, ctx: &mut InferCtx<'_>) -> Result<()> {
        if ctx.exists("bin/setup").await {
            ctx.add_command("bin/setup", Phase::Init);
        } else if ctx.exists("Gemfile").await {
            ctx.add_command("bundle install", Phase::Init);
        }

        if ctx.exists("bin/startup").await {
            ctx.add_command("bin/startup", Phase::Command);
        } else if ctx.exists("bin/rails").await {
            ctx.add_command("bin/rails server", Phase::Command);
        }

        Ok(())
    }
}
