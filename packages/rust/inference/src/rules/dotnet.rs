//! .NET/NuGet detector: packages descriptor.

use async_trait::async_trait;
use configscout_shared::{Phase, Result};

use super::{Rule, RuleId};
use crate::engine::InferCtx;

pub struct DotNetRule;

#[async_trait]
impl Rule for DotNetRule {
    fn id(&self) -> RuleId {
        RuleId::DotNet
    }

    async fn apply(&self, ctx: &mut InferCtx<'_>) -> Result<()> {
        if ctx.exists("packages.config").await {
            ctx.add_command("nuget install", Phase::Init);
        }
        Ok(())
    }
}
