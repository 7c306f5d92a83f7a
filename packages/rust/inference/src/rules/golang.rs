//! Go detector: module descriptor with a fixed init sequence.

use async_trait::async_trait;
use configscout_shared::{Phase, Result};

use super::{Rule, RuleId};
use crate::engine::InferCtx;

pub struct GoRule;

#[async_trait]
impl Rule for GoRule {
    fn id(&self) -> RuleId {
        RuleId::Go
    }

    async fn apply(&self, ctx: &mut InferCtx<'_>) -> Result<()> {
        if ctx.exists("go.mod").await {
            ctx.add_command("go get && go build ./... && go test ./...", Phase::Init);
            ctx.add_command("go run .", Phase::Command);
            ctx.add_extension("golang.go");
        }
        Ok(())
    }
}
