//! Make/CMake detector.

use async_trait::async_trait;
use configscout_shared::{Phase, Result};

use super::{Rule, RuleId};
use crate::engine::InferCtx;

/// True when the repository builds through CMake or Make.
///
/// Also consulted by the Python rule, which defers entirely to
/// Makefile-driven projects (they typically encode their own Python
/// invocation in the Makefile). Python runs before Make in rule order, so
/// this must stay side-effect-free and idempotent.
pub(crate) async fn uses_build_system(ctx: &InferCtx<'_>) -> bool {
    ctx.exists("CMakeLists.txt").await
        || ctx.exists("Makefile").await
        || ctx.exists("makefile").await
}

pub struct MakeRule;

#[async_trait]
impl Rule for MakeRule {
    fn id(&self) -> RuleId {
        RuleId::Make
    }

    async fn apply(&self, ctx: &mut InferCtx<'_>) -> Result<()> {
        if ctx.exists("CMakeLists.txt").await {
            ctx.add_command("cmake .", Phase::Init);
        } else if ctx.exists("Makefile").await || ctx.exists("makefile").await {
            ctx.add_command("make", Phase::Init);
        }
        Ok(())
    }
}
