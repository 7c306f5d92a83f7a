//! Python detector: requirements/setup descriptors plus entry-point files.

use async_trait::async_trait;
use configscout_shared::{Phase, Result};

use super::{Rule, RuleId, uses_build_system};
use crate::engine::InferCtx;

/// Entry-point candidates, tried in priority order; first match wins.
const ENTRY_POINTS: [&str; 3] = ["main.py", "app.py", "runserver.py"];

pub struct PythonRule;

#[async_trait]
impl Rule for PythonRule {
    fn id(&self) -> RuleId {
        RuleId::Python
    }

    async fn apply(&self, ctx: &mut InferCtx<'_>) -> Result<()> {
        // Makefile-driven Python projects encode their own invocation in
        // the Makefile; defer entirely to the Make rule.
        if uses_build_system(ctx).await {
            return Ok(());
        }

        if ctx.exists("requirements.txt").await {
            ctx.add_command("pip install -r requirements.txt", Phase::Init);
            ctx.add_extension("ms-python.python");
        } else if ctx.exists("setup.py").await {
            ctx.add_command("pip install .", Phase::Init);
            ctx.add_extension("ms-python.python");
        }

        for entry in ENTRY_POINTS {
            if ctx.exists(entry).await {
                ctx.add_command(&format!("python {entry}"), Phase::Command);
                break;
            }
        }

        Ok(())
    }
}
