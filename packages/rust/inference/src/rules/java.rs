//! Java/Kotlin detector: Gradle and Maven descriptors, wrapper scripts
//! preferred over bare tools.

use async_trait::async_trait;
use configscout_shared::{Phase, Result};

use super::{Rule, RuleId};
use crate::engine::InferCtx;

pub struct JavaRule;

#[async_trait]
impl Rule for JavaRule {
    fn id(&self) -> RuleId {
        RuleId::Java
    }

    async fn apply(&self, ctx: &mut InferCtx<'_>) -> Result<()> {
        let gradle_kts = ctx.exists("build.gradle.kts").await;
        if ctx.exists("build.gradle").await || gradle_kts {
            let tool = if ctx.exists("gradlew").await {
                "./gradlew"
            } else {
                "gradle"
            };
            ctx.add_command(&format!("{tool} build"), Phase::Init);

            if gradle_kts {
                ctx.add_extension("fwcd.kotlin");
                ctx.add_extension("vscjava.vscode-gradle");
            } else {
                ctx.add_extension("redhat.java");
                ctx.add_extension("vscjava.vscode-java-debug");
                ctx.add_extension("vscjava.vscode-gradle");
            }
        }

        if ctx.exists("pom.xml").await {
            let tool = if ctx.exists("mvnw").await {
                "./mvnw"
            } else {
                "mvn"
            };
            ctx.add_command(&format!("{tool} install -DskipTests=false"), Phase::Init);
            ctx.add_extension("redhat.java");
            ctx.add_extension("vscjava.vscode-java-debug");
            ctx.add_extension("vscjava.vscode-maven");
        }

        Ok(())
    }
}
