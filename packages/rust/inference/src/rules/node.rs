//! Node/JS detector: package manifest, lockfile-based package manager
//! choice, declared scripts.

use async_trait::async_trait;
use configscout_shared::{ConfigScoutError, Phase, Result};

use super::{Rule, RuleId};
use crate::engine::InferCtx;

pub struct NodeRule;

#[async_trait]
impl Rule for NodeRule {
    fn id(&self) -> RuleId {
        RuleId::Node
    }

    async fn apply(&self, ctx: &mut InferCtx<'_>) -> Result<()> {
        let Some(manifest) = ctx.read("package.json").await else {
            return Ok(());
        };

        // Lockfile priority: pnpm > yarn > npm.
        let pm = if ctx.exists("pnpm-lock.yaml").await {
            "pnpm"
        } else if ctx.exists("yarn.lock").await {
            "yarn"
        } else {
            "npm"
        };

        // Parse before contributing anything: a malformed manifest means
        // this rule contributes nothing at all.
        let manifest: serde_json::Value = serde_json::from_str(&manifest)
            .map_err(|e| ConfigScoutError::parse(format!("package.json: {e}")))?;
        let scripts = manifest.get("scripts");
        let has_script = |name: &str| scripts.and_then(|s| s.get(name)).is_some();

        ctx.add_command(&format!("{pm} install"), Phase::Init);

        if has_script("build") {
            ctx.add_command(&format!("{pm} run build"), Phase::Init);
        } else if has_script("compile") {
            ctx.add_command(&format!("{pm} run compile"), Phase::Init);
        }

        if has_script("start") {
            ctx.add_command(&format!("{pm} run start"), Phase::Command);
        } else if has_script("dev") {
            ctx.add_command(&format!("{pm} run dev"), Phase::Command);
        } else if has_script("watch") {
            ctx.add_command(&format!("{pm} run watch"), Phase::Command);
        }

        ctx.add_extension("dbaeumer.vscode-eslint");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::FakeRepo;

    async fn apply(repo: &FakeRepo) -> Result<configscout_shared::WorkspaceConfig> {
        let mut ctx = InferCtx::new(repo);
        NodeRule.apply(&mut ctx).await?;
        Ok(ctx.config)
    }

    #[tokio::test]
    async fn yarn_repo_with_build_and_watch_scripts() {
        let repo = FakeRepo::new()
            .file("yarn.lock", "")
            .file(
                "package.json",
                r#"{ "scripts": { "build": "tsc", "watch": "tsc -w" } }"#,
            );

        let config = apply(&repo).await.unwrap();
        let task = &config.tasks[0];
        assert_eq!(task.init.as_deref(), Some("yarn install && yarn run build"));
        assert_eq!(task.command.as_deref(), Some("yarn run watch"));
        assert_eq!(
            config.vscode.unwrap().extensions,
            ["dbaeumer.vscode-eslint"]
        );
    }

    #[tokio::test]
    async fn pnpm_lockfile_wins_over_yarn() {
        let repo = FakeRepo::new()
            .file("pnpm-lock.yaml", "")
            .file("yarn.lock", "")
            .file("package.json", r#"{ "scripts": { "dev": "vite" } }"#);

        let config = apply(&repo).await.unwrap();
        let task = &config.tasks[0];
        assert_eq!(task.init.as_deref(), Some("pnpm install"));
        assert_eq!(task.command.as_deref(), Some("pnpm run dev"));
    }

    #[tokio::test]
    async fn npm_is_the_fallback_package_manager() {
        let repo = FakeRepo::new().file("package.json", r#"{ "scripts": { "compile": "tsc" } }"#);

        let config = apply(&repo).await.unwrap();
        assert_eq!(
            config.tasks[0].init.as_deref(),
            Some("npm install && npm run compile")
        );
    }

    #[tokio::test]
    async fn start_script_beats_dev_and_watch() {
        let repo = FakeRepo::new().file(
            "package.json",
            r#"{ "scripts": { "watch": "w", "dev": "d", "start": "s" } }"#,
        );

        let config = apply(&repo).await.unwrap();
        assert_eq!(config.tasks[0].command.as_deref(), Some("npm run start"));
    }

    #[tokio::test]
    async fn no_manifest_contributes_nothing() {
        let repo = FakeRepo::new().file("yarn.lock", "");
        let config = apply(&repo).await.unwrap();
        assert!(config.is_empty());
    }

    #[tokio::test]
    async fn malformed_manifest_is_a_rule_error() {
        let repo = FakeRepo::new().file("package.json", "{ not json");
        let mut ctx = InferCtx::new(&repo);
        let result = NodeRule.apply(&mut ctx).await;

        assert!(result.is_err());
        assert!(ctx.config.is_empty());
    }
}
