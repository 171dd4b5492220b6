//! `alfred clean` command implementation

use crate::router::CommandContext;
use alfred_core::AlfredResult;

/// Remove the generated configs directory of the project
pub async fn execute(ctx: &CommandContext) -> AlfredResult<()> {
    let project = ctx.load_project().await?;
    if project.clean().await? {
        ctx.console.success(&format!(
            "Removed {}",
            project.generated_dir().display()
        ));
    } else {
        ctx.console.info("Nothing to clean");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::CliConsole;
    use alfred_core::WriteOptions;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_clean_removes_generated_configs() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(
            dir.path().join("package.json"),
            r#"{"name": "app", "alfred": {"skills": ["babel"]}}"#,
        )
        .await
        .unwrap();
        tokio::fs::create_dir_all(dir.path().join(".configs"))
            .await
            .unwrap();

        let ctx = CommandContext {
            cwd: dir.path().to_path_buf(),
            overrides: HashMap::new(),
            options: WriteOptions::default(),
            console: CliConsole::new(false),
        };
        execute(&ctx).await.unwrap();
        assert!(!dir.path().join(".configs").exists());

        execute(&ctx).await.unwrap();
    }
}
