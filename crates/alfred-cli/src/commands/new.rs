//! `alfred new` command implementation

use crate::router::CommandContext;
use alfred_core::AlfredResult;
use alfred_core::project::new_project;

/// Scaffold a project called `name` in a directory of the same name
pub async fn execute(ctx: &CommandContext, name: &str) -> AlfredResult<()> {
    let dir = ctx.cwd.join(name);
    let (project, report) = new_project(&dir, name, ctx.options).await?;

    ctx.console.print_header(&format!("Created {}", name));
    for file in &report.files {
        ctx.console.item(file);
    }
    for path in &report.learn.writes.written {
        let path = path.strip_prefix(&report.root).unwrap_or(path.as_path());
        ctx.console.item(&path.display().to_string());
    }

    ctx.console.info(&format!(
        "Added {} dev dependencies",
        report.learn.added_dev_dependencies.len()
    ));
    ctx.console.success(&format!(
        "Project ready with skills: {}",
        report.learn.learned.join(", ")
    ));
    ctx.console.info(&format!(
        "Next: cd {} && {} install && alfred run start",
        dir.display(),
        project.config().npm_client
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::CliConsole;
    use alfred_core::WriteOptions;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_new_creates_project_directory() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = CommandContext {
            cwd: dir.path().to_path_buf(),
            overrides: HashMap::new(),
            options: WriteOptions::default(),
            console: CliConsole::new(false),
        };

        execute(&ctx, "my-app").await.unwrap();
        assert!(dir.path().join("my-app/package.json").exists());
        assert!(dir.path().join("my-app/src/index.js").exists());

        assert!(execute(&ctx, "my-app").await.is_err());
    }
}
