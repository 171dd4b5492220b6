//! `alfred learn` command implementation

use crate::router::CommandContext;
use alfred_core::AlfredResult;

/// Add catalogue skills to the project in the working directory
pub async fn execute(ctx: &CommandContext, skills: &[String]) -> AlfredResult<()> {
    let mut project = ctx.load_project().await?;
    let report = project.learn(skills, ctx.options).await?;

    for name in &report.already_known {
        ctx.console.warn(&format!("'{}' is already learned", name));
    }
    for name in report
        .added_dependencies
        .iter()
        .chain(&report.added_dev_dependencies)
    {
        ctx.console.info(&format!("Added {}", name));
    }
    for path in &report.writes.written {
        ctx.console.info(&format!("Wrote {}", path.display()));
    }

    if report.learned.is_empty() {
        ctx.console.warn("Nothing new to learn");
    } else {
        ctx.console
            .success(&format!("Learned {}", report.learned.join(", ")));
        if !report.added_dependencies.is_empty() || !report.added_dev_dependencies.is_empty() {
            ctx.console.info(&format!(
                "Run '{} install' to fetch the new dependencies",
                project.config().npm_client
            ));
        }
    }
    Ok(())
}
