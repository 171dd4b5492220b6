//! `alfred skills` command implementation

use crate::router::CommandContext;
use alfred_core::skills::builtin_skills;
use alfred_core::AlfredResult;

/// List the skill catalogue, marking what the current project has learned
pub async fn execute(ctx: &CommandContext) -> AlfredResult<()> {
    let learned: Vec<String> = match ctx.load_project().await {
        Ok(project) => project.config().skills.clone(),
        Err(error) => {
            tracing::debug!(error = %error, "No project in working directory");
            Vec::new()
        }
    };

    ctx.console.print_header("Available Skills");
    ctx.console
        .print_table_header(&["Skill", "Tasks", "Default", "Learned"]);

    let catalogue = builtin_skills();
    for skill in &catalogue {
        let info = skill.info();
        let tasks = info
            .tasks
            .iter()
            .map(|task| task.trim_start_matches("@alfred/task-"))
            .collect::<Vec<_>>()
            .join(",");
        let default = if info.default { "yes" } else { "" };
        let is_learned = if learned.contains(&info.name) { "✓" } else { "" };
        ctx.console
            .print_table_row(&[info.name.as_str(), tasks.as_str(), default, is_learned]);
        ctx.console.info(&format!("{}: {}", info.name, info.description));
    }

    println!();
    ctx.console
        .success(&format!("{} skills available", catalogue.len()));
    Ok(())
}
