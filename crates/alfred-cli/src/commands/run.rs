//! `alfred run` command implementation

use crate::router::CommandContext;
use alfred_core::{AlfredResult, TargetOutcome, TaskRunner};

/// Run the task behind `task` for the project in the working directory
pub async fn execute(ctx: &CommandContext, task: &str, flags: &[String]) -> AlfredResult<()> {
    let mut project = ctx.load_project().await?;
    let report = TaskRunner::new()
        .with_write_options(ctx.options)
        .run(&mut project, task, flags)
        .await?;

    for run in &report.targets {
        match &run.outcome {
            TargetOutcome::Completed { skill } => ctx
                .console
                .success(&format!("{} finished for {}", skill, run.target)),
            TargetOutcome::ConfiguredOnly { skill } => ctx
                .console
                .info(&format!("{} configured for {}", skill, run.target)),
            TargetOutcome::Skipped => ctx
                .console
                .warn(&format!("No skill can {} for {}", task, run.target)),
        }
    }

    if !report.did_anything() {
        ctx.console.warn(&format!(
            "Nothing ran; learn a skill that implements '{}'",
            task
        ));
    }
    Ok(())
}
