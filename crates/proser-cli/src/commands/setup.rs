//! Implementation of the `proser setup` command.
//!
//! Responsibility: resolve the target and project type, collect answers,
//! call the scaffold service and display results.

use std::io::IsTerminal as _;
use std::path::Path;
use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, instrument};

use proser_adapters::{LocalStorage, load_answers};
use proser_core::{
    application::{PlannedOutput, ProjectType, ScaffoldReport, ScaffoldService},
    domain::{Answers, ProjectConfig, Question},
};

use crate::{
    cli::{OutputFormat, SetupArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute `proser setup`.
///
/// 1. Resolve the target directory and project type
/// 2. Collect answers (defaults, answers file, or prompts)
/// 3. Confirm unless `--yes` or `--quiet`
/// 4. Preview on `--dry-run`, otherwise write
#[instrument(skip_all, fields(target = %args.target.display()))]
pub fn execute(args: SetupArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = super::resolve_target(&args.target)?;
    let registry = super::registry(&config, args.depth)?;

    let requested = args
        .project_type
        .as_deref()
        .unwrap_or(&config.defaults.project_type);
    if registry.get(requested).is_err() {
        output.warning(&format!(
            "Unknown project type '{requested}', using '{}'",
            registry.default_name()
        ))?;
    }
    let project_type = registry.get_or_default(requested)?;
    debug!(project_type = project_type.name(), root = %root.display(), "Target resolved");

    let answers = collect_answers(&args, project_type, &output)?;
    let project = ProjectConfig::from_answers(&answers);

    if !output.is_quiet() && !args.yes && output.format() != OutputFormat::Json {
        show_configuration(project_type, &project, &root, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    let service = ScaffoldService::new(Arc::new(LocalStorage::new()));

    if args.dry_run {
        let planned = service.plan(project_type, project, &root)?;
        return show_plan(&planned, &root, &output);
    }

    info!(project = %project.general.project_name, "Setup started");
    let report = service.run(project_type, project, &root)?;
    show_report(&report, &output)
}

// ── Answers ───────────────────────────────────────────────────────────────────

/// Defaults, overlaid by the answers file, or by prompts on an interactive
/// terminal. Keys the project type does not ask about are still passed on.
fn collect_answers(
    args: &SetupArgs,
    project_type: &ProjectType,
    output: &OutputManager,
) -> CliResult<Answers> {
    let mut answers = Question::defaults(project_type.questions());

    if let Some(path) = &args.answers {
        debug!(path = %path.display(), "Loading answers file");
        answers.extend(load_answers(&LocalStorage::new(), path)?);
        return Ok(answers);
    }

    if args.yes || !std::io::stdin().is_terminal() {
        return Ok(answers);
    }

    output.header(&format!("Configuring a {} project", project_type.name()))?;
    prompt(project_type.questions(), answers)
}

#[cfg(feature = "interactive")]
fn prompt(questions: &[Question], mut answers: Answers) -> CliResult<Answers> {
    use dialoguer::{Input, theme::ColorfulTheme};

    let theme = ColorfulTheme::default();
    for question in questions {
        let value: String = Input::with_theme(&theme)
            .with_prompt(&question.prompt)
            .default(question.default.clone())
            .interact_text()
            .map_err(|e| CliError::InvalidInput {
                message: format!("could not read answer for '{}'", question.key),
                source: Some(Box::new(e)),
            })?;
        answers.insert(question.key.clone(), normalize_answer(&value));
    }
    Ok(answers)
}

/// A typed `skip` (any case) blanks the answer; Enter alone keeps the default.
#[cfg_attr(not(feature = "interactive"), allow(dead_code))]
fn normalize_answer(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("skip") {
        String::new()
    } else {
        trimmed.to_string()
    }
}

#[cfg(not(feature = "interactive"))]
fn prompt(_questions: &[Question], _answers: Answers) -> CliResult<Answers> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

// ── Display ───────────────────────────────────────────────────────────────────

fn show_configuration(
    project_type: &ProjectType,
    project: &ProjectConfig,
    root: &Path,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Project:   {}", project.general.project_name))?;
    out.print(&format!("  Type:      {}", project_type.name()))?;
    if let Some(frontend) = &project.frontend {
        out.print(&format!(
            "  Frontend:  {} ({})",
            frontend.language, frontend.framework
        ))?;
    }
    if let Some(backend) = &project.backend {
        out.print(&format!(
            "  Backend:   {} ({})",
            backend.language, backend.framework
        ))?;
    }
    out.print(&format!("  Location:  {}", root.display()))?;
    out.print("")?;
    Ok(())
}

fn show_plan(planned: &[PlannedOutput], root: &Path, out: &OutputManager) -> CliResult<()> {
    let total: usize = planned.iter().map(|p| p.files.len()).sum();

    if out.format() == OutputFormat::Json {
        let generators: Vec<_> = planned
            .iter()
            .map(|p| {
                json!({
                    "generator": p.generator,
                    "files": p.files.paths().map(|path| root.join(path.as_path()).display().to_string()).collect::<Vec<_>>(),
                })
            })
            .collect();
        return out.json(&json!({ "dry_run": true, "files": total, "generators": generators }));
    }

    out.info(&format!(
        "Dry run: would write {total} files into {}",
        root.display()
    ))?;
    for plan in planned {
        for path in plan.files.paths() {
            out.print(&format!("  {:<22} {}", plan.generator, path))?;
        }
    }
    Ok(())
}

fn show_report(report: &ScaffoldReport, out: &OutputManager) -> CliResult<()> {
    if out.format() == OutputFormat::Json {
        let written: Vec<_> = report
            .generators
            .iter()
            .flat_map(|g| g.written.iter().map(|p| p.display().to_string()))
            .collect();
        let warnings: Vec<_> = report
            .warnings()
            .map(|(generator, w)| {
                json!({ "generator": generator, "path": w.path.display().to_string(), "message": w.message })
            })
            .collect();
        return out.json(&json!({
            "project_type": report.project_type,
            "root": report.root.display().to_string(),
            "written": written,
            "warnings": warnings,
        }));
    }

    for (generator, warning) in report.warnings() {
        out.warning(&format!(
            "{generator}: skipped {} ({})",
            warning.path.display(),
            warning.message
        ))?;
    }
    out.success(&format!(
        "Wrote {} files into {}",
        report.files_written(),
        report.root.display()
    ))?;

    if !out.is_quiet() {
        out.print("")?;
        out.print("Next steps:")?;
        out.print("  Review .github/copilot-instructions.md and AGENTS.md")?;
        out.print("  Commit the generated files alongside your code")?;
    }
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}
