//! CLI entry point for checkpost.
//!
//! This module is intentionally thin: it handles argument parsing, logging setup, I/O,
//! and exit codes. All business logic lives in the `checkpost-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use checkpost_app::{
    CommentInput, CoverageDetailInput, TargetOverrides, load_inputs, resolve_target, run_comment,
    run_coverage_detail, run_render, write_text,
};
use checkpost_github::ActionsContext;
use checkpost_types::ids;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    name = "checkpost",
    version,
    about = "Render CI quality check results and post them on the pull request"
)]
struct Cli {
    /// Directory holding test-errors.txt, coverage-detail.md and coverage.json.
    #[arg(long, global = true, default_value = ".")]
    workdir: Utf8PathBuf,

    /// Enable verbose logging (RUST_LOG still takes precedence).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the report comment from the environment and print it.
    Render {
        /// Write the comment body here instead of stdout.
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render the report comment and post it on the pull request.
    Comment {
        /// Target repository as owner/repo (default: GITHUB_REPOSITORY).
        #[arg(long)]
        repo: Option<String>,

        /// Issue or pull request number (default: from GITHUB_EVENT_PATH).
        #[arg(long)]
        issue_number: Option<u64>,

        /// API token.
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, default_value = "")]
        token: String,

        /// API base URL (default: GITHUB_API_URL or https://api.github.com).
        #[arg(long)]
        api_url: Option<String>,

        /// Print the comment body instead of posting it.
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate the lowest-coverage markdown table from a coverage.py JSON report.
    CoverageDetail {
        /// Coverage JSON report (default: <workdir>/coverage.json).
        #[arg(long)]
        input: Option<Utf8PathBuf>,

        /// Markdown output (default: <workdir>/coverage-detail.md).
        #[arg(long)]
        output: Option<Utf8PathBuf>,

        /// Number of files to list (default: COVERAGE_DETAIL_FILE_COUNT or 10).
        #[arg(long)]
        top_n: Option<usize>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.cmd {
        Commands::Render { ref output } => cmd_render(&cli.workdir, output.as_deref()),
        Commands::Comment {
            ref repo,
            issue_number,
            ref token,
            ref api_url,
            dry_run,
        } => cmd_comment(
            &cli.workdir,
            TargetOverrides {
                repo: repo.clone(),
                issue_number,
            },
            token,
            api_url.as_deref(),
            dry_run,
        ),
        Commands::CoverageDetail {
            ref input,
            ref output,
            top_n,
        } => cmd_coverage_detail(&cli.workdir, input.as_deref(), output.as_deref(), top_n),
    };

    if let Err(err) = result {
        eprintln!("checkpost error: {err:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn cmd_render(workdir: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let inputs = load_inputs(workdir, env_lookup);
    let body = run_render(&inputs);

    if let Some(out_path) = output {
        write_text(out_path, &body).context("write comment body")?;
    } else {
        println!("{body}");
    }

    Ok(())
}

fn cmd_comment(
    workdir: &Utf8Path,
    overrides: TargetOverrides,
    token: &str,
    api_url: Option<&str>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let inputs = load_inputs(workdir, env_lookup);
    let body = run_render(&inputs);

    if dry_run {
        println!("{body}");
        return Ok(());
    }

    let ctx = ActionsContext::from_lookup(env_lookup).context("read github actions context")?;
    let target = resolve_target(&ctx, &overrides)?;
    let api_url = api_url.unwrap_or(ctx.api_url.as_str());

    let outcome = run_comment(CommentInput {
        body: &body,
        target,
        api_url,
        token,
    })?;

    match outcome.comment.html_url {
        Some(url) => println!("✅ 已创建评论: {url}"),
        None => println!("✅ 已创建评论"),
    }
    Ok(())
}

fn cmd_coverage_detail(
    workdir: &Utf8Path,
    input: Option<&Utf8Path>,
    output: Option<&Utf8Path>,
    top_n: Option<usize>,
) -> anyhow::Result<()> {
    let input = input.map_or_else(|| workdir.join(ids::FILE_COVERAGE_JSON), Utf8Path::to_path_buf);
    let output =
        output.map_or_else(|| workdir.join(ids::FILE_COVERAGE_DETAIL), Utf8Path::to_path_buf);
    let env_count = env_lookup(ids::ENV_COVERAGE_DETAIL_FILE_COUNT);
    let top_n = checkpost_settings::resolve_file_count(top_n, env_count.as_deref())?;

    run_coverage_detail(CoverageDetailInput {
        input: &input,
        output: &output,
        top_n,
    })?;

    println!("✅ 覆盖率详细信息生成成功: {output}");
    Ok(())
}
