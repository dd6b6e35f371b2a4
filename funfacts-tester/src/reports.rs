use anyhow::Result;
use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use std::time::Duration;

use crate::checks::CheckResult;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    seed: u64,
    samples: usize,
    passed: bool,
    checks: &'a [CheckResult],
}

/// Run parameters echoed into every report.
#[derive(Debug, Clone, Copy)]
pub struct RunInfo {
    pub seed: u64,
    pub samples: usize,
    pub started: DateTime<Utc>,
}

fn success_rate(results: &[CheckResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let passed = results.iter().filter(|r| r.passed).count();
    #[allow(clippy::cast_precision_loss)]
    let rate = (passed as f64 / results.len() as f64) * 100.0;
    rate
}

pub fn generate_console_report(
    out: &mut dyn Write,
    results: &[CheckResult],
    info: &RunInfo,
    total: Duration,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Check Results Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "========================".cyan())?;

    let passed = results.iter().filter(|r| r.passed).count();
    writeln!(out, "Seed: {}  Samples: {}", info.seed, info.samples)?;
    writeln!(out, "Total checks: {}", results.len())?;
    writeln!(out, "Passed: {}", passed.to_string().green())?;
    writeln!(out, "Failed: {}", (results.len() - passed).to_string().red())?;
    writeln!(out, "Success rate: {:.1}%", success_rate(results))?;
    writeln!(out, "Total time: {total:?}")?;
    writeln!(out)?;

    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };
        writeln!(out, "{status} {}", result.name.bold())?;
        writeln!(
            out,
            "   Assertions: {}  Time: {:.2}ms",
            result.assertions, result.duration_ms
        )?;
        if !result.failures.is_empty() {
            writeln!(out, "   Failures:")?;
            for failure in &result.failures {
                writeln!(out, "     • {}", failure.red())?;
            }
        }
    }
    Ok(())
}

pub fn generate_json_report(
    out: &mut dyn Write,
    results: &[CheckResult],
    info: &RunInfo,
) -> Result<()> {
    let report = JsonReport {
        generated_at: info.started.to_rfc3339(),
        seed: info.seed,
        samples: info.samples,
        passed: results.iter().all(|r| r.passed),
        checks: results,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

pub fn generate_markdown_report(
    out: &mut dyn Write,
    results: &[CheckResult],
    info: &RunInfo,
) -> Result<()> {
    writeln!(out, "# Fun Facts Check Results\n")?;
    writeln!(
        out,
        "_Generated {} (seed {}, {} samples)_\n",
        info.started.format("%Y-%m-%d %H:%M:%S UTC"),
        info.seed,
        info.samples
    )?;

    let passed = results.iter().filter(|r| r.passed).count();
    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Total checks**: {}", results.len())?;
    writeln!(out, "- **Passed**: {passed}")?;
    writeln!(out, "- **Failed**: {}", results.len() - passed)?;
    writeln!(out, "- **Success rate**: {:.1}%\n", success_rate(results))?;

    writeln!(out, "| Check | Status | Assertions | Time (ms) |")?;
    writeln!(out, "|---|---|---|---|")?;
    for result in results {
        let status = if result.passed { "✅" } else { "❌" };
        writeln!(
            out,
            "| {} | {status} | {} | {:.2} |",
            result.name, result.assertions, result.duration_ms
        )?;
    }

    let failing: Vec<&CheckResult> = results.iter().filter(|r| !r.passed).collect();
    if !failing.is_empty() {
        writeln!(out, "\n## Failures\n")?;
        for result in failing {
            writeln!(out, "### {}\n", result.name)?;
            for failure in &result.failures {
                writeln!(out, "- {failure}")?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}
