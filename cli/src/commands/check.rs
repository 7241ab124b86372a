use colored::*;
use hexwatch_common::config::Config;
use hexwatch_common::network::status::Status;
use hexwatch_common::network::target::Target;
use hexwatch_common::success;
use hexwatch_core::loader;
use hexwatch_core::scheduler::{PassReport, Scheduler};

use crate::mprint;
use crate::terminal::{colors, format, print, spinner};

pub async fn check(cfg: &Config) -> anyhow::Result<()> {
    let targets: Vec<Target> = loader::load_targets(&cfg.targets_path)?;

    print::banner(cfg.quiet);
    print::header("probing targets", cfg.quiet);

    let scheduler = Scheduler::from_config(targets, cfg);
    spinner::start(format!(
        "Probing {} targets...",
        scheduler.targets().len().to_string().green().bold()
    ));
    let report: PassReport = scheduler.run_pass(1).await;
    spinner::finish();

    print_report(scheduler.targets(), &report, cfg);
    Ok(())
}

fn print_report(targets: &[Target], report: &PassReport, cfg: &Config) {
    print::header("target status", cfg.quiet);

    for (idx, (target, result)) in targets.iter().zip(&report.results).enumerate() {
        match cfg.quiet {
            0 | 1 => {
                print::tree_head(idx, &target.name);
                print::as_tree_one_level(format::target_details(target, result.status));
                if idx + 1 != targets.len() {
                    mprint!();
                }
            }
            _ => print::status_line(&target.name, &format::status_label(result.status)),
        }
    }

    print_summary(report, cfg);
}

fn print_summary(report: &PassReport, cfg: &Config) {
    let counts: Vec<String> = Status::ALL
        .iter()
        .rev()
        .map(|status| {
            let label = format!("{} {}", report.count(*status), status.label().to_lowercase());
            format!("{}", label.color(colors::status(*status)).bold())
        })
        .collect();
    let total_time: ColoredString = format!("{:.2}s", report.elapsed().as_secs_f64()).bold().yellow();
    let output: String = format!("Pass complete: {} in {}", counts.join(", "), total_time);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        _ => {
            mprint!();
            success!("{}", output)
        }
    }
}
