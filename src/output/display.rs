//! Display functions for command results

use super::formatters::{create_progress_bar, format_rungs};
use crate::commands::{SolveResult, SurveyResult};
use crate::search::SearchOutcome;
use colored::Colorize;

/// Print the result of solving a ladder
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} → {}",
        result.source.text().to_uppercase().bright_yellow().bold(),
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    match &result.outcome {
        SearchOutcome::Found(path) => {
            println!("\n{}", format_rungs(path));
            println!();
            println!(
                "{}",
                format!("✅ Shortest ladder: {} steps", path.edge_count())
                    .green()
                    .bold()
            );
        }
        SearchOutcome::Unreachable => {
            println!(
                "\n{}",
                format!("❌ No ladder connects {} and {}", result.source, result.target)
                    .red()
                    .bold()
            );
        }
        SearchOutcome::BudgetExhausted { expanded } => {
            println!(
                "\n{}",
                format!("⏱ Gave up after expanding {expanded} words; no ladder found within budget")
                    .yellow()
                    .bold()
            );
        }
    }

    if verbose {
        println!("   Time taken: {:.3}ms", result.duration.as_secs_f64() * 1000.0);
    }
}

/// Print the result of a survey
pub fn print_survey_result(result: &SurveyResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SURVEY RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Connectivity:".bright_cyan().bold());
    println!("   Pairs sampled:    {}", result.pairs_sampled);
    println!(
        "   Reachable:        {}",
        format!("{}", result.reachable).green()
    );
    println!(
        "   Unreachable:      {}",
        format!("{}", result.unreachable).yellow()
    );
    println!(
        "   Average steps:    {}",
        format!("{:.2}", result.average_steps).bright_yellow().bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Pairs/second:     {:.1}", result.pairs_per_second);

    if let Some(longest) = &result.longest {
        println!(
            "   Longest ladder:   {} ({} steps)",
            longest,
            longest.edge_count()
        );
    }

    if result.reachable == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut steps: Vec<_> = result.distribution.iter().collect();
    steps.sort_unstable();
    for (&step_count, &count) in steps {
        let pct = (count as f64 / result.reachable as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {step_count:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
