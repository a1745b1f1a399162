//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::BenchmarkResult;
use colored::Colorize;

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "BENCHMARK RESULTS:".bright_cyan().bold(),
        result.mode.name().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Games won:        {} ({})",
        result.wins,
        format!("{:.1}%", result.win_rate() * 100.0).bright_yellow().bold()
    );
    if result.wins > 0 {
        println!(
            "   Average turns:    {}",
            format!("{:.2}", result.average_turns).bright_yellow().bold()
        );
    }
    let losses = result.total_games - result.wins;
    if losses > 0 {
        println!("   Losses:           {}", losses.to_string().red());
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if result.distribution.is_empty() {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (turns, &count) in &result.distribution {
        let pct = count as f64 / result.total_games as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {turns}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
