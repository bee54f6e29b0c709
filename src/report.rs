// src/report.rs
//! Console rendering of dispersion results.
//!
//! Formatting only; nothing here recomputes or mutates the statistics.

use std::cmp::Ordering;

use colored::Colorize;

use crate::analysis::{CategoryResult, ResultSet};
use crate::map::MapAdapterResult;

/// Prints one aggregation's totals and its top places.
pub fn print_result_summary<C>(result: &CategoryResult, cmp: C)
where
    C: Fn(&str, &str) -> Ordering,
{
    let title = if result.description().is_empty() {
        "GLOBAL"
    } else {
        result.description()
    };
    println!(
        "\n{} {} known | {} found | {} excluded | {} unknown",
        title.cyan().bold(),
        result.count_known(),
        result.count_found().to_string().green(),
        format_excluded(result.count_excluded()),
        result.count_unknown(),
    );

    for item in result.sorted_known_places(true, cmp).iter().take(10) {
        println!("    {:>6}  {}", item.count(), item.key());
    }
}

/// Prints the global result and every named category in display order.
pub fn print_result_set<C>(set: &ResultSet, cmp: C)
where
    C: Fn(&str, &str) -> Ordering + Copy,
{
    print_result_summary(set.global(), cmp);
    for category in set.sorted_detailed(cmp) {
        print_result_summary(category, cmp);
    }
}

/// Prints a map adaptation: annotated features first, then the places
/// the map could not represent.
pub fn print_adapter_summary<C>(adapted: &MapAdapterResult, cmp: C)
where
    C: Fn(&str, &str) -> Ordering,
{
    let annotated = adapted
        .features()
        .iter()
        .filter(|f| f.count().is_some())
        .count();
    println!(
        "\n{} {} features | {} annotated | {} found",
        "MAP ADAPTATION".cyan().bold(),
        adapted.features().len(),
        annotated.to_string().green(),
        adapted.result().count_found(),
    );

    for feature in adapted.features() {
        if let (Some(count), Some(ratio)) = (feature.count(), feature.ratio()) {
            println!("    {count:>6}  {:>5.1}%", ratio * 100.0);
        }
    }

    let excluded = adapted.result().count_excluded();
    if excluded > 0 {
        println!("{}", format!("  {excluded} observation(s) not representable on this map").yellow());
        let mut keys: Vec<&str> = adapted
            .result()
            .excluded_places()
            .iter()
            .map(|item| item.key())
            .collect();
        keys.sort_by(|a, b| cmp(a, b));
        for key in keys {
            println!("      {}", key.dimmed());
        }
    }
}

fn format_excluded(n: u64) -> String {
    if n == 0 {
        n.to_string().green().to_string()
    } else {
        n.to_string().yellow().to_string()
    }
}
