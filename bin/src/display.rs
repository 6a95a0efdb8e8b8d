//! Terminal output for the dayview CLI.

use dayview_lib::Report;

/// Prints a report: chart first, then the stats block, then any diagnostic.
pub(crate) fn print_report(report: &Report) {
    if let Some(chart) = &report.chart {
        print!("{chart}");
    }

    if !report.stats.is_empty() {
        println!();
        println!("Session statistics");
        let width = report
            .stats
            .iter()
            .map(|(label, _)| label.len())
            .max()
            .unwrap_or(0);
        for (label, value) in &report.stats {
            println!("  {label:<width$}  {value}");
        }
    }

    if let Some(diagnostic) = &report.diagnostic {
        println!();
        println!("{diagnostic}");
    }
}
