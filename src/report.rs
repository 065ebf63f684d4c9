use crate::normalize::NormalizeOutcome;
use crate::types::Dimensions;

/// Print a human-readable statistics report for one normalized plane.
pub fn print_report(dimensions: Dimensions, outcome: &NormalizeOutcome) {
    println!("{:20}: {}", "Dimensions", dimensions);
    println!("{:20}: {}", "Input Range", outcome.rescale.before);

    if let Some(after) = outcome.rescale.after {
        println!("{:20}: {}", "Rescaled Range", after);
    }

    if let Some(stats) = outcome.zscore {
        println!("{:20}: {}", "Z-Score Input", stats);
    }

    println!();
}
