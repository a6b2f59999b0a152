//! Estimate report formatting

use crate::estimate::Estimate;

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Format an estimate with the formulas that produced it
pub fn format_estimate(est: &Estimate) -> String {
    let rule = "-".repeat(30);
    let coef = est.coefficients;
    let effort = round_to(est.effort, 2);

    [
        format!("Selected Mode: {}", est.mode),
        rule.clone(),
        format!("Effort: {} Person-Months", effort),
        format!("Formula: {} * ({}^{})", coef.a, est.kloc, coef.b),
        String::new(),
        format!("Development Time: {} Months", round_to(est.time, 2)),
        format!("Formula: {} * ({}^{})", coef.c, effort, coef.d),
        String::new(),
        format!("Average Staffing: {} Person(s)", round_to(est.staff, 1)),
        rule,
    ]
    .join("\n")
}
