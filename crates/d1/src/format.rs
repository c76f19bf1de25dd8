//! Human-readable descriptions of cut patterns.

use u_cutstock_core::{CalculationResult, CutPattern};

/// Formats a length in millimetres, e.g. `450mm`.
pub fn format_cut_length(length: f64) -> String {
    format!("{}mm", length)
}

/// Describes one bar, e.g. `Stock #1 (1000mm): 450mm + 450mm | Waste: 100mm`.
pub fn describe_cut_pattern(pattern: &CutPattern) -> String {
    let cuts = pattern
        .cuts
        .iter()
        .map(|&c| format_cut_length(c))
        .collect::<Vec<_>>()
        .join(" + ");

    format!(
        "Stock #{} ({}): {} | Waste: {}",
        pattern.stock_index,
        format_cut_length(pattern.stock_length),
        cuts,
        format_cut_length(pattern.waste)
    )
}

/// Describes a whole result: one line per bar, then a totals line.
pub fn describe_result(result: &CalculationResult) -> String {
    let mut lines: Vec<String> = result.patterns.iter().map(describe_cut_pattern).collect();
    lines.push(format!(
        "Total: {} bars | Waste: {} ({}%) | Utilization: {} | Cost: {:.2}",
        result.total_stock,
        format_cut_length(result.total_waste),
        result.waste_percent(),
        result.utilization_percent(),
        result.total_cost
    ));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cut_length() {
        assert_eq!(format_cut_length(450.0), "450mm");
        assert_eq!(format_cut_length(450.5), "450.5mm");
        assert_eq!(format_cut_length(450.0), format_cut_length(450.0));
    }

    #[test]
    fn test_describe_cut_pattern() {
        let pattern = CutPattern::new(1, 1000.0, vec![450.0, 450.0], 100.0, 85.0);
        let description = describe_cut_pattern(&pattern);

        assert!(description.contains("Stock #1 (1000mm)"));
        assert!(description.contains("450mm + 450mm"));
        assert!(description.contains("Waste: 100mm"));
        assert_eq!(
            description,
            "Stock #1 (1000mm): 450mm + 450mm | Waste: 100mm"
        );
        assert_eq!(description, describe_cut_pattern(&pattern));
    }

    #[test]
    fn test_describe_result() {
        let mut result = CalculationResult::new();
        result
            .patterns
            .push(CutPattern::new(1, 1000.0, vec![900.0], 100.0, 90.0));
        result.total_stock = 1;
        result.total_waste = 100.0;
        result.average_utilization = 90.0;

        let text = describe_result(&result);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Stock #1 (1000mm): 900mm | Waste: 100mm");
        assert_eq!(
            lines[1],
            "Total: 1 bars | Waste: 100mm (10%) | Utilization: 90.0% | Cost: 0.00"
        );
    }
}
