//! Integration tests for u-cutstock-d1.

use approx::assert_relative_eq;
use u_cutstock_d1::{
    calculate_optimal_cuts, calculate_optimal_cuts_with, calculate_waste_percentage,
    describe_cut_pattern, format_cut_length, CalculationResult, Config, CutCalculatorInput,
    CutPattern, CutRequirement, Error, KerfPolicy, LinearItem, Pricing, StockItem, Strategy,
};

fn basic_input() -> CutCalculatorInput {
    CutCalculatorInput::new(
        vec![StockItem::new("1", 1000.0).with_quantity(2)],
        vec![
            CutRequirement::new("a", 450.0).with_quantity(2),
            CutRequirement::new("b", 300.0).with_quantity(1),
        ],
    )
    .with_kerf_width(4.0)
}

/// A mixed job: several stock lengths and many cut sizes.
fn workshop_input() -> CutCalculatorInput {
    CutCalculatorInput::new(
        vec![
            StockItem::new("6m", 6000.0).with_quantity(5),
            StockItem::new("3m", 3000.0).with_quantity(4),
            StockItem::new("1m", 1000.0).with_quantity(6),
        ],
        vec![
            CutRequirement::new("legs", 720.0).with_quantity(8),
            CutRequirement::new("rails", 1180.0).with_quantity(4),
            CutRequirement::new("braces", 410.0).with_quantity(6),
            CutRequirement::new("long", 2400.0).with_quantity(2),
            CutRequirement::new("stubs", 95.0).with_quantity(10),
            CutRequirement::new("rails-2", 1180.0).with_quantity(2),
        ],
    )
    .with_kerf_width(3.2)
}

fn assert_invariants(input: &CutCalculatorInput, result: &CalculationResult, policy: KerfPolicy) {
    // Conservation per distinct length.
    for req in &input.requirements {
        let expected: usize = input
            .requirements
            .iter()
            .filter(|r| r.length() == req.length())
            .map(|r| r.quantity())
            .sum();
        let placed: usize = result.patterns.iter().map(|p| p.count_of(req.length())).sum();
        assert_eq!(placed, expected, "length {}", req.length());
    }

    // Every requirement is traced back exactly.
    for req in &input.requirements {
        assert_eq!(result.cuts_for(req.id()), req.quantity(), "req {}", req.id());
    }

    // Capacity and exact kerf accounting.
    for pattern in &result.patterns {
        assert!(!pattern.cuts.is_empty());
        assert!(pattern.waste >= 0.0);
        assert!(pattern.cut_length() + pattern.waste <= pattern.stock_length + 1e-9);
        let kerf = policy.loss(input.kerf_width, pattern.cuts.len());
        assert_relative_eq!(
            pattern.cut_length() + kerf + pattern.waste,
            pattern.stock_length,
            epsilon = 1e-6
        );
        assert!(pattern.utilization >= 0.0 && pattern.utilization <= 100.0 + 1e-9);
    }

    // Stock bound, overall and per stock item.
    assert_eq!(result.total_stock, result.patterns.len());
    assert!(result.total_stock <= input.total_stock_count());
    for usage in &result.stock_usage {
        assert!(usage.used <= usage.available);
    }

    // Indices are 1-based and sequential.
    for (i, pattern) in result.patterns.iter().enumerate() {
        assert_eq!(pattern.stock_index, i + 1);
    }

    let total_waste: f64 = result.patterns.iter().map(|p| p.waste).sum();
    assert_relative_eq!(result.total_waste, total_waste, epsilon = 1e-6);
}

mod formatting {
    use super::*;

    #[test]
    fn test_format_cut_length() {
        assert_eq!(format_cut_length(450.0), "450mm");
    }

    #[test]
    fn test_waste_percentage() {
        assert_eq!(calculate_waste_percentage(50.0, 500.0), 10.0);
        assert_eq!(calculate_waste_percentage(1.0, 333.0), 0.3);
    }

    #[test]
    fn test_describe_cut_pattern() {
        let pattern = CutPattern::new(1, 1000.0, vec![450.0, 450.0], 100.0, 85.0);
        let text = describe_cut_pattern(&pattern);
        assert!(text.contains("Stock #1 (1000mm)"));
        assert!(text.contains("450mm + 450mm"));
        assert!(text.contains("Waste: 100mm"));
    }
}

mod validation {
    use super::*;

    fn invalid_message(input: &CutCalculatorInput) -> String {
        match calculate_optimal_cuts(input) {
            Err(Error::InvalidInput(msg)) => msg,
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_stock() {
        let mut input = basic_input();
        input.stock_items.clear();
        assert!(invalid_message(&input).contains("At least one stock item is required"));
    }

    #[test]
    fn test_empty_requirements() {
        let mut input = basic_input();
        input.requirements.clear();
        assert!(invalid_message(&input).contains("At least one cut requirement is needed"));
    }

    #[test]
    fn test_negative_stock_length() {
        let mut input = basic_input();
        input.stock_items = vec![StockItem::new("1", -100.0)];
        assert!(invalid_message(&input).contains("All stock lengths must be greater than 0"));
    }

    #[test]
    fn test_cut_longer_than_stock() {
        let mut input = basic_input();
        input.requirements = vec![CutRequirement::new("x", 1500.0)];
        assert!(
            invalid_message(&input).contains("Some cuts are longer than longest available stock")
        );
    }

    #[test]
    fn test_negative_kerf() {
        let input = basic_input().with_kerf_width(-1.0);
        assert!(invalid_message(&input).contains("Kerf width must be non-negative"));
    }
}

mod optimization {
    use super::*;

    #[test]
    fn test_basic_scenario() {
        let input = basic_input();
        let result = calculate_optimal_cuts(&input).unwrap();

        assert!(!result.patterns.is_empty());
        assert!(result.total_stock > 0);
        assert!(result.total_cost >= 0.0);
        for pattern in &result.patterns {
            let sum: f64 = pattern.cuts.iter().sum();
            assert!(sum + pattern.waste <= pattern.stock_length);
        }
        assert_invariants(&input, &result, KerfPolicy::BetweenCuts);
    }

    #[test]
    fn test_basic_scenario_layout() {
        let result = calculate_optimal_cuts(&basic_input()).unwrap();

        assert_eq!(result.total_stock, 2);
        assert_eq!(result.patterns[0].cuts, vec![450.0, 450.0]);
        assert_eq!(result.patterns[1].cuts, vec![300.0]);
        assert_relative_eq!(result.patterns[0].waste, 96.0);
        assert_relative_eq!(result.patterns[1].waste, 700.0);
        assert_relative_eq!(result.total_waste, 796.0);
        assert_relative_eq!(result.average_utilization, 60.2);
        assert_eq!(result.total_cost, 0.0);
    }

    #[test]
    fn test_insufficient_stock_is_infeasible() {
        let input = CutCalculatorInput::new(
            vec![StockItem::new("1", 1000.0).with_quantity(1)],
            vec![CutRequirement::new("a", 600.0).with_quantity(3)],
        )
        .with_kerf_width(4.0);

        let err = calculate_optimal_cuts(&input).unwrap_err();
        assert!(matches!(err, Error::InfeasiblePacking(_)));
        assert!(err.to_string().contains("Cannot fit all cuts"));
    }

    #[test]
    fn test_zero_demand_gives_empty_result() {
        let input = CutCalculatorInput::new(
            vec![StockItem::new("1", 1000.0).with_quantity(1)],
            vec![CutRequirement::new("a", 600.0).with_quantity(0)],
        );

        let result = calculate_optimal_cuts(&input).unwrap();
        assert!(result.patterns.is_empty());
        assert_eq!(result.total_stock, 0);
        assert_eq!(result.average_utilization, 0.0);
        assert_eq!(result.total_waste, 0.0);
    }

    #[test]
    fn test_workshop_invariants_all_strategies() {
        let input = workshop_input();
        for strategy in Strategy::all() {
            for policy in [KerfPolicy::BetweenCuts, KerfPolicy::EveryCut] {
                let config = Config::new()
                    .with_strategy(strategy)
                    .with_kerf_policy(policy);
                let result = calculate_optimal_cuts_with(&input, &config).unwrap();
                assert_invariants(&input, &result, policy);
                assert_eq!(result.strategy.as_deref(), Some(strategy.name()));
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let input = workshop_input();
        let a = calculate_optimal_cuts(&input).unwrap();
        let b = calculate_optimal_cuts(&input).unwrap();
        assert_eq!(a.patterns, b.patterns);
        assert_eq!(a.total_stock, b.total_stock);
    }

    #[test]
    fn test_equal_lengths_keep_requirement_order() {
        let input = CutCalculatorInput::new(
            vec![StockItem::new("1", 1000.0).with_quantity(3)],
            vec![
                CutRequirement::new("first", 500.0),
                CutRequirement::new("second", 500.0),
                CutRequirement::new("third", 500.0),
            ],
        );
        let result = calculate_optimal_cuts(&input).unwrap();
        assert_eq!(result.total_stock, 2);
        assert_eq!(
            result.patterns[0].requirement_ids,
            vec!["first".to_string(), "second".to_string()]
        );
        assert_eq!(result.patterns[1].requirement_ids, vec!["third".to_string()]);
    }

    #[test]
    fn test_zero_kerf_perfect_fit() {
        let input = CutCalculatorInput::new(
            vec![StockItem::new("1", 1000.0).with_quantity(2)],
            vec![CutRequirement::new("a", 250.0).with_quantity(8)],
        );
        let result = calculate_optimal_cuts(&input).unwrap();
        assert_eq!(result.total_stock, 2);
        assert_eq!(result.total_waste, 0.0);
        assert_eq!(result.average_utilization, 100.0);
    }

    #[test]
    fn test_pricing_cost() {
        let input = CutCalculatorInput::new(
            vec![
                StockItem::new("short", 1000.0).with_quantity(2),
                StockItem::new("long", 3000.0).with_quantity(1),
            ],
            vec![
                CutRequirement::new("big", 2500.0),
                CutRequirement::new("small", 800.0).with_quantity(2),
            ],
        )
        .with_kerf_width(2.0)
        .with_pricing(Pricing::from_pairs([(1000.0, 8.0), (3000.0, 21.5)]));

        let result = calculate_optimal_cuts(&input).unwrap();
        // 2500 on the 3m bar (no room for 800 + kerf), one 800 on each 1m bar.
        assert_eq!(result.total_stock, 3);
        assert_relative_eq!(result.total_cost, 37.5);
        assert_eq!(result.stock_usage[0].used, 2);
        assert_eq!(result.stock_usage[1].used, 1);
        assert_invariants(&input, &result, KerfPolicy::BetweenCuts);
    }

    #[test]
    fn test_concurrent_calls_are_independent() {
        let input = workshop_input();
        let expected = calculate_optimal_cuts(&input).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let input = input.clone();
                std::thread::spawn(move || calculate_optimal_cuts(&input).unwrap())
            })
            .collect();

        for handle in handles {
            let result = handle.join().unwrap();
            assert_eq!(result.patterns, expected.patterns);
        }
    }
}
