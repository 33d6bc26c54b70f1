//! Integration tests for u-cutlist-core.

use rand::prelude::*;
use u_cutlist_core::{
    bill_of_materials, expand, optimize, validate, validate_expansion, CabinetSpec, Config,
    CutListOptimizer, PartError, PartRequirement, SheetSpec,
};

fn full_sheet() -> SheetSpec {
    SheetSpec::new(96.0, 48.0)
}

/// Random requirements; roughly one in ten is oversize and one in twenty invalid.
fn random_requirements(rng: &mut StdRng, count: usize) -> Vec<PartRequirement> {
    (0..count)
        .map(|i| {
            let label = format!("P{}", i);
            match rng.gen_range(0..20) {
                0 => PartRequirement::new(label, rng.gen_range(-5.0..0.0), 10.0),
                1 | 2 => PartRequirement::new(label, rng.gen_range(49.0..90.0), 60.0)
                    .with_quantity(rng.gen_range(1..=2)),
                _ => PartRequirement::new(
                    label,
                    rng.gen_range(1.0..96.0),
                    rng.gen_range(1.0..48.0),
                )
                .with_quantity(rng.gen_range(1..=6)),
            }
        })
        .collect()
}

mod scenario_tests {
    use super::*;

    #[test]
    fn test_scenario_a_side_and_shelves() {
        let reqs = vec![
            PartRequirement::new("Side", 34.5, 24.0).with_quantity(2),
            PartRequirement::new("Shelf", 28.0, 22.0).with_quantity(3),
        ];

        let expansion = expand(&reqs);
        assert_eq!(expansion.instance_count(), 5);

        let result = optimize(&reqs, full_sheet()).unwrap();
        assert_eq!(result.sheets_required(), 1);
        assert_eq!(result.placed_count(), 5);
        assert!(result.unplaced_errors.is_empty());

        let sheet = &result.sheets[0];
        let coords: Vec<(&str, f64, f64)> = sheet
            .placements
            .iter()
            .map(|p| (p.label.as_str(), p.x, p.y))
            .collect();
        assert_eq!(
            coords,
            vec![
                ("Side", 0.0, 0.0),
                ("Side", 34.5, 0.0),
                ("Shelf", 0.0, 24.0),
                ("Shelf", 28.0, 24.0),
                ("Shelf", 56.0, 24.0),
            ]
        );
        assert!(sheet.placements[..2]
            .iter()
            .all(|p| p.width == 34.5 && p.height == 24.0));
        assert!(validate_expansion(&reqs, &result).is_empty());
    }

    #[test]
    fn test_scenario_b_oversize_part() {
        let reqs = vec![
            PartRequirement::new("Door", 50.0, 60.0),
            PartRequirement::new("Shelf", 28.0, 22.0).with_quantity(2),
        ];

        let result = optimize(&reqs, full_sheet()).unwrap();
        assert_eq!(result.placed_count(), 2);
        assert!(result.placements().all(|(_, p)| p.label == "Shelf"));

        assert_eq!(result.unplaced_errors.len(), 1);
        let unplaced = &result.unplaced_errors[0];
        assert_eq!(unplaced.label, "Door");
        assert_eq!(unplaced.reason(), "PartTooLarge");
        assert_eq!(
            unplaced.error,
            PartError::PartTooLarge {
                width: 60.0,
                height: 50.0,
                sheet_width: 96.0,
                sheet_height: 48.0,
            }
        );
        assert!(validate_expansion(&reqs, &result).is_empty());
    }

    #[test]
    fn test_scenario_c_overflow_to_new_sheets() {
        let reqs = vec![PartRequirement::new("Square", 40.0, 40.0).with_quantity(9)];

        let result = optimize(&reqs, full_sheet()).unwrap();
        let per_sheet: Vec<usize> = result.sheets.iter().map(|s| s.placements.len()).collect();
        assert_eq!(per_sheet, vec![2, 2, 2, 2, 1]);
        assert!(result
            .placements()
            .all(|(_, p)| p.y == 0.0 && (p.x == 0.0 || p.x == 40.0)));
        assert!(validate_expansion(&reqs, &result).is_empty());
    }

    #[test]
    fn test_empty_input() {
        let result = optimize(&[], full_sheet()).unwrap();
        assert!(result.sheets.is_empty());
        assert!(result.unplaced_errors.is_empty());
        assert!(validate(&result, 0).is_empty());
    }

    #[test]
    fn test_entirely_invalid_input() {
        let reqs = vec![
            PartRequirement::new("NoQty", 10.0, 10.0).with_quantity(0),
            PartRequirement::new("NoSize", 0.0, 10.0),
            PartRequirement::new("TooBig", 100.0, 10.0),
        ];
        let result = optimize(&reqs, full_sheet()).unwrap();
        assert!(result.sheets.is_empty());
        let reasons: Vec<&str> = result.unplaced_errors.iter().map(|u| u.reason()).collect();
        assert_eq!(
            reasons,
            vec!["InvalidQuantity", "InvalidDimension", "PartTooLarge"]
        );
    }

    #[test]
    fn test_single_sheet_case() {
        // Total area is far below one sheet and every shelf fits.
        let reqs = vec![
            PartRequirement::new("A", 20.0, 10.0).with_quantity(4),
            PartRequirement::new("B", 15.0, 8.0).with_quantity(5),
            PartRequirement::new("C", 30.0, 12.0).with_quantity(2),
        ];
        let result = optimize(&reqs, full_sheet()).unwrap();
        assert_eq!(result.sheets_required(), 1);
        assert_eq!(result.placed_count(), 11);
    }
}

mod property_tests {
    use super::*;

    #[test]
    fn test_random_inputs_keep_invariants() {
        let mut rng = StdRng::seed_from_u64(42);
        for round in 0..200 {
            let count = rng.gen_range(0..40);
            let reqs = random_requirements(&mut rng, count);
            let result = optimize(&reqs, full_sheet()).unwrap();

            let violations = validate_expansion(&reqs, &result);
            assert!(
                violations.is_empty(),
                "round {}: {:?}",
                round,
                violations.iter().map(ToString::to_string).collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn test_random_inputs_with_kerf_keep_invariants() {
        let mut rng = StdRng::seed_from_u64(7);
        let optimizer =
            CutListOptimizer::try_new(Config::new().with_sheet_size(96.0, 48.0).with_kerf(0.125))
                .unwrap();
        for _ in 0..100 {
            let count = rng.gen_range(1..30);
            let reqs = random_requirements(&mut rng, count);
            let result = optimizer.optimize(&reqs);
            assert!(validate_expansion(&reqs, &result).is_empty());
        }
    }

    /// Shelf pass written out by hand: does everything fit one sheet?
    fn fits_one_sheet(reqs: &[PartRequirement], sheet: SheetSpec) -> bool {
        let mut parts: Vec<(f64, f64)> = expand(reqs)
            .instances
            .iter()
            .map(|i| (i.width, i.height))
            .collect();
        parts.sort_by(|a, b| b.1.total_cmp(&a.1).then(b.0.total_cmp(&a.0)));

        let (mut x, mut y, mut row) = (0.0, 0.0, 0.0_f64);
        for (w, h) in parts {
            if x + w > sheet.width {
                x = 0.0;
                y += row;
                row = 0.0;
            }
            if y + h > sheet.height {
                return false;
            }
            x += w;
            row = row.max(h);
        }
        true
    }

    #[test]
    fn test_single_sheet_whenever_shelves_fit() {
        let mut rng = StdRng::seed_from_u64(2024);
        // Lengths in whole eighths keep every cursor sum exact.
        let eighths =
            |rng: &mut StdRng, lo: u32, hi: u32| rng.gen_range(lo * 8..=hi * 8) as f64 / 8.0;
        let mut single = 0;

        for round in 0..300 {
            let count = rng.gen_range(1..8);
            let reqs: Vec<PartRequirement> = (0..count)
                .map(|i| {
                    let a = eighths(&mut rng, 1, 48);
                    let b = eighths(&mut rng, 1, 24);
                    PartRequirement::new(format!("P{}", i), a, b)
                        .with_quantity(rng.gen_range(1..=3))
                })
                .collect();
            let result = optimize(&reqs, full_sheet()).unwrap();

            if fits_one_sheet(&reqs, full_sheet()) {
                single += 1;
                assert_eq!(result.sheets_required(), 1, "round {}: {:?}", round, reqs);
            } else {
                assert!(result.sheets_required() > 1, "round {}: {:?}", round, reqs);
            }
            assert!(result.all_placed());
        }
        assert!(single > 0);
    }

    #[test]
    fn test_determinism() {
        let mut rng = StdRng::seed_from_u64(1234);
        let reqs = random_requirements(&mut rng, 50);

        let first = optimize(&reqs, full_sheet()).unwrap();
        let second = optimize(&reqs, full_sheet()).unwrap();
        assert_eq!(first, second);
        assert_eq!(format!("{:?}", first), format!("{:?}", second));
    }

    #[test]
    fn test_sheet_count_never_below_area_bound() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..50 {
            let reqs = random_requirements(&mut rng, 25);
            let result = optimize(&reqs, full_sheet()).unwrap();
            let lower_bound = (result.used_area() / full_sheet().area()).ceil() as usize;
            assert!(result.sheets_required() >= lower_bound);
            assert!(result.utilization() <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn test_batch_is_independent() {
        let mut rng = StdRng::seed_from_u64(5);
        let jobs: Vec<Vec<PartRequirement>> =
            (0..16).map(|_| random_requirements(&mut rng, 20)).collect();

        let optimizer = CutListOptimizer::default();
        let batch = optimizer.optimize_batch(&jobs);
        for (job, result) in jobs.iter().zip(&batch) {
            assert_eq!(result, &optimizer.optimize(job));
        }
    }
}

mod cabinet_tests {
    use super::*;

    #[test]
    fn test_kitchen_run() {
        let cabinets = vec![
            CabinetSpec::new("Sink", 36.0, 34.5),
            CabinetSpec::new("Drawer", 18.0, 34.5).with_shelves(0),
            CabinetSpec::new("Pantry", 24.0, 84.0).with_shelves(4),
        ];
        let reqs = bill_of_materials(&cabinets);
        let result = optimize(&reqs, full_sheet()).unwrap();

        // Nothing in a standard kitchen run is larger than a full sheet.
        assert!(result.all_placed());
        assert!(validate_expansion(&reqs, &result).is_empty());
        assert!(result.sheets_required() >= 3);
    }

    #[test]
    fn test_invalid_cabinet_is_partial_failure() {
        let cabinets = vec![
            CabinetSpec::new("Ok", 24.0, 34.5),
            CabinetSpec::new("Sliver", 1.0, 34.5),
        ];
        let reqs = bill_of_materials(&cabinets);
        let result = optimize(&reqs, full_sheet()).unwrap();

        let invalid: Vec<&str> = result
            .unplaced_errors
            .iter()
            .filter(|u| u.reason() == "InvalidDimension")
            .map(|u| u.label.as_str())
            .collect();
        assert_eq!(invalid, vec!["Sliver Top/Bottom", "Sliver Shelf"]);
        assert!(result.placed_count() > 0);
    }
}
