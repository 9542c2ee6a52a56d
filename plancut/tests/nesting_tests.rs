#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use itertools::Itertools;
    use plancut::config::{NestingConfig, OffsetPolicy};
    use plancut::entities::{Hole, NestingResult, PartShape, PartSpec, Sheet};
    use plancut::nesting::{
        NestingJob, NestingOutcome, compute_cutting_plan, compute_cutting_plan_in_bins, nest,
        nest_job,
    };
    use plancut::search::{ProgressCallback, SearchProgress};
    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use test_case::test_case;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    fn rectangles(width: f64, height: f64, qty: usize) -> PartSpec {
        PartSpec::new("plate", PartShape::Rectangle { width, height }, qty)
    }

    fn assert_consistent(result: &NestingResult) {
        let b = &result.breakdown;
        assert!(approx_eq!(
            f64,
            b.accounted_area(),
            b.total.area,
            epsilon = 1e-3
        ));
        for plan in &result.plans {
            let usable = plan.sheet.usable_rect();
            for piece in &plan.pieces {
                assert!(usable.contains(&piece.footprint()));
            }
            for (a, b) in plan.pieces.iter().tuple_combinations() {
                assert!(!a.footprint().overlaps(&b.footprint()));
            }
            for scrap in &plan.scraps {
                assert!(usable.contains(&scrap.rect()));
                assert!(plan.pieces.iter().all(|p| !p.footprint().overlaps(&scrap.rect())));
            }
        }
        assert_eq!(
            result.plans.iter().map(|p| p.repetitions).sum::<usize>(),
            result.total_sheets
        );
    }

    #[test]
    fn four_quarters_on_one_sheet() {
        let parts = [rectangles(500.0, 500.0, 4)];
        let config = NestingConfig::default();

        let simple = compute_cutting_plan(1000.0, 1000.0, &parts, &config)
            .unwrap()
            .unwrap();
        assert_eq!(simple.total_sheets, 1);
        assert!(approx_eq!(f64, simple.utilization, 100.0, epsilon = 1e-9));

        let sheets = Sheet::try_new(1000.0, 1000.0, 0.0).unwrap().pool(10);
        let advanced =
            compute_cutting_plan_in_bins(&parts, 0.0, 10.0, &sheets, 7.85, &config, None)
                .unwrap()
                .unwrap();
        assert_eq!(advanced.total_sheets, 1);
        assert_eq!(advanced.plans[0].pieces.len(), 4);
        assert!(approx_eq!(f64, advanced.utilization, 100.0, epsilon = 1e-9));
        assert!(advanced.plans[0].scraps.is_empty());
        assert_consistent(&advanced);
    }

    #[test]
    fn weights_follow_area_thickness_and_density() {
        let parts = [rectangles(500.0, 500.0, 4)];
        let sheets = Sheet::try_new(1000.0, 1000.0, 0.0).unwrap().pool(1);
        let result = compute_cutting_plan_in_bins(
            &parts,
            0.0,
            10.0,
            &sheets,
            7.85,
            &NestingConfig::default(),
            None,
        )
        .unwrap()
        .unwrap();
        //1 m² of 10 mm steel
        assert!(approx_eq!(f64, result.sheet_weight(), 78.5, epsilon = 1e-9));
        assert!(approx_eq!(f64, result.breakdown.used.weight, 78.5, epsilon = 1e-9));
    }

    #[test_case(2, 1; "two_pieces")]
    #[test_case(4, 2; "four_pieces")]
    fn large_squares_with_offset(qty: usize, expected_sheets: usize) {
        //1008 x 1008 footprints, two fit side by side on a 3000 x 1500 sheet
        let parts = [rectangles(1000.0, 1000.0, qty)];
        let sheet = Sheet::try_new(3000.0, 1500.0, 0.0).unwrap();
        let outcome = nest(
            &sheet,
            8.0,
            &parts,
            10.0,
            7.85,
            &NestingConfig::default(),
            None,
        )
        .unwrap();
        let NestingOutcome::Nested(result) = outcome else {
            panic!("expected a nested result");
        };
        assert_eq!(result.total_sheets, expected_sheets);
        //identical layouts are grouped into a single plan
        assert_eq!(result.plans.len(), 1);
        assert_eq!(result.plans[0].repetitions, expected_sheets);

        let plan = &result.plans[0];
        assert!(
            plan.pieces
                .iter()
                .all(|p| (p.width, p.height) == (1008.0, 1008.0))
        );
        let expected_util = qty as f64 * 1e6 / (expected_sheets as f64 * 4.5e6) * 100.0;
        assert!(approx_eq!(f64, result.utilization, expected_util, epsilon = 1e-9));
        assert!(
            plan.scraps
                .iter()
                .any(|s| s.is_reusable() && s.width >= 300.0 && s.height >= 300.0)
        );
        assert!(result.breakdown.offset_loss.area > 0.0);
        assert_consistent(&result);
    }

    #[test]
    fn triangles_are_nested_in_pairs() {
        let parts = [PartSpec::new(
            "gusset",
            PartShape::RightTriangle {
                base: 200.0,
                height: 300.0,
            },
            5,
        )];
        let sheet = Sheet::try_new(1000.0, 1000.0, 10.0).unwrap();
        let outcome = nest(&sheet, 5.0, &parts, 6.0, 7.85, &NestingConfig::default(), None).unwrap();
        let result = outcome.result().unwrap();
        assert_eq!(result.plans[0].pieces.len(), 3);
        assert_eq!(result.n_parts(), 5);
        assert!(approx_eq!(
            f64,
            result.breakdown.used.area,
            5.0 * 200.0 * 300.0 / 2.0,
            epsilon = 1e-6
        ));
        assert_consistent(result);
    }

    #[test]
    fn no_valid_parts_is_distinguished_from_infeasible() {
        let sheet = Sheet::try_new(1000.0, 1000.0, 0.0).unwrap();
        let config = NestingConfig::default();

        let invalid = [rectangles(0.0, 100.0, 3), rectangles(100.0, 100.0, 0)];
        let outcome = nest(&sheet, 0.0, &invalid, 5.0, 7.85, &config, None).unwrap();
        assert!(matches!(outcome, NestingOutcome::NoValidParts));

        let oversized = [rectangles(2000.0, 100.0, 1)];
        let outcome = nest(&sheet, 0.0, &oversized, 5.0, 7.85, &config, None).unwrap();
        assert!(matches!(outcome, NestingOutcome::Infeasible));
        assert!(
            compute_cutting_plan(1000.0, 1000.0, &oversized, &config)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn pool_too_small_is_infeasible() {
        let config = NestingConfig {
            max_sheets: 2,
            ..NestingConfig::default()
        };
        let sheet = Sheet::try_new(1000.0, 1000.0, 0.0).unwrap();
        let parts = [rectangles(1000.0, 1000.0, 3)];
        let outcome = nest(&sheet, 0.0, &parts, 5.0, 7.85, &config, None).unwrap();
        assert!(matches!(outcome, NestingOutcome::Infeasible));
    }

    #[test]
    fn hard_errors() {
        let sheet = Sheet::try_new(1000.0, 1000.0, 0.0).unwrap();
        let config = NestingConfig::default();
        let parts = [rectangles(100.0, 100.0, 1)];

        assert!(nest(&sheet, 0.0, &parts, 5.0, 0.0, &config, None).is_err());
        assert!(nest(&sheet, -2.0, &parts, 5.0, 7.85, &config, None).is_err());
        assert!(Sheet::try_new(1000.0, 1000.0, 500.0).is_err());
        assert!(compute_cutting_plan(-1.0, 1000.0, &parts, &config).is_err());

        let outline = [PartSpec::new(
            "bracket",
            PartShape::TracedOutline {
                outline: String::new(),
                width: 100.0,
                height: 100.0,
            },
            1,
        )];
        assert!(nest(&sheet, 0.0, &outline, 5.0, 7.85, &config, None).is_err());
    }

    #[test]
    fn mixed_sheet_pool() {
        let parts = [rectangles(800.0, 800.0, 1)];
        let bins = [
            Sheet::try_new(500.0, 500.0, 0.0).unwrap(),
            Sheet::try_new(1000.0, 1000.0, 0.0).unwrap(),
        ];
        let result = compute_cutting_plan_in_bins(
            &parts,
            0.0,
            5.0,
            &bins,
            7.85,
            &NestingConfig::default(),
            None,
        )
        .unwrap()
        .unwrap();
        assert_eq!(result.total_sheets, 1);
        assert_eq!(result.plans[0].sheet.width, 1000.0);
        assert!(approx_eq!(f64, result.utilization, 64.0, epsilon = 1e-9));
    }

    #[test]
    fn rotated_pieces_carry_turned_holes() {
        //only fits the sheet when turned
        let part = rectangles(900.0, 200.0, 1).with_holes(vec![Hole {
            diameter: 20.0,
            x: 100.0,
            y: 50.0,
        }]);
        let sheet = Sheet::try_new(300.0, 1000.0, 0.0).unwrap();
        let outcome = nest(&sheet, 0.0, &[part], 5.0, 7.85, &NestingConfig::default(), None).unwrap();
        let result = outcome.result().unwrap();
        let piece = &result.plans[0].pieces[0];
        assert!(piece.rotated);
        assert_eq!((piece.width, piece.height), (200.0, 900.0));
        assert_eq!((piece.holes[0].x, piece.holes[0].y), (50.0, 800.0));
        assert_eq!(result.plans[0].summary[0].label, "R 900x200 (1 holes)");
    }

    #[test]
    fn progress_is_reported_per_attempt() {
        let counter = AtomicUsize::new(0);
        let callback: &ProgressCallback<'_> = &|p: &SearchProgress| {
            assert!(p.attempt >= 1);
            counter.fetch_add(1, Ordering::Relaxed);
        };
        let parts = [rectangles(500.0, 500.0, 4)];
        let sheets = Sheet::try_new(1000.0, 1000.0, 0.0).unwrap().pool(5);
        let config = NestingConfig::default();
        compute_cutting_plan_in_bins(&parts, 0.0, 5.0, &sheets, 7.85, &config, Some(callback))
            .unwrap()
            .unwrap();
        //feasible at the area lower bound: every heuristic of the full set is tried exactly once
        assert_eq!(counter.load(Ordering::Relaxed), config.search.full_set.len());
    }

    #[test]
    fn thickness_groups_use_their_own_clearance() {
        init_logger();
        let job = NestingJob {
            name: "mixed".to_string(),
            sheet: Sheet::try_new(2000.0, 1000.0, 0.0).unwrap(),
            offset_policy: OffsetPolicy::ThicknessTable,
            density: None,
            default_thickness: 5.0,
            parts: vec![
                rectangles(400.0, 300.0, 3),
                rectangles(600.0, 200.0, 2).with_thickness(30.0),
                rectangles(0.0, 200.0, 2).with_thickness(12.0),
            ],
        };
        let config = NestingConfig::default();
        let groups = nest_job(&job, &config, None).unwrap();
        assert_eq!(
            groups.iter().map(|g| g.thickness).collect_vec(),
            vec![5.0, 12.0, 30.0]
        );
        assert_eq!(groups[0].clearance, config.offset_table.lookup(5.0));
        assert_eq!(groups[2].clearance, config.offset_table.lookup(30.0));
        assert!(matches!(groups[1].outcome, NestingOutcome::NoValidParts));

        let thin = groups[0].outcome.result().unwrap();
        assert_eq!(thin.n_parts(), 3);
        assert_eq!(thin.plans[0].sheet.margin, groups[0].clearance.margin);
        let piece = &thin.plans[0].pieces[0];
        assert_eq!(
            piece.width.max(piece.height),
            400.0 + groups[0].clearance.offset
        );
        assert!(groups[2].outcome.result().is_some());
    }

    #[test_case(7; "seed_7")]
    #[test_case(2024; "seed_2024")]
    fn random_parts_are_nested_consistently(seed: u64) {
        init_logger();
        let mut rng = SmallRng::seed_from_u64(seed);
        let parts = (0..25)
            .map(|i| {
                let shape = match i % 4 {
                    0 => PartShape::Rectangle {
                        width: rng.random_range(50.0..700.0),
                        height: rng.random_range(50.0..700.0),
                    },
                    1 => PartShape::Circle {
                        diameter: rng.random_range(50.0..400.0),
                    },
                    2 => PartShape::RightTriangle {
                        base: rng.random_range(50.0..500.0),
                        height: rng.random_range(50.0..500.0),
                    },
                    _ => {
                        let large_base = rng.random_range(100.0..500.0);
                        PartShape::Trapezoid {
                            large_base,
                            small_base: large_base / 2.0,
                            height: rng.random_range(50.0..400.0),
                        }
                    }
                };
                PartSpec::new(format!("part-{i}"), shape, rng.random_range(1..4))
            })
            .collect_vec();
        let sheet = Sheet::try_new(3000.0, 1500.0, 10.0).unwrap();
        let outcome = nest(&sheet, 8.0, &parts, 6.0, 7.85, &NestingConfig::default(), None).unwrap();
        let result = outcome.result().unwrap();

        assert_eq!(
            result.n_parts(),
            parts.iter().map(|p| p.quantity).sum::<usize>()
        );
        assert!(result.utilization > 0.0 && result.utilization <= 100.0);
        assert_consistent(result);
    }
}
