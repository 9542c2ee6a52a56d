#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use plancut::geometry::Rect;
    use plancut::packer::{BinSize, Heuristic, PackRect, Packing, RectPacker};
    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    fn squares(n: usize, side: f64) -> Vec<PackRect> {
        (0..n)
            .map(|id| PackRect {
                id,
                width: side,
                height: side,
            })
            .collect_vec()
    }

    fn assert_valid(packing: &Packing, rects: &[PackRect], bins: &[BinSize]) {
        //every rectangle is either placed exactly once or reported unplaced
        let mut ids = packing
            .bins
            .iter()
            .flat_map(|b| b.rects.iter().map(|r| r.id))
            .chain(packing.unplaced.iter().copied())
            .collect_vec();
        ids.sort();
        assert_eq!(ids, rects.iter().map(|r| r.id).sorted().collect_vec());

        for bin in &packing.bins {
            let size = bins[bin.bin_index];
            let frame = Rect::from_xywh(0.0, 0.0, size.width, size.height);
            for r in &bin.rects {
                let input = rects.iter().find(|i| i.id == r.id).unwrap();
                match r.rotated {
                    false => assert_eq!((r.width, r.height), (input.width, input.height)),
                    true => assert_eq!((r.width, r.height), (input.height, input.width)),
                }
                assert!(frame.contains(&Rect::from_xywh(r.x, r.y, r.width, r.height)));
            }
            for (a, b) in bin.rects.iter().tuple_combinations() {
                let ra = Rect::from_xywh(a.x, a.y, a.width, a.height);
                let rb = Rect::from_xywh(b.x, b.y, b.width, b.height);
                assert!(!ra.overlaps(&rb), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test_case(Heuristic::MaxRectsBssf; "maxrects_bssf")]
    #[test_case(Heuristic::MaxRectsBaf; "maxrects_baf")]
    #[test_case(Heuristic::MaxRectsBlsf; "maxrects_blsf")]
    #[test_case(Heuristic::MaxRectsBl; "maxrects_bl")]
    #[test_case(Heuristic::SkylineBl; "skyline_bl")]
    #[test_case(Heuristic::SkylineMwf; "skyline_mwf")]
    fn four_quarters_fill_one_bin(heuristic: Heuristic) {
        let rects = squares(4, 500.0);
        let bins = vec![
            BinSize {
                width: 1000.0,
                height: 1000.0,
            };
            3
        ];
        let packing = heuristic.pack(&rects, &bins, true);
        assert!(packing.is_complete());
        assert_eq!(packing.n_bins_used(), 1);
        assert_eq!(packing.bins[0].bin_index, 0);
        assert_valid(&packing, &rects, &bins);
    }

    #[test_case(Heuristic::MaxRectsBssf; "maxrects_bssf")]
    #[test_case(Heuristic::SkylineMwf; "skyline_mwf")]
    fn bins_are_opened_in_order(heuristic: Heuristic) {
        let rects = squares(3, 1000.0);
        let bins = vec![
            BinSize {
                width: 1000.0,
                height: 1000.0,
            };
            5
        ];
        let packing = heuristic.pack(&rects, &bins, true);
        assert!(packing.is_complete());
        assert_eq!(
            packing.bins.iter().map(|b| b.bin_index).collect_vec(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn oversized_rect_is_unplaced() {
        let rects = vec![
            PackRect {
                id: 0,
                width: 1200.0,
                height: 100.0,
            },
            PackRect {
                id: 1,
                width: 100.0,
                height: 100.0,
            },
        ];
        let bins = [BinSize {
            width: 1000.0,
            height: 1000.0,
        }];
        for heuristic in Heuristic::ALL {
            let packing = heuristic.pack(&rects, &bins, true);
            assert_eq!(packing.unplaced, vec![0]);
            assert_eq!(packing.n_placed(), 1);
        }
    }

    #[test]
    fn rotation_is_only_used_when_allowed() {
        let rects = vec![PackRect {
            id: 0,
            width: 900.0,
            height: 100.0,
        }];
        let bins = [BinSize {
            width: 100.0,
            height: 900.0,
        }];
        for heuristic in Heuristic::ALL {
            let rotated = heuristic.pack(&rects, &bins, true);
            assert!(rotated.is_complete());
            let placed = rotated.bins[0].rects[0];
            assert!(placed.rotated);
            assert_eq!((placed.width, placed.height), (100.0, 900.0));

            let fixed = heuristic.pack(&rects, &bins, false);
            assert_eq!(fixed.unplaced, vec![0]);
        }
    }

    #[test_case(0; "seed_0")]
    #[test_case(1; "seed_1")]
    #[test_case(42; "seed_42")]
    fn random_rects_never_overlap(seed: u64) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let rects = (0..60)
            .map(|id| PackRect {
                id,
                width: rng.random_range(20.0..600.0),
                height: rng.random_range(20.0..600.0),
            })
            .collect_vec();
        let bins = vec![
            BinSize {
                width: 1500.0,
                height: 1000.0,
            };
            60
        ];
        for heuristic in Heuristic::ALL {
            let packing = heuristic.pack(&rects, &bins, true);
            assert!(packing.is_complete(), "{heuristic} left units unplaced");
            assert_valid(&packing, &rects, &bins);
        }
    }
}
