use std::collections::HashSet;

use assert_float_eq::assert_float_absolute_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use dumpling_maker_rs::engine::constants::{PANTRY, PROTEINS};
use dumpling_maker_rs::engine::{generate_order, method_time_range};
use dumpling_maker_rs::models::{CookMethod, Difficulty};

#[test]
fn test_ingredient_fields_are_pairwise_disjoint() {
    let mut rng = StdRng::seed_from_u64(1);

    for difficulty in Difficulty::ALL {
        for _ in 0..500 {
            let order = generate_order(difficulty, &mut rng);

            let mut seen: HashSet<&str> = HashSet::new();
            assert!(seen.insert(&order.required_protein));
            for item in order
                .must_have
                .iter()
                .chain(&order.avoid)
                .chain(&order.optional_mixes)
            {
                assert!(seen.insert(item), "duplicate ingredient {:?}", item);
            }
        }
    }
}

#[test]
fn test_all_picks_come_from_the_pantry() {
    let mut rng = StdRng::seed_from_u64(2);
    let order = generate_order(Difficulty::Hard, &mut rng);

    assert!(PROTEINS.contains(&order.required_protein.as_str()));
    for item in order
        .must_have
        .iter()
        .chain(&order.avoid)
        .chain(&order.optional_mixes)
    {
        assert!(PANTRY.contains(&item.as_str()));
    }
}

#[test]
fn test_ranges_are_ordered() {
    let mut rng = StdRng::seed_from_u64(3);

    for difficulty in Difficulty::ALL {
        for _ in 0..200 {
            let order = generate_order(difficulty, &mut rng);
            assert!(order.pleat_range.min <= order.pleat_range.max);
            assert!(order.time_range.min <= order.time_range.max);
        }
    }
}

#[test]
fn test_set_sizes_scale_with_difficulty() {
    let mut rng = StdRng::seed_from_u64(4);

    let easy = generate_order(Difficulty::Easy, &mut rng);
    assert_eq!(easy.must_have.len(), 1);
    assert!(easy.avoid.is_empty());

    let normal = generate_order(Difficulty::Normal, &mut rng);
    assert_eq!(normal.must_have.len(), 2);
    assert_eq!(normal.avoid.len(), 1);

    let hard = generate_order(Difficulty::Hard, &mut rng);
    assert_eq!(hard.must_have.len(), 3);
    assert_eq!(hard.avoid.len(), 1);
}

#[test]
fn test_hard_time_window_sits_inside_the_base_interval() {
    for method in CookMethod::ALL {
        let (base_min, base_max) = method.base_time_bounds();
        let hard = method_time_range(method, Difficulty::Hard);

        assert!(hard.min >= base_min);
        assert!(hard.max <= base_max);
    }
}

#[test]
fn test_easy_time_window_is_wider_than_base() {
    for method in CookMethod::ALL {
        let (base_min, base_max) = method.base_time_bounds();
        let easy = method_time_range(method, Difficulty::Easy);

        assert!(easy.max - easy.min > base_max - base_min);
    }
}

#[test]
fn test_time_window_tightening_preserves_midpoint() {
    for method in CookMethod::ALL {
        let (base_min, base_max) = method.base_time_bounds();
        let base_mid = (base_min + base_max) / 2.0;

        for difficulty in Difficulty::ALL {
            let range = method_time_range(method, difficulty);
            // Bounds are rounded to one decimal, which can shift the
            // midpoint by up to half a tenth.
            assert_float_absolute_eq!(range.midpoint(), base_mid, 0.06);
        }
    }
}

#[test]
fn test_generation_is_deterministic_per_seed() {
    let a = generate_order(Difficulty::Normal, &mut StdRng::seed_from_u64(2468));
    let b = generate_order(Difficulty::Normal, &mut StdRng::seed_from_u64(2468));

    assert_eq!(a.required_protein, b.required_protein);
    assert_eq!(a.must_have, b.must_have);
    assert_eq!(a.avoid, b.avoid);
    assert_eq!(a.optional_mixes, b.optional_mixes);
    assert_eq!(a.method, b.method);
    assert_eq!(a.note, b.note);
}
