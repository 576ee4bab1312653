// Properties that hold for both demo units across sequence lengths
use complexity_core::{
    merge_sort, merge_sort_traced, Complexity, DemoConfig, Element, SpaceComplexityDemo,
    TimeComplexityDemo, NOT_FOUND,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SIZES: &[usize] = &[1, 2, 3, 5, 16, 100, 1_023, 1_024];

fn is_non_decreasing(values: &[Element]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

fn random_sequence(rng: &mut StdRng, len: usize) -> Vec<Element> {
    (0..len).map(|_| rng.gen_range(-50..50)).collect()
}

#[test]
fn test_first_element_is_zero() {
    for &n in SIZES {
        assert_eq!(TimeComplexityDemo::new(n).first_element(), Some(0));
    }
}

#[test]
fn test_searches_agree_on_every_target() {
    for &n in SIZES {
        let time = TimeComplexityDemo::new(n);
        let space = SpaceComplexityDemo::new(n);
        for target in -1..=n as Element {
            let expected = if target >= 0 && target < n as Element {
                Some(target as usize)
            } else {
                None
            };
            assert_eq!(time.binary_search(target), expected, "n={} target={}", n, target);
            assert_eq!(space.log_n_space_operation(target), expected);
        }
    }
}

#[test]
fn test_sums_match_closed_form() {
    for &n in SIZES {
        let expected = (n as Element) * (n as Element - 1) / 2;
        assert_eq!(TimeComplexityDemo::new(n).linear_sum(), expected);
        assert_eq!(SpaceComplexityDemo::new(n).constant_space_operation(), expected);
    }
}

#[test]
fn test_sorts_return_original_sequence() {
    for &n in SIZES {
        let demo = TimeComplexityDemo::new(n);
        let original = demo.sequence().to_vec();
        assert_eq!(demo.sort_array(), original);
        assert_eq!(demo.bubble_sort(), original);
        assert_eq!(SpaceComplexityDemo::new(n).merge_sort_operation(), original);
    }
}

#[test]
fn test_merge_sort_arbitrary_input() {
    let mut rng = StdRng::seed_from_u64(7);
    for len in [0usize, 1, 2, 9, 64, 257] {
        let input = random_sequence(&mut rng, len);
        let sorted = merge_sort(&input);

        assert_eq!(sorted.len(), input.len());
        assert!(is_non_decreasing(&sorted));

        let mut expected = input.clone();
        expected.sort();
        assert_eq!(sorted, expected);

        assert_eq!(merge_sort(&sorted), sorted);
    }
}

#[test]
fn test_merge_sort_space_interpretations() {
    // Peak live elements grow linearly while total allocation grows as N log N
    let (_, small) = merge_sort_traced(&SpaceComplexityDemo::new(256).sequence().to_vec());
    let (_, large) = merge_sort_traced(&SpaceComplexityDemo::new(4_096).sequence().to_vec());

    assert_eq!(large.peak / small.peak, 16);
    assert_eq!(small.total, 256 * 9);
    assert_eq!(large.total, 4_096 * 13);
    assert!(large.total / small.total > 16);
}

#[test]
fn test_linear_space_doubles() {
    let doubled = SpaceComplexityDemo::new(100).linear_space_operation();
    assert_eq!(doubled.len(), 100);
    for (i, value) in doubled.iter().enumerate() {
        assert_eq!(*value, 2 * i as Element);
    }
}

#[test]
fn test_quadratic_space_matrix_shape() {
    for &n in &[1usize, 5, 32] {
        let matrix = SpaceComplexityDemo::new(n).quadratic_space_operation();
        assert_eq!(matrix.len(), n);
        assert!(matrix.iter().all(|row| row.len() == n && row.iter().all(|&v| v == 0)));
    }
}

#[test]
fn test_config_driven_run() {
    let config = DemoConfig::from_toml("n = 200\nsample_len = 3\nruns = 2").unwrap();
    config.validate().unwrap();

    let time = TimeComplexityDemo::new(config.n).run_repeated(config.target(), config.runs);
    assert_eq!(time.measurements.len(), Complexity::ALL.len());
    assert!(time.measurements.iter().all(|m| m.line().contains(" took ")));

    let space = SpaceComplexityDemo::new(config.n).report(config.target(), config.sample_len);
    assert_eq!(space.const_result, 19_900);
    assert_eq!(space.log_n_result, 199);
    assert_eq!(space.sorted_array_sample, vec![0, 1, 2]);

    let missing = SpaceComplexityDemo::new(config.n).report(1_000, config.sample_len);
    assert_eq!(missing.log_n_result, NOT_FOUND);
}

#[test]
fn test_space_report_serializes() {
    let report = SpaceComplexityDemo::new(4).report(2, 10);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["const_result"], 6);
    assert_eq!(json["log_n_result"], 2);
    assert_eq!(json["new_array_sample"], serde_json::json!([0, 2, 4, 6]));
    assert_eq!(json["matrix_sample"], serde_json::json!([0, 0, 0, 0]));
}
