use super::*;

#[test]
fn test_empty_file_gives_defaults() {
    assert_eq!(RunConfig::parse("").unwrap(), RunConfig::default());
}

#[test]
fn test_parse_fixed_leaves() {
    let config = RunConfig::parse(
        r#"
        depth = 3
        algorithm = "minimax"
        format = "json"

        [leaves]
        source = "fixed"
        values = [3, 5, 2, 9]
        "#,
    )
    .unwrap();

    assert_eq!(config.depth, 3);
    assert_eq!(config.algorithm, Algorithm::Minimax);
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(
        config.leaves,
        LeafConfig::Fixed {
            values: vec![3, 5, 2, 9]
        }
    );
}

#[test]
fn test_parse_random_leaves_with_defaults() {
    let config = RunConfig::parse(
        r#"
        algorithm = "alpha-beta"

        [leaves]
        source = "random"
        seed = 7
        "#,
    )
    .unwrap();

    assert_eq!(config.algorithm, Algorithm::AlphaBeta);
    assert_eq!(
        config.leaves,
        LeafConfig::Random {
            seed: 7,
            min: -10,
            max: 10
        }
    );
}

#[test]
fn test_parse_rejects_unknown_algorithm() {
    assert!(RunConfig::parse(r#"algorithm = "expectimax""#).is_err());
}

#[test]
fn test_flags_override_file() {
    let file = RunConfig::parse(
        r#"
        depth = 5

        [leaves]
        source = "random"
        seed = 7
        min = 0
        max = 3
        "#,
    )
    .unwrap();

    let args = Args {
        depth: Some(4),
        random: true,
        max: Some(100),
        compare: true,
        ..Default::default()
    };
    let config = file.overlay(&args);

    assert_eq!(config.depth, 4);
    assert!(config.compare);
    assert_eq!(
        config.leaves,
        LeafConfig::Random {
            seed: 7,
            min: 0,
            max: 100
        }
    );
}

#[test]
fn test_seed_flag_applies_to_random_file_source() {
    let file = RunConfig::parse(
        r#"
        [leaves]
        source = "random"
        seed = 7
        "#,
    )
    .unwrap();

    let args = Args {
        seed: Some(5),
        min: Some(-1),
        ..Default::default()
    };
    assert_eq!(
        file.overlay(&args).leaves,
        LeafConfig::Random {
            seed: 5,
            min: -1,
            max: 10
        }
    );
}

#[test]
fn test_seed_flag_ignored_for_fixed_source() {
    let args = Args {
        values: Some(vec![4, 2]),
        seed: Some(5),
        ..Default::default()
    };
    let config = RunConfig::default().overlay(&args);
    assert_eq!(config.leaves, LeafConfig::Fixed { values: vec![4, 2] });
}

#[test]
fn test_values_flag_wins() {
    let args = Args {
        values: Some(vec![1, -2]),
        ..Default::default()
    };
    let config = RunConfig::default().overlay(&args);
    assert_eq!(config.leaves, LeafConfig::Fixed { values: vec![1, -2] });
    assert_eq!(config.depth, 3);
}
