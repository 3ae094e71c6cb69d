//! Unit tests for seg-host.

#[cfg(test)]
mod args_tests {
    use serde_json::json;

    use crate::{HostError, parse_args};

    #[test]
    fn four_integers_accepted() {
        let config = parse_args(&[json!(100), json!(8), json!(3), json!(12)], 7).unwrap();
        assert_eq!(config.agent_count, 100);
        assert_eq!(config.neighbor_count, 8);
        assert_eq!(config.same_type_threshold, 3);
        assert_eq!(config.iterations, 12);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn whole_floats_accepted() {
        let config = parse_args(&[json!(100.0), json!(8.0), json!(3), json!(2.0)], 0).unwrap();
        assert_eq!(config.agent_count, 100);
        assert_eq!(config.iterations, 2);
    }

    #[test]
    fn wrong_count_rejected() {
        for n in [0, 3, 5] {
            let args = vec![json!(1); n];
            let err = parse_args(&args, 0).unwrap_err();
            assert!(matches!(err, HostError::ArgumentCount { got } if got == n));
            assert_eq!(err.to_string(), "Invalid no of arguments passed");
        }
    }

    #[test]
    fn negative_rejected() {
        let err = parse_args(&[json!(100), json!(-1), json!(3), json!(2)], 0).unwrap_err();
        match err {
            HostError::InvalidArgument { position, name, .. } => {
                assert_eq!(position, 2);
                assert_eq!(name, "neighborCount");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn float_beyond_u64_rejected() {
        // 2^64 as a JSON float; a saturating cast would read it as u64::MAX.
        let big = json!(18_446_744_073_709_551_616.0_f64);
        let err = parse_args(&[json!(100), json!(8), json!(3), big], 0).unwrap_err();
        assert!(matches!(err, HostError::InvalidArgument { position: 4, .. }), "got {err}");

        let config = parse_args(&[json!(100), json!(8), json!(3), json!(4_294_967_296.0)], 0).unwrap();
        assert_eq!(config.iterations, 1 << 32);
    }

    #[test]
    fn fractions_and_non_numbers_rejected() {
        assert!(parse_args(&[json!(100.5), json!(8), json!(3), json!(2)], 0).is_err());
        assert!(parse_args(&[json!("100"), json!(8), json!(3), json!(2)], 0).is_err());
        assert!(parse_args(&[json!(100), json!(8), json!(null), json!(2)], 0).is_err());
        assert!(parse_args(&[json!(100), json!(8), json!(3), json!([2])], 0).is_err());
    }
}

#[cfg(test)]
mod invoke_tests {
    use serde_json::{Value, json};

    use crate::{invoke, invoke_with_seed};

    fn args(agents: u64, neighbors: u64, threshold: u64, iterations: u64) -> Vec<Value> {
        vec![json!(agents), json!(neighbors), json!(threshold), json!(iterations)]
    }

    #[test]
    fn returns_snapshot_arrays() {
        let out = invoke_with_seed(&args(50, 4, 2, 3), 11);
        let snapshots = out.as_array().expect("array of snapshots");
        assert!(!snapshots.is_empty() && snapshots.len() <= 4);

        for snap in snapshots {
            let agents = snap.as_array().unwrap();
            assert_eq!(agents.len(), 50);
            for agent in agents {
                let triple = agent.as_array().unwrap();
                assert_eq!(triple.len(), 3);
                let x = triple[0].as_f64().unwrap();
                let y = triple[1].as_f64().unwrap();
                assert!((0.0..1.0).contains(&x) && (0.0..1.0).contains(&y));
                assert!(triple[2].is_boolean());
            }
        }
    }

    #[test]
    fn types_never_change() {
        let out = invoke_with_seed(&args(60, 5, 3, 4), 3);
        let snapshots = out.as_array().unwrap();
        let types = |snap: &Value| -> Vec<bool> {
            snap.as_array().unwrap().iter().map(|a| a[2].as_bool().unwrap()).collect()
        };
        let first = types(&snapshots[0]);
        for snap in &snapshots[1..] {
            assert_eq!(types(snap), first);
        }
    }

    #[test]
    fn zero_iterations_gives_initial_only() {
        let out = invoke_with_seed(&args(20, 3, 1, 0), 5);
        assert_eq!(out.as_array().unwrap().len(), 1);
    }

    #[test]
    fn same_seed_same_result() {
        let a = invoke_with_seed(&args(40, 4, 2, 3), 99);
        let b = invoke_with_seed(&args(40, 4, 2, 3), 99);
        assert_eq!(a, b);
    }

    #[test]
    fn argument_count_message() {
        assert_eq!(invoke(&[json!(1000), json!(10)]), json!("Invalid no of arguments passed"));
        assert_eq!(invoke(&[]), json!("Invalid no of arguments passed"));
    }

    #[test]
    fn config_errors_become_strings() {
        // neighbor_count must be below agent_count - 1
        let out = invoke_with_seed(&args(5, 4, 2, 1), 0);
        let msg = out.as_str().expect("error string");
        assert!(msg.contains("neighbor_count"), "{msg}");

        let out = invoke_with_seed(&[json!(10), json!(-3), json!(1), json!(1)], 0);
        assert!(out.as_str().unwrap().contains("non-negative"));
    }
}
