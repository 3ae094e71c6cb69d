//! Unit tests for seg-agent.

#[cfg(test)]
mod snapshot {
    use seg_core::{AgentId, Group, Point, SegError};

    use crate::Snapshot;

    fn three() -> Snapshot {
        [
            (Point::new(0.1, 0.1), Group::A),
            (Point::new(0.5, 0.5), Group::B),
            (Point::new(0.9, 0.9), Group::A),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn accessors() {
        let s = three();
        assert_eq!(s.len(), 3);
        assert!(!s.is_empty());
        assert_eq!(s.position(AgentId(1)), Point::new(0.5, 0.5));
        assert_eq!(s.group(AgentId(2)), Group::A);
        assert_eq!(s.count_group(Group::A), 2);
    }

    #[test]
    fn rows_match_wire_form() {
        let rows: Vec<_> = three().rows().collect();
        assert_eq!(rows[0], (0.1, 0.1, false));
        assert_eq!(rows[1], (0.5, 0.5, true));
    }

    #[test]
    fn iter_yields_ids_in_order() {
        let ids: Vec<_> = three().iter().map(|(id, _, _)| id).collect();
        assert_eq!(ids, [AgentId(0), AgentId(1), AgentId(2)]);
    }

    #[test]
    fn apply_moves_changes_positions_only() {
        let mut s = three();
        let before_groups = s.groups().to_vec();
        s.apply_moves(&[(AgentId(0), Point::new(0.3, 0.4))]).unwrap();
        assert_eq!(s.position(AgentId(0)), Point::new(0.3, 0.4));
        assert_eq!(s.position(AgentId(1)), Point::new(0.5, 0.5));
        assert_eq!(s.groups(), before_groups.as_slice());
    }

    #[test]
    fn apply_moves_out_of_range_leaves_snapshot_untouched() {
        let mut s = three();
        let before = s.clone();
        let err = s
            .apply_moves(&[(AgentId(0), Point::new(0.3, 0.4)), (AgentId(9), Point::default())])
            .unwrap_err();
        assert!(matches!(err, SegError::AgentOutOfRange { population: 3, .. }));
        assert_eq!(s, before);
    }

    #[test]
    fn clone_is_deep() {
        let original = three();
        let mut copy = original.clone();
        copy.apply_moves(&[(AgentId(2), Point::new(0.0, 0.0))]).unwrap();
        assert_eq!(original.position(AgentId(2)), Point::new(0.9, 0.9));
    }
}

#[cfg(test)]
mod builder {
    use seg_core::{Group, SimRng};

    use crate::PopulationBuilder;

    #[test]
    fn builds_requested_count_in_unit_square() {
        let s = PopulationBuilder::new(500).build(&mut SimRng::new(1));
        assert_eq!(s.len(), 500);
        assert!(s.positions().iter().all(|p| p.in_unit_square()));
    }

    #[test]
    fn same_seed_same_population() {
        let a = PopulationBuilder::new(100).build(&mut SimRng::new(42));
        let b = PopulationBuilder::new(100).build(&mut SimRng::new(42));
        assert_eq!(a, b);
    }

    #[test]
    fn fair_coin_produces_both_groups() {
        let s = PopulationBuilder::new(1_000).build(&mut SimRng::new(3));
        let b = s.count_group(Group::B);
        assert!(b > 350 && b < 650, "got {b} of group B");
    }

    #[test]
    fn share_b_extremes() {
        let all_a = PopulationBuilder::new(50).share_b(0.0).build(&mut SimRng::new(3));
        assert_eq!(all_a.count_group(Group::A), 50);
        let all_b = PopulationBuilder::new(50).share_b(1.0).build(&mut SimRng::new(3));
        assert_eq!(all_b.count_group(Group::B), 50);
    }

    #[test]
    fn empty_population() {
        assert!(PopulationBuilder::new(0).build(&mut SimRng::new(0)).is_empty());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_form {
    use seg_core::{Group, Point};

    use crate::Snapshot;

    #[test]
    fn serializes_as_tuples() {
        let s: Snapshot = [(Point::new(0.5, 0.25), Group::B)].into_iter().collect();
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "[[0.5,0.25,true]]");
    }

    #[test]
    fn deserializes_from_tuples() {
        let s: Snapshot = serde_json::from_str("[[0.5,0.25,false],[0.125,0.75,true]]").unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(s.groups(), &[Group::A, Group::B]);
    }
}
