//! Integration tests for seg-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{AgentSnapshotRow, IterationSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(agent_id: u32, iteration: u64) -> AgentSnapshotRow {
        AgentSnapshotRow {
            iteration,
            agent_id,
            x:     0.25,
            y:     0.5,
            group: agent_id % 2 == 1,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("agent_snapshots.csv").exists());
        assert!(dir.path().join("iteration_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["iteration", "agent_id", "x", "y", "group"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("iteration_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["iteration", "unhappy_agents"]);
    }

    #[test]
    fn csv_snapshot_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshot(&[snap_row(0, 2), snap_row(1, 2), snap_row(2, 2)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "2");    // iteration
        assert_eq!(&rows[1][1], "1");    // agent_id
        assert_eq!(&rows[0][2], "0.25"); // x
        assert_eq!(&rows[0][4], "0");    // group A
        assert_eq!(&rows[1][4], "1");    // group B
    }

    #[test]
    fn csv_summary_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_iteration_summary(&IterationSummaryRow { iteration: 3, unhappy: 41 }).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("iteration_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][1], "41");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn missing_directory_errors() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("does/not/exist")).is_err());
    }
}

#[cfg(test)]
mod json_tests {
    use tempfile::TempDir;

    use crate::json::JsonWriter;
    use crate::row::{AgentSnapshotRow, IterationSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn read_json(dir: &TempDir, name: &str) -> serde_json::Value {
        let text = std::fs::read_to_string(dir.path().join(name)).unwrap();
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn empty_output_is_valid_json() {
        let dir = tmp();
        let mut w = JsonWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        assert_eq!(read_json(&dir, "snapshots.json"), serde_json::json!([]));
        assert_eq!(read_json(&dir, "iteration_summaries.json"), serde_json::json!([]));
    }

    #[test]
    fn snapshots_use_host_shape() {
        let dir = tmp();
        let mut w = JsonWriter::new(dir.path()).unwrap();
        let row = |agent_id, group| AgentSnapshotRow { iteration: 0, agent_id, x: 0.5, y: 0.25, group };
        w.write_snapshot(&[row(0, false), row(1, true)]).unwrap();
        w.write_snapshot(&[row(0, false), row(1, true)]).unwrap();
        w.write_iteration_summary(&IterationSummaryRow { iteration: 0, unhappy: 2 }).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        assert_eq!(
            read_json(&dir, "snapshots.json"),
            serde_json::json!([
                [[0.5, 0.25, false], [0.5, 0.25, true]],
                [[0.5, 0.25, false], [0.5, 0.25, true]],
            ])
        );
        assert_eq!(
            read_json(&dir, "iteration_summaries.json"),
            serde_json::json!([{ "iteration": 0, "unhappy": 2 }])
        );
    }
}

#[cfg(test)]
mod observer_tests {
    use seg_core::SimConfig;
    use seg_sim::SimBuilder;

    use crate::{CsvWriter, JsonWriter, OutputWriter, SimOutputObserver};

    #[test]
    fn integration_csv() {
        let dir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);

        let config = SimConfig::new(40, 4, 2, 5).with_seed(42);
        let output = SimBuilder::new(config).build().unwrap().run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        assert_eq!(rdr.records().count(), 40 * output.snapshots.len());

        let mut rdr = csv::Reader::from_path(dir.path().join("iteration_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), output.summaries.len());
        for (row, summary) in rows.iter().zip(&output.summaries) {
            assert_eq!(row[1].parse::<usize>().unwrap(), summary.unhappy);
        }
    }

    #[test]
    fn integration_json_matches_snapshots() {
        let dir = tempfile::tempdir().unwrap();
        let writer = JsonWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);

        let config = SimConfig::new(30, 3, 2, 4).with_seed(9);
        let output = SimBuilder::new(config).build().unwrap().run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());
        // Already closed by on_sim_end.
        obs.into_writer().finish().unwrap();

        let text = std::fs::read_to_string(dir.path().join("snapshots.json")).unwrap();
        let written: Vec<Vec<(f64, f64, bool)>> = serde_json::from_str(&text).unwrap();
        assert_eq!(written.len(), output.snapshots.len());
        for (json, snap) in written.iter().zip(&output.snapshots) {
            assert_eq!(json.len(), snap.len());
            for (&(jx, jy, jt), (x, y, t)) in json.iter().zip(snap.rows()) {
                assert!((jx - x).abs() < 1e-12 && (jy - y).abs() < 1e-12);
                assert_eq!(jt, t);
            }
        }
    }
}
