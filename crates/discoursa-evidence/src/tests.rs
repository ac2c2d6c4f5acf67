//! Gathering tests against record files on disk

#[cfg(test)]
mod tests {
    use crate::{gather_evidence, render_context, EvidenceError, GatherPolicy};
    use discoursa_domain::Article;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_records(dir: &TempDir, records: &[&str]) -> Vec<PathBuf> {
        records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let path = dir.path().join(format!("article{}.txt", i));
                fs::write(&path, record).unwrap();
                path
            })
            .collect()
    }

    #[test]
    fn test_gather_all_well_formed() {
        let dir = TempDir::new().unwrap();
        let paths = write_records(
            &dir,
            &["0<first<alpha\n", "5<second<beta\n", "2<third<gamma\n"],
        );

        let report = gather_evidence(&paths, "carbon tax", GatherPolicy::FailFast).unwrap();
        let evidence = report.evidence;

        assert!(report.failures.is_empty());
        assert_eq!(evidence.topic, "carbon tax");
        assert_eq!(evidence.count(), 3);
        assert_eq!(evidence.count(), evidence.articles().len());

        let indices: Vec<u64> = evidence.articles().iter().map(|a| a.index).collect();
        assert_eq!(indices, vec![0, 5, 2]);
        assert!(evidence.articles().iter().all(|a| !a.used));
    }

    #[test]
    fn test_gather_empty_path_list() {
        let paths: Vec<PathBuf> = Vec::new();
        let report = gather_evidence(&paths, "empty", GatherPolicy::FailFast).unwrap();
        assert_eq!(report.evidence.count(), 0);
        assert!(report.is_complete());
    }

    #[test]
    fn test_fail_fast_aborts_with_failing_path() {
        let dir = TempDir::new().unwrap();
        let paths = write_records(&dir, &["0<ok<fine", "1<truncated", "2<ok<fine"]);

        match gather_evidence(&paths, "t", GatherPolicy::FailFast).unwrap_err() {
            EvidenceError::Gather { path, source } => {
                assert_eq!(path, paths[1]);
                assert!(matches!(*source, EvidenceError::Format { .. }));
            }
            other => panic!("Expected Gather error, got {:?}", other),
        }
    }

    #[test]
    fn test_fail_fast_on_missing_file() {
        let dir = TempDir::new().unwrap();
        let mut paths = write_records(&dir, &["0<ok<fine"]);
        paths.push(dir.path().join("missing.txt"));

        match gather_evidence(&paths, "t", GatherPolicy::FailFast).unwrap_err() {
            EvidenceError::Gather { source, .. } => {
                assert!(matches!(*source, EvidenceError::Io { .. }));
            }
            other => panic!("Expected Gather error, got {:?}", other),
        }
    }

    #[test]
    fn test_best_effort_skips_and_records() {
        let dir = TempDir::new().unwrap();
        let mut paths = write_records(&dir, &["0<a<one", "x<b<two", "2<c<three"]);
        paths.push(dir.path().join("missing.txt"));

        let report = gather_evidence(&paths, "t", GatherPolicy::BestEffort).unwrap();

        assert!(!report.is_complete());
        assert_eq!(report.evidence.count(), 2);
        assert_eq!(report.evidence.get_article(0).unwrap(), Article::new(0, "a", "one"));
        assert_eq!(report.evidence.get_article(1).unwrap(), Article::new(2, "c", "three"));

        let failed: Vec<&PathBuf> = report.failures.iter().map(|f| &f.path).collect();
        assert_eq!(failed, vec![&paths[1], &paths[3]]);
        assert!(matches!(report.failures[0].error, EvidenceError::Format { .. }));
        assert!(matches!(report.failures[1].error, EvidenceError::Io { .. }));
    }

    #[test]
    fn test_gather_then_mark_and_render() {
        let dir = TempDir::new().unwrap();
        let paths = write_records(&dir, &["0<a<one", "1<b<two"]);

        let mut evidence = gather_evidence(&paths, "t", GatherPolicy::FailFast)
            .unwrap()
            .evidence;

        assert!(evidence.mark_used(1));
        assert!(evidence.mark_used(1));
        assert!(!evidence.mark_used(2));
        assert!(evidence.get_article(1).unwrap().used);

        let context = render_context(&evidence, 5);
        assert_eq!(context.lines().count(), 2);
    }
}
