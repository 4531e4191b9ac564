//! Search session integration tests.
//!
//! These tests run the full loop against an on-disk SQLite catalog:
//! - Title matching (plain and dotted) and the movie namespace restriction
//! - Normalization and filtering of real rows
//! - Ranking, report text and magnet link output
//! - Retry behaviour on bad selections

use tempfile::TempDir;

use rarsift_core::{
    catalog::{ReleaseCatalog, SqliteCatalog},
    filter::{sift, FilterSettings},
    presenter::Presenter,
    session::{Session, SessionOutcome, SessionState},
    testing::{fixtures, MockClipboard, RecordingSink, ScriptedConsole},
};

use rarsift_core::testing::fixtures::GIB;

/// Test helper owning a catalog file in a temp dir.
struct TestHarness {
    catalog: SqliteCatalog,
    _temp_dir: TempDir,
}

impl TestHarness {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("catalog.sqlite");

        {
            let writer = SqliteCatalog::create(&db_path).expect("Failed to create catalog");
            fixtures::seed_catalog(
                &writer,
                &[
                    fixtures::raw_record(1, "The.Matrix.1999.1080p.BluRay", "movies_x264", Some(10 * GIB)),
                    fixtures::raw_record(2, "The.Matrix.1999.2160p.UHD", "movies_x265_4k", Some(64 * GIB)),
                    fixtures::raw_record(3, "The Matrix 1999 720p", "movies_x264_720p", Some(3 * GIB)),
                    fixtures::raw_record(4, "The.Matrix.1999.DVDRip", "movies_xvid", Some(GIB)),
                    fixtures::raw_record(5, "The.Matrix.1999.480p", "movies_x264", Some(GIB / 2)),
                    fixtures::raw_record(6, "The.Matrix.1999.REMUX", "movies_x264", None),
                    fixtures::raw_record(7, "The.Matrix.Resurrections.2021", "movies_x265_4k", Some(64 * GIB)),
                    fixtures::raw_record(8, "The Matrix Series", "tv_x264", Some(20 * GIB)),
                    fixtures::raw_record(9, "Unrelated.Film.2001", "movies_x264", Some(5 * GIB)),
                ],
            )
            .expect("Failed to seed catalog");
        }

        let catalog = SqliteCatalog::open(&db_path).expect("Failed to open catalog");
        Self {
            catalog,
            _temp_dir: temp_dir,
        }
    }
}

#[test]
fn test_search_matches_plain_and_dotted_titles_in_namespace() {
    let harness = TestHarness::new();

    let ids: Vec<i64> = harness
        .catalog
        .search("the matrix")
        .unwrap()
        .iter()
        .map(|r| r.id)
        .collect();

    // 8 is a tv category, 9 doesn't match
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_sift_with_default_restrictive_answers() {
    let harness = TestHarness::new();
    let rows = harness.catalog.search("matrix").unwrap();

    let filters = FilterSettings::restrictive();
    let results = sift(&rows, filters);

    assert_eq!(results.ids(), vec![1, 2, 7]);
}

#[test]
fn test_ranked_presentation_of_real_rows() {
    let harness = TestHarness::new();
    let rows = harness.catalog.search("matrix").unwrap();
    let results = sift(&rows, FilterSettings::permissive());

    let presentation = Presenter::default().present(&results);
    let ids: Vec<i64> = presentation.rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 7, 1, 3, 4, 5]);

    let first_line = presentation.report.lines().next().unwrap();
    assert_eq!(
        first_line,
        "2 | The.Matrix.1999.2160p.UHD | movies_x265_4k | 64.00 GiB"
    );
}

#[test]
fn test_ultra_hd_session_end_to_end() {
    let harness = TestHarness::new();
    let console = ScriptedConsole::new(&["  matrix  ", "y", "abc", "9999", "1", "7"]);
    let sink = RecordingSink::new();
    let clipboard = MockClipboard::new();

    let mut session = Session::new(&harness.catalog, &console, &sink, &clipboard);
    let outcome = session.run().unwrap();

    match outcome {
        SessionOutcome::Selected {
            record,
            link,
            copied,
        } => {
            assert_eq!(record.id, 7);
            assert_eq!(
                link,
                "magnet:?xt=urn:btih:hash7&dn=The.Matrix.Resurrections.2021"
            );
            assert!(copied);
        }
        other => panic!("unexpected outcome {:?}", other),
    }

    // id 1 exists in the catalog but was filtered out, so it is "not found"
    let messages = console.messages();
    assert!(messages.contains(&"No result with ID 1, pick one from the table".to_string()));
    assert_eq!(sink.tables().len(), 1);
    assert_eq!(
        sink.tables()[0].iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![2, 7]
    );
    assert_eq!(console.remaining_inputs(), 0);
}

#[test]
fn test_no_results_session() {
    let harness = TestHarness::new();
    let console = ScriptedConsole::new(&["nothing like this"]);
    let sink = RecordingSink::new();
    let clipboard = MockClipboard::new();

    let mut session = Session::new(&harness.catalog, &console, &sink, &clipboard)
        .with_minimal_filters(true);
    let outcome = session.run().unwrap();

    assert_eq!(
        outcome,
        SessionOutcome::NoResults {
            term: "nothing like this".to_string()
        }
    );
    assert!(matches!(session.state(), SessionState::Done(_)));
    assert!(sink.reports().is_empty());
}

#[test]
fn test_report_uses_configured_margin() {
    let harness = TestHarness::new();
    let console = ScriptedConsole::new(&["unrelated", "9"]);
    let sink = RecordingSink::new();
    let clipboard = MockClipboard::new();

    Session::new(&harness.catalog, &console, &sink, &clipboard)
        .with_minimal_filters(true)
        .with_presenter(Presenter::new(0))
        .run()
        .unwrap();

    let report = &sink.reports()[0];
    let mut lines = report.lines();
    let entry = lines.next().unwrap();
    let separator = lines.next().unwrap();
    assert_eq!(entry, "9 | Unrelated.Film.2001 | movies_x264 | 5.00 GiB");
    assert_eq!(separator.len(), entry.len());
}

#[test]
fn test_fixture_normalized_record_presents_like_real_one() {
    let results = vec![
        fixtures::normalized_record(1, "A", "movies", 10.0),
        fixtures::normalized_record(2, "B", "movies", 64.34),
        fixtures::normalized_record(3, "C", "movies", 64.34),
        fixtures::normalized_record(4, "D", "movies", 2.1),
    ]
    .into_iter()
    .collect();

    let presentation = Presenter::default().present(&results);
    let ids: Vec<i64> = presentation.rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 3, 1, 4]);
}
