//! End-to-end integration tests for the chunker pipeline.
//!
//! Tests the complete pipeline from extracted text to index records and
//! output files using an excerpt of the penal code.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;

use codepenal_chunker::index::{dedup_by_article_number, to_index_records};
use codepenal_chunker::input::read_extracted_lines;
use codepenal_chunker::output::{generate_json, ChunkDocument};
use codepenal_chunker::segmentation::{SegmentEngine, SegmentStats, Segmentation};
use codepenal_chunker::types::{ArticleChunk, LegalReference, ReferenceKind};
use codepenal_chunker::ChunkerConfig;

/// Path of a fixture file.
fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("code_penal")
        .join(name)
}

/// Run the chunker pipeline on the excerpt.
fn run_pipeline() -> Segmentation {
    let lines = read_extracted_lines(&fixture_path("extrait.txt"))
        .unwrap_or_else(|e| panic!("Failed to load fixture: {e}"));
    SegmentEngine::default().run(&lines)
}

fn find<'a>(chunks: &'a [ArticleChunk], number: &str) -> &'a ArticleChunk {
    chunks
        .iter()
        .find(|c| c.article_number == number)
        .unwrap_or_else(|| panic!("article {number} missing"))
}

#[test]
fn test_article_order() {
    let outcome = run_pipeline();
    let numbers: Vec<_> = outcome
        .chunks
        .iter()
        .map(|c| c.article_number.as_str())
        .collect();

    // 112-2 only carries navigation labels and is dropped.
    assert_eq!(
        numbers,
        vec!["111-1", "111-2", "111-3", "112-1", "121-1", "211-1", "131-7", "111-1"]
    );
}

#[test]
fn test_stats() {
    let outcome = run_pipeline();
    assert_eq!(
        outcome.stats,
        SegmentStats {
            lines: 38,
            markers: 7,
            boundaries: 9,
            preamble_lines: 4,
            dropped: 1,
        }
    );
}

#[test]
fn test_preamble_not_in_any_chunk() {
    let outcome = run_pipeline();
    for chunk in &outcome.chunks {
        assert!(!chunk.body.contains("Copyright"));
        assert!(!chunk.body.contains("Partie législative"));
    }
}

#[test]
fn test_multi_line_body_and_noise() {
    let outcome = run_pipeline();

    let article = find(&outcome.chunks, "111-2");
    assert_eq!(
        article.body,
        "La loi détermine les crimes et délits et fixe les peines applicables à leurs auteurs.\n\
         Le règlement détermine les contraventions et fixe, dans les limites et selon les distinctions établies\n\
         par la loi, les peines applicables aux contrevenants."
    );

    let article = find(&outcome.chunks, "111-3");
    assert!(article.body.ends_with("\nVoir Legif. pour plus d'infos"));
    assert!(!article.body.contains("Juricaf"));
}

#[test]
fn test_hierarchy_snapshots() {
    let outcome = run_pipeline();

    let article = find(&outcome.chunks, "112-1");
    assert_eq!(article.hierarchy.book.as_ref().unwrap().number, "Ier");
    assert_eq!(article.hierarchy.title.as_ref().unwrap().label, "De la loi pénale");
    assert_eq!(
        article.hierarchy.chapter.as_ref().unwrap().label,
        "De l'application de la loi pénale dans le temps"
    );
    assert!(article.hierarchy.section.is_none());

    // A new book does not reset the title and chapter in force.
    let article = find(&outcome.chunks, "211-1");
    assert_eq!(
        article.hierarchy.book.as_ref().unwrap().label,
        "Des crimes et délits contre les personnes"
    );
    assert_eq!(article.hierarchy.title.as_ref().unwrap().number, "II");
    assert_eq!(
        article.hierarchy.chapter.as_ref().unwrap().label,
        "Dispositions générales"
    );
}

#[test]
fn test_legal_references() {
    let outcome = run_pipeline();

    assert_eq!(
        find(&outcome.chunks, "112-1").legal_references,
        vec![LegalReference::new(
            ReferenceKind::Ordinance,
            "2000-916",
            "19 septembre 2000"
        )]
    );

    // The 2021 amendment sits in the body, not on the heading line.
    let article = find(&outcome.chunks, "131-7");
    assert_eq!(
        article.legal_references,
        vec![LegalReference::new(ReferenceKind::Law, "2019-222", "23 mars 2019")]
    );
    assert!(article.body.contains("LOI n°2021-1729"));
}

#[test]
fn test_deterministic() {
    assert_eq!(run_pipeline(), run_pipeline());
}

#[test]
fn test_index_records_after_dedup() {
    let config = ChunkerConfig::default();
    let chunks = dedup_by_article_number(run_pipeline().chunks);
    assert_eq!(chunks.len(), 7);

    let records = to_index_records(&chunks, &config);
    let first = &records[0];
    assert_eq!(first.metadata["article_numero"], "111-1");
    assert_eq!(first.metadata["livre_numero"], "Ier");
    assert_eq!(first.metadata["chapitre_titre"], "Des principes généraux");
    // The first occurrence keeps its own hierarchy.
    assert!(!first.metadata.contains_key("section_numero"));

    let law = records
        .iter()
        .find(|r| r.metadata["article_numero"] == "131-7")
        .unwrap();
    assert_eq!(law.metadata["loi_numero"], "2019-222");
    assert_eq!(law.metadata["loi_date"], "23 mars 2019");
    assert_eq!(law.metadata["livre_numero"], "II");
}

#[test]
fn test_json_document() {
    let outcome = run_pipeline();
    let document = ChunkDocument::new("Code pénal français", &outcome.chunks);
    let json = generate_json(&document).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["article_count"], 8);
    assert_eq!(value["articles"][3]["article_number"], "112-1");
    assert_eq!(
        value["articles"][3]["legal_references"][0]["kind"],
        "ordinance"
    );
}
