use super::*;

#[test]
fn every_category_has_a_table_entry() {
    for c in CATEGORIES {
        let lines = FallbackSource.fetch(c).unwrap();
        assert!(!lines.is_empty(), "{c}");
        assert_ne!(lines, FallbackSource.fetch("zebra").unwrap(), "{c}");
    }
    assert_eq!(FallbackSource.fetch("cat").unwrap().len(), 4);
    assert_eq!(FallbackSource.fetch(" CAT ").unwrap().len(), 4);
}

#[test]
fn unknown_category_gets_generic_circle() {
    assert_eq!(
        FallbackSource.fetch("spaceship").unwrap(),
        vec!["Draw a circle at (200, 150) with radius 30".to_owned()]
    );
}

#[test]
fn pick_category_skips_used_entries() {
    let used: Vec<String> = CATEGORIES[..9].iter().map(|s| s.to_uppercase()).collect();
    assert_eq!(pick_category(&used, 12345), Some("boat"));

    let all: Vec<String> = CATEGORIES.iter().map(|s| (*s).to_owned()).collect();
    assert_eq!(pick_category(&all, 0), None);

    assert_eq!(pick_category(&[], 0), Some("cat"));
    assert_eq!(pick_category(&[], 11), Some("dog"));
}

#[test]
fn lines_source_reads_non_blank_lines() {
    let dir = std::env::temp_dir().join(format!("charade_lines_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("instructions.txt");
    std::fs::write(&path, "1. - Draw a circle at (1, 2)\n\n   \nDraw a line from (0, 0) to (3, 3).\n")
        .unwrap();

    let lines = LinesSource::new(&path).fetch("ignored").unwrap();
    assert_eq!(
        lines,
        vec![
            "1. - Draw a circle at (1, 2)".to_owned(),
            "Draw a line from (0, 0) to (3, 3).".to_owned(),
        ]
    );
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn lines_source_missing_file_is_a_fetch_error() {
    let err = LinesSource::new("no/such/instructions.txt")
        .fetch("cat")
        .unwrap_err();
    assert!(err.to_string().contains("fetch error:"));
}
