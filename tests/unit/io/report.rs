//! Tests for the attribute frequency report

#[cfg(test)]
mod tests {
    use crate::write_png;
    use nftgen::io::report::AttributeReport;
    use nftgen::pieces::labels::RequiredLabels;
    use std::fs;
    use tempfile::TempDir;

    const NAMES: [&str; 5] = [
        "BACKGROUND.png",
        "a_HAT_1.png",
        "b_HAT_2.png",
        "c_EYES_1.png",
        "readme.txt",
    ];

    // Tests frequencies exclude the background label
    // Verified by including BACKGROUND in the denominator
    #[test]
    fn test_frequencies() {
        let report = AttributeReport::from_file_names(NAMES, &RequiredLabels::default());

        assert_eq!(report.total_occurrences, 4);
        let labels: Vec<_> = report.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["EYES", "HAT"]);

        let hat = report.entries.iter().find(|e| e.label == "HAT").unwrap();
        assert_eq!(hat.count, 2);
        assert!((hat.share - 2.0 / 3.0).abs() < 1e-9);
        assert!(report.entries.iter().all(|e| e.starred));
    }

    // Tests only required labels are starred when a requirement exists
    // Verified by starring every label unconditionally
    #[test]
    fn test_required_labels_starred() {
        let required = RequiredLabels::from_tokens(["hat"]);
        let report = AttributeReport::from_file_names(NAMES, &required);

        let starred: Vec<_> = report
            .entries
            .iter()
            .filter(|e| e.starred)
            .map(|e| e.label.as_str())
            .collect();
        assert_eq!(starred, vec!["HAT"]);
    }

    // Tests rendering of the table
    // Verified by dropping the star marker
    #[test]
    fn test_render_table() {
        let required = RequiredLabels::from_tokens(["eyes"]);
        let rendered = AttributeReport::from_file_names(NAMES, &required).render();

        assert!(rendered.contains("There are 2 different attributes"));
        assert!(rendered.contains("NAME"));
        assert!(rendered.contains("★ EYES"));
        assert!(rendered.contains("33.33%"));
        assert!(rendered.contains("66.67%"));
        assert!(!rendered.contains("★ HAT"));
        assert!(!rendered.contains("BACKGROUND"));
    }

    // Tests fewer than two label occurrences skips the table
    // Verified by printing an empty table
    #[test]
    fn test_degenerate_report() {
        let report = AttributeReport::from_file_names(
            ["BACKGROUND.png", "plain.png"],
            &RequiredLabels::default(),
        );

        assert!(report.is_degenerate());
        assert!(report.entries.is_empty());
        assert_eq!(report.render(), "There are no attributes!");
    }

    // Tests the report reads every filename in a folder
    // Verified by restricting the scan to piece images
    #[test]
    fn test_from_folder() {
        let temp_dir = TempDir::new().unwrap();
        write_png(&temp_dir.path().join("BACKGROUND.png"), 1, 1, [0, 0, 0, 255]);
        write_png(&temp_dir.path().join("a_HAT_1.png"), 1, 1, [0, 0, 0, 255]);
        fs::write(temp_dir.path().join("notes_EYES_.txt"), "text").unwrap();

        let report = AttributeReport::from_folder(temp_dir.path(), &RequiredLabels::default())
            .unwrap();

        assert_eq!(report.total_occurrences, 3);
        assert_eq!(report.entries.len(), 2);
        report.print();
    }
}
