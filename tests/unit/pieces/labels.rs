//! Tests for filename label extraction and requirement normalization

#[cfg(test)]
mod tests {
    use nftgen::pieces::labels::{BACKGROUND_LABEL, RequiredLabels, extract_labels, is_background};

    // Tests a label bounded by underscores in the middle of a name
    // Verified by including the leading segment in the output
    #[test]
    fn test_single_label() {
        assert_eq!(extract_labels("A_HAT_1.png"), vec!["HAT"]);
        assert_eq!(extract_labels("item_BACKGROUND_bg.png"), vec!["BACKGROUND"]);
    }

    // Tests hyphens are part of a label
    // Verified by treating hyphen as a run terminator
    #[test]
    fn test_hyphenated_label() {
        assert_eq!(extract_labels("piece_HAT-RED_1.png"), vec!["HAT-RED"]);
    }

    // Tests a plain filename has no labels
    // Verified by returning the stem for lowercase names
    #[test]
    fn test_plain_name_has_no_labels() {
        assert!(extract_labels("plain.png").is_empty());
        assert!(extract_labels("no_labels_here.png").is_empty());
    }

    // Tests adjacent labels share their separating underscore
    // Verified by skipping every other segment
    #[test]
    fn test_adjacent_labels_share_delimiter() {
        assert_eq!(
            extract_labels("x_HAT_EYES_MOUTH_y.png"),
            vec!["HAT", "EYES", "MOUTH"]
        );
    }

    // Tests digits, lowercase and punctuation disqualify a segment
    // Verified by accepting alphanumeric segments
    #[test]
    fn test_mixed_segments_rejected() {
        assert!(extract_labels("a_HAT1_b.png").is_empty());
        assert!(extract_labels("a_Hat_b.png").is_empty());
        assert!(extract_labels("a_HA.T_b.png").is_empty());
        assert_eq!(extract_labels("a_HAT1_EYES_b.png"), vec!["EYES"]);
    }

    // Tests labels need an underscore on both sides
    // Verified by accepting the first segment
    #[test]
    fn test_unbounded_segments_ignored() {
        assert!(extract_labels("HAT_1.png").is_empty());
        assert!(extract_labels("1_HAT.png").is_empty());
        assert_eq!(extract_labels("_HAT_"), vec!["HAT"]);
    }

    // Tests empty segments between doubled underscores are not labels
    // Verified by emitting empty strings
    #[test]
    fn test_empty_segment_ignored() {
        assert!(extract_labels("a__b.png").is_empty());
        assert_eq!(extract_labels("a__HAT_b.png"), vec!["HAT"]);
    }

    // Tests a bare BACKGROUND stem marks the background layer
    // Verified by requiring underscores for every label
    #[test]
    fn test_bare_background_stem() {
        assert_eq!(extract_labels("BACKGROUND.png"), vec![BACKGROUND_LABEL]);
        assert_eq!(extract_labels("BACKGROUND"), vec![BACKGROUND_LABEL]);
        assert!(extract_labels("Background.png").is_empty());
    }

    // Tests other bare uppercase stems carry no labels
    // Verified by accepting any all-uppercase stem as a label
    #[test]
    fn test_bare_uppercase_stem_unlabeled() {
        assert!(extract_labels("HAT.png").is_empty());
        assert!(extract_labels("EYES-RED.png").is_empty());
        assert!(extract_labels("HAT").is_empty());
        assert!(extract_labels("BACKGROUND-DAY.png").is_empty());
    }

    // Tests duplicate labels inside one name are kept
    // Verified by deduplicating the output
    #[test]
    fn test_duplicate_labels_preserved() {
        assert_eq!(extract_labels("x_HAT_HAT_y.png"), vec!["HAT", "HAT"]);
    }

    // Tests extraction is pure and repeatable
    // Verified by caching state between calls
    #[test]
    fn test_extraction_is_deterministic() {
        for name in ["A_HAT_1.png", "plain.png", "x_A_B-C_y.png", "BACKGROUND.png"] {
            assert_eq!(extract_labels(name), extract_labels(name));
        }
    }

    // Tests background detection
    // Verified by matching BACKGROUND as a substring
    #[test]
    fn test_is_background() {
        assert!(is_background("BACKGROUND.png"));
        assert!(is_background("layer_BACKGROUND_01.png"));
        assert!(!is_background("layer_BACKGROUNDS_01.png"));
        assert!(!is_background("background.png"));
    }

    // Tests requirement tokens are upper-cased and deduplicated
    // Verified by comparing case-sensitively
    #[test]
    fn test_required_labels_normalized() {
        let required = RequiredLabels::from_tokens(["hat", "HAT", " eyes ", ""]);

        assert_eq!(required.len(), 2);
        assert!(required.contains("HAT"));
        assert!(required.contains("EYES"));
        assert!(!required.contains("hat"));
        assert_eq!(required.iter().collect::<Vec<_>>(), vec!["EYES", "HAT"]);
    }

    // Tests empty requirement
    // Verified by inserting a placeholder label
    #[test]
    fn test_required_labels_empty() {
        let required = RequiredLabels::from_tokens(Vec::<String>::new());
        assert!(required.is_empty());
        assert_eq!(required, RequiredLabels::default());
    }
}
