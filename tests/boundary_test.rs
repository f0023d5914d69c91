use debchangelog::boundary::BoundaryWarning;

// ============================================================================
// BoundaryWarning Display Tests
// ============================================================================

#[test]
fn test_boundary_warning_missing_tag_display() {
    let warning = BoundaryWarning::MissingTag {
        tag: "v1.0.0".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("v1.0.0"),
        "Message should contain tag 'v1.0.0', got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("not found"),
        "Message should say the tag was not found, got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_no_changes_display() {
    let warning = BoundaryWarning::NoCategorizedChanges {
        version: "2.1.0".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("2.1.0"),
        "Message should contain version '2.1.0', got: {}",
        display_msg
    );
    assert!(display_msg.contains("'change:'") && display_msg.contains("'fix:'"));
}

#[test]
fn test_boundary_warning_malformed_display() {
    let warning = BoundaryWarning::MalformedCommitSkipped {
        line: "abc1 fix:".to_string(),
    };

    assert_eq!(
        warning.to_string(),
        "Skipped malformed commit line 'abc1 fix:'"
    );
}

#[test]
fn test_boundary_warning_non_semver_display() {
    let warning = BoundaryWarning::NonSemverVersion {
        version: "1.2".to_string(),
        reason: "unexpected end of input".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(display_msg.contains("'1.2'"));
    assert!(display_msg.contains("unexpected end of input"));
}

#[test]
fn test_boundary_warning_equality() {
    let a = BoundaryWarning::MissingTag {
        tag: "v1".to_string(),
    };
    let b = a.clone();
    assert_eq!(a, b);
    assert_ne!(
        a,
        BoundaryWarning::MissingTag {
            tag: "v2".to_string()
        }
    );
}

#[test]
fn test_every_warning_names_its_subject() {
    let cases = vec![
        (
            BoundaryWarning::MissingTag {
                tag: "v0.1.0".to_string(),
            },
            "v0.1.0",
        ),
        (
            BoundaryWarning::NoCategorizedChanges {
                version: "0.1.0".to_string(),
            },
            "0.1.0",
        ),
        (
            BoundaryWarning::MalformedCommitSkipped {
                line: "abc9 wip".to_string(),
            },
            "abc9 wip",
        ),
        (
            BoundaryWarning::NonSemverVersion {
                version: "0.1".to_string(),
                reason: "unexpected end of input".to_string(),
            },
            "0.1",
        ),
    ];

    for (warning, subject) in cases {
        let display_msg = warning.to_string();
        assert!(
            display_msg.contains(subject),
            "Message should contain '{}', got: {}",
            subject,
            display_msg
        );
    }
}
