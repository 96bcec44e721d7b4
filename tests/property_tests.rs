//! Property-based tests for log_pipeline using proptest

use log_pipeline::prelude::*;
use log_pipeline::basename;
use proptest::prelude::*;
use regex::Regex;

fn any_severity() -> impl Strategy<Value = Severity> {
    (0u8..12).prop_map(Severity::from_u8)
}

// ============================================================================
// Severity
// ============================================================================

proptest! {
    #[test]
    fn test_severity_str_roundtrip(level in any_severity()) {
        let parsed: Severity = level.as_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    #[test]
    fn test_severity_parse_is_case_insensitive(level in any_severity()) {
        let parsed: Severity = level.as_str().to_lowercase().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    #[test]
    fn test_severity_ordering_matches_discriminant(a in any_severity(), b in any_severity()) {
        prop_assert_eq!(a <= b, a.as_u8() <= b.as_u8());
        prop_assert_eq!(a.admits(b), a.as_u8() >= b.as_u8());
    }

    #[test]
    fn test_display_matches_as_str(level in any_severity()) {
        prop_assert_eq!(format!("{}", level), level.as_str());
    }
}

// ============================================================================
// LogRecord
// ============================================================================

proptest! {
    #[test]
    fn test_file_never_contains_separator(path in ".*") {
        let record = LogRecord::new(Severity::Info, &path, "f", "m");
        prop_assert!(!record.file().contains('/'));
        prop_assert!(path.ends_with(record.file()));
    }

    #[test]
    fn test_basename_of_joined_path(dirs in prop::collection::vec("[a-z]{1,8}", 0..5), name in "[a-z_]{1,12}\\.rs") {
        let mut path = dirs.join("/");
        if !path.is_empty() {
            path.push('/');
        }
        path.push_str(&name);
        prop_assert_eq!(basename(&path), name.as_str());
    }

    #[test]
    fn test_rendering_is_deterministic(
        level in any_severity(),
        file in "[a-z/]{0,20}",
        function in "[a-z_]{1,10}",
        message in ".*",
    ) {
        let a = LogRecord::new(level, &file, function.clone(), message.clone());
        let b = LogRecord::new(level, &file, function, message);
        prop_assert_eq!(a.render_line(), b.render_line());
    }

    #[test]
    fn test_rendered_line_regex_roundtrip(
        level in any_severity(),
        dirs in "([a-z]{1,6}/){0,3}",
        name in "[a-z]{1,8}\\.cpp",
        function in "[A-Za-z_][A-Za-z0-9_]{0,15}",
        message in "[^\n\r]*",
    ) {
        let pattern = Regex::new(r"^\[([A-Z0-9]+)\] (\S+) (\S+) - (.*)$").unwrap();
        let record = LogRecord::new(level, format!("{}{}", dirs, name), function.clone(), message.clone());
        let line = record.to_string();

        let caps = pattern.captures(&line).expect("rendered line should match");
        prop_assert_eq!(&caps[1], level.as_str());
        prop_assert_eq!(&caps[2], name.as_str());
        prop_assert_eq!(&caps[3], function.as_str());
        prop_assert_eq!(&caps[4], message.as_str());
    }

    #[test]
    fn test_render_line_has_single_terminator(message in "[^\n]*") {
        let line = LogRecord::new(Severity::Debug, "a.rs", "f", message).render_line();
        prop_assert!(line.ends_with('\n'));
        prop_assert_eq!(line.matches('\n').count(), 1);
    }
}

// ============================================================================
// Filtering through a manager
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_emitted_iff_threshold_admits(
        threshold in any_severity(),
        levels in prop::collection::vec(any_severity(), 0..40),
    ) {
        let output = MemoryAppender::new();
        let manager = LogManager::builder()
            .level(threshold)
            .console(output.clone())
            .build();

        manager.start();
        for (i, level) in levels.iter().enumerate() {
            manager.log(*level, "p.rs", "f", i.to_string());
        }
        manager.stop();

        let expected: Vec<String> = levels
            .iter()
            .enumerate()
            .filter(|(_, level)| threshold >= **level)
            .map(|(i, level)| format!("[{}] p.rs f - {}", level, i))
            .collect();
        prop_assert_eq!(output.lines(), expected);
    }
}
