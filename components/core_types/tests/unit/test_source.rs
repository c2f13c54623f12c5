//! Unit tests for SourcePosition

use core_types::SourcePosition;

#[cfg(test)]
mod source_position_tests {
    use super::*;

    #[test]
    fn test_source_position_zero_values() {
        let pos = SourcePosition {
            line: 0,
            column: 0,
            offset: 0,
        };

        assert_eq!(pos.line, 0);
        assert_eq!(pos.column, 0);
        assert_eq!(pos.offset, 0);
    }

    #[test]
    fn test_source_position_large_values() {
        let pos = SourcePosition {
            line: u32::MAX,
            column: u32::MAX,
            offset: usize::MAX,
        };

        assert_eq!(pos.line, u32::MAX);
        assert_eq!(pos.column, u32::MAX);
        assert_eq!(pos.offset, usize::MAX);
    }

    #[test]
    fn test_source_position_copy() {
        let pos1 = SourcePosition {
            line: 42,
            column: 7,
            offset: 1000,
        };
        let pos2 = pos1;

        assert_eq!(pos1, pos2);
    }

    #[test]
    fn test_source_position_equality() {
        let pos1 = SourcePosition {
            line: 10,
            column: 20,
            offset: 100,
        };
        let pos2 = SourcePosition {
            line: 10,
            column: 20,
            offset: 100,
        };
        let pos3 = SourcePosition {
            line: 11,
            column: 20,
            offset: 100,
        };

        assert_eq!(pos1, pos2);
        assert_ne!(pos1, pos3);
    }

    #[test]
    fn test_source_position_serializes_fields() {
        let pos = SourcePosition {
            line: 2,
            column: 3,
            offset: 9,
        };
        let json = serde_json::to_string(&pos).unwrap();

        assert_eq!(json, r#"{"line":2,"column":3,"offset":9}"#);
    }
}
