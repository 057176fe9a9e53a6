use crate::tables::schema::{KnownValues, TablesDef};

/// Look up the expected values keyed by the anchor field (certificate
/// number). Returns `None` when the anchor was not extracted or is not a
/// known certificate.
pub fn known_for<'t>(tables: &'t TablesDef, certificate_no: &str) -> Option<&'t KnownValues> {
    if certificate_no.is_empty() {
        return None;
    }
    tables.known_values.get(certificate_no)
}

/// Check that an expected value is actually present in the text, tolerating
/// the common OCR digit/letter confusions (0/O, 1/I, 5/S, 8/B). The
/// override only applies when the document itself confirms the value.
pub fn confirmed(scan: &str, expected: &str) -> bool {
    if expected.is_empty() {
        return false;
    }
    if scan.contains(expected) {
        return true;
    }
    if !expected.is_ascii() || !scan.is_ascii() {
        return false;
    }

    let scan = scan.as_bytes();
    let expected = expected.as_bytes();
    if scan.len() < expected.len() {
        return false;
    }
    'outer: for start in 0..=scan.len() - expected.len() {
        for (i, &e) in expected.iter().enumerate() {
            if !confusable_eq(scan[start + i], e) {
                continue 'outer;
            }
        }
        return true;
    }
    false
}

fn confusable_eq(a: u8, b: u8) -> bool {
    if a == b {
        return true;
    }
    matches!(
        (a, b),
        (b'0', b'O')
            | (b'O', b'0')
            | (b'1', b'I')
            | (b'I', b'1')
            | (b'5', b'S')
            | (b'S', b'5')
            | (b'8', b'B')
            | (b'B', b'8')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::builtin::load_default;

    #[test]
    fn test_known_for_requires_anchor() {
        let tables = load_default().unwrap();
        assert!(known_for(&tables, "").is_none());
        assert!(known_for(&tables, "ZZZ-ZZ-99999").is_none());
        assert!(known_for(&tables, "PHO-CC-56386").is_some());
    }

    #[test]
    fn test_confirmed_exact() {
        assert!(confirmed("SERIAL NO: AQ-7782 END", "AQ-7782"));
        assert!(!confirmed("SERIAL NO: XX-0000 END", "AQ-7782"));
    }

    #[test]
    fn test_confirmed_fuzzed_digits() {
        // OCR read 7782 as 77B2
        assert!(confirmed("SERIAL NO: AQ-77B2 END", "AQ-7782"));
        // and S for 5
        assert!(confirmed("MODEL NO: 233.S0", "233.50"));
    }

    #[test]
    fn test_fuzz_does_not_overreach() {
        assert!(!confirmed("SERIAL NO: AQ-7783 END", "AQ-7782"));
    }
}
