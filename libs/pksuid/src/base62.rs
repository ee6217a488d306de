//! Base62 alphabet membership.

/// Lookup table over all byte values: allowed symbols map to themselves,
/// everything else to `0`. `0` is never a base62 symbol.
static BASE62_TABLE: [u8; 256] = build_table();

const fn build_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut c = 0usize;
    while c < 256 {
        let b = c as u8;
        if b.is_ascii_alphanumeric() {
            table[c] = b;
        }
        c += 1;
    }
    table
}

/// Returns true if `b` is non-empty and every byte is in `0-9A-Za-z`.
pub fn is_base62(b: &[u8]) -> bool {
    !b.is_empty() && b.iter().all(|&c| BASE62_TABLE[c as usize] != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_base62() {
        let cases: &[(&[u8], bool)] = &[
            (b"", false),
            (&[0], false),
            (b"hello!", false),
            (b"hello ", false),
            (b"foo:bar", false),
            (b"hello", true),
            (b"20MgJhy7bR6mHUfKROlb6RfYrBk", true),
        ];

        for (i, (input, expected)) in cases.iter().enumerate() {
            assert_eq!(
                is_base62(input),
                *expected,
                "case #{i}: is_base62({:?})",
                String::from_utf8_lossy(input)
            );
        }
    }

    #[test]
    fn test_table_covers_exactly_62_symbols() {
        let count = BASE62_TABLE.iter().filter(|&&v| v != 0).count();
        assert_eq!(count, 62);
    }

    #[test]
    fn test_rejects_high_bytes() {
        assert!(!is_base62(&[b'a', 0xff]));
        assert!(!is_base62("é".as_bytes()));
    }
}
