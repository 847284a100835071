//! Layout validation for system file fields

use crate::FormatError;

/// Align an offset to a specific boundary
///
/// `boundary` must be a power of two.
pub const fn align_to_boundary(offset: usize, boundary: usize) -> usize {
    (offset + boundary - 1) & !(boundary - 1)
}

/// Calculate padding needed to reach alignment boundary
pub const fn calculate_padding(offset: usize, boundary: usize) -> usize {
    align_to_boundary(offset, boundary) - offset
}

/// Validate magic bytes match expected pattern
pub const fn validate_magic_bytes(actual: &[u8; 4], expected: &[u8; 4]) -> Result<(), FormatError> {
    if actual[0] != expected[0]
        || actual[1] != expected[1]
        || actual[2] != expected[2]
        || actual[3] != expected[3]
    {
        return Err(FormatError::BadMagic { found: *actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_to_boundary() {
        assert_eq!(align_to_boundary(0, 4), 0);
        assert_eq!(align_to_boundary(1, 4), 4);
        assert_eq!(align_to_boundary(3, 4), 4);
        assert_eq!(align_to_boundary(4, 4), 4);
        assert_eq!(align_to_boundary(5, 4), 8);
        assert_eq!(align_to_boundary(9, 8), 16);
    }

    #[test]
    fn test_calculate_padding() {
        assert_eq!(calculate_padding(0, 4), 0);
        assert_eq!(calculate_padding(1, 4), 3);
        assert_eq!(calculate_padding(6, 4), 2);
        assert_eq!(calculate_padding(8, 4), 0);
    }

    #[test]
    fn test_validate_magic_bytes() {
        assert_eq!(validate_magic_bytes(b"$FL2", b"$FL2"), Ok(()));
        assert_eq!(
            validate_magic_bytes(b"PK\x03\x04", b"$FL2"),
            Err(FormatError::BadMagic { found: *b"PK\x03\x04" })
        );
    }
}
