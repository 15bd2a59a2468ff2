// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod is_fully_zeroized_tests {
    use parapet_util::is_fully_zeroized;

    #[test]
    fn test_all_zero() {
        assert!(is_fully_zeroized(&[0u8; 64]));
    }

    #[test]
    fn test_empty() {
        assert!(is_fully_zeroized(&[]));
    }

    #[test]
    fn test_one_nonzero_byte() {
        let mut data = [0u8; 64];
        data[63] = 1;
        assert!(!is_fully_zeroized(&data));
    }
}
