// ============================================================================
// Text Helpers
// Address/id normalization and null-hash detection
// ============================================================================

/// Hash some contracts emit in place of a real value.
pub const NULL_ETH_VALUE: &str =
    "0x0000000000000000000000000000000000000000000000000000000000000001";

/// Lower-case every element. Order, length and duplicates are preserved.
///
/// ```
/// use token_units::utils::normalize_case;
///
/// let ids = vec!["0xABC".to_string(), "dEf".to_string()];
/// assert_eq!(normalize_case(ids), vec!["0xabc", "def"]);
/// ```
pub fn normalize_case(mut items: Vec<String>) -> Vec<String> {
    normalize_case_in_place(&mut items);
    items
}

/// Lower-case every element of a slice in place.
pub fn normalize_case_in_place(items: &mut [String]) {
    for item in items.iter_mut() {
        *item = item.to_lowercase();
    }
}

/// Whether `value` is the null marker hash.
pub fn is_null_eth_value(value: &str) -> bool {
    value == NULL_ETH_VALUE
}
