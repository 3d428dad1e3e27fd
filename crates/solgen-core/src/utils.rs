/// Uppercase the first character and leave the rest untouched.
///
/// Unlike PascalCase conversion this keeps inner capitals, so generated
/// names such as `asEuint8` become `AsEuint8`.
///
/// # Examples
/// ```
/// use solgen_core::utils::capitalize;
/// assert_eq!(capitalize("add"), "Add");
/// assert_eq!(capitalize("asEuint8"), "AsEuint8");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercase the whole identifier, used for constant names like `EUINT8_TFHE`.
///
/// # Examples
/// ```
/// use solgen_core::utils::to_constant_case;
/// assert_eq!(to_constant_case("euint8"), "EUINT8");
/// ```
pub fn to_constant_case(s: &str) -> String {
    s.to_ascii_uppercase()
}
