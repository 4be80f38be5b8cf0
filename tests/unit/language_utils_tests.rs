/*!
 * Tests for language utilities
 */

use ru2kz::language_utils::{get_language_name, language_codes_match, validate_language_code};

#[test]
fn test_validate_language_code_withValidCodes_shouldNormalize() {
    assert_eq!(validate_language_code("ru").unwrap(), "ru");
    assert_eq!(validate_language_code(" KK ").unwrap(), "kk");
}

#[test]
fn test_validate_language_code_withInvalidCodes_shouldFail() {
    assert!(validate_language_code("").is_err());
    assert!(validate_language_code("xx").is_err());
    assert!(validate_language_code("rus").is_err());
    assert!(validate_language_code("russian").is_err());
}

#[test]
fn test_language_codes_match() {
    assert!(language_codes_match("kk", "KK"));
    assert!(!language_codes_match("ru", "kk"));
    assert!(!language_codes_match("xx", "xx"));
}

#[test]
fn test_get_language_name_shouldReturnEnglishName() {
    assert_eq!(get_language_name("ru").unwrap(), "Russian");
    assert_eq!(get_language_name("kk").unwrap(), "Kazakh");
    assert!(get_language_name("zz").is_err());
}
