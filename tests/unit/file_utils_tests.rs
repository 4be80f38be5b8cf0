/*!
 * Tests for file utilities
 */

use anyhow::Result;
use std::path::PathBuf;

use ru2kz::file_utils::FileManager;
use crate::common;

#[test]
fn test_generate_output_path_withExtension_shouldInsertLanguage() {
    let output = FileManager::generate_output_path(PathBuf::from("/var/www/about.html"), "kk");
    assert_eq!(output, PathBuf::from("/var/www/about.kk.html"));
}

#[test]
fn test_generate_output_path_withDottedStem_shouldKeepStem() {
    let output = FileManager::generate_output_path("docs/guide.v2.md", "kk");
    assert_eq!(output, PathBuf::from("docs/guide.v2.kk.md"));
}

#[test]
fn test_write_and_read_shouldRoundTripUtf8() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("nested").join("page.kk.html");
    let content = "  Сәлем, дүние!  \r\n<p>Қазақстан</p>\n";

    FileManager::write_to_file(&path, content)?;

    assert!(FileManager::file_exists(&path));
    assert_eq!(FileManager::read_to_string(&path)?, content);
    Ok(())
}

#[test]
fn test_read_to_string_withMissingFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let missing = temp_dir.path().join("missing.html");

    assert!(!FileManager::file_exists(&missing));
    let error = FileManager::read_to_string(&missing).unwrap_err();
    assert!(error.to_string().contains("Failed to read file"));
    Ok(())
}

#[test]
fn test_ensure_dir_shouldCreateParents() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().join("a").join("b");

    FileManager::ensure_dir(&dir)?;
    assert!(dir.is_dir());

    // Existing directory is fine
    FileManager::ensure_dir(&dir)?;
    Ok(())
}
