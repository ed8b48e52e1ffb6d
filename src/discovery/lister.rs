use std::path::{Path, PathBuf};

use crate::core::error::Result;

/// List every non-directory entry under `root`, descending into all subdirectories.
///
/// Nothing is filtered out: hidden files and files matched by ignore files are
/// listed too, and so are FIFOs, sockets, devices and dangling symlinks. A
/// symlink resolving to a directory counts as a directory: it is neither
/// listed nor descended into. The first walk error (missing root, unreadable
/// directory) aborts the listing.
pub fn list_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut builder = ignore::WalkBuilder::new(root);
    builder.standard_filters(false).follow_links(false);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let entry_path = entry.path();

        if entry.depth() > 0 && !entry_path.is_dir() {
            files.push(entry_path.to_path_buf());
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::core::error::RawLinksError;
    use std::collections::HashSet;
    use std::fs;
    use tempfile::TempDir;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    fn create_test_structure() -> std::result::Result<TempDir, Box<dyn std::error::Error>> {
        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();

        fs::create_dir_all(base.join("controller/commands"))?;
        fs::create_dir_all(base.join("resources/empty"))?;

        fs::write(base.join("Main.java"), "class Main {}")?;
        fs::write(base.join("controller/Controller.java"), "class Controller {}")?;
        fs::write(
            base.join("controller/commands/AddColumnCommand.java"),
            "class AddColumnCommand {}",
        )?;
        fs::write(base.join("resources/style.css"), "body {}")?;
        fs::write(base.join("no_extension"), "plain")?;

        // Would be skipped by a filtering walker
        fs::write(base.join(".gitignore"), "*.log\ntmp/\n")?;
        fs::write(base.join("debug.log"), "log")?;
        fs::create_dir_all(base.join("tmp"))?;
        fs::write(base.join("tmp/scratch.txt"), "scratch")?;
        fs::write(base.join(".hidden"), "hidden")?;

        Ok(temp_dir)
    }

    fn relative_set(root: &Path, paths: &[PathBuf]) -> HashSet<String> {
        paths
            .iter()
            .map(|p| {
                p.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_list_files__finds_every_file() -> TestResult {
        let temp_dir = create_test_structure()?;

        let result = list_files(temp_dir.path())?;

        let expected: HashSet<String> = [
            "Main.java",
            "controller/Controller.java",
            "controller/commands/AddColumnCommand.java",
            "resources/style.css",
            "no_extension",
            ".gitignore",
            "debug.log",
            "tmp/scratch.txt",
            ".hidden",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        assert_eq!(result.len(), expected.len());
        assert_eq!(relative_set(temp_dir.path(), &result), expected);
        Ok(())
    }

    #[test]
    fn test_list_files__paths_start_with_root() -> TestResult {
        let temp_dir = create_test_structure()?;

        let result = list_files(temp_dir.path())?;

        assert!(result.iter().all(|p| p.starts_with(temp_dir.path())));
        Ok(())
    }

    #[test]
    fn test_list_files__skips_directories() -> TestResult {
        let temp_dir = create_test_structure()?;

        let result = list_files(temp_dir.path())?;

        assert!(result.iter().all(|p| !p.is_dir()));
        assert!(!result.contains(&temp_dir.path().join("resources/empty")));
        Ok(())
    }

    #[test]
    fn test_list_files__empty_directory() -> TestResult {
        let temp_dir = tempfile::tempdir()?;

        let result = list_files(temp_dir.path())?;

        assert!(result.is_empty());
        Ok(())
    }

    #[test]
    fn test_list_files__non_existing_root() {
        let result = list_files(Path::new("/definitely/nonexistent/root/12345"));

        assert!(matches!(result, Err(RawLinksError::FileWalking(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_list_files__symlinks() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        let outside = tempfile::tempdir()?;
        let base = temp_dir.path();

        fs::write(outside.path().join("linked.txt"), "linked")?;
        fs::write(base.join("real.txt"), "real")?;
        std::os::unix::fs::symlink(outside.path().join("linked.txt"), base.join("file_link"))?;
        std::os::unix::fs::symlink(outside.path(), base.join("dir_link"))?;

        let result = list_files(base)?;

        let expected: HashSet<String> = ["real.txt", "file_link"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(relative_set(base, &result), expected);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_list_files__lists_special_entries() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();

        fs::write(base.join("a.txt"), "a")?;
        std::os::unix::fs::symlink(base.join("missing-target"), base.join("dangling"))?;
        let status = std::process::Command::new("mkfifo")
            .arg(base.join("pipe"))
            .status()?;
        assert!(status.success());

        let result = list_files(base)?;

        let expected: HashSet<String> = ["a.txt", "dangling", "pipe"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(result.len(), expected.len());
        assert_eq!(relative_set(base, &result), expected);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_list_files__unreadable_subdirectory_aborts() -> TestResult {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();
        let locked = base.join("locked");
        fs::write(base.join("a.txt"), "a")?;
        fs::create_dir(&locked)?;
        fs::write(locked.join("hidden.txt"), "hidden")?;
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;

        // Permission bits do not apply to root
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;
            return Ok(());
        }

        let result = list_files(base);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;

        assert!(matches!(result, Err(RawLinksError::FileWalking(_))));
        Ok(())
    }
}
