//! Project list loader.
//! The project list is a plain-text file, one project name per line. It is
//! presentation-side input: the tracking core accepts any non-blank name and
//! does not check membership here.

use crate::errors::AppResult;
use std::fs;
use std::path::Path;

const DEFAULT_PROJECT: &str = "Default Project";

/// Load project names from the configured file.
/// Creates the file with a single default project when missing or empty,
/// so there is always at least one project to pick.
pub fn load_projects(path: &str) -> AppResult<Vec<String>> {
    let p = Path::new(path);

    if let Some(parent) = p.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    if !p.exists() {
        fs::write(p, format!("{}\n", DEFAULT_PROJECT))?;
    }

    let content = fs::read_to_string(p)?;
    let projects: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();

    if projects.is_empty() {
        fs::write(p, format!("{}\n", DEFAULT_PROJECT))?;
        return Ok(vec![DEFAULT_PROJECT.to_string()]);
    }

    Ok(projects)
}

/// Whether `project_name` appears in the loaded list.
pub fn is_known_project(project_name: &str, projects: &[String]) -> bool {
    projects.iter().any(|p| p == project_name.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_default_file_when_missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("projects.txt");
        let path_str = path.to_string_lossy().to_string();

        let projects = load_projects(&path_str).unwrap();
        assert_eq!(projects, vec![DEFAULT_PROJECT.to_string()]);
        assert!(path.exists());
    }

    #[test]
    fn skips_blank_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("projects.txt");
        fs::write(&path, "Work\n\n  \nSide Project\n").unwrap();

        let projects = load_projects(&path.to_string_lossy()).unwrap();
        assert_eq!(projects, vec!["Work", "Side Project"]);
    }

    #[test]
    fn membership_check_trims_input() {
        let projects = vec!["Work".to_string()];
        assert!(is_known_project(" Work ", &projects));
        assert!(!is_known_project("Other", &projects));
    }
}
