use log::{debug, error};
use std::io;
use std::path::{Path, PathBuf};

/// Where series directories are taken from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeriesSource {
    /// Series directories given directly
    Series(Vec<PathBuf>),

    /// Study directories; each immediate subdirectory is a series
    Studies(Vec<PathBuf>),

    /// Patient directories; series sit two levels down (`<patient>/*/*`)
    Patients(Vec<PathBuf>),
}

impl SeriesSource {
    /// Lists the series directories to predict, in processing order
    ///
    /// Roots that cannot be read are logged and skipped. Entries under each
    /// root are sorted by path; non-directories are ignored.
    pub fn discover(&self) -> Vec<PathBuf> {
        match self {
            SeriesSource::Series(dirs) => dirs.clone(),
            SeriesSource::Studies(roots) => roots
                .iter()
                .flat_map(|root| subdirectories_or_log(root))
                .collect(),
            SeriesSource::Patients(roots) => roots
                .iter()
                .flat_map(|root| subdirectories_or_log(root))
                .flat_map(|study| subdirectories_or_log(&study))
                .collect(),
        }
    }
}

fn subdirectories_or_log(dir: &Path) -> Vec<PathBuf> {
    match subdirectories(dir) {
        Ok(dirs) => {
            debug!("Found {} directories in {}", dirs.len(), dir.display());
            dirs
        }
        Err(e) => {
            error!("Failed to read directory '{}': {}", dir.display(), e);
            Vec::new()
        }
    }
}

/// Returns the immediate subdirectories of `dir`, sorted by path
///
/// Hidden entries (names starting with `.`) are skipped.
pub fn subdirectories(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        let path = entry.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn test_series_dirs_used_directly() {
        // Series directories are not checked for existence here
        let dirs = vec![PathBuf::from("/missing/b"), PathBuf::from("/missing/a")];
        assert_eq!(SeriesSource::Series(dirs.clone()).discover(), dirs);
    }

    #[test]
    fn test_study_dirs_immediate_subdirectories_only() {
        let temp_dir = TempDir::new().unwrap();
        let study = temp_dir.path().join("study");
        fs::create_dir_all(study.join("series2")).unwrap();
        fs::create_dir_all(study.join("series1").join("nested")).unwrap();
        File::create(study.join("notes.txt")).unwrap();
        File::create(study.join("DICOMDIR")).unwrap();

        let found = SeriesSource::Studies(vec![study.clone()]).discover();

        assert_eq!(found, vec![study.join("series1"), study.join("series2")]);
    }

    #[test]
    fn test_study_dirs_multiple_roots_keep_order() {
        let temp_dir = TempDir::new().unwrap();
        let study_b = temp_dir.path().join("b");
        let study_a = temp_dir.path().join("a");
        fs::create_dir_all(study_b.join("s1")).unwrap();
        fs::create_dir_all(study_a.join("s1")).unwrap();

        let found = SeriesSource::Studies(vec![study_b.clone(), study_a.clone()]).discover();

        assert_eq!(found, vec![study_b.join("s1"), study_a.join("s1")]);
    }

    #[test]
    fn test_unreadable_root_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let study = temp_dir.path().join("study");
        fs::create_dir_all(study.join("s1")).unwrap();

        let found = SeriesSource::Studies(vec![temp_dir.path().join("missing"), study.clone()])
            .discover();

        assert_eq!(found, vec![study.join("s1")]);
    }

    #[test]
    fn test_hidden_directories_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let patient = temp_dir.path().join("patient1");
        fs::create_dir_all(patient.join(".git").join("objects")).unwrap();
        fs::create_dir_all(patient.join("study1").join(".Trash")).unwrap();
        fs::create_dir_all(patient.join("study1").join("series1")).unwrap();

        let found = SeriesSource::Patients(vec![patient.clone()]).discover();
        assert_eq!(found, vec![patient.join("study1").join("series1")]);

        let study = patient.join("study1");
        let found = SeriesSource::Studies(vec![study.clone()]).discover();
        assert_eq!(found, vec![study.join("series1")]);
    }

    #[test]
    fn test_patient_dirs_two_levels() {
        let temp_dir = TempDir::new().unwrap();
        let patient = temp_dir.path().join("patient1");
        fs::create_dir_all(patient.join("study1").join("series1")).unwrap();
        fs::create_dir_all(patient.join("study1").join("series2")).unwrap();
        fs::create_dir_all(patient.join("study2").join("series1")).unwrap();
        File::create(patient.join("study1").join("image.dcm")).unwrap();
        File::create(patient.join("readme.txt")).unwrap();

        let found = SeriesSource::Patients(vec![patient.clone()]).discover();

        assert_eq!(
            found,
            vec![
                patient.join("study1").join("series1"),
                patient.join("study1").join("series2"),
                patient.join("study2").join("series1"),
            ]
        );
    }
}
