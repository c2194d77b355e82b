//! Subject file loading.
//!
//! Subjects are described in a YAML list:
//!
//! ```yaml
//! - name: Math
//!   difficulty: hard
//!   topics: [Algebra, Calculus, Probability]
//! - name: History
//!   difficulty: easy
//!   syllabus: history-syllabus.pdf
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use planr::domain::{Difficulty, Subject};
use planr::error::{PlanrError, Result};

/// One subject entry as written by the user; ids are assigned on load.
#[derive(Debug, Deserialize)]
struct SubjectSpec {
    name: String,
    difficulty: Difficulty,
    #[serde(default)]
    topics: Vec<String>,
    #[serde(default)]
    syllabus: Option<String>,
    #[serde(default)]
    color: Option<String>,
}

/// Load subjects from a YAML file.
pub fn load_subjects(path: impl AsRef<Path>) -> Result<Vec<Subject>> {
    let content = fs::read_to_string(path.as_ref())?;
    let specs: Vec<SubjectSpec> = serde_yaml::from_str(&content)?;
    if specs.is_empty() {
        return Err(PlanrError::InvalidInput(
            "subjects file lists no subjects".to_string(),
        ));
    }

    Ok(specs
        .into_iter()
        .map(|spec| {
            let mut subject = Subject::new(spec.name, spec.difficulty, spec.topics);
            if let Some(syllabus) = spec.syllabus {
                subject = subject.with_syllabus(syllabus);
            }
            if let Some(color) = spec.color {
                subject = subject.with_color(color);
            }
            subject
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_subjects() {
        let file = write_file(
            "- name: Math\n  difficulty: hard\n  topics: [Algebra, Calculus]\n\
             - name: History\n  difficulty: easy\n  syllabus: history.pdf\n",
        );

        let subjects = load_subjects(file.path()).unwrap();
        assert_eq!(subjects.len(), 2);
        assert_eq!(subjects[0].name, "Math");
        assert_eq!(subjects[0].difficulty, Difficulty::Hard);
        assert_eq!(subjects[0].topics, vec!["Algebra", "Calculus"]);
        assert_eq!(subjects[1].syllabus.as_deref(), Some("history.pdf"));
        assert!(subjects[1].topics.is_empty());
    }

    #[test]
    fn test_load_assigns_unique_ids() {
        let file = write_file(
            "- name: A\n  difficulty: easy\n  topics: [t]\n\
             - name: B\n  difficulty: easy\n  topics: [t]\n",
        );
        let subjects = load_subjects(file.path()).unwrap();
        assert_ne!(subjects[0].id, subjects[1].id);
    }

    #[test]
    fn test_empty_file_is_invalid() {
        let file = write_file("[]\n");
        let result = load_subjects(file.path());
        assert!(matches!(result, Err(PlanrError::InvalidInput(_))));
    }

    #[test]
    fn test_bad_difficulty_is_a_yaml_error() {
        let file = write_file("- name: Math\n  difficulty: brutal\n  topics: [t]\n");
        let result = load_subjects(file.path());
        assert!(matches!(result, Err(PlanrError::Yaml(_))));
    }
}
