use std::collections::HashSet;

use thiserror::Error;

/// Why a skill was not added. The session ignores these silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkillRejection {
    #[error("skill is empty")]
    Empty,

    #[error("skill '{0}' is already listed")]
    Duplicate(String),
}

/// Add / remove over the skills list. Matching is exact and case-sensitive.
#[derive(Debug, Default)]
pub struct SkillsEditor;

impl SkillsEditor {
    /// Trims `skill` and appends it. Returns the stored value.
    pub fn add(&self, skills: &mut Vec<String>, skill: &str) -> Result<String, SkillRejection> {
        let skill = skill.trim();
        if skill.is_empty() {
            return Err(SkillRejection::Empty);
        }
        if skills.iter().any(|s| s == skill) {
            return Err(SkillRejection::Duplicate(skill.to_string()));
        }
        skills.push(skill.to_string());
        Ok(skill.to_string())
    }

    /// Removes the exact match. Returns `false` if it was not listed.
    pub fn remove(&self, skills: &mut Vec<String>, skill: &str) -> bool {
        match skills.iter().position(|s| s == skill) {
            Some(index) => {
                skills.remove(index);
                true
            }
            None => false,
        }
    }
}

/// Trims every skill and drops empties and later repeats, keeping first-seen order.
pub fn normalize_skills(skills: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(skills.len());
    skills
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && seen.insert(s.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims() {
        let mut skills = Vec::new();
        assert_eq!(SkillsEditor.add(&mut skills, "  Rust "), Ok("Rust".to_string()));
        assert_eq!(skills, vec!["Rust".to_string()]);
    }

    #[test]
    fn test_add_same_value_is_idempotent() {
        let mut skills = vec!["A".to_string()];
        assert_eq!(
            SkillsEditor.add(&mut skills, "A"),
            Err(SkillRejection::Duplicate("A".to_string()))
        );
        assert_eq!(
            SkillsEditor.add(&mut skills, " A "),
            Err(SkillRejection::Duplicate("A".to_string()))
        );
        assert_eq!(skills, vec!["A".to_string()]);
    }

    #[test]
    fn test_add_is_case_sensitive() {
        let mut skills = vec!["rust".to_string()];
        assert!(SkillsEditor.add(&mut skills, "Rust").is_ok());
        assert_eq!(skills.len(), 2);
    }

    #[test]
    fn test_add_rejects_blank() {
        let mut skills = Vec::new();
        assert_eq!(SkillsEditor.add(&mut skills, "   "), Err(SkillRejection::Empty));
        assert!(skills.is_empty());
    }

    #[test]
    fn test_remove_exact_match_only() {
        let mut skills = vec!["Go".to_string(), "Rust".to_string()];
        assert!(!SkillsEditor.remove(&mut skills, "rust"));
        assert!(SkillsEditor.remove(&mut skills, "Rust"));
        assert_eq!(skills, vec!["Go".to_string()]);
    }

    #[test]
    fn test_mixed_sequence_never_holds_duplicates_or_empties() {
        let mut skills = Vec::new();
        let ops = [
            ("add", "Rust"),
            ("add", ""),
            ("add", "Go"),
            ("add", "Rust"),
            ("remove", "Go"),
            ("add", " Go"),
            ("add", "\t"),
            ("remove", "Zig"),
            ("add", "Zig"),
            ("add", "Go "),
        ];
        for (op, value) in ops {
            match op {
                "add" => {
                    let _ = SkillsEditor.add(&mut skills, value);
                }
                _ => {
                    SkillsEditor.remove(&mut skills, value);
                }
            }
            let unique: HashSet<_> = skills.iter().collect();
            assert_eq!(unique.len(), skills.len());
            assert!(skills.iter().all(|s| !s.is_empty()));
        }
        assert_eq!(skills, vec!["Rust", "Go", "Zig"]);
    }

    #[test]
    fn test_normalize_skills() {
        let raw = vec![" A".to_string(), "".to_string(), "A".to_string(), "B".to_string()];
        assert_eq!(normalize_skills(raw), vec!["A".to_string(), "B".to_string()]);
    }
}
