use std::collections::HashMap;

use crate::models::Teacher;

/// Teachers keyed by id, built from the same list that feeds the teacher
/// picker. Handed explicitly to whatever needs to turn a typed-in name into
/// an id.
#[derive(Debug, Clone, Default)]
pub struct TeacherDirectory {
    by_id: HashMap<i64, Teacher>,
}

impl TeacherDirectory {
    pub fn new(teachers: impl IntoIterator<Item = Teacher>) -> Self {
        Self {
            by_id: teachers.into_iter().map(|teacher| (teacher.id, teacher)).collect(),
        }
    }

    pub fn get(&self, id: i64) -> Option<&Teacher> {
        self.by_id.get(&id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Finds a teacher by display name. A unique exact match wins; otherwise
    /// a trimmed, case-insensitive match is accepted when it is unambiguous.
    /// Names shared by several teachers resolve to nobody.
    pub fn resolve_name(&self, name: &str) -> Option<&Teacher> {
        if let Some(exact) = unique(self.by_id.values().filter(|teacher| teacher.name == name)) {
            return exact;
        }

        let wanted = name.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }

        unique(
            self.by_id
                .values()
                .filter(|teacher| teacher.name.trim().to_lowercase() == wanted),
        )
        .flatten()
    }
}

/// `None` when nothing matched, `Some(None)` when the match is ambiguous.
fn unique<'a>(mut matches: impl Iterator<Item = &'a Teacher>) -> Option<Option<&'a Teacher>> {
    let first = matches.next()?;
    match matches.next() {
        None => Some(Some(first)),
        Some(_) => Some(None),
    }
}
