//! Instructor model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::person::{DisplayInfo, Person, PersonKind};

/// A teaching staff member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    #[serde(flatten)]
    pub person: Person,

    /// Home department
    pub department: String,
}

impl Instructor {
    /// Create a new instructor
    pub fn new(
        id: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            person: Person::new(id, full_name, email),
            department: department.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.person.id
    }

    pub fn name(&self) -> &str {
        &self.person.full_name
    }

    /// Find an instructor by id in a fixed list
    pub fn find<'a>(instructors: &'a [Instructor], id: &str) -> Option<&'a Instructor> {
        instructors.iter().find(|i| i.id() == id)
    }
}

impl DisplayInfo for Instructor {
    fn person(&self) -> &Person {
        &self.person
    }

    fn kind(&self) -> PersonKind {
        PersonKind::Instructor
    }

    fn display_info(&self) -> String {
        format!("Prof. {} - {}", self.name(), self.department)
    }
}

impl fmt::Display for Instructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.department)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_info() {
        let inst = Instructor::new("I1", "Grace Hopper", "grace@example.edu", "CS");
        assert_eq!(inst.display_info(), "Prof. Grace Hopper - CS");
        assert_eq!(inst.kind(), PersonKind::Instructor);
        assert_eq!(inst.to_string(), "Grace Hopper (CS)");
    }

    #[test]
    fn test_find() {
        let list = vec![
            Instructor::new("I1", "Grace Hopper", "grace@example.edu", "CS"),
            Instructor::new("I2", "Emmy Noether", "emmy@example.edu", "MTH"),
        ];
        assert_eq!(Instructor::find(&list, "I2").unwrap().name(), "Emmy Noether");
        assert!(Instructor::find(&list, "I9").is_none());
    }

    #[test]
    fn test_serialization_is_flat() {
        let inst = Instructor::new("I1", "Grace Hopper", "grace@example.edu", "CS");
        let json = serde_json::to_value(&inst).unwrap();
        assert_eq!(json["id"], "I1");
        assert_eq!(json["department"], "CS");

        let back: Instructor = serde_json::from_value(json).unwrap();
        assert_eq!(back, inst);
    }
}
