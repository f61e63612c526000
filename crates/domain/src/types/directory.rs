//! Reference records used to resolve codes and e-mails to display names

use serde::{Deserialize, Serialize};

use crate::utils::lenient::optional_text;

/// Topic reference entry (`code` → `name`)
///
/// Both fields are optional on the wire; entries missing either one are
/// ignored when a directory is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    #[serde(
        rename(serialize = "code", deserialize = "รหัสหัวเรื่อง"),
        alias = "code",
        default,
        deserialize_with = "optional_text"
    )]
    pub code: Option<String>,
    #[serde(
        rename(serialize = "name", deserialize = "ชื่อหัวเรื่อง"),
        alias = "name",
        default,
        deserialize_with = "optional_text"
    )]
    pub name: Option<String>,
}

impl Topic {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            name: Some(name.into()),
        }
    }
}

/// A console user; staff members receive repair requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    #[serde(
        rename(serialize = "email", deserialize = "อีเมล"),
        alias = "email",
        default,
        deserialize_with = "optional_text"
    )]
    pub email: Option<String>,
    #[serde(
        rename(serialize = "fullName", deserialize = "ชื่อ"),
        alias = "fullName",
        default,
        deserialize_with = "optional_text"
    )]
    pub full_name: Option<String>,
    #[serde(
        rename(serialize = "position", deserialize = "ตำแหน่ง"),
        alias = "position",
        default,
        deserialize_with = "optional_text"
    )]
    pub position: Option<String>,
    #[serde(
        rename(serialize = "profileImage", deserialize = "รูปโปรไฟล์"),
        alias = "profileImage",
        default,
        deserialize_with = "optional_text"
    )]
    pub profile_image: Option<String>,
}

impl StaffMember {
    pub fn new(email: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            full_name: Some(full_name.into()),
            ..Self::default()
        }
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    /// Whether this member holds one of the given positions.
    pub fn holds_any(&self, positions: &[String]) -> bool {
        self.position
            .as_deref()
            .is_some_and(|p| positions.iter().any(|want| want == p))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn topic_accepts_both_vocabularies() {
        let thai: Topic =
            serde_json::from_value(json!({"รหัสหัวเรื่อง": "T1", "ชื่อหัวเรื่อง": "Network"}))
                .unwrap();
        let english: Topic =
            serde_json::from_value(json!({"code": "T1", "name": "Network"})).unwrap();
        assert_eq!(thai, english);
        assert_eq!(
            serde_json::to_value(&thai).unwrap(),
            json!({"code": "T1", "name": "Network"})
        );
    }

    #[test]
    fn staff_member_position_check() {
        let member = StaffMember::new("a@example.org", "Anan").with_position("ช่างเทคนิค");
        assert!(member.holds_any(&["ช่างเทคนิค".to_string()]));
        assert!(!member.holds_any(&["อาจารย์".to_string()]));
        let technician = ["ช่างเทคนิค".to_string()];
        assert!(!StaffMember::default().holds_any(&technician));
    }

    #[test]
    fn staff_member_tolerates_numeric_name() {
        let member: StaffMember =
            serde_json::from_value(json!({"อีเมล": "x@y.z", "ชื่อ": 42})).unwrap();
        assert_eq!(member.full_name.as_deref(), Some("42"));
    }
}
