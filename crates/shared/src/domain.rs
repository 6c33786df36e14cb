use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SemesterError;

/// Backend-assigned record identifier. Opaque to the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub String);

impl StudentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Academic semester, always within `1..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Semester(u8);

impl Semester {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 8;

    pub fn new(value: i64) -> Result<Self, SemesterError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(SemesterError::OutOfRange(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Semester> {
        (Self::MIN..=Self::MAX).map(Semester)
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Semester {
    type Err = SemesterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = trimmed
            .parse::<i64>()
            .map_err(|_| SemesterError::NotANumber(trimmed.to_string()))?;
        Self::new(value)
    }
}

impl Serialize for Semester {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Semester {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        let parsed = match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Semester::new(value),
            Raw::Text(text) => text.parse(),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}

/// Course field as the backend stores it: older records hold a single
/// string, newer ones an array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CourseValue {
    One(String),
    Many(Vec<String>),
}

impl Default for CourseValue {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl CourseValue {
    /// Courses as a list; an empty single value yields no entries.
    pub fn to_list(&self) -> Vec<String> {
        match self {
            Self::One(course) if course.is_empty() => Vec::new(),
            Self::One(course) => vec![course.clone()],
            Self::Many(courses) => courses.clone(),
        }
    }

    /// Display form used in table cells and single-value inputs.
    pub fn display(&self) -> String {
        match self {
            Self::One(course) => course.clone(),
            Self::Many(courses) => courses.join(", "),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub roll_no: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "nullable_course")]
    pub course: CourseValue,
    #[serde(
        default,
        deserialize_with = "lenient_semester",
        skip_serializing_if = "Option::is_none"
    )]
    pub semester: Option<Semester>,
}

fn nullable_course<'de, D: Deserializer<'de>>(deserializer: D) -> Result<CourseValue, D::Error> {
    Ok(Option::<CourseValue>::deserialize(deserializer)?.unwrap_or_default())
}

// A malformed semester on one record must not fail the whole listing.
fn lenient_semester<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Semester>, D::Error> {
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(text)) => text.parse().ok(),
        Some(serde_json::Value::Number(number)) => {
            number.as_i64().and_then(|value| Semester::new(value).ok())
        }
        _ => None,
    })
}
