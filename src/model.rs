//! Complaint row and request body types.

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// One stored complaint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Complaint {
    pub id: i64,
    pub email: Option<String>,
    pub complaint: String,
}

/// Body of POST and PUT. Absent fields are written as NULL; the store rejects a NULL `complaint`.
/// Only a JSON object is accepted; unknown keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, ToSchema)]
pub struct ComplaintInput {
    pub email: Option<String>,
    pub complaint: Option<String>,
}

#[cfg(test)]
impl ComplaintInput {
    pub fn new(email: Option<&str>, complaint: &str) -> Self {
        Self {
            email: email.map(str::to_string),
            complaint: Some(complaint.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for ComplaintInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ComplaintInputVisitor)
    }
}

struct ComplaintInputVisitor;

impl<'de> Visitor<'de> for ComplaintInputVisitor {
    type Value = ComplaintInput;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON object with optional `email` and `complaint` strings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut email: Option<Option<String>> = None;
        let mut complaint: Option<Option<String>> = None;
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "email" => {
                    if email.is_some() {
                        return Err(de::Error::duplicate_field("email"));
                    }
                    email = Some(map.next_value()?);
                }
                "complaint" => {
                    if complaint.is_some() {
                        return Err(de::Error::duplicate_field("complaint"));
                    }
                    complaint = Some(map.next_value()?);
                }
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(ComplaintInput {
            email: email.flatten(),
            complaint: complaint.flatten(),
        })
    }
}
