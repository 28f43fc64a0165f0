use aws_sdk_dynamodb::types::AttributeValue;
use serde::Serialize;
use std::collections::HashMap;

/// Partition key value shared by every record.
pub(crate) const UNIVERSITY: &str = "swansea-university";

/// Name of the partition key attribute.
pub(crate) const PARTITION_ATTR: &str = "university";

/// A student row as stored in the table.
///
/// Submitted fields are kept exactly as they arrived. A parameter missing
/// from the request stays `None` and is left out of the stored item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Record {
    pub university: String,
    pub faculty: Option<String>,
    pub student_id: Option<String>,
    pub first_name: Option<String>,
    pub surname: Option<String>,
}

impl Record {
    /// Builds a record under the fixed partition from request parameters.
    pub fn from_params<'a, F>(param: F) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let owned = |name: &str| param(name).map(str::to_string);
        Self {
            university: UNIVERSITY.to_string(),
            faculty: owned("faculty"),
            student_id: owned("studentId"),
            first_name: owned("firstName"),
            surname: owned("surname"),
        }
    }
}

pub(crate) fn record_to_item(record: &Record) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();
    item.insert(
        PARTITION_ATTR.to_string(),
        AttributeValue::S(record.university.clone()),
    );

    let fields = [
        ("faculty", &record.faculty),
        ("studentId", &record.student_id),
        ("firstName", &record.first_name),
        ("surname", &record.surname),
    ];
    for (name, value) in fields {
        if let Some(value) = value {
            item.insert(name.to_string(), AttributeValue::S(value.clone()));
        }
    }

    item
}

/// Reads a stored item back. Absent or non-string attributes become `None`.
pub(crate) fn item_to_record(item: &HashMap<String, AttributeValue>) -> Record {
    Record {
        university: get_string(item, PARTITION_ATTR).unwrap_or_default(),
        faculty: get_string(item, "faculty"),
        student_id: get_string(item, "studentId"),
        first_name: get_string(item, "firstName"),
        surname: get_string(item, "surname"),
    }
}

fn get_string(item: &HashMap<String, AttributeValue>, key: &str) -> Option<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}
