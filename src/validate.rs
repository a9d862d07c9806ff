use std::collections::BTreeMap;

use serde::Serialize;

use crate::student::StudentForm;

/// Field names as the presentation layer knows them.
pub mod field {
    pub const FULL_NAME: &str = "fullName";
    pub const REGISTRATION_NUMBER: &str = "registrationNumber";
    pub const COURSE: &str = "course";
    pub const YEAR_OF_STUDY: &str = "yearOfStudy";
}

/// Violated-rule messages keyed by field name, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<&'static str, Vec<String>>);

impl FieldErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    /// Single-error map, used for the uniqueness rejection.
    pub fn of(field: &'static str, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.push(field, message);
        errors
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

enum Rule {
    Required,
    MaxLen(usize),
    Range(i64, i64),
}

struct FieldRules {
    field: &'static str,
    rules: &'static [(Rule, &'static str)],
}

static RULES: &[FieldRules] = &[
    FieldRules {
        field: field::FULL_NAME,
        rules: &[
            (Rule::Required, "Full Name is required"),
            (Rule::MaxLen(100), "Full Name cannot exceed 100 characters"),
        ],
    },
    FieldRules {
        field: field::REGISTRATION_NUMBER,
        rules: &[
            (Rule::Required, "Registration Number is required"),
            (
                Rule::MaxLen(20),
                "Registration Number cannot exceed 20 characters",
            ),
        ],
    },
    FieldRules {
        field: field::COURSE,
        rules: &[
            (Rule::Required, "Course is required"),
            (Rule::MaxLen(100), "Course name cannot exceed 100 characters"),
        ],
    },
    FieldRules {
        field: field::YEAR_OF_STUDY,
        rules: &[
            (Rule::Required, "Year of Study is required"),
            (Rule::Range(1, 5), "Year of Study must be between 1 and 5"),
        ],
    },
];

enum FieldValue<'form> {
    Text(&'form str),
    Number(Option<i64>),
}

fn field_value<'form>(form: &'form StudentForm, field: &str) -> FieldValue<'form> {
    match field {
        field::FULL_NAME => FieldValue::Text(&form.full_name),
        field::REGISTRATION_NUMBER => FieldValue::Text(&form.registration_number),
        field::COURSE => FieldValue::Text(&form.course),
        field::YEAR_OF_STUDY => FieldValue::Number(form.year_of_study),
        unknown => unreachable!("no such form field: {unknown}"),
    }
}

impl Rule {
    fn holds(&self, value: &FieldValue<'_>) -> bool {
        match (self, value) {
            (Rule::Required, FieldValue::Text(text)) => !text.trim().is_empty(),
            (Rule::Required, FieldValue::Number(number)) => number.is_some(),
            (Rule::MaxLen(max), FieldValue::Text(text)) => text.chars().count() <= *max,
            (Rule::MaxLen(_), FieldValue::Number(_)) => true,
            (Rule::Range(lo, hi), FieldValue::Number(Some(number))) => {
                (*lo..=*hi).contains(number)
            }
            // Required already reports the missing value
            (Rule::Range(_, _), FieldValue::Number(None)) => true,
            (Rule::Range(_, _), FieldValue::Text(_)) => true,
        }
    }
}

/// Checks every field rule against the submitted form.
///
/// Pure and storage-free; the uniqueness rule runs separately in the handlers.
pub fn validate(form: &StudentForm) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field_rules in RULES {
        let value = field_value(form, field_rules.field);
        for (rule, message) in field_rules.rules {
            if !rule.holds(&value) {
                errors.push(field_rules.field, *message);
            }
        }
    }
    errors
}
