// a saved date is stored as a flat JSON object; the field names follow the browser payload (camelCase)
use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter};
use thiserror::Error;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SavedDateRecord {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub event_type: String,
    pub date: String,
    #[serde(default)]
    pub location: String,
    /// Weak reference into the catalog; may name a product that no longer exists.
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub note: String,
    /// Epoch milliseconds. Fractional values written by other clients are truncated.
    #[serde(deserialize_with = "epoch_millis")]
    pub created_at: i64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EpochMillis {
    Whole(i64),
    Fractional(f64),
}

fn epoch_millis<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match EpochMillis::deserialize(deserializer)? {
        EpochMillis::Whole(millis) => millis,
        EpochMillis::Fractional(millis) => millis.trunc() as i64,
    })
}

/// The in-progress form. Same shape as a record minus `id` and `created_at`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DateForm {
    pub label: String,
    pub event_type: String,
    pub date: String,
    pub location: String,
    pub product_id: Option<String>,
    pub note: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "camelCase")]
pub enum FormField {
    Label,
    EventType,
    Date,
    Location,
    Note,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum SaveStatus {
    #[default]
    Idle,
    Saved,
    Error,
}

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("an event title is required")]
    MissingLabel,
    #[error("an event date is required")]
    MissingDate,
}

impl DateForm {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Label => &self.label,
            FormField::EventType => &self.event_type,
            FormField::Date => &self.date,
            FormField::Location => &self.location,
            FormField::Note => &self.note,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Label => &mut self.label,
            FormField::EventType => &mut self.event_type,
            FormField::Date => &mut self.date,
            FormField::Location => &mut self.location,
            FormField::Note => &mut self.note,
        };
        *slot = value;
    }

    /// Only the title and the date are required. Whitespace counts as content.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.label.is_empty() {
            return Err(ValidationError::MissingLabel);
        }
        if self.date.is_empty() {
            return Err(ValidationError::MissingDate);
        }
        Ok(())
    }

    pub fn into_record(self, id: String, created_at: i64) -> SavedDateRecord {
        SavedDateRecord {
            id,
            label: self.label,
            event_type: self.event_type,
            date: self.date,
            location: self.location,
            product_id: self.product_id,
            note: self.note,
            created_at,
        }
    }
}
