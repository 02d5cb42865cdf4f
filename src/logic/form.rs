use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::marker::PhantomData;

use crate::model::{EntityRecord, RecordId};
use crate::store::EntityStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormMode {
    Create,
    Edit(RecordId),
}

/// Result of confirming a form session.
#[derive(Debug)]
pub enum FormOutcome<R: EntityRecord> {
    /// Required fields are blank; the session is handed back, still open,
    /// with `errors()` populated for inline display.
    Invalid(FormSession<R>),
    Created(RecordId),
    Updated(RecordId),
    /// Edit target no longer exists in the collection; the draft is
    /// discarded and the collection is untouched.
    Stale(RecordId),
}

/// A transient, unsaved draft of one record. Opened from an empty template
/// (create mode) or an existing record (edit mode), edited field by field,
/// and committed to the store only on a valid confirm. Dropping the session
/// is cancellation: the draft disappears with no effect on the collection.
#[derive(Debug, Clone)]
pub struct FormSession<R: EntityRecord> {
    mode: FormMode,
    fields: Map<String, Value>,
    errors: HashMap<String, String>,
    _record: PhantomData<R>,
}

impl<R: EntityRecord> FormSession<R> {
    /// Opens a create-mode session seeded from an entity template (which
    /// carries the entity's defaults, e.g. status and current date).
    pub fn open_create(template: R) -> Result<Self> {
        Ok(Self {
            mode: FormMode::Create,
            fields: to_field_map(&template)?,
            errors: HashMap::new(),
            _record: PhantomData,
        })
    }

    /// Opens an edit-mode session as a field-by-field copy of `record`.
    pub fn open_edit(record: &R) -> Result<Self> {
        Ok(Self {
            mode: FormMode::Edit(record.id()),
            fields: to_field_map(record)?,
            errors: HashMap::new(),
            _record: PhantomData,
        })
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    /// Replaces one field of the draft. No eager validation; errors are only
    /// recomputed on `validate`/`confirm`.
    pub fn set_field(&mut self, name: &str, value: impl Into<Value>) {
        self.fields.insert(name.to_string(), value.into());
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Validation errors from the last `validate`/`confirm`, keyed by field
    /// name, for inline display next to the offending inputs.
    pub fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }

    /// Recomputes the error map: one entry per required field whose value is
    /// missing, not text, or blank after trimming. An empty map means the
    /// draft is valid.
    pub fn validate(&mut self) -> bool {
        self.errors.clear();
        for &field in R::required_fields() {
            let message = match self.fields.get(field) {
                Some(Value::String(s)) if s.trim().is_empty() => {
                    Some(format!("{field} is required"))
                }
                Some(Value::String(_)) => None,
                Some(Value::Null) | None => Some(format!("{field} is required")),
                Some(_) => Some(format!("{field} must be text")),
            };
            if let Some(message) = message {
                self.errors.insert(field.to_string(), message);
            }
        }
        self.errors.is_empty()
    }

    /// Validates and, when valid, hands the finished record to the store:
    /// create mode appends with a freshly minted id, edit mode updates in
    /// place under the original id. An invalid draft aborts the mutation and
    /// hands the session back with errors set.
    pub fn confirm(mut self, store: &mut EntityStore<R>) -> Result<FormOutcome<R>> {
        if !self.validate() {
            return Ok(FormOutcome::Invalid(self));
        }

        let record: R = serde_json::from_value(Value::Object(self.fields))
            .context("draft no longer matches its record shape")?;

        match self.mode {
            FormMode::Create => {
                let id = store.create(record)?;
                Ok(FormOutcome::Created(id))
            }
            FormMode::Edit(id) => {
                let mut record = record;
                record.set_id(id);
                if store.update(record)? {
                    Ok(FormOutcome::Updated(id))
                } else {
                    Ok(FormOutcome::Stale(id))
                }
            }
        }
    }
}

fn to_field_map<R: EntityRecord>(record: &R) -> Result<Map<String, Value>> {
    match serde_json::to_value(record)? {
        Value::Object(map) => Ok(map),
        other => bail!("record serializes to {:?}, expected a JSON object", other),
    }
}
