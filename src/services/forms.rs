//! Request-boundary parsing for animal create/update bodies.
//!
//! The mobile client sends listings as `multipart/form-data` (text fields plus
//! up to five `photos` parts); JSON and url-encoded bodies are accepted too.
//! Everything is collected into an [`AnimalForm`], then validated into a
//! [`NewAnimal`] or an [`AnimalPatch`].

use std::collections::HashMap;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde_json::Value;

use crate::config::MAX_PHOTOS_PER_REQUEST;
use crate::models::{AnimalPatch, NewAnimal};
use crate::{Error, Result};

/// Multipart field carrying image files.
pub const PHOTOS_FIELD: &str = "photos";

/// A raw field value as it arrived.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Multipart/url-encoded text, or a JSON string.
    Text(String),
    /// Any other JSON value.
    Json(Value),
}

impl FieldValue {
    fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Json(Value::Null) => true,
            FieldValue::Json(_) => false,
        }
    }

    /// Scalar view of the value. Arrays and objects have none.
    fn as_text(&self) -> Option<String> {
        match self {
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Json(Value::Bool(b)) => Some(b.to_string()),
            FieldValue::Json(Value::Number(n)) => Some(n.to_string()),
            FieldValue::Json(_) => None,
        }
    }
}

/// An uploaded file, not yet written anywhere.
#[derive(Debug, Clone)]
pub struct UploadedPhoto {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

/// Collected body of an animal create/update request.
#[derive(Debug, Clone, Default)]
pub struct AnimalForm {
    fields: HashMap<String, FieldValue>,
    pub photos: Vec<UploadedPhoto>,
}

#[async_trait]
impl<S> FromRequest<S> for AnimalForm
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| Error::InvalidInput(e.body_text()))?;
            Self::from_multipart(multipart).await
        } else if content_type.starts_with("application/json") {
            let Json(body) =
                Json::<serde_json::Map<String, Value>>::from_request(req, state).await?;
            Ok(Self::from_json(body))
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(body) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|e| Error::InvalidInput(e.body_text()))?;
            Ok(Self::from_text_fields(body))
        } else if content_type.is_empty() {
            Ok(Self::default())
        } else {
            Err(Error::InvalidInput(format!(
                "Unsupported content type: {}",
                content_type
            )))
        }
    }
}

impl AnimalForm {
    async fn from_multipart(mut multipart: Multipart) -> Result<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| Error::InvalidInput(format!("Failed to read multipart field: {}", e)))?
        {
            let name = field.name().unwrap_or_default().to_string();
            let file_name = field.file_name().map(|s| s.to_string());

            if name == PHOTOS_FIELD || file_name.is_some() {
                if name != PHOTOS_FIELD {
                    tracing::debug!("Ignoring file in unexpected field '{}'", name);
                    continue;
                }
                if form.photos.len() == MAX_PHOTOS_PER_REQUEST {
                    return Err(Error::Validation(format!(
                        "At most {} photos can be uploaded at once",
                        MAX_PHOTOS_PER_REQUEST
                    )));
                }
                let content_type = field.content_type().map(|s| s.to_string());
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| Error::InvalidInput(format!("Failed to read file: {}", e)))?;
                form.photos.push(UploadedPhoto {
                    file_name,
                    content_type,
                    data,
                });
            } else {
                let text = field.text().await.map_err(|e| {
                    Error::InvalidInput(format!("Failed to read field '{}': {}", name, e))
                })?;
                form.fields.insert(name, FieldValue::Text(text));
            }
        }

        Ok(form)
    }

    pub fn from_json(body: serde_json::Map<String, Value>) -> Self {
        let fields = body
            .into_iter()
            .map(|(key, value)| {
                let value = match value {
                    Value::String(s) => FieldValue::Text(s),
                    other => FieldValue::Json(other),
                };
                (key, value)
            })
            .collect();

        Self {
            fields,
            photos: Vec::new(),
        }
    }

    pub fn from_text_fields(body: HashMap<String, String>) -> Self {
        Self {
            fields: body
                .into_iter()
                .map(|(k, v)| (k, FieldValue::Text(v)))
                .collect(),
            photos: Vec::new(),
        }
    }

    /// First present field among `names`; later names are accepted aliases.
    fn field(&self, names: &[&'static str]) -> Option<(&'static str, &FieldValue)> {
        let value = names.iter().find_map(|name| self.fields.get(*name))?;
        Some((names[0], value))
    }

    fn text(&self, names: &[&'static str]) -> Result<Option<String>> {
        match self.field(names) {
            None => Ok(None),
            Some((_, FieldValue::Json(Value::Null))) => Ok(None),
            Some((label, value)) => value
                .as_text()
                .map(Some)
                .ok_or_else(|| Error::Validation(format!("{} must be a string", label))),
        }
    }

    fn typed<T>(
        &self,
        names: &[&'static str],
        parse: fn(&str, &FieldValue) -> Result<T>,
    ) -> Result<Option<T>> {
        match self.field(names) {
            Some((label, value)) if !value.is_blank() => parse(label, value).map(Some),
            _ => Ok(None),
        }
    }

    /// Validate the fields of a new listing. `name` is the only required field.
    pub fn new_animal(&self) -> Result<NewAnimal> {
        let name = self
            .text(NAME)?
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::Validation("name is required".into()))?;

        Ok(NewAnimal {
            name,
            species: self.text(SPECIES)?.unwrap_or_default(),
            breed: self.text(BREED)?.unwrap_or_default(),
            age: self.typed(AGE, parse_age)?.unwrap_or(0),
            age_unit: self.text(AGE_UNIT)?.unwrap_or_default(),
            size: self.text(SIZE)?.unwrap_or_default(),
            sex: self.text(SEX)?.unwrap_or_default(),
            location: self.text(LOCATION)?.unwrap_or_default(),
            description: self.text(DESCRIPTION)?.unwrap_or_default(),
            vaccinated: self.typed(VACCINATED, parse_bool)?.unwrap_or(false),
            neutered: self.typed(NEUTERED, parse_bool)?.unwrap_or(false),
            dewormed: self.typed(DEWORMED, parse_bool)?.unwrap_or(false),
            temperament: self.typed(TEMPERAMENT, parse_list)?.unwrap_or_default(),
            needs: self.typed(NEEDS, parse_list)?.unwrap_or_default(),
        })
    }

    /// Validate the fields of an update. Absent fields stay untouched.
    pub fn patch(&self) -> Result<AnimalPatch> {
        let name = match self.text(NAME)? {
            Some(name) if name.trim().is_empty() => {
                return Err(Error::Validation("name cannot be blank".into()))
            }
            other => other.map(|s| s.trim().to_string()),
        };
        let status = self
            .text(STATUS)?
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(AnimalPatch {
            name,
            species: self.text(SPECIES)?,
            breed: self.text(BREED)?,
            age: self.typed(AGE, parse_age)?,
            age_unit: self.text(AGE_UNIT)?,
            size: self.text(SIZE)?,
            sex: self.text(SEX)?,
            location: self.text(LOCATION)?,
            description: self.text(DESCRIPTION)?,
            vaccinated: self.typed(VACCINATED, parse_bool)?,
            neutered: self.typed(NEUTERED, parse_bool)?,
            dewormed: self.typed(DEWORMED, parse_bool)?,
            temperament: self.typed(TEMPERAMENT, parse_list)?,
            needs: self.typed(NEEDS, parse_list)?,
            status,
        })
    }

    /// The photo list the client wants to keep, from `existingPhotos`.
    ///
    /// Malformed values are logged and ignored, leaving the current photos in place.
    pub fn existing_photos(&self) -> Option<Vec<String>> {
        let (_, value) = self.field(EXISTING_PHOTOS)?;
        if value.is_blank() {
            return None;
        }

        let parsed = match value {
            FieldValue::Text(raw) => serde_json::from_str::<Vec<String>>(raw),
            FieldValue::Json(json) => serde_json::from_value::<Vec<String>>(json.clone()),
        };

        match parsed {
            Ok(photos) => Some(photos),
            Err(e) => {
                tracing::warn!("Ignoring malformed existingPhotos: {}", e);
                None
            }
        }
    }

    pub fn take_photos(&mut self) -> Vec<UploadedPhoto> {
        std::mem::take(&mut self.photos)
    }
}

// Accepted field names. The first entry is canonical; the rest are aliases
// older clients send.
const NAME: &[&str] = &["name"];
const SPECIES: &[&str] = &["type", "species"];
const BREED: &[&str] = &["breed"];
const AGE: &[&str] = &["age"];
const AGE_UNIT: &[&str] = &["ageUnit"];
const SIZE: &[&str] = &["size"];
const SEX: &[&str] = &["sex", "gender"];
const LOCATION: &[&str] = &["location"];
const DESCRIPTION: &[&str] = &["description"];
const VACCINATED: &[&str] = &["vaccinated"];
const NEUTERED: &[&str] = &["neutered", "castrated"];
const DEWORMED: &[&str] = &["dewormed"];
const TEMPERAMENT: &[&str] = &["temperament", "personality"];
const NEEDS: &[&str] = &["needs", "requirements"];
const STATUS: &[&str] = &["status"];
const EXISTING_PHOTOS: &[&str] = &["existingPhotos"];

/// Parse a boolean flag: `true/false`, `1/0`, `yes/no`, `on/off`.
pub fn parse_bool(label: &str, value: &FieldValue) -> Result<bool> {
    let invalid = || Error::Validation(format!("{} must be true or false", label));
    let text = value.as_text().ok_or_else(invalid)?;

    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(invalid()),
    }
}

/// Parse a non-negative whole number.
pub fn parse_age(label: &str, value: &FieldValue) -> Result<u32> {
    value
        .as_text()
        .and_then(|text| text.trim().parse::<u32>().ok())
        .ok_or_else(|| Error::Validation(format!("{} must be a non-negative whole number", label)))
}

/// Parse a list field from a comma-separated string or a JSON array of strings.
///
/// Entries are trimmed; an empty entry is rejected.
pub fn parse_list(label: &str, value: &FieldValue) -> Result<Vec<String>> {
    let items: Vec<String> = match value {
        FieldValue::Text(text) if text.trim_start().starts_with('[') => {
            serde_json::from_str::<Vec<String>>(text).map_err(|_| {
                Error::Validation(format!("{} must be a JSON array of strings", label))
            })?
        }
        FieldValue::Text(text) => text.split(',').map(|s| s.to_string()).collect(),
        FieldValue::Json(Value::Array(values)) => values
            .iter()
            .map(|v| {
                v.as_str().map(|s| s.to_string()).ok_or_else(|| {
                    Error::Validation(format!("{} entries must be strings", label))
                })
            })
            .collect::<Result<_>>()?,
        FieldValue::Json(_) => {
            return Err(Error::Validation(format!(
                "{} must be a list or comma-separated text",
                label
            )))
        }
    };

    items
        .into_iter()
        .map(|item| {
            let item = item.trim().to_string();
            if item.is_empty() {
                Err(Error::Validation(format!("{} contains an empty entry", label)))
            } else {
                Ok(item)
            }
        })
        .collect()
}
