//! Field-level validation of JSON request payloads.
//!
//! A [`Payload`] wraps the raw body, hands out typed field values and collects
//! one list of messages per offending field. Resource validators read every
//! field they declare and then call [`Payload::finish`] to build their typed
//! record; any field the validator never asked for is reported as unknown.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

pub const MISSING_FIELD: &str = "Missing data for required field.";
pub const NULL_FIELD: &str = "Field may not be null.";
pub const INVALID_INTEGER: &str = "Not a valid integer.";
pub const INVALID_STRING: &str = "Not a valid string.";
pub const INVALID_NUMBER: &str = "Not a valid number.";
pub const SPECIAL_NUMBER: &str = "Special numeric values (nan or infinity) are not permitted.";
pub const UNKNOWN_FIELD: &str = "Unknown field.";
pub const INVALID_INPUT: &str = "Invalid input type.";

/// Key used for errors that concern the payload as a whole.
pub const SCHEMA_KEY: &str = "_schema";

/// Field name → messages. Serializes as a plain JSON object with sorted keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Errors describing the payload itself rather than one field.
    pub fn schema(message: &str) -> Self {
        let mut errors = Self::new();
        errors.add(SCHEMA_KEY, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_owned())
            .or_default()
            .push(message.to_owned());
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<&str> = self.fields().collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Presence {
    Required,
    Optional,
}

pub struct Payload<'a> {
    fields: &'a Map<String, Value>,
    declared: Vec<&'static str>,
    errors: FieldErrors,
}

impl<'a> Payload<'a> {
    /// Fails with a `_schema` error unless the body is a JSON object.
    pub fn parse(body: &'a Value) -> Result<Self, FieldErrors> {
        match body {
            Value::Object(fields) => Ok(Self {
                fields,
                declared: Vec::new(),
                errors: FieldErrors::new(),
            }),
            _ => Err(FieldErrors::schema(INVALID_INPUT)),
        }
    }

    pub fn required_int(&mut self, name: &'static str) -> Option<i32> {
        self.read(name, Presence::Required, coerce_int)
    }

    pub fn optional_int(&mut self, name: &'static str) -> Option<i32> {
        self.read(name, Presence::Optional, coerce_int)
    }

    pub fn required_string(&mut self, name: &'static str) -> Option<String> {
        self.read(name, Presence::Required, coerce_string)
    }

    pub fn required_float(&mut self, name: &'static str) -> Option<f64> {
        self.read(name, Presence::Required, coerce_float)
    }

    /// Report unknown fields and, if nothing was rejected, build the record.
    ///
    /// `build` sees `Some` for every required field once no errors were
    /// recorded, so it can use `?` on them.
    pub fn finish<T>(mut self, build: impl FnOnce() -> Option<T>) -> Result<T, FieldErrors> {
        let unknown: Vec<&String> = self
            .fields
            .keys()
            .filter(|key| !self.declared.iter().any(|name| *name == key.as_str()))
            .collect();
        for key in unknown {
            self.errors.add(key, UNKNOWN_FIELD);
        }
        if !self.errors.is_empty() {
            return Err(self.errors);
        }
        build().ok_or_else(|| FieldErrors::schema(INVALID_INPUT))
    }

    fn read<T>(
        &mut self,
        name: &'static str,
        presence: Presence,
        coerce: fn(&Value) -> Result<T, &'static str>,
    ) -> Option<T> {
        self.declared.push(name);
        match self.fields.get(name) {
            None => {
                if presence == Presence::Required {
                    self.errors.add(name, MISSING_FIELD);
                }
                None
            }
            Some(Value::Null) => {
                self.errors.add(name, NULL_FIELD);
                None
            }
            Some(value) => match coerce(value) {
                Ok(v) => Some(v),
                Err(message) => {
                    self.errors.add(name, message);
                    None
                }
            },
        }
    }
}

fn coerce_int(value: &Value) -> Result<i32, &'static str> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return i32::try_from(i).map_err(|_| INVALID_INTEGER);
            }
            // Floats truncate toward zero.
            match n.as_f64().map(f64::trunc) {
                Some(f) if f >= f64::from(i32::MIN) && f <= f64::from(i32::MAX) => Ok(f as i32),
                _ => Err(INVALID_INTEGER),
            }
        }
        Value::String(s) => s.trim().parse::<i32>().map_err(|_| INVALID_INTEGER),
        _ => Err(INVALID_INTEGER),
    }
}

fn coerce_string(value: &Value) -> Result<String, &'static str> {
    match value {
        Value::String(s) => Ok(s.clone()),
        _ => Err(INVALID_STRING),
    }
}

fn coerce_float(value: &Value) -> Result<f64, &'static str> {
    let parsed = match value {
        Value::Number(n) => n.as_f64().ok_or(INVALID_NUMBER)?,
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| INVALID_NUMBER)?,
        _ => return Err(INVALID_NUMBER),
    };
    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(SPECIAL_NUMBER)
    }
}
