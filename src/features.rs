//! The fixed diagnostic measurement record submitted for classification.
//!
//! The field set is known at build time and never grows or shrinks at
//! runtime; only values change. Values stay exactly as the user typed them —
//! the prediction service is the arbiter of numeric validity.

use serde_json::{Map, Number, Value};

/// Training-label artifact carried in the submitted record. It plays no role
/// in inference but the service contract expects it to be present.
pub const LABEL_ARTIFACT_FIELD: &str = "benign_0__mal_1";

/// Canonical field names and default values, in form order. The defaults are
/// one representative measurement set.
const CANONICAL_FIELDS: [(&str, &str); 31] = [
    ("mean radius", "14.5"),
    ("mean texture", "19.2"),
    ("mean perimeter", "94.3"),
    ("mean area", "616.5"),
    ("mean smoothness", "0.09"),
    ("mean compactness", "0.127"),
    ("mean concavity", "0.124"),
    ("mean concave points", "0.091"),
    ("mean symmetry", "0.181"),
    ("mean fractal dimension", "0.062"),
    ("radius error", "0.58"),
    ("texture error", "1.25"),
    ("perimeter error", "3.41"),
    ("area error", "33.9"),
    ("smoothness error", "0.005"),
    ("compactness error", "0.008"),
    ("concavity error", "0.019"),
    ("concave points error", "0.017"),
    ("symmetry error", "0.021"),
    ("fractal dimension error", "0.003"),
    ("worst radius", "18.1"),
    ("worst texture", "25.3"),
    ("worst perimeter", "123.0"),
    ("worst area", "951.0"),
    ("worst smoothness", "0.135"),
    ("worst compactness", "0.256"),
    ("worst concavity", "0.31"),
    ("worst concave points", "0.265"),
    ("worst symmetry", "0.223"),
    ("worst fractal dimension", "0.092"),
    (LABEL_ARTIFACT_FIELD, "0"),
];

/// One editable measurement field.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureField {
    /// Canonical field name used as the payload key.
    pub name: &'static str,
    /// Raw value as entered. Not coerced or clamped.
    pub value: String,
}

impl FeatureField {
    /// Human-facing label: the canonical name with underscores as spaces.
    pub fn label(&self) -> String {
        self.name.replace('_', " ")
    }
}

/// Ordered fixed-key record of diagnostic measurements.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureRecord {
    fields: Vec<FeatureField>,
}

impl Default for FeatureRecord {
    fn default() -> Self {
        Self {
            fields: CANONICAL_FIELDS
                .iter()
                .map(|&(name, value)| FeatureField {
                    name,
                    value: value.to_string(),
                })
                .collect(),
        }
    }
}

impl FeatureRecord {
    /// Number of fields in the record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the record has no fields. Never the case for the canonical set.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate the fields in form order.
    pub fn fields(&self) -> impl Iterator<Item = &FeatureField> {
        self.fields.iter()
    }

    /// Mutable iteration for binding text edits directly to values.
    pub fn fields_mut(&mut self) -> impl Iterator<Item = &mut FeatureField> {
        self.fields.iter_mut()
    }

    /// Current raw value for `name`, if the field exists.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }

    /// Replace the value at `name`, leaving every other field untouched.
    ///
    /// The field set is fixed; addressing a name outside it is a programming
    /// error, not a user-facing failure.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        match self.fields.iter_mut().find(|field| field.name == name) {
            Some(field) => field.value = value.into(),
            None => debug_assert!(false, "unknown feature field: {name}"),
        }
    }

    /// Flat JSON object submitted to the prediction service.
    ///
    /// Values that parse as finite numbers are sent as JSON numbers, anything
    /// else verbatim as a string. No validation beyond that.
    pub fn payload(&self) -> Value {
        let mut object = Map::with_capacity(self.fields.len());
        for field in &self.fields {
            object.insert(field.name.to_string(), raw_value_to_json(&field.value));
        }
        Value::Object(object)
    }
}

fn raw_value_to_json(raw: &str) -> Value {
    let trimmed = raw.trim();
    if let Ok(parsed) = trimmed.parse::<f64>() {
        if let Some(number) = Number::from_f64(parsed) {
            return Value::Number(number);
        }
    }
    Value::String(raw.to_string())
}
