use std::fmt::Display;

/// Characters that must be escaped with a backslash in a tag value.
const TAG_VALUE_ESCAPES: [char; 3] = [',', '=', ' '];

/// Escape a value for use as a tag value.
///
/// Commas, equals signs and spaces are each prefixed with a backslash. Backslashes that are
/// already present are left alone.
pub fn tag_value<V: Display>(value: V) -> String {
    let value = value.to_string();
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if TAG_VALUE_ESCAPES.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Render a value for use as a field value.
///
/// Text is always surrounded by unescaped double quotes, with any inner double quotes escaped.
/// Everything else is written in its lowercased string form, so booleans become `true`/`false`.
pub fn field_value<V: Into<FieldValue>>(value: V) -> String {
    match value.into() {
        FieldValue::Text(s) => format!("\"{}\"", s.replace('"', "\\\"")),
        FieldValue::Bool(b) => b.to_string(),
        FieldValue::Int(i) => i.to_string(),
        FieldValue::UInt(u) => u.to_string(),
        FieldValue::Float(f) => float_literal(f),
    }
}

/// Render a float as a line protocol number.
///
/// Debug keeps the fractional part on whole numbers, `1.0` rather than `1`.
pub(crate) fn float_literal(value: f64) -> String {
    format!("{value:?}").to_lowercase()
}

/// A scalar that can be written as a line protocol field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
}

macro_rules! field_value_from {
    ($variant:ident, $target:ty, $($t:ty),+) => {
        $(
            impl From<$t> for FieldValue {
                fn from(value: $t) -> Self {
                    FieldValue::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

field_value_from!(Bool, bool, bool);
field_value_from!(Int, i64, i8, i16, i32, i64);
field_value_from!(UInt, u64, u8, u16, u32, u64);
field_value_from!(Float, f64, f32, f64);
field_value_from!(Text, String, String, &str, &String);

/// Builds a single line protocol record.
///
/// Tags are sorted by their full `key=value` text when the line is built. Fields are written in
/// the order they were added. No timestamp is written, the receiver assigns one.
#[derive(Debug, Clone)]
pub struct LineBuilder {
    measurement: String,
    tags: Vec<String>,
    fields: Vec<String>,
}

impl LineBuilder {
    pub fn new(measurement: impl Into<String>) -> Self {
        Self {
            measurement: measurement.into(),
            tags: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Add a tag, escaping the value with [tag_value].
    pub fn tag<V: Display>(self, key: &str, value: V) -> Self {
        self.raw_tag(format!("{key}={}", tag_value(value)))
    }

    /// Add a tag that is already in `key=value` form. Nothing is escaped.
    pub fn raw_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add a field, rendering the value with [field_value].
    pub fn field<V: Into<FieldValue>>(self, key: &str, value: V) -> Self {
        self.raw_field(key, field_value(value))
    }

    /// Add a field whose value is written exactly as given.
    ///
    /// Used for numeric values that are already valid line protocol literals.
    pub fn raw_field<V: Display>(mut self, key: &str, value: V) -> Self {
        self.fields.push(format!("{key}={value}"));
        self
    }

    pub fn build(mut self) -> String {
        self.tags.sort();

        let mut line = self.measurement;
        for tag in &self.tags {
            line.push(',');
            line.push_str(tag);
        }
        line.push(' ');
        line.push_str(&self.fields.join(","));

        line
    }
}
