//! Declarative input schemas and argument validation.
//!
//! A schema is an ordered list of [`ParamSpec`]s. Validation checks presence, coerces values to
//! the declared type, enforces numeric bounds and fills in defaults, producing the argument map a
//! tool receives.
//!
//! ```rust
//! use rtooling::{InputSchema, ParamSpec};
//! use serde_json::{Map, json};
//!
//! let schema = InputSchema::new()
//!     .param(ParamSpec::integer("limit").with_default(json!(10)).with_minimum(1))
//!     .param(ParamSpec::string("query").required());
//!
//! let mut args = Map::new();
//! args.insert("query".to_string(), json!("pumps"));
//! args.insert("limit".to_string(), json!("3"));
//!
//! let validated = schema.validate(&args).expect("arguments should validate");
//! assert_eq!(validated["limit"], json!(3));
//! assert_eq!(schema.to_json_schema()["required"], json!(["query"]));
//! ```

use serde::{Serialize, Serializer};
use serde_json::{Map, Value, json};

use crate::ToolError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    Integer,
    Number,
    String,
    Boolean,
}

impl ParamType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    pub name: String,
    pub param_type: ParamType,
    pub required: bool,
    pub default: Option<Value>,
    pub description: String,
    pub minimum: Option<i64>,
    pub maximum: Option<i64>,
}

impl ParamSpec {
    pub fn new(name: impl Into<String>, param_type: ParamType) -> Self {
        Self {
            name: name.into(),
            param_type,
            required: false,
            default: None,
            description: String::new(),
            minimum: None,
            maximum: None,
        }
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, ParamType::Integer)
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, ParamType::Number)
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, ParamType::String)
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, ParamType::Boolean)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_minimum(mut self, minimum: i64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    pub fn with_maximum(mut self, maximum: i64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    fn to_json_schema(&self) -> Value {
        let mut property = Map::new();
        property.insert("type".to_string(), json!(self.param_type.as_str()));
        if !self.description.is_empty() {
            property.insert("description".to_string(), json!(self.description));
        }
        if let Some(default) = &self.default {
            property.insert("default".to_string(), default.clone());
        }
        if let Some(minimum) = self.minimum {
            property.insert("minimum".to_string(), json!(minimum));
        }
        if let Some(maximum) = self.maximum {
            property.insert("maximum".to_string(), json!(maximum));
        }
        Value::Object(property)
    }

    fn coerce(&self, value: &Value) -> Result<Value, ToolError> {
        let coerced = match self.param_type {
            ParamType::Integer => {
                json!(coerce_integer(value).map_err(|reason| self.reject(reason))?)
            }
            ParamType::Number => {
                json!(coerce_number(value).map_err(|reason| self.reject(reason))?)
            }
            ParamType::String => match value {
                Value::String(text) => Value::String(text.clone()),
                other => {
                    return Err(self.reject(format!("expected a string, got {}", kind_of(other))));
                }
            },
            ParamType::Boolean => match value {
                Value::Bool(flag) => Value::Bool(*flag),
                Value::String(text) if text == "true" => Value::Bool(true),
                Value::String(text) if text == "false" => Value::Bool(false),
                other => {
                    return Err(self.reject(format!("expected a boolean, got {}", kind_of(other))));
                }
            },
        };

        self.check_bounds(&coerced)?;
        Ok(coerced)
    }

    fn check_bounds(&self, value: &Value) -> Result<(), ToolError> {
        let Some(number) = value.as_f64() else {
            return Ok(());
        };

        if let Some(minimum) = self.minimum
            && number < minimum as f64
        {
            return Err(self.reject(format!("must be >= {minimum}")));
        }

        if let Some(maximum) = self.maximum
            && number > maximum as f64
        {
            return Err(self.reject(format!("must be <= {maximum}")));
        }

        Ok(())
    }

    fn reject(&self, reason: impl Into<String>) -> ToolError {
        ToolError::invalid_field(&self.name, reason)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSchema {
    params: Vec<ParamSpec>,
}

impl InputSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, spec: ParamSpec) -> Self {
        self.params.push(spec);
        self
    }

    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    pub fn required_names(&self) -> Vec<&str> {
        self.params
            .iter()
            .filter(|spec| spec.required)
            .map(|spec| spec.name.as_str())
            .collect()
    }

    pub fn to_json_schema(&self) -> Value {
        let properties = self
            .params
            .iter()
            .map(|spec| (spec.name.clone(), spec.to_json_schema()))
            .collect::<Map<String, Value>>();

        json!({
            "type": "object",
            "properties": properties,
            "required": self.required_names(),
        })
    }

    /// Validates `args` and returns the coerced argument map.
    ///
    /// Keys not declared in the schema are dropped. `null` counts as absent.
    pub fn validate(&self, args: &Map<String, Value>) -> Result<Map<String, Value>, ToolError> {
        let mut validated = Map::new();

        for spec in &self.params {
            match args.get(&spec.name).filter(|value| !value.is_null()) {
                Some(value) => {
                    validated.insert(spec.name.clone(), spec.coerce(value)?);
                }
                None if spec.required => {
                    return Err(spec.reject("missing required parameter"));
                }
                None => {
                    if let Some(default) = &spec.default {
                        validated.insert(spec.name.clone(), default.clone());
                    }
                }
            }
        }

        Ok(validated)
    }
}

impl Serialize for InputSchema {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json_schema().serialize(serializer)
    }
}

fn coerce_integer(value: &Value) -> Result<i64, String> {
    match value {
        Value::Number(number) => {
            if let Some(integer) = number.as_i64() {
                return Ok(integer);
            }
            match number.as_f64() {
                Some(float)
                    if float.is_finite() && float.fract() == 0.0 && float.abs() < i64::MAX as f64 =>
                {
                    Ok(float as i64)
                }
                _ => Err(format!("expected an integer, got {number}")),
            }
        }
        Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("expected an integer, got string \"{text}\"")),
        other => Err(format!("expected an integer, got {}", kind_of(other))),
    }
}

fn coerce_number(value: &Value) -> Result<f64, String> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        other => return Err(format!("expected a number, got {}", kind_of(other))),
    };

    parsed
        .filter(|number| number.is_finite())
        .ok_or_else(|| format!("expected a number, got {value}"))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToolErrorKind;

    fn paging_schema() -> InputSchema {
        InputSchema::new()
            .param(
                ParamSpec::integer("top")
                    .with_default(json!(5))
                    .with_minimum(1)
                    .with_maximum(200),
            )
            .param(ParamSpec::string("select"))
    }

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().expect("test args must be an object")
    }

    #[test]
    fn defaults_fill_missing_and_null_values() {
        let schema = paging_schema();

        let from_empty = schema.validate(&Map::new()).expect("empty args validate");
        assert_eq!(from_empty.get("top"), Some(&json!(5)));
        assert!(!from_empty.contains_key("select"));

        let from_null = schema
            .validate(&args(json!({ "top": null })))
            .expect("null counts as absent");
        assert_eq!(from_null.get("top"), Some(&json!(5)));
    }

    #[test]
    fn integers_coerce_from_strings_and_integral_floats() {
        let schema = paging_schema();

        let from_string = schema
            .validate(&args(json!({ "top": "7" })))
            .expect("numeric string");
        assert_eq!(from_string["top"], json!(7));

        let from_float = schema
            .validate(&args(json!({ "top": 3.0 })))
            .expect("integral float");
        assert_eq!(from_float["top"], json!(3));
    }

    #[test]
    fn non_numeric_and_out_of_range_integers_are_rejected() {
        let schema = paging_schema();

        let rejected = [
            json!("abc"),
            json!(-1),
            json!(0),
            json!(201),
            json!(2.5),
            json!(true),
        ];

        for bad in rejected {
            let error = schema
                .validate(&args(json!({ "top": bad.clone() })))
                .expect_err("value should be rejected");
            assert_eq!(error.kind, ToolErrorKind::InvalidArguments, "value {bad}");
            assert_eq!(
                error.detail.as_ref().map(|detail| &detail["field"]),
                Some(&json!("top"))
            );
        }
    }

    #[test]
    fn strings_are_not_coerced_from_numbers() {
        let error = paging_schema()
            .validate(&args(json!({ "select": 12 })))
            .expect_err("number is not a string");
        assert_eq!(error.detail.expect("detail")["field"], json!("select"));
    }

    #[test]
    fn required_parameters_must_be_present() {
        let schema = InputSchema::new().param(ParamSpec::string("query").required());

        let error = schema.validate(&Map::new()).expect_err("missing query");
        assert_eq!(error.kind, ToolErrorKind::InvalidArguments);
        assert!(error.message.contains("missing required parameter"));
    }

    #[test]
    fn unknown_keys_are_dropped() {
        let validated = paging_schema()
            .validate(&args(json!({ "top": 2, "unexpected": "x" })))
            .expect("extra keys are ignored");
        assert!(!validated.contains_key("unexpected"));
    }

    #[test]
    fn booleans_and_numbers_coerce() {
        let schema = InputSchema::new()
            .param(ParamSpec::boolean("active"))
            .param(ParamSpec::number("ratio").with_maximum(1));

        let validated = schema
            .validate(&args(json!({ "active": "true", "ratio": "0.5" })))
            .expect("coercible values");
        assert_eq!(validated["active"], json!(true));
        assert_eq!(validated["ratio"], json!(0.5));

        let error = schema
            .validate(&args(json!({ "ratio": 1.5 })))
            .expect_err("ratio above maximum");
        assert!(error.message.contains("<= 1"));
    }

    #[test]
    fn json_schema_describes_each_parameter() {
        let rendered = paging_schema().to_json_schema();

        assert_eq!(rendered["type"], json!("object"));
        assert_eq!(rendered["required"], json!([]));
        assert_eq!(rendered["properties"]["top"]["type"], json!("integer"));
        assert_eq!(rendered["properties"]["top"]["default"], json!(5));
        assert_eq!(rendered["properties"]["top"]["minimum"], json!(1));
        assert!(rendered["properties"]["select"].get("default").is_none());

        let serialized = serde_json::to_value(paging_schema()).expect("schema serializes");
        assert_eq!(serialized, rendered);
    }
}
