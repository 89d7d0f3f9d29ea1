use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// List payload in the one shape every fetch returns.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultEnvelope<T> {
    pub count: u64,
    pub results: Vec<T>,
    pub loaded: bool,
}

/// Response shapes that cannot be normalized into an envelope.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("expected a list, or an object with a results list, found {found}")]
    UnexpectedShape { found: &'static str },
}

impl<T> Default for ResultEnvelope<T> {
    /// Empty, not-yet-loaded envelope.
    fn default() -> Self {
        ResultEnvelope {
            count: 0,
            results: Vec::new(),
            loaded: false,
        }
    }
}

impl ResultEnvelope<Value> {
    /// Normalizes a raw response body.
    ///
    /// A bare JSON array is the whole result set. An object contributes its
    /// `results` (absent or null means empty) and `count` (absent or
    /// non-numeric means the result length). Every other shape is an error.
    pub fn from_value(value: Value) -> Result<Self, EnvelopeError> {
        let (count, results) = match value {
            Value::Array(items) => (items.len() as u64, items),
            Value::Object(mut fields) => {
                let results = match fields.remove("results") {
                    None | Some(Value::Null) => Vec::new(),
                    Some(Value::Array(items)) => items,
                    Some(other) => {
                        return Err(EnvelopeError::UnexpectedShape {
                            found: json_kind(&other),
                        });
                    }
                };
                let count = fields
                    .get("count")
                    .and_then(Value::as_u64)
                    .unwrap_or(results.len() as u64);
                (count, results)
            }
            other => {
                return Err(EnvelopeError::UnexpectedShape {
                    found: json_kind(&other),
                });
            }
        };

        Ok(ResultEnvelope {
            count,
            results,
            loaded: true,
        })
    }

    /// Converts the raw items into their typed model.
    pub fn into_typed<T: DeserializeOwned>(self) -> Result<ResultEnvelope<T>, serde_json::Error> {
        let results = self
            .results
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()?;

        Ok(ResultEnvelope {
            count: self.count,
            results,
            loaded: self.loaded,
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
