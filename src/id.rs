use std::fmt;

use async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, Value};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Row identifier, exposed to GraphQL as the `UUID` scalar.
///
/// Literal arguments that do not parse as a UUID are rejected while the
/// document is validated, so no resolver ever sees a malformed id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct Id(pub Uuid);

impl Id {
    pub fn new_v4() -> Self {
        Id(Uuid::new_v4())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for Id {
    fn from(uuid: Uuid) -> Self {
        Id(uuid)
    }
}

#[Scalar(name = "UUID")]
impl ScalarType for Id {
    fn parse(value: Value) -> InputValueResult<Self> {
        match &value {
            Value::String(s) => Ok(Id(Uuid::parse_str(s)?)),
            _ => Err(InputValueError::expected_type(value)),
        }
    }

    fn is_valid(value: &Value) -> bool {
        matches!(value, Value::String(s) if Uuid::parse_str(s).is_ok())
    }

    fn to_value(&self) -> Value {
        Value::String(self.0.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_uuid() {
        let raw = "7c9e6679-7425-40de-944b-e07fc1f90ae7";
        let id = Id::parse(Value::String(raw.to_string())).unwrap();
        assert_eq!(id.to_string(), raw);
        assert_eq!(id.to_value(), Value::String(raw.to_string()));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(!Id::is_valid(&Value::String("not-a-uuid".to_string())));
        assert!(!Id::is_valid(&Value::Number(7.into())));
        assert!(Id::parse(Value::String("1234".to_string())).is_err());
    }
}
