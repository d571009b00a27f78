//! Shape check for the current-weather payload.
//!
//! The endpoint returns far more than we use; only `name` and the three
//! temperatures under `main` are required. Every mismatch is collected so the
//! log line names all offending fields at once.

use serde_json::Value;

use crate::{
    error::{SchemaError, Violation},
    model::{MainReadings, WeatherResult},
};

pub fn validate_weather(payload: &Value) -> Result<WeatherResult, SchemaError> {
    let mut violations = Vec::new();

    let Some(root) = payload.as_object() else {
        violations.push(violation("$", "object", Some(payload)));
        return Err(SchemaError { violations });
    };

    let name = match root.get("name") {
        Some(Value::String(s)) => Some(s.clone()),
        other => {
            violations.push(violation("name", "string", other));
            None
        }
    };

    let main = match root.get("main") {
        Some(Value::Object(main)) => {
            let mut number = |key: &str| match main.get(key).and_then(Value::as_f64) {
                Some(n) => Some(n),
                None => {
                    let path = format!("main.{key}");
                    violations.push(violation(&path, "number", main.get(key)));
                    None
                }
            };

            let temp = number("temp");
            let temp_min = number("temp_min");
            let temp_max = number("temp_max");

            match (temp, temp_min, temp_max) {
                (Some(temp), Some(temp_min), Some(temp_max)) => Some(MainReadings {
                    temp,
                    temp_max,
                    temp_min,
                }),
                _ => None,
            }
        }
        other => {
            violations.push(violation("main", "object", other));
            None
        }
    };

    match (name, main) {
        (Some(name), Some(main)) if violations.is_empty() => Ok(WeatherResult { name, main }),
        _ => Err(SchemaError { violations }),
    }
}

fn violation(path: &str, expected: &'static str, found: Option<&Value>) -> Violation {
    Violation {
        path: path.to_string(),
        expected,
        found: kind(found).to_string(),
    }
}

fn kind(value: Option<&Value>) -> &'static str {
    match value {
        None => "missing",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_full_openweather_payload() {
        let payload = json!({
            "coord": { "lon": -3.7, "lat": 40.4 },
            "weather": [{ "id": 800, "main": "Clear", "description": "clear sky" }],
            "main": {
                "temp": 295.1,
                "feels_like": 294.8,
                "temp_min": 293.0,
                "temp_max": 297.0,
                "pressure": 1015,
                "humidity": 40
            },
            "name": "Madrid",
            "cod": 200
        });

        let result = validate_weather(&payload).expect("payload should validate");
        assert_eq!(result.name, "Madrid");
        assert_eq!(
            result.main,
            MainReadings {
                temp: 295.1,
                temp_max: 297.0,
                temp_min: 293.0,
            }
        );
    }

    #[test]
    fn integer_temperatures_are_numbers() {
        let payload = json!({
            "name": "Oslo",
            "main": { "temp": 270, "temp_min": 268, "temp_max": 272 }
        });
        let result = validate_weather(&payload).expect("integers are numbers");
        assert_eq!(result.main.temp, 270.0);
    }

    #[test]
    fn reports_missing_temp() {
        let payload = json!({
            "name": "Madrid",
            "main": { "temp_min": 293.0, "temp_max": 297.0 }
        });
        let err = validate_weather(&payload).unwrap_err();

        assert_eq!(err.paths(), vec!["main.temp"]);
        assert_eq!(err.violations[0].found, "missing");
    }

    #[test]
    fn reports_every_violated_field() {
        let payload = json!({ "name": 12, "main": { "temp": "hot", "temp_min": null } });
        let err = validate_weather(&payload).unwrap_err();

        assert_eq!(
            err.paths(),
            vec!["name", "main.temp", "main.temp_min", "main.temp_max"]
        );
        assert_eq!(err.violations[1].found, "string");
        assert_eq!(err.violations[2].found, "null");
        assert!(err.to_string().contains("name: expected string, found number"));
    }

    #[test]
    fn rejects_non_object_main() {
        let payload = json!({ "name": "Madrid", "main": [1, 2, 3] });
        let err = validate_weather(&payload).unwrap_err();
        assert_eq!(err.paths(), vec!["main"]);
        assert_eq!(err.violations[0].found, "array");
    }

    #[test]
    fn rejects_non_object_root() {
        let err = validate_weather(&json!([])).unwrap_err();
        assert_eq!(err.paths(), vec!["$"]);
    }
}
