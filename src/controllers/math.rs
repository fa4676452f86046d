//! Square root controller
//!
//! `/app/sqrt?number=16` answers with the square root of the number.
//! The parameter is declared as a string and parsed inside the handler:
//! a negative or malformed number produces an error message in the
//! response body, never a handler fault.

use std::sync::Arc;

use crate::routing::binder::{ParamSpec, Value};
use crate::routing::registry::{Controller, HandlerResult, RouteDef};

pub struct SqrtService;

impl SqrtService {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[allow(clippy::unused_self)]
    fn calculate_square_root(&self, args: &[Value]) -> HandlerResult {
        let number = args
            .first()
            .and_then(Value::as_str)
            .ok_or("missing `number` argument")?;

        match number.parse::<f64>() {
            Ok(num) if num < 0.0 => Ok("Error: El número no puede ser negativo.".to_owned()),
            Ok(num) => Ok(format!(
                "La raíz cuadrada de {} es {}",
                format_double(num),
                format_double(num.sqrt())
            )),
            Err(_) => Ok("Error: Por favor ingrese un número válido.".to_owned()),
        }
    }
}

/// Render a double with at least one decimal place, so `16` reads as
/// `16.0` and its root as `4.0`.
fn format_double(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

impl Default for SqrtService {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for SqrtService {
    fn name(&self) -> &'static str {
        "SqrtService"
    }

    fn routes(self: Arc<Self>) -> Vec<RouteDef> {
        let sqrt = self;
        vec![RouteDef {
            path: "/app/sqrt",
            params: vec![ParamSpec::string("number", "25")],
            handler: Arc::new(move |args| sqrt.calculate_square_root(args)),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(raw: &str) -> String {
        SqrtService::new()
            .calculate_square_root(&[Value::Str(raw.to_owned())])
            .unwrap()
    }

    #[test]
    fn test_sqrt_of_sixteen() {
        let body = call("16");
        assert!(body.contains("16.0"), "body: {body}");
        assert!(body.contains("4.0"), "body: {body}");
    }

    #[test]
    fn test_default_is_twenty_five() {
        let body = call("25");
        assert!(body.contains("5.0"), "body: {body}");
    }

    #[test]
    fn test_negative_number_message() {
        let body = call("-5");
        assert!(body.contains("negativo"), "body: {body}");
    }

    #[test]
    fn test_malformed_number_message() {
        let body = call("abc");
        assert!(body.contains("válido"), "body: {body}");
    }

    #[test]
    fn test_fractional_result() {
        let body = call("2");
        assert!(body.contains("2.0"), "body: {body}");
        assert!(body.contains("1.41"), "body: {body}");
    }

    #[test]
    fn test_format_double() {
        assert_eq!(format_double(16.0), "16.0");
        assert_eq!(format_double(4.0), "4.0");
        assert_eq!(format_double(2.25), "2.25");
    }
}
