//! Parameter binding module
//!
//! Resolves a handler's declared parameters against the request's query
//! parameters, substituting defaults for absent keys and coercing the
//! resulting strings to the declared target types.
//!
//! Coercion policy: numeric types are strict (a malformed supplied value is
//! a binding error, never silently replaced by the default), while bool is
//! lenient: case-insensitive `"true"` parses to `true` and anything else
//! to `false`. The asymmetry is intentional and kept as a named policy
//! (`LenientBoolCoercion`).

use thiserror::Error;

use super::query::QueryParams;

/// Target type a query parameter is coerced to before handler invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
    Int,
    Double,
    Bool,
}

impl ParamType {
    const fn expected(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "integer",
            Self::Double => "double",
            Self::Bool => "bool",
        }
    }
}

/// Declared parameter of a handler: bind name, default value and target
/// type. Created at registration time and immutable thereafter.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    pub name: &'static str,
    pub default: &'static str,
    pub ty: ParamType,
}

impl ParamSpec {
    pub const fn string(name: &'static str, default: &'static str) -> Self {
        Self {
            name,
            default,
            ty: ParamType::String,
        }
    }

    pub const fn int(name: &'static str, default: &'static str) -> Self {
        Self {
            name,
            default,
            ty: ParamType::Int,
        }
    }

    pub const fn double(name: &'static str, default: &'static str) -> Self {
        Self {
            name,
            default,
            ty: ParamType::Double,
        }
    }

    pub const fn boolean(name: &'static str, default: &'static str) -> Self {
        Self {
            name,
            default,
            ty: ParamType::Bool,
        }
    }
}

/// A bound argument value handed to a handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Double(f64),
    Bool(bool),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub const fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

/// Numeric coercion failure for a parameter. Carries the offending
/// parameter name so the dispatcher can report it distinctly from
/// "route not found".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid value `{value}` for parameter `{name}`: expected {expected}")]
pub struct BindError {
    pub name: String,
    pub value: String,
    pub expected: &'static str,
}

/// Produce an ordered argument list for the given parameter specs, one
/// entry per spec in declaration order. Absent keys fall back to the
/// spec's default before coercion.
pub fn bind(specs: &[ParamSpec], params: &QueryParams) -> Result<Vec<Value>, BindError> {
    specs
        .iter()
        .map(|spec| {
            let raw = params
                .get(spec.name)
                .map_or(spec.default, String::as_str);
            coerce(spec, raw)
        })
        .collect()
}

fn coerce(spec: &ParamSpec, raw: &str) -> Result<Value, BindError> {
    match spec.ty {
        ParamType::String => Ok(Value::Str(raw.to_owned())),
        ParamType::Int => raw
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| bind_error(spec, raw)),
        ParamType::Double => raw
            .parse::<f64>()
            .map(Value::Double)
            .map_err(|_| bind_error(spec, raw)),
        // LenientBoolCoercion: unrecognized text is false, never an error
        ParamType::Bool => Ok(Value::Bool(raw.eq_ignore_ascii_case("true"))),
    }
}

fn bind_error(spec: &ParamSpec, raw: &str) -> BindError {
    BindError {
        name: spec.name.to_owned(),
        value: raw.to_owned(),
        expected: spec.ty.expected(),
    }
}
