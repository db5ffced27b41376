//! Typed argument extraction
//!
//! [`Call`] is what a native method receives: the receiver, positional
//! arguments and an optional block. Extractors raise `ArgumentError` on a
//! missing or mistyped argument. [`Shape`] checks a whole argument list
//! against a tag string in one go.

use crate::error::{ScriptError, ScriptResult};
use crate::object::{ObjectRef, ProcRef};
use crate::value::Value;

/// One native method invocation
#[derive(Clone, Copy)]
pub struct Call<'a> {
    /// `self`
    pub receiver: &'a Value,
    /// Positional arguments
    pub args: &'a [Value],
    /// Block passed with the call
    pub block: Option<&'a ProcRef>,
}

impl<'a> Call<'a> {
    /// Build a call record
    pub fn new(receiver: &'a Value, args: &'a [Value], block: Option<&'a ProcRef>) -> Self {
        Call {
            receiver,
            args,
            block,
        }
    }

    /// Number of positional arguments
    pub fn argc(&self) -> usize {
        self.args.len()
    }

    /// Positional argument `i`
    pub fn arg(&self, i: usize) -> ScriptResult<&'a Value> {
        self.args.get(i).ok_or_else(|| {
            ScriptError::argument(format!(
                "wrong number of arguments (given {}, expected {})",
                self.args.len(),
                i + 1
            ))
        })
    }

    /// Require exactly `n` arguments
    pub fn expect_arity(&self, n: usize) -> ScriptResult<()> {
        if self.args.len() == n {
            Ok(())
        } else {
            Err(ScriptError::argument(format!(
                "wrong number of arguments (given {}, expected {})",
                self.args.len(),
                n
            )))
        }
    }

    /// Require between `min` and `max` arguments
    pub fn expect_arity_range(&self, min: usize, max: usize) -> ScriptResult<()> {
        let given = self.args.len();
        if (min..=max).contains(&given) {
            Ok(())
        } else {
            Err(ScriptError::argument(format!(
                "wrong number of arguments (given {}, expected {}..{})",
                given, min, max
            )))
        }
    }

    /// Integer argument `i`
    pub fn int(&self, i: usize) -> ScriptResult<i64> {
        let value = self.arg(i)?;
        value.as_int().ok_or_else(|| mistyped(i, "Integer", value))
    }

    /// Float argument `i`; integers are widened
    pub fn float(&self, i: usize) -> ScriptResult<f64> {
        let value = self.arg(i)?;
        value.as_float().ok_or_else(|| mistyped(i, "Float", value))
    }

    /// String argument `i`
    pub fn string(&self, i: usize) -> ScriptResult<&'a str> {
        let value = self.arg(i)?;
        value.as_str().ok_or_else(|| mistyped(i, "String", value))
    }

    /// Boolean argument `i`
    pub fn boolean(&self, i: usize) -> ScriptResult<bool> {
        let value = self.arg(i)?;
        value.as_bool().ok_or_else(|| mistyped(i, "true/false", value))
    }

    /// Instance argument `i`
    pub fn object(&self, i: usize) -> ScriptResult<&'a ObjectRef> {
        let value = self.arg(i)?;
        value.as_object().ok_or_else(|| mistyped(i, "Object", value))
    }

    /// Optional argument `i`
    pub fn opt(&self, i: usize) -> Option<&'a Value> {
        self.args.get(i)
    }

    /// Optional string argument `i`; present but mistyped is an error
    pub fn opt_string(&self, i: usize) -> ScriptResult<Option<&'a str>> {
        match self.args.get(i) {
            None => Ok(None),
            Some(_) => self.string(i).map(Some),
        }
    }

    /// Optional integer argument `i`; present but mistyped is an error
    pub fn opt_int(&self, i: usize) -> ScriptResult<Option<i64>> {
        match self.args.get(i) {
            None => Ok(None),
            Some(_) => self.int(i).map(Some),
        }
    }

    /// The block, required
    pub fn block(&self) -> ScriptResult<&'a ProcRef> {
        self.block
            .ok_or_else(|| ScriptError::argument("no block given"))
    }

    /// The receiver as an instance
    pub fn receiver_object(&self) -> ScriptResult<&'a ObjectRef> {
        self.receiver
            .as_object()
            .ok_or_else(|| ScriptError::type_mismatch("Object", self.receiver.type_name()))
    }
}

fn mistyped(i: usize, expected: &str, got: &Value) -> ScriptError {
    ScriptError::argument(format!(
        "argument {} must be {}, not {}",
        i + 1,
        expected,
        got.type_name()
    ))
}

// ============================================================================
// Argument shapes
// ============================================================================

/// One position of a [`Shape`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgTag {
    /// `i`
    Int,
    /// `f`
    Float,
    /// `s`
    Str,
    /// `b`
    Bool,
    /// `o`: a class instance or a raw data payload
    Object,
}

impl ArgTag {
    /// Decode a tag character
    pub const fn from_char(c: u8) -> Option<ArgTag> {
        match c {
            b'i' => Some(ArgTag::Int),
            b'f' => Some(ArgTag::Float),
            b's' => Some(ArgTag::Str),
            b'b' => Some(ArgTag::Bool),
            b'o' => Some(ArgTag::Object),
            _ => None,
        }
    }

    /// Exact type check, no coercion
    pub fn accepts(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (ArgTag::Int, Value::Int(_))
                | (ArgTag::Float, Value::Float(_))
                | (ArgTag::Str, Value::Str(_))
                | (ArgTag::Bool, Value::Bool(_))
                | (ArgTag::Object, Value::Object(_) | Value::Data(_))
        )
    }
}

/// An exact argument-list shape written as a tag string, e.g. `"iiiis"`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape(&'static str);

impl Shape {
    /// Shape from tag characters
    pub const fn new(tags: &'static str) -> Self {
        Shape(tags)
    }

    /// Tag string
    pub const fn tags(&self) -> &'static str {
        self.0
    }

    /// Number of positions
    pub const fn arity(&self) -> usize {
        self.0.len()
    }

    /// Exact arity and per-position type match
    pub fn matches(&self, args: &[Value]) -> bool {
        args.len() == self.0.len()
            && self
                .0
                .bytes()
                .zip(args)
                .all(|(c, v)| ArgTag::from_char(c).is_some_and(|tag| tag.accepts(v)))
    }
}
