use std::rc::Rc;

use crate::{
    interpreter::{engine::core::Interpreter, evaluator::core::EvalResult},
    util::num::{f64_to_i64_truncating, i64_to_f64, parse_float_prefix, parse_int_prefix},
};

/// Signature of a host-provided function.
///
/// A native receives the interpreter, reads its arguments through
/// [`Interpreter::arg`] and friends, and reports failure through the returned
/// error. Any error aborts the current run.
pub type NativeFn = fn(&mut Interpreter) -> EvalResult<()>;

/// Display string of every function value.
pub const FUNCTION_DISPLAY: &str = "(func)";
/// Display string of a slot that was never assigned.
pub const UNDEFINED_DISPLAY: &str = "(undefined)";

/// A function implemented by the host.
///
/// The name is the one the native was registered under; block keywords are
/// recognised by it.
#[derive(Debug, Clone)]
pub struct Native {
    name: Rc<str>,
    func: Option<NativeFn>,
}

impl Native {
    /// Creates a native with an implementation.
    #[must_use]
    pub fn new(name: &str, func: NativeFn) -> Self {
        Self { name: name.into(),
               func: Some(func), }
    }

    /// Creates a native that is declared but has no implementation yet.
    #[must_use]
    pub fn declared(name: &str) -> Self {
        Self { name: name.into(),
               func: None, }
    }

    /// The name the native was registered under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The host implementation, if any.
    #[must_use]
    pub const fn func(&self) -> Option<NativeFn> {
        self.func
    }
}

/// Something a line can call.
#[derive(Debug, Clone)]
pub enum Callable {
    /// Host code.
    Native(Native),
    /// A script-defined function: the program-store index of its `func` line.
    Script(usize),
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Native(a), Self::Native(b)) => a.name == b.name,
            (Self::Script(a), Self::Script(b)) => a == b,
            _ => false,
        }
    }
}

/// The kind tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// A slot that was created but never assigned.
    Undefined,
    /// Character data.
    String,
    /// 64-bit signed integer.
    Integer,
    /// Double precision float.
    Float,
    /// A native or script-defined function.
    Function,
    /// Raw text of a parenthesized expression, evaluated when referenced.
    DeferredExpr,
}

impl Kind {
    /// The type name reported by the `tp` native.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Function => "func",
            Self::Undefined | Self::DeferredExpr => "unknown",
        }
    }
}

/// Payload of a [`Value`].
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// No value yet.
    Undefined,
    /// A string.
    Str(String),
    /// An integer.
    Integer(i64),
    /// A float.
    Float(f64),
    /// A callable.
    Function(Callable),
    /// Unevaluated expression text, without the surrounding parentheses.
    Expr(String),
}

/// Represents a runtime value in the interpreter.
///
/// Every value carries its display string, recomputed whenever the payload
/// changes, so printing and concatenation never format on the fly.
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    payload: Payload,
    display: String,
}

impl Default for Value {
    fn default() -> Self {
        Self::undefined()
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::float(v)
    }
}

impl From<Callable> for Value {
    fn from(c: Callable) -> Self {
        Self::with_payload(Payload::Function(c))
    }
}

impl Value {
    fn with_payload(payload: Payload) -> Self {
        let mut value = Self { payload,
                               display: String::new() };
        value.refresh_display();
        value
    }

    /// Creates the value held by a freshly created symbol slot.
    #[must_use]
    pub fn undefined() -> Self {
        Self::with_payload(Payload::Undefined)
    }

    /// Creates a string from the text between the quotes of a literal.
    ///
    /// The two-character sequence `\n` becomes a line break. Every other
    /// character, including other backslash sequences, is kept verbatim.
    ///
    /// # Example
    /// ```
    /// use linterp::interpreter::value::core::Value;
    ///
    /// let v = Value::from_literal(r"a\nb\t");
    /// assert_eq!(v.display(), "a\nb\\t");
    /// ```
    #[must_use]
    pub fn from_literal(raw: &str) -> Self {
        Self::string(raw.replace("\\n", "\n"))
    }

    /// Creates a string value as-is.
    #[must_use]
    pub fn string(s: String) -> Self {
        Self::with_payload(Payload::Str(s))
    }

    /// Creates an integer value.
    #[must_use]
    pub fn integer(n: i64) -> Self {
        Self::with_payload(Payload::Integer(n))
    }

    /// Creates a float value.
    #[must_use]
    pub fn float(f: f64) -> Self {
        Self::with_payload(Payload::Float(f))
    }

    /// Creates a function value backed by host code.
    #[must_use]
    pub fn native(native: Native) -> Self {
        Callable::Native(native).into()
    }

    /// Creates a function value that enters the program at `pc`.
    #[must_use]
    pub fn script(pc: usize) -> Self {
        Callable::Script(pc).into()
    }

    /// Creates a deferred expression from its raw text.
    #[must_use]
    pub fn deferred(text: String) -> Self {
        Self::with_payload(Payload::Expr(text))
    }

    /// The payload.
    #[must_use]
    pub const fn payload(&self) -> &Payload {
        &self.payload
    }

    /// The kind tag.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self.payload {
            Payload::Undefined => Kind::Undefined,
            Payload::Str(_) => Kind::String,
            Payload::Integer(_) => Kind::Integer,
            Payload::Float(_) => Kind::Float,
            Payload::Function(_) => Kind::Function,
            Payload::Expr(_) => Kind::DeferredExpr,
        }
    }

    /// The cached display string.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the callable if the value is a function.
    #[must_use]
    pub const fn as_callable(&self) -> Option<&Callable> {
        match &self.payload {
            Payload::Function(c) => Some(c),
            _ => None,
        }
    }

    /// Returns the expression text if the value is a deferred expression.
    #[must_use]
    pub fn as_expr(&self) -> Option<&str> {
        match &self.payload {
            Payload::Expr(text) => Some(text),
            _ => None,
        }
    }

    /// Truth value used by `if` and `while`.
    ///
    /// Zero numbers, empty strings and undefined values are false.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match &self.payload {
            Payload::Undefined => false,
            Payload::Integer(n) => *n != 0,
            Payload::Float(f) => *f != 0.0,
            Payload::Str(s) | Payload::Expr(s) => !s.is_empty(),
            Payload::Function(_) => true,
        }
    }

    /// Converts integers and floats to strings in place.
    ///
    /// The string takes the number's display form. Other kinds are left
    /// unchanged.
    ///
    /// # Example
    /// ```
    /// use linterp::interpreter::value::core::{Kind, Value};
    ///
    /// let mut v = Value::float(1.5);
    /// v.convert_to_string();
    ///
    /// assert_eq!(v.kind(), Kind::String);
    /// assert_eq!(v.display(), "1.500000");
    /// ```
    pub fn convert_to_string(&mut self) {
        if matches!(self.payload, Payload::Integer(_) | Payload::Float(_)) {
            self.payload = Payload::Str(std::mem::take(&mut self.display));
            self.refresh_display();
        }
    }

    /// Converts strings and floats to integers in place.
    ///
    /// Strings read their leading integer (`0` when there is none); floats
    /// truncate toward zero. Other kinds are left unchanged.
    pub fn convert_to_integer(&mut self) {
        let n = match &self.payload {
            Payload::Str(s) => parse_int_prefix(s),
            Payload::Float(f) => f64_to_i64_truncating(*f),
            _ => return,
        };
        self.payload = Payload::Integer(n);
        self.refresh_display();
    }

    /// Converts strings and integers to floats in place.
    ///
    /// Strings read their leading number (`0.0` when there is none). Other
    /// kinds are left unchanged.
    ///
    /// # Example
    /// ```
    /// use linterp::interpreter::value::core::Value;
    ///
    /// let mut v = Value::float(2.25);
    /// v.convert_to_string();
    /// v.convert_to_float();
    ///
    /// assert_eq!(v, Value::float(2.25));
    /// ```
    pub fn convert_to_float(&mut self) {
        let f = match &self.payload {
            Payload::Str(s) => parse_float_prefix(s),
            Payload::Integer(n) => i64_to_f64(*n),
            _ => return,
        };
        self.payload = Payload::Float(f);
        self.refresh_display();
    }

    fn refresh_display(&mut self) {
        self.display = match &self.payload {
            Payload::Undefined => UNDEFINED_DISPLAY.to_string(),
            Payload::Str(s) | Payload::Expr(s) => s.clone(),
            Payload::Integer(n) => n.to_string(),
            Payload::Float(f) => format!("{f:.6}"),
            Payload::Function(_) => FUNCTION_DISPLAY.to_string(),
        };
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display)
    }
}
