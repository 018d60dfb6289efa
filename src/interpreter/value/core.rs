use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::Statement,
    error::RuntimeError,
    interpreter::{
        environment::ScopeRef,
        evaluator::core::EvalResult,
        value::object::ObjectMap,
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible kinds that can appear in expressions,
/// bindings, function returns, and conditions. Object and array contents are
/// shared and mutable in place: aliased values observe each other's
/// mutations, which is part of the documented assignment semantics.
///
/// [`Value::Return`] is internal-only. It carries a `return` out of nested
/// statement blocks to the enclosing function-call boundary and must never
/// leak into a value consumed by user code as data.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The null value.
    Null,
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A string value.
    Str(String),
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// An object: an insertion-ordered map from property names to values.
    Object(Rc<RefCell<ObjectMap>>),
    /// An array of values.
    Array(Rc<RefCell<Vec<Self>>>),
    /// A user-defined function.
    Function(Rc<Function>),
    /// A host-backed callable exposed as an ordinary value.
    NativeFunction(NativeFunction),
    /// The internal return signal; never user-constructible.
    Return(Box<Self>),
}

/// A user-defined function value.
///
/// Named functions come from `fn name(..) { .. }` declarations and may carry
/// a declared return type. Anonymous functions (`name` is `None`) come from
/// function expressions; they skip the return-type check and support the
/// implicit single-expression body.
///
/// Functions do not capture their defining scope. The call scope's parent is
/// the environment active at the call site (dynamic call-site scoping).
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    /// The function's name, or `None` for anonymous functions.
    pub name:        Option<String>,
    /// The parameter names.
    pub params:      Vec<String>,
    /// The body statements.
    pub body:        Vec<Statement>,
    /// The declared return type tag, if any.
    pub return_type: Option<String>,
}

/// The signature shared by all native functions.
///
/// A native receives the evaluated argument values, the environment active at
/// the call site, and the call's source line for error reporting. Natives
/// validate their own argument counts and types.
pub type NativeFn = fn(&[Value], &ScopeRef, usize) -> EvalResult<Value>;

/// A host-backed callable.
///
/// Native functions are ordinary values installed in the global scope at
/// bootstrap; calling one routes to the host instead of through user-function
/// invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct NativeFunction {
    /// The name the native is registered under.
    pub name: &'static str,
    /// The host callable.
    pub func: NativeFn,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(RefCell::new(v)))
    }
}

impl From<ObjectMap> for Value {
    fn from(v: ObjectMap) -> Self {
        Self::Object(Rc::new(RefCell::new(v)))
    }
}

impl Value {
    /// Returns the value's type tag as a string.
    ///
    /// These tags are what declared return types are matched against.
    ///
    /// # Example
    /// ```
    /// use rill::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Number(1.0).type_name(), "number");
    /// assert_eq!(Value::Null.type_name(), "null");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Number(..) => "number",
            Self::Str(..) => "string",
            Self::Bool(..) => "boolean",
            Self::Object(..) => "object",
            Self::Array(..) => "array",
            Self::Function(..) => "function",
            Self::NativeFunction(..) => "native-function",
            Self::Return(..) => "return-value",
        }
    }

    /// Returns whether `self` and `other` carry the same type tag.
    #[must_use]
    pub fn is_same_kind(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Converts the value to an `f64`, or returns a type error.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    pub fn as_number(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            other => Err(RuntimeError::type_error(format!("expected a number, found {}",
                                                          other.type_name()),
                                                  line)),
        }
    }

    /// Converts the value to `bool`, or returns a type error.
    ///
    /// Used for conditions in `if`/`while` statements and logical operations.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    pub fn as_bool(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            other => Err(RuntimeError::type_error(format!("expected a boolean, found {}",
                                                          other.type_name()),
                                                  line)),
        }
    }

    /// Returns the array storage behind the value, or a type error.
    ///
    /// The returned handle aliases the original: mutations through it are
    /// visible to every other holder.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    pub fn as_array(&self, line: usize) -> EvalResult<Rc<RefCell<Vec<Self>>>> {
        match self {
            Self::Array(elements) => Ok(Rc::clone(elements)),
            other => Err(RuntimeError::type_error(format!("expected an array, found {}",
                                                          other.type_name()),
                                                  line)),
        }
    }

    /// Returns `true` if the value is the internal return signal.
    #[must_use]
    pub const fn is_return(&self) -> bool {
        matches!(self, Self::Return(..))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Object(properties) => {
                write!(f, "{{")?;
                for (index, (key, value)) in properties.borrow().iter().enumerate() {
                    if index > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, " {key}: {value}")?;
                }
                write!(f, " }}")
            },
            Self::Array(elements) => {
                write!(f, "[")?;
                for (index, value) in elements.borrow().iter().enumerate() {
                    if index > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, " {value}")?;
                }
                write!(f, " ]")
            },
            Self::Function(..) => write!(f, "Function()"),
            Self::NativeFunction(..) => write!(f, "Native Function()"),
            Self::Return(value) => write!(f, "Return Value: {value}"),
        }
    }
}
