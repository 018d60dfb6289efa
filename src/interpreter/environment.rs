use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// A shared handle to an [`Environment`].
///
/// Scopes are reference-counted because multiple call scopes are created and
/// discarded independently while the global scope persists. Children hold
/// their parent, never the other way around, so no cycles occur.
pub type ScopeRef = Rc<Environment>;

/// A variable binding: a value plus the constant flag fixed at declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// The bound value.
    pub value:    Value,
    /// Whether the binding was declared with `const`.
    pub constant: bool,
}

/// A lexical scope: a binding table plus an optional parent for outer
/// lookups.
///
/// The global environment is created once and lives for the program's
/// duration. A child environment is created for each function invocation and
/// for each iteration of a loop body or `if` branch, and dropped when that
/// block finishes evaluating. Resolution checks local bindings first, then
/// delegates to the parent; running out of parents is an unresolved
/// identifier error.
#[derive(Debug)]
pub struct Environment {
    parent:    Option<ScopeRef>,
    variables: RefCell<HashMap<String, Variable>>,
}

impl Environment {
    /// Creates a new root environment with no parent.
    #[must_use]
    pub fn new() -> ScopeRef {
        Rc::new(Self { parent:    None,
                       variables: RefCell::new(HashMap::new()), })
    }

    /// Creates a new child environment of `parent`.
    #[must_use]
    pub fn with_parent(parent: &ScopeRef) -> ScopeRef {
        Rc::new(Self { parent:    Some(Rc::clone(parent)),
                       variables: RefCell::new(HashMap::new()), })
    }

    /// Inserts a binding unconditionally, replacing any existing one.
    ///
    /// Bootstrap path used to install the global constants and natives; user
    /// declarations go through [`Environment::declare`].
    pub fn define(&self, name: impl Into<String>, value: Value, constant: bool) {
        self.variables
            .borrow_mut()
            .insert(name.into(), Variable { value, constant });
    }

    /// Declares a new binding in this exact scope.
    ///
    /// Shadowing an outer binding is allowed; re-declaring a name already
    /// bound in this scope is not.
    ///
    /// # Parameters
    /// - `name`: The variable name.
    /// - `value`: The initial value.
    /// - `constant`: Whether the binding is constant.
    /// - `line`: Source line for error reporting.
    ///
    /// # Errors
    /// [`RuntimeError::VariableAlreadyDeclared`] if `name` is already bound
    /// in this scope.
    pub fn declare(&self, name: &str, value: Value, constant: bool, line: usize) -> EvalResult<()> {
        let mut variables = self.variables.borrow_mut();
        if variables.contains_key(name) {
            return Err(RuntimeError::VariableAlreadyDeclared { name: name.to_string(),
                                                               line });
        }
        variables.insert(name.to_string(), Variable { value, constant });
        Ok(())
    }

    /// Assigns a new value to an existing binding, walking the scope chain.
    ///
    /// # Parameters
    /// - `name`: The variable name.
    /// - `value`: The value to write.
    /// - `line`: Source line for error reporting.
    ///
    /// # Returns
    /// The assigned value.
    ///
    /// # Errors
    /// - [`RuntimeError::UnresolvedIdentifier`] if no enclosing scope binds
    ///   `name`.
    /// - [`RuntimeError::ConstReassignment`] if the binding is constant.
    pub fn assign(&self, name: &str, value: Value, line: usize) -> EvalResult<Value> {
        {
            let mut variables = self.variables.borrow_mut();
            if let Some(variable) = variables.get_mut(name) {
                if variable.constant {
                    return Err(RuntimeError::ConstReassignment { name: name.to_string(),
                                                                 line });
                }
                variable.value = value.clone();
                return Ok(value);
            }
        }

        match &self.parent {
            Some(parent) => parent.assign(name, value, line),
            None => Err(RuntimeError::UnresolvedIdentifier { name: name.to_string(),
                                                             line }),
        }
    }

    /// Resolves a name through the scope chain and returns its value.
    ///
    /// # Parameters
    /// - `name`: The variable name.
    /// - `line`: Source line for error reporting.
    ///
    /// # Errors
    /// [`RuntimeError::UnresolvedIdentifier`] if no enclosing scope binds
    /// `name`.
    pub fn lookup(&self, name: &str, line: usize) -> EvalResult<Value> {
        if let Some(variable) = self.variables.borrow().get(name) {
            return Ok(variable.value.clone());
        }

        match &self.parent {
            Some(parent) => parent.lookup(name, line),
            None => Err(RuntimeError::UnresolvedIdentifier { name: name.to_string(),
                                                             line }),
        }
    }
}
