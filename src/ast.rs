/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparison, and the keyword logical
/// operators. Logical operators are deliberately not short-circuiting; both
/// operands are always evaluated before the operator is applied.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`), also string concatenation.
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::And => "and",
            Self::Or => "or",
        };
        write!(f, "{operator}")
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (`not x` or `!x`).
    Not,
}

/// A single key/value entry inside an object literal.
///
/// The value is optional to support the shorthand form `{ key }`, where the
/// value is looked up by the key's name in the current scope at evaluation
/// time.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// The property name.
    pub key:   String,
    /// The property value expression, or `None` for shorthand entries.
    pub value: Option<Expr>,
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers everything that produces a value: literals, identifiers,
/// unary and binary operations, assignments, object and array literals,
/// spreads, member access, calls, and anonymous functions. Nodes are
/// constructed once by the parser and never mutated by the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A numeric literal (double precision floating-point).
    NumberLiteral {
        /// The literal value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal.
    StringLiteral {
        /// The literal text, without the surrounding quotes.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// A binary operation (addition, comparison, etc.).
    BinaryExp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A unary operation (negation or logical NOT).
    UnaryExp {
        /// The unary operator to apply.
        op:     UnaryOperator,
        /// The operand expression.
        target: Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
    /// An assignment or compound assignment.
    ///
    /// The assignee must be an identifier or a member expression; anything
    /// else is rejected during evaluation.
    AssignmentExp {
        /// The assignment target (identifier or member expression).
        assignee: Box<Self>,
        /// The compound operator, or `None` for a plain `=` assignment.
        op:       Option<BinaryOperator>,
        /// The value being assigned.
        value:    Box<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// An object literal (`{ key: value, shorthand }`).
    ObjectLiteral {
        /// The object's properties, in declaration order.
        properties: Vec<Property>,
        /// Line number in the source code.
        line:       usize,
    },
    /// An array literal (`[ a, b, c ]`).
    ArrayLiteral {
        /// Elements of the array; may include spread expressions.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// A spread expression (`fan expr`); the operand must be an array.
    SpreadExp {
        /// The expression being spread.
        argument: Box<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Member access, either `object.name` or the computed `object[expr]`.
    MemberExp {
        /// The expression whose member is accessed.
        object:   Box<Self>,
        /// The property name (an identifier) or the computed key expression.
        property: Box<Self>,
        /// Whether the access is computed (`object[expr]`).
        computed: bool,
        /// Line number in the source code.
        line:     usize,
    },
    /// A call expression (`caller(args)`).
    CallExp {
        /// The expression being called.
        caller: Box<Self>,
        /// Arguments to the call.
        args:   Vec<Self>,
        /// Line number in the source code.
        line:   usize,
    },
    /// An anonymous function (`fn (params) => expr` or `fn (params) { .. }`).
    FunctionExp {
        /// The parameter names.
        params: Vec<String>,
        /// The function body statements.
        body:   Vec<Statement>,
        /// Line number in the source code.
        line:   usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    ///
    /// ## Example
    /// ```
    /// use rill::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Identifier { line, .. }
            | Self::NumberLiteral { line, .. }
            | Self::StringLiteral { line, .. }
            | Self::BinaryExp { line, .. }
            | Self::UnaryExp { line, .. }
            | Self::AssignmentExp { line, .. }
            | Self::ObjectLiteral { line, .. }
            | Self::ArrayLiteral { line, .. }
            | Self::SpreadExp { line, .. }
            | Self::MemberExp { line, .. }
            | Self::CallExp { line, .. }
            | Self::FunctionExp { line, .. } => *line,
        }
    }
}

/// Represents a named function declaration.
///
/// Named functions are bound as constants in the declaring scope. Unlike
/// anonymous [`Expr::FunctionExp`] values, a named function may carry a
/// declared return type that is checked at every call.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    /// The name of the function.
    pub name:        String,
    /// The parameter names.
    pub params:      Vec<String>,
    /// The function body statements.
    pub body:        Vec<Statement>,
    /// The declared return type tag, if any (e.g. `number`).
    pub return_type: Option<String>,
    /// Line number in the source code.
    pub line:        usize,
}

/// Represents a statement.
///
/// A bare expression is a valid statement, so every expression can appear in
/// statement position via [`Statement::Expression`].
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable declaration using `let` or `const`.
    VariableDeclaration {
        /// The name of the variable.
        name:     String,
        /// Whether the binding is constant.
        constant: bool,
        /// The initializer, or `None` for `let x;` (bound to null).
        value:    Option<Expr>,
        /// Line number in the source code.
        line:     usize,
    },
    /// A named function declaration.
    FunctionDeclaration(FunctionDecl),
    /// A `return` statement with an optional value.
    ReturnStatement {
        /// The returned expression, if any.
        value: Option<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A `while` loop.
    WhileStatement {
        /// The loop condition, re-evaluated before each iteration.
        condition: Expr,
        /// The loop body.
        body:      Vec<Statement>,
        /// Line number in the source code.
        line:      usize,
    },
    /// An `if` statement with a single branch and no else.
    IfStatement {
        /// The branch condition.
        condition: Expr,
        /// The branch body.
        body:      Vec<Statement>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A `for (x of expr)` loop over an array.
    ForStatement {
        /// The loop variable name.
        variable: String,
        /// The iterated expression; must evaluate to an array.
        iterable: Expr,
        /// The loop body.
        body:     Vec<Statement>,
        /// Line number in the source code.
        line:     usize,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

/// The root node produced by the parser: an ordered list of statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The program's top-level statements.
    pub body: Vec<Statement>,
}
