//! Syntax-tree node types for minipas programs.
//!
//! These types are the contract between the parser that builds a tree and
//! the interpreter that walks it. One enum per grammar production; which
//! alternative the parser took is the enum variant.
//!
//! Nodes keep the token text the parser saw: number literals are stored as
//! written and string literals keep their enclosing quotes.

use serde::{Deserialize, Serialize};
use std::fmt;

// ══════════════════════════════════════════════════════════════════════════════
// Top Level
// ══════════════════════════════════════════════════════════════════════════════

/// `program Name; var ...; begin body end.`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub name: String,
    #[serde(default)]
    pub declarations: Vec<Declaration>,
    #[serde(default)]
    pub body: Vec<Stmt>,
}

impl Program {
    pub fn new(name: impl Into<String>, declarations: Vec<Declaration>, body: Vec<Stmt>) -> Self {
        Self {
            name: name.into(),
            declarations,
            body,
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Identifiers & Declarations
// ══════════════════════════════════════════════════════════════════════════════

/// An identifier token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ident {
    pub name: String,
}

impl Ident {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// `var a, b, c: integer;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub ids: IdList,
}

impl Declaration {
    /// Declare `names` in order. Returns `None` for an empty slice, which
    /// the grammar cannot produce.
    pub fn of(names: &[&str]) -> Option<Self> {
        IdList::from_idents(names.iter().map(|n| Ident::new(*n))).map(|ids| Self { ids })
    }
}

/// `a, b, c` as the grammar builds it: a head identifier and an optional
/// tail list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdList {
    pub id: Ident,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tail: Option<Box<IdList>>,
}

impl IdList {
    pub fn single(id: Ident) -> Self {
        Self { id, tail: None }
    }

    pub fn cons(id: Ident, tail: IdList) -> Self {
        Self {
            id,
            tail: Some(Box::new(tail)),
        }
    }

    /// Chain identifiers into a list, keeping their order.
    pub fn from_idents(ids: impl IntoIterator<Item = Ident>) -> Option<Self> {
        let ids: Vec<Ident> = ids.into_iter().collect();
        let mut rev = ids.into_iter().rev();
        let mut list = IdList::single(rev.next()?);
        for id in rev {
            list = IdList::cons(id, list);
        }
        Some(list)
    }

    /// Walk the chain from head to last tail.
    pub fn iter(&self) -> IdListIter<'_> {
        IdListIter { next: Some(self) }
    }
}

/// Iterator over the identifiers of an [`IdList`].
pub struct IdListIter<'a> {
    next: Option<&'a IdList>,
}

impl<'a> Iterator for IdListIter<'a> {
    type Item = &'a Ident;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.tail.as_deref();
        Some(&node.id)
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Statements
// ══════════════════════════════════════════════════════════════════════════════

/// A single statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stmt {
    /// `x := expr`
    Assign(Assign),
    /// `writeln(expr)` / `writeln("text")`
    Output(Output),
    /// `readln(x)`
    Input(Input),
    /// `if guard then block [else block]`
    Branch(Branch),
    /// `repeat stmts until guard`
    Loop(Loop),
}

impl Stmt {
    pub fn assign(target: &str, value: Expr) -> Self {
        Self::Assign(Assign {
            target: Ident::new(target),
            value,
        })
    }

    pub fn write(value: Expr) -> Self {
        Self::Output(Output::Expr(value))
    }

    /// `writeln` of a string token; `token` includes its quotes.
    pub fn write_literal(token: impl Into<String>) -> Self {
        Self::Output(Output::Literal(token.into()))
    }

    pub fn read(target: &str) -> Self {
        Self::Input(Input {
            target: Ident::new(target),
        })
    }

    pub fn branch(guard: Guard, then_block: CodeBlock, else_block: Option<CodeBlock>) -> Self {
        Self::Branch(Branch {
            guard,
            then_block,
            else_block,
        })
    }

    pub fn repeat(body: Vec<Stmt>, until: Guard) -> Self {
        Self::Loop(Loop { body, until })
    }

    /// The statement's node kind, as spelled in the JSON tree.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Assign(_) => "assign",
            Self::Output(_) => "output",
            Self::Input(_) => "input",
            Self::Branch(_) => "branch",
            Self::Loop(_) => "loop",
        }
    }
}

/// `target := value`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assign {
    pub target: Ident,
    pub value: Expr,
}

/// What a `writeln` prints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Output {
    Expr(Expr),
    /// Raw string token, quotes included.
    Literal(String),
}

/// `readln(target)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    pub target: Ident,
}

/// `if guard then then_block [else else_block]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub guard: Guard,
    pub then_block: CodeBlock,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub else_block: Option<CodeBlock>,
}

/// `repeat body until guard`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loop {
    pub body: Vec<Stmt>,
    pub until: Guard,
}

/// The body of a branch: one statement or `begin ... end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeBlock {
    Single(Box<Stmt>),
    Block(Vec<Stmt>),
}

impl CodeBlock {
    pub fn single(stmt: Stmt) -> Self {
        Self::Single(Box::new(stmt))
    }

    /// The statements of this block, in order.
    pub fn stmts(&self) -> &[Stmt] {
        match self {
            Self::Single(stmt) => std::slice::from_ref(&**stmt),
            Self::Block(stmts) => stmts,
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Expressions
// ══════════════════════════════════════════════════════════════════════════════

/// An integer expression. Grouping is whatever the parser built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    Ident(Ident),
    /// Number token text, e.g. `"42"`.
    Number(String),
    Binary {
        left: Box<Expr>,
        op: ArithOp,
        right: Box<Expr>,
    },
    /// `( expr )`
    Paren(Box<Expr>),
}

impl Expr {
    pub fn ident(name: &str) -> Self {
        Self::Ident(Ident::new(name))
    }

    pub fn number(n: i64) -> Self {
        Self::Number(n.to_string())
    }

    pub fn binary(left: Expr, op: ArithOp, right: Expr) -> Self {
        Self::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn paren(inner: Expr) -> Self {
        Self::Paren(Box::new(inner))
    }
}

/// Arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "mod",
        })
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Guards
// ══════════════════════════════════════════════════════════════════════════════

/// A boolean condition for `if` and `until`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Guard {
    Not(Box<Guard>),
    And(Box<Guard>, Box<Guard>),
    Or(Box<Guard>, Box<Guard>),
    Relation(Relation),
    /// `( guard )`
    Paren(Box<Guard>),
}

impl Guard {
    pub fn not(inner: Guard) -> Self {
        Self::Not(Box::new(inner))
    }

    pub fn and(left: Guard, right: Guard) -> Self {
        Self::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Guard, right: Guard) -> Self {
        Self::Or(Box::new(left), Box::new(right))
    }

    pub fn rel(left: Expr, op: RelOp, right: Expr) -> Self {
        Self::Relation(Relation { left, op, right })
    }

    pub fn paren(inner: Guard) -> Self {
        Self::Paren(Box::new(inner))
    }
}

/// `left op right`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    pub left: Expr,
    pub op: RelOp,
    pub right: Expr,
}

/// Relational operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelOp {
    Lt,
    Le,
    Eq,
    Ne,
    Ge,
    Gt,
}

impl RelOp {
    /// Apply the comparison.
    pub fn holds(self, left: i64, right: i64) -> bool {
        match self {
            Self::Lt => left < right,
            Self::Le => left <= right,
            Self::Eq => left == right,
            Self::Ne => left != right,
            Self::Ge => left >= right,
            Self::Gt => left > right,
        }
    }
}

impl fmt::Display for RelOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Eq => "=",
            Self::Ne => "<>",
            Self::Ge => ">=",
            Self::Gt => ">",
        })
    }
}
