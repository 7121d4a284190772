//! Declaration, statement, expression and guard evaluator.

use std::io::{BufRead, Write};

use minipas_types::ast::*;

use crate::config::RunConfig;
use crate::env::Store;
use crate::error::{EvalError, EvalResult};
use crate::input::InputReader;

/// Walks a program tree, executing it against one variable store.
///
/// `readln` pulls integers from `R`; `writeln` writes lines to `W`.
/// Evaluation is strictly left to right and never short-circuits.
pub struct TreeWalker<R, W> {
    store: Store,
    input: InputReader<R>,
    output: W,
    gas: u64,
    gas_limit: Option<u64>,
}

impl<R: BufRead, W: Write> TreeWalker<R, W> {
    /// Create an interpreter without a step limit.
    pub fn new(input: R, output: W) -> Self {
        Self::with_config(input, output, RunConfig::unlimited())
    }

    pub fn with_config(input: R, output: W, config: RunConfig) -> Self {
        Self {
            store: Store::new(),
            input: InputReader::new(input),
            output,
            gas: 0,
            gas_limit: config.gas_limit,
        }
    }

    /// Variables as they stand after the last run.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Steps consumed so far.
    pub fn gas_used(&self) -> u64 {
        self.gas
    }

    /// Run a whole program: every declaration, then the body.
    ///
    /// The store is cleared first, so one walker can run several programs.
    pub fn run(&mut self, program: &Program) -> EvalResult<()> {
        log::debug!("running program '{}'", program.name);
        self.store = Store::new();
        self.gas = 0;

        for decl in &program.declarations {
            self.declare(&decl.ids)?;
        }
        self.exec_stmts(&program.body)?;
        self.output.flush()?;

        log::debug!(
            "program '{}' finished: {} variables, {} steps",
            program.name,
            self.store.len(),
            self.gas
        );
        Ok(())
    }

    fn tick(&mut self) -> EvalResult<()> {
        self.gas += 1;
        match self.gas_limit {
            Some(limit) if self.gas > limit => Err(EvalError::GasExhausted),
            _ => Ok(()),
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Declarations
    // ══════════════════════════════════════════════════════════════════════

    /// Declare every identifier of the list, head first.
    pub fn declare(&mut self, ids: &IdList) -> EvalResult<()> {
        if !self.store.declare(&ids.id.name) {
            return Err(EvalError::DuplicateDeclaration(ids.id.name.clone()));
        }
        log::debug!("declared '{}'", ids.id);
        match &ids.tail {
            Some(tail) => self.declare(tail),
            None => Ok(()),
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Statements
    // ══════════════════════════════════════════════════════════════════════

    pub fn exec_stmts(&mut self, stmts: &[Stmt]) -> EvalResult<()> {
        for stmt in stmts {
            self.exec_stmt(stmt)?;
        }
        Ok(())
    }

    pub fn exec_stmt(&mut self, stmt: &Stmt) -> EvalResult<()> {
        self.tick()?;
        log::trace!("exec {}", stmt.kind());
        match stmt {
            Stmt::Assign(assign) => self.exec_assign(assign),
            Stmt::Output(output) => self.exec_output(output),
            Stmt::Input(input) => self.exec_input(input),
            Stmt::Branch(branch) => self.exec_branch(branch),
            Stmt::Loop(repeat) => self.exec_loop(repeat),
        }
    }

    fn exec_assign(&mut self, assign: &Assign) -> EvalResult<()> {
        let name = &assign.target.name;
        if !self.store.contains(name) {
            return Err(EvalError::UndefinedVariable(name.clone()));
        }
        let value = self.eval_expr(&assign.value)?;
        self.store.set(name, value);
        Ok(())
    }

    fn exec_output(&mut self, output: &Output) -> EvalResult<()> {
        match output {
            Output::Expr(expr) => {
                let value = self.eval_expr(expr)?;
                writeln!(self.output, "{value}")?;
            }
            Output::Literal(token) => {
                writeln!(self.output, "{}", strip_quotes(token))?;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn exec_input(&mut self, input: &Input) -> EvalResult<()> {
        let name = &input.target.name;
        if !self.store.contains(name) {
            return Err(EvalError::UndefinedVariable(name.clone()));
        }
        let value = self.input.read_int()?;
        self.store.set(name, value);
        Ok(())
    }

    fn exec_branch(&mut self, branch: &Branch) -> EvalResult<()> {
        if self.eval_guard(&branch.guard)? {
            self.exec_stmts(branch.then_block.stmts())
        } else if let Some(else_block) = &branch.else_block {
            self.exec_stmts(else_block.stmts())
        } else {
            Ok(())
        }
    }

    fn exec_loop(&mut self, repeat: &Loop) -> EvalResult<()> {
        loop {
            self.exec_stmts(&repeat.body)?;
            if self.eval_guard(&repeat.until)? {
                return Ok(());
            }
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Expressions
    // ══════════════════════════════════════════════════════════════════════

    pub fn eval_expr(&mut self, expr: &Expr) -> EvalResult<i64> {
        self.tick()?;
        match expr {
            Expr::Ident(id) => self
                .store
                .get(&id.name)
                .ok_or_else(|| EvalError::UndefinedVariable(id.name.clone())),
            Expr::Number(text) => text
                .parse()
                .map_err(|_| EvalError::InvalidNumber(text.clone())),
            Expr::Binary { left, op, right } => {
                let lv = self.eval_expr(left)?;
                let rv = self.eval_expr(right)?;
                apply_arith(lv, *op, rv)
            }
            Expr::Paren(inner) => self.eval_expr(inner),
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Guards
    // ══════════════════════════════════════════════════════════════════════

    pub fn eval_guard(&mut self, guard: &Guard) -> EvalResult<bool> {
        self.tick()?;
        match guard {
            Guard::Not(inner) => Ok(!self.eval_guard(inner)?),
            // both sides always run, left first
            Guard::And(left, right) => {
                let lv = self.eval_guard(left)?;
                let rv = self.eval_guard(right)?;
                Ok(lv && rv)
            }
            Guard::Or(left, right) => {
                let lv = self.eval_guard(left)?;
                let rv = self.eval_guard(right)?;
                Ok(lv || rv)
            }
            Guard::Relation(relation) => self.eval_relation(relation),
            Guard::Paren(inner) => self.eval_guard(inner),
        }
    }

    pub fn eval_relation(&mut self, relation: &Relation) -> EvalResult<bool> {
        let lv = self.eval_expr(&relation.left)?;
        let rv = self.eval_expr(&relation.right)?;
        Ok(relation.op.holds(lv, rv))
    }
}

/// Integer arithmetic with explicit traps.
///
/// Division truncates toward zero; the remainder has the sign of the
/// dividend.
pub(crate) fn apply_arith(lv: i64, op: ArithOp, rv: i64) -> EvalResult<i64> {
    let result = match op {
        ArithOp::Add => lv.checked_add(rv),
        ArithOp::Sub => lv.checked_sub(rv),
        ArithOp::Mul => lv.checked_mul(rv),
        ArithOp::Div => {
            if rv == 0 {
                return Err(EvalError::ArithmeticTrap("division by zero".into()));
            }
            lv.checked_div(rv)
        }
        ArithOp::Mod => {
            if rv == 0 {
                return Err(EvalError::ArithmeticTrap("modulo by zero".into()));
            }
            lv.checked_rem(rv)
        }
    };
    result.ok_or_else(|| EvalError::ArithmeticTrap(format!("overflow in {lv} {op} {rv}")))
}

/// Drop the first and last character of a string token.
fn strip_quotes(token: &str) -> &str {
    let mut chars = token.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}
