//! S-expression dump of a syntax tree.
//!
//! Every node renders as a prefix form with its grouping made explicit, so a
//! dump shows precisely how precedence and nesting were resolved by the parser:
//!
//! | node | dump |
//! |---|---|
//! | literal | `nil`, `123`, `45.67`, `raw string`, `true` |
//! | grouping | `(group <inner>)` |
//! | unary, binary, logical | `(<op> <operands>...)` |
//! | variable, `this` | the bare lexeme |
//! | assignment | `(<name> <value>)` |
//! | call | `(<callee> <args>...)` |
//! | property get | `(get (object <object>) (name <name>))` |
//! | property set | `(set (object <object>) (name <name>) (value <value>))` |
//! | `super` access | `(super (method <method>))` |
//! | expression statement | `(; <expr>)` |
//! | print | `(print <expr>)` |
//! | var declaration | `(<name> <initializer>)` |
//! | block | the statements' dumps, concatenated |
//! | if | `(if (condition <c>) (then <t>) (else <e>))` |
//! | while | `(while (condition <c>) (body <b>))` |
//! | function | `(fun (name <name>) (params <params>...) <body>)` |
//! | return | `(return <value>)` |
//! | class | `(class (name <name>) (superclass <super>) <methods>)` |
//!
//! A missing optional child (initializer, else branch, return value,
//! superclass) prints as `nil`.

use crate::{
    error::{Result, RuntimeError},
    expr::{Expr, Variable},
    reporter::{Diagnostics, Reporter},
    stmt::{Function, Stmt},
    token::{Token, TokenKind},
    visitor::{ExprVisitor, StmtVisitor},
};

const ABSENT: &str = "nil";

pub struct AstPrinter<'a> {
    reporter: &'a mut dyn Reporter,
}

/// Output of a whole printing pass together with everything reported on the way.
#[derive(Debug)]
pub struct Printed {
    pub output: String,
    pub diagnostics: Vec<RuntimeError>,
}

/// Prints `stmts` while collecting diagnostics instead of sending them to a sink.
pub fn print_program(stmts: &[Stmt]) -> Printed {
    let mut diagnostics = Diagnostics::default();
    let output = AstPrinter::new(&mut diagnostics).print(stmts);
    Printed {
        output,
        diagnostics: diagnostics.into_inner(),
    }
}

pub fn print_expression(expr: &Expr) -> Printed {
    let mut diagnostics = Diagnostics::default();
    let output = AstPrinter::new(&mut diagnostics).print_expr(expr);
    Printed {
        output,
        diagnostics: diagnostics.into_inner(),
    }
}

impl<'a> AstPrinter<'a> {
    pub fn new(reporter: &'a mut dyn Reporter) -> Self {
        Self { reporter }
    }

    /// Dumps each top-level statement on its own line.
    pub fn print(&mut self, stmts: &[Stmt]) -> String {
        log::trace!("printing {} top-level statements", stmts.len());
        stmts
            .iter()
            .map(|stmt| self.print_stmt(stmt))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Dumps a single statement. An invalid node anywhere below it is reported
    /// and the statement contributes an empty string.
    pub fn print_stmt(&mut self, stmt: &Stmt) -> String {
        let result = stmt.accept(self);
        self.recover(result)
    }

    pub fn print_expr(&mut self, expr: &Expr) -> String {
        log::trace!("printing a standalone expression");
        let result = expr.accept(self);
        self.recover(result)
    }

    fn recover(&mut self, result: Result<String>) -> String {
        match result {
            Ok(s) => s,
            Err(e) => {
                self.reporter.report(&e);
                String::new()
            }
        }
    }

    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) -> Result<String> {
        let mut builder = String::new();
        builder.push('(');
        builder.push_str(name);
        for expr in exprs {
            builder.push(' ');
            builder.push_str(&self.visit_expr(expr)?);
        }
        builder.push(')');
        Ok(builder)
    }

    fn optional_expr(&mut self, expr: Option<&Expr>) -> Result<String> {
        match expr {
            Some(e) => self.visit_expr(e),
            None => Ok(ABSENT.to_string()),
        }
    }

    fn concat(&mut self, stmts: &[Stmt]) -> String {
        stmts.iter().map(|stmt| self.print_stmt(stmt)).collect()
    }

    fn function(&mut self, function: &Function) -> Result<String> {
        let name = identifier(&function.name)?;
        let params = function
            .params
            .iter()
            .map(identifier)
            .collect::<Result<Vec<_>>>()?;
        let mut builder = format!("(fun (name {}) {}", name, tagged("params", params.as_slice()));
        let body = self.concat(&function.body);
        if !body.is_empty() {
            builder.push(' ');
            builder.push_str(&body);
        }
        builder.push(')');
        Ok(builder)
    }
}

impl<'a> ExprVisitor<Result<String>> for AstPrinter<'a> {
    fn visit_expr(&mut self, expr: &Expr) -> Result<String> {
        match expr {
            Expr::Binary {
                left,
                operator,
                right,
            } => {
                let op = operator_lexeme(
                    operator,
                    TokenKind::is_binary_operator,
                    "Expect binary operator.",
                )?;
                self.parenthesize(op, &[left.as_ref(), right.as_ref()])
            }
            Expr::Unary { operator, right } => {
                let op = operator_lexeme(
                    operator,
                    TokenKind::is_unary_operator,
                    "Expect unary operator.",
                )?;
                self.parenthesize(op, &[right.as_ref()])
            }
            Expr::Literal(value) => Ok(match value {
                Some(v) => v.to_string(),
                None => ABSENT.to_string(),
            }),
            Expr::Grouping(inner) => self.parenthesize("group", &[inner.as_ref()]),
            Expr::Variable(v) => variable(v),
            Expr::Assign { name, value } => {
                let name = identifier(name)?;
                self.parenthesize(name, &[value.as_ref()])
            }
            Expr::Logical {
                operator,
                left,
                right,
            } => {
                let op = operator_lexeme(
                    operator,
                    TokenKind::is_logical_operator,
                    "Expect 'and' or 'or'.",
                )?;
                self.parenthesize(op, &[left.as_ref(), right.as_ref()])
            }
            Expr::Call {
                callee,
                paren: _,
                arguments,
            } => {
                let mut parts = vec![self.visit_expr(callee)?];
                for argument in arguments {
                    parts.push(self.visit_expr(argument)?);
                }
                Ok(format!("({})", parts.join(" ")))
            }
            Expr::Get { object, name } => {
                let name = identifier(name)?;
                let object = self.visit_expr(object)?;
                Ok(format!("(get (object {}) (name {}))", object, name))
            }
            Expr::Set {
                object,
                name,
                value,
            } => {
                let name = identifier(name)?;
                let object = self.visit_expr(object)?;
                let value = self.visit_expr(value)?;
                Ok(format!(
                    "(set (object {}) (name {}) (value {}))",
                    object, name, value
                ))
            }
            Expr::This { keyword: this } => {
                keyword(this, TokenKind::This, "this").map(str::to_string)
            }
            Expr::Super {
                keyword: super_,
                method,
            } => {
                let tag = keyword(super_, TokenKind::Super, "super")?;
                Ok(format!("({} {})", tag, tagged("method", &[identifier(method)?])))
            }
        }
    }
}

impl<'a> StmtVisitor<Result<String>> for AstPrinter<'a> {
    fn visit_stmt(&mut self, stmt: &Stmt) -> Result<String> {
        match stmt {
            Stmt::Expression(e) => self.parenthesize(";", &[e]),
            Stmt::Print(e) => self.parenthesize("print", &[e]),
            Stmt::Var { name, initializer } => {
                let name = identifier(name)?;
                let initializer = self.optional_expr(initializer.as_ref())?;
                Ok(format!("({} {})", name, initializer))
            }
            Stmt::Block(stmts) => Ok(self.concat(stmts)),
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                let condition = self.visit_expr(condition)?;
                let then_branch = self.print_stmt(then_branch);
                let else_branch = match else_branch {
                    Some(s) => self.print_stmt(s),
                    None => ABSENT.to_string(),
                };
                Ok(format!(
                    "(if (condition {}) (then {}) (else {}))",
                    condition, then_branch, else_branch
                ))
            }
            Stmt::While { condition, body } => {
                let condition = self.visit_expr(condition)?;
                let body = self.print_stmt(body);
                Ok(format!("(while (condition {}) (body {}))", condition, body))
            }
            Stmt::Function(function) => self.function(function),
            Stmt::Return {
                keyword: return_,
                value,
            } => {
                let tag = keyword(return_, TokenKind::Return, "return")?;
                let value = self.optional_expr(value.as_ref())?;
                Ok(format!("({} {})", tag, value))
            }
            Stmt::Class {
                name,
                superclass,
                methods,
            } => {
                let name = identifier(name)?;
                let superclass = match superclass {
                    Some(v) => variable(v)?,
                    None => ABSENT.to_string(),
                };
                let mut builder = format!("(class (name {}) (superclass {})", name, superclass);
                let methods = methods
                    .iter()
                    .map(|method| {
                        let result = self.function(method);
                        self.recover(result)
                    })
                    .collect::<String>();
                if !methods.is_empty() {
                    builder.push(' ');
                    builder.push_str(&methods);
                }
                builder.push(')');
                Ok(builder)
            }
        }
    }
}

fn tagged<S: AsRef<str>>(tag: &str, parts: &[S]) -> String {
    let mut builder = String::new();
    builder.push('(');
    builder.push_str(tag);
    for part in parts {
        builder.push(' ');
        builder.push_str(part.as_ref());
    }
    builder.push(')');
    builder
}

fn variable(v: &Variable) -> Result<String> {
    identifier(&v.name).map(str::to_string)
}

fn identifier(token: &Token) -> Result<&str> {
    match token.kind {
        TokenKind::Identifier => Ok(&token.lexeme),
        _ => Err(RuntimeError::new(token, "Expect identifier.")),
    }
}

fn keyword<'t>(token: &'t Token, kind: TokenKind, spelling: &str) -> Result<&'t str> {
    if token.kind == kind {
        Ok(&token.lexeme)
    } else {
        Err(RuntimeError::new(token, format!("Expect '{}'.", spelling)))
    }
}

fn operator_lexeme<'t>(
    token: &'t Token,
    accepts: fn(TokenKind) -> bool,
    message: &str,
) -> Result<&'t str> {
    if accepts(token.kind) {
        Ok(&token.lexeme)
    } else {
        Err(RuntimeError::new(token, message))
    }
}
