use crate::{expr::Expr, stmt::Stmt};

pub trait ExprVisitor<R> {
    fn visit_expr(&mut self, expr: &Expr) -> R;
}

pub trait StmtVisitor<R> {
    fn visit_stmt(&mut self, stmt: &Stmt) -> R;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        stmt::Function,
        token::{Token, TokenKind},
    };

    /// Counts every node it is dispatched to.
    #[derive(Default)]
    struct NodeCounter {
        exprs: usize,
        stmts: usize,
    }

    impl ExprVisitor<()> for NodeCounter {
        fn visit_expr(&mut self, expr: &Expr) {
            self.exprs += 1;
            match expr {
                Expr::Binary { left, right, .. } | Expr::Logical { left, right, .. } => {
                    left.accept(self);
                    right.accept(self);
                }
                Expr::Unary { right, .. } => right.accept(self),
                Expr::Grouping(inner) => inner.accept(self),
                Expr::Assign { value, .. } => value.accept(self),
                Expr::Call {
                    callee, arguments, ..
                } => {
                    callee.accept(self);
                    arguments.iter().for_each(|a| a.accept(self));
                }
                Expr::Get { object, .. } => object.accept(self),
                Expr::Set { object, value, .. } => {
                    object.accept(self);
                    value.accept(self);
                }
                Expr::Literal(_) | Expr::Variable(_) | Expr::This { .. } | Expr::Super { .. } => {}
            }
        }
    }

    impl StmtVisitor<()> for NodeCounter {
        fn visit_stmt(&mut self, stmt: &Stmt) {
            self.stmts += 1;
            match stmt {
                Stmt::Expression(e) | Stmt::Print(e) => e.accept(self),
                Stmt::Var { initializer, .. } => {
                    if let Some(e) = initializer {
                        e.accept(self);
                    }
                }
                Stmt::Block(stmts) => stmts.iter().for_each(|s| s.accept(self)),
                Stmt::If {
                    condition,
                    then_branch,
                    else_branch,
                } => {
                    condition.accept(self);
                    then_branch.accept(self);
                    if let Some(s) = else_branch {
                        s.accept(self);
                    }
                }
                Stmt::While { condition, body } => {
                    condition.accept(self);
                    body.accept(self);
                }
                Stmt::Function(Function { body, .. }) => body.iter().for_each(|s| s.accept(self)),
                Stmt::Return { value, .. } => {
                    if let Some(e) = value {
                        e.accept(self);
                    }
                }
                Stmt::Class { methods, .. } => methods
                    .iter()
                    .for_each(|m| m.body.iter().for_each(|s| s.accept(self))),
            }
        }
    }

    fn number(v: f64) -> Expr {
        Expr::number(v)
    }

    #[test]
    fn accept_dispatches_every_node_once() {
        let expr = Expr::call(
            Expr::variable(Token::word("f", 1)),
            Token::symbol(TokenKind::RightParen, ")", 1),
            vec![
                Expr::binary(number(1.), Token::symbol(TokenKind::Plus, "+", 1), number(2.)),
                Expr::grouping(number(3.)),
            ],
        );
        let mut counter = NodeCounter::default();
        expr.accept(&mut counter);
        assert_eq!(counter.exprs, 7);
        assert_eq!(counter.stmts, 0);
    }

    #[test]
    fn absent_else_branch_is_never_visited() {
        let stmt = Stmt::if_else(
            Expr::bool(true),
            Stmt::Block(vec![Stmt::Print(number(1.)), Stmt::var(Token::word("a", 1), None)]),
            None,
        );
        let mut counter = NodeCounter::default();
        stmt.accept(&mut counter);
        assert_eq!(counter.stmts, 4);
        assert_eq!(counter.exprs, 2);
    }
}
