use crate::{
    token::{Token, Value},
    visitor::ExprVisitor,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    Unary {
        operator: Token,
        right: Box<Expr>,
    },
    Literal(Option<Value>),
    Grouping(Box<Expr>),
    Variable(Variable),
    Assign {
        name: Token,
        value: Box<Expr>,
    },
    Logical {
        operator: Token,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        paren: Token,
        arguments: Vec<Expr>,
    },
    Get {
        object: Box<Expr>,
        name: Token,
    },
    Set {
        object: Box<Expr>,
        name: Token,
        value: Box<Expr>,
    },
    This {
        keyword: Token,
    },
    Super {
        keyword: Token,
        method: Token,
    },
}

/// A variable reference. Kept as its own type because a class's superclass
/// can only ever be one of these.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: Token,
}

impl Expr {
    pub fn accept<R, V: ExprVisitor<R>>(&self, visitor: &mut V) -> R {
        visitor.visit_expr(self)
    }

    pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn unary(operator: Token, right: Expr) -> Self {
        Expr::Unary {
            operator,
            right: Box::new(right),
        }
    }

    pub fn number(v: f64) -> Self {
        Expr::Literal(Some(Value::Number(v)))
    }

    pub fn string(s: impl Into<String>) -> Self {
        Expr::Literal(Some(Value::String(s.into())))
    }

    pub fn bool(b: bool) -> Self {
        Expr::Literal(Some(Value::Bool(b)))
    }

    pub fn nil() -> Self {
        Expr::Literal(None)
    }

    pub fn grouping(inner: Expr) -> Self {
        Expr::Grouping(Box::new(inner))
    }

    pub fn variable(name: Token) -> Self {
        Expr::Variable(Variable { name })
    }

    pub fn assign(name: Token, value: Expr) -> Self {
        Expr::Assign {
            name,
            value: Box::new(value),
        }
    }

    pub fn logical(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Logical {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn call(callee: Expr, paren: Token, arguments: Vec<Expr>) -> Self {
        Expr::Call {
            callee: Box::new(callee),
            paren,
            arguments,
        }
    }

    pub fn get(object: Expr, name: Token) -> Self {
        Expr::Get {
            object: Box::new(object),
            name,
        }
    }

    pub fn set(object: Expr, name: Token, value: Expr) -> Self {
        Expr::Set {
            object: Box::new(object),
            name,
            value: Box::new(value),
        }
    }

    pub fn this(keyword: Token) -> Self {
        Expr::This { keyword }
    }

    pub fn super_(keyword: Token, method: Token) -> Self {
        Expr::Super { keyword, method }
    }
}

impl From<Variable> for Expr {
    fn from(v: Variable) -> Self {
        Expr::Variable(v)
    }
}
