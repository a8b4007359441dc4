use crate::{
    expr::{Expr, Variable},
    token::Token,
    visitor::StmtVisitor,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expression(Expr),
    Print(Expr),
    Var {
        name: Token,
        initializer: Option<Expr>,
    },
    Block(Vec<Stmt>),
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While {
        condition: Expr,
        body: Box<Stmt>,
    },
    Function(Function),
    Return {
        keyword: Token,
        value: Option<Expr>,
    },
    Class {
        name: Token,
        superclass: Option<Variable>,
        methods: Vec<Function>,
    },
}

/// A function declaration, either free-standing or a class method.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: Token,
    pub params: Vec<Token>,
    pub body: Vec<Stmt>,
}

impl Stmt {
    pub fn accept<R, V: StmtVisitor<R>>(&self, visitor: &mut V) -> R {
        visitor.visit_stmt(self)
    }

    pub fn var(name: Token, initializer: Option<Expr>) -> Self {
        Stmt::Var { name, initializer }
    }

    pub fn if_else(condition: Expr, then_branch: Stmt, else_branch: Option<Stmt>) -> Self {
        Stmt::If {
            condition,
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
        }
    }

    pub fn while_loop(condition: Expr, body: Stmt) -> Self {
        Stmt::While {
            condition,
            body: Box::new(body),
        }
    }

    pub fn function(name: Token, params: Vec<Token>, body: Vec<Stmt>) -> Self {
        Stmt::Function(Function { name, params, body })
    }

    pub fn return_(keyword: Token, value: Option<Expr>) -> Self {
        Stmt::Return { keyword, value }
    }

    pub fn class(name: Token, superclass: Option<Variable>, methods: Vec<Function>) -> Self {
        Stmt::Class {
            name,
            superclass,
            methods,
        }
    }
}

impl From<Function> for Stmt {
    fn from(f: Function) -> Self {
        Stmt::Function(f)
    }
}
