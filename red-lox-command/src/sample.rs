use std::{fmt, str::FromStr};

use red_lox_ast::{
    expr::{Expr, Variable},
    stmt::{Function, Stmt},
    token::{Token, TokenKind},
};

/// The built-in trees the printer can dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    Expression,
    Program,
    Invalid,
}

pub enum Tree {
    Expression(Expr),
    Program(Vec<Stmt>),
}

#[derive(Debug, thiserror::Error)]
#[error("unknown sample '{0}', expected one of: expression, program, invalid")]
pub struct UnknownSampleError(String);

impl Sample {
    pub const ALL: [Sample; 3] = [Sample::Expression, Sample::Program, Sample::Invalid];

    pub fn tree(self) -> Tree {
        match self {
            Sample::Expression => Tree::Expression(arithmetic()),
            Sample::Program => Tree::Program(classes_and_loops()),
            Sample::Invalid => Tree::Program(malformed()),
        }
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Sample::Expression => "expression",
            Sample::Program => "program",
            Sample::Invalid => "invalid",
        };
        f.write_str(name)
    }
}

impl FromStr for Sample {
    type Err = UnknownSampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sample::ALL
            .into_iter()
            .find(|sample| sample.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownSampleError(s.to_string()))
    }
}

fn word(lexeme: &str, line: usize) -> Token {
    Token::word(lexeme, line)
}

fn op(kind: TokenKind, lexeme: &str, line: usize) -> Token {
    Token::symbol(kind, lexeme, line)
}

fn var(name: &str, line: usize) -> Expr {
    Expr::variable(word(name, line))
}

fn this(line: usize) -> Expr {
    Expr::this(word("this", line))
}

/// `-123 * (45.67)`
fn arithmetic() -> Expr {
    Expr::binary(
        Expr::unary(op(TokenKind::Minus, "-", 1), Expr::number(123.)),
        op(TokenKind::Star, "*", 1),
        Expr::grouping(Expr::number(45.67)),
    )
}

/// ```text
/// class Animal {
///   init(name) { this.name = name; }
///   speak() { print this.name; }
/// }
/// class Dog < Animal {
///   speak() { super.speak(); print "woof"; }
/// }
/// var dog = Dog("Rex");
/// var count;
/// while (count == nil or count < 3) {
///   if (count == nil) count = 0;
///   count = count + 1;
/// }
/// fun done() { return; }
/// dog.speak();
/// ```
fn classes_and_loops() -> Vec<Stmt> {
    let animal = Stmt::class(
        word("Animal", 1),
        None,
        vec![
            Function {
                name: word("init", 2),
                params: vec![word("name", 2)],
                body: vec![Stmt::Expression(Expr::set(
                    this(2),
                    word("name", 2),
                    var("name", 2),
                ))],
            },
            Function {
                name: word("speak", 3),
                params: vec![],
                body: vec![Stmt::Print(Expr::get(this(3), word("name", 3)))],
            },
        ],
    );
    let dog = Stmt::class(
        word("Dog", 5),
        Some(Variable {
            name: word("Animal", 5),
        }),
        vec![Function {
            name: word("speak", 6),
            params: vec![],
            body: vec![
                Stmt::Expression(Expr::call(
                    Expr::super_(word("super", 6), word("speak", 6)),
                    op(TokenKind::RightParen, ")", 6),
                    vec![],
                )),
                Stmt::Print(Expr::string("woof")),
            ],
        }],
    );
    let count_is_nil = |line| {
        Expr::binary(
            var("count", line),
            op(TokenKind::EqualEqual, "==", line),
            Expr::nil(),
        )
    };
    let counting = Stmt::while_loop(
        Expr::logical(
            count_is_nil(10),
            word("or", 10),
            Expr::binary(
                var("count", 10),
                op(TokenKind::Less, "<", 10),
                Expr::number(3.),
            ),
        ),
        Stmt::Block(vec![
            Stmt::if_else(
                count_is_nil(11),
                Stmt::Expression(Expr::assign(word("count", 11), Expr::number(0.))),
                None,
            ),
            Stmt::Expression(Expr::assign(
                word("count", 12),
                Expr::binary(
                    var("count", 12),
                    op(TokenKind::Plus, "+", 12),
                    Expr::number(1.),
                ),
            )),
        ]),
    );

    vec![
        animal,
        dog,
        Stmt::var(
            word("dog", 8),
            Some(Expr::call(
                var("Dog", 8),
                op(TokenKind::RightParen, ")", 8),
                vec![Expr::string("Rex")],
            )),
        ),
        Stmt::var(word("count", 9), None),
        counting,
        Stmt::function(
            word("done", 14),
            vec![],
            vec![Stmt::return_(word("return", 14), None)],
        ),
        Stmt::Expression(Expr::call(
            Expr::get(var("dog", 15), word("speak", 15)),
            op(TokenKind::RightParen, ")", 15),
            vec![],
        )),
    ]
}

/// A tree no parser would produce: an operator in unary position and a
/// reserved word used as a variable name.
///
/// ```text
/// print 1;
/// print * 2;
/// var class = 3;
/// print 4;
/// ```
fn malformed() -> Vec<Stmt> {
    vec![
        Stmt::Print(Expr::number(1.)),
        Stmt::Print(Expr::unary(op(TokenKind::Star, "*", 2), Expr::number(2.))),
        Stmt::var(word("class", 3), Some(Expr::number(3.))),
        Stmt::Print(Expr::number(4.)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("expression", Sample::Expression)]
    #[case("program", Sample::Program)]
    #[case("Invalid", Sample::Invalid)]
    fn parses_sample_names(#[case] name: &str, #[case] sample: Sample) {
        assert_eq!(name.parse::<Sample>().unwrap(), sample);
    }

    #[test]
    fn rejects_unknown_sample_names() {
        let err = "script".parse::<Sample>().unwrap_err();
        assert!(err.to_string().contains("unknown sample 'script'"));
    }
}
