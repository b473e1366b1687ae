use crate::parser::error::*;
use crate::parser::{Lexer, Token, Expr};


/// How deep an expression may nest before parsing gives up.
///
/// Every parenthesis, prefix sign and chained infix operator counts as one level.
pub const MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Lowest = 1,
    Sum = 2,
    Product = 3,
    Prefix = 4,
}

impl Precedence {
    fn of_token(token: &Token) -> Self {
        match token {
            Token::Plus | Token::Minus => Precedence::Sum,
            Token::Multiply | Token::Divide | Token::Modulo => Precedence::Product,
            _ => Precedence::Lowest
        }
    }
}


/// A Pratt parser for arithmetic expressions.
///
/// The parser tokenizes its input and builds an abstract syntax tree ([`Expr`]).
/// `*`, `/` and `%` bind tighter than `+` and `-`, every infix operator is left
/// associative, prefix `+`/`-` and parentheses are accepted.
///
/// Nesting is bounded by [`MAX_DEPTH`], so neither parsing nor evaluating the
/// resulting tree can exhaust the stack.
#[derive(Debug)]
pub struct Parser {
    lexer: Lexer,
    current: Token,
    peek: Token,
    depth: usize
}

impl Parser {
    /// Creates a new `Parser` for the given input string.
    ///
    /// # Errors
    /// Returns [`ParserError::Empty`] when the input holds no tokens, or any
    /// tokenizer error raised by the first two tokens.
    ///
    /// # Examples
    /// ```
    /// use roll_bot::{Parser, ParserError};
    ///
    /// assert!(Parser::new("11 + 3").is_ok());
    ///
    /// let empty = Parser::new("  ").unwrap_err();
    /// assert!(matches!(empty.err(), ParserError::Empty));
    /// ```
    pub fn new(input: &str) -> Result<Self> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;

        if current == Token::Eof {
            return Err(ParserError::Empty);
        }

        let peek = lexer.next_token()?;
        Ok(Self { lexer, current, peek, depth: 0 })
    }

    /// Parses the whole input into an [`Expr`].
    ///
    /// # Errors
    /// Returns a `ParserError` on any syntax error, including tokens left over
    /// after a complete expression. The error is wrapped with the position where
    /// parsing stopped through [`ParserError::at_pos()`].
    ///
    /// # Examples
    /// ```
    /// use roll_bot::{Parser, ParserError};
    ///
    /// let mut parser = Parser::new("1 + 2 * 3").unwrap();
    /// let expr = parser.parse().unwrap();
    /// assert_eq!(format!("{expr}"), "(1 + (2 * 3))");
    ///
    /// let mut invalid = Parser::new("1 +").unwrap();
    /// let err = invalid.parse().unwrap_err();
    /// assert!(matches!(err.err(), ParserError::UnexpectedPrefix(_)));
    /// ```
    pub fn parse(&mut self) -> Result<Expr> {
        self.parse_all()
            .map_err(|err| err.at_pos(self.lexer.position))
    }

    fn parse_all(&mut self) -> Result<Expr> {
        let expr = self.parse_tokens(Precedence::Lowest)?;

        if self.peek != Token::Eof {
            return Err(ParserError::TrailingInput(format!("{:?}", self.peek)));
        }

        Ok(expr)
    }

    fn next_token(&mut self) -> Result<()> {
        self.current = self.peek;
        self.peek = self.lexer.next_token()?;

        Ok(())
    }

    fn parse_tokens(&mut self, precedence: Precedence) -> Result<Expr> {
        let entry = self.depth;
        let result = self.parse_chain(precedence);
        self.depth = entry;

        result
    }

    fn parse_chain(&mut self, precedence: Precedence) -> Result<Expr> {
        self.descend()?;
        let mut expr = self.parse_prefix()?;

        while self.peek != Token::Eof && precedence < self.peek_precedence() {
            self.descend()?;
            self.next_token()?;
            expr = self.parse_infix(expr)?;
        }

        Ok(expr)
    }

    fn descend(&mut self) -> Result<()> {
        self.depth += 1;

        if self.depth > MAX_DEPTH {
            return Err(ParserError::TooDeep(MAX_DEPTH));
        }

        Ok(())
    }

    fn parse_prefix(&mut self) -> Result<Expr> {
        match self.current {
            Token::Number(v) => Ok(v.into()),

            Token::Minus => {
                self.next_token()?;
                let operand = self.parse_tokens(Precedence::Prefix)?;
                Ok(Expr::neg(operand))
            },

            Token::Plus => {
                self.next_token()?;
                let operand = self.parse_tokens(Precedence::Prefix)?;
                Ok(Expr::pos(operand))
            },

            Token::LeftParenthesis => {
                self.next_token()?;
                let expr = self.parse_tokens(Precedence::Lowest)?;

                if self.peek != Token::RightParenthesis {
                    return Err(ParserError::UnclosedParenthesis);
                }

                self.next_token()?;
                Ok(expr)
            },

            other => Err(ParserError::UnexpectedPrefix(format!("{other:?}")))
        }
    }

    fn parse_infix(&mut self, expr: Expr) -> Result<Expr> {
        match self.current {
            Token::Plus | Token::Minus | Token::Multiply | Token::Divide | Token::Modulo => self.parse_binary_op(expr),
            other => Err(ParserError::UnexpectedInfix(format!("{other:?}")))
        }
    }

    fn parse_binary_op(&mut self, left: Expr) -> Result<Expr> {
        let op = self.current;
        self.next_token()?;

        let right = self.parse_tokens(Precedence::of_token(&op))?;

        match op {
            Token::Plus => Ok(Expr::add(left, right)),
            Token::Minus => Ok(Expr::sub(left, right)),
            Token::Multiply => Ok(Expr::mul(left, right)),
            Token::Divide => Ok(Expr::div(left, right)),
            Token::Modulo => Ok(Expr::rem(left, right)),
            other => unreachable!("{other:?}")
        }
    }

    fn peek_precedence(&self) -> Precedence {
        Precedence::of_token(&self.peek)
    }
}


/// Parses an arithmetic string into an [`Expr`] without evaluating it.
///
/// # Errors
/// Returns a `ParserError` if the input is empty or not a well formed
/// expression. Syntax errors carry the position where parsing stopped; get it
/// with [`ParserError::pos()`] and the wrapped error with [`ParserError::err()`].
///
/// # Examples
/// ```
/// use roll_bot::parse_to_expr;
///
/// let expr = parse_to_expr("11 +3").unwrap();
/// assert_eq!(expr.to_string(), "(11 + 3)");
/// ```
pub fn parse_to_expr(input: &str) -> Result<Expr> {
    let mut parser = Parser::new(input)?;
    parser.parse()
}


/// Parses and evaluates an arithmetic string.
///
/// The grammar is numbers, whitespace, parentheses, prefix `+`/`-` and the
/// infix operators `+ - * / %`. The result is always floating point.
///
/// # Errors
/// Same as [`parse_to_expr`].
///
/// # Examples
/// ```
/// use roll_bot::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate("10 / 4").unwrap(), 2.5);
/// assert_eq!(evaluate("7 % 3").unwrap(), 1.0);
/// assert!(evaluate("11 3").is_err());
/// ```
pub fn evaluate(input: &str) -> Result<f64> {
    Ok(parse_to_expr(input)?.evaluate())
}
