use crate::parser::error::*;


#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,
    LeftParenthesis,
    RightParenthesis,
    Eof,
}


#[derive(Debug)]
pub(crate) struct Lexer {
    input: Vec<char>,
    pub position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();

        if self.position >= self.input.len() {
            return Ok(Token::Eof);
        }

        let ch = self.input[self.position];

        match ch {
            '+' => {
                self.position += 1;
                Ok(Token::Plus)
            }
            '-' => {
                self.position += 1;
                Ok(Token::Minus)
            }
            '*' => {
                self.position += 1;
                Ok(Token::Multiply)
            }
            '/' => {
                self.position += 1;
                Ok(Token::Divide)
            }
            '%' => {
                self.position += 1;
                Ok(Token::Modulo)
            }
            '(' => {
                self.position += 1;
                Ok(Token::LeftParenthesis)
            }
            ')' => {
                self.position += 1;
                Ok(Token::RightParenthesis)
            }
            '0'..='9' | '.' => self.read_number(),
            c if c.is_alphabetic() => self.read_identifier(),
            _ => Err(ParserError::Token(ch))
        }
    }

    fn skip_whitespace(&mut self) {
        while self.position < self.input.len() && self.input[self.position].is_whitespace() {
            self.position += 1;
        }
    }

    fn read_number(&mut self) -> Result<Token> {
        let start = self.position;
        while self.position < self.input.len()
            && (self.input[self.position].is_ascii_digit() || self.input[self.position] == '.')
        {
            self.position += 1;
        }

        let number_str: String = self.input[start..self.position].iter().collect();
        let number: f64 = number_str.parse()?;

        Ok(Token::Number(number))
    }

    // Arithmetic has no named operators, so any word is rejected whole.
    fn read_identifier(&mut self) -> Result<Token> {
        let start = self.position;
        while self.position < self.input.len() && self.input[self.position].is_alphanumeric() {
            self.position += 1;
        }

        let identifier: String = self.input[start..self.position].iter().collect();
        Err(ParserError::Identifier(identifier))
    }
}
