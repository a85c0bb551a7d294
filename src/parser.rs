use crate::{
    ast::{BinaryOperator, ExprTree, Node},
    error::ParseError,
};

/// Deepest parenthesis/unary-minus nesting the parser accepts. This bound
/// also caps how deep evaluation of an accepted tree can recurse.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Parses a complete arithmetic expression into an owned tree.
///
/// # Errors
/// Any [`ParseError`] kind; the input is never partially consumed into a
/// usable tree on failure.
pub fn parse(input: &str) -> Result<ExprTree, ParseError> {
    let mut parser = Parser::new(input);
    let root = parser.expression()?;
    parser.cursor.skip_whitespace();
    match parser.cursor.peek() {
        Some(ch) => Err(ParseError::TrailingInput {
            ch,
            offset: parser.cursor.offset(),
        }),
        None => Ok(ExprTree::new(root)),
    }
}

/// Read position over the input text.
///
/// There is no token list; the parser looks at characters directly and skips
/// whitespace between them.
struct Cursor<'a> {
    src: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Cursor { src, offset: 0 }
    }

    fn offset(&self) -> usize {
        self.offset
    }

    fn peek(&self) -> Option<char> {
        self.src[self.offset..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.offset += ch.len_utf8();
        Some(ch)
    }

    /// No-op at a non-whitespace character or on an exhausted cursor.
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.bump();
        }
    }
}

struct Parser<'a> {
    cursor: Cursor<'a>,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Parser {
            cursor: Cursor::new(input),
            depth: 0,
        }
    }

    /// expression := term (('+' | '-') term)*
    fn expression(&mut self) -> Result<Node, ParseError> {
        self.cursor.skip_whitespace();
        let mut left = self.term()?;
        self.cursor.skip_whitespace();

        loop {
            let op = match self.cursor.peek() {
                Some('+') => BinaryOperator::Add,
                Some('-') => BinaryOperator::Sub,
                _ => break,
            };
            self.cursor.bump();
            let right = self.term()?;
            left = Node::binary(op, left, right);
            self.cursor.skip_whitespace();
        }

        // Whatever follows a finished expression must close a group or end
        // the input.
        match self.cursor.peek() {
            None | Some(')') => Ok(left),
            Some(ch) => Err(ParseError::TrailingInput {
                ch,
                offset: self.cursor.offset(),
            }),
        }
    }

    /// term := factor (('*' | '/') factor)*
    fn term(&mut self) -> Result<Node, ParseError> {
        self.cursor.skip_whitespace();
        let mut left = self.factor()?;
        self.cursor.skip_whitespace();

        loop {
            let op = match self.cursor.peek() {
                Some('*') => BinaryOperator::Mul,
                Some('/') => BinaryOperator::Div,
                _ => break,
            };
            self.cursor.bump();
            let right = self.factor()?;
            left = Node::binary(op, left, right);
            self.cursor.skip_whitespace();
        }

        Ok(left)
    }

    /// factor := NUMBER | '-' factor | '(' expression ')'
    fn factor(&mut self) -> Result<Node, ParseError> {
        self.cursor.skip_whitespace();
        match self.cursor.peek() {
            Some(ch) if ch.is_ascii_digit() => self.number(),
            Some('-') => {
                let offset = self.cursor.offset();
                self.cursor.bump();
                self.enter(offset)?;
                let inner = self.factor()?;
                self.depth -= 1;
                // -X is multiplication by -1; the sign lives in the tree,
                // not in the literal.
                Ok(Node::binary(BinaryOperator::Mul, inner, Node::number(-1)))
            }
            Some('(') => {
                let open = self.cursor.offset();
                self.cursor.bump();
                self.enter(open)?;
                let node = self.expression()?;
                self.depth -= 1;
                self.cursor.skip_whitespace();
                match self.cursor.peek() {
                    Some(')') => {
                        self.cursor.bump();
                        Ok(node)
                    }
                    _ => Err(ParseError::UnmatchedParenthesis { offset: open }),
                }
            }
            Some(ch) => Err(ParseError::UnexpectedChar {
                ch,
                offset: self.cursor.offset(),
            }),
            None => Err(ParseError::UnexpectedEnd {
                offset: self.cursor.offset(),
            }),
        }
    }

    /// NUMBER := digit+
    ///
    /// Digits accumulate with checked arithmetic, so an oversized literal is
    /// an error rather than a silent wraparound.
    fn number(&mut self) -> Result<Node, ParseError> {
        let start = self.cursor.offset();
        let mut value: i64 = 0;
        while let Some(digit) = self.cursor.peek().and_then(|ch| ch.to_digit(10)) {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(i64::from(digit)))
                .ok_or(ParseError::NumberTooLarge { offset: start })?;
            self.cursor.bump();
        }
        Ok(Node::number(value))
    }

    fn enter(&mut self, offset: usize) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(ParseError::TooDeeplyNested { offset });
        }
        Ok(())
    }
}
