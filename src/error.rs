/// Errors detected while scanning and parsing an expression.
///
/// Every variant carries the byte offset in the input at which the problem
/// was detected, so callers can point at the offending character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Found a character that cannot start a factor.
    UnexpectedChar {
        /// The character encountered.
        ch: char,
        /// Byte offset of the character.
        offset: usize,
    },
    /// The input ended where a factor was required.
    UnexpectedEnd {
        /// Byte offset of the end of input.
        offset: usize,
    },
    /// An opening parenthesis was never closed.
    UnmatchedParenthesis {
        /// Byte offset of the opening parenthesis.
        offset: usize,
    },
    /// Leftover input after a complete expression.
    TrailingInput {
        /// The first leftover character.
        ch: char,
        /// Byte offset of the character.
        offset: usize,
    },
    /// An integer literal does not fit in 64 bits.
    NumberTooLarge {
        /// Byte offset of the first digit.
        offset: usize,
    },
    /// Parenthesis/unary-minus nesting went past the supported depth.
    TooDeeplyNested {
        /// Byte offset where the limit was crossed.
        offset: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedChar { ch, offset } => {
                write!(f, "Unexpected character '{ch}' at position {offset}.")
            }
            Self::UnexpectedEnd { offset } => {
                write!(f, "Unexpected end of input at position {offset}.")
            }
            Self::UnmatchedParenthesis { offset } => write!(
                f,
                "Missing closing parenthesis for the one opened at position {offset}."
            ),
            Self::TrailingInput { ch, offset } => write!(
                f,
                "Unexpected character '{ch}' after the expression at position {offset}."
            ),
            Self::NumberTooLarge { offset } => {
                write!(f, "Number at position {offset} is too large.")
            }
            Self::TooDeeplyNested { offset } => {
                write!(f, "Expression at position {offset} is nested too deeply.")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors raised while evaluating or releasing an expression tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeError {
    /// The right operand of a division evaluated to zero.
    DivisionByZero,
    /// The operation was handed an empty or already-freed tree.
    NullTree,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::NullTree => {
                write!(f, "The expression tree is empty or has already been freed.")
            }
        }
    }
}

impl std::error::Error for RuntimeError {}

/// A failure from either phase, for callers that treat parse-and-evaluate as
/// one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The input could not be parsed.
    Parse(ParseError),
    /// The parsed tree could not be evaluated or released.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
