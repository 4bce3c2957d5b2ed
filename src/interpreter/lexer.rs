use logos::Logos;
use tracing::trace;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// The kind of a lexical token.
///
/// Every lexeme of the language falls into exactly one of these kinds. Where
/// two patterns can match the same input, logos takes the longest match and
/// prefers fixed tokens over regular expressions on a tie, so `while` is a
/// keyword while `whiley` is a name, and `==` is never split into two `=`.
///
/// Boolean literals are the exception: they are matched as a prefix before
/// names are, so `trueish` is `true` followed by the name `ish`. [`Lexer`]
/// takes care of that split.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// `;`
    #[token(";")]
    Semicolon,
    /// `{`
    #[token("{")]
    BraceOpen,
    /// `}`
    #[token("}")]
    BraceClose,
    /// `(`
    #[token("(")]
    ParenOpen,
    /// `)`
    #[token(")")]
    ParenClose,
    /// `:=`
    #[token(":=")]
    Declare,
    /// `=`
    #[token("=")]
    Assign,
    /// `while`
    #[token("while")]
    While,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `print`
    #[token("print")]
    Print,
    /// Integer literals with an optional leading minus, such as `42` or `-1`.
    #[regex(r"-?[0-9]+")]
    Int,
    /// `true` or `false`.
    #[token("true")]
    #[token("false")]
    Bool,
    /// Variable names. Names start with a lowercase letter.
    #[regex(r"[a-z][A-Za-z0-9_]*")]
    Name,
    /// `+`
    #[token("+")]
    Plus,
    /// `*`
    #[token("*")]
    Star,
    /// `||`
    #[token("||")]
    Or,
    /// `&&`
    #[token("&&")]
    And,
    /// `!`
    #[token("!")]
    Not,
    /// `==`
    #[token("==")]
    Equal,
    /// `<`
    #[token("<")]
    Less,
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks. Counted, never emitted.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// End of the source unit. Produced by [`Lexer`], never by logos itself.
    EndOfInput,
}

/// Additional information carried by the lexer during tokenization.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A classified lexeme together with the line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:   TokenKind,
    /// The matched source text. Empty for [`TokenKind::EndOfInput`].
    pub lexeme: String,
    /// The 1-based source line.
    pub line:   usize,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}({})", self.kind, self.lexeme)
    }
}

/// A pull-based lexer over one source unit.
///
/// Each call to [`Lexer::next_token`] produces exactly one token. No tokens
/// are buffered; the parser keeps the single lookahead it needs. Once the
/// input is exhausted every further call yields [`TokenKind::EndOfInput`].
///
/// # Example
/// ```
/// use imp::interpreter::lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("x := -1;");
///
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Name);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Declare);
///
/// let literal = lexer.next_token().unwrap();
/// assert_eq!(literal.kind, TokenKind::Int);
/// assert_eq!(literal.lexeme, "-1");
///
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Semicolon);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndOfInput);
/// ```
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
}

/// The boolean literal `word` starts with, if any.
fn boolean_prefix(word: &str) -> Option<&str> {
    ["true", "false"].into_iter()
                     .find(|literal| word.starts_with(literal))
                     .map(|literal| &word[..literal.len()])
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned before the first token, on line 1.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: TokenKind::lexer_with_extras(source, LexerExtras { line: 1 }) }
    }

    /// Advances over exactly one token.
    ///
    /// Whitespace and comments are skipped, counting line breaks on the way.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedCharacter`] if the input at the cursor
    /// does not start any token. Lexing of the unit cannot continue after
    /// that.
    pub fn next_token(&mut self) -> ParseResult<Token> {
        let next = self.inner.next();
        let line = self.inner.extras.line;

        match next {
            Some(Ok(kind)) => {
                let mut kind = kind;
                let mut lexeme = self.inner.slice();

                if kind == TokenKind::Name
                   && let Some(literal) = boolean_prefix(lexeme)
                {
                    self.resume_after(literal.len());
                    kind = TokenKind::Bool;
                    lexeme = literal;
                }

                let token = Token { kind,
                                    lexeme: lexeme.to_string(),
                                    line };
                trace!(kind = ?token.kind, lexeme = %token.lexeme, line, "lexed token");
                Ok(token)
            },
            Some(Err(())) => {
                let character = self.inner.slice().chars().next().unwrap_or_default();
                Err(ParseError::UnexpectedCharacter { character, line })
            },
            None => Ok(Token { kind: TokenKind::EndOfInput,
                               lexeme: String::new(),
                               line }),
        }
    }

    /// Restarts lexing `consumed` bytes into the current token, keeping the
    /// line count.
    fn resume_after(&mut self, consumed: usize) {
        let rest = &self.inner.source()[self.inner.span().start + consumed..];
        let extras = std::mem::take(&mut self.inner.extras);
        self.inner = TokenKind::lexer_with_extras(rest, extras);
    }

    /// The line the lexer cursor is currently on.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.inner.extras.line
    }
}

/// Lexes a whole source unit into a token list, without the trailing
/// end-of-input token.
///
/// This is a debugging aid; the parser itself pulls tokens one at a time.
///
/// # Errors
/// Returns the first lexical error encountered.
///
/// # Example
/// ```
/// use imp::interpreter::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<_> = tokenize("print x == y; // done")
///     .unwrap()
///     .into_iter()
///     .map(|t| t.kind)
///     .collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Print,
///             TokenKind::Name,
///             TokenKind::Equal,
///             TokenKind::Name,
///             TokenKind::Semicolon]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<Token>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token()?;
        if token.kind == TokenKind::EndOfInput {
            return Ok(tokens);
        }
        tokens.push(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn negative_integer_is_one_token() {
        let tokens = tokenize("-12").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Int);
        assert_eq!(tokens[0].lexeme, "-12");
    }

    #[test]
    fn keywords_and_booleans_are_not_names() {
        use TokenKind::{Bool, Else, If, Name, Print, While};

        assert_eq!(kinds("while if else print true false x"),
                   [While, If, Else, Print, Bool, Bool, Name]);
    }

    #[test]
    fn longer_identifiers_beat_keyword_prefixes() {
        assert_eq!(kinds("whiley iffy printer elsewhere"), [TokenKind::Name; 4]);
    }

    #[test]
    fn boolean_prefix_splits_off_a_literal() {
        let tokens = tokenize("trueish falsey").unwrap();
        let pairs: Vec<_> = tokens.iter().map(|t| (t.kind, t.lexeme.as_str())).collect();

        assert_eq!(pairs,
                   [(TokenKind::Bool, "true"),
                    (TokenKind::Name, "ish"),
                    (TokenKind::Bool, "false"),
                    (TokenKind::Name, "y")]);
    }

    #[test]
    fn boolean_prefix_keeps_lexing_the_rest() {
        assert_eq!(kinds("true9 falsely;"),
                   [TokenKind::Bool,
                    TokenKind::Int,
                    TokenKind::Bool,
                    TokenKind::Name,
                    TokenKind::Semicolon]);
        assert!(matches!(tokenize("trueCount"),
                         Err(ParseError::UnexpectedCharacter { character: 'C', .. })));
    }

    #[test]
    fn boolean_prefix_keeps_line_numbers() {
        let tokens = tokenize("x := 1;\ny := truex;").unwrap();

        assert_eq!(tokens[6].kind, TokenKind::Bool);
        assert_eq!(tokens[6].line, 2);
        assert_eq!(tokens[7].lexeme, "x");
        assert_eq!(tokens[7].line, 2);
    }

    #[test]
    fn identifiers_allow_mixed_case_digits_and_underscores() {
        let tokens = tokenize("fooBar_9").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Name);
        assert_eq!(tokens[0].lexeme, "fooBar_9");
    }

    #[test]
    fn multi_character_operators_are_greedy() {
        use TokenKind::{And, Assign, Declare, Equal, Less, Not, Or};

        assert_eq!(kinds(":= = == || && ! <"), [Declare, Assign, Equal, Or, And, Not, Less]);
        assert_eq!(kinds("x=y"), [TokenKind::Name, Assign, TokenKind::Name]);
        assert_eq!(kinds("x==y"), [TokenKind::Name, Equal, TokenKind::Name]);
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(kinds("print 42; // this is a comment"),
                   [TokenKind::Print, TokenKind::Int, TokenKind::Semicolon]);
    }

    #[test]
    fn line_numbers_count_newlines() {
        let tokens = tokenize("x := 1;\n\n// note\ny := 2;").unwrap();
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[4].lexeme, "y");
        assert_eq!(tokens[4].line, 4);
    }

    #[test]
    fn end_of_input_is_sticky() {
        let mut lexer = Lexer::new("  ");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndOfInput);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndOfInput);
    }

    #[test]
    fn unknown_character_reports_character_and_line() {
        match tokenize("x := 1;\ny := 2 % 3;") {
            Err(ParseError::UnexpectedCharacter { character, line }) => {
                assert_eq!(character, '%');
                assert_eq!(line, 2);
            },
            other => panic!("expected a lexical error, got {other:?}"),
        }
    }

    #[test]
    fn uppercase_leading_word_is_rejected() {
        assert!(matches!(tokenize("X := 1;"),
                         Err(ParseError::UnexpectedCharacter { character: 'X', .. })));
    }
}
