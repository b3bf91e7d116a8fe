use logos::{Lexer, Logos};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extras {
    pub line: usize,
}

/// A sized Verilog literal such as `32'h00000013`, split but not yet
/// evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Literal<'source> {
    pub width: &'source str,
    pub digits: &'source str,
}

/// Tokens of interest in generated ROM text. Anything else fails to lex
/// and is treated as noise by the parser.
#[derive(Logos, Debug, PartialEq)]
#[logos(skip r"[ \t\r\f]+", extras = Extras)]
pub enum Token<'source> {
    #[token("\n", lex_newline)]
    Newline,

    #[regex(r"//[^\n]*", |lexer| &lexer.slice()[2..])]
    Comment(&'source str),

    #[regex("[a-zA-Z_][a-zA-Z0-9_]*", |lexer| lexer.slice())]
    Ident(&'source str),

    #[token("[")]
    IndexOpen,

    #[token("]")]
    IndexClose,

    #[token("=")]
    Assign,

    #[token(";")]
    Semicolon,

    #[regex("[0-9]+", |lexer| lexer.slice())]
    Number(&'source str),

    #[regex("[0-9]+'[hH][0-9a-fA-F_]+", lex_literal)]
    Literal(Literal<'source>),
}

fn lex_newline<'source>(lexer: &mut Lexer<'source, Token<'source>>) {
    lexer.extras.line += 1;
}

fn lex_literal<'source>(lexer: &mut Lexer<'source, Token<'source>>) -> Literal<'source> {
    let slice = lexer.slice();
    let (width, rest) = slice.split_at(slice.find('\'').unwrap_or(0));
    Literal {
        width,
        // Drop the `'h` marker.
        digits: rest.get(2..).unwrap_or_default(),
    }
}
