//! Logos-based lexer for Forge
//!
//! The lexer never fails: characters it cannot classify, and block comments,
//! strings or s-expressions that run off the end of the input, come out as
//! `ERROR` tokens so the parser can report them and keep going.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use rowan::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    /// End offset (exclusive) of this token
    pub fn end(&self) -> TextSize {
        self.offset + TextSize::of(self.text)
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Tokenize and drop trivia
pub fn significant_tokens(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).filter(|t| !t.kind.is_trivia()).collect()
}

fn block_comment(lex: &mut logos::Lexer<LogosToken>) -> bool {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            true
        }
        None => {
            lex.bump(lex.remainder().len());
            false
        }
    }
}

fn file_path(lex: &mut logos::Lexer<LogosToken>) -> bool {
    let rest = lex.remainder();
    match rest.find(['"', '\n']) {
        Some(end) if rest.as_bytes()[end] == b'"' => {
            lex.bump(end + 1);
            true
        }
        Some(end) => {
            lex.bump(end);
            false
        }
        None => {
            lex.bump(rest.len());
            false
        }
    }
}

fn sexpr(lex: &mut logos::Lexer<LogosToken>) -> bool {
    let mut depth = 1usize;
    for (idx, ch) in lex.remainder().char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    lex.bump(idx + 1);
                    return true;
                }
            }
            _ => {}
        }
    }
    lex.bump(lex.remainder().len());
    false
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    #[regex(r"--[^\n]*")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    #[regex(r"#lang[ \t][^\n]*")]
    LangDecl,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"[0-9]+")]
    Number,

    #[token("\"", file_path)]
    FilePath,

    #[regex(r"`[a-zA-Z_][a-zA-Z0-9_]*")]
    AtomName,

    #[token("$(", sexpr)]
    SExpr,

    // =========================================================================
    // MULTI-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("<=>")]
    IffArrow,

    #[token("=>")]
    FatArrow,

    #[token("<=")]
    #[token("=<")]
    LtEq,

    #[token(">=")]
    GtEq,

    #[token("->")]
    Arrow,

    #[token("<:")]
    Subt,

    #[token(":>")]
    Supt,

    #[token("++")]
    PlusPlus,

    #[token("&&")]
    AmpAmp,

    #[token("||")]
    PipePipe,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token("/")]
    Slash,
    #[token(".")]
    Dot,
    #[token("@")]
    At,
    #[token("'")]
    Prime,
    #[token("|")]
    Bar,
    #[token("#")]
    Hash,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("&")]
    Amp,
    #[token("~")]
    Tilde,
    #[token("^")]
    Caret,
    #[token("*")]
    Star,
    #[token("=")]
    Eq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("!")]
    Bang,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    #[token("abstract")]
    AbstractKw,
    #[token("after")]
    AfterKw,
    #[token("all")]
    AllKw,
    #[token("always")]
    AlwaysKw,
    #[token("and")]
    AndKw,
    #[token("as")]
    AsKw,
    #[token("assert")]
    AssertKw,
    #[token("before")]
    BeforeKw,
    #[token("bind")]
    BindKw,
    #[token("but")]
    ButKw,
    #[token("check")]
    CheckKw,
    #[token("consistent")]
    ConsistentKw,
    #[token("disj")]
    DisjKw,
    #[token("else")]
    ElseKw,
    #[token("eval")]
    EvalKw,
    #[token("eventually")]
    EventuallyKw,
    #[token("exactly")]
    ExactlyKw,
    #[token("example")]
    ExampleKw,
    #[token("expect")]
    ExpectKw,
    #[token("extends")]
    ExtendsKw,
    #[token("fact")]
    FactKw,
    #[token("for")]
    ForKw,
    #[token("forge_error")]
    ForgeErrorKw,
    #[token("fun")]
    FunKw,
    #[token("func")]
    FuncKw,
    #[token("historically")]
    HistoricallyKw,
    #[token("iden")]
    IdenKw,
    #[token("iff")]
    IffKw,
    #[token("implies")]
    ImpliesKw,
    #[token("in")]
    InKw,
    #[token("inconsistent")]
    InconsistentKw,
    #[token("inst")]
    InstKw,
    #[token("Int")]
    IntKw,
    #[token("is")]
    IsKw,
    #[token("let")]
    LetKw,
    #[token("lone")]
    LoneKw,
    #[token("module")]
    ModuleKw,
    #[token("necessary")]
    NecessaryKw,
    #[token("ni")]
    NiKw,
    #[token("no")]
    NoKw,
    #[token("none")]
    NoneKw,
    #[token("not")]
    NotKw,
    #[token("once")]
    OnceKw,
    #[token("one")]
    OneKw,
    #[token("open")]
    OpenKw,
    #[token("option")]
    OptionKw,
    #[token("or")]
    OrKw,
    #[token("pfunc")]
    PfuncKw,
    #[token("pred")]
    PredKw,
    #[token("release")]
    ReleaseKw,
    #[token("run")]
    RunKw,
    #[token("sat")]
    SatKw,
    #[token("seq")]
    SeqKw,
    #[token("set")]
    SetKw,
    #[token("sig")]
    SigKw,
    #[token("since")]
    SinceKw,
    #[token("some")]
    SomeKw,
    #[token("sufficient")]
    SufficientKw,
    #[token("suite")]
    SuiteKw,
    #[token("sum")]
    SumKw,
    #[token("test")]
    TestKw,
    #[token("theorem")]
    TheoremKw,
    #[token("this")]
    ThisKw,
    #[token("triggered")]
    TriggeredKw,
    #[token("two")]
    TwoKw,
    #[token("univ")]
    UnivKw,
    #[token("unsat")]
    UnsatKw,
    #[token("until")]
    UntilKw,
    #[token("var")]
    VarKw,
    #[token("wheat")]
    WheatKw,
    #[token("with")]
    WithKw,
    #[token("xor")]
    XorKw,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            // Trivia
            Whitespace => SyntaxKind::WHITESPACE,
            LineComment => SyntaxKind::LINE_COMMENT,
            BlockComment => SyntaxKind::BLOCK_COMMENT,
            LangDecl => SyntaxKind::LANG_DECL,

            // Literals
            Ident => SyntaxKind::IDENT,
            Number => SyntaxKind::NUMBER,
            FilePath => SyntaxKind::FILE_PATH,
            AtomName => SyntaxKind::ATOM_NAME,
            SExpr => SyntaxKind::SEXPR,

            // Multi-char punctuation
            IffArrow => SyntaxKind::IFF_ARROW,
            FatArrow => SyntaxKind::FAT_ARROW,
            LtEq => SyntaxKind::LT_EQ,
            GtEq => SyntaxKind::GT_EQ,
            Arrow => SyntaxKind::ARROW,
            Subt => SyntaxKind::SUBT,
            Supt => SyntaxKind::SUPT,
            PlusPlus => SyntaxKind::PLUS_PLUS,
            AmpAmp => SyntaxKind::AMP_AMP,
            PipePipe => SyntaxKind::PIPE_PIPE,

            // Single-char punctuation
            LBrace => SyntaxKind::L_BRACE,
            RBrace => SyntaxKind::R_BRACE,
            LBracket => SyntaxKind::L_BRACKET,
            RBracket => SyntaxKind::R_BRACKET,
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,
            Comma => SyntaxKind::COMMA,
            Colon => SyntaxKind::COLON,
            Slash => SyntaxKind::SLASH,
            Dot => SyntaxKind::DOT,
            At => SyntaxKind::AT,
            Prime => SyntaxKind::PRIME,
            Bar => SyntaxKind::BAR,
            Hash => SyntaxKind::HASH,
            Plus => SyntaxKind::PLUS,
            Minus => SyntaxKind::MINUS,
            Amp => SyntaxKind::AMP,
            Tilde => SyntaxKind::TILDE,
            Caret => SyntaxKind::CARET,
            Star => SyntaxKind::STAR,
            Eq => SyntaxKind::EQ,
            Lt => SyntaxKind::LT,
            Gt => SyntaxKind::GT,
            Bang => SyntaxKind::BANG,

            // Keywords
            AbstractKw => SyntaxKind::ABSTRACT_KW,
            AfterKw => SyntaxKind::AFTER_KW,
            AllKw => SyntaxKind::ALL_KW,
            AlwaysKw => SyntaxKind::ALWAYS_KW,
            AndKw => SyntaxKind::AND_KW,
            AsKw => SyntaxKind::AS_KW,
            AssertKw => SyntaxKind::ASSERT_KW,
            BeforeKw => SyntaxKind::BEFORE_KW,
            BindKw => SyntaxKind::BIND_KW,
            ButKw => SyntaxKind::BUT_KW,
            CheckKw => SyntaxKind::CHECK_KW,
            ConsistentKw => SyntaxKind::CONSISTENT_KW,
            DisjKw => SyntaxKind::DISJ_KW,
            ElseKw => SyntaxKind::ELSE_KW,
            EvalKw => SyntaxKind::EVAL_KW,
            EventuallyKw => SyntaxKind::EVENTUALLY_KW,
            ExactlyKw => SyntaxKind::EXACTLY_KW,
            ExampleKw => SyntaxKind::EXAMPLE_KW,
            ExpectKw => SyntaxKind::EXPECT_KW,
            ExtendsKw => SyntaxKind::EXTENDS_KW,
            FactKw => SyntaxKind::FACT_KW,
            ForKw => SyntaxKind::FOR_KW,
            ForgeErrorKw => SyntaxKind::FORGE_ERROR_KW,
            FunKw => SyntaxKind::FUN_KW,
            FuncKw => SyntaxKind::FUNC_KW,
            HistoricallyKw => SyntaxKind::HISTORICALLY_KW,
            IdenKw => SyntaxKind::IDEN_KW,
            IffKw => SyntaxKind::IFF_KW,
            ImpliesKw => SyntaxKind::IMPLIES_KW,
            InKw => SyntaxKind::IN_KW,
            InconsistentKw => SyntaxKind::INCONSISTENT_KW,
            InstKw => SyntaxKind::INST_KW,
            IntKw => SyntaxKind::INT_KW,
            IsKw => SyntaxKind::IS_KW,
            LetKw => SyntaxKind::LET_KW,
            LoneKw => SyntaxKind::LONE_KW,
            ModuleKw => SyntaxKind::MODULE_KW,
            NecessaryKw => SyntaxKind::NECESSARY_KW,
            NiKw => SyntaxKind::NI_KW,
            NoKw => SyntaxKind::NO_KW,
            NoneKw => SyntaxKind::NONE_KW,
            NotKw => SyntaxKind::NOT_KW,
            OnceKw => SyntaxKind::ONCE_KW,
            OneKw => SyntaxKind::ONE_KW,
            OpenKw => SyntaxKind::OPEN_KW,
            OptionKw => SyntaxKind::OPTION_KW,
            OrKw => SyntaxKind::OR_KW,
            PfuncKw => SyntaxKind::PFUNC_KW,
            PredKw => SyntaxKind::PRED_KW,
            ReleaseKw => SyntaxKind::RELEASE_KW,
            RunKw => SyntaxKind::RUN_KW,
            SatKw => SyntaxKind::SAT_KW,
            SeqKw => SyntaxKind::SEQ_KW,
            SetKw => SyntaxKind::SET_KW,
            SigKw => SyntaxKind::SIG_KW,
            SinceKw => SyntaxKind::SINCE_KW,
            SomeKw => SyntaxKind::SOME_KW,
            SufficientKw => SyntaxKind::SUFFICIENT_KW,
            SuiteKw => SyntaxKind::SUITE_KW,
            SumKw => SyntaxKind::SUM_KW,
            TestKw => SyntaxKind::TEST_KW,
            TheoremKw => SyntaxKind::THEOREM_KW,
            ThisKw => SyntaxKind::THIS_KW,
            TriggeredKw => SyntaxKind::TRIGGERED_KW,
            TwoKw => SyntaxKind::TWO_KW,
            UnivKw => SyntaxKind::UNIV_KW,
            UnsatKw => SyntaxKind::UNSAT_KW,
            UntilKw => SyntaxKind::UNTIL_KW,
            VarKw => SyntaxKind::VAR_KW,
            WheatKw => SyntaxKind::WHEAT_KW,
            WithKw => SyntaxKind::WITH_KW,
            XorKw => SyntaxKind::XOR_KW,
        }
    }
}
