//! Recursive-descent parser for the Java declaration skeleton.
//!
//! The parser walks the token stream produced by the scanner and builds
//! the typed contexts in [`crate::ast`]. Everything below a member
//! signature (bodies, initializers, annotation arguments) is skipped by
//! balanced-delimiter matching. Type usages are assembled back into
//! compact text with no whitespace, which is the form the downstream
//! generic signature parser consumes (`Map<String,List<Foo>>`,
//! `?extendsFoo`).

use std::fmt;

use crate::ast::*;
use crate::scanner::{Token, TokenKind, tokenize};

/// Structural parse failure; aborts the run for the offending file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub line: u32,
}

impl ParseError {
    pub fn new(message: impl Into<String>, line: u32) -> Self {
        Self {
            message: message.into(),
            line,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Parse one Java source file into a compilation unit context.
pub fn parse_compilation_unit(source: &str) -> Result<CompilationUnitContext, ParseError> {
    let tokens = tokenize(source)?;
    let mut parser = Parser { tokens, pos: 0 };
    let unit = parser.parse_unit()?;
    tracing::trace!(
        package = unit.package.as_deref().unwrap_or("<default>"),
        types = unit.types.len(),
        "parsed compilation unit"
    );
    Ok(unit)
}

const MODIFIERS: &[&str] = &[
    "public",
    "private",
    "protected",
    "static",
    "final",
    "abstract",
    "sealed",
    "default",
    "native",
    "strictfp",
    "synchronized",
    "transient",
    "volatile",
];

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn current(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn kind(&self) -> TokenKind {
        self.current().kind
    }

    fn text(&self) -> &str {
        &self.current().text
    }

    fn line(&self) -> u32 {
        self.current().line
    }

    fn nth(&self, offset: usize) -> &Token {
        let idx = (self.pos + offset).min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    fn bump(&mut self) -> &Token {
        let idx = self.pos.min(self.tokens.len() - 1);
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        &self.tokens[idx]
    }

    fn at_word(&self, word: &str) -> bool {
        self.kind() == TokenKind::Identifier && self.text() == word
    }

    fn eat_word(&mut self, word: &str) -> bool {
        if self.at_word(word) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> Result<&Token, ParseError> {
        if self.kind() == kind {
            Ok(self.bump())
        } else {
            Err(ParseError::new(
                format!("expected {what}, found `{}`", self.text()),
                self.line(),
            ))
        }
    }

    fn expect_identifier(&mut self, what: &str) -> Result<String, ParseError> {
        if self.kind() == TokenKind::Identifier {
            Ok(self.bump().text.clone())
        } else {
            Err(ParseError::new(
                format!("expected {what}, found `{}`", self.text()),
                self.line(),
            ))
        }
    }

    // ---- compilation unit ----------------------------------------------

    fn parse_unit(&mut self) -> Result<CompilationUnitContext, ParseError> {
        let mut unit = CompilationUnitContext::default();

        // package-info.java puts annotations in front of the package clause.
        while self.kind() == TokenKind::At && self.nth(1).text != "interface" {
            let _ = self.parse_annotation()?;
        }

        if self.eat_word("package") {
            unit.package = Some(self.parse_qualified_name()?);
            self.expect(TokenKind::Semicolon, "`;` after package clause")?;
        }

        while self.at_word("import") {
            self.bump();
            let is_static = self.eat_word("static");
            let path = self.parse_qualified_name()?;
            let mut wildcard = false;
            if self.kind() == TokenKind::Dot {
                // `.*`; parse_qualified_name stops before `.` + non-identifier
                self.bump();
                if self.text() == "*" {
                    self.bump();
                    wildcard = true;
                }
            }
            self.expect(TokenKind::Semicolon, "`;` after import")?;
            unit.imports.push(ImportContext {
                path,
                wildcard,
                is_static,
            });
        }

        while self.kind() != TokenKind::Eof {
            if self.kind() == TokenKind::Semicolon {
                self.bump();
                continue;
            }
            let ty = self.parse_type_declaration()?;
            unit.types.push(ty);
        }

        Ok(unit)
    }

    fn parse_qualified_name(&mut self) -> Result<String, ParseError> {
        let mut name = self.expect_identifier("identifier")?;
        while self.kind() == TokenKind::Dot && self.nth(1).kind == TokenKind::Identifier {
            self.bump();
            name.push('.');
            name.push_str(&self.bump().text.clone());
        }
        Ok(name)
    }

    // ---- annotations and modifiers -------------------------------------

    /// Parse `@Name` or `@a.b.Name(...)`, returning the dotted name as
    /// written. Arguments are skipped.
    fn parse_annotation(&mut self) -> Result<String, ParseError> {
        self.expect(TokenKind::At, "`@`")?;
        let name = self.parse_qualified_name()?;
        if self.kind() == TokenKind::LParen {
            self.skip_balanced(TokenKind::LParen, TokenKind::RParen)?;
        }
        Ok(name)
    }

    /// Collect modifiers and annotations in any interleaving.
    fn parse_modifiers(
        &mut self,
        modifiers: &mut Vec<String>,
        annotations: &mut Vec<String>,
    ) -> Result<(), ParseError> {
        loop {
            if self.kind() == TokenKind::At && self.nth(1).text != "interface" {
                annotations.push(self.parse_annotation()?);
                continue;
            }
            if self.kind() == TokenKind::Identifier {
                let word = self.text();
                if MODIFIERS.contains(&word) {
                    modifiers.push(self.bump().text.clone());
                    continue;
                }
                // `non-sealed` lexes as three tokens.
                if word == "non" && self.nth(1).text == "-" && self.nth(2).text == "sealed" {
                    self.bump();
                    self.bump();
                    self.bump();
                    modifiers.push("non-sealed".to_string());
                    continue;
                }
            }
            return Ok(());
        }
    }

    // ---- type declarations ---------------------------------------------

    fn parse_type_declaration(&mut self) -> Result<TypeContext, ParseError> {
        let javadoc = self.current().doc.clone();
        let mut modifiers = Vec::new();
        let mut annotations = Vec::new();
        self.parse_modifiers(&mut modifiers, &mut annotations)?;

        let kind = if self.eat_word("class") {
            TypeKindContext::Class
        } else if self.eat_word("interface") {
            TypeKindContext::Interface
        } else if self.eat_word("enum") {
            TypeKindContext::Enum
        } else if self.eat_word("record") {
            TypeKindContext::Record
        } else if self.kind() == TokenKind::At && self.nth(1).text == "interface" {
            self.bump();
            self.bump();
            TypeKindContext::Annotation
        } else {
            return Err(ParseError::new(
                format!("expected type declaration, found `{}`", self.text()),
                self.line(),
            ));
        };

        let name = self.expect_identifier("type name")?;
        let mut ty = TypeContext {
            kind,
            name,
            modifiers,
            annotations,
            type_params: Vec::new(),
            superclass: None,
            interfaces: Vec::new(),
            javadoc,
            constants: Vec::new(),
            components: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
            types: Vec::new(),
        };

        if self.kind() == TokenKind::Lt {
            ty.type_params = self.parse_type_parameters()?;
        }

        if kind == TypeKindContext::Record {
            ty.components = self.parse_parameter_list()?;
        }

        if self.eat_word("extends") {
            if kind == TypeKindContext::Interface {
                ty.interfaces = self.parse_type_use_list()?;
            } else {
                ty.superclass = Some(self.parse_type_use()?);
            }
        }

        if self.eat_word("implements") {
            let mut uses = self.parse_type_use_list()?;
            ty.interfaces.append(&mut uses);
        }

        if self.eat_word("permits") {
            // Sealed hierarchies record the permit list in source only;
            // nothing downstream consumes it.
            let _ = self.parse_type_use_list()?;
        }

        self.expect(TokenKind::LBrace, "`{` opening type body")?;
        if kind == TypeKindContext::Enum {
            self.parse_enum_constants(&mut ty)?;
        }
        self.parse_members(&mut ty)?;
        Ok(ty)
    }

    fn parse_type_parameters(&mut self) -> Result<Vec<TypeParameterContext>, ParseError> {
        self.expect(TokenKind::Lt, "`<`")?;
        let mut params = Vec::new();
        loop {
            while self.kind() == TokenKind::At {
                let _ = self.parse_annotation()?;
            }
            let name = self.expect_identifier("type parameter name")?;
            let mut bounds = Vec::new();
            if self.eat_word("extends") {
                loop {
                    bounds.push(self.parse_type_text()?);
                    if self.kind() == TokenKind::Amp {
                        self.bump();
                        continue;
                    }
                    break;
                }
            }
            params.push(TypeParameterContext { name, bounds });
            if self.kind() == TokenKind::Comma {
                self.bump();
                continue;
            }
            self.expect(TokenKind::Gt, "`>` closing type parameters")?;
            return Ok(params);
        }
    }

    fn parse_type_use_list(&mut self) -> Result<Vec<TypeUseContext>, ParseError> {
        let mut uses = vec![self.parse_type_use()?];
        while self.kind() == TokenKind::Comma {
            self.bump();
            uses.push(self.parse_type_use()?);
        }
        Ok(uses)
    }

    /// A supertype usage: qualified base name plus raw argument texts.
    fn parse_type_use(&mut self) -> Result<TypeUseContext, ParseError> {
        while self.kind() == TokenKind::At {
            let _ = self.parse_annotation()?;
        }
        let name = self.parse_qualified_name()?;
        let mut arguments = Vec::new();
        if self.kind() == TokenKind::Lt {
            arguments = self.parse_type_argument_texts()?;
        }
        Ok(TypeUseContext { name, arguments })
    }

    /// Split `<...>` into raw top-level argument texts, depth-aware.
    fn parse_type_argument_texts(&mut self) -> Result<Vec<String>, ParseError> {
        self.expect(TokenKind::Lt, "`<`")?;
        let mut arguments = Vec::new();
        let mut current = String::new();
        let mut depth = 1usize;
        loop {
            match self.kind() {
                TokenKind::Lt => {
                    depth += 1;
                    current.push('<');
                    self.bump();
                }
                TokenKind::Gt => {
                    depth -= 1;
                    if depth == 0 {
                        self.bump();
                        if !current.is_empty() {
                            arguments.push(current);
                        }
                        return Ok(arguments);
                    }
                    current.push('>');
                    self.bump();
                }
                TokenKind::Comma if depth == 1 => {
                    self.bump();
                    arguments.push(std::mem::take(&mut current));
                }
                TokenKind::At => {
                    let _ = self.parse_annotation()?;
                }
                TokenKind::Eof => {
                    return Err(ParseError::new("unterminated type arguments", self.line()));
                }
                _ => {
                    current.push_str(&self.bump().text.clone());
                }
            }
        }
    }

    /// Assemble one type usage into compact text: qualified name, balanced
    /// generics, and array suffixes. Type-site annotations are dropped.
    fn parse_type_text(&mut self) -> Result<String, ParseError> {
        while self.kind() == TokenKind::At {
            let _ = self.parse_annotation()?;
        }
        let mut text = String::new();
        if self.kind() == TokenKind::Question {
            // Bare or bounded wildcard: `?`, `? extends Foo`, `? super Foo`.
            self.bump();
            text.push('?');
            if self.at_word("extends") || self.at_word("super") {
                text.push_str(&self.bump().text.clone());
                text.push_str(&self.parse_type_text()?);
            }
            return Ok(text);
        }

        text.push_str(&self.parse_qualified_name()?);

        if self.kind() == TokenKind::Lt {
            text.push('<');
            let mut depth = 1usize;
            self.bump();
            loop {
                match self.kind() {
                    TokenKind::Lt => {
                        depth += 1;
                        text.push('<');
                        self.bump();
                    }
                    TokenKind::Gt => {
                        depth -= 1;
                        text.push('>');
                        self.bump();
                        if depth == 0 {
                            break;
                        }
                    }
                    TokenKind::At => {
                        let _ = self.parse_annotation()?;
                    }
                    TokenKind::Eof => {
                        return Err(ParseError::new("unterminated type arguments", self.line()));
                    }
                    _ => {
                        text.push_str(&self.bump().text.clone());
                    }
                }
            }
        }

        loop {
            while self.kind() == TokenKind::At {
                let _ = self.parse_annotation()?;
            }
            if self.kind() == TokenKind::LBracket && self.nth(1).kind == TokenKind::RBracket {
                self.bump();
                self.bump();
                text.push_str("[]");
            } else {
                break;
            }
        }
        Ok(text)
    }

    // ---- enum constants -------------------------------------------------

    fn parse_enum_constants(&mut self, ty: &mut TypeContext) -> Result<(), ParseError> {
        loop {
            match self.kind() {
                TokenKind::RBrace => return Ok(()),
                TokenKind::Semicolon => {
                    self.bump();
                    return Ok(());
                }
                TokenKind::Comma => {
                    self.bump();
                }
                _ => {
                    let javadoc = self.current().doc.clone();
                    while self.kind() == TokenKind::At {
                        let _ = self.parse_annotation()?;
                    }
                    let name = self.expect_identifier("enum constant name")?;
                    if self.kind() == TokenKind::LParen {
                        self.skip_balanced(TokenKind::LParen, TokenKind::RParen)?;
                    }
                    if self.kind() == TokenKind::LBrace {
                        // Constant with a class body.
                        self.skip_balanced(TokenKind::LBrace, TokenKind::RBrace)?;
                    }
                    ty.constants.push(EnumConstantContext { name, javadoc });
                }
            }
        }
    }

    // ---- members ---------------------------------------------------------

    fn parse_members(&mut self, ty: &mut TypeContext) -> Result<(), ParseError> {
        loop {
            match self.kind() {
                TokenKind::RBrace => {
                    self.bump();
                    return Ok(());
                }
                TokenKind::Eof => {
                    return Err(ParseError::new(
                        format!("unterminated body of `{}`", ty.name),
                        self.line(),
                    ));
                }
                TokenKind::Semicolon => {
                    self.bump();
                }
                _ => self.parse_member(ty)?,
            }
        }
    }

    fn parse_member(&mut self, ty: &mut TypeContext) -> Result<(), ParseError> {
        let javadoc = self.current().doc.clone();
        let mut modifiers = Vec::new();
        let mut annotations = Vec::new();
        self.parse_modifiers(&mut modifiers, &mut annotations)?;

        // Nested type declarations.
        if self.at_word("class")
            || self.at_word("interface")
            || self.at_word("enum")
            || self.at_word("record")
            || (self.kind() == TokenKind::At && self.nth(1).text == "interface")
        {
            // Rewind-free: hand the collected prefix to the declaration parser.
            let nested = self.parse_type_declaration_with(javadoc, modifiers, annotations)?;
            ty.types.push(nested);
            return Ok(());
        }

        // Instance or static initializer block.
        if self.kind() == TokenKind::LBrace {
            self.skip_balanced(TokenKind::LBrace, TokenKind::RBrace)?;
            return Ok(());
        }

        // Generic method: `<T> T foo(...)`.
        let mut type_params = Vec::new();
        if self.kind() == TokenKind::Lt {
            type_params = self.parse_type_parameters()?;
        }

        // Constructor: type name followed directly by `(`.
        if self.kind() == TokenKind::Identifier
            && self.text() == ty.name
            && self.nth(1).kind == TokenKind::LParen
        {
            self.bump();
            let parameters = self.parse_parameter_list()?;
            self.skip_to_member_end()?;
            ty.constructors.push(ConstructorContext {
                parameters,
                modifiers,
                javadoc,
            });
            return Ok(());
        }

        let type_text = self.parse_type_text()?;
        let name = self.expect_identifier("member name")?;

        if self.kind() == TokenKind::LParen {
            let parameters = self.parse_parameter_list()?;
            self.skip_to_member_end()?;
            ty.methods.push(MethodContext {
                name,
                return_type_text: type_text,
                type_params,
                parameters,
                modifiers,
                annotations,
                javadoc,
            });
            return Ok(());
        }

        // Field declaration, possibly with several declarators.
        self.parse_field_declarators(ty, type_text, name, modifiers, annotations, javadoc)
    }

    fn parse_type_declaration_with(
        &mut self,
        javadoc: Option<String>,
        modifiers: Vec<String>,
        annotations: Vec<String>,
    ) -> Result<TypeContext, ParseError> {
        let mut nested = self.parse_type_declaration()?;
        if nested.javadoc.is_none() {
            nested.javadoc = javadoc;
        }
        let mut prefix = modifiers;
        prefix.append(&mut nested.modifiers);
        nested.modifiers = prefix;
        let mut ann = annotations;
        ann.append(&mut nested.annotations);
        nested.annotations = ann;
        Ok(nested)
    }

    fn parse_field_declarators(
        &mut self,
        ty: &mut TypeContext,
        type_text: String,
        first_name: String,
        modifiers: Vec<String>,
        annotations: Vec<String>,
        javadoc: Option<String>,
    ) -> Result<(), ParseError> {
        let mut name = first_name;
        loop {
            let mut declarator_type = type_text.clone();
            while self.kind() == TokenKind::LBracket && self.nth(1).kind == TokenKind::RBracket {
                self.bump();
                self.bump();
                declarator_type.push_str("[]");
            }
            if self.kind() == TokenKind::Eq {
                self.bump();
                self.skip_initializer()?;
            }
            ty.fields.push(FieldContext {
                name,
                type_text: declarator_type,
                modifiers: modifiers.clone(),
                annotations: annotations.clone(),
                javadoc: javadoc.clone(),
            });
            if self.kind() == TokenKind::Comma {
                self.bump();
                name = self.expect_identifier("field name")?;
                continue;
            }
            self.expect(TokenKind::Semicolon, "`;` after field")?;
            return Ok(());
        }
    }

    fn parse_parameter_list(&mut self) -> Result<Vec<ParameterContext>, ParseError> {
        self.expect(TokenKind::LParen, "`(`")?;
        let mut parameters = Vec::new();
        if self.kind() == TokenKind::RParen {
            self.bump();
            return Ok(parameters);
        }
        loop {
            let mut annotations = Vec::new();
            loop {
                if self.kind() == TokenKind::At {
                    annotations.push(self.parse_annotation()?);
                    continue;
                }
                if self.at_word("final") {
                    self.bump();
                    continue;
                }
                break;
            }
            let mut type_text = self.parse_type_text()?;
            let varargs = if self.kind() == TokenKind::Ellipsis {
                self.bump();
                true
            } else {
                false
            };
            if self.at_word("this") {
                // Receiver parameter; not part of the signature.
                self.bump();
            } else {
                let name = self.expect_identifier("parameter name")?;
                while self.kind() == TokenKind::LBracket && self.nth(1).kind == TokenKind::RBracket
                {
                    self.bump();
                    self.bump();
                    type_text.push_str("[]");
                }
                parameters.push(ParameterContext {
                    name,
                    type_text,
                    annotations,
                    varargs,
                });
            }
            if self.kind() == TokenKind::Comma {
                self.bump();
                continue;
            }
            self.expect(TokenKind::RParen, "`)` closing parameters")?;
            return Ok(parameters);
        }
    }

    /// After a parameter list: optional `throws` clause, then either a
    /// skipped body, an annotation-member `default` value, or `;`.
    fn skip_to_member_end(&mut self) -> Result<(), ParseError> {
        if self.eat_word("throws") {
            loop {
                let _ = self.parse_qualified_name()?;
                if self.kind() == TokenKind::Comma {
                    self.bump();
                    continue;
                }
                break;
            }
        }
        if self.eat_word("default") {
            while !matches!(self.kind(), TokenKind::Semicolon | TokenKind::Eof) {
                if self.kind() == TokenKind::LBrace {
                    self.skip_balanced(TokenKind::LBrace, TokenKind::RBrace)?;
                } else {
                    self.bump();
                }
            }
        }
        match self.kind() {
            TokenKind::Semicolon => {
                self.bump();
                Ok(())
            }
            TokenKind::LBrace => self.skip_balanced(TokenKind::LBrace, TokenKind::RBrace),
            _ => Err(ParseError::new(
                format!("expected `;` or method body, found `{}`", self.text()),
                self.line(),
            )),
        }
    }

    /// Skip a field initializer: everything up to a top-level `,` or `;`.
    fn skip_initializer(&mut self) -> Result<(), ParseError> {
        loop {
            match self.kind() {
                TokenKind::Semicolon | TokenKind::Comma => return Ok(()),
                TokenKind::LBrace => self.skip_balanced(TokenKind::LBrace, TokenKind::RBrace)?,
                TokenKind::LParen => self.skip_balanced(TokenKind::LParen, TokenKind::RParen)?,
                TokenKind::LBracket => {
                    self.skip_balanced(TokenKind::LBracket, TokenKind::RBracket)?;
                }
                TokenKind::Eof => {
                    return Err(ParseError::new("unterminated field initializer", self.line()));
                }
                _ => {
                    self.bump();
                }
            }
        }
    }

    fn skip_balanced(&mut self, open: TokenKind, close: TokenKind) -> Result<(), ParseError> {
        let start_line = self.line();
        self.expect(open, "opening delimiter")?;
        let mut depth = 1usize;
        while depth > 0 {
            match self.kind() {
                k if k == open => depth += 1,
                k if k == close => depth -= 1,
                TokenKind::Eof => {
                    return Err(ParseError::new("unbalanced delimiters", start_line));
                }
                _ => {}
            }
            self.bump();
        }
        Ok(())
    }
}
