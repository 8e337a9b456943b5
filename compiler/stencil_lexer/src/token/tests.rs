use super::*;
use pretty_assertions::assert_eq;

const ALL_KINDS: [TokenKind; 8] = [
    TokenKind::Text,
    TokenKind::OpenComment,
    TokenKind::CloseComment,
    TokenKind::OpenVariable,
    TokenKind::CloseVariable,
    TokenKind::OpenTag,
    TokenKind::CloseTag,
    TokenKind::EndOfInput,
];

// === Span ===

#[test]
fn span_len_and_empty() {
    let span = Span::new(3, 7);
    assert_eq!(span.len(), 4);
    assert!(!span.is_empty());
    assert!(Span::point(9).is_empty());
}

#[test]
fn span_formats_as_range() {
    assert_eq!(format!("{}", Span::new(1, 4)), "1..4");
    assert_eq!(format!("{:?}", Span::new(0, 0)), "0..0");
}

// === TokenKind ===

#[test]
fn names_match_variants() {
    let names: Vec<&str> = ALL_KINDS.iter().map(|k| k.name()).collect();
    assert_eq!(
        names,
        vec![
            "Text",
            "OpenComment",
            "CloseComment",
            "OpenVariable",
            "CloseVariable",
            "OpenTag",
            "CloseTag",
            "EndOfInput",
        ]
    );
}

#[test]
fn lexemes() {
    assert_eq!(TokenKind::Text.lexeme(), None);
    assert_eq!(TokenKind::EndOfInput.lexeme(), None);
    assert_eq!(TokenKind::OpenComment.lexeme(), Some("{#"));
    assert_eq!(TokenKind::CloseComment.lexeme(), Some("#}"));
    assert_eq!(TokenKind::OpenVariable.lexeme(), Some("{{"));
    assert_eq!(TokenKind::CloseVariable.lexeme(), Some("}}"));
    assert_eq!(TokenKind::OpenTag.lexeme(), Some("{%"));
    assert_eq!(TokenKind::CloseTag.lexeme(), Some("%}"));
}

#[test]
fn open_close_partition_markers() {
    for kind in ALL_KINDS {
        assert_eq!(kind.is_marker(), kind.is_open() || kind.is_close());
        assert!(!(kind.is_open() && kind.is_close()));
    }
    assert!(!TokenKind::Text.is_marker());
    assert!(!TokenKind::EndOfInput.is_marker());
}

// === Rendering ===

#[test]
fn renders_markers_by_name() {
    let token = Token::marker(TokenKind::OpenTag, Span::new(0, 2));
    assert_eq!(token.to_string(), "OpenTag");
    assert_eq!(Token::end_of_input(5).to_string(), "EndOfInput");
}

#[test]
fn renders_text_quoted() {
    let token = Token::text("hello world".to_owned(), Span::new(0, 11));
    assert_eq!(token.to_string(), "Text \"hello world\"");
}

#[test]
fn renders_newlines_escaped() {
    let token = Token::text("a\nb\n".to_owned(), Span::new(0, 4));
    assert_eq!(token.to_string(), "Text \"a\\nb\\n\"");
}

#[test]
fn rendering_leaves_other_characters_alone() {
    let token = Token::text("say \"hi\"\t'x'".to_owned(), Span::new(0, 13));
    assert_eq!(token.to_string(), "Text \"say \"hi\"\t'x'\"");
}

// === Source text ===

#[test]
fn source_text_of_each_kind() {
    let text = Token::text(" b ".to_owned(), Span::new(2, 5));
    assert_eq!(text.source_text(), " b ");
    let open = Token::marker(TokenKind::OpenVariable, Span::new(0, 2));
    assert_eq!(open.source_text(), "{{");
    let end = Token::end_of_input(7);
    assert_eq!(end.source_text(), "");
    assert!(end.is_end());
    assert_eq!(end.span, Span::point(7));
}

// === Serialization ===

#[cfg(feature = "serde")]
#[test]
fn tokens_survive_serialization() {
    let tokens = vec![
        Token::text("a\n".to_owned(), Span::new(0, 2)),
        Token::marker(TokenKind::OpenTag, Span::new(2, 4)),
        Token::marker(TokenKind::CloseTag, Span::new(4, 6)),
        Token::end_of_input(6),
    ];
    let bytes = match bincode::serialize(&tokens) {
        Ok(bytes) => bytes,
        Err(e) => panic!("serialize failed: {e}"),
    };
    match bincode::deserialize::<Vec<Token>>(&bytes) {
        Ok(back) => assert_eq!(back, tokens),
        Err(e) => panic!("deserialize failed: {e}"),
    }
}

#[cfg(feature = "serde")]
#[test]
fn constructs_survive_serialization() {
    use crate::delimiter::Construct;

    for construct in Construct::ALL {
        let bytes = match bincode::serialize(&construct) {
            Ok(bytes) => bytes,
            Err(e) => panic!("serialize failed: {e}"),
        };
        match bincode::deserialize::<Construct>(&bytes) {
            Ok(back) => assert_eq!(back, construct),
            Err(e) => panic!("deserialize failed: {e}"),
        }
    }
}
