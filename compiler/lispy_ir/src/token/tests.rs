use pretty_assertions::assert_eq;

use super::*;

#[test]
fn every_kind_has_a_description() {
    let kinds = [
        TokenKind::Identifier,
        TokenKind::Keyword,
        TokenKind::Int,
        TokenKind::Float,
        TokenKind::Num,
        TokenKind::Str,
        TokenKind::Quote,
        TokenKind::Arith,
        TokenKind::Conditional,
        TokenKind::Bitwise,
        TokenKind::Not,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::LBracket,
        TokenKind::RBracket,
        TokenKind::Semicolon,
        TokenKind::Colon,
        TokenKind::Comma,
        TokenKind::LThan,
        TokenKind::GThan,
    ];
    for kind in kinds {
        assert!(!kind.description().is_empty(), "{kind:?}");
    }
    assert_eq!(TokenKind::LParen.to_string(), "(");
}

#[test]
fn token_list_preserves_order() {
    let list: TokenList = [
        Token::new(TokenKind::LParen, Value::string("("), 1),
        Token::new(TokenKind::Int, Value::int(3), 1),
        Token::new(TokenKind::RParen, Value::string(")"), 2),
    ]
    .into_iter()
    .collect();

    assert_eq!(list.len(), 3);
    assert_eq!(
        list.kinds(),
        vec![TokenKind::LParen, TokenKind::Int, TokenKind::RParen]
    );
    assert_eq!(list[1].value, Value::int(3));
    assert_eq!(list.get(2).map(|t| t.line), Some(2));
    assert_eq!(list[0].text(), Some("("));
    assert!(list.get(3).is_none());
}
