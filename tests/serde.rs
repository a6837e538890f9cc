#![cfg(feature = "serde")]

use decoded_uri::Uri;
use serde_test::{assert_tokens, Token};

#[test]
fn serde_round_trip() {
    let uri = Uri::parse("http://user@example.com:8080/a/b?q#f").unwrap();
    assert_tokens(
        &uri,
        &[
            Token::Struct {
                name: "Uri",
                len: 7,
            },
            Token::Str("scheme"),
            Token::Str("http"),
            Token::Str("userinfo"),
            Token::Str("user"),
            Token::Str("host"),
            Token::Str("example.com"),
            Token::Str("port"),
            Token::Some,
            Token::U16(8080),
            Token::Str("path"),
            Token::Seq { len: Some(3) },
            Token::Str(""),
            Token::Str("a"),
            Token::Str("b"),
            Token::SeqEnd,
            Token::Str("query"),
            Token::Str("q"),
            Token::Str("fragment"),
            Token::Str("f"),
            Token::StructEnd,
        ],
    );
}

#[test]
fn serde_round_trip_relative_reference() {
    let uri = Uri::parse("foo/bar").unwrap();
    assert_tokens(
        &uri,
        &[
            Token::Struct {
                name: "Uri",
                len: 7,
            },
            Token::Str("scheme"),
            Token::Str(""),
            Token::Str("userinfo"),
            Token::Str(""),
            Token::Str("host"),
            Token::Str(""),
            Token::Str("port"),
            Token::None,
            Token::Str("path"),
            Token::Seq { len: Some(2) },
            Token::Str("foo"),
            Token::Str("bar"),
            Token::SeqEnd,
            Token::Str("query"),
            Token::Str(""),
            Token::Str("fragment"),
            Token::Str(""),
            Token::StructEnd,
        ],
    );
}
