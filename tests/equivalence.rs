use decoded_uri::Uri;

#[test]
fn normalize_then_compare_equivalent_uris() {
    // Inspired by Section 6.2.2 of RFC 3986.
    let uri1 = Uri::parse("example://a/b/c/%7Bfoo%7D").unwrap();
    let mut uri2 = Uri::parse("eXAMPLE://a/./b/../b/%63/%7bfoo%7d").unwrap();
    assert_ne!(uri1, uri2);

    uri2.normalize_path();
    assert_eq!(uri1, uri2);
}

#[test]
fn scheme_compares_case_insensitively() {
    let a = Uri::parse("HTTP://x/").unwrap();
    let b = Uri::parse("http://x/").unwrap();
    assert_eq!(a, b);
}

#[test]
fn host_compares_case_insensitively() {
    let a = Uri::parse("//www.EXAMPLE.com/foo").unwrap();
    let b = Uri::parse("//www.example.com/foo").unwrap();
    assert_eq!(a, b);

    // Case preserved by the accessor nonetheless.
    assert_eq!(a.host().as_str(), "www.EXAMPLE.com");
}

#[test]
fn userinfo_compares_exactly() {
    let a = Uri::parse("//Joe@example.com/").unwrap();
    let b = Uri::parse("//joe@example.com/").unwrap();
    assert_ne!(a, b);
}

#[test]
fn path_compares_exactly() {
    let a = Uri::parse("http://example.com/Foo").unwrap();
    let b = Uri::parse("http://example.com/foo").unwrap();
    assert_ne!(a, b);

    // No implicit normalization.
    let a = Uri::parse("http://example.com/a/../b").unwrap();
    let b = Uri::parse("http://example.com/b").unwrap();
    assert_ne!(a, b);
}

#[test]
fn query_and_fragment_compare_exactly() {
    let a = Uri::parse("/p?Q#F").unwrap();
    assert_ne!(a, Uri::parse("/p?q#F").unwrap());
    assert_ne!(a, Uri::parse("/p?Q#f").unwrap());
    assert_eq!(a, Uri::parse("/p?Q#F").unwrap());
}

#[test]
fn port_must_match() {
    let a = Uri::parse("http://example.com:8080/").unwrap();
    let b = Uri::parse("http://example.com/").unwrap();
    assert_ne!(a, b);

    // An empty port equals no port at all.
    let c = Uri::parse("http://example.com:/").unwrap();
    assert_eq!(b, c);
}

#[test]
fn decoding_happens_before_comparison() {
    let a = Uri::parse("/%66oo").unwrap();
    let b = Uri::parse("/foo").unwrap();
    assert_eq!(a, b);
}
