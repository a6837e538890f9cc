use decoded_uri::Uri;

#[test]
fn remove_dot_segments() {
    let vectors: &[(&str, &[&str])] = &[
        ("/a/b/c/./../../g", &["", "a", "g"]),
        ("mid/content=5/../6", &["mid", "6"]),
        ("http://example.com/a/../b", &["", "b"]),
        ("http://example.com/../b", &["", "b"]),
        ("http://example.com/a/../../b", &["", "b"]),
        ("./a/b", &["a", "b"]),
        ("..", &[]),
        ("/", &[""]),
        ("a/b/..", &["a"]),
        ("a/b/.", &["a", "b"]),
        ("a/b/./c", &["a", "b", "c"]),
        ("a/b/./c/", &["a", "b", "c", ""]),
        ("/a/b/..", &["", "a"]),
        ("/a/b/.", &["", "a", "b"]),
        ("/a/b/./c", &["", "a", "b", "c"]),
        ("/a/b/./c/", &["", "a", "b", "c", ""]),
        ("./a/b/..", &["a"]),
        ("./a/b/.", &["a", "b"]),
        ("./a/b/./c", &["a", "b", "c"]),
        ("./a/b/./c/", &["a", "b", "c", ""]),
        ("../a/b/..", &["a"]),
        ("../a/b/.", &["a", "b"]),
        ("../a/b/./c", &["a", "b", "c"]),
        ("../a/b/./c/", &["a", "b", "c", ""]),
        ("../a/b/../c", &["a", "c"]),
        ("../a/b/./../c/", &["a", "c", ""]),
        ("../a/b/./../c", &["a", "c"]),
        ("../a/b/.././c/", &["a", "c", ""]),
        ("../a/b/.././c", &["a", "c"]),
        ("/./c/d", &["", "c", "d"]),
        ("/../c/d", &["", "c", "d"]),
        (".", &[]),
        ("a/..", &[]),
        ("/..", &[""]),
        ("/.", &[""]),
    ];
    for (i, (input, normalized)) in vectors.iter().enumerate() {
        let mut u = Uri::parse(input).unwrap_or_else(|e| panic!("vector {i}: {e}"));
        u.normalize_path();
        assert_eq!(u.path(), *normalized, "vector {i}");
    }
}

#[test]
fn normalization_is_idempotent() {
    let mut u = Uri::parse("/a/b/c/./../../g").unwrap();
    u.normalize_path();
    let first = u.clone();
    u.normalize_path();
    assert_eq!(u, first);
}

#[test]
fn normalization_only_touches_the_path() {
    let mut u = Uri::parse("eXAMPLE://a/./b/../b?q/../r#f/./g").unwrap();
    u.normalize_path();
    assert_eq!(u.scheme().as_str(), "eXAMPLE");
    assert_eq!(u.host().as_str(), "a");
    assert_eq!(u.path(), ["", "b"]);
    assert_eq!(u.query(), "q/../r");
    assert_eq!(u.fragment(), "f/./g");
}

#[test]
fn normalized_segments_stay_decoded() {
    // %2E is a decoded "." by the time normalization runs, so it is
    // removed like a literal dot segment.
    let mut u = Uri::parse("/a/%2E/b").unwrap();
    u.normalize_path();
    assert_eq!(u.path(), ["", "a", "b"]);

    let mut u = Uri::parse("/a/%2E%2E/b").unwrap();
    u.normalize_path();
    assert_eq!(u.path(), ["", "b"]);
}
