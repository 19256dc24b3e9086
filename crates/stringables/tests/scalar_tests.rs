/// String, boolean, path, option, and list kinds.
use std::path::Path;
use stringables::{
    BoolOptions, BoolValue, Choice, ChoiceOptions, Input, PathOptions, PathValue, StringOptions,
    StringValue, Stringable, StringableError, TupleOptions, TupleValue,
};

fn string_opts(minlen: usize, maxlen: Option<usize>) -> StringOptions {
    StringOptions { minlen, maxlen }
}

// ============================================================================
// String
// ============================================================================

#[test]
fn string_accepts_anything_by_default() {
    let s = StringValue::parse("hello").unwrap();
    assert_eq!(s, "hello");
    assert_eq!(s.to_string(), "hello");
    assert_eq!(s.typename(), "string");
}

#[test]
fn string_stringifies_other_inputs() {
    assert_eq!(StringValue::new(42, StringOptions::default()).unwrap(), "42");
    assert_eq!(StringValue::new(true, StringOptions::default()).unwrap(), "true");
}

#[test]
fn string_too_long() {
    let err = StringValue::new("abcd", string_opts(0, Some(3))).unwrap_err();
    assert_eq!(err.to_string(), "Too long (maximum length is 3): abcd");
}

#[test]
fn string_too_short() {
    let err = StringValue::new("ab", string_opts(3, None)).unwrap_err();
    assert_eq!(err.to_string(), "Too short (minimum length is 3): ab");
}

#[test]
fn string_length_counts_characters() {
    assert!(StringValue::new("héllo", string_opts(0, Some(5))).is_ok());
}

#[test]
fn string_syntax() {
    let cases = [
        (string_opts(0, None), "string"),
        (string_opts(1, None), "string (at least 1 character)"),
        (string_opts(2, None), "string (at least 2 characters)"),
        (string_opts(0, Some(1)), "string (at most 1 character)"),
        (string_opts(0, Some(10)), "string (at most 10 characters)"),
        (string_opts(3, Some(3)), "string (3 characters)"),
        (string_opts(2, Some(5)), "string (2-5 characters)"),
    ];
    for (opts, expected) in cases {
        assert_eq!(StringValue::syntax_for(&opts), expected);
    }
}

#[test]
fn string_copy_with_tighter_bound() {
    let s = StringValue::parse("hello").unwrap();
    assert!(s.copy_with(|o| o.maxlen = Some(3)).is_err());
    assert_eq!(s.copy_with(|o| o.maxlen = Some(10)).unwrap(), "hello");
    assert_eq!(s.options().maxlen, None);
}

// ============================================================================
// Boolean
// ============================================================================

#[test]
fn bool_default_literals() {
    for text in ["enabled", "yes", "on", "true", "1"] {
        assert_eq!(BoolValue::parse(text).unwrap(), true, "{text}");
    }
    for text in ["disabled", "no", "off", "false", "0"] {
        assert_eq!(BoolValue::parse(text).unwrap(), false, "{text}");
    }
}

#[test]
fn bool_is_case_insensitive_and_keeps_spelling() {
    let b = BoolValue::parse("ON").unwrap();
    assert!(b.is_true());
    assert_eq!(b.to_string(), "ON");
}

#[test]
fn bool_from_native_bool() {
    let b = BoolValue::new(true, BoolOptions::default()).unwrap();
    assert_eq!(b, true);
    assert_eq!(b.to_string(), "true");
    let b = BoolValue::new(false, BoolOptions::default()).unwrap();
    assert_eq!(b.to_string(), "false");
}

#[test]
fn bool_equality_compares_truth() {
    assert_eq!(BoolValue::parse("yes").unwrap(), BoolValue::parse("on").unwrap());
    assert_ne!(BoolValue::parse("yes").unwrap(), BoolValue::parse("no").unwrap());
    assert!(bool::from(&BoolValue::parse("1").unwrap()));
}

#[test]
fn bool_rejects_unknown_words() {
    let err = BoolValue::parse("maybe").unwrap_err();
    assert_eq!(err.to_string(), "Not a boolean: maybe");
    assert!(BoolValue::new(1.0, BoolOptions::default()).is_err());
}

#[test]
fn bool_does_not_trim() {
    let err = BoolValue::parse(" on ").unwrap_err();
    assert_eq!(err.to_string(), "Not a boolean:  on ");
    assert!(BoolValue::parse("on").is_ok());
}

#[test]
fn bool_syntax() {
    assert_eq!(
        BoolValue::syntax_for(&BoolOptions::default()),
        "enabled/disabled|yes/no|on/off|true/false|1/0"
    );
}

#[test]
fn bool_custom_literals() {
    let opts = BoolOptions {
        truthy: vec!["ja".into(), "ja".into()],
        falsy: vec!["nein".into(), "nein".into()],
    };
    assert_eq!(BoolValue::syntax_for(&opts), "ja/nein");
    assert_eq!(BoolValue::new("JA", opts.clone()).unwrap(), true);
    assert!(BoolValue::new("yes", opts).is_err());
}

// ============================================================================
// Path
// ============================================================================

#[test]
fn path_normalization() {
    let cases = [
        ("/foo/bar/", "/foo/bar"),
        ("/foo/bar/./../bar/", "/foo/bar"),
        ("/foo//bar", "/foo/bar"),
        ("foo/bar", "foo/bar"),
        ("foo/..", "."),
        ("../foo", "../foo"),
        ("/..", "/"),
        ("", "."),
    ];
    for (raw, expected) in cases {
        let p = PathValue::parse(raw).unwrap();
        assert_eq!(p.as_path(), Path::new(expected), "normalizing {raw:?}");
    }
}

#[test]
fn path_equality_is_normalized() {
    assert_eq!(
        PathValue::parse("/foo/bar/").unwrap(),
        PathValue::parse("/foo/./bar").unwrap()
    );
    assert_ne!(
        PathValue::parse("foo/bar").unwrap(),
        PathValue::parse("/foo/bar").unwrap()
    );
}

#[test]
fn path_expands_and_compresses_home() {
    let Some(home) = dirs::home_dir() else {
        return;
    };
    let p = PathValue::parse("~/notes").unwrap();
    assert_eq!(p.as_path(), home.join("notes"));
    assert_eq!(p.to_string(), "~/notes");

    let p = PathValue::parse("~").unwrap();
    assert_eq!(p.to_string(), "~");
}

#[test]
fn path_tilde_elsewhere_is_literal() {
    let p = PathValue::parse("/tmp/~foo").unwrap();
    assert_eq!(p.as_path(), Path::new("/tmp/~foo"));
}

#[test]
fn path_mustexist() {
    let opts = PathOptions { mustexist: true };
    let err = PathValue::new("/definitely/not/here/42", opts.clone()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "No such file or directory: /definitely/not/here/42"
    );
    assert!(PathValue::new(env!("CARGO_MANIFEST_DIR"), opts).is_ok());
}

#[test]
fn path_syntax() {
    assert_eq!(PathValue::parse("/").unwrap().syntax(), "file system path");
}

// ============================================================================
// Option
// ============================================================================

fn colors() -> ChoiceOptions {
    ChoiceOptions::new(["red", "green", "blue"])
}

#[test]
fn choice_accepts_members() {
    let c = Choice::new("green", colors()).unwrap();
    assert_eq!(c, "green");
    assert_eq!(c.typename(), "option");
}

#[test]
fn choice_rejects_non_members() {
    let err = Choice::new("pink", colors()).unwrap_err();
    assert_eq!(err.to_string(), "Not one of: red, green, blue: pink");

    let err = Choice::new("pink", ChoiceOptions::new(["red"])).unwrap_err();
    assert_eq!(err.to_string(), "Not red: pink");
}

#[test]
fn choice_resolves_aliases() {
    let opts = colors().with_alias("r", "red");
    assert_eq!(Choice::new("r", opts.clone()).unwrap(), "red");
    assert!(Choice::new("g", opts).is_err());
}

#[test]
fn choice_without_options_is_misconfigured() {
    let err = Choice::new("anything", ChoiceOptions::default()).unwrap_err();
    assert!(err.is_configuration());
    assert_eq!(
        err,
        StringableError::Configuration("No options provided".to_string())
    );
}

#[test]
fn choice_syntax() {
    assert_eq!(Choice::syntax_for(&colors()), "red|green|blue");
}

// ============================================================================
// List
// ============================================================================

#[test]
fn tuple_splits_on_separator() {
    let t = TupleValue::parse("a, b ,c").unwrap();
    assert_eq!(t, ["a", "b", "c"]);
    assert_eq!(t.to_string(), "a, b, c");
    assert_eq!(t.typename(), "list");
}

#[test]
fn tuple_dedup_keeps_first() {
    let opts = TupleOptions {
        dedup: true,
        ..TupleOptions::default()
    };
    let t = TupleValue::new("a, b, a, c, b", opts).unwrap();
    assert_eq!(t, ["a", "b", "c"]);

    let t = TupleValue::parse("a, b, a").unwrap();
    assert_eq!(t, ["a", "b", "a"]);
}

#[test]
fn tuple_flattens_lists() {
    let t = TupleValue::new(vec!["a, b", "c"], TupleOptions::default()).unwrap();
    assert_eq!(t, ["a", "b", "c"]);
}

#[test]
fn tuple_empty() {
    let t = TupleValue::parse("").unwrap();
    assert!(t.is_empty());
    assert_eq!(t.to_string(), "");
    let t = TupleValue::parse("   ").unwrap();
    assert!(t.is_empty());
}

#[test]
fn tuple_keeps_empty_items() {
    let t = TupleValue::parse("a,,b").unwrap();
    assert_eq!(t, ["a", "", "b"]);
    assert_eq!(t.to_string(), "a, , b");

    let t = TupleValue::parse(" , ,").unwrap();
    assert_eq!(t, ["", "", ""]);

    let t = TupleValue::new(vec!["a", "", "b"], TupleOptions::default()).unwrap();
    assert_eq!(t.len(), 3);
}

#[test]
fn tuple_custom_separator() {
    let opts = TupleOptions {
        sep: "/".to_string(),
        ..TupleOptions::default()
    };
    let t = TupleValue::new("a/ b /c", opts.clone()).unwrap();
    assert_eq!(t, ["a", "b", "c"]);
    assert_eq!(t.to_string(), "a/b/c");
    assert_eq!(TupleValue::syntax_for(&opts), "<OPTION>/<OPTION>/...");
}

#[test]
fn tuple_whitespace_separator() {
    let opts = TupleOptions {
        sep: " ".to_string(),
        ..TupleOptions::default()
    };
    let t = TupleValue::new("a  b\tc", opts).unwrap();
    assert_eq!(t, ["a", "b", "c"]);
    assert_eq!(t.to_string(), "a b c");
}

#[test]
fn tuple_validates_against_options() {
    let opts = TupleOptions {
        options: Some(vec!["a".into(), "b".into()]),
        ..TupleOptions::default()
    };
    assert!(TupleValue::new("a, b", opts.clone()).is_ok());

    let err = TupleValue::new("a, x", opts.clone()).unwrap_err();
    assert_eq!(err.to_string(), "Invalid option: x");

    let err = TupleValue::new("x, a, y", opts).unwrap_err();
    assert_eq!(err.to_string(), "Invalid options: x, y");
}

#[test]
fn tuple_resolves_aliases_before_validation() {
    let mut opts = TupleOptions {
        options: Some(vec!["upload".into(), "download".into()]),
        dedup: true,
        ..TupleOptions::default()
    };
    opts.aliases.insert("up".into(), "upload".into());
    let t = TupleValue::new("up, upload, download", opts).unwrap();
    assert_eq!(t, ["upload", "download"]);
}

#[test]
fn tuple_default_syntax() {
    assert_eq!(
        TupleValue::syntax_for(&TupleOptions::default()),
        "<OPTION>,<OPTION>,..."
    );
}

#[test]
fn tuple_iterates_items() {
    let t = TupleValue::parse("x, y").unwrap();
    let items: Vec<&str> = t.iter().collect();
    assert_eq!(items, vec!["x", "y"]);
    assert_eq!(t.len(), 2);
    assert_eq!(t.items()[1], "y");
}

// ============================================================================
// Reconstruction
// ============================================================================

#[test]
fn values_rebuild_from_their_own_input() {
    let s = StringValue::parse("hi").unwrap();
    assert_eq!(StringValue::new(s.to_input(), s.options().clone()).unwrap(), s);

    let b = BoolValue::parse("Off").unwrap();
    assert_eq!(BoolValue::new(b.to_input(), b.options().clone()).unwrap().to_string(), "Off");

    let p = PathValue::parse("/a/../b").unwrap();
    assert_eq!(PathValue::new(p.to_input(), p.options().clone()).unwrap(), p);

    let c = Choice::new("red", colors()).unwrap();
    assert_eq!(Choice::new(c.to_input(), c.options().clone()).unwrap(), c);

    let t = TupleValue::parse("a, b").unwrap();
    assert_eq!(t.to_input(), Input::from(vec!["a", "b"]));
    assert_eq!(TupleValue::new(t.to_input(), t.options().clone()).unwrap(), t);
}

#[test]
fn rendering_reparses_to_equal_value() {
    let t = TupleValue::parse("a, b").unwrap();
    assert_eq!(TupleValue::parse(&t.to_string()).unwrap(), t);

    let p = PathValue::parse("/x/./y").unwrap();
    assert_eq!(PathValue::parse(&p.to_string()).unwrap(), p);
}
