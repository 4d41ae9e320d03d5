use folio_contact::sanitize_input;

#[test]
fn test_escapes_markup() {
    assert_eq!(sanitize_input("<script>"), "&lt;script&gt;");
    assert_eq!(sanitize_input("O'Brien & Co"), "O&#x27;Brien &amp; Co");
    assert_eq!(sanitize_input("say \"hi\""), "say &quot;hi&quot;");
}

#[test]
fn test_entities_are_not_re_escaped_within_one_pass() {
    assert_eq!(sanitize_input("<&>"), "&lt;&amp;&gt;");
}

#[test]
fn test_existing_entities_are_escaped_again() {
    assert_eq!(sanitize_input("&lt;"), "&amp;lt;");
}

#[test]
fn test_trims_and_handles_empty() {
    assert_eq!(sanitize_input("  hello \n"), "hello");
    assert_eq!(sanitize_input(""), "");
    assert_eq!(sanitize_input("   "), "");
}
