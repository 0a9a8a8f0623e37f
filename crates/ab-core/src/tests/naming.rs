use crate::file_safe_name;

use googletest::prelude::*;

#[test]
fn given_plain_email_when_naming_then_kept_verbatim() {
    assert_that!(
        file_safe_name("a.b-c_d+e@example.com"),
        eq("a.b-c_d+e@example.com")
    );
}

#[test]
fn given_separators_and_symbols_when_naming_then_percent_encoded() {
    assert_that!(file_safe_name("a/b\\c d@x.com"), eq("a%2Fb%5Cc%20d@x.com"));
    assert_that!(file_safe_name("a%b@x.com"), eq("a%25b@x.com"));
    assert_that!(file_safe_name("é@x.com"), eq("%C3%A9@x.com"));
}

#[test]
fn given_percent_and_underscore_emails_when_naming_then_names_differ() {
    assert_that!(
        file_safe_name("a%b@x.com"),
        not(eq(&file_safe_name("a_b@x.com")))
    );
    assert_that!(
        file_safe_name("a%5Fb@x.com"),
        not(eq(&file_safe_name("a_b@x.com")))
    );
}

#[test]
fn given_dot_only_or_empty_names_when_naming_then_no_relative_components() {
    assert_that!(file_safe_name(""), eq("%"));
    assert_that!(file_safe_name("."), eq("%2E"));
    assert_that!(file_safe_name(".."), eq("%2E%2E"));
}

#[test]
fn given_padded_input_when_naming_then_whitespace_is_encoded_not_trimmed() {
    assert_that!(file_safe_name(" a@x.com"), eq("%20a@x.com"));
}
