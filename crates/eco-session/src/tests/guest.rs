use crate::controller::guest_name;

use googletest::assert_that;
use googletest::prelude::eq;

#[test]
fn capitalizes_first_letter_of_local_part() {
    assert_that!(guest_name("ana@example.com").as_str(), eq("Ana"));
}

#[test]
fn replaces_dots_and_underscores_with_spaces() {
    assert_that!(guest_name("ana.silva@example.com").as_str(), eq("Ana silva"));
    assert_that!(guest_name("joao_pedro@example.com").as_str(), eq("Joao pedro"));
}

#[test]
fn only_separators_after_the_first_character_are_replaced() {
    assert_that!(guest_name("a.b.c@example.com").as_str(), eq("A b c"));
}

#[test]
fn keeps_already_capitalized_names() {
    assert_that!(guest_name("Ana@example.com").as_str(), eq("Ana"));
}

#[test]
fn handles_input_without_at_sign() {
    assert_that!(guest_name("ana").as_str(), eq("Ana"));
}

#[test]
fn empty_local_part_yields_empty_name() {
    assert_that!(guest_name("@example.com").as_str(), eq(""));
}
