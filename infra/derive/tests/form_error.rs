#[test]
fn form_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/form_error_pass.rs");
    t.compile_fail("tests/ui/form_error_no_context.rs");
    t.compile_fail("tests/ui/form_error_tuple_variant.rs");
}
