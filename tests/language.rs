use std::fs;

use rill::{create_global_scope, execute, interpreter::value::core::Value};
use walkdir::WalkDir;

#[test]
fn script_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| {
                                         e.path().extension().is_some_and(|ext| ext == "rill")
                                     })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let env = create_global_scope();
        if let Err(e) = execute(&source, &env) {
            panic!("Script {path:?} failed: {e}");
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn eval(src: &str) -> Value {
    let env = create_global_scope();
    execute(src, &env).unwrap_or_else(|e| panic!("Script failed: {e}\n{src}"))
}

fn assert_result(src: &str, expected: &str) {
    assert_eq!(eval(src).to_string(), expected, "script: {src}");
}

fn assert_failure(src: &str) {
    let env = create_global_scope();
    if execute(src, &env).is_ok() {
        panic!("Script succeeded but was expected to fail:\n{src}")
    }
}

#[test]
fn arithmetic_and_precedence() {
    assert_result("1 + 2 * 3", "7");
    assert_result("(1 + 2) * 3", "9");
    assert_result("10 / 4", "2.5");
    assert_result("7 % 3", "1");
    assert_result("2 ^ 3 ^ 2", "64");
    assert_result("10 - 2 - 3", "5");
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_result("1 / 0 > 1000000", "true");
    assert_result("-1 / 0 < 0", "true");
}

#[test]
fn unary_operators() {
    assert_result("let x = 5; -x", "-5");
    assert_result("not true", "false");
    assert_result("not not true", "true");
    assert_result("-7 + 2", "-5");
    assert_failure("-\"text\"");
    assert_failure("not 1");
}

#[test]
fn string_concatenation_and_comparison() {
    assert_result("\"foo\" + \"bar\"", "foobar");
    assert_result("\"a\" == \"a\"", "true");
    assert_result("\"a\" != \"b\"", "true");
}

#[test]
fn mismatched_operand_types_yield_null() {
    assert_result("1 + \"a\"", "null");
    assert_result("1 == \"1\"", "null");
    assert_result("true + true", "null");
    assert_result("\"a\" < \"b\"", "null");
}

#[test]
fn equality_on_same_types() {
    assert_result("null == null", "true");
    assert_result("true == true", "true");
    assert_result("let a = [1, 2]; let b = [1, 2]; a == b", "true");
    assert_result("let a = [1, 2]; let b = [1, 3]; a == b", "false");
}

#[test]
fn logical_operators_do_not_short_circuit() {
    let src = "let count = 0;\n\
               fn bump(): boolean {\n\
                   count += 1;\n\
                   return true;\n\
               }\n\
               bump() or bump();\n\
               count";
    assert_result(src, "2");
}

#[test]
fn conditions_must_be_boolean() {
    assert_failure("if (1) { println(1); }");
    assert_failure("while (\"yes\") { println(1); }");
    assert_result("if (false) { println(1); }", "null");
}

#[test]
fn variable_declarations() {
    assert_result("let x = 1; x", "1");
    assert_result("let x; x", "null");
    assert_result("const c = 3; c", "3");
    assert_failure("const c;");
    assert_failure("const c = 1; c = 2;");
    assert_failure("let a = 1; let a = 2;");
    assert_failure("undeclared + 1");
}

#[test]
fn block_scopes_shadow_and_expire() {
    let src = "let a = 1;\n\
               if (true) {\n\
                   let a = 2;\n\
               }\n\
               a";
    assert_result(src, "1");
    assert_failure("if (true) { let inner = 1; }\ninner");
}

#[test]
fn while_loop_with_return_propagation() {
    let src = "fn first_over(limit): number {\n\
                   let i = 0;\n\
                   while (true) {\n\
                       if (i > limit) {\n\
                           return i;\n\
                       }\n\
                       i += 1;\n\
                   }\n\
               }\n\
               first_over(3)";
    assert_result(src, "4");
}

#[test]
fn for_loop_sums_elements() {
    let src = "let total = 0;\n\
               for (x of [1, 2, 3]) {\n\
                   total += x;\n\
               }\n\
               total";
    assert_result(src, "6");
}

#[test]
fn for_loop_iterates_a_snapshot() {
    let src = "let arr = [1, 2, 3];\n\
               let total = 0;\n\
               for (x of arr) {\n\
                   arr[0] = 100;\n\
                   total += x;\n\
               }\n\
               total";
    assert_result(src, "6");
}

#[test]
fn object_literals_and_member_access() {
    let src = "let x = 10;\n\
               let obj = { a: 1, x, nested: { b: 2 } };\n\
               obj.a = 5;\n\
               obj.a + obj.x + obj.nested.b";
    assert_result(src, "17");
    assert_result("let o = { a: 7 }; o[\"a\"]", "7");
    assert_result("let key = 1; let o = { key, }; o.key", "1");
}

#[test]
fn member_read_asymmetry() {
    // Dot access on an absent property fails, computed access yields null.
    assert_failure("let o = { a: 1 }; o.b");
    assert_result("let o = { a: 1 }; o[\"b\"]", "null");
    assert_result("let a = [1]; a[5]", "null");
    assert_result("let a = [1]; a[-1]", "null");
}

#[test]
fn member_writes_only_touch_existing_slots() {
    assert_result("let o = { a: 1 }; o.b = 9; len(o)", "1");
    assert_result("let o = { a: 1 }; o.b = 9", "null");
    assert_result("let a = [1]; a[5] = 9; len(a)", "1");
    assert_failure("let a = [1]; a[0.5] = 2");
    assert_failure("let a = [1]; a[-1] = 2");
}

#[test]
fn arrays_alias_until_copied() {
    assert_result("let a = [1, 2]; let b = a; b[0] = 9; a[0]", "9");
    assert_result("let a = [1, 2]; let b = copy(a); b[0] = 9; a[0]", "1");
    assert_result("let a = [1, 2]; let b = fan a; b[0] = 9; a[0]", "1");
}

#[test]
fn spread_splices_into_array_literals() {
    assert_result("let a = [1, 2]; len([0, fan a, 3])", "4");
    assert_result("let a = [1, 2]; let b = [0, fan a, 3]; b[3]", "3");
    assert_failure("fan 5");
}

#[test]
fn anonymous_functions() {
    assert_result("let double = fn (x) => x * 2; double(4)", "8");
    assert_result("let f = fn (x) { x * 2 }; f(3)", "6");
    assert_result("let f = fn (x) { x * 2; x }; f(3)", "null");
    assert_result("let f = fn (x) { return x + 1; x }; f(3)", "4");
}

#[test]
fn named_functions_and_arguments() {
    assert_result("fn add(a, b) { return a + b; } add(2, 5)", "7");
    assert_result("fn f() { 1 + 1 } f()", "null");
    assert_result("fn second(a, b) { return b; } second(1)", "null");
    assert_result("fn first(a) { return a; } first(1, 2, 3)", "1");
    assert_failure("let x = 5; x(1)");
}

#[test]
fn declared_return_types_are_checked() {
    assert_result("fn f(): number { return 1; } f()", "1");
    assert_failure("fn g(): number { return \"s\"; } g()");
    assert_failure("fn h(): number { } h()");
}

#[test]
fn functions_resolve_names_at_the_call_site() {
    let src = "fn show() {\n\
                   return hidden;\n\
               }\n\
               fn caller() {\n\
                   let hidden = 42;\n\
                   return show();\n\
               }\n\
               caller()";
    assert_result(src, "42");
    // The same lookup fails where no caller binds the name.
    assert_failure("fn show() { return hidden; } show()");
}

#[test]
fn top_level_return_stops_the_program() {
    assert_result("let x = 1; return x + 1; x = 99; x", "2");
}

#[test]
fn conversion_natives() {
    assert_result("len(\"abc\")", "3");
    assert_result("len([1, 2, 3])", "3");
    assert_result("String(12)", "12");
    assert_result("Number(\"3.5\")", "3.5");
    assert_result("Number(\"nope\")", "null");
    assert_result("Number(true)", "1");
    assert_result("len(range(3))", "3");
    assert_result("range(1, 4)[2]", "3");
    assert_result("range(10, 0, -2)[1]", "8");
    assert_result("date() > 0", "true");
    assert_failure("len(5)");
    assert_failure("range(1, 10, 0)");
}

#[test]
fn math_object() {
    assert_result("Math.floor(2.7)", "2");
    assert_result("Math.pow(2, 3)", "8");
    assert_result("Math.abs(-4)", "4");
    assert_result("Math.max(1, 9, 4)", "9");
    assert_result("Math.min(1, 9, 4)", "1");
    assert_result("Math.sqrt(9)", "3");
    assert_result("let r = Math.random(); r >= 0 and r < 1", "true");
    assert_failure("Math.pow(2)");
}

#[test]
fn compound_assignment_type_rules() {
    assert_result("let x = 2; x += 3; x", "5");
    assert_result("let x = 9; x /= 3; x", "3");
    assert_result("let x = 2; x ^= 3; x", "8");
    assert_result("let s = \"a\"; s += \"b\"; s", "ab");
    assert_failure("let x = 1; x += \"a\";");
    assert_failure("let s = \"a\"; s -= \"b\";");
}

#[test]
fn global_constants_are_protected() {
    assert_failure("true = false");
    assert_failure("null = 1");
    assert_failure("println = 5");
}

#[test]
fn display_formatting() {
    assert_result("{ a: 1, b: \"x\" }", "{ a: 1, b: x }");
    assert_result("[1, \"two\", true]", "[ 1, two, true ]");
    assert_result("null", "null");
}

#[test]
fn parse_errors() {
    assert_failure("let 2 = 3;");
    assert_failure("let x = 1");
    assert_failure("if (true) {");
    assert_failure("let x = $;");
    assert_failure("1 + ");
    assert_failure("fn f( { }");
}
