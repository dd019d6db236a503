//! 宏展开编译测试

#[test]
fn test_macros_compile() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/*.rs");
}
