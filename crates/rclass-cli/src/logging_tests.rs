use crate::logging::default_directive;

#[test]
fn verbosity_raises_level() {
    assert_eq!(default_directive(0), "warn");
    assert_eq!(default_directive(1), "debug");
    assert_eq!(default_directive(2), "trace");
    assert_eq!(default_directive(7), "trace");
}
