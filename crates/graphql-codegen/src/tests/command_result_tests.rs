use crate::CommandResult;

#[test]
fn failure_list_puts_each_item_on_its_own_line() {
    let result = CommandResult::failure_list(
        format_args!("Found {} problems:", 2),
        ["first", "second"],
    );

    assert!(!result.is_success());
    assert!(result.stdout.is_none());
    assert!(result.stderr.unwrap().ends_with("Found 2 problems:\n  * first\n  * second"));
}

#[test]
fn raw_output_has_no_status_marker() {
    let result = CommandResult::raw("{}".to_string());

    assert!(result.is_success());
    assert_eq!(result.stdout.as_deref(), Some("{}"));
}

#[test]
fn success_is_marked() {
    let result = CommandResult::success(format_args!("Done."));

    assert!(result.is_success());
    assert_eq!(result.stdout.as_deref(), Some("\u{2705} Done."));
}
