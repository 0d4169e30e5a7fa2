//! End-to-end validation scenarios: store, selection and validator together.

use pretty_assertions::assert_eq;
use rstest::rstest;
use shellrules::{PropertyStore, SelectionContext, Validator};

fn files_context(names: &[&str]) -> SelectionContext {
    SelectionContext::new(names.iter().map(|s| s.to_string()).collect(), names.len(), 0)
}

#[rstest]
#[case(3, false)]
#[case(4, true)]
#[case(5, true)]
fn max_files_boundary(#[case] max_files: usize, #[case] expected: bool) {
    let store = PropertyStore::empty();
    let context = files_context(&["a", "b", "c", "d"]);
    let validator = Validator::new().with_max_files(max_files);
    assert_eq!(validator.validate(&context, &store), expected);
}

#[rstest]
#[case("dll;exe;msc", true)]
#[case("dll", false)]
#[case("", true)]
fn system_file_extensions(#[case] accepted: &str, #[case] expected: bool) {
    let store = PropertyStore::empty();
    let context = files_context(&["kernel32.dll", "cmd.exe", "notepad.exe", "services.msc"]);
    let validator = Validator::new().with_file_extensions(accepted);
    assert_eq!(validator.validate(&context, &store), expected);
}

#[test]
fn required_properties_follow_store_state() {
    let mut store = PropertyStore::empty();
    let context = SelectionContext::default();
    let validator = Validator::new().with_properties("p1;p2");

    assert!(!validator.validate(&context, &store));
    store.set_property("p1", "1");
    assert!(!validator.validate(&context, &store));
    store.set_property("p2", "2");
    assert!(validator.validate(&context, &store));

    store.clear_property("p1");
    assert!(!validator.validate(&context, &store));
}

#[test]
fn menu_rule_evaluation_pass() {
    // the full flow a menu builder runs for one candidate rule
    let mut store = PropertyStore::new();
    let context = SelectionContext::new(
        vec![
            "/home/user/photos/trip.jpg".to_string(),
            "/home/user/photos/beach.png".to_string(),
        ],
        2,
        0,
    );
    context.register_properties(&mut store);

    let validator = Validator::new()
        .with_max_directories(0)
        .with_file_extensions("jpg;jpeg;png");
    assert!(validator.validate(&context, &store));

    let newline = store.get_property("newline").to_string();
    let command = store.expand("convert ${selection.filename}");
    assert_eq!(command, format!("convert trip.jpg{newline}beach.png"));

    context.unregister_properties(&mut store);
    assert_eq!(store.expand("${selection.filename}"), "${selection.filename}");
}

#[test]
fn rejected_rule_leaves_no_side_effects() {
    let mut store = PropertyStore::empty();
    store.set_property("tool.path", "/usr/bin/tool");
    let snapshot = store.clone();

    let context = files_context(&["a.txt"]);
    let validator = Validator::new().with_max_files(0);
    assert!(!validator.validate(&context, &store));

    // validation is a pure predicate
    assert_eq!(store.get_property("tool.path"), snapshot.get_property("tool.path"));
    assert_eq!(store.len(), snapshot.len());
}

#[test]
fn wildcard_pattern_constraint_with_expansion() {
    let mut store = PropertyStore::empty();
    store.set_property("backup.patterns", "*.bak;*~");

    let validator = Validator::new().with_pattern("${backup.patterns}");
    assert!(validator.validate(&files_context(&["notes.bak", "draft~"]), &store));
    assert!(!validator.validate(&files_context(&["notes.bak", "current.txt"]), &store));
}

#[test]
fn directories_and_files_checked_independently() {
    let store = PropertyStore::empty();
    // 2 files, 1 directory
    let context = SelectionContext::new(
        vec![
            "/data/a.log".to_string(),
            "/data/b.log".to_string(),
            "/data/archive".to_string(),
        ],
        2,
        1,
    );

    assert!(
        Validator::new()
            .with_max_files(2)
            .with_max_directories(1)
            .validate(&context, &store)
    );
    assert!(
        !Validator::new()
            .with_max_files(2)
            .with_max_directories(0)
            .validate(&context, &store)
    );
    assert!(
        !Validator::new()
            .with_max_files(1)
            .with_max_directories(1)
            .validate(&context, &store)
    );
}
