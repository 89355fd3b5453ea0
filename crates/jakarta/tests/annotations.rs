mod common;

use common::Harness;

const RESOURCE_FIELD: &str = r#"package com.example;

import jakarta.annotation.Resource;
import javax.sql.DataSource;

public class Inventory {
    @Resource
    private DataSource ds;
}
"#;

#[test]
fn resource_fixes_apply_in_sequence() {
    let h = Harness::new();
    assert_eq!(
        h.codes(RESOURCE_FIELD),
        vec!["MissingResourceNameAttribute", "MissingResourceTypeAttribute"]
    );

    let name_stub = h.actions(RESOURCE_FIELD, "MissingResourceNameAttribute").remove(0);
    assert_eq!(name_stub.title, "Insert the attribute 'name' to @Resource");
    let with_name = h.apply(RESOURCE_FIELD, &name_stub);
    assert!(with_name.contains("    @Resource(name = \"\")\n    private DataSource ds;"));
    assert_eq!(h.codes(&with_name), vec!["MissingResourceTypeAttribute"]);

    let complete = h.fix(
        &with_name,
        "MissingResourceTypeAttribute",
        "Insert the attribute 'type' to @Resource",
    );
    assert!(complete.contains("    @Resource(name = \"\", type = \"\")\n    private DataSource ds;"));
    assert_eq!(complete.matches("@Resource").count(), 1);
    assert!(h.codes(&complete).is_empty());

    // the stale stub still points at the field and changes nothing more
    assert_eq!(h.apply(&complete, &name_stub), complete);
}

#[test]
fn resource_on_type_reports_only_what_is_missing() {
    let source = r#"import jakarta.annotation.Resource;

@Resource(name = "jdbc/main")
public class Holder {}
"#;
    let h = Harness::new();
    let diagnostics = h.diagnostics(source);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, "MissingResourceTypeAttribute");
    assert_eq!(diagnostics[0].source, "jakarta");
    assert_eq!(
        &source[diagnostics[0].range.start..diagnostics[0].range.end],
        "@Resource(name = \"jdbc/main\")"
    );
}

const POST_CONSTRUCT: &str = r#"package com.example;

import jakarta.annotation.PostConstruct;

public class Bean {
    @PostConstruct
    public String init(String a, int b) {
        return a;
    }
}
"#;

#[test]
fn lifecycle_fixes_are_independent() {
    let h = Harness::new();
    assert_eq!(
        h.codes(POST_CONSTRUCT),
        vec!["PostConstructParams", "PostConstructReturnType"]
    );

    let no_params = h.fix(POST_CONSTRUCT, "PostConstructParams", "Remove all parameters");
    assert!(no_params.contains("    public String init() {"));
    assert_eq!(h.codes(&no_params), vec!["PostConstructReturnType"]);

    let void = h.fix(&no_params, "PostConstructReturnType", "Change return type to void");
    assert!(void.contains("    public void init() {"));
    assert!(h.codes(&void).is_empty());
}

#[test]
fn static_pre_destroy_with_checked_exception() {
    let source = r#"import jakarta.annotation.PreDestroy;

public class Pool {
    @PreDestroy
    static void close() throws Exception {}
}
"#;
    let h = Harness::new();
    let diagnostics = h.diagnostics(source);
    let found: Vec<(&str, annolint_api::Severity)> =
        diagnostics.iter().map(|d| (d.code.as_str(), d.severity)).collect();
    assert_eq!(
        found,
        vec![
            ("PreDestroyException", annolint_api::Severity::Warning),
            ("PreDestroyStatic", annolint_api::Severity::Error),
        ]
    );
    assert!(h.actions(source, "PreDestroyException").is_empty());

    let fixed = h.fix(source, "PreDestroyStatic", "Remove the 'static' modifier");
    assert!(fixed.contains("    @PreDestroy\n    void close() throws Exception {}"));
}
