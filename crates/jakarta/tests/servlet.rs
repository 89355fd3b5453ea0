mod common;

use common::Harness;

#[test]
fn servlet_must_extend_http_servlet() {
    let source = r#"package com.example;

import jakarta.servlet.annotation.WebServlet;

@WebServlet("/hello")
public class Hello {
}
"#;
    let h = Harness::new();
    assert_eq!(h.codes(source), vec!["WebServletAnnotatedClassDoesNotExtendHttpServlet"]);

    let fixed = h.fix(
        source,
        "WebServletAnnotatedClassDoesNotExtendHttpServlet",
        "Let the class extend 'HttpServlet'",
    );
    assert!(fixed.contains("public class Hello extends HttpServlet {"));
    assert!(fixed.contains("import jakarta.servlet.annotation.WebServlet;\nimport jakarta.servlet.http.HttpServlet;\n"));
    assert!(h.codes(&fixed).is_empty());
}

#[test]
fn servlet_url_attributes() {
    let source = r#"import jakarta.servlet.annotation.WebServlet;
import jakarta.servlet.http.HttpServlet;

@WebServlet
public class Hello extends HttpServlet {}
"#;
    let h = Harness::new();
    let code = "WebServletAnnotationMissingAttributes";
    assert_eq!(h.codes(source), vec![code]);
    assert_eq!(
        h.titles(source, code),
        vec![
            "Insert the attribute 'value' to @WebServlet",
            "Insert the attribute 'urlPatterns' to @WebServlet",
        ]
    );
    let fixed = h.fix(source, code, "Insert the attribute 'urlPatterns' to @WebServlet");
    assert!(fixed.contains("@WebServlet(urlPatterns = {\"\"})\npublic class Hello"));
    assert!(h.codes(&fixed).is_empty());
}

#[test]
fn text_block_attribute_survives_attribute_insertion() {
    let source = "import jakarta.servlet.annotation.WebServlet;\nimport jakarta.servlet.http.HttpServlet;\n\n@WebServlet(name = \"\"\"\n    svc\"\"\")\npublic class Hello extends HttpServlet {}\n";
    let h = Harness::new();
    let code = "WebServletAnnotationMissingAttributes";
    assert_eq!(h.codes(source), vec![code]);
    let fixed = h.fix(source, code, "Insert the attribute 'value' to @WebServlet");
    assert!(fixed.contains("@WebServlet(name = \"\"\"\n    svc\"\"\", value = {\"\"})\npublic class Hello"));
}

#[test]
fn servlet_attribute_conflict() {
    let source = r#"import jakarta.servlet.annotation.WebServlet;
import jakarta.servlet.http.HttpServlet;

@WebServlet(value = "/a", urlPatterns = "/b")
public class Hello extends HttpServlet {}
"#;
    let h = Harness::new();
    let code = "WebServletAnnotationAttributeConflict";
    assert_eq!(h.codes(source), vec![code]);
    assert_eq!(
        h.titles(source, code),
        vec![
            "Remove the attribute 'value' from @WebServlet",
            "Remove the attribute 'urlPatterns' from @WebServlet",
        ]
    );
    let fixed = h.fix(source, code, "Remove the attribute 'value' from @WebServlet");
    assert!(fixed.contains("@WebServlet(urlPatterns = \"/b\")\npublic class Hello"));
}

#[test]
fn filter_must_implement_filter() {
    let source = r#"package com.example;

import jakarta.servlet.annotation.WebFilter;

@WebFilter(servletNames = "main")
public class Audit {}
"#;
    let h = Harness::new();
    let code = "WebFilterAnnotatedClassReqIfaceNoImpl";
    assert_eq!(h.codes(source), vec![code]);
    let fixed = h.fix(source, code, "Let the class implement 'Filter'");
    assert!(fixed.contains("public class Audit implements Filter {}"));
    assert!(fixed.contains("import jakarta.servlet.Filter;\n"));
    assert!(h.codes(&fixed).is_empty());
}

#[test]
fn filter_url_attributes() {
    let source = r#"import jakarta.servlet.Filter;
import jakarta.servlet.annotation.WebFilter;

@WebFilter
public abstract class Audit implements Filter {}
"#;
    let h = Harness::new();
    assert_eq!(h.codes(source), vec!["WebFilterAnnotationMissingAttributes"]);
    let fixed = h.fix(
        source,
        "WebFilterAnnotationMissingAttributes",
        "Insert the attribute 'value' to @WebFilter",
    );
    assert!(fixed.contains("@WebFilter(value = {\"\"})"));
}

#[test]
fn listener_offers_every_listener_interface() {
    let source = r#"import jakarta.servlet.annotation.WebListener;

@WebListener
public class Startup {}
"#;
    let h = Harness::new();
    let code = "WebListenerAnnotatedClassReqIfaceNoImpl";
    assert_eq!(h.codes(source), vec![code]);
    assert_eq!(
        h.titles(source, code),
        vec![
            "Let the class implement 'ServletContextListener'",
            "Let the class implement 'ServletContextAttributeListener'",
            "Let the class implement 'ServletRequestListener'",
            "Let the class implement 'ServletRequestAttributeListener'",
            "Let the class implement 'HttpSessionListener'",
            "Let the class implement 'HttpSessionAttributeListener'",
            "Let the class implement 'HttpSessionIdListener'",
        ]
    );
    let fixed = h.fix(source, code, "Let the class implement 'HttpSessionListener'");
    assert!(fixed.contains("public class Startup implements HttpSessionListener {}"));
    assert!(fixed.contains("import jakarta.servlet.http.HttpSessionListener;\n"));
    assert!(h.codes(&fixed).is_empty());
}
