//! Integration tests for the compiled reset stylesheet.

use typecss::prelude::*;
use typecss_preflight::resets;

fn setup() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn compiles_without_error() {
    setup();
    let css = compile(&resets()).unwrap();
    assert!(!css.is_empty());
}

#[test]
fn first_rule_expands_border() {
    let css = compile(&resets()).unwrap();
    assert!(css.starts_with(
        "*,::after,::before,::backdrop,::file-selector-button{\
         border-width:0;border-style:solid;box-sizing:border-box;margin:0;padding:0;}"
    ));
}

#[test]
fn last_rule_uses_raw_escape() {
    let css = compile(&resets()).unwrap();
    assert!(css.ends_with("[hidden]{display:none !important;}"));
}

#[test]
fn representative_rules() {
    let css = compile(&resets()).unwrap();

    for expected in [
        "html,:host{font-family:ui-sans-serif, system-ui, sans-serif, \"Apple Color Emoji\", \
         \"Segoe UI Emoji\", \"Segoe UI Symbol\", \"Noto Color Emoji\";line-height:1.5;\
         -webkit-tap-highlight-color:transparent;-webkit-text-size-adjust:100%;tab-size:4;}",
        "body{line-height:inherit;}",
        "hr{color:inherit;height:0;border-top-width:1px;}",
        "h1,h2,h3,h4,h5,h6{font-size:inherit;font-weight:inherit;}",
        "a{color:inherit;text-decoration-line:inherit;text-decoration-style:inherit;}",
        "sub,sup{font-size:75%;line-height:0;position:relative;vertical-align:baseline;}",
        "sub{bottom:-0.25em;}",
        "sup{top:-0.5em;}",
        "table{border-collapse:collapse;border-color:inherit;text-indent:0;}",
        "button,input,optgroup,select,textarea,::file-selector-button{\
         background-color:transparent;color:inherit;font-family:inherit;font-size:inherit;\
         letter-spacing:inherit;}",
        ":-moz-focusring{outline:auto;}",
        "::placeholder{color:color-mix(in srgb, currentColor 50%, transparent);opacity:1;}",
        "img,video{height:auto;max-width:100%;}",
    ] {
        assert!(css.contains(expected), "missing rule: {expected}");
    }
}

#[test]
fn rule_order_is_preserved() {
    let sheet = resets();
    let css = compile(&sheet).unwrap();

    let mut offset = 0;
    for rule in sheet.iter() {
        let single = compile(&Stylesheet::new().with_rule(rule.clone())).unwrap();
        assert_eq!(&css[offset..offset + single.len()], single);
        offset += single.len();
    }
    assert_eq!(offset, css.len());
}

#[test]
fn pretty_output_is_stable() {
    let options = CompileOptions::pretty();
    let first = compile_with(&resets(), &options).unwrap();
    let second = compile_with(&resets(), &options).unwrap();

    assert_eq!(first, second);
    assert!(first.contains("hr {\n  color: inherit;\n  height: 0;\n  border-top-width: 1px;\n}\n"));
    assert_eq!(first.matches("\n\n").count(), resets().len() - 1);
}
