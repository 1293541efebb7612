use promptlib_core::templates::engine::{RenderContext, render_string};
use promptlib_core::vars::{extract_variable_names, variable_occurrences};
use std::collections::HashSet;

/// Templates covering the awkward corners of brace matching.
const TEMPLATES: &[&str] = &[
    "",
    "no vars here",
    "Hello {name}",
    "{topic} and {topic}",
    "{ topic }",
    "{}",
    "{   }",
    "{a}{b}",
    "literal { unclosed",
    "}{x}{",
    "{a{b}c}",
    "{{double}}",
    "Dear {first name},\nyour order {order-id} shipped. { first name }!",
    "{ \t }{z}{z }{ z}",
];

fn sentinel(name: &str) -> String {
    format!("<<{}>>", name.replace(' ', "_"))
}

#[test]
fn extraction_has_no_duplicates_and_keeps_first_occurrence_order() {
    for template in TEMPLATES {
        let names = extract_variable_names(template);

        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len(), "duplicates in {template:?}");

        let mut expected = Vec::new();
        for occ in variable_occurrences(template) {
            if occ.is_named() && !expected.contains(&occ.name) {
                expected.push(occ.name);
            }
        }
        assert_eq!(names, expected, "order mismatch in {template:?}");
    }
}

#[test]
fn extraction_is_idempotent() {
    for template in TEMPLATES {
        assert_eq!(extract_variable_names(template), extract_variable_names(template));
    }
}

#[test]
fn rendering_replaces_every_matched_span() {
    for template in TEMPLATES {
        let ctx: RenderContext = extract_variable_names(template)
            .into_iter()
            .map(|name| {
                let value = sentinel(&name);
                (name, value)
            })
            .collect();

        let rendered = render_string(template, &ctx);

        // Every brace left over must be one that was never part of a span.
        let mut stray = String::new();
        let mut last = 0;
        for occ in variable_occurrences(template) {
            stray.push_str(&template[last..occ.span.start]);
            last = occ.span.end;
        }
        stray.push_str(&template[last..]);

        let count = |s: &str, c: char| s.chars().filter(|&x| x == c).count();
        assert_eq!(count(&rendered, '{'), count(&stray, '{'), "in {template:?}");
        assert_eq!(count(&rendered, '}'), count(&stray, '}'), "in {template:?}");
    }
}

#[test]
fn sentinel_counts_match_occurrence_counts() {
    for template in TEMPLATES {
        let names = extract_variable_names(template);
        let ctx: RenderContext =
            names.iter().map(|name| (name.clone(), sentinel(name))).collect();

        let rendered = render_string(template, &ctx);
        let occurrences = variable_occurrences(template);

        for name in &names {
            let expected = occurrences.iter().filter(|o| &o.name == name).count();
            assert!(expected >= 1);
            assert_eq!(
                rendered.matches(&sentinel(name)).count(),
                expected,
                "sentinel for {name:?} in {template:?}"
            );
        }
    }
}

#[test]
fn rendering_with_empty_context_only_removes_spans() {
    let ctx = RenderContext::new();
    assert_eq!(render_string("a {x} b {y} c", &ctx), "a  b  c");
    assert_eq!(render_string("}{x}{", &ctx), "}{");
    assert_eq!(render_string("{{double}}", &ctx), "{}");
}

#[test]
fn rendered_values_are_not_rescanned() {
    let mut ctx = RenderContext::new();
    ctx.insert("a".into(), "{a}".into());
    let once = render_string("[{a}]", &ctx);
    assert_eq!(once, "[{a}]");
    assert_eq!(render_string(&once, &ctx), "[{a}]");
}

#[test]
fn engine_is_usable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let mut ctx = RenderContext::new();
                ctx.insert("n".into(), i.to_string());
                (extract_variable_names("{n}{n}"), render_string("{n}-{n}", &ctx))
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (names, rendered) = handle.join().unwrap();
        assert_eq!(names, vec!["n"]);
        assert_eq!(rendered, format!("{i}-{i}"));
    }
}
