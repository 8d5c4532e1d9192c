use pretty_assertions::assert_eq;
use prosemark::{RenderOptions, render, render_with_options};
use rstest::rstest;

#[rstest]
#[case::paragraph("hello <script>alert(1)</script>")]
#[case::heading("## <script>alert(1)</script>")]
#[case::list_item("- <script>alert(1)</script>")]
#[case::quote("> <script>alert(1)</script>")]
#[case::table_cell("| <script>alert(1)</script> | x |\n|---|---|\n| <script> | y |")]
#[case::fake_table("<table><tr><td><script>alert(1)</script></td></tr></table>")]
#[case::bold("**<script>**alert(1)**</script>**")]
fn never_emits_raw_script(#[case] input: &str) {
    let html = render(input);
    assert!(!html.contains("<script"), "unescaped script in {html}");
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn table_round_trip() {
    let html = render("| Segment | Share |\n|---|---|\n| Builders | 40% |\n| Buyers | 35% |");
    assert_eq!(html.matches("<table>").count(), 1);
    assert_eq!(html.matches("<thead>").count(), 1);
    assert_eq!(html.matches("<th>").count(), 2);
    assert_eq!(html.matches("<td>").count(), 4);

    let builders = html.find("Builders").unwrap();
    let buyers = html.find("Buyers").unwrap();
    assert!(builders < buyers);
}

#[test]
fn bold_before_italic() {
    assert_eq!(
        render("**bold** and *italic*"),
        "<p><strong>bold</strong> and <em>italic</em></p>"
    );
}

#[test]
fn heading_precedence() {
    assert_eq!(render("#### Deep\n## Shallow"), "<h4>Deep</h4><h2>Shallow</h2>");
}

#[test]
fn list_runs_split_on_kind_change() {
    assert_eq!(
        render("- a\n- b\n1. c\n2. d\nplain"),
        "<ul><li>a</li><li>b</li></ul><ol><li>c</li><li>d</li></ol><p>plain</p>"
    );
}

#[test]
fn plain_text_is_one_escaped_paragraph() {
    let input = "Tom & Jerry <3 each other\nand nothing else";
    let first = render(input);
    assert_eq!(
        first,
        "<p>Tom &amp; Jerry &lt;3 each other<br>and nothing else</p>"
    );
    assert_eq!(render(input), first);
}

#[rstest]
#[case("")]
#[case("\n\n")]
#[case("   \t ")]
fn degenerate_input_renders_nothing(#[case] input: &str) {
    assert_eq!(render(input), "");
}

#[test]
fn single_pipe_line_stays_text() {
    assert_eq!(render("| lonely |"), "<p>| lonely |</p>");
}

#[test]
fn literal_placeholder_text_survives() {
    assert_eq!(
        render("__TABLE_PLACEHOLDER_0__\n\n| a |\n| b |"),
        "<p>__TABLE_PLACEHOLDER_0__</p>\
         <table><thead><tr><th>a</th></tr></thead><tbody><tr><td>b</td></tr></tbody></table>"
    );
}

#[test]
fn long_underscore_run_before_marker_text() {
    let input = format!("{}_TABLE_PLACEHOLDER_\n| a |\n| b |", "_".repeat(50_000));
    let html = render(&input);
    assert!(html.starts_with("<p>___"));
    assert!(html.contains("_TABLE_PLACEHOLDER_</p>"));
    assert!(html.ends_with("<tbody><tr><td>b</td></tr></tbody></table>"));
}

#[rstest]
#[case("## T\n   \n\t\n- a\n \ntext\n\n\n")]
#[case(" \n**\n \n> q\n\t")]
#[case("| a |\n| b |\n  \n  \n---")]
fn whitespace_lines_leave_no_empty_paragraphs(#[case] input: &str) {
    let html = render(input);
    assert!(!html.contains("<p></p>"), "empty paragraph in {html}");
    assert!(!html.contains("<p> </p>"), "empty paragraph in {html}");
}

#[test]
fn crlf_input() {
    assert_eq!(render("- a\r\n- b\r\n"), "<ul><li>a</li><li>b</li></ul>");
}

#[test]
fn asterisk_bullets() {
    assert_eq!(
        render("* one\n* *two*"),
        "<ul><li>one</li><li><em>two</em></li></ul>"
    );
}

#[test]
fn full_report() {
    let input = "\
## Audience Snapshot

Our research found **three** segments.
Each is _distinct_.

| Segment | Share |
|---|---|
| Builders | 40% |
| Buyers | 35% |

> Quote from a participant

1. First
2. Second

---
#### Notes";

    let expected = "\
<h2>Audience Snapshot</h2>\
<p>Our research found <strong>three</strong> segments.<br>Each is <em>distinct</em>.</p>\
<table><thead><tr><th>Segment</th><th>Share</th></tr></thead>\
<tbody><tr><td>Builders</td><td>40%</td></tr><tr><td>Buyers</td><td>35%</td></tr></tbody></table>\
<blockquote>Quote from a participant</blockquote>\
<ol><li>First</li><li>Second</li></ol>\
<hr>\
<h4>Notes</h4>";

    assert_eq!(render(input), expected);
}

#[test]
fn class_prefix_hook() {
    let options = RenderOptions {
        class_prefix: Some("report".to_string()),
    };
    assert_eq!(
        render_with_options("## Title\nbody with *stress*", &options),
        r#"<h2 class="report-h2">Title</h2><p class="report-p">body with <em class="report-em">stress</em></p>"#
    );
}

#[test]
fn class_prefix_does_not_change_structure() {
    let input = "## T\n- a\n\n| x |\n| y |\n\ntext";
    let plain = render(input);
    let styled = render_with_options(
        input,
        &RenderOptions {
            class_prefix: Some("my_app".to_string()),
        },
    );
    let stripped = styled.replace(r#" class="my_app-"#, "\u{0}");
    let stripped: String = stripped
        .split('\u{0}')
        .enumerate()
        .map(|(i, part)| {
            if i == 0 {
                part.to_string()
            } else {
                part.split_once("\">").map_or(String::new(), |(_, rest)| format!(">{rest}"))
            }
        })
        .collect();
    assert_eq!(stripped, plain);
}

#[test]
fn concurrent_renders_agree() {
    let input = "## H\n\n- a\n- b\n\n| x | y |\n| 1 | 2 |";
    let expected = render(input);
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| render(input))).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
