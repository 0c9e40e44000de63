//! End-to-end output of the [`Reporter`] entry points.

use vtreport_render::{FixedColorDetector, Reporter, StyleList};

fn reporter() -> Reporter {
    Reporter::new().with_detector(FixedColorDetector(false))
}

// =============================================================================
// Messages
// =============================================================================

#[test]
fn test_every_named_style() {
    let reporter = reporter();
    for (name, code) in reporter.styles() {
        let Some(code) = code else { continue };

        let text = format!("`{}` style", name);
        assert_eq!(
            reporter.write(&text, name, true),
            format!("\x1b[{}m{}\x1b[0m\n", code, text)
        );
    }
}

#[test]
fn test_title() {
    let text = "Testing title console writing";
    assert_eq!(reporter().title(text), format!("\x1b[1;4m{}\x1b[0m\n", text));
}

#[test]
fn test_subtitle() {
    let text = "Subtile testing";
    assert_eq!(reporter().subtitle(text), format!("\x1b[1;4m{}\x1b[0m\n", text));
}

#[test]
fn test_messages() {
    let reporter = reporter();

    assert_eq!(reporter.write("Hello ", ["red"], false), "\x1b[31mHello \x1b[0m");
    assert_eq!(reporter.write("World", ["green"], true), "\x1b[32mWorld\x1b[0m\n");
    assert_eq!(
        reporter.write("Simple text", StyleList::new(), true),
        "Simple text\n"
    );
    assert_eq!(
        reporter.write("<comment>some comment</comment>", "blue", true),
        "\x1b[34m<comment>some comment</comment>\x1b[0m\n"
    );
    assert_eq!(
        reporter.write("Some text", ["blue", "bg_green"], false),
        "\x1b[34;42mSome text\x1b[0m"
    );
}

#[test]
fn test_combined_and_256_color_styles() {
    let mut reporter = reporter();

    assert_eq!(reporter.write("Text", ["bold", "dark"], false), "\x1b[1;2mText\x1b[0m");

    reporter.config_mut().force_support_256_color = true;
    assert_eq!(
        reporter.write("Text", "color_255", false),
        "\x1b[38;5;255mText\x1b[0m"
    );

    reporter.config_mut().force_support_256_color = false;
    assert_eq!(reporter.write("Text", "color_255", false), "Text");
}

#[test]
fn test_unknown_and_none_styles_leave_text_alone() {
    let reporter = reporter();
    assert_eq!(reporter.write("Text", ["none", "glitter"], false), "Text");
    assert_eq!(reporter.write("Text", ["glitter", "red"], false), "\x1b[31mText\x1b[0m");
}

// =============================================================================
// XML
// =============================================================================

#[test]
fn test_xml_block_mode() {
    let reporter = reporter();

    assert_eq!(
        reporter.write_xml("", Some("cyan".into())).unwrap(),
        "\x1b[36m\x1b[0m\n"
    );

    let text = "<?xml version=\"1.0\" encoding=\"UTF-8\"?><request><body>Text</body></request>";
    assert_eq!(
        reporter.write_xml(text, Some("cyan".into())).unwrap(),
        "\x1b[36m<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <request>\n  <body>Text</body>\n</request>\n\x1b[0m\n"
    );
}

#[test]
fn test_xml_structural_mode() {
    let text = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>
<TransferReversalRequest>
  <ICA>123456</ICA>
  <TransactionReference>4239920003040253011</TransactionReference>
  <ReversalReason param=\"value\">1111 IN PROCESSING</ReversalReason>
  <Code/>
</TransferReversalRequest>";

    let expected = [
        "\x1b[36m<\x1b[0m\x1b[36mTransferReversalRequest\x1b[0m\x1b[36m>\x1b[0m",
        "    \x1b[36m<\x1b[0m\x1b[36mICA\x1b[0m\x1b[36m>\x1b[0m\x1b[37m123456\x1b[0m\
         \x1b[36m</\x1b[0m\x1b[36mICA\x1b[0m\x1b[36m>\x1b[0m",
        "    \x1b[36m<\x1b[0m\x1b[36mTransactionReference\x1b[0m\x1b[36m>\x1b[0m\
         \x1b[37m4239920003040253011\x1b[0m\
         \x1b[36m</\x1b[0m\x1b[36mTransactionReference\x1b[0m\x1b[36m>\x1b[0m",
        "    \x1b[36m<\x1b[0m\x1b[36mReversalReason\x1b[0m \
         \x1b[34;1;3mparam\x1b[0m\x1b[37m=\x1b[0m\x1b[35;3m\"value\"\x1b[0m\
         \x1b[36m>\x1b[0m\x1b[37m1111 IN PROCESSING\x1b[0m\
         \x1b[36m</\x1b[0m\x1b[36mReversalReason\x1b[0m\x1b[36m>\x1b[0m",
        "    \x1b[36m<\x1b[0m\x1b[36mCode\x1b[0m\x1b[36m/>\x1b[0m",
        "\x1b[36m</\x1b[0m\x1b[36mTransferReversalRequest\x1b[0m\x1b[36m>\x1b[0m",
    ];

    let rendered = reporter().write_xml(text, None).unwrap();
    assert_eq!(rendered, expected.join("\n") + "\n");
}

#[test]
fn test_invalid_xml_with_error_report() {
    let mut reporter = reporter();
    reporter.config_mut().display_xml_errors = true;

    let text = "<?xml version=\"1.0\" encoding=\"UTF-8 \"?><request><body>Text</body></request>";
    assert_eq!(
        reporter.write_xml(text, Some("cyan".into())).unwrap(),
        format!(
            "\x1b[36m<!-- There are XML syntax errors: -->\n    \
             <!-- #1 on 1:21 - `Invalid XML encoding name 'UTF-8 '` -->\n\n{}\x1b[0m\n",
            text
        )
    );
}

#[test]
fn test_invalid_xml_without_error_report() {
    let text = "<?xml version=\"1.0\" encoding=\"UTF-8 \"?><request><body>Text</body></request>";
    assert_eq!(
        reporter().write_xml(text, Some("cyan".into())).unwrap(),
        format!("\x1b[36m{}\x1b[0m\n", text)
    );
}

#[test]
fn test_error_report_lists_positions_on_later_lines() {
    let mut reporter = reporter();
    reporter.config_mut().display_xml_errors = true;

    let text = "<a>\n  <b>\n</a>";
    let out = reporter.write_xml(text, Some(StyleList::new())).unwrap();
    assert!(out.starts_with("<!-- There are XML syntax errors: -->\n    <!-- #1 on 3:"));
    assert!(out.ends_with("\n\n<a>\n  <b>\n</a>\n"));
}

#[test]
fn test_malformed_standalone_is_reported_not_raised() {
    let mut reporter = reporter();
    reporter.config_mut().display_xml_errors = true;

    let text = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=yes?><a/>";

    let block = reporter.write_xml(text, Some("cyan".into())).unwrap();
    assert!(block.starts_with("\x1b[36m<!-- There are XML syntax errors: -->\n    <!-- #1 on 1:38 - `"));
    assert!(block.ends_with(&format!("\n\n{}\x1b[0m\n", text)));

    let structural = reporter.write_xml(text, None).unwrap();
    assert!(structural.starts_with("<!-- There are XML syntax errors: -->\n    <!-- #1 on 1:38 - `"));
    assert!(structural.ends_with(&format!("\n\n{}\n", text)));
}

#[test]
fn test_ill_formed_documents_are_passed_through() {
    let reporter = reporter();
    for text in [
        "<a><1b/></a>",
        "<a x=\"<\"/>",
        "<a>x]]>y</a>",
        "<?xml version=\"1.0\" standalone=\"maybe\"?><a/>",
        "<a/><!DOCTYPE a>",
        "<a>x < y</a>",
    ] {
        assert_eq!(reporter.write_xml(text, Some(StyleList::new())).unwrap(), format!("{}\n", text));
    }
}

#[test]
fn test_internal_subset_entities_are_well_formed() {
    let text = "<!DOCTYPE a [<!ENTITY e \"x\">]><a>&e;</a>";
    assert_eq!(
        reporter().write_xml(text, Some(StyleList::new())).unwrap(),
        "<?xml version=\"1.0\"?>\n<!DOCTYPE a [<!ENTITY e \"x\">]>\n<a>&e;</a>\n\n"
    );
}
