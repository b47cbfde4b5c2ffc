#![cfg(test)]

use crate::fonts::{FontSpec, StandardFontMetrics, TextMetrics};
use crate::test_utils::{FixedWidthMetrics, init_logger};
use crate::text::{LineWrapper, SAFETY_MARGIN};

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor \
incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation \
ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in reprehenderit in \
voluptate velit esse cillum dolore eu fugiat nulla pariatur.";

const WIDTHS: [f32; 5] = [20.0, 30.0, 45.0, 75.0, 120.0];

const SAMPLES: [&str; 6] = [
    LOREM,
    "Manutenção preventiva em subestação abrigada, inspeção termográfica e emissão de relatório técnico.",
    "Instalação de quadro de distribuição com disjuntores bem-vindos e cabeamento auto-extinguível",
    "Pneumoultramicroscopicossilicovulcanoconiótico é uma palavra longa demais para uma célula estreita",
    "a b Supercalifragilisticexpialidocious c",
    "",
];

fn fixed(max_width: f32) -> LineWrapper<'static> {
    LineWrapper::new(&FixedWidthMetrics, FontSpec::regular(9.0), max_width)
}

fn strip_breaks(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace() && *c != '-').collect()
}

#[test]
fn test_short_text_stays_on_one_line() {
    let lines = fixed(20.0).wrap("hello world");
    assert_eq!(lines.lines(), ["hello world"]);
    assert_eq!(lines.line_count(), 1);
}

#[test]
fn test_greedy_breaks_at_word_boundaries() {
    // limit = 15 - 5 = 10
    let lines = fixed(15.0).wrap("aaa bbb ccc ddd");
    assert_eq!(lines.lines(), ["aaa bbb", "ccc ddd"]);
}

#[test]
fn test_whitespace_runs_collapse() {
    let lines = fixed(15.0).wrap("  aaa \t\n bbb  ");
    assert_eq!(lines.lines(), ["aaa bbb"]);
}

#[test]
fn test_empty_text_yields_one_empty_line() {
    assert_eq!(fixed(15.0).wrap("").lines(), [""]);
    assert_eq!(fixed(15.0).wrap("   ").lines(), [""]);
}

#[test]
fn test_long_word_is_hyphenated() {
    init_logger();
    let lines = fixed(15.0).wrap("abcdefghijklmnopqrstuvwxyz");
    assert_eq!(lines.lines(), ["abcdefghi-", "jklmnopqr-", "stuvwxyz"]);
}

#[test]
fn test_long_word_flushes_partial_line_before_splitting() {
    let lines = fixed(15.0).wrap("ab abcdefghijklmno");
    assert_eq!(lines.lines(), ["ab", "abcdefghi-", "jklmno"]);
}

#[test]
fn test_words_after_a_split_continue_its_tail() {
    let lines = fixed(15.0).wrap("abcdefghijklmno a bb");
    assert_eq!(lines.lines(), ["abcdefghi-", "jklmno a", "bb"]);
}

#[test]
fn test_word_wider_than_limit_but_not_max_width_is_split() {
    // 12 chars: narrower than max_width (15) but wider than the limit (10).
    let lines = fixed(15.0).wrap("abcdefghijkl");
    assert_eq!(lines.line_count(), 2);
    assert!(lines.iter().all(|l| l.chars().count() <= 10));
}

#[test]
fn test_single_char_wider_than_limit_still_terminates() {
    let lines = fixed(SAFETY_MARGIN).wrap("ab");
    assert_eq!(lines.lines(), ["a-", "b"]);
}

#[test]
fn test_custom_safety_margin() {
    let wrapper = fixed(12.0).with_safety_margin(2.0);
    assert_eq!(wrapper.limit(), 10.0);
    assert_eq!(wrapper.wrap("aaaa bbbbb").lines(), ["aaaa bbbbb"]);
}

#[test]
fn test_paragraphs_are_wrapped_separately() {
    let paragraphs = fixed(15.0).wrap_paragraphs("one\n\ntwo three four\r\n");
    let lines: Vec<Vec<String>> = paragraphs.into_iter().map(|p| p.into_lines()).collect();
    assert_eq!(
        lines,
        vec![
            vec!["one".to_string()],
            vec![String::new()],
            vec!["two three".to_string(), "four".to_string()],
            vec![String::new()],
        ]
    );
}

#[test]
fn test_lines_are_stable_under_rewrap() {
    let wrapper = fixed(15.0);
    let text = "ab abcdefghijklmno a bb ccc dddd eeeee ffffffffffffffffffffffff g";
    for line in wrapper.wrap(text).iter() {
        assert_eq!(wrapper.wrap(line).lines(), [line.clone()], "line {line:?} re-wrapped");
    }
}

#[test]
fn test_rejoined_output_wraps_to_the_same_lines() {
    let metrics = StandardFontMetrics;
    let font = FontSpec::regular(9.0);
    for max_width in WIDTHS {
        let wrapper = LineWrapper::new(&metrics, font, max_width);
        for text in SAMPLES {
            let lines = wrapper.wrap(text);
            let rejoined = lines.lines().join(" ");
            assert_eq!(
                wrapper.wrap(&rejoined),
                lines,
                "re-wrap of {text:?} at {max_width} mm changed"
            );
        }
    }

    let wrapper = fixed(15.0);
    let lines = wrapper.wrap("ab abcdefghijklmno a bb ccc dddd eeeee ffffffffffffffffffffffff g");
    assert_eq!(wrapper.wrap(&lines.lines().join(" ")), lines);
}

#[test]
fn test_wrapped_lines_fit_and_keep_word_order() {
    let metrics = StandardFontMetrics;
    let font = FontSpec::regular(9.0);
    for max_width in WIDTHS {
        let wrapper = LineWrapper::new(&metrics, font, max_width);
        for text in SAMPLES {
            let lines = wrapper.wrap(text);
            for line in &lines {
                assert!(
                    metrics.text_width(&font, line) <= max_width - SAFETY_MARGIN,
                    "line {line:?} of {text:?} too wide for {max_width} mm"
                );
            }
            let joined: String = lines.iter().map(|l| strip_breaks(l)).collect();
            assert_eq!(joined, strip_breaks(text), "words of {text:?} changed at {max_width} mm");
        }
    }
}

#[test]
fn test_narrow_column_hyphenates_accented_words() {
    let metrics = StandardFontMetrics;
    let wrapper = LineWrapper::new(&metrics, FontSpec::regular(9.0), 20.0);
    let lines = wrapper.wrap(SAMPLES[1]);
    let fragments: Vec<_> = lines.iter().filter(|l| l.ends_with('-')).collect();
    assert!(!fragments.is_empty());
    for fragment in fragments {
        assert!(!fragment.contains(' '), "fragment {fragment:?} shares a line");
    }
}

#[test]
fn test_lorem_description_column() {
    let text = &LOREM[..300];
    assert_eq!(text.chars().count(), 300);

    let metrics = StandardFontMetrics;
    let font = FontSpec::regular(9.0);
    let wrapper = LineWrapper::new(&metrics, font, 75.0);
    let lines = wrapper.wrap(text);

    assert!(lines.line_count() > 1);
    for line in &lines {
        assert!(
            metrics.text_width(&font, line) <= 75.0 - SAFETY_MARGIN,
            "line {line:?} too wide"
        );
    }
    assert_eq!(lines.iter().map(|l| strip_breaks(l)).collect::<String>(), strip_breaks(text));
    assert_eq!(wrapper.wrap(text), lines);
}

#[test]
fn test_bold_wraps_no_earlier_than_needed() {
    let metrics = StandardFontMetrics;
    let regular = LineWrapper::new(&metrics, FontSpec::regular(10.0), 80.0).wrap(LOREM);
    let bold = LineWrapper::new(&metrics, FontSpec::bold(10.0), 80.0).wrap(LOREM);
    assert!(bold.line_count() >= regular.line_count());
}
