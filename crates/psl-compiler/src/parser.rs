use psl_core::{PartitionStats, PublicSuffixList, RuleSets};

/// Partition a raw list into full-match, exception and wildcard rules.
pub fn partition(text: &str) -> RuleSets {
    partition_with_stats(text).0
}

/// Partition a raw list and index it for suffix lookups.
pub fn load_suffix_list(text: &str) -> PublicSuffixList {
    PublicSuffixList::from_rule_sets(&partition(text))
}

/// Same as [`partition`], also returning line counters.
///
/// Lines are split on every line boundary [`split_lines`] knows and are not
/// trimmed. A line is dropped when it is empty or starts with
/// `//`. Wildcard lines land in both the full-match and wildcard sets; a
/// bare `*` lands in neither.
pub fn partition_with_stats(text: &str) -> (RuleSets, PartitionStats) {
    let mut rules = RuleSets::new();
    let mut stats = PartitionStats::default();

    for line in split_lines(text) {
        stats.lines += 1;

        if line.is_empty() {
            stats.blank += 1;
            continue;
        }

        if is_comment_line(line) {
            stats.comments += 1;
            continue;
        }

        if is_exception_rule(line) {
            rules.exception.push(line.to_string());
            continue;
        }

        if line == "*" {
            log::trace!("dropping bare wildcard line {}", stats.lines);
            stats.dropped_bare_wildcard += 1;
            continue;
        }

        rules.full_match.push(line.to_string());

        if is_wildcard_rule(line) {
            rules.wildcard.push(line.to_string());
        }
    }

    stats.full_match = rules.full_match.len();
    stats.exception = rules.exception.len();
    stats.wildcard = rules.wildcard.len();

    log::debug!(
        "partitioned {} lines ({} blank, {} comments): {} full, {} exception, {} wildcard",
        stats.lines,
        stats.blank,
        stats.comments,
        stats.full_match,
        stats.exception,
        stats.wildcard
    );

    (rules, stats)
}

/// Iterate over the lines of `text`.
///
/// Breaks on `\n`, `\r\n`, a lone `\r`, vertical tab, form feed, the
/// `\x1c`..`\x1e` separators, NEL, U+2028 and U+2029. A trailing break does
/// not yield an empty final line.
pub fn split_lines(text: &str) -> SplitLines<'_> {
    SplitLines { rest: text }
}

pub struct SplitLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let rest = self.rest;
        match rest.char_indices().find(|&(_, ch)| is_line_break(ch)) {
            Some((i, ch)) => {
                let mut next = i + ch.len_utf8();
                if ch == '\r' && rest[next..].starts_with('\n') {
                    next += 1;
                }
                self.rest = &rest[next..];
                Some(&rest[..i])
            }
            None => {
                self.rest = "";
                Some(rest)
            }
        }
    }
}

fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\u{b}' | '\u{c}' | '\u{1c}'..='\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

fn is_comment_line(line: &str) -> bool {
    line.starts_with("//")
}

fn is_exception_rule(line: &str) -> bool {
    line.starts_with('!')
}

fn is_wildcard_rule(line: &str) -> bool {
    line.starts_with("*.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_example() {
        let rules = partition("com\n!example.com\n*.example.com\n// comment\n\n*");

        assert_eq!(rules.full_match, ["com", "*.example.com"]);
        assert_eq!(rules.exception, ["!example.com"]);
        assert_eq!(rules.wildcard, ["*.example.com"]);
    }

    #[test]
    fn test_bare_wildcard_dropped() {
        let (rules, stats) = partition_with_stats("*\n*\nnet");

        assert_eq!(rules.full_match, ["net"]);
        assert!(rules.exception.is_empty());
        assert!(rules.wildcard.is_empty());
        assert_eq!(stats.dropped_bare_wildcard, 2);
    }

    #[test]
    fn test_blank_and_comment_lines_excluded() {
        let text = "// ===BEGIN ICANN DOMAINS===\n\nac\n//com.ac\n\r\nedu.ac\n";
        let (rules, stats) = partition_with_stats(text);

        assert_eq!(rules.full_match, ["ac", "edu.ac"]);
        assert_eq!(stats.lines, 6);
        assert_eq!(stats.blank, 2);
        assert_eq!(stats.comments, 2);
        assert_eq!(stats.retained(), 2);
    }

    #[test]
    fn test_lines_not_trimmed() {
        // Only a leading "//" marks a comment
        let rules = partition(" // not a comment\n!x.ck \n");

        assert_eq!(rules.full_match, [" // not a comment"]);
        assert_eq!(rules.exception, ["!x.ck "]);
    }

    #[test]
    fn test_exception_and_full_match_disjoint() {
        let text = "ck\n*.ck\n!www.ck\n!*.weird\njp\n*.kobe.jp\n!city.kobe.jp\n*";
        let rules = partition(text);

        for rule in &rules.full_match {
            assert!(!rules.exception.contains(rule), "{rule} in both sets");
            assert!(!rule.starts_with('!'));
            assert_ne!(rule, "*");
        }
        assert!(rules.exception.iter().all(|r| r.starts_with('!')));
        assert!(rules.wildcard.iter().all(|r| r.starts_with("*.")));
        assert_eq!(rules.exception, ["!www.ck", "!*.weird", "!city.kobe.jp"]);
    }

    #[test]
    fn test_wildcards_overlap_full_match() {
        let rules = partition("*.bd\nbd\n*.kawasaki.jp");

        assert_eq!(rules.full_match, ["*.bd", "bd", "*.kawasaki.jp"]);
        assert_eq!(rules.wildcard, ["*.bd", "*.kawasaki.jp"]);
        assert!(rules.wildcard.iter().all(|w| rules.full_match.contains(w)));
    }

    #[test]
    fn test_order_preserved_and_no_dedupe() {
        let rules = partition("zz\naa\nzz\n!b\n!a");

        assert_eq!(rules.full_match, ["zz", "aa", "zz"]);
        assert_eq!(rules.exception, ["!b", "!a"]);
    }

    #[test]
    fn test_crlf_input() {
        let rules = partition("com\r\n*.ck\r\n!www.ck\r\n");

        assert_eq!(rules.full_match, ["com", "*.ck"]);
        assert_eq!(rules.exception, ["!www.ck"]);
        assert_eq!(rules.wildcard, ["*.ck"]);
    }

    #[test]
    fn test_lone_carriage_return_splits() {
        let rules = partition("com\rnet\r// c\r");
        assert_eq!(rules.full_match, ["com", "net"]);

        let rules = partition("com\nnet\r");
        assert_eq!(rules.full_match, ["com", "net"]);
    }

    #[test]
    fn test_split_lines_boundaries() {
        let lines: Vec<&str> = split_lines("a\r\nb\u{2028}c\u{b}d\u{85}e\u{1d}f\u{c}\n").collect();
        assert_eq!(lines, ["a", "b", "c", "d", "e", "f", ""]);

        assert_eq!(split_lines("\n").collect::<Vec<_>>(), [""]);
        assert_eq!(split_lines("x\n\ny").collect::<Vec<_>>(), ["x", "", "y"]);
        assert_eq!(split_lines("").count(), 0);
    }

    #[test]
    fn test_load_suffix_list() {
        let psl = load_suffix_list("// list\ncom\njp\n*.kobe.jp\n!city.kobe.jp\n");

        assert!(psl.is_public_suffix("com"));
        assert!(psl.is_public_suffix("shop.kobe.jp"));
        assert!(!psl.is_public_suffix("city.kobe.jp"));
        assert!(!psl.is_public_suffix("// list"));
    }

    #[test]
    fn test_empty_input() {
        let (rules, stats) = partition_with_stats("");

        assert!(rules.is_empty());
        assert_eq!(stats, PartitionStats::default());
    }
}
