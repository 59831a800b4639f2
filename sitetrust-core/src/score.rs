//! Trust scoring - pure aggregation of signals into a bounded score
//!
//! The scoring function is total over its input domain and memoryless: every
//! invocation is independent, and identical inputs always produce identical
//! output. Signal collection and I/O live elsewhere; nothing in this module
//! touches ambient state.

use crate::signal::{titles, Signal, SignalStatus};

/// Domain substrings granted a fixed reputation boost
const REPUTABLE_MARKERS: &[&str] = &["google", "github", "microsoft"];

/// Domain substrings penalized as placeholder or throwaway hosts
const SUSPECT_MARKERS: &[&str] = &["example", "test"];

/// Maximum contribution of the normalized signal pool to the score
const SIGNAL_POOL_POINTS: f64 = 20.0;

/// Compute the aggregate trust score in [0,100].
///
/// Starts from a base of 50, applies the transport and header adjustments,
/// folds in the weighted signal pool (capped at [`SIGNAL_POOL_POINTS`]), and
/// finishes with the domain reputation adjustment before rounding and
/// clamping.
pub fn score(
    target: &str,
    transport_is_secure: bool,
    has_security_header: bool,
    signals: &[Signal],
) -> u8 {
    let mut score: f64 = 50.0;

    // Transport security is the single largest factor
    if transport_is_secure {
        score += 20.0;
    } else {
        score -= 20.0;
    }

    if has_security_header {
        score += 10.0;
    }

    // Weighted pool: full credit for good, half for warning, none for bad.
    // Info signals carry no weight in either direction.
    let mut total_impact: f64 = 0.0;
    let mut weighted: f64 = 0.0;

    for signal in signals {
        match signal.status {
            SignalStatus::Good => {
                total_impact += f64::from(signal.impact);
                weighted += f64::from(signal.impact) * 10.0;
            }
            SignalStatus::Warning => {
                total_impact += f64::from(signal.impact);
                weighted += f64::from(signal.impact) * 5.0;
            }
            SignalStatus::Bad => {
                total_impact += f64::from(signal.impact);
            }
            SignalStatus::Info => {}
        }
    }

    // Normalize to at most SIGNAL_POOL_POINTS; the guard keeps the division
    // total when every signal is informational
    if total_impact > 0.0 {
        score += (weighted / (total_impact * 10.0)) * SIGNAL_POOL_POINTS;
    }

    // Fixed reputation adjustment keyed on the normalized host
    if REPUTABLE_MARKERS.iter().any(|m| target.contains(m)) {
        score += 10.0;
    } else if SUSPECT_MARKERS.iter().any(|m| target.contains(m)) {
        score -= 5.0;
    }

    score.round().clamp(0.0, 100.0) as u8
}

/// Generate the human-readable summary for a finished analysis.
///
/// Deterministic given its inputs: an opening sentence keyed on the score
/// band, up to two high-impact signal titles, and a recommendation when the
/// score leaves room for one.
pub fn summarize(score: u8, signals: &[Signal]) -> String {
    let mut summary = String::from(match score {
        80..=u8::MAX => "This website appears to implement strong security practices. ",
        60..=79 => {
            "This website has reasonable security measures in place, \
             but could improve in some areas. "
        }
        40..=59 => "This website has several security concerns that should be addressed. ",
        _ => {
            "This website has significant security issues and should be \
             approached with caution. "
        }
    });

    // Most critical factors: impact >= 6, descending by impact. The sort is
    // stable so ties keep collection order.
    let mut critical: Vec<&Signal> = signals.iter().filter(|s| s.impact >= 6).collect();
    critical.sort_by(|a, b| b.impact.cmp(&a.impact));

    let pick_titles = |status: SignalStatus| -> Vec<String> {
        critical
            .iter()
            .filter(|s| s.status == status)
            .take(2)
            .map(|s| s.title.to_lowercase())
            .collect()
    };

    let bad = pick_titles(SignalStatus::Bad);
    if !bad.is_empty() {
        summary.push_str("The most significant issues include: ");
        summary.push_str(&bad.join(" and "));
        summary.push_str(". ");
    } else {
        let good = pick_titles(SignalStatus::Good);
        if !good.is_empty() {
            summary.push_str("Notable security strengths include: ");
            summary.push_str(&good.join(" and "));
            summary.push_str(". ");
        }
    }

    if score < 80 {
        summary.push_str("We recommend the website owner ");

        let has_good = |title: &str| {
            signals
                .iter()
                .any(|s| s.title == title && s.status == SignalStatus::Good)
        };

        if !has_good(titles::HTTPS_CONNECTION) {
            summary.push_str("implement HTTPS encryption");
        } else if !has_good(titles::CONTENT_SECURITY_POLICY) {
            summary.push_str("add a Content Security Policy");
        } else {
            summary.push_str("address the security warnings identified in this report");
        }

        summary.push_str(" to improve the overall security posture.");
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn signal(status: SignalStatus, impact: u8) -> Signal {
        Signal::new("Test Check", "A check.", status, impact)
    }

    #[test]
    fn test_empty_signals_depend_only_on_booleans() {
        assert_eq!(score("neutral.org", false, false, &[]), 30);
        assert_eq!(score("neutral.org", false, true, &[]), 40);
        assert_eq!(score("neutral.org", true, false, &[]), 70);
        assert_eq!(score("neutral.org", true, true, &[]), 80);
    }

    #[test]
    fn test_bad_signal_contributes_nothing() {
        // totalImpact=8, weighted=0: 50 - 20 + 0 = 30
        let signals = [signal(SignalStatus::Bad, 8)];
        assert_eq!(score("neutral.org", false, false, &signals), 30);
    }

    #[test]
    fn test_all_good_signals_max_out_pool() {
        // Pool normalizes to its 20-point cap regardless of impact sum
        let signals = [signal(SignalStatus::Good, 3), signal(SignalStatus::Good, 9)];
        assert_eq!(score("neutral.org", true, true, &signals), 100);
    }

    #[test]
    fn test_warning_signals_earn_half_credit() {
        // 50 + 20 + (5/10)*20 = 80
        let signals = [signal(SignalStatus::Warning, 6)];
        assert_eq!(score("neutral.org", true, false, &signals), 80);
    }

    #[test]
    fn test_info_signals_are_neutral() {
        let with_info = [signal(SignalStatus::Info, 10)];
        assert_eq!(
            score("neutral.org", true, false, &with_info),
            score("neutral.org", true, false, &[])
        );
    }

    #[test]
    fn test_reputation_adjustment() {
        let neutral = score("somesite.org", true, false, &[]);
        assert_eq!(score("docs.google.com", true, false, &[]), neutral + 10);
        assert_eq!(score("github.io", true, false, &[]), neutral + 10);
        assert_eq!(score("example.com", true, false, &[]), neutral - 5);
        assert_eq!(score("my-test-site.net", true, false, &[]), neutral - 5);
    }

    #[test]
    fn test_score_clamped_to_range() {
        let bad = [signal(SignalStatus::Bad, 10)];
        let low = score("example.com", false, false, &bad);
        assert_eq!(low, 25);

        let good: Vec<Signal> = (0..5).map(|_| signal(SignalStatus::Good, 10)).collect();
        let high = score("google.com", true, true, &good);
        assert_eq!(high, 100);
    }

    #[test]
    fn test_transport_security_is_monotone() {
        let signals = [
            signal(SignalStatus::Good, 5),
            signal(SignalStatus::Bad, 7),
            signal(SignalStatus::Warning, 3),
        ];
        for header in [false, true] {
            let insecure = score("somesite.org", false, header, &signals);
            let secure = score("somesite.org", true, header, &signals);
            assert!(secure >= insecure);
        }
    }

    #[test]
    fn test_score_is_idempotent() {
        let signals = [signal(SignalStatus::Warning, 4), signal(SignalStatus::Good, 8)];
        let first = score("somesite.org", true, true, &signals);
        let second = score("somesite.org", true, true, &signals);
        assert_eq!(first, second);
    }

    #[test]
    fn test_summary_bands() {
        assert!(summarize(85, &[]).starts_with("This website appears to implement strong"));
        assert!(summarize(65, &[]).starts_with("This website has reasonable security"));
        assert!(summarize(45, &[]).starts_with("This website has several security concerns"));
        assert!(summarize(20, &[]).starts_with("This website has significant security issues"));
    }

    #[test]
    fn test_summary_names_worst_issues_first() {
        let signals = [
            Signal::new("Weak Cipher", "desc", SignalStatus::Bad, 6),
            Signal::new("Expired Certificate", "desc", SignalStatus::Bad, 9),
            Signal::new("Strong Headers", "desc", SignalStatus::Good, 7),
        ];
        let summary = summarize(35, &signals);
        assert!(summary.contains("expired certificate and weak cipher"));
        // Good titles are only mentioned when no bad ones exist
        assert!(!summary.contains("strong headers"));
    }

    #[test]
    fn test_summary_mentions_strengths_without_issues() {
        let signals = [
            Signal::new("HTTPS Connection", "desc", SignalStatus::Good, 8),
            Signal::new("Content Security Policy", "desc", SignalStatus::Good, 7),
            Signal::new("Domain Age", "desc", SignalStatus::Info, 4),
        ];
        let summary = summarize(90, &signals);
        assert!(summary.contains("https connection and content security policy"));
    }

    #[test]
    fn test_summary_caps_titles_at_two() {
        let signals = [
            Signal::new("First Issue", "desc", SignalStatus::Bad, 9),
            Signal::new("Second Issue", "desc", SignalStatus::Bad, 8),
            Signal::new("Third Issue", "desc", SignalStatus::Bad, 7),
        ];
        let summary = summarize(20, &signals);
        assert!(summary.contains("first issue and second issue"));
        assert!(!summary.contains("third issue"));
    }

    #[test]
    fn test_summary_only_references_supplied_titles() {
        let signals = [Signal::new("Privacy Policy", "desc", SignalStatus::Warning, 3)];
        let summary = summarize(55, &signals);
        // Low-impact warnings never make the critical list
        assert!(!summary.contains("privacy policy"));
    }

    #[test]
    fn test_recommendation_priority() {
        // No good HTTPS signal at all
        let none: [Signal; 0] = [];
        assert!(summarize(50, &none).contains("implement HTTPS encryption"));

        // HTTPS good but CSP missing
        let https_only = [Signal::new(
            titles::HTTPS_CONNECTION,
            "desc",
            SignalStatus::Good,
            8,
        )];
        assert!(summarize(60, &https_only).contains("add a Content Security Policy"));

        // Both covered: generic recommendation
        let both = [
            Signal::new(titles::HTTPS_CONNECTION, "desc", SignalStatus::Good, 8),
            Signal::new(titles::CONTENT_SECURITY_POLICY, "desc", SignalStatus::Good, 7),
        ];
        assert!(summarize(70, &both).contains("address the security warnings"));

        // High scores carry no recommendation
        assert!(!summarize(85, &none).contains("We recommend"));
    }
}
