//! Simulated signal source - randomized heuristics standing in for real probes
//!
//! This source fabricates findings: header presence, domain age, SSL posture
//! and privacy-policy presence are sampled per invocation, biased toward
//! well-known domains so the output looks plausible. It is explicitly NOT a
//! source of security truth. A live prober would implement the same
//! [`SignalSource`] interface and replace this wholesale.

use anyhow::Result;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use tracing::debug;

use super::SignalSource;
use crate::signal::{titles, Signal, SignalStatus, SiteFindings};
use crate::target::Target;

/// Domains biased toward having security headers
const SECURE_HEADER_DOMAINS: &[&str] = &[
    "google.com",
    "github.com",
    "microsoft.com",
    "cloudflare.com",
    "mozilla.org",
];

/// Domains biased toward long registration histories
const ESTABLISHED_DOMAINS: &[&str] = &["google", "microsoft", "apple", "amazon", "yahoo", "ebay"];

/// Domains biased toward strong SSL deployments
const STRONG_SSL_DOMAINS: &[&str] = &["bank", "gov", "google", "microsoft", "apple"];

/// Domains biased toward publishing a privacy policy
const PRIVACY_POLICY_DOMAINS: &[&str] = &[
    "google", "amazon", "microsoft", "apple", "facebook", "shop", "store",
];

/// Server banner pool for unrecognized domains; `None` models hidden banners
const SERVER_POOL: &[Option<&str>] = &[
    Some("Apache/2.4.41"),
    Some("nginx/1.18.0"),
    Some("Microsoft-IIS/10.0"),
    Some("cloudflare"),
    Some("gws (Google Web Server)"),
    Some("GitHub.com"),
    Some("AmazonS3"),
    Some("Vercel"),
    Some("Netlify"),
    None,
];

/// Signal source that samples findings instead of probing
pub struct SimulatedSource {
    seed: Option<u64>,
}

impl SimulatedSource {
    /// Source with fresh entropy on every collection
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Deterministic source: identical (seed, target) pairs reproduce the
    /// same findings. Used for reproducible runs and tests.
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    fn rng_for(&self, target: &Target) -> StdRng {
        match self.seed {
            Some(seed) => {
                let mut hasher = DefaultHasher::new();
                target.display().hash(&mut hasher);
                StdRng::seed_from_u64(seed ^ hasher.finish())
            }
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for SimulatedSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SignalSource for SimulatedSource {
    async fn collect(&self, target: &Target) -> Result<SiteFindings> {
        let mut rng = self.rng_for(target);
        let host = target.display();
        let mut signals = Vec::new();

        // Security headers, biased toward the well-known list
        let likely_secure = SECURE_HEADER_DOMAINS.iter().any(|d| host.contains(d));
        let has_x_frame_options = rng.gen_bool(if likely_secure { 0.8 } else { 0.4 });
        let has_csp = rng.gen_bool(if likely_secure { 0.7 } else { 0.3 });
        let has_x_content_type_options = rng.gen_bool(if likely_secure { 0.8 } else { 0.4 });

        signals.push(if has_x_frame_options {
            Signal::new(
                titles::CLICKJACKING_PROTECTION,
                "The website uses X-Frame-Options header to prevent clickjacking attacks.",
                SignalStatus::Good,
                5,
            )
        } else {
            Signal::new(
                titles::CLICKJACKING_PROTECTION,
                "The website might be vulnerable to clickjacking attacks as no \
                 X-Frame-Options header was detected.",
                SignalStatus::Warning,
                4,
            )
        });

        signals.push(if has_csp {
            Signal::new(
                titles::CONTENT_SECURITY_POLICY,
                "The website implements Content Security Policy, reducing the risk \
                 of cross-site scripting attacks.",
                SignalStatus::Good,
                7,
            )
        } else {
            Signal::new(
                titles::CONTENT_SECURITY_POLICY,
                "No Content Security Policy detected, which could expose the site \
                 to cross-site scripting (XSS) attacks.",
                SignalStatus::Warning,
                6,
            )
        });

        signals.push(domain_age_signal(host, &mut rng));

        // SSL posture only applies over HTTPS
        if target.secure_transport() {
            signals.push(ssl_signal(host, &mut rng));
        }

        signals.push(privacy_policy_signal(host, &mut rng));

        let page_title = page_title(target, &mut rng);
        let server = server_banner(host, &mut rng);

        let findings = SiteFindings {
            signals,
            any_security_header: has_x_frame_options || has_csp || has_x_content_type_options,
            page_title,
            server,
        };

        debug!(
            target_host = host,
            signals = findings.signals.len(),
            any_security_header = findings.any_security_header,
            "simulated findings collected"
        );

        Ok(findings)
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}

/// Simulated WHOIS-style age check: established domains skew 10-24 years,
/// everything else 0-9
fn domain_age_signal(host: &str, rng: &mut StdRng) -> Signal {
    let likely_old = ESTABLISHED_DOMAINS.iter().any(|d| host.contains(d));
    let age_years: u32 = if likely_old {
        rng.gen_range(10..25)
    } else {
        rng.gen_range(0..10)
    };

    let (status, description) = if age_years > 5 {
        (
            SignalStatus::Good,
            format!(
                "Domain appears to be established (approximately {age_years} years old), \
                 which is a positive trust indicator."
            ),
        )
    } else if age_years > 1 {
        (
            SignalStatus::Info,
            format!("Domain is relatively new (approximately {age_years} years old)."),
        )
    } else {
        (
            SignalStatus::Warning,
            "Domain appears to be very new (less than a year old). New domains can \
             sometimes be associated with phishing or scam websites."
                .to_string(),
        )
    };

    Signal::new(titles::DOMAIN_AGE, description, status, 4)
}

/// Simulated certificate inspection, biased toward the strong-SSL list
fn ssl_signal(host: &str, rng: &mut StdRng) -> Signal {
    let likely_good = STRONG_SSL_DOMAINS.iter().any(|d| host.contains(d));
    let quality: f64 = rng.gen();

    let (status, description) = if (likely_good && quality > 0.1) || quality > 0.7 {
        (
            SignalStatus::Good,
            "Valid SSL certificate with strong encryption is in place.",
        )
    } else if quality > 0.3 {
        (
            SignalStatus::Warning,
            "SSL certificate is valid but uses outdated encryption methods.",
        )
    } else {
        (
            SignalStatus::Bad,
            "Issues detected with the SSL certificate. It may be expired, \
             self-signed, or invalid.",
        )
    };

    Signal::new(titles::SSL_CERTIFICATE, description, status, 6)
}

/// Simulated crawl for a privacy policy page
fn privacy_policy_signal(host: &str, rng: &mut StdRng) -> Signal {
    let likely_has = PRIVACY_POLICY_DOMAINS.iter().any(|d| host.contains(d));
    let biased: f64 = rng.gen();
    let baseline: f64 = rng.gen();
    let has_policy = (likely_has && biased > 0.1) || baseline > 0.4;

    if has_policy {
        Signal::new(
            titles::PRIVACY_POLICY,
            "Privacy policy detected, which is a good indicator of a legitimate site.",
            SignalStatus::Good,
            3,
        )
    } else {
        Signal::new(
            titles::PRIVACY_POLICY,
            "No obvious privacy policy detected. Legitimate websites typically \
             have clear privacy policies.",
            SignalStatus::Warning,
            3,
        )
    }
}

/// Plausible page title built from the host's first label
fn page_title(target: &Target, rng: &mut StdRng) -> Option<String> {
    let label = target.first_label();
    if label.is_empty() {
        return None;
    }

    let mut chars = label.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => return None,
    };

    let descriptor = if label.len() > 5 { label } else { "Web Services" };
    let short_descriptor = if label.len() > 5 { label } else { "Web" };

    let options = [
        format!("{capitalized} - Official Website"),
        format!("Welcome to {capitalized}"),
        format!("{capitalized} - Home"),
        format!("{capitalized}: Leaders in {descriptor}"),
        format!("{capitalized} | {short_descriptor} Solutions"),
    ];

    let pick = rng.gen_range(0..options.len());
    Some(options[pick].clone())
}

/// Server banner: fixed picks for recognizable hosts, random pool otherwise
fn server_banner(host: &str, rng: &mut StdRng) -> Option<String> {
    if host.contains("google") {
        Some("gws (Google Web Server)".to_string())
    } else if host.contains("github") {
        Some("GitHub.com".to_string())
    } else if host.contains("amazon") || host.contains("aws") {
        Some("AmazonS3".to_string())
    } else if host.contains("microsoft") {
        Some("Microsoft-IIS/10.0".to_string())
    } else {
        let pick = rng.gen_range(0..SERVER_POOL.len());
        SERVER_POOL[pick].map(|s| s.to_string())
    }
}
