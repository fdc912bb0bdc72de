use reqwest::Url;
use serde::Serialize;
use tracing::debug;

/// Options an embedding page passes through the launch URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LaunchOptions {
    /// Suppress banner and footer output.
    pub embed: bool,
    /// Forwarded to the scoring service as `impact_basis`. Always finite.
    pub impact_basis: Option<f64>,
}

impl LaunchOptions {
    /// Accepts a bare query (`embed=1&basis=2.5`, leading `?` optional) or a full URL.
    pub fn from_query(query: &str) -> Self {
        let query = query.trim();
        let parsed = if query.contains("://") {
            Url::parse(query)
        } else {
            Url::parse(&format!("http://localhost/?{}", query.trim_start_matches('?')))
        };

        let mut opts = Self::default();
        let Ok(url) = parsed else {
            debug!("Ignoring unparseable launch query '{}'", query);
            return opts;
        };

        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "embed" => opts.embed = is_truthy(&value),
                "basis" => opts.impact_basis = parse_basis(&value),
                _ => {}
            }
        }
        opts
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "1" | "true" | "yes"
    )
}

/// `Some` only for text that parses to a finite number.
pub fn parse_basis(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_and_basis() {
        let opts = LaunchOptions::from_query("?embed=1&basis=1.25");
        assert!(opts.embed);
        assert_eq!(opts.impact_basis, Some(1.25));
    }

    #[test]
    fn test_bare_embed_flag() {
        assert!(LaunchOptions::from_query("embed").embed);
        assert!(!LaunchOptions::from_query("embed=0").embed);
    }

    #[test]
    fn test_non_finite_basis_is_dropped() {
        assert_eq!(LaunchOptions::from_query("basis=NaN").impact_basis, None);
        assert_eq!(LaunchOptions::from_query("basis=inf").impact_basis, None);
        assert_eq!(LaunchOptions::from_query("basis=abc").impact_basis, None);
    }

    #[test]
    fn test_full_url() {
        let opts = LaunchOptions::from_query("https://fpi.example.com/?basis=300&embed=true");
        assert!(opts.embed);
        assert_eq!(opts.impact_basis, Some(300.0));
    }
}
