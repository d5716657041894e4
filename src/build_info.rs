//! Compile-time build information, shown in the simulator banner.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Version line for the CLI banner, e.g. `cardsim 0.1.0 (abc1234, 2026-10-18)`.
pub fn version_line() -> String {
    format!(
        "cardsim {} ({}, {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_COMMIT,
        BUILD_DATE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_not_empty() {
        assert!(!BUILD_COMMIT.is_empty());
        assert!(!BUILD_DATE.is_empty());
    }

    #[test]
    fn test_version_line_mentions_commit() {
        let line = version_line();
        assert!(line.starts_with("cardsim "));
        assert!(line.contains(BUILD_COMMIT));
    }
}
