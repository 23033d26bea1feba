//! Static site content shared by the server and the client bundle.

pub const OWNER: &str = "Pradyumn";
pub const SITE_TITLE: &str = "Prady's Portfolio";
pub const EMAIL: &str = "pradyumnsoni@gmail.com";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/pradyumnsoni";
pub const DISPATCH_URL: &str = "https://in.linkedin.com/company/dispatch-network";
pub const RESUME_PATH: &str = "/images/Pradyumn-CV-March-2025.pdf";
pub const PROFILE_ICON_PATH: &str = "/images/pradyumnicon.png";

/// Build timestamp (RFC 3339) captured by `build.rs`.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

pub fn mailto() -> String {
    format!("mailto:{EMAIL}")
}

/// Year used in the footer, falling back to the current year when the build
/// timestamp cannot be parsed.
pub fn copyright_year() -> i32 {
    year_of(BUILD_TIME)
}

fn year_of(timestamp: &str) -> i32 {
    use chrono::{DateTime, Datelike, Utc};

    DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{Datelike, Utc};

    #[test]
    fn test_year_from_build_time() {
        assert_eq!(year_of("2025-03-14T09:26:53+00:00"), 2025);
        assert_eq!(year_of("2019-12-31T23:30:00-05:00"), 2019);
    }

    #[test]
    fn test_unparseable_build_time_uses_current_year() {
        assert_eq!(year_of("not a timestamp"), Utc::now().year());
        assert_eq!(year_of(""), Utc::now().year());
    }

    #[test]
    fn test_build_time_is_rfc3339() {
        assert!(chrono::DateTime::parse_from_rfc3339(BUILD_TIME).is_ok());
    }

    #[test]
    fn test_mailto() {
        assert_eq!(mailto(), format!("mailto:{EMAIL}"));
    }
}
