/// Files read from a single upload. Anything past this is ignored.
pub const MAX_FILES_PER_UPLOAD: usize = 24;

pub const DEFAULT_DARK_THEME: bool = true;

pub const LOGO_PATH: &str = "/logo-blackout-garage.png";

pub const BUSINESS_NAME: &str = "Blackout Garage";
pub const TAGLINE: &str = "Automotive Window Tinting";

pub struct ContactDetails {
    pub phone_display: &'static str,
    pub phone_dial: &'static str,
    pub email: &'static str,
    pub short_address: &'static str,
    pub full_address: &'static str,
    pub hours: &'static str,
}

pub const CONTACT: ContactDetails = ContactDetails {
    phone_display: "(555) 123-4567",
    phone_dial: "5551234567",
    email: "hello@blackoutgarage.com",
    short_address: "1234 Shade Ln, Your City",
    full_address: "1234 Shade Ln, Suite A, Your City, ST",
    hours: "Mon–Sat: 9am–6pm",
};

/// Console log level, set at build time with `BLACKOUT_LOG_LEVEL`.
pub fn get_log_level() -> log::Level {
    parse_log_level(option_env!("BLACKOUT_LOG_LEVEL"))
}

fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|level| level.trim().parse().ok())
        .unwrap_or(log::Level::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_defaults_to_info() {
        assert_eq!(parse_log_level(None), log::Level::Info);
        assert_eq!(parse_log_level(Some("loud")), log::Level::Info);
    }

    #[test]
    fn log_level_parses_case_insensitively() {
        assert_eq!(parse_log_level(Some("debug")), log::Level::Debug);
        assert_eq!(parse_log_level(Some(" WARN ")), log::Level::Warn);
    }
}
