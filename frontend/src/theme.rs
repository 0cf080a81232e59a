/// Which of the two page palettes is active. Lives for the page session only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark { Theme::Dark } else { Theme::Light }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Class applied to the page root.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::from_dark(crate::config::DEFAULT_DARK_THEME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert!(Theme::default().is_dark());
    }

    #[test]
    fn toggling_twice_restores() {
        let start = Theme::default();
        assert_eq!(start.toggled().toggled(), start);
    }

    #[test]
    fn odd_toggles_flip() {
        let mut theme = Theme::default();
        for _ in 0..5 {
            theme = theme.toggled();
        }
        assert_eq!(theme, Theme::Light);
        assert_eq!(theme.class(), "light");
    }
}
