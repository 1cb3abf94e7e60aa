use crate::core::data::colour::Colour;
use crate::core::ports::theme::ThemeColours;

/// Built-in dark theme supplying the gradient endpoints.
///
/// Indigo primary fading towards white, with a dark grey interior for
/// points inside the set.
#[derive(Debug, Default)]
pub struct DefaultTheme;

impl ThemeColours for DefaultTheme {
    fn primary(&self) -> Colour {
        Colour::opaque(0x1a, 0x23, 0x7e)
    }

    fn background(&self) -> Colour {
        Colour::opaque(0x42, 0x42, 0x42)
    }

    fn text(&self) -> Colour {
        Colour::opaque(0xff, 0xff, 0xff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_colours_are_opaque() {
        let theme = DefaultTheme;

        assert_eq!(theme.primary().a, 0xff);
        assert_eq!(theme.background().a, 0xff);
        assert_eq!(theme.text().a, 0xff);
    }

    #[test]
    fn test_gradient_endpoints_differ() {
        let theme = DefaultTheme;

        assert_ne!(theme.primary(), theme.text());
        assert_ne!(theme.primary(), theme.background());
    }
}
