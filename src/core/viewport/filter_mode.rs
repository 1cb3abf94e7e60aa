/// The post-processing filter currently applied to rendered frames.
///
/// A closed set: each variant maps to one external image transform, keyed
/// off the digit keys `1`-`6` in the order listed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    None,
    Hue,
    Sharpen,
    Dilate,
    Emboss,
    Erode,
    EdgeDetect,
}

impl FilterMode {
    /// Maps the digit keys `1`-`6` to their filter. Other characters
    /// select nothing.
    #[must_use]
    pub fn from_digit(ch: char) -> Option<Self> {
        match ch {
            '1' => Some(Self::Hue),
            '2' => Some(Self::Sharpen),
            '3' => Some(Self::Dilate),
            '4' => Some(Self::Emboss),
            '5' => Some(Self::Erode),
            '6' => Some(Self::EdgeDetect),
            _ => None,
        }
    }
}
