use crate::core::data::colour::Colour;

/// Port to the host theme the gradient endpoints are read from.
///
/// The renderer snapshots these once per pass; implementations should be
/// cheap lookups.
pub trait ThemeColours {
    /// Gradient start for escaping points.
    fn primary(&self) -> Colour;

    /// Colour of points inside (or near) the set.
    fn background(&self) -> Colour;

    /// Gradient end for escaping points.
    fn text(&self) -> Colour;
}
