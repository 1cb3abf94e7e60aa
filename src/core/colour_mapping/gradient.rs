use crate::core::data::colour::Colour;
use crate::core::data::sample::PixelSample;
use crate::core::ports::theme::ThemeColours;
use std::f64::consts::PI;

/// The three theme colours the gradient is built from.
///
/// Escaping points blend from `gradient_start` towards `gradient_end`;
/// points that never escape get `interior` directly.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ColourEndpoints {
    pub gradient_start: Colour,
    pub gradient_end: Colour,
    pub interior: Colour,
}

impl ColourEndpoints {
    /// Snapshots the host theme for one render pass: primary → text as
    /// the gradient, background for the interior.
    #[must_use]
    pub fn from_theme<T: ThemeColours + ?Sized>(theme: &T) -> Self {
        Self {
            gradient_start: theme.primary(),
            gradient_end: theme.text(),
            interior: theme.background(),
        }
    }
}

/// Maps one kernel sample to its display colour.
///
/// Non-escaping points get the interior colour, alpha forced opaque.
/// Escaping points blend on `sin((mu/2)·π)` of the normalised iteration
/// count, which spreads the interior-adjacent bands relative to the
/// exterior ones.
#[must_use]
pub fn map_sample(sample: PixelSample, max_iterations: u32, endpoints: &ColourEndpoints) -> Colour {
    if !sample.escaped {
        return Colour::opaque(endpoints.interior.r, endpoints.interior.g, endpoints.interior.b);
    }

    let mu = f64::from(sample.iterations) / f64::from(max_iterations);
    let blend = ((mu / 2.0) * PI).sin();

    Colour::opaque(
        blend_channel(blend, u32::from(endpoints.gradient_start.r), u32::from(endpoints.gradient_end.r)),
        blend_channel(blend, u32::from(endpoints.gradient_start.g), u32::from(endpoints.gradient_end.g)),
        blend_channel(blend, u32::from(endpoints.gradient_start.b), u32::from(endpoints.gradient_end.b)),
    )
}

/// Directional per-channel blend.
///
/// Rising channels interpolate up from `start`, falling channels down
/// from `end`, and the channel delta is truncated to its low byte before
/// scaling. The truncation and the wrapping adds match the long-standing
/// output of this renderer; the gradient is deliberately approximate, so
/// any change here shifts every rendered frame.
fn blend_channel(blend: f64, start: u32, end: u32) -> u8 {
    if end >= start {
        ((blend * f64::from((end - start) as u8)) as u8).wrapping_add(start as u8)
    } else {
        (((1.0 - blend) * f64::from((start - end) as u8)) as u8).wrapping_add(end as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_endpoints() -> ColourEndpoints {
        ColourEndpoints {
            gradient_start: Colour::opaque(0, 0, 0),
            gradient_end: Colour::opaque(255, 255, 255),
            interior: Colour::opaque(40, 40, 40),
        }
    }

    #[test]
    fn test_non_escaping_sample_gets_interior_colour() {
        let sample = PixelSample {
            iterations: 100,
            escaped: false,
        };

        let colour = map_sample(sample, 100, &test_endpoints());

        assert_eq!(colour, Colour::opaque(40, 40, 40));
        assert_eq!(colour.a, 0xff);
    }

    #[test]
    fn test_interior_alpha_is_forced_opaque() {
        let mut endpoints = test_endpoints();
        endpoints.interior.a = 0;
        let sample = PixelSample {
            iterations: 50,
            escaped: false,
        };

        let colour = map_sample(sample, 50, &endpoints);

        assert_eq!(colour.a, 0xff);
    }

    #[test]
    fn test_zero_iterations_maps_to_gradient_start() {
        let sample = PixelSample {
            iterations: 0,
            escaped: true,
        };

        let colour = map_sample(sample, 100, &test_endpoints());

        assert_eq!(colour, Colour::opaque(0, 0, 0));
    }

    #[test]
    fn test_half_budget_uses_eased_blend() {
        // mu = 0.5, sin(0.25π) ≈ 0.7071, times 255 truncates to 180.
        let sample = PixelSample {
            iterations: 50,
            escaped: true,
        };

        let colour = map_sample(sample, 100, &test_endpoints());

        assert_eq!(colour, Colour::opaque(180, 180, 180));
    }

    #[test]
    fn test_blend_channel_rising() {
        assert_eq!(blend_channel(0.0, 10, 20), 10);
        assert_eq!(blend_channel(0.5, 10, 20), 15);
        assert_eq!(blend_channel(1.0, 10, 20), 20);
    }

    #[test]
    fn test_blend_channel_falling_interpolates_from_end() {
        assert_eq!(blend_channel(0.0, 20, 10), 20);
        assert_eq!(blend_channel(0.5, 20, 10), 15);
        assert_eq!(blend_channel(1.0, 20, 10), 10);
    }

    #[test]
    fn test_blend_channel_truncates_delta_to_low_byte() {
        // Delta 0x1FF truncates to 0xFF before scaling.
        assert_eq!(blend_channel(1.0, 0, 0x1FF), 0xFF);
        // Delta 0x100 truncates to zero: the blend collapses to start.
        assert_eq!(blend_channel(0.5, 0, 0x100), 0);
    }

    #[test]
    fn test_escaping_colour_differs_per_band() {
        let endpoints = test_endpoints();
        let early = map_sample(
            PixelSample {
                iterations: 10,
                escaped: true,
            },
            100,
            &endpoints,
        );
        let late = map_sample(
            PixelSample {
                iterations: 90,
                escaped: true,
            },
            100,
            &endpoints,
        );

        assert_ne!(early, late);
    }
}
