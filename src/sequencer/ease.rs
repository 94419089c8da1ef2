/// Easing curves used by the page's animation units.
///
/// `OutQuad` is the pointer replay's resting ease for fades and presses;
/// `InOutCubic` shapes its glides; scroll scrubbing stays `Linear`. The
/// CSS entrance animations mirror the quart ease-out as
/// `cubic-bezier(0.25, 1, 0.5, 1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    OutQuad,
    InOutCubic,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 3] = [Ease::Linear, Ease::OutQuad, Ease::InOutCubic];

    #[test]
    fn endpoints_are_stable() {
        for ease in ALL {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        for ease in ALL {
            assert_eq!(ease.apply(-3.0), 0.0);
            assert_eq!(ease.apply(7.5), 1.0);
        }
    }

    #[test]
    fn monotonic_spot_check() {
        for ease in ALL {
            let a = ease.apply(0.25);
            let b = ease.apply(0.5);
            let c = ease.apply(0.75);
            assert!(a < b, "{ease:?}");
            assert!(b < c, "{ease:?}");
        }
    }

    #[test]
    fn in_out_cubic_is_cubic_on_both_halves() {
        assert_eq!(Ease::InOutCubic.apply(0.25), 0.0625);
        assert_eq!(Ease::InOutCubic.apply(0.5), 0.5);
        assert_eq!(Ease::InOutCubic.apply(0.75), 0.9375);
    }

    #[test]
    fn lerp_hits_both_ends() {
        assert_eq!(lerp(2.0, 10.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(2.0, 10.0, 0.5), 6.0);
    }
}
