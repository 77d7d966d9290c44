/// Result of searching a window (leftover + freshly read text) for its last
/// word boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitOutcome<'a> {
    /// A boundary was found. `segment` ends just before the last space and is
    /// ready for counting; `leftover` is everything after that space and must
    /// be carried into the next window.
    Complete {
        /// Text up to (excluding) the last space.
        segment: &'a str,
        /// Text after the last space, possibly a word prefix.
        leftover: &'a str,
    },
    /// No space anywhere in the window. The whole window becomes the new
    /// leftover; this is how a single word longer than the read buffer
    /// accumulates across fills until a boundary finally appears.
    NoBoundary {
        /// The entire window, carried forward unchanged.
        leftover: &'a str,
    },
}

/// Splits `window` at its last space character.
///
/// The leftover is an explicit value the caller threads from one buffer fill
/// to the next; there is no hidden cursor state. Rejoining `segment`, a
/// space, and `leftover` always reproduces `window` exactly, which is what
/// keeps the streaming reader loss-free across fills.
pub fn split_at_last_space(window: &str) -> SplitOutcome<'_> {
    match window.rfind(' ') {
        Some(idx) => SplitOutcome::Complete {
            segment: &window[..idx],
            leftover: &window[idx + 1..],
        },
        None => SplitOutcome::NoBoundary { leftover: window },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_is_lossless() {
        let window = "alpha beta gam";
        match split_at_last_space(window) {
            SplitOutcome::Complete { segment, leftover } => {
                assert_eq!(segment, "alpha beta");
                assert_eq!(leftover, "gam");
                assert_eq!(format!("{segment} {leftover}"), window);
            }
            other => panic!("expected a boundary, got {other:?}"),
        }
    }

    #[test]
    fn window_without_space_is_all_leftover() {
        assert_eq!(
            split_at_last_space("unbroken"),
            SplitOutcome::NoBoundary {
                leftover: "unbroken"
            }
        );
    }

    #[test]
    fn trailing_space_leaves_empty_leftover() {
        assert_eq!(
            split_at_last_space("alpha "),
            SplitOutcome::Complete {
                segment: "alpha",
                leftover: ""
            }
        );
    }
}
