//! Error type for raw color channel validation.

use std::fmt;

/// Error returned when a raw channel list cannot be turned into an [`Rgba`](super::Rgba).
///
/// Raw colors arrive as plain number lists (e.g. from JSON rectangle records),
/// so every way such a list can be malformed has its own variant.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidColorError {
    /// Fewer than 3 channels were provided.
    TooFewChannels {
        /// Number of channels found
        found: usize,
    },
    /// More than 4 channels were provided.
    TooManyChannels {
        /// Number of channels found
        found: usize,
    },
    /// A channel is NaN, infinite, or has a fractional part.
    NotAnInteger {
        /// Zero-based channel index
        channel: usize,
        /// The offending value
        value: f64,
    },
    /// A channel lies outside 0..=255.
    OutOfRange {
        /// Zero-based channel index
        channel: usize,
        /// The offending value
        value: f64,
    },
}

impl fmt::Display for InvalidColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidColorError::TooFewChannels { found } => {
                write!(f, "color needs at least 3 channels, got {}", found)
            }
            InvalidColorError::TooManyChannels { found } => {
                write!(f, "color has at most 4 channels, got {}", found)
            }
            InvalidColorError::NotAnInteger { channel, value } => {
                write!(f, "channel {} is not an integer: {}", channel, value)
            }
            InvalidColorError::OutOfRange { channel, value } => {
                write!(f, "channel {} out of range 0..=255: {}", channel, value)
            }
        }
    }
}

impl std::error::Error for InvalidColorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            InvalidColorError::TooFewChannels { found: 2 }.to_string(),
            "color needs at least 3 channels, got 2"
        );
        assert_eq!(
            InvalidColorError::OutOfRange {
                channel: 1,
                value: 300.0
            }
            .to_string(),
            "channel 1 out of range 0..=255: 300"
        );
        assert_eq!(
            InvalidColorError::NotAnInteger {
                channel: 0,
                value: 1.5
            }
            .to_string(),
            "channel 0 is not an integer: 1.5"
        );
    }
}
