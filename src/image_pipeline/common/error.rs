use std::path::PathBuf;

use thiserror::Error;

/// Raster dimensions as `(height, width)`, the order the band stacker reports them in.
pub type Shape = (usize, usize);

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode raster: {0}")]
    DecodeError(String),

    #[error("Failed to encode image: {0}")]
    EncodeError(String),

    #[error(
        "Input bands do not share the same dimensions: red={red:?}, green={green:?}, blue={blue:?} (height, width)"
    )]
    DimensionMismatch {
        red: Shape,
        green: Shape,
        blue: Shape,
    },

    #[error("Input bands do not share a sample type: red={red}, green={green}, blue={blue}")]
    BandTypeMismatch {
        red: &'static str,
        green: &'static str,
        blue: &'static str,
    },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("{count} token(s) could not be decoded as 12-bit hex colors")]
    MalformedTokens { count: usize },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConversionError {
    /// Process exit code a command-line front end should report for this error.
    ///
    /// Code 2 is left to argument parsing, which is what `clap` exits with on
    /// usage errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            ConversionError::InputNotFound(_) => 3,
            ConversionError::DimensionMismatch { .. } | ConversionError::BandTypeMismatch { .. } => 4,
            ConversionError::InvalidParameter(_)
            | ConversionError::InvalidDimensions(..)
            | ConversionError::MalformedTokens { .. } => 5,
            ConversionError::InputReadError(_)
            | ConversionError::OutputWriteError(_)
            | ConversionError::IoError(_) => 6,
            ConversionError::DecodeError(_)
            | ConversionError::EncodeError(_)
            | ConversionError::UnsupportedFormat(_) => 7,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_reports_all_shapes() {
        let err = ConversionError::DimensionMismatch {
            red: (10, 10),
            green: (10, 11),
            blue: (10, 10),
        };
        let message = err.to_string();
        assert!(message.contains("red=(10, 10)"));
        assert!(message.contains("green=(10, 11)"));
        assert!(message.contains("blue=(10, 10)"));
    }

    #[test]
    fn test_exit_codes_distinguish_failure_kinds() {
        assert_eq!(ConversionError::InputNotFound(PathBuf::from("a.tif")).exit_code(), 3);
        assert_eq!(
            ConversionError::BandTypeMismatch { red: "u8", green: "u16", blue: "u8" }.exit_code(),
            4
        );
        assert_eq!(ConversionError::InvalidParameter("x".into()).exit_code(), 5);
        assert_eq!(ConversionError::EncodeError("x".into()).exit_code(), 7);
        let io = std::io::Error::other("disk full");
        assert_eq!(ConversionError::from(io).exit_code(), 6);
    }

    #[test]
    fn test_exit_codes_leave_usage_code_to_argument_parsing() {
        let errors = [
            ConversionError::InputNotFound(PathBuf::from("a.tif")),
            ConversionError::InputReadError("x".into()),
            ConversionError::OutputWriteError("x".into()),
            ConversionError::DecodeError("x".into()),
            ConversionError::EncodeError("x".into()),
            ConversionError::DimensionMismatch { red: (1, 1), green: (1, 2), blue: (1, 1) },
            ConversionError::BandTypeMismatch { red: "u8", green: "u16", blue: "u8" },
            ConversionError::InvalidParameter("x".into()),
            ConversionError::InvalidDimensions(0, 0),
            ConversionError::MalformedTokens { count: 1 },
            ConversionError::UnsupportedFormat("x".into()),
            ConversionError::from(std::io::Error::other("x")),
        ];
        for err in errors {
            assert!(err.exit_code() > 2, "{err} exits with {}", err.exit_code());
        }
    }
}
