//! Error and warning types produced while generating frame geometry.

use thiserror::Error;

use crate::member::Side;

/// Error returned when a frame cannot be generated.
///
/// Every variant is fatal to the current generation attempt. Because generation is
/// pure, retrying with the same input reproduces the same error.
///
/// # Examples
///
/// ```
/// use gantryx::{FrameError, FrameParameters};
///
/// let params = FrameParameters {
///     clear_height: -1.0,
///     ..FrameParameters::default()
/// };
/// let error = params.validate().expect_err("negative height is rejected");
/// assert_eq!(
///     error,
///     FrameError::InvalidParameter {
///         field: "clearHeight",
///         constraint: "must be ≥ 0",
///     }
/// );
/// assert_eq!(error.to_string(), "clearHeight must be ≥ 0");
/// ```
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FrameError {
    /// Returned when a [`FrameParameters`](crate::FrameParameters) field violates its invariant.
    #[error("{field} {constraint}")]
    InvalidParameter {
        /// Name of the offending field as it appears in serialized parameters.
        field: &'static str,
        /// The constraint the value failed to satisfy.
        constraint: &'static str,
    },
    /// Returned when a builder step runs before its prerequisites exist.
    #[error("{step} called out of sequence: {reason}")]
    OutOfSequence {
        /// The builder step that was rejected.
        step: BuildStep,
        /// Why the step cannot run in the current state.
        reason: &'static str,
    },
    /// Returned when serialized parameters cannot be parsed.
    #[error("invalid frame parameters document: {0}")]
    Config(String),
    /// Returned when a generated frame cannot be serialized for export.
    #[error("frame export failed: {0}")]
    Export(String),
}

/// Identifies one construction step of a [`FrameBuilder`](crate::FrameBuilder).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuildStep {
    /// [`FrameBuilder::build_columns`](crate::FrameBuilder::build_columns).
    BuildColumns,
    /// [`FrameBuilder::build_beam`](crate::FrameBuilder::build_beam).
    BuildBeam,
    /// [`FrameBuilder::apply_bracing`](crate::FrameBuilder::apply_bracing).
    ApplyBracing,
}

impl std::fmt::Display for BuildStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BuildStep::BuildColumns => "build_columns",
            BuildStep::BuildBeam => "build_beam",
            BuildStep::ApplyBracing => "apply_bracing",
        };
        f.write_str(name)
    }
}

/// Non-fatal report about degenerate but constructible geometry.
///
/// Structural feasibility is not the generator's concern, so these never stop a
/// build. They travel alongside the result in [`Frame::warnings`](crate::Frame::warnings).
#[derive(Clone, Copy, Debug, Error, PartialEq, serde::Serialize)]
pub enum GeometryWarning {
    /// A cantilever's outer point lies below the footing reference.
    #[error("{side:?} cantilever tip at elevation {elevation} lies below the footing at {footing}")]
    CantileverBelowFooting {
        /// Side of the offending cantilever.
        side: Side,
        /// Elevation of the cantilever's outer point.
        elevation: f64,
        /// Footing reference elevation (`-footingDepth`).
        footing: f64,
    },
    /// Both column lines coincide, so the beam has zero length.
    #[error("columns share one centerline; the beam has zero span")]
    ZeroSpan,
    /// A brace attaches to its column above the column top.
    #[error("{side:?} brace attaches at elevation {attach}, above the column top at {top}")]
    BraceAboveColumnTop {
        /// Side of the offending brace.
        side: Side,
        /// Elevation of the brace attach point on the column.
        attach: f64,
        /// Elevation of the column top.
        top: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_sequence_names_the_step() {
        let error = FrameError::OutOfSequence {
            step: BuildStep::BuildBeam,
            reason: "columns have not been built",
        };
        assert_eq!(
            error.to_string(),
            "build_beam called out of sequence: columns have not been built"
        );
    }

    #[test]
    fn export_failure_carries_the_serializer_message() {
        let error = FrameError::Export("key must be a string".to_string());
        assert_eq!(error.to_string(), "frame export failed: key must be a string");
        assert_ne!(error, FrameError::Config("key must be a string".to_string()));
    }

    #[test]
    fn warnings_format_their_side() {
        let warning = GeometryWarning::CantileverBelowFooting {
            side: Side::Left,
            elevation: -2.0,
            footing: -0.5,
        };
        assert!(warning.to_string().starts_with("Left cantilever tip"));
    }
}
