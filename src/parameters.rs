//! Dimensional input describing a gantry frame.

use serde::{Deserialize, Serialize};

use crate::errors::FrameError;

/// Dimensions and offsets of the target gantry.
///
/// Parameters are plain data: build them once per generation request and never
/// mutate them afterwards. [`FrameParameters::validate`] checks every invariant and
/// runs at the start of each build.
///
/// All lengths share one unit system chosen by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FrameParameters {
    /// Clearance from the ground reference to the underside of the beam at the column line.
    pub clear_height: f64,
    /// Depth added above the clear height to reach the beam's top chord.
    pub beam_extra_height: f64,
    /// Depth of the foundation below the ground reference.
    pub footing_depth: f64,
    /// Rise over run of the beam's top chord.
    pub slope: f64,
    /// Horizontal canopy extension beyond the right column line.
    pub right_cantilever_length: f64,
    /// Horizontal canopy extension beyond the left column line.
    pub left_cantilever_length: f64,
    /// Horizontal offset of the right brace's outer point from the right column.
    pub right_brace_shift: f64,
    /// Horizontal offset of the left brace's outer point from the left column.
    pub left_brace_shift: f64,
    /// Elevation of the brace attach point, measured up from the footing base.
    pub brace_attach_height: f64,
    /// Offset of each column line from the centerline.
    pub column_shift: f64,
}

impl Default for FrameParameters {
    fn default() -> Self {
        Self {
            clear_height: 4.0,
            beam_extra_height: 0.3,
            footing_depth: 0.5,
            slope: 0.0,
            right_cantilever_length: 0.0,
            left_cantilever_length: 0.0,
            right_brace_shift: 0.0,
            left_brace_shift: 0.0,
            brace_attach_height: 2.0,
            column_shift: 3.0,
        }
    }
}

impl FrameParameters {
    /// Parse parameters from a JSON document and validate them.
    ///
    /// Field names follow the camelCase spelling used throughout error messages.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::Config`] when the document is malformed and
    /// [`FrameError::InvalidParameter`] when a value violates its invariant.
    ///
    /// # Examples
    /// ```
    /// use gantryx::FrameParameters;
    ///
    /// let params = FrameParameters::from_json(
    ///     r#"{
    ///         "clearHeight": 4.0, "beamExtraHeight": 0.3, "footingDepth": 0.5,
    ///         "slope": 0.0, "rightCantileverLength": 1.0, "leftCantileverLength": 0.0,
    ///         "rightBraceShift": 0.4, "leftBraceShift": 0.0,
    ///         "braceAttachHeight": 2.0, "columnShift": 3.0
    ///     }"#,
    /// )
    /// .expect("valid document");
    /// assert_eq!(params.right_cantilever_length, 1.0);
    /// ```
    pub fn from_json(document: &str) -> Result<Self, FrameError> {
        let params: Self =
            serde_json::from_str(document).map_err(|error| FrameError::Config(error.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    /// Elevation of the beam's top chord at the column lines.
    #[must_use]
    pub fn column_top_elevation(&self) -> f64 {
        self.clear_height + self.beam_extra_height
    }

    /// Elevation of the footing base, where columns start.
    #[must_use]
    pub fn footing_elevation(&self) -> f64 {
        -self.footing_depth
    }

    /// Elevation at which braces attach to the columns.
    #[must_use]
    pub fn brace_attach_elevation(&self) -> f64 {
        self.footing_elevation() + self.brace_attach_height
    }

    /// Check every field against its invariant.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::InvalidParameter`] naming the first offending field.
    pub fn validate(&self) -> Result<(), FrameError> {
        let non_negative = [
            ("clearHeight", self.clear_height),
            ("beamExtraHeight", self.beam_extra_height),
            ("footingDepth", self.footing_depth),
            ("rightCantileverLength", self.right_cantilever_length),
            ("leftCantileverLength", self.left_cantilever_length),
            ("braceAttachHeight", self.brace_attach_height),
        ];
        let signed = [
            ("slope", self.slope),
            ("rightBraceShift", self.right_brace_shift),
            ("leftBraceShift", self.left_brace_shift),
            ("columnShift", self.column_shift),
        ];

        for &(field, value) in non_negative.iter().chain(signed.iter()) {
            if !value.is_finite() {
                return Err(FrameError::InvalidParameter {
                    field,
                    constraint: "must be finite",
                });
            }
        }
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(FrameError::InvalidParameter {
                    field,
                    constraint: "must be ≥ 0",
                });
            }
        }
        Ok(())
    }
}
