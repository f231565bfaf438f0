//! Fixed construction sequence over any [`FrameBuilder`].

use tracing::{debug, info_span};

use crate::builder::FrameBuilder;
use crate::errors::FrameError;
use crate::frame::Frame;
use crate::parameters::FrameParameters;

/// Runs the construction steps of a [`FrameBuilder`] in their fixed order.
///
/// The director holds no state, so one instance can serve any number of requests,
/// including concurrent ones, as long as each request brings its own builder.
///
/// # Examples
/// ```
/// use gantryx::{FrameDirector, FrameParameters, UnbracedFrameBuilder};
///
/// let params = FrameParameters {
///     right_brace_shift: 0.4,
///     ..FrameParameters::default()
/// };
/// let frame = FrameDirector::new().generate(&params, &mut UnbracedFrameBuilder::new())?;
/// assert_eq!(frame.member_count(), 3);
/// # Ok::<(), gantryx::FrameError>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameDirector;

impl FrameDirector {
    /// Create a director.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Reset `builder`, run every construction step and collect the result.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::InvalidParameter`] before any member is built when
    /// `params` are invalid, and propagates any [`FrameError::OutOfSequence`]
    /// raised by the builder.
    pub fn generate(
        &self,
        params: &FrameParameters,
        builder: &mut dyn FrameBuilder,
    ) -> Result<Frame, FrameError> {
        let span = info_span!("generate_frame");
        let _guard = span.enter();

        params.validate()?;
        builder.reset();
        builder.build_columns(params)?;
        builder.build_beam(params)?;
        builder.apply_bracing(params)?;

        let warnings = builder.warnings().to_vec();
        let members = builder.get_members().to_vec();
        debug!(
            members = members.len(),
            warnings = warnings.len(),
            "frame generated"
        );
        Ok(Frame::new(members, warnings))
    }
}
