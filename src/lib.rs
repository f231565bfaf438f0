#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

mod builder;
mod canopy;
mod director;
mod errors;
mod frame;
mod geometry;
mod member;
mod parameters;

pub use builder::{FrameAccumulator, FrameBuilder};
pub use canopy::{CanopyFrameBuilder, SingleCanopyFrameBuilder, UnbracedFrameBuilder};
pub use director::FrameDirector;
pub use errors::{BuildStep, FrameError, GeometryWarning};
pub use frame::{Frame, FrameTopology};
pub use geometry::{point, Point};
pub use member::{Member, MemberId, MemberRole, SectionAssignment, Side};
pub use parameters::FrameParameters;

/// Generate a double-canopy frame with the default [`CanopyFrameBuilder`].
///
/// # Errors
///
/// Returns [`FrameError::InvalidParameter`] when `params` violate an invariant.
///
/// # Examples
/// ```
/// use gantryx::{generate, FrameParameters, MemberRole, Side};
///
/// let frame = generate(&FrameParameters {
///     right_cantilever_length: 1.0,
///     ..FrameParameters::default()
/// })?;
/// let canopy = frame
///     .member(MemberRole::Cantilever, Side::Right)
///     .expect("right canopy present");
/// assert_eq!(canopy.end().x, 4.0);
/// # Ok::<(), gantryx::FrameError>(())
/// ```
pub fn generate(params: &FrameParameters) -> Result<Frame, FrameError> {
    FrameDirector::new().generate(params, &mut CanopyFrameBuilder::new())
}
