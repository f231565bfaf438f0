//! The frame builder capability and the accumulator its implementations share.

use tracing::{debug, warn};

use crate::errors::{BuildStep, FrameError, GeometryWarning};
use crate::geometry::Point;
use crate::member::{Member, MemberId, MemberRole, Side};
use crate::parameters::FrameParameters;

/// Discrete construction steps for one frame layout.
///
/// Implementations decide *how* geometry is derived. The order in which steps run
/// is fixed by [`FrameDirector`](crate::FrameDirector), so implementations only
/// check that a step's prerequisites exist and never sequence steps themselves.
///
/// A builder owns its accumulated members exclusively and performs no internal
/// locking: give each generation request its own instance.
pub trait FrameBuilder {
    /// Clear all accumulated members, warnings and stored parameters.
    fn reset(&mut self);

    /// Append the left and right columns.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::InvalidParameter`] when `params` fail validation and
    /// [`FrameError::OutOfSequence`] unless the builder was freshly reset.
    fn build_columns(&mut self, params: &FrameParameters) -> Result<(), FrameError>;

    /// Append the main beam and any cantilevers.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::OutOfSequence`] when the columns are missing or the
    /// beam step already ran.
    fn build_beam(&mut self, params: &FrameParameters) -> Result<(), FrameError>;

    /// Append the diagonal braces.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::OutOfSequence`] when the columns are missing or the
    /// bracing step already ran.
    fn apply_bracing(&mut self, params: &FrameParameters) -> Result<(), FrameError>;

    /// Return the accumulated members in append order.
    ///
    /// Further construction is rejected until the next [`reset`](Self::reset).
    fn get_members(&mut self) -> &[Member];

    /// Non-fatal warnings raised while building.
    fn warnings(&self) -> &[GeometryWarning];
}

/// Append-only member store shared by the builder implementations.
///
/// Tracks which construction steps have run so every step can reject calls whose
/// prerequisites are missing before anything is appended.
#[derive(Clone, Debug, Default)]
pub struct FrameAccumulator {
    /// Members in append order.
    members: Vec<Member>,
    /// Degenerate geometry noticed so far.
    warnings: Vec<GeometryWarning>,
    /// Parameters seen by the column step.
    params: Option<FrameParameters>,
    /// Whether the columns exist.
    columns: bool,
    /// Whether the beam step ran.
    beam: bool,
    /// Whether the bracing step ran.
    bracing: bool,
    /// Whether the members were handed out.
    sealed: bool,
}

impl FrameAccumulator {
    /// Create an empty accumulator, ready for [`start_columns`](Self::start_columns).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard everything accumulated so far.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Members appended so far.
    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Warnings raised so far.
    #[must_use]
    pub fn warnings(&self) -> &[GeometryWarning] {
        &self.warnings
    }

    /// Parameters recorded by the column step, if it ran.
    #[must_use]
    pub fn parameters(&self) -> Option<&FrameParameters> {
        self.params.as_ref()
    }

    /// Mark the accumulator as handed out and return its members.
    pub fn seal(&mut self) -> &[Member] {
        self.sealed = true;
        &self.members
    }

    /// Check that the column step may run, validate `params` and record them.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::OutOfSequence`] unless the accumulator is fresh and
    /// [`FrameError::InvalidParameter`] when `params` are invalid.
    pub fn start_columns(&mut self, params: &FrameParameters) -> Result<(), FrameError> {
        let step = BuildStep::BuildColumns;
        self.check_open(step)?;
        if self.columns || !self.members.is_empty() {
            return Err(FrameError::OutOfSequence {
                step,
                reason: "columns already built; reset the builder first",
            });
        }
        params.validate()?;
        self.params = Some(*params);
        self.columns = true;
        Ok(())
    }

    /// Check that the beam step may run and mark it as started.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::OutOfSequence`] when the columns are missing, the beam
    /// step already ran or bracing was already applied.
    pub fn start_beam(&mut self) -> Result<(), FrameError> {
        let step = BuildStep::BuildBeam;
        self.check_open(step)?;
        self.check_columns(step)?;
        if self.beam {
            return Err(FrameError::OutOfSequence {
                step,
                reason: "beam already built",
            });
        }
        if self.bracing {
            return Err(FrameError::OutOfSequence {
                step,
                reason: "bracing already applied",
            });
        }
        self.beam = true;
        Ok(())
    }

    /// Check that the bracing step may run and mark it as started.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::OutOfSequence`] when the columns are missing or the
    /// bracing step already ran.
    pub fn start_bracing(&mut self) -> Result<(), FrameError> {
        let step = BuildStep::ApplyBracing;
        self.check_open(step)?;
        self.check_columns(step)?;
        if self.bracing {
            return Err(FrameError::OutOfSequence {
                step,
                reason: "bracing already applied",
            });
        }
        self.bracing = true;
        Ok(())
    }

    /// Return the column on `side`, if it has been built.
    #[must_use]
    pub fn column(&self, side: Side) -> Option<&Member> {
        self.members
            .iter()
            .find(|member| member.role() == MemberRole::Column && member.side() == side)
    }

    /// Append a member and return its identity.
    pub fn push(&mut self, role: MemberRole, side: Side, start: Point, end: Point) -> MemberId {
        let id = MemberId(self.members.len());
        debug!(id = id.index(), ?role, ?side, ?start, ?end, "appending member");
        self.members.push(Member::new(id, role, side, start, end));
        id
    }

    /// Record a non-fatal geometry warning.
    pub fn warn(&mut self, warning: GeometryWarning) {
        warn!(%warning, "degenerate frame geometry");
        self.warnings.push(warning);
    }

    /// Reject steps after the members were handed out.
    fn check_open(&self, step: BuildStep) -> Result<(), FrameError> {
        if self.sealed {
            return Err(FrameError::OutOfSequence {
                step,
                reason: "members already retrieved; reset the builder first",
            });
        }
        Ok(())
    }

    /// Reject steps that need both columns.
    fn check_columns(&self, step: BuildStep) -> Result<(), FrameError> {
        if self.column(Side::Left).is_none() || self.column(Side::Right).is_none() {
            return Err(FrameError::OutOfSequence {
                step,
                reason: "columns have not been built",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point;

    #[test]
    fn identities_follow_append_order() {
        let mut accumulator = FrameAccumulator::new();
        let first = accumulator.push(
            MemberRole::Column,
            Side::Left,
            point(-1.0, 0.0),
            point(-1.0, 2.0),
        );
        let second = accumulator.push(
            MemberRole::Column,
            Side::Right,
            point(1.0, 0.0),
            point(1.0, 2.0),
        );
        assert_eq!(first, MemberId(0));
        assert_eq!(second, MemberId(1));
        assert!(accumulator.column(Side::Right).is_some());
    }

    #[test]
    fn beam_requires_columns() {
        let mut accumulator = FrameAccumulator::new();
        let error = accumulator.start_beam().expect_err("no columns yet");
        assert_eq!(
            error,
            FrameError::OutOfSequence {
                step: BuildStep::BuildBeam,
                reason: "columns have not been built",
            }
        );
    }

    #[test]
    fn invalid_parameters_are_not_recorded() {
        let mut accumulator = FrameAccumulator::new();
        let params = FrameParameters {
            clear_height: -1.0,
            ..FrameParameters::default()
        };
        assert!(accumulator.start_columns(&params).is_err());
        assert!(accumulator.parameters().is_none());
        accumulator
            .start_columns(&FrameParameters::default())
            .expect("valid parameters accepted after a rejected attempt");
    }

    #[test]
    fn sealing_blocks_every_step_until_reset() {
        let mut accumulator = FrameAccumulator::new();
        accumulator.seal();
        assert!(matches!(
            accumulator.start_columns(&FrameParameters::default()),
            Err(FrameError::OutOfSequence {
                step: BuildStep::BuildColumns,
                ..
            })
        ));
        accumulator.reset();
        accumulator
            .start_columns(&FrameParameters::default())
            .expect("reset reopens the accumulator");
    }
}
