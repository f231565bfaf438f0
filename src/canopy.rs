//! Concrete builders for double-canopy gantry layouts.
//!
//! Elevations follow one convention throughout: columns run from the footing base
//! at `-footingDepth` up to the beam's top chord at `clearHeight + beamExtraHeight`.
//! The beam starts at the left column top and rises by `slope` per unit of
//! horizontal run, and each cantilever continues that line outward from the beam
//! end on its side. "Outward" always points away from the other column, so a
//! negative column shift that swaps the column lines keeps canopies and braces
//! outside the span.

use tracing::debug;

use crate::builder::{FrameAccumulator, FrameBuilder};
use crate::errors::{BuildStep, FrameError, GeometryWarning};
use crate::geometry::{point, Point};
use crate::member::{Member, MemberRole, Side};
use crate::parameters::FrameParameters;

/// Which cantilevers a layout is allowed to emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CantileverSides {
    /// Emit the left cantilever when its length is positive.
    left: bool,
    /// Emit the right cantilever when its length is positive.
    right: bool,
}

impl CantileverSides {
    /// Both canopies enabled.
    const BOTH: Self = Self {
        left: true,
        right: true,
    };

    /// Only the canopy on `side` enabled.
    fn only(side: Side) -> Self {
        Self {
            left: side == Side::Left,
            right: side == Side::Right,
        }
    }
}

/// Append the left and right columns.
fn place_columns(
    accumulator: &mut FrameAccumulator,
    params: &FrameParameters,
) -> Result<(), FrameError> {
    accumulator.start_columns(params)?;
    let base = params.footing_elevation();
    let top = params.column_top_elevation();
    for side in [Side::Left, Side::Right] {
        let x = side.outward() * params.column_shift;
        accumulator.push(MemberRole::Column, side, point(x, base), point(x, top));
    }
    debug!(base, top, shift = params.column_shift, "columns placed");
    Ok(())
}

/// Sign of the horizontal direction pointing away from the other column.
///
/// Falls back to the side's nominal direction when both columns share a line.
fn outward_sign(side: Side, own_x: f64, other_x: f64) -> f64 {
    let offset = own_x - other_x;
    if offset == 0.0 {
        side.outward()
    } else {
        offset.signum()
    }
}

/// Column top points as `(left, right)`.
fn column_tops(accumulator: &FrameAccumulator) -> Option<(Point, Point)> {
    let left = accumulator.column(Side::Left)?.end();
    let right = accumulator.column(Side::Right)?.end();
    Some((left, right))
}

/// Append the main beam and the enabled cantilevers.
fn place_beam(
    accumulator: &mut FrameAccumulator,
    params: &FrameParameters,
    sides: CantileverSides,
) -> Result<(), FrameError> {
    accumulator.start_beam()?;
    let (left_top, right_top) =
        column_tops(accumulator).ok_or(FrameError::OutOfSequence {
            step: BuildStep::BuildBeam,
            reason: "columns have not been built",
        })?;

    let span = right_top.x - left_top.x;
    if span == 0.0 {
        accumulator.warn(GeometryWarning::ZeroSpan);
    }
    let beam_left = left_top;
    let beam_right = point(right_top.x, left_top.y + params.slope * span);
    accumulator.push(MemberRole::Beam, Side::None, beam_left, beam_right);
    debug!(span, rise = beam_right.y - beam_left.y, "beam placed");

    let footing = params.footing_elevation();
    let cantilevers = [
        (
            Side::Left,
            sides.left,
            params.left_cantilever_length,
            beam_left,
            beam_right.x,
        ),
        (
            Side::Right,
            sides.right,
            params.right_cantilever_length,
            beam_right,
            beam_left.x,
        ),
    ];
    for (side, enabled, length, root, other_x) in cantilevers {
        if !enabled || length <= 0.0 {
            continue;
        }
        let run = outward_sign(side, root.x, other_x) * length;
        let tip = point(root.x + run, root.y + params.slope * run);
        if tip.y < footing {
            accumulator.warn(GeometryWarning::CantileverBelowFooting {
                side,
                elevation: tip.y,
                footing,
            });
        }
        accumulator.push(MemberRole::Cantilever, side, root, tip);
    }
    Ok(())
}

/// Append one brace per side with a non-zero brace shift.
fn place_bracing(
    accumulator: &mut FrameAccumulator,
    params: &FrameParameters,
) -> Result<(), FrameError> {
    accumulator.start_bracing()?;
    let attach_elevation = params.brace_attach_elevation();
    let (left_top, right_top) =
        column_tops(accumulator).ok_or(FrameError::OutOfSequence {
            step: BuildStep::ApplyBracing,
            reason: "columns have not been built",
        })?;
    let braces = [
        (Side::Left, params.left_brace_shift, left_top, right_top.x),
        (Side::Right, params.right_brace_shift, right_top, left_top.x),
    ];
    for (side, shift, column_top, other_x) in braces {
        if shift == 0.0 {
            continue;
        }
        let x = column_top.x;
        let top = column_top.y;
        let attach = point(x, attach_elevation);
        let outer = point(x + outward_sign(side, x, other_x) * shift, top);
        if attach.y > top {
            accumulator.warn(GeometryWarning::BraceAboveColumnTop {
                side,
                attach: attach.y,
                top,
            });
        }
        accumulator.push(MemberRole::Brace, side, attach, outer);
    }
    Ok(())
}

/// Double-canopy gantry with independent left and right canopies.
///
/// Symmetric inputs produce a frame mirrored about the centerline; asymmetric
/// cantilever lengths, brace shifts or a non-zero slope are honoured as given.
///
/// # Examples
/// ```
/// use gantryx::{CanopyFrameBuilder, FrameBuilder, FrameParameters, MemberRole};
///
/// let params = FrameParameters {
///     left_cantilever_length: 1.5,
///     right_cantilever_length: 1.5,
///     ..FrameParameters::default()
/// };
/// let mut builder = CanopyFrameBuilder::new();
/// builder.build_columns(&params)?;
/// builder.build_beam(&params)?;
/// builder.apply_bracing(&params)?;
/// let members = builder.get_members();
/// assert_eq!(members.len(), 5);
/// assert_eq!(members[4].role(), MemberRole::Cantilever);
/// # Ok::<(), gantryx::FrameError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct CanopyFrameBuilder {
    /// Members built so far.
    accumulator: FrameAccumulator,
}

impl CanopyFrameBuilder {
    /// Create a builder with an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameBuilder for CanopyFrameBuilder {
    fn reset(&mut self) {
        self.accumulator.reset();
    }

    fn build_columns(&mut self, params: &FrameParameters) -> Result<(), FrameError> {
        place_columns(&mut self.accumulator, params)
    }

    fn build_beam(&mut self, params: &FrameParameters) -> Result<(), FrameError> {
        place_beam(&mut self.accumulator, params, CantileverSides::BOTH)
    }

    fn apply_bracing(&mut self, params: &FrameParameters) -> Result<(), FrameError> {
        place_bracing(&mut self.accumulator, params)
    }

    fn get_members(&mut self) -> &[Member] {
        self.accumulator.seal()
    }

    fn warnings(&self) -> &[GeometryWarning] {
        self.accumulator.warnings()
    }
}

/// Gantry with a canopy on one side only.
///
/// The cantilever length configured for the other side is ignored. A builder
/// created for [`Side::None`] emits no cantilevers at all.
#[derive(Clone, Debug)]
pub struct SingleCanopyFrameBuilder {
    /// The side that carries the canopy.
    side: Side,
    /// Members built so far.
    accumulator: FrameAccumulator,
}

impl SingleCanopyFrameBuilder {
    /// Create a builder whose canopy extends on `side`.
    #[must_use]
    pub fn new(side: Side) -> Self {
        Self {
            side,
            accumulator: FrameAccumulator::new(),
        }
    }

    /// The side that carries the canopy.
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }
}

impl FrameBuilder for SingleCanopyFrameBuilder {
    fn reset(&mut self) {
        self.accumulator.reset();
    }

    fn build_columns(&mut self, params: &FrameParameters) -> Result<(), FrameError> {
        place_columns(&mut self.accumulator, params)
    }

    fn build_beam(&mut self, params: &FrameParameters) -> Result<(), FrameError> {
        place_beam(
            &mut self.accumulator,
            params,
            CantileverSides::only(self.side),
        )
    }

    fn apply_bracing(&mut self, params: &FrameParameters) -> Result<(), FrameError> {
        place_bracing(&mut self.accumulator, params)
    }

    fn get_members(&mut self) -> &[Member] {
        self.accumulator.seal()
    }

    fn warnings(&self) -> &[GeometryWarning] {
        self.accumulator.warnings()
    }
}

/// Double-canopy gantry without diagonal bracing.
///
/// The bracing step still enforces construction order but appends nothing.
#[derive(Clone, Debug, Default)]
pub struct UnbracedFrameBuilder {
    /// Members built so far.
    accumulator: FrameAccumulator,
}

impl UnbracedFrameBuilder {
    /// Create a builder with an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameBuilder for UnbracedFrameBuilder {
    fn reset(&mut self) {
        self.accumulator.reset();
    }

    fn build_columns(&mut self, params: &FrameParameters) -> Result<(), FrameError> {
        place_columns(&mut self.accumulator, params)
    }

    fn build_beam(&mut self, params: &FrameParameters) -> Result<(), FrameError> {
        place_beam(&mut self.accumulator, params, CantileverSides::BOTH)
    }

    fn apply_bracing(&mut self, _params: &FrameParameters) -> Result<(), FrameError> {
        self.accumulator.start_bracing()?;
        debug!("bracing skipped for unbraced layout");
        Ok(())
    }

    fn get_members(&mut self) -> &[Member] {
        self.accumulator.seal()
    }

    fn warnings(&self) -> &[GeometryWarning] {
        self.accumulator.warnings()
    }
}
