//! Structural members emitted by frame builders.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Stable identity of a member within one generated frame.
///
/// Identifiers are assigned in append order starting at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MemberId(pub usize);

impl MemberId {
    /// Return the zero-based append index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Structural role of a member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum MemberRole {
    /// Vertical member from footing to beam.
    Column,
    /// Main beam spanning between the two columns.
    Beam,
    /// Diagonal member stabilising a column.
    Brace,
    /// Canopy extension beyond a column line.
    Cantilever,
}

/// Which side of the frame a member belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    /// Central members such as the main beam.
    None,
    /// Left of the centerline.
    Left,
    /// Right of the centerline.
    Right,
}

impl Side {
    /// Sign applied to outward horizontal offsets on this side.
    pub(crate) fn outward(self) -> f64 {
        match self {
            Side::Left => -1.0,
            Side::Right | Side::None => 1.0,
        }
    }
}

/// Section and material assigned downstream from an external catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionAssignment {
    /// Catalog designation of the cross-section.
    pub section: String,
    /// Catalog designation of the material.
    pub material: String,
}

/// One structural line segment of the generated frame.
///
/// Members are immutable once a builder appends them.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Member {
    /// Append index within the frame.
    id: MemberId,
    /// Structural role.
    role: MemberRole,
    /// Side of the centerline.
    side: Side,
    /// First endpoint.
    start: Point,
    /// Second endpoint.
    end: Point,
    /// Downstream section slot, never filled by the builders.
    section: Option<SectionAssignment>,
}

impl Member {
    /// Create a member with an empty section slot.
    #[must_use]
    pub fn new(id: MemberId, role: MemberRole, side: Side, start: Point, end: Point) -> Self {
        Self {
            id,
            role,
            side,
            start,
            end,
            section: None,
        }
    }

    /// Identity of the member.
    #[must_use]
    pub fn id(&self) -> MemberId {
        self.id
    }

    /// Structural role of the member.
    #[must_use]
    pub fn role(&self) -> MemberRole {
        self.role
    }

    /// Side of the frame the member belongs to.
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// First endpoint.
    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Second endpoint.
    #[must_use]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Section slot filled in by downstream catalog lookups.
    #[must_use]
    pub fn section(&self) -> Option<&SectionAssignment> {
        self.section.as_ref()
    }

    /// Return a copy of this member with the section slot filled.
    ///
    /// # Examples
    /// ```
    /// use gantryx::{point, Member, MemberId, MemberRole, SectionAssignment, Side};
    ///
    /// let column = Member::new(
    ///     MemberId(0),
    ///     MemberRole::Column,
    ///     Side::Left,
    ///     point(-3.0, -0.5),
    ///     point(-3.0, 4.3),
    /// );
    /// let assigned = column.with_section(SectionAssignment {
    ///     section: "HEA200".to_string(),
    ///     material: "S355".to_string(),
    /// });
    /// assert!(column.section().is_none());
    /// assert_eq!(assigned.section().map(|s| s.material.as_str()), Some("S355"));
    /// ```
    #[must_use]
    pub fn with_section(&self, section: SectionAssignment) -> Self {
        Self {
            section: Some(section),
            ..self.clone()
        }
    }

    /// Vector from the start point to the end point.
    #[must_use]
    pub fn delta(&self) -> Vector2<f64> {
        self.end.to_vector() - self.start.to_vector()
    }

    /// Length of the member.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.delta().norm()
    }

    /// Unit direction from start to end, or `None` for a zero-length member.
    #[must_use]
    pub fn direction(&self) -> Option<Vector2<f64>> {
        let delta = self.delta();
        let length = delta.norm();
        if length == 0.0 {
            None
        } else {
            Some(delta / length)
        }
    }
}
