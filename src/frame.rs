//! Generated frames and their joint topology.

use nalgebra::Vector2;
use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use serde::Serialize;

use crate::errors::{FrameError, GeometryWarning};
use crate::geometry::Point;
use crate::member::{Member, MemberId, MemberRole, Side};

/// Ordered members produced by one generation request.
///
/// Consumers treat the frame as read-only; members appear in construction order
/// (columns, then beam and cantilevers, then braces).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Frame {
    /// Members in append order.
    members: Vec<Member>,
    /// Non-fatal warnings raised while building.
    warnings: Vec<GeometryWarning>,
}

impl Frame {
    /// Wrap members and warnings retrieved from a builder.
    #[must_use]
    pub fn new(members: Vec<Member>, warnings: Vec<GeometryWarning>) -> Self {
        Self { members, warnings }
    }

    /// Members in append order.
    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Warnings raised while building.
    #[must_use]
    pub fn warnings(&self) -> &[GeometryWarning] {
        &self.warnings
    }

    /// Number of members in the frame.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Iterate over the members with `role`.
    pub fn members_with_role(&self, role: MemberRole) -> impl Iterator<Item = &Member> + '_ {
        self.members
            .iter()
            .filter(move |member| member.role() == role)
    }

    /// Find the member with `role` on `side`.
    #[must_use]
    pub fn member(&self, role: MemberRole, side: Side) -> Option<&Member> {
        self.members
            .iter()
            .find(|member| member.role() == role && member.side() == side)
    }

    /// Whether the frame mirrors onto itself about the vertical centerline.
    ///
    /// Every member must have a counterpart of the same role on the opposite side
    /// whose mirrored endpoints match within `tolerance`. Central members must be
    /// their own mirror image (endpoints may be swapped).
    #[must_use]
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        self.members.iter().all(|member| {
            let side = match member.side() {
                Side::Left => Side::Right,
                Side::Right => Side::Left,
                Side::None => Side::None,
            };
            let start = member.start().mirrored();
            let end = member.end().mirrored();
            self.members
                .iter()
                .filter(|other| other.role() == member.role() && other.side() == side)
                .any(|other| {
                    (other.start().approx_eq(start, tolerance)
                        && other.end().approx_eq(end, tolerance))
                        || (other.start().approx_eq(end, tolerance)
                            && other.end().approx_eq(start, tolerance))
                })
        })
    }

    /// Build the joint graph an analysis component consumes.
    ///
    /// Endpoints closer than `tolerance` merge into one joint. A joint lying on the
    /// interior of another member, such as a brace attach point on a column, splits
    /// that member, so one member may contribute several edges.
    #[must_use]
    pub fn topology(&self, tolerance: f64) -> FrameTopology {
        let mut topology = FrameTopology::default();
        for member in &self.members {
            topology.joint(member.start(), tolerance);
            topology.joint(member.end(), tolerance);
        }
        for member in &self.members {
            let start = member.start().to_vector();
            let delta = member.delta();
            let length_squared = delta.norm_squared();
            // Joints merged within `tolerance` of an endpoint may sit just past it.
            let slack = if length_squared == 0.0 {
                0.0
            } else {
                tolerance / length_squared.sqrt()
            };
            let mut stations: Vec<(f64, NodeIndex)> = topology
                .graph
                .node_indices()
                .filter_map(|node| {
                    let offset = topology.graph[node].to_vector() - start;
                    let t = if length_squared == 0.0 {
                        0.0
                    } else {
                        offset.dot(&delta) / length_squared
                    };
                    let foot: Vector2<f64> = start + delta * t;
                    let on_segment = (-slack..=1.0 + slack).contains(&t)
                        && (topology.graph[node].to_vector() - foot).norm() <= tolerance;
                    on_segment.then_some((t, node))
                })
                .collect();
            stations.sort_by(|a, b| a.0.total_cmp(&b.0));
            for pair in stations.windows(2) {
                let (a, b) = (pair[0].1, pair[1].1);
                if a != b {
                    topology.graph.add_edge(a, b, member.id());
                }
            }
        }
        topology
    }

    /// Serialize the frame for rendering or export surfaces.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::Export`] if serialization fails.
    pub fn to_json(&self) -> Result<String, FrameError> {
        serde_json::to_string_pretty(self).map_err(|error| FrameError::Export(error.to_string()))
    }
}

/// Joints and member segments of a frame as a graph.
///
/// Nodes are joint positions and edges carry the [`MemberId`] of the member the
/// segment belongs to.
#[derive(Clone, Debug, Default)]
pub struct FrameTopology {
    /// Joint graph.
    graph: UnGraph<Point, MemberId>,
}

impl FrameTopology {
    /// Underlying graph storage.
    #[must_use]
    pub fn graph(&self) -> &UnGraph<Point, MemberId> {
        &self.graph
    }

    /// Number of distinct joints.
    #[must_use]
    pub fn joint_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of member segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Position of a joint.
    #[must_use]
    pub fn joint_position(&self, joint: NodeIndex) -> Option<Point> {
        self.graph.node_weight(joint).copied()
    }

    /// Find the joint at `position`.
    #[must_use]
    pub fn find_joint(&self, position: Point, tolerance: f64) -> Option<NodeIndex> {
        self.graph
            .node_indices()
            .find(|&node| self.graph[node].approx_eq(position, tolerance))
    }

    /// Segments belonging to `member`.
    pub fn segments_of(&self, member: MemberId) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.graph
            .edge_indices()
            .filter(move |&edge| self.graph[edge] == member)
    }

    /// Return the joint at `position`, adding it when no joint is within `tolerance`.
    fn joint(&mut self, position: Point, tolerance: f64) -> NodeIndex {
        match self.find_joint(position, tolerance) {
            Some(node) => node,
            None => self.graph.add_node(position),
        }
    }
}
