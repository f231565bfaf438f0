#![warn(clippy::pedantic)]

use std::thread;

use gantryx::{
    generate, point, CanopyFrameBuilder, FrameBuilder, FrameDirector, FrameError,
    FrameParameters, MemberRole, Side,
};

const TOLERANCE: f64 = 1.0e-9;

fn reference_parameters() -> FrameParameters {
    FrameParameters {
        clear_height: 4.0,
        beam_extra_height: 0.3,
        footing_depth: 0.5,
        slope: 0.0,
        right_cantilever_length: 1.0,
        left_cantilever_length: 0.0,
        right_brace_shift: 0.4,
        left_brace_shift: 0.0,
        brace_attach_height: 2.0,
        column_shift: 3.0,
    }
}

#[test]
fn reference_frame_matches_hand_calculation() {
    let frame = generate(&reference_parameters()).expect("reference frame builds");
    let members = frame.members();
    assert_eq!(members.len(), 5);

    let expected = [
        (MemberRole::Column, Side::Left, point(-3.0, -0.5), point(-3.0, 4.3)),
        (MemberRole::Column, Side::Right, point(3.0, -0.5), point(3.0, 4.3)),
        (MemberRole::Beam, Side::None, point(-3.0, 4.3), point(3.0, 4.3)),
        (MemberRole::Cantilever, Side::Right, point(3.0, 4.3), point(4.0, 4.3)),
        // The attach height is measured up from the footing base at -0.5.
        (MemberRole::Brace, Side::Right, point(3.0, 1.5), point(3.4, 4.3)),
    ];
    for (index, (member, (role, side, start, end))) in members.iter().zip(expected).enumerate() {
        assert_eq!(member.id().index(), index);
        assert_eq!(member.role(), role);
        assert_eq!(member.side(), side);
        assert!(member.start().approx_eq(start, TOLERANCE), "{member:?}");
        assert!(member.end().approx_eq(end, TOLERANCE), "{member:?}");
        assert!(member.section().is_none());
    }

    assert!(frame.member(MemberRole::Brace, Side::Left).is_none());
    assert!(frame.member(MemberRole::Cantilever, Side::Left).is_none());
    assert!(frame.warnings().is_empty());
}

#[test]
fn negative_clear_height_is_rejected_before_building() {
    let params = FrameParameters {
        clear_height: -1.0,
        ..reference_parameters()
    };
    let mut builder = CanopyFrameBuilder::new();
    let error = FrameDirector::new()
        .generate(&params, &mut builder)
        .expect_err("negative clear height rejected");
    assert_eq!(error.to_string(), "clearHeight must be ≥ 0");

    let error = builder
        .build_columns(&params)
        .expect_err("direct builder use validates too");
    assert!(matches!(error, FrameError::InvalidParameter { .. }));
    assert!(builder.get_members().is_empty());
}

#[test]
fn symmetric_input_yields_mirrored_frame() {
    let params = FrameParameters {
        column_shift: 2.5,
        left_cantilever_length: 1.2,
        right_cantilever_length: 1.2,
        left_brace_shift: 0.5,
        right_brace_shift: 0.5,
        ..reference_parameters()
    };
    let frame = generate(&params).expect("symmetric frame builds");
    assert_eq!(frame.member_count(), 7);
    assert!(frame.is_symmetric(TOLERANCE));

    let left = frame
        .member(MemberRole::Column, Side::Left)
        .expect("left column");
    let right = frame
        .member(MemberRole::Column, Side::Right)
        .expect("right column");
    assert!(left.start().mirrored().approx_eq(right.start(), TOLERANCE));
    assert!(left.end().mirrored().approx_eq(right.end(), TOLERANCE));

    let beam = frame.member(MemberRole::Beam, Side::None).expect("beam");
    assert!((beam.start().y - beam.end().y).abs() < TOLERANCE);
}

#[test]
fn topology_connects_every_member() {
    let params = FrameParameters {
        left_cantilever_length: 1.0,
        left_brace_shift: 0.4,
        ..reference_parameters()
    };
    let frame = generate(&params).expect("frame builds");
    let topology = frame.topology(TOLERANCE);

    // Bases, tops, two cantilever tips, two brace attach points and two brace tips.
    // Each brace tip lands on its cantilever and splits it.
    assert_eq!(topology.joint_count(), 10);
    for member in frame.members() {
        assert!(topology.segments_of(member.id()).count() >= 1);
    }
    assert_eq!(petgraph::algo::connected_components(topology.graph()), 1);
}

#[test]
fn concurrent_requests_use_their_own_builders() {
    let director = FrameDirector::new();
    let handles: Vec<_> = (0..4)
        .map(|step| {
            thread::spawn(move || {
                let params = FrameParameters {
                    left_cantilever_length: f64::from(step),
                    ..reference_parameters()
                };
                let mut builder = CanopyFrameBuilder::new();
                director
                    .generate(&params, &mut builder)
                    .expect("frame builds")
            })
        })
        .collect();

    for (step, handle) in handles.into_iter().enumerate() {
        let frame = handle.join().expect("worker finishes");
        let expected = if step == 0 { 5 } else { 6 };
        assert_eq!(frame.member_count(), expected);
    }
}

#[test]
fn parameters_load_from_json() {
    let document = r#"{
        "clearHeight": 4.0,
        "beamExtraHeight": 0.3,
        "footingDepth": 0.5,
        "slope": 0.0,
        "rightCantileverLength": 1.0,
        "leftCantileverLength": 0.0,
        "rightBraceShift": 0.4,
        "leftBraceShift": 0.0,
        "braceAttachHeight": 2.0,
        "columnShift": 3.0
    }"#;
    let params = FrameParameters::from_json(document).expect("document parses");
    assert_eq!(params, reference_parameters());
}
