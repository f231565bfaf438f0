use gantryx::{FrameDirector, FrameParameters, Side, SingleCanopyFrameBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let params = FrameParameters::from_json(
        r#"{
            "clearHeight": 5.0,
            "beamExtraHeight": 0.4,
            "footingDepth": 0.8,
            "slope": 0.05,
            "rightCantileverLength": 2.0,
            "leftCantileverLength": 2.0,
            "rightBraceShift": 0.5,
            "leftBraceShift": 0.5,
            "braceAttachHeight": 3.0,
            "columnShift": 4.0
        }"#,
    )?;

    // Only the right canopy is emitted; the left length is ignored.
    let mut builder = SingleCanopyFrameBuilder::new(Side::Right);
    let frame = FrameDirector::new().generate(&params, &mut builder)?;
    let topology = frame.topology(1.0e-9);

    println!(
        "{} members, {} joints, {} segments",
        frame.member_count(),
        topology.joint_count(),
        topology.segment_count()
    );
    println!("{}", frame.to_json()?);

    Ok(())
}
