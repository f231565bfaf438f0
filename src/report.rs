use gantryx::{Frame, FrameParameters, Side};
use std::fmt::Write;

/// Render a textual summary of a generated frame.
///
/// One line per member in construction order, followed by any geometry
/// warnings, so the numbers can be checked against a hand sketch.
#[must_use]
pub fn render_summary(params: &FrameParameters, frame: &Frame) -> String {
    let mut output = String::new();

    writeln!(
        &mut output,
        "Gantry frame (span = {:.3}, column top = {:.3}, footing = {:.3})",
        2.0 * params.column_shift,
        params.column_top_elevation(),
        params.footing_elevation()
    )
    .expect("writing to string cannot fail");

    for member in frame.members() {
        let side = match member.side() {
            Side::None => String::new(),
            side => format!(" {side:?}"),
        };
        writeln!(
            &mut output,
            "  #{:<2} {:?}{}: ({:+.3}, {:+.3}) -> ({:+.3}, {:+.3}), length {:.3}",
            member.id().index(),
            member.role(),
            side,
            member.start().x,
            member.start().y,
            member.end().x,
            member.end().y,
            member.length()
        )
        .expect("writing to string cannot fail");
    }

    if frame.warnings().is_empty() {
        output.push_str("No geometry warnings\n");
    } else {
        for warning in frame.warnings() {
            writeln!(&mut output, "Warning: {warning}").expect("writing to string cannot fail");
        }
    }

    output
}
