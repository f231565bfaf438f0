mod report;

use gantryx::{CanopyFrameBuilder, FrameDirector, FrameParameters};
use report::render_summary;
use std::error::Error;
use tracing_subscriber::EnvFilter;

/// Dimensions of the reference gantry printed by this binary.
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

fn main() -> Result<(), Box<dyn Error>> {
    // Logging goes to stderr so the report on stdout stays clean. RUST_LOG
    // overrides the default level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Columns, then the beam with its canopy, then bracing. The director fixes
    // this order for every builder.
    let params = reference_parameters();
    let frame = FrameDirector::new().generate(&params, &mut CanopyFrameBuilder::new())?;

    let report = render_summary(&params, &frame);
    println!("{report}");

    Ok(())
}
