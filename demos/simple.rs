use gantryx::{generate, FrameParameters};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let params = FrameParameters {
        left_cantilever_length: 1.5,
        right_cantilever_length: 1.5,
        left_brace_shift: 0.6,
        right_brace_shift: 0.6,
        ..FrameParameters::default()
    };

    let frame = generate(&params)?;

    for member in frame.members() {
        println!(
            "{:?} {:?}: length = {:.3}",
            member.role(),
            member.side(),
            member.length()
        );
    }
    println!("symmetric: {}", frame.is_symmetric(1.0e-9));

    Ok(())
}
