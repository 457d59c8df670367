// cli.rs - Command-line interface configuration
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "freelook")]
#[command(about = "First-person free-look camera demo", long_about = None)]
pub struct Cli {
    /// Movement speed in world units per frame
    #[arg(long, default_value_t = 0.05)]
    pub linear_speed: f32,

    /// Look sensitivity in degrees per input unit
    #[arg(long, default_value_t = 0.1)]
    pub angular_speed: f32,

    /// Clamp pitch to +/- this many degrees (unclamped when omitted)
    #[arg(long)]
    pub pitch_limit: Option<f32>,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 45.0)]
    pub fov: f32,
}
