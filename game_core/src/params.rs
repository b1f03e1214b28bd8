/// Game tuning parameters for Pong
///
/// Distances are in pixels, times in milliseconds, speeds in pixels per
/// millisecond and angles in degrees (0° = up, 90° = right).
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Board
    pub const HORIZONTAL_MARGIN_FRACTION: f32 = 0.1; // Each side, reserved for thumbs

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT_FRACTION: f32 = 0.2; // Of board height
    pub const PADDLE_OUTSIDE_MARGIN: f32 = 20.0; // Gap between margin line and paddle
    pub const HUMAN_PADDLE_MAX_SPEED: f32 = 2.0;
    pub const COMPUTER_PADDLE_MAX_SPEED: f32 = 0.6;
    pub const COMPUTER_IMPRECISION: f32 = 0.2; // Max offset added to relative hit location

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED_INITIAL: f32 = 0.3;
    pub const BALL_SPEED_MIN: f32 = 0.01;
    pub const BALL_SPEED_INCREASE: f32 = 0.05; // +5% per paddle hit
    pub const MIN_DEFLECTION_DEGREES: f32 = 10.0;
    pub const SPAWN_DEGREES_MIN: f32 = 30.0;
    pub const SPAWN_DEGREES_MAX: f32 = 150.0;

    // Score
    pub const SCORE_TEXT_SIZE: f32 = 80.0;
    pub const SCORE_OFFSET_X: f32 = 40.0; // From the center line
    pub const SCORE_TOP_Y: f32 = 20.0;

    // Timing
    pub const NOMINAL_FRAME_MILLIS: f32 = 16.0; // Used until a frame has been measured
}
