use game_core::Color;

/// A drawing surface the game loop paints frames onto
///
/// Every `draw_*` call happens between a `begin_drawing` that returned true
/// and the matching `commit_drawing`.
pub trait Renderer {
    /// Lock the surface for drawing; false when it is not ready yet
    fn begin_drawing(&mut self) -> bool;

    /// Present the frame and release the surface
    fn commit_drawing(&mut self);

    fn draw_background(&mut self, color: Color);

    fn draw_vertical_line(&mut self, x: f32, top_y: f32, bottom_y: f32, color: Color, dashed: bool);

    fn draw_circle(&mut self, center_x: f32, center_y: f32, radius: f32, color: Color);

    fn draw_rect(&mut self, left: f32, top: f32, right: f32, bottom: f32, color: Color);

    fn draw_score(
        &mut self,
        text: &str,
        x: f32,
        top_y: f32,
        text_size: f32,
        color: Color,
        right_aligned: bool,
    );

    /// Large digit centered over the whole surface
    fn draw_count_down(
        &mut self,
        text: &str,
        text_size: f32,
        text_color: Color,
        background: Color,
    );

    fn draw_frames_per_second(&mut self, text: &str, x: f32, y: f32, text_size: f32, color: Color);
}
