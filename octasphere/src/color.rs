use rand::Rng;

pub type Rgb = [f32; 3];

/// Draws one color with every component uniformly distributed in `[0, 1)`.
/// Components are sampled in red, green, blue order.
#[inline]
pub fn random_color<R: Rng>(rng: &mut R) -> Rgb {
    let r = rng.gen::<f32>();
    let g = rng.gen::<f32>();
    let b = rng.gen::<f32>();
    [r, g, b]
}
