// Presentation-adjacent layer: interpretive text and report rendering.

pub mod meanings;
pub mod render;
