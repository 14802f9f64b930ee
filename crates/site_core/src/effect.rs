use crate::image::ImageRef;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// The visible page changed; the host starts one independent load per image.
    LoadImages(Vec<ImageRef>),
}
