mod dimensions;
mod rect;
mod rect_transform;

pub use self::{
    dimensions::Dimensions,
    rect::Rect,
    rect_transform::{Corner, RectTransform, WorldCorners},
};
