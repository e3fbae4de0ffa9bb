pub mod compose;
pub mod html;
