//! Form controls shared by the input card and the thesis tabs.

pub mod select;
pub mod slider;
pub mod text_area;
