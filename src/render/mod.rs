pub(crate) mod backdrop;
pub(crate) mod field;
pub(crate) mod html;
pub(crate) mod raster;
pub(crate) mod svg;
