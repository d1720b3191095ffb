pub(crate) mod bitmap;
pub(crate) mod font;
pub(crate) mod layout;
