pub(crate) mod contrast;
pub(crate) mod text;
