pub(crate) mod compositor;
pub(crate) mod groups;
pub(crate) mod ramp;
pub(crate) mod stops;
