pub(crate) mod aura;
pub(crate) mod ease;
pub(crate) mod flight;
pub(crate) mod keyframes;
