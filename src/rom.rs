pub(crate) mod emit;
pub(crate) mod linear;
pub(crate) mod writer;
