pub(crate) mod atoms;
pub(crate) mod shell;
pub(crate) mod transition;
