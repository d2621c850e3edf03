pub(crate) mod echo;
pub(crate) mod jokes;
