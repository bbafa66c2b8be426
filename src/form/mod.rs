mod render;
pub(crate) use render::*;

mod state;
pub(crate) use state::*;
