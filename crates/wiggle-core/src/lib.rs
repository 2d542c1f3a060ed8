pub mod align;
pub mod consts;
pub mod error;
pub mod frame;
pub mod io;
pub mod pipeline;
pub mod postprocess;
pub mod sequence;
pub mod slice;
