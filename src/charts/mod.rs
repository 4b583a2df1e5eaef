//! Charts module - serializable chart specifications

mod spec;

pub use spec::{Axis, ChartSpec, ColorBar, Layout, Marker, Trace};
