//! 应用层：把 kernel 的 effect 落到运行时与外部出口上

pub mod workbench;

pub use workbench::{EditorSnapshot, Workbench};
