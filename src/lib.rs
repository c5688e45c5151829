//! codepad - 编辑会话核心库
//!
//! 模块结构：
//! - models: 数据模型（FileTree, DocumentSession）
//! - kernel: 无界面核心（state/action/effect、自动保存、设置）
//! - app: 应用层（Workbench，事件循环宿主）

pub mod app;
pub mod kernel;
pub mod models;
