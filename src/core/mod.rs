//! 核心模块
//!
//! - `engine` - 程序入口，串联加载、绑定与帧循环
//! - `frame_loop` - 帧循环状态机
//! - `simulation` - 运动积分与边界反弹
//! - `error` - 顶层错误类型

pub mod engine;
pub mod error;
pub mod frame_loop;
pub mod simulation;
#[macro_use]
pub mod macros;

pub use engine::Engine;
pub use error::{DemoError, DemoResult};
pub use frame_loop::{FrameLoop, LoopState, RunSummary};
pub use simulation::{Reflection, SimulationState};
