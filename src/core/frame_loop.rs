//! 帧循环驱动
//!
//! 状态机：`Uninitialized → Running → Closing → Terminated`。
//! 每次 `step` 依次执行：轮询终止信号 → 更新运动状态 → 绘制一帧。
//! 原生窗口在 `shutdown` 中关闭且只关闭一次；若循环因错误提前退出，`Drop` 负责关闭。

use super::error::{DemoError, DemoResult};
use super::simulation::SimulationState;
use crate::config::{DemoConfig, SceneConfig};
use crate::platform::GraphicsBackend;
use glam::Vec2;
use std::ffi::CString;

/// 帧循环状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Uninitialized,
    Running,
    Closing,
    Terminated,
}

/// 一次运行的统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// 完整绘制的帧数
    pub frames: u64,
    /// 速度分量翻转次数
    pub reflections: u64,
}

/// 驱动图形后端的单线程帧循环
pub struct FrameLoop<B: GraphicsBackend> {
    backend: B,
    state: LoopState,
    simulation: SimulationState,
    bounds: Vec2,
    window_size: (i32, i32),
    target_fps: i32,
    title: CString,
    banner: CString,
    scene: SceneConfig,
    summary: RunSummary,
}

impl<B: GraphicsBackend> FrameLoop<B> {
    /// 构造循环；字符串在这里一次性转换为 C 字符串
    pub fn new(backend: B, config: &DemoConfig) -> DemoResult<Self> {
        config.validate()?;

        let window = &config.window;
        let bounds = Vec2::new(window.width as f32, window.height as f32);
        let scene = config.scene.clone();
        let position = scene.initial_position.unwrap_or(bounds / 2.0);

        Ok(Self {
            backend,
            state: LoopState::Uninitialized,
            simulation: SimulationState::new(position, scene.initial_velocity),
            bounds,
            window_size: (window.width, window.height),
            target_fps: window.target_fps,
            title: CString::new(window.title.as_str())?,
            banner: CString::new(scene.banner.as_str())?,
            scene,
            summary: RunSummary::default(),
        })
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn simulation(&self) -> &SimulationState {
        &self.simulation
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// 打开窗口并设置目标帧率
    pub fn initialize(&mut self) -> DemoResult<()> {
        if self.state != LoopState::Uninitialized {
            return Err(DemoError::InvalidState(format!(
                "initialize called in state {:?}",
                self.state
            )));
        }

        let (width, height) = self.window_size;
        self.backend.init_window(width, height, &self.title);
        if !self.backend.is_window_ready() {
            self.state = LoopState::Terminated;
            return Err(DemoError::Init(format!(
                "native window {}x{} did not become ready",
                width, height
            )));
        }

        self.backend.set_target_fps(self.target_fps);
        self.state = LoopState::Running;

        tracing::info!(target: "frame_loop", "Window initialized. Press ESC to close.");
        Ok(())
    }

    /// 执行一帧，返回执行后的状态
    pub fn step(&mut self) -> DemoResult<LoopState> {
        if self.state != LoopState::Running {
            return Err(DemoError::InvalidState(format!(
                "step called in state {:?}",
                self.state
            )));
        }

        if self.backend.should_close() {
            tracing::debug!(target: "frame_loop", "Termination signal after {} frames", self.summary.frames);
            self.state = LoopState::Closing;
            return Ok(self.state);
        }

        let reflection = self
            .simulation
            .advance(self.bounds, self.scene.clamp_to_bounds);
        if reflection.any() {
            tracing::trace!(
                target: "frame_loop",
                "Reflected at {:?} (x: {}, y: {})",
                self.simulation.position,
                reflection.x,
                reflection.y
            );
        }
        self.summary.reflections += reflection.count();

        self.render();
        self.summary.frames += 1;
        Ok(self.state)
    }

    fn render(&mut self) {
        let scene = &self.scene;
        let [text_x, text_y] = scene.banner_position;

        self.backend.begin_frame();
        self.backend.clear(scene.background);
        self.backend
            .draw_text(&self.banner, text_x, text_y, scene.font_size, scene.text_color);
        self.backend.draw_filled_circle(
            self.simulation.center(),
            scene.circle_radius,
            scene.circle_color,
        );
        self.backend.end_frame();
    }

    /// 关闭窗口；重复调用无副作用
    pub fn shutdown(&mut self) {
        match self.state {
            LoopState::Running | LoopState::Closing => {
                self.state = LoopState::Closing;
                self.backend.close_window();
                self.state = LoopState::Terminated;
                tracing::info!(target: "frame_loop", "Window closed. Test finished.");
            }
            LoopState::Uninitialized => self.state = LoopState::Terminated,
            LoopState::Terminated => {}
        }
    }

    /// 初始化 → 逐帧运行直到终止信号（或达到 `max_frames`）→ 关闭
    pub fn run(&mut self, max_frames: Option<u64>) -> DemoResult<RunSummary> {
        self.initialize()?;

        loop {
            if max_frames.is_some_and(|limit| self.summary.frames >= limit) {
                tracing::debug!(target: "frame_loop", "Frame limit reached");
                self.state = LoopState::Closing;
                break;
            }
            if self.step()? != LoopState::Running {
                break;
            }
        }

        self.shutdown();
        Ok(self.summary)
    }
}

impl<B: GraphicsBackend> Drop for FrameLoop<B> {
    fn drop(&mut self) {
        if matches!(self.state, LoopState::Running | LoopState::Closing) {
            tracing::warn!(target: "frame_loop", "Frame loop dropped while the window is open; closing it");
            self.shutdown();
        }
    }
}
