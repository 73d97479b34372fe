// SPDX-License-Identifier: MIT OR Apache-2.0

//! Main application: one window showing the board and its tiles

use crate::components::{PainterSurface, PointerInput};
use crate::design_system::get_design_system;
use egui::{CentralPanel, Frame, Key, ViewportCommand};
use scrabble_core::{FrameRate, Scene};

/// Board window driven by eframe's update loop
pub struct App {
    scene: Scene,
    pointer: PointerInput,
    frame_rate: FrameRate,
}

impl App {
    pub fn new(scene: Scene, frame_rate: FrameRate) -> Self {
        Self {
            scene,
            pointer: PointerInput::new(),
            frame_rate,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Run one frame: apply input, repaint, schedule the next frame
    pub fn show(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            self.scene.stop();
        }

        for event in self.pointer.collect(ctx) {
            self.scene.handle(event);
        }

        let ds = get_design_system();
        CentralPanel::default()
            .frame(Frame::none().fill(ds.colors.background))
            .show(ctx, |ui| {
                let mut surface = PainterSurface::new(ui.painter());
                self.scene.draw(&mut surface);
            });

        if self.scene.is_running() {
            ctx.request_repaint_after(self.frame_rate.frame_interval());
        } else {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
