/*
 * Application Module
 *
 * This module defines the main application model and per-frame logic for the
 * flocking simulation. One simulation step and one render pass execute fully
 * per frame; nannou reschedules the loop itself.
 */

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::agent::Agent;
use crate::debug::DebugInfo;
use crate::layout;
use crate::params::SimulationParams;
use crate::renderer::view;
use crate::sim::{clamp_delta, Simulation};
use crate::ui;

// Main model for the application
pub struct Model {
    pub sim: Simulation,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Get the primary monitor's dimensions
    let monitor = app.primary_monitor().expect("Failed to get primary monitor");
    let monitor_size = monitor.size();

    // Calculate window size based on monitor size (80% of monitor size)
    let window_width = monitor_size.width as f32 * 0.8;
    let window_height = monitor_size.height as f32 * 0.8;

    // Create the main window with dynamic size
    let window_id = app
        .new_window()
        .title("Flocking Simulation")
        .size(window_width as u32, window_height as u32)
        .view(view)
        .raw_event(raw_window_event)
        .build()
        .unwrap();

    // Get the window
    let window = app.window(window_id).unwrap();

    // Create the UI
    let egui = Egui::from_window(&window);

    // Create simulation parameters
    let params = SimulationParams::default();

    // Generate the startup lattice from the actual viewport dimensions
    let rect = app.window_rect();
    let agents = generate_agents(rect.w(), rect.h(), &params);
    let sim = Simulation::new(agents, rect.w(), rect.h(), params.interaction_radius);

    Model {
        sim,
        params,
        egui,
        debug_info: DebugInfo::default(),
    }
}

fn generate_agents(width: f32, height: f32, params: &SimulationParams) -> Vec<Agent> {
    if params.centered_layout {
        layout::make_centered_grid(width, height, params.density)
    } else {
        layout::make_grid(width, height, params.density)
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    // Update UI and check whether the flock needs to be regenerated
    model.egui.set_elapsed_time(update.since_start);
    let (should_regenerate, layout_changed, _ui_changed) =
        ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info);

    // Re-read the viewport every frame; the window may have been resized
    let rect = app.window_rect();

    if should_regenerate || layout_changed {
        model
            .sim
            .reset(generate_agents(rect.w(), rect.h(), &model.params));
    }

    // Only step the simulation if it is not paused
    if !model.params.pause_simulation {
        // Clamp the frame delta so long pauses cannot destabilize integration
        let delta = clamp_delta(update.since_last.as_secs_f32());

        let stats = model.sim.step(delta, rect.w(), rect.h(), &model.params);
        model.debug_info.neighbor_links = stats.neighbor_links;
        model.debug_info.chunk_size = stats.chunk_size;
    }
}

// Handle raw window events for egui
pub fn raw_window_event(
    _app: &App,
    model: &mut Model,
    event: &nannou::winit::event::WindowEvent,
) {
    // Pass events to egui
    model.egui.handle_raw_event(event);
}
