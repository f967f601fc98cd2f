/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * adjustable parameters for the flocking simulation. These parameters can be
 * modified through the UI. It also provides methods for parameter change
 * detection and management to improve separation of concerns.
 */

use crate::{INTERACTION_RADIUS, MAX_SPEED, STEER_FORCE};

// Parameters for the simulation that can be adjusted via UI
pub struct SimulationParams {
    pub density: usize, // agents per axis in the startup lattice
    pub centered_layout: bool,
    pub interaction_radius: f32,
    pub steer_force: f32,
    pub max_speed: f32,
    pub circular_mean: bool, // corrected angle averaging, off by default
    pub show_neighbor_links: bool,
    pub show_debug: bool,
    pub pause_simulation: bool,
    // Performance settings
    pub enable_parallel: bool,
    pub enable_spatial_grid: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
struct ParamSnapshot {
    density: usize,
    centered_layout: bool,
    interaction_radius: f32,
    steer_force: f32,
    max_speed: f32,
    circular_mean: bool,
    show_neighbor_links: bool,
    show_debug: bool,
    pause_simulation: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            density: 10,
            centered_layout: false,
            interaction_radius: INTERACTION_RADIUS,
            steer_force: STEER_FORCE,
            max_speed: MAX_SPEED,
            circular_mean: false,
            show_neighbor_links: true,
            show_debug: false,
            pause_simulation: false,
            // Default performance settings
            enable_parallel: false,
            enable_spatial_grid: true,
            // Initialize with no previous values
            previous_values: None,
        }
    }
}

impl SimulationParams {
    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot {
            density: self.density,
            centered_layout: self.centered_layout,
            interaction_radius: self.interaction_radius,
            steer_force: self.steer_force,
            max_speed: self.max_speed,
            circular_mean: self.circular_mean,
            show_neighbor_links: self.show_neighbor_links,
            show_debug: self.show_debug,
            pause_simulation: self.pause_simulation,
        });
    }

    // Check if any parameters have changed since the last snapshot.
    // Returns a tuple of (layout_changed, any_ui_changed).
    pub fn detect_changes(&self) -> (bool, bool) {
        let mut layout_changed = false;
        let mut ui_changed = false;

        // If we don't have previous values, nothing has changed
        if let Some(prev) = &self.previous_values {
            // Layout parameters require regenerating the collection
            if self.density != prev.density || self.centered_layout != prev.centered_layout {
                layout_changed = true;
                ui_changed = true;
            }

            // Check for other parameter changes
            if self.interaction_radius != prev.interaction_radius
                || self.steer_force != prev.steer_force
                || self.max_speed != prev.max_speed
                || self.circular_mean != prev.circular_mean
                || self.show_neighbor_links != prev.show_neighbor_links
                || self.show_debug != prev.show_debug
                || self.pause_simulation != prev.pause_simulation
            {
                ui_changed = true;
            }
        }

        (layout_changed, ui_changed)
    }

    // Get parameter ranges for UI sliders
    pub fn get_density_range() -> std::ops::RangeInclusive<usize> {
        1..=50
    }

    pub fn get_interaction_radius_range() -> std::ops::RangeInclusive<f32> {
        10.0..=300.0
    }

    pub fn get_steer_force_range() -> std::ops::RangeInclusive<f32> {
        0.0..=200.0
    }

    pub fn get_max_speed_range() -> std::ops::RangeInclusive<f32> {
        5.0..=100.0
    }
}
