/*
 * Flocking Simulation - Module Definitions
 *
 * This file defines the module structure for the flocking simulation.
 * It organizes the code into logical components for better maintainability.
 */

// Re-export key components for easier access
pub use params::SimulationParams;
pub use sim::Simulation;

// Define modules
pub mod agent;
pub mod app;
pub mod debug;
pub mod layout;
pub mod params;
pub mod renderer;
pub mod sim;
pub mod spatial_grid;
pub mod ui;

// Constants
pub const INTERACTION_RADIUS: f32 = 100.0;
pub const MAX_SPEED: f32 = 30.0;
pub const STEER_FORCE: f32 = 40.0;
pub const MAX_DELTA: f32 = 0.033;
pub const HEADING_SCALE: f32 = 3.0;
