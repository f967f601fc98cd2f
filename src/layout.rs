/*
 * Layout Module
 *
 * This module produces the initial agent collection from the viewport
 * dimensions and a density parameter (agents per axis). Positions are
 * deterministic lattices; velocity, acceleration and cosmetic attributes
 * are randomized per agent at construction.
 */

use crate::agent::Agent;

// Uniform lattice spanning the full viewport: density^2 agents at
// ((i / density) * w, (j / density) * h) for i, j in [0, density - 1].
// Densities below 1 are coerced to 1.
pub fn make_grid(width: f32, height: f32, density: usize) -> Vec<Agent> {
    let density = density.max(1);

    let mut agents = Vec::with_capacity(density * density);
    for i in 0..density {
        for j in 0..density {
            let x = (i as f32 / density as f32) * width;
            let y = (j as f32 / density as f32) * height;
            agents.push(Agent::new(x, y));
        }
    }
    agents
}

// The same lattice confined to the central 50% of each axis
pub fn make_centered_grid(width: f32, height: f32, density: usize) -> Vec<Agent> {
    let density = density.max(1);

    let mut agents = Vec::with_capacity(density * density);
    for i in 0..density {
        for j in 0..density {
            let x = width / 4.0 + (i as f32 / density as f32) * (width / 2.0);
            let y = height / 4.0 + (j as f32 / density as f32) * (height / 2.0);
            agents.push(Agent::new(x, y));
        }
    }
    agents
}
