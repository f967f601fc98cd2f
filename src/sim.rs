/*
 * Simulation Module
 *
 * This module advances the agent collection by one time slice per frame:
 * neighbor discovery, behavior blending, velocity/position integration and
 * edge handling.
 *
 * Reads and writes are split into phases: positions and velocities are
 * snapshotted once, neighbor sets are rebuilt from that snapshot, and only
 * then are agents mutated. Every agent therefore sees the prior frame's
 * complete state regardless of iteration order, which also makes the
 * parallel path sound. (The canvas reference instead mutated in place, so
 * later agents saw earlier agents' updated state within the same step; the
 * visual difference is negligible.)
 */

use nannou::prelude::*;
use rayon::prelude::*;

use crate::agent::Agent;
use crate::params::SimulationParams;
use crate::spatial_grid::SpatialGrid;
use crate::MAX_DELTA;

// Clamp a raw frame delta (seconds) to bound integration error across
// large pauses, e.g. a backgrounded window.
pub fn clamp_delta(elapsed: f32) -> f32 {
    elapsed.min(MAX_DELTA)
}

// Metrics from a single step, surfaced in the debug overlay
#[derive(Default)]
pub struct StepStats {
    pub neighbor_links: usize,
    pub chunk_size: usize,
}

pub struct Simulation {
    pub agents: Vec<Agent>,
    grid: SpatialGrid,
}

impl Simulation {
    pub fn new(agents: Vec<Agent>, width: f32, height: f32, interaction_radius: f32) -> Self {
        Self {
            agents,
            grid: SpatialGrid::new(interaction_radius, width, height),
        }
    }

    // Replace the agent collection (layout regeneration)
    pub fn reset(&mut self, agents: Vec<Agent>) {
        self.agents = agents;
    }

    // Advance every agent by one time slice
    pub fn step(
        &mut self,
        delta: f32,
        width: f32,
        height: f32,
        params: &SimulationParams,
    ) -> StepStats {
        // Snapshot kinematic state so all reads see the prior frame
        let positions: Vec<Point2> = self.agents.iter().map(|a| a.position).collect();
        let velocities: Vec<Vec2> = self.agents.iter().map(|a| a.velocity).collect();

        let neighbor_links = self.rebuild_neighbors(&positions, width, height, params);

        let mut stats = StepStats {
            neighbor_links,
            chunk_size: 0,
        };

        if params.enable_parallel {
            // Process agents in chunks to reduce synchronization overhead
            let chunk_size =
                std::cmp::max(self.agents.len() / rayon::current_num_threads(), 1);
            stats.chunk_size = chunk_size;

            self.agents.par_chunks_mut(chunk_size).for_each(|chunk| {
                for agent in chunk {
                    step_agent(agent, &positions, &velocities, delta, width, height, params);
                }
            });
        } else {
            for agent in &mut self.agents {
                step_agent(agent, &positions, &velocities, delta, width, height, params);
            }
        }

        stats
    }

    // Rebuild every agent's neighbor set from the position snapshot.
    // Recomputed from scratch each step; the sets are a derived cache, not
    // authoritative state. Returns the number of directed neighbor links.
    //
    // Both paths apply the same predicate (distance <= radius, not self) to
    // a stable snapshot, so the sets are symmetric by construction.
    fn rebuild_neighbors(
        &mut self,
        positions: &[Point2],
        width: f32,
        height: f32,
        params: &SimulationParams,
    ) -> usize {
        let radius = params.interaction_radius;
        let radius_sq = radius * radius;
        let mut links = 0;

        if params.enable_spatial_grid {
            self.grid.resize(radius, width, height);
            self.grid.clear();
            for (i, position) in positions.iter().enumerate() {
                self.grid.insert(i, *position);
            }

            let mut candidates = Vec::new();
            for i in 0..self.agents.len() {
                let mut set = std::mem::take(&mut self.agents[i].neighbors);
                set.clear();

                self.grid.nearby_indices(positions[i], &mut candidates);
                for &j in &candidates {
                    if j != i && positions[i].distance_squared(positions[j]) <= radius_sq {
                        set.push(j);
                    }
                }

                links += set.len();
                self.agents[i].neighbors = set;
            }
        } else {
            // Naive full pair scan, O(n^2)
            for i in 0..self.agents.len() {
                let mut set = std::mem::take(&mut self.agents[i].neighbors);
                set.clear();

                for j in 0..positions.len() {
                    if j != i && positions[i].distance_squared(positions[j]) <= radius_sq {
                        set.push(j);
                    }
                }

                links += set.len();
                self.agents[i].neighbors = set;
            }
        }

        links
    }
}

// Advance a single agent using the prior frame's snapshot
fn step_agent(
    agent: &mut Agent,
    positions: &[Point2],
    velocities: &[Vec2],
    delta: f32,
    width: f32,
    height: f32,
    params: &SimulationParams,
) {
    // Bounce decisions read the pre-behavior velocity, before the blend
    // below recomputes acceleration and integration changes velocity
    agent.bounce_edges(delta, width, height);

    if !agent.neighbors.is_empty() {
        let alignment = agent.alignment(
            velocities,
            &agent.neighbors,
            params.steer_force,
            params.circular_mean,
        );
        let cohesion = agent.cohesion(positions, &agent.neighbors, params.steer_force);
        let _separation = agent.separation(positions, &agent.neighbors);

        // Separation stays out of the average until it produces a real force
        agent.acceleration = (alignment + cohesion) / 2.0;
    }
    // Empty neighbor set: acceleration carries over from the previous step

    agent.integrate(delta, params.max_speed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout;
    use crate::MAX_SPEED;

    fn agent_at(x: f32, y: f32, vx: f32, vy: f32) -> Agent {
        Agent {
            position: pt2(x, y),
            velocity: vec2(vx, vy),
            acceleration: Vec2::ZERO,
            radius: 4.0,
            color: hsl(0.6, 0.5, 0.6),
            opacity: 0.5,
            neighbors: Vec::new(),
        }
    }

    fn sim_with(agents: Vec<Agent>, params: &SimulationParams) -> Simulation {
        Simulation::new(agents, 800.0, 600.0, params.interaction_radius)
    }

    #[test]
    fn delta_is_clamped_to_the_maximum_step() {
        assert_eq!(clamp_delta(5.0), MAX_DELTA);
        assert_eq!(clamp_delta(0.01), 0.01);
    }

    #[test]
    fn velocity_stays_bounded_per_axis_across_steps() {
        let params = SimulationParams::default();
        // Dense lattice so every agent has many neighbors
        let mut sim = sim_with(layout::make_grid(200.0, 200.0, 5), &params);

        for _ in 0..60 {
            sim.step(MAX_DELTA, 800.0, 600.0, &params);
            for agent in &sim.agents {
                assert!(agent.velocity.x.abs() <= MAX_SPEED);
                assert!(agent.velocity.y.abs() <= MAX_SPEED);
            }
        }
    }

    fn assert_symmetric_without_self(sim: &Simulation) {
        for (i, agent) in sim.agents.iter().enumerate() {
            assert!(!agent.neighbors.contains(&i), "agent {} neighbors itself", i);
            for &j in &agent.neighbors {
                assert!(
                    sim.agents[j].neighbors.contains(&i),
                    "link {} -> {} is not symmetric",
                    i,
                    j
                );
            }
        }
    }

    #[test]
    fn neighbor_sets_are_symmetric_with_spatial_grid() {
        let mut params = SimulationParams::default();
        params.enable_spatial_grid = true;
        let mut sim = sim_with(layout::make_grid(800.0, 600.0, 6), &params);
        sim.step(MAX_DELTA, 800.0, 600.0, &params);
        assert_symmetric_without_self(&sim);
    }

    #[test]
    fn neighbor_sets_are_symmetric_with_naive_scan() {
        let mut params = SimulationParams::default();
        params.enable_spatial_grid = false;
        let mut sim = sim_with(layout::make_grid(800.0, 600.0, 6), &params);
        sim.step(MAX_DELTA, 800.0, 600.0, &params);
        assert_symmetric_without_self(&sim);
    }

    #[test]
    fn neighbor_discovery_uses_the_interaction_radius() {
        let params = SimulationParams::default();
        let agents = vec![
            agent_at(100.0, 100.0, 0.0, 0.0),
            agent_at(199.0, 100.0, 0.0, 0.0), // within 100
            agent_at(500.0, 100.0, 0.0, 0.0), // outside
        ];
        let mut sim = sim_with(agents, &params);
        sim.step(MAX_DELTA, 800.0, 600.0, &params);

        assert_eq!(sim.agents[0].neighbors, vec![1]);
        assert_eq!(sim.agents[1].neighbors, vec![0]);
        assert!(sim.agents[2].neighbors.is_empty());
    }

    #[test]
    fn predicted_edge_exit_flips_velocity() {
        let params = SimulationParams::default();
        // Predicted x is 1 + (-10 * 0.1) = 0, which triggers the bounce
        let mut sim = sim_with(vec![agent_at(1.0, 300.0, -10.0, 0.0)], &params);
        sim.step(0.1, 800.0, 600.0, &params);

        assert_eq!(sim.agents[0].velocity.x, 10.0);
    }

    #[test]
    fn acceleration_carries_over_when_no_neighbors_exist() {
        let params = SimulationParams::default();
        let mut agent = agent_at(400.0, 300.0, 1.0, 1.0);
        agent.acceleration = vec2(5.0, -3.0);
        let mut sim = sim_with(vec![agent], &params);

        sim.step(MAX_DELTA, 800.0, 600.0, &params);
        assert_eq!(sim.agents[0].acceleration, vec2(5.0, -3.0));
    }

    #[test]
    fn grid_and_naive_paths_produce_matching_states() {
        let agents: Vec<Agent> = (0..40)
            .map(|k| {
                let x = 30.0 + (k % 8) as f32 * 45.0;
                let y = 40.0 + (k / 8) as f32 * 60.0;
                agent_at(x, y, (k as f32 * 0.7) - 14.0, 7.0 - (k as f32 * 0.3))
            })
            .collect();

        let mut grid_params = SimulationParams::default();
        grid_params.enable_spatial_grid = true;
        let mut naive_params = SimulationParams::default();
        naive_params.enable_spatial_grid = false;

        let mut grid_sim = sim_with(agents.clone(), &grid_params);
        let mut naive_sim = sim_with(agents, &naive_params);

        for _ in 0..10 {
            grid_sim.step(MAX_DELTA, 800.0, 600.0, &grid_params);
            naive_sim.step(MAX_DELTA, 800.0, 600.0, &naive_params);
        }

        for (a, b) in grid_sim.agents.iter().zip(naive_sim.agents.iter()) {
            assert!((a.position - b.position).length() < 1e-3);
            assert!((a.velocity - b.velocity).length() < 1e-3);
        }
    }

    #[test]
    fn snapshot_reads_make_the_step_order_independent() {
        let pair = vec![
            agent_at(100.0, 100.0, 10.0, 0.0),
            agent_at(150.0, 100.0, -10.0, 0.0),
        ];
        let reversed: Vec<Agent> = pair.iter().rev().cloned().collect();

        let params = SimulationParams::default();
        let mut forward = sim_with(pair, &params);
        let mut backward = sim_with(reversed, &params);

        forward.step(MAX_DELTA, 800.0, 600.0, &params);
        backward.step(MAX_DELTA, 800.0, 600.0, &params);

        // Agent i of one run corresponds to agent (1 - i) of the other
        for i in 0..2 {
            assert_eq!(forward.agents[i].position, backward.agents[1 - i].position);
            assert_eq!(forward.agents[i].velocity, backward.agents[1 - i].velocity);
        }
    }

    #[test]
    fn parallel_path_matches_sequential_path() {
        let agents: Vec<Agent> = (0..30)
            .map(|k| agent_at(50.0 + k as f32 * 20.0, 300.0, 5.0, -5.0))
            .collect();

        let mut seq_params = SimulationParams::default();
        seq_params.enable_parallel = false;
        let mut par_params = SimulationParams::default();
        par_params.enable_parallel = true;

        let mut seq = sim_with(agents.clone(), &seq_params);
        let mut par = sim_with(agents, &par_params);

        for _ in 0..5 {
            seq.step(MAX_DELTA, 800.0, 600.0, &seq_params);
            par.step(MAX_DELTA, 800.0, 600.0, &par_params);
        }

        for (a, b) in seq.agents.iter().zip(par.agents.iter()) {
            assert_eq!(a.position, b.position);
            assert_eq!(a.velocity, b.velocity);
        }
    }

    #[test]
    fn steer_force_parameter_scales_the_blended_acceleration() {
        let agents = vec![
            agent_at(100.0, 100.0, 5.0, 0.0),
            agent_at(150.0, 100.0, 5.0, 0.0),
        ];

        let mut params = SimulationParams::default();
        params.steer_force = 0.0;
        let mut sim = sim_with(agents, &params);

        sim.step(MAX_DELTA, 800.0, 600.0, &params);

        // Both behaviors are scaled by the steer force, so zero force means
        // zero blended acceleration despite the populated neighbor set
        assert!(!sim.agents[0].neighbors.is_empty());
        assert_eq!(sim.agents[0].acceleration, Vec2::ZERO);
    }

    #[test]
    fn step_reports_directed_neighbor_links() {
        let params = SimulationParams::default();
        let agents = vec![
            agent_at(100.0, 100.0, 0.0, 0.0),
            agent_at(150.0, 100.0, 0.0, 0.0),
            agent_at(600.0, 500.0, 0.0, 0.0),
        ];
        let mut sim = sim_with(agents, &params);

        let stats = sim.step(MAX_DELTA, 800.0, 600.0, &params);
        assert_eq!(stats.neighbor_links, 2);
    }
}
