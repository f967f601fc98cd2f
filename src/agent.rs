/*
 * Agent Module
 *
 * This module defines the Agent struct and its per-agent behavior.
 * Each agent follows three flocking rules:
 * 1. Alignment: Accelerate towards the average heading of neighbors
 * 2. Cohesion: Accelerate towards the average position of neighbors
 * 3. Separation: Reserved; currently contributes nothing
 */

use nannou::prelude::*;
use rand::Rng;

#[derive(Clone)]
pub struct Agent {
    pub position: Point2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    // Rendering-only attributes, fixed after creation
    pub radius: f32,
    pub color: Hsl,
    pub opacity: f32,
    // Indices of agents within the interaction radius, rebuilt every step
    pub neighbors: Vec<usize>,
}

impl Agent {
    pub fn new(x: f32, y: f32) -> Self {
        let mut rng = rand::thread_rng();

        // Random initial velocity and acceleration
        let velocity = vec2(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
        let acceleration = vec2(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));

        // Blue-ish hue band (200..260 degrees), stored in turns
        let hue = rng.gen_range(200.0..260.0) / 360.0;

        Self {
            position: pt2(x, y),
            velocity,
            acceleration,
            radius: rng.gen_range(3.0..6.0),
            color: hsl(hue, 0.5, 0.6),
            opacity: 0.5,
            neighbors: Vec::new(),
        }
    }

    // Reflect velocity components whose predicted next position would leave
    // the viewport. One-step look-ahead only; the position itself is never
    // clamped, so an agent can overshoot by up to one frame of travel.
    pub fn bounce_edges(&mut self, delta: f32, width: f32, height: f32) {
        let next_x = self.position.x + self.velocity.x * delta;
        let next_y = self.position.y + self.velocity.y * delta;

        if next_x >= width || next_x <= 0.0 {
            self.velocity.x = -self.velocity.x;
        }
        if next_y >= height || next_y <= 0.0 {
            self.velocity.y = -self.velocity.y;
        }
    }

    // Calculate alignment acceleration (point along the average heading of neighbors)
    //
    // The default averages raw atan2 angles arithmetically, which is wrong
    // near the +/-pi discontinuity (two neighbors at +179 and -179 degrees
    // average to ~0, not ~180). That matches the reference behavior; the
    // circular_mean flag switches to the vector-sum mean instead.
    pub fn alignment(
        &self,
        velocities: &[Vec2],
        neighbors: &[usize],
        steer_force: f32,
        circular_mean: bool,
    ) -> Vec2 {
        if neighbors.is_empty() {
            return Vec2::ZERO;
        }

        let heading = if circular_mean {
            let mut sum = Vec2::ZERO;
            for &j in neighbors {
                let angle = velocities[j].y.atan2(velocities[j].x);
                sum += vec2(angle.cos(), angle.sin());
            }
            sum.y.atan2(sum.x)
        } else {
            let mut total = 0.0;
            for &j in neighbors {
                total += velocities[j].y.atan2(velocities[j].x);
            }
            total / neighbors.len() as f32
        };

        vec2(heading.cos(), heading.sin()) * steer_force
    }

    // Calculate cohesion acceleration (point towards the centroid of neighbors)
    pub fn cohesion(&self, positions: &[Point2], neighbors: &[usize], steer_force: f32) -> Vec2 {
        if neighbors.is_empty() {
            return Vec2::ZERO;
        }

        let mut centroid = Vec2::ZERO;
        for &j in neighbors {
            centroid += vec2(positions[j].x, positions[j].y);
        }
        centroid /= neighbors.len() as f32;

        let heading = (centroid.y - self.position.y).atan2(centroid.x - self.position.x);
        vec2(heading.cos(), heading.sin()) * steer_force
    }

    // Separation is reserved for future use. It is computed alongside the
    // other behaviors but contributes a zero vector and stays out of the
    // blend, matching the reference formula.
    pub fn separation(&self, _positions: &[Point2], _neighbors: &[usize]) -> Vec2 {
        Vec2::ZERO
    }

    // Integrate velocity and position over one time slice
    pub fn integrate(&mut self, delta: f32, max_speed: f32) {
        // Update velocity, clamping each axis independently
        self.velocity += self.acceleration * delta;
        self.velocity.x = self.velocity.x.clamp(-max_speed, max_speed);
        self.velocity.y = self.velocity.y.clamp(-max_speed, max_speed);

        // Update position
        self.position += self.velocity * delta;
    }
}
