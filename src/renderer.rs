/*
 * Renderer Module
 *
 * This module handles the rendering of the flocking simulation. It consumes
 * an immutable view of the agent collection after the step and draws, for
 * each agent: a filled circle, a heading segment scaled by speed, and a
 * faint line to each current neighbor.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::ui;
use crate::HEADING_SCALE;

// Map world coordinates (top-left origin, y down) onto nannou's centered
// screen coordinates
fn world_to_screen(point: Point2, window_rect: Rect) -> Point2 {
    pt2(window_rect.left() + point.x, window_rect.top() - point.y)
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    // Begin drawing
    let draw = app.draw();

    // Clear the background
    draw.background().color(BLACK);

    // Get the window rectangle
    let window_rect = app.window_rect();

    // Neighbor links first, so they sit under the agents. Symmetry means
    // every agent's link to every neighbor exists in both directions, so
    // each undirected pair is drawn once instead of overpainting the same
    // segment twice.
    if model.params.show_neighbor_links {
        for (i, agent) in model.sim.agents.iter().enumerate() {
            for &j in &agent.neighbors {
                if j <= i {
                    continue;
                }

                draw.line()
                    .start(world_to_screen(agent.position, window_rect))
                    .end(world_to_screen(model.sim.agents[j].position, window_rect))
                    .weight(1.0)
                    .color(rgba(1.0, 0.2, 0.2, 0.15));
            }
        }
    }

    for agent in &model.sim.agents {
        let screen_pos = world_to_screen(agent.position, window_rect);

        // Filled circle with the agent's cosmetic attributes
        let fill = Hsla {
            color: agent.color,
            alpha: agent.opacity,
        };
        draw.ellipse().xy(screen_pos).radius(agent.radius).color(fill);

        // Heading segment along the velocity, length proportional to speed
        let heading = agent.velocity.y.atan2(agent.velocity.x);
        let magnitude = agent.velocity.length() * HEADING_SCALE;
        let tip = pt2(
            agent.position.x + heading.cos() * magnitude,
            agent.position.y + heading.sin() * magnitude,
        );

        draw.line()
            .start(screen_pos)
            .end(world_to_screen(tip, window_rect))
            .weight(1.0)
            .color(WHITE);
    }

    // Draw debug info if enabled
    if model.params.show_debug {
        ui::draw_debug_info(&draw, &model.debug_info, window_rect, model.sim.agents.len());
    }

    // Finish drawing
    draw.to_frame(app, &frame).unwrap();

    // Draw the egui UI
    model.egui.draw_to_frame(&frame).unwrap();
}
